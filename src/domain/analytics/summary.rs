//! Read-back aggregates over the event log.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::domain::foundation::{ElementId, UserId, VariantId};
use crate::domain::lesson::ElementType;

use super::{AbTestVariant, AnalyticsEvent, EventKind};

/// Number of elements listed in each ranking.
pub const RANKING_SIZE: usize = 5;

/// Completion rate below which an element needs attention.
pub const NEEDS_IMPROVEMENT_BELOW: f64 = 0.5;

fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64).min(1.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Engagement figures for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementMetrics {
    pub element_id: ElementId,
    pub element_type: ElementType,
    pub starts: usize,
    pub completions: usize,
    pub abandonments: usize,
    pub errors: usize,
    pub retries: usize,
    pub hints_viewed: usize,
    pub total_interactions: usize,
    pub completion_rate: f64,
    pub average_time_spent: f64,
}

impl ElementMetrics {
    /// Metrics per element, ordered by element id.
    pub fn collect(events: &[AnalyticsEvent]) -> Vec<ElementMetrics> {
        let mut grouped: BTreeMap<ElementId, (ElementType, Vec<&AnalyticsEvent>)> = BTreeMap::new();
        for event in events {
            grouped
                .entry(event.element_id)
                .or_insert_with(|| (event.element_type, Vec::new()))
                .1
                .push(event);
        }
        grouped
            .into_iter()
            .map(|(element_id, (element_type, events))| {
                Self::for_element(element_id, element_type, &events)
            })
            .collect()
    }

    fn for_element(
        element_id: ElementId,
        element_type: ElementType,
        events: &[&AnalyticsEvent],
    ) -> ElementMetrics {
        let count = |kind: EventKind| events.iter().filter(|e| e.kind == kind).count();
        let starts = count(EventKind::ElementStarted);
        let completions = count(EventKind::ElementCompleted);
        let times: Vec<f64> = events.iter().filter_map(|e| e.time_spent_secs()).collect();

        ElementMetrics {
            element_id,
            element_type,
            starts,
            completions,
            abandonments: count(EventKind::ElementAbandoned),
            errors: count(EventKind::Error),
            retries: count(EventKind::Retry),
            hints_viewed: count(EventKind::HintViewed),
            total_interactions: events.len(),
            completion_rate: rate(completions, starts),
            average_time_spent: mean(&times),
        }
    }
}

/// Starts and completions on one UTC day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementTrend {
    pub date: NaiveDate,
    pub starts: usize,
    pub completions: usize,
    pub score: f64,
}

/// Daily engagement, oldest day first. Days without events are absent.
pub fn engagement_trends(events: &[AnalyticsEvent]) -> Vec<EngagementTrend> {
    let mut days: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
    for event in events {
        let entry = days.entry(event.timestamp.date()).or_default();
        match event.kind {
            EventKind::ElementStarted => entry.0 += 1,
            EventKind::ElementCompleted => entry.1 += 1,
            _ => {}
        }
    }
    days.into_iter()
        .map(|(date, (starts, completions))| EngagementTrend {
            date,
            starts,
            completions,
            score: completions as f64 / starts.max(1) as f64,
        })
        .collect()
}

/// Best and worst elements by completion rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRankings {
    pub top_performers: Vec<ElementMetrics>,
    pub needs_improvement: Vec<ElementMetrics>,
}

/// Ranks elements by completion rate, highest first; ties by element id.
///
/// `needs_improvement` holds the lowest-ranked elements under
/// [`NEEDS_IMPROVEMENT_BELOW`], still in descending order.
pub fn rank_elements(metrics: &[ElementMetrics]) -> ElementRankings {
    let mut sorted = metrics.to_vec();
    sorted.sort_by(|a, b| {
        b.completion_rate
            .total_cmp(&a.completion_rate)
            .then(a.element_id.cmp(&b.element_id))
    });

    let top_performers = sorted.iter().take(RANKING_SIZE).cloned().collect();
    let struggling: Vec<ElementMetrics> = sorted
        .into_iter()
        .filter(|m| m.completion_rate < NEEDS_IMPROVEMENT_BELOW)
        .collect();
    let skip = struggling.len().saturating_sub(RANKING_SIZE);
    let needs_improvement = struggling.into_iter().skip(skip).collect();

    ElementRankings {
        top_performers,
        needs_improvement,
    }
}

/// Outcome of one experiment arm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantResults {
    pub variant_id: VariantId,
    pub variant_name: String,
    pub sample_size: usize,
    pub completions: usize,
    pub completion_rate: f64,
    pub average_time_spent: f64,
}

/// Results for each variant, from events whose payload names the variant.
///
/// Sample size counts distinct learners who started; completions count
/// distinct learners who completed.
pub fn variant_results(variants: &[AbTestVariant], events: &[AnalyticsEvent]) -> Vec<VariantResults> {
    variants
        .iter()
        .map(|variant| {
            let key = variant.id.to_string();
            let matched: Vec<&AnalyticsEvent> = events
                .iter()
                .filter(|e| e.variant_id() == Some(key.as_str()))
                .collect();
            let learners = |kind: EventKind| -> HashSet<&UserId> {
                matched
                    .iter()
                    .filter(|e| e.kind == kind)
                    .map(|e| &e.user_id)
                    .collect()
            };
            let sample_size = learners(EventKind::ElementStarted).len();
            let completions = learners(EventKind::ElementCompleted).len();
            let times: Vec<f64> = matched.iter().filter_map(|e| e.time_spent_secs()).collect();

            VariantResults {
                variant_id: variant.id,
                variant_name: variant.name.clone(),
                sample_size,
                completions,
                completion_rate: rate(completions, sample_size),
                average_time_spent: mean(&times),
            }
        })
        .collect()
}

/// Everything the analytics dashboard shows for a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub metrics: Vec<ElementMetrics>,
    pub trends: Vec<EngagementTrend>,
    pub top_performers: Vec<ElementMetrics>,
    pub needs_improvement: Vec<ElementMetrics>,
}

impl DashboardSummary {
    pub fn build(events: &[AnalyticsEvent]) -> Self {
        let metrics = ElementMetrics::collect(events);
        let rankings = rank_elements(&metrics);
        Self {
            total_events: events.len(),
            trends: engagement_trends(events),
            top_performers: rankings.top_performers,
            needs_improvement: rankings.needs_improvement,
            metrics,
        }
    }
}
