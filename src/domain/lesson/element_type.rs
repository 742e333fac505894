//! ElementType - the closed set of interactive element kinds.
//!
//! Each kind is stored in `interactive_elements.type` as a snake_case tag and
//! selects both the configuration shape (see [`super::ElementConfiguration`])
//! and the renderer on the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tag that does not name any known element kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown interactive element type: '{0}'")]
pub struct UnknownElementType(pub String);

/// Which configuration payload a kind carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationShape {
    CalloutBox,
    Chat,
    KnowledgeCheck,
    Scenarios,
    SequenceSorter,
    AiTool,
    Tracker,
    AdminTool,
}

macro_rules! element_types {
    ($($variant:ident => $tag:literal,)+) => {
        /// Kind of interactive element.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ElementType {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl ElementType {
            /// Every known kind, alphabetical by tag.
            pub const ALL: &'static [ElementType] = &[$(ElementType::$variant,)+];

            /// Wire tag as stored in the database.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ElementType::$variant => $tag,)+
                }
            }
        }

        impl FromStr for ElementType {
            type Err = UnknownElementType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(ElementType::$variant),)+
                    other => Err(UnknownElementType(other.to_string())),
                }
            }
        }
    };
}

element_types! {
    AgendaCreator => "agenda_creator",
    AiContentGenerator => "ai_content_generator",
    AiEmailCampaignWriter => "ai_email_campaign_writer",
    AiEmailComposer => "ai_email_composer",
    AiGovernanceBuilder => "ai_governance_builder",
    AiImpactStoryCreator => "ai_impact_story_creator",
    AiReadinessAssessor => "ai_readiness_assessor",
    AiSocialMediaGenerator => "ai_social_media_generator",
    AutomatedElementEnhancer => "automated_element_enhancer",
    CalloutBox => "callout_box",
    ChangeLeader => "change_leader",
    ChapterBuilderAgent => "chapter_builder_agent",
    ContentAuditAgent => "content_audit_agent",
    ContentCalendarBuilder => "content_calendar_builder",
    ContentRepurposer => "content_repurposer",
    DataAnalyzer => "data_analyzer",
    DataEntryAutomator => "data_entry_automator",
    DataStoryteller => "data_storyteller",
    DatabaseDebugger => "database_debugger",
    DifficultConversationHelper => "difficult_conversation_helper",
    DocumentGenerator => "document_generator",
    DocumentImprover => "document_improver",
    DonorInsightsAnalyzer => "donor_insights_analyzer",
    DonorPersonaGenerator => "donor_persona_generator",
    ElementWorkflowCoordinator => "element_workflow_coordinator",
    EmailAutomationBuilder => "email_automation_builder",
    EngagementPredictor => "engagement_predictor",
    GrantWritingAssistantDemo => "grant_writing_assistant_demo",
    HashtagOptimizer => "hashtag_optimizer",
    ImpactDashboardCreator => "impact_dashboard_creator",
    ImpactMeasurement => "impact_measurement",
    InformationSummarizer => "information_summarizer",
    InnovationRoadmap => "innovation_roadmap",
    IntegrationBuilder => "integration_builder",
    InteractiveElementAuditor => "interactive_element_auditor",
    InteractiveElementBuilder => "interactive_element_builder",
    KnowledgeCheck => "knowledge_check",
    KpiTracker => "kpi_tracker",
    LyraChat => "lyra_chat",
    MeetingPrepAssistant => "meeting_prep_assistant",
    MultipleChoiceScenarios => "multiple_choice_scenarios",
    ProcessOptimizer => "process_optimizer",
    ProjectPlanner => "project_planner",
    PromptBuilder => "prompt_builder",
    ReportBuilder => "report_builder",
    ReportGenerator => "report_generator",
    ResearchAssistant => "research_assistant",
    SequenceSorter => "sequence_sorter",
    SocialMediaGenerator => "social_media_generator",
    StorytellingAgent => "storytelling_agent",
    SubjectLineTester => "subject_line_tester",
    SummaryGenerator => "summary_generator",
    SurveyCreator => "survey_creator",
    TaskPrioritizer => "task_prioritizer",
    TaskScheduler => "task_scheduler",
    TeamAiTrainer => "team_ai_trainer",
    TemplateCreator => "template_creator",
    TimeTracker => "time_tracker",
    TrendIdentifier => "trend_identifier",
    WorkflowAutomator => "workflow_automator",
}

impl ElementType {
    /// Authoring and debugging tools that must never be shown to learners.
    pub fn is_admin_tool(&self) -> bool {
        matches!(
            self,
            ElementType::AutomatedElementEnhancer
                | ElementType::ChapterBuilderAgent
                | ElementType::ContentAuditAgent
                | ElementType::DatabaseDebugger
                | ElementType::ElementWorkflowCoordinator
                | ElementType::GrantWritingAssistantDemo
                | ElementType::InteractiveElementAuditor
                | ElementType::InteractiveElementBuilder
        )
    }

    /// Kinds whose completion is graded against an answer key.
    pub fn is_assessment(&self) -> bool {
        matches!(
            self,
            ElementType::KnowledgeCheck
                | ElementType::MultipleChoiceScenarios
                | ElementType::SequenceSorter
        )
    }

    /// Configuration payload this kind carries.
    pub fn configuration_shape(&self) -> ConfigurationShape {
        match self {
            ElementType::CalloutBox => ConfigurationShape::CalloutBox,
            ElementType::LyraChat => ConfigurationShape::Chat,
            ElementType::KnowledgeCheck => ConfigurationShape::KnowledgeCheck,
            ElementType::MultipleChoiceScenarios => ConfigurationShape::Scenarios,
            ElementType::SequenceSorter => ConfigurationShape::SequenceSorter,
            ElementType::TimeTracker | ElementType::KpiTracker | ElementType::ImpactMeasurement => {
                ConfigurationShape::Tracker
            }
            other if other.is_admin_tool() => ConfigurationShape::AdminTool,
            _ => ConfigurationShape::AiTool,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tag_matches_as_str_for_every_kind() {
        for kind in ElementType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn from_str_roundtrips_every_kind() {
        for kind in ElementType::ALL {
            assert_eq!(kind.as_str().parse::<ElementType>().unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "invalid_type".parse::<ElementType>().unwrap_err();
        assert_eq!(err, UnknownElementType("invalid_type".to_string()));
        assert!(serde_json::from_str::<ElementType>("\"invalid_type\"").is_err());
    }

    #[test]
    fn catalogue_has_sixty_kinds() {
        assert_eq!(ElementType::ALL.len(), 60);
    }

    #[test]
    fn admin_tools_use_admin_shape() {
        assert!(ElementType::InteractiveElementAuditor.is_admin_tool());
        assert_eq!(
            ElementType::DatabaseDebugger.configuration_shape(),
            ConfigurationShape::AdminTool
        );
        assert!(!ElementType::AiEmailComposer.is_admin_tool());
    }

    #[test]
    fn generators_use_ai_tool_shape() {
        assert_eq!(
            ElementType::AiEmailComposer.configuration_shape(),
            ConfigurationShape::AiTool
        );
        assert_eq!(
            ElementType::DocumentGenerator.configuration_shape(),
            ConfigurationShape::AiTool
        );
    }

    #[test]
    fn assessments_are_flagged() {
        assert!(ElementType::KnowledgeCheck.is_assessment());
        assert!(!ElementType::LyraChat.is_assessment());
    }
}
