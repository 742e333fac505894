//! Lesson sequencing - merges content blocks and interactive elements into
//! one presentation order.
//!
//! The authored `order_index` is the only ordering signal. Items sharing an
//! index are ordered content first, then interactive, then by ascending id,
//! which makes the result independent of the order rows were fetched in.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContentBlockId, ElementId};

use super::{ContentBlock, InteractiveElement};

/// Origin of a sequenced item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    Content,
    Interactive,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Content => "content",
            ItemKind::Interactive => "interactive",
        }
    }
}

/// Reference to a row that can be placed in a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ItemRef {
    Content(ContentBlockId),
    Interactive(ElementId),
}

/// One entry of a lesson's presentation order.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencedItem {
    Content(ContentBlock),
    Interactive(InteractiveElement),
}

impl SequencedItem {
    pub fn order_index(&self) -> i32 {
        match self {
            SequencedItem::Content(block) => block.order_index,
            SequencedItem::Interactive(element) => element.order_index,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            SequencedItem::Content(_) => ItemKind::Content,
            SequencedItem::Interactive(_) => ItemKind::Interactive,
        }
    }

    /// Raw row id; only unique together with [`Self::kind`].
    pub fn raw_id(&self) -> i64 {
        match self {
            SequencedItem::Content(block) => block.id.value(),
            SequencedItem::Interactive(element) => element.id.value(),
        }
    }

    pub fn item_ref(&self) -> ItemRef {
        match self {
            SequencedItem::Content(block) => ItemRef::Content(block.id),
            SequencedItem::Interactive(element) => ItemRef::Interactive(element.id),
        }
    }

    fn sort_key(&self) -> (i32, ItemKind, i64) {
        (self.order_index(), self.kind(), self.raw_id())
    }
}

/// Two or more items sharing one `order_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCollision {
    pub order_index: i32,
    pub items: Vec<(ItemKind, i64)>,
}

/// Ordered items of one lesson.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LessonSequence {
    items: Vec<SequencedItem>,
}

impl LessonSequence {
    pub fn items(&self) -> &[SequencedItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequencedItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Interactive elements in presentation order.
    pub fn interactive_elements(&self) -> impl Iterator<Item = &InteractiveElement> {
        self.items.iter().filter_map(|item| match item {
            SequencedItem::Interactive(element) => Some(element),
            SequencedItem::Content(_) => None,
        })
    }

    pub fn element_ids(&self) -> Vec<ElementId> {
        self.interactive_elements().map(|e| e.id).collect()
    }

    /// Indices used by more than one item, ascending.
    pub fn duplicate_indices(&self) -> Vec<IndexCollision> {
        let mut by_index: BTreeMap<i32, Vec<(ItemKind, i64)>> = BTreeMap::new();
        for item in &self.items {
            by_index
                .entry(item.order_index())
                .or_default()
                .push((item.kind(), item.raw_id()));
        }
        by_index
            .into_iter()
            .filter(|(_, items)| items.len() > 1)
            .map(|(order_index, items)| IndexCollision { order_index, items })
            .collect()
    }

    pub fn into_items(self) -> Vec<SequencedItem> {
        self.items
    }
}

impl IntoIterator for LessonSequence {
    type Item = SequencedItem;
    type IntoIter = std::vec::IntoIter<SequencedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a LessonSequence {
    type Item = &'a SequencedItem;
    type IntoIter = std::slice::Iter<'a, SequencedItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds lesson sequences.
pub struct ContentSequencer;

impl ContentSequencer {
    /// Merges `blocks` with the active subset of `elements` by `order_index`.
    pub fn sequence(blocks: Vec<ContentBlock>, elements: Vec<InteractiveElement>) -> LessonSequence {
        let mut items: Vec<SequencedItem> = blocks
            .into_iter()
            .map(SequencedItem::Content)
            .chain(
                elements
                    .into_iter()
                    .filter(|e| e.is_active)
                    .map(SequencedItem::Interactive),
            )
            .collect();

        items.sort_by(compare);
        LessonSequence { items }
    }
}

fn compare(a: &SequencedItem, b: &SequencedItem) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}
