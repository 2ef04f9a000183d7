//! Head management: merge tag declarations into one document head.
//!
//! Several parts of a page may declare head tags. [`HeadCollector`] keeps one
//! tag per [`TagKey`]: a later declaration replaces the earlier one at the
//! earlier position, and new keys are appended in commit order.

use std::collections::HashMap;

use crate::render::render_head_html;
use crate::tag::{HeadTag, TagKey};

/// A capability that accepts an ordered tag sequence and commits it to a document head.
pub trait HeadSink {
    fn commit(&mut self, tags: &[HeadTag]);
}

#[derive(Debug, Default, Clone)]
pub struct HeadCollector {
    tags: Vec<HeadTag>,
    index: HashMap<TagKey, usize>,
}

impl HeadCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: HeadTag) {
        let key = tag.key();
        match self.index.get(&key) {
            Some(&pos) => {
                tracing::trace!(?key, "head tag replaced");
                self.tags[pos] = tag;
            }
            None => {
                self.index.insert(key, self.tags.len());
                self.tags.push(tag);
            }
        }
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.index.get(&TagKey::Title).and_then(|&pos| match &self.tags[pos] {
            HeadTag::Title { text } => Some(text.as_str()),
            HeadTag::Meta(_) => None,
        })
    }

    pub fn to_html(&self) -> String {
        render_head_html(&self.tags)
    }
}

impl HeadSink for HeadCollector {
    fn commit(&mut self, tags: &[HeadTag]) {
        for tag in tags {
            self.push(tag.clone());
        }
    }
}

impl HeadSink for Vec<HeadTag> {
    fn commit(&mut self, tags: &[HeadTag]) {
        self.extend_from_slice(tags);
    }
}
