//! Mock document implementation for testing
//!
//! An in-memory driver session backed by a flat element store. Attribute
//! lookups (id, name, class, tag, link text) are answered from the stored
//! element data; CSS, XPath and selector-engine expressions are answered
//! from a per-element list of registered selector strings, plus the trivial
//! `#id` / `.class` / bare-tag CSS forms.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::traits::{Document, ElementInfo};
use crate::session::traits::Resource;
use crate::{Error, Result};

struct MockEntry {
    info: ElementInfo,
    selectors: Vec<String>,
}

/// Mock driver session
pub struct MockDriver {
    entries: RwLock<Vec<MockEntry>>,
    active: AtomicBool,
    release_calls: AtomicUsize,
    fail_release: bool,
}

impl MockDriver {
    /// Create an empty mock driver session
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            active: AtomicBool::new(true),
            release_calls: AtomicUsize::new(0),
            fail_release: false,
        }
    }

    /// Create a mock driver session whose release always fails
    pub fn failing() -> Self {
        Self {
            fail_release: true,
            ..Self::new()
        }
    }

    /// Add an element to the document
    pub async fn add_element(&self, info: ElementInfo) {
        self.add_element_matching(info, &[]).await;
    }

    /// Add an element that additionally answers to the given CSS/XPath/
    /// selector-engine expressions
    pub async fn add_element_matching(&self, info: ElementInfo, selectors: &[&str]) {
        self.entries.write().await.push(MockEntry {
            info,
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
        });
    }

    /// Remove all elements
    pub async fn clear_elements(&self) {
        self.entries.write().await.clear();
    }

    /// Number of times release was called
    pub fn release_count(&self) -> usize {
        self.release_calls.load(Ordering::SeqCst)
    }

    async fn collect<F>(&self, matches: F) -> Vec<ElementInfo>
    where
        F: Fn(&MockEntry) -> bool,
    {
        self.entries
            .read()
            .await
            .iter()
            .filter(|entry| matches(entry))
            .map(|entry| entry.info.clone())
            .collect()
    }
}

#[async_trait]
impl Document for MockDriver {
    async fn elements_by_id(&self, id: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| entry.info.attribute("id") == Some(id))
            .await)
    }

    async fn elements_by_name(&self, name: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| entry.info.attribute("name") == Some(name))
            .await)
    }

    async fn elements_by_css(&self, selector: &str) -> Result<Vec<ElementInfo>> {
        if let Some(id) = selector.strip_prefix('#') {
            return self.elements_by_id(id).await;
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.elements_by_class_name(class).await;
        }
        Ok(self
            .collect(|entry| {
                entry.info.tag_name.eq_ignore_ascii_case(selector)
                    || entry.selectors.iter().any(|s| s == selector)
            })
            .await)
    }

    async fn elements_by_xpath(&self, expression: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| entry.selectors.iter().any(|s| s == expression))
            .await)
    }

    async fn elements_by_class_name(&self, class: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| {
                entry
                    .info
                    .attribute("class")
                    .map(|classes| classes.split_whitespace().any(|c| c == class))
                    .unwrap_or(false)
            })
            .await)
    }

    async fn elements_by_tag_name(&self, tag: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| entry.info.tag_name.eq_ignore_ascii_case(tag))
            .await)
    }

    async fn elements_by_link_text(&self, text: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| {
                entry.info.tag_name.eq_ignore_ascii_case("a")
                    && entry.info.text.as_deref() == Some(text)
            })
            .await)
    }

    async fn elements_by_partial_link_text(&self, text: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| {
                entry.info.tag_name.eq_ignore_ascii_case("a")
                    && entry
                        .info
                        .text
                        .as_deref()
                        .map(|t| t.contains(text))
                        .unwrap_or(false)
            })
            .await)
    }

    async fn evaluate_selector_engine(&self, expression: &str) -> Result<Vec<ElementInfo>> {
        Ok(self
            .collect(|entry| entry.selectors.iter().any(|s| s == expression))
            .await)
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resource for MockDriver {
    async fn release(&self) -> Result<()> {
        self.release_calls.fetch_add(1, Ordering::SeqCst);
        self.active.store(false, Ordering::SeqCst);
        if self.fail_release {
            return Err(Error::release_failure("driver refused to quit"));
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
