//! Live document traits
//!
//! Abstract interface over whatever renders the document under test. Each
//! method is one native lookup primitive; the locator strategies compose
//! them with polling and filtering.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::session::traits::Resource;

/// Element information returned by document lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Driver-assigned element id
    pub element_id: String,
    /// Lower-cased tag name
    pub tag_name: String,
    /// Attribute name/value pairs
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// Text content, when the element has any
    pub text: Option<String>,
}

impl ElementInfo {
    /// Create element info with the given id and tag name
    pub fn new<S: Into<String>, T: Into<String>>(element_id: S, tag_name: T) -> Self {
        Self {
            element_id: element_id.into(),
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
            text: None,
        }
    }

    /// Add an attribute
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the text content
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A live document that can be queried for elements.
///
/// Every method returns matches in document order; ordering and
/// deduplication across lookups is the strategies' concern. Lookup failures
/// at the driver level surface as [`crate::Error::Document`], which is
/// distinct from a resolution timeout.
#[async_trait]
pub trait Document: Send + Sync {
    /// Elements whose `id` attribute equals the given value
    async fn elements_by_id(&self, id: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Elements whose `name` attribute equals the given value
    async fn elements_by_name(&self, name: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Elements matching a CSS selector
    async fn elements_by_css(&self, selector: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Elements matching an XPath expression
    async fn elements_by_xpath(&self, expression: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Elements carrying the given class name
    async fn elements_by_class_name(&self, class: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Elements with the given tag name
    async fn elements_by_tag_name(&self, tag: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Anchor elements whose link text equals the given value
    async fn elements_by_link_text(&self, text: &str) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Anchor elements whose link text contains the given value
    async fn elements_by_partial_link_text(
        &self,
        text: &str,
    ) -> Result<Vec<ElementInfo>, crate::Error>;

    /// Elements matched by the injected selector engine (Sizzle/jQuery style)
    async fn evaluate_selector_engine(
        &self,
        expression: &str,
    ) -> Result<Vec<ElementInfo>, crate::Error>;
}

/// A browser/automation driver handle: a releasable session that exposes a
/// live document.
pub trait DriverSession: Resource + Document {
    /// View of this session as a plain document for locator resolution
    fn as_document(&self) -> &dyn Document;
}

impl<T: Resource + Document> DriverSession for T {
    fn as_document(&self) -> &dyn Document {
        self
    }
}
