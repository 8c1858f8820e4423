//! Locator strategies
//!
//! One strategy per locator kind. Each strategy's `lookup` is a single
//! attempt via its native mechanism; the provided `find` wraps it in the
//! bounded poll, applies the tag/attribute filter on success, and turns a
//! zero-match timeout into either an error or an empty result depending on
//! the required flag.

use std::collections::HashSet;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::config::WaitConfig;
use crate::document::traits::{Document, ElementInfo};
use crate::locator::context::LocatorContext;
use crate::{Error, Result};

/// Strategy for resolving one locator kind against a live document.
///
/// Implementations are stateless and shared; the dispatcher caches one
/// instance of each.
#[async_trait]
pub trait LocatorStrategy: Send + Sync {
    /// One lookup attempt via the strategy's native mechanism
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>>;

    /// Poll the document until at least one element matches or the deadline
    /// elapses, then filter.
    ///
    /// On timeout with zero matches this fails with
    /// [`Error::LocatorTimeout`] when the context is required, and returns
    /// an empty list otherwise. Results keep the document order of the
    /// underlying lookup; the filter may legally reduce a non-empty match
    /// set to nothing without raising.
    async fn find(
        &self,
        document: &dyn Document,
        context: &LocatorContext,
        wait: &WaitConfig,
    ) -> Result<Vec<ElementInfo>> {
        let deadline = Instant::now() + wait.timeout;
        loop {
            let elements = self.lookup(document, &context.criteria).await?;
            if !elements.is_empty() {
                return Ok(filter(context, elements));
            }
            if Instant::now() >= deadline {
                break;
            }
            tokio::time::sleep(wait.interval).await;
        }

        if context.required {
            Err(Error::locator_timeout(format!(
                "no element matched '{}' within {:?}",
                context.criteria, wait.timeout
            )))
        } else {
            debug!(criteria = %context.criteria, "optional locator matched nothing");
            Ok(Vec::new())
        }
    }
}

/// Drop elements whose tag name doesn't match the filter case-insensitively
/// or whose attributes don't exactly match every filter entry. A missing
/// attribute never matches.
fn filter(context: &LocatorContext, mut elements: Vec<ElementInfo>) -> Vec<ElementInfo> {
    let Some(tag) = &context.tag else {
        return elements;
    };
    elements.retain(|element| {
        element.tag_name.eq_ignore_ascii_case(tag.tag_name())
            && tag
                .attributes()
                .iter()
                .all(|(name, value)| element.attribute(name) == Some(value.as_str()))
    });
    elements
}

/// Find elements by their `id` attribute
pub struct IdStrategy;

#[async_trait]
impl LocatorStrategy for IdStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.elements_by_id(criteria).await
    }
}

/// Find elements by their `name` attribute
pub struct NameStrategy;

#[async_trait]
impl LocatorStrategy for NameStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.elements_by_name(criteria).await
    }
}

/// Find elements by `id` or `name`: the deduplicated union of both lookups
pub struct IdOrNameStrategy;

#[async_trait]
impl LocatorStrategy for IdOrNameStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        let mut elements = document.elements_by_id(criteria).await?;
        let mut seen: HashSet<String> = elements
            .iter()
            .map(|element| element.element_id.clone())
            .collect();
        for element in document.elements_by_name(criteria).await? {
            if seen.insert(element.element_id.clone()) {
                elements.push(element);
            }
        }
        Ok(elements)
    }
}

/// Find elements by XPath expression
pub struct XPathStrategy;

#[async_trait]
impl LocatorStrategy for XPathStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.elements_by_xpath(criteria).await
    }
}

/// Find elements by CSS selector
pub struct CssStrategy;

#[async_trait]
impl LocatorStrategy for CssStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.elements_by_css(criteria).await
    }
}

/// Find elements by class name
pub struct ClassNameStrategy;

#[async_trait]
impl LocatorStrategy for ClassNameStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.elements_by_class_name(criteria).await
    }
}

/// Find elements by tag name
pub struct TagNameStrategy;

#[async_trait]
impl LocatorStrategy for TagNameStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.elements_by_tag_name(criteria).await
    }
}

/// Find anchors by link text: exact match first, partial-text fallback only
/// when the exact lookup matched nothing
pub struct LinkTextStrategy;

#[async_trait]
impl LocatorStrategy for LinkTextStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        let elements = document.elements_by_link_text(criteria).await?;
        if !elements.is_empty() {
            return Ok(elements);
        }
        document.elements_by_partial_link_text(criteria).await
    }
}

/// Find elements through the injected selector engine (Sizzle/jQuery style)
pub struct SelectorEngineStrategy;

#[async_trait]
impl LocatorStrategy for SelectorEngineStrategy {
    async fn lookup(&self, document: &dyn Document, criteria: &str) -> Result<Vec<ElementInfo>> {
        document.evaluate_selector_engine(criteria).await
    }
}
