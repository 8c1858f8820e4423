//! Locator resolution context

use crate::locator::tags::ElementTag;

/// One resolution request: the raw criteria, an optional tag/attribute
/// filter, and whether a zero-match timeout is a failure.
///
/// Built fresh per resolution call and never shared across concurrent
/// resolutions.
#[derive(Debug, Clone)]
pub struct LocatorContext {
    /// Criteria the strategy feeds to its native lookup
    pub criteria: String,
    /// Post-hoc tag/attribute filter, when the caller gave one
    pub tag: Option<ElementTag>,
    /// Whether zero matches at the deadline is an error
    pub required: bool,
}

impl LocatorContext {
    /// Create a resolution context
    pub fn new<S: Into<String>>(criteria: S, tag: Option<ElementTag>, required: bool) -> Self {
        Self {
            criteria: criteria.into(),
            tag,
            required,
        }
    }
}
