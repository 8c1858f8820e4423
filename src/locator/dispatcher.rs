//! Locator dispatcher
//!
//! Parses raw locator strings into a resolution strategy and drives the
//! resolution. Strategy instances are stateless and cached once per
//! dispatcher; parsing allocates nothing beyond the per-call context.

use tracing::{debug, instrument};

use crate::config::WaitConfig;
use crate::document::traits::{Document, ElementInfo};
use crate::locator::context::LocatorContext;
use crate::locator::strategy::{
    ClassNameStrategy, CssStrategy, IdOrNameStrategy, IdStrategy, LinkTextStrategy,
    LocatorStrategy, NameStrategy, SelectorEngineStrategy, TagNameStrategy, XPathStrategy,
};
use crate::locator::tags::ElementTag;
use crate::{Error, Result};

/// Locator strategy kinds, keyed by the `type=` prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorKind {
    Id,
    Name,
    IdOrName,
    XPath,
    Css,
    ClassName,
    Tag,
    Sizzle,
    LinkText,
}

impl LocatorKind {
    /// Parse a locator-type prefix, case-insensitively.
    ///
    /// An unrecognized prefix is a configuration error, surfaced
    /// immediately and never retried.
    fn from_prefix(prefix: &str) -> Result<Self> {
        match prefix.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(LocatorKind::Id),
            "name" => Ok(LocatorKind::Name),
            "idorname" => Ok(LocatorKind::IdOrName),
            "xpath" => Ok(LocatorKind::XPath),
            "css" => Ok(LocatorKind::Css),
            "classname" => Ok(LocatorKind::ClassName),
            "tag" => Ok(LocatorKind::Tag),
            "jquery" | "sizzle" => Ok(LocatorKind::Sizzle),
            "linktext" => Ok(LocatorKind::LinkText),
            other => Err(Error::unsupported_locator(format!(
                "unknown locator type '{}'",
                other
            ))),
        }
    }
}

/// A parsed locator: chosen strategy kind plus the criteria to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLocator<'a> {
    /// Strategy kind selected by the prefix (or default) rule
    pub kind: LocatorKind,
    /// Criteria fed to the strategy's native lookup
    pub criteria: &'a str,
}

/// Parses locator strings and dispatches resolutions to a cached strategy
pub struct LocatorDispatcher {
    wait: WaitConfig,
    id: IdStrategy,
    name: NameStrategy,
    id_or_name: IdOrNameStrategy,
    xpath: XPathStrategy,
    css: CssStrategy,
    class_name: ClassNameStrategy,
    tag: TagNameStrategy,
    sizzle: SelectorEngineStrategy,
    link_text: LinkTextStrategy,
}

impl LocatorDispatcher {
    /// Create a dispatcher with the default wait settings (20 s / 100 ms)
    pub fn new() -> Self {
        Self::with_wait(WaitConfig::default())
    }

    /// Create a dispatcher with explicit wait settings
    pub fn with_wait(wait: WaitConfig) -> Self {
        Self {
            wait,
            id: IdStrategy,
            name: NameStrategy,
            id_or_name: IdOrNameStrategy,
            xpath: XPathStrategy,
            css: CssStrategy,
            class_name: ClassNameStrategy,
            tag: TagNameStrategy,
            sizzle: SelectorEngineStrategy,
            link_text: LinkTextStrategy,
        }
    }

    /// Parse a raw locator string.
    ///
    /// Grammar: `[<type>=]<criteria>`. A string starting with `//` is an
    /// XPath locator regardless of any embedded `=`; a bare string defaults
    /// to the by-id strategy.
    pub fn parse<'a>(&self, locator: &'a str) -> Result<ParsedLocator<'a>> {
        if locator.starts_with("//") {
            return Ok(ParsedLocator {
                kind: LocatorKind::XPath,
                criteria: locator,
            });
        }
        match locator.split_once('=') {
            Some((prefix, criteria)) => Ok(ParsedLocator {
                kind: LocatorKind::from_prefix(prefix)?,
                criteria,
            }),
            None => Ok(ParsedLocator {
                kind: LocatorKind::Id,
                criteria: locator,
            }),
        }
    }

    /// Resolve a raw locator string against a live document.
    ///
    /// `tag` filters matches post-hoc; `required` decides whether a
    /// zero-match timeout fails; `first_only` truncates to the first element
    /// after filtering, never before.
    #[instrument(skip(self, document))]
    pub async fn find(
        &self,
        document: &dyn Document,
        locator: &str,
        tag: Option<ElementTag>,
        required: bool,
        first_only: bool,
    ) -> Result<Vec<ElementInfo>> {
        let parsed = self.parse(locator)?;
        debug!(kind = ?parsed.kind, criteria = parsed.criteria, "resolving locator");

        let context = LocatorContext::new(parsed.criteria, tag, required);
        let mut elements = self
            .strategy(parsed.kind)
            .find(document, &context, &self.wait)
            .await?;

        if first_only && elements.len() > 1 {
            elements.truncate(1);
        }
        Ok(elements)
    }

    fn strategy(&self, kind: LocatorKind) -> &dyn LocatorStrategy {
        match kind {
            LocatorKind::Id => &self.id,
            LocatorKind::Name => &self.name,
            LocatorKind::IdOrName => &self.id_or_name,
            LocatorKind::XPath => &self.xpath,
            LocatorKind::Css => &self.css,
            LocatorKind::ClassName => &self.class_name,
            LocatorKind::Tag => &self.tag,
            LocatorKind::Sizzle => &self.sizzle,
            LocatorKind::LinkText => &self.link_text,
        }
    }
}

impl Default for LocatorDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(locator: &str) -> ParsedLocator<'_> {
        LocatorDispatcher::new().parse(locator).unwrap()
    }

    #[test]
    fn test_parse_bare_string_defaults_to_id() {
        let parsed = parse("login-button");
        assert_eq!(parsed.kind, LocatorKind::Id);
        assert_eq!(parsed.criteria, "login-button");
    }

    #[test]
    fn test_parse_prefixed_locators() {
        assert_eq!(parse("id=foo").kind, LocatorKind::Id);
        assert_eq!(parse("name=foo").kind, LocatorKind::Name);
        assert_eq!(parse("idorname=foo").kind, LocatorKind::IdOrName);
        assert_eq!(parse("xpath=//div").kind, LocatorKind::XPath);
        assert_eq!(parse("css=.button").kind, LocatorKind::Css);
        assert_eq!(parse("classname=button").kind, LocatorKind::ClassName);
        assert_eq!(parse("tag=input").kind, LocatorKind::Tag);
        assert_eq!(parse("jquery=div.item").kind, LocatorKind::Sizzle);
        assert_eq!(parse("sizzle=div.item").kind, LocatorKind::Sizzle);
        assert_eq!(parse("linktext=Sign in").kind, LocatorKind::LinkText);
    }

    #[test]
    fn test_parse_prefix_is_case_insensitive() {
        let parsed = parse("CSS=.button");
        assert_eq!(parsed.kind, LocatorKind::Css);
        assert_eq!(parsed.criteria, ".button");
    }

    #[test]
    fn test_parse_strips_only_first_equals() {
        let parsed = parse("css=input[name='a=b']");
        assert_eq!(parsed.kind, LocatorKind::Css);
        assert_eq!(parsed.criteria, "input[name='a=b']");
    }

    #[test]
    fn test_parse_xpath_shorthand_keeps_embedded_equals() {
        let parsed = parse("//input[@type='checkbox']");
        assert_eq!(parsed.kind, LocatorKind::XPath);
        assert_eq!(parsed.criteria, "//input[@type='checkbox']");
    }

    #[test]
    fn test_parse_unknown_prefix_is_an_error() {
        let result = LocatorDispatcher::new().parse("foo=bar");
        assert!(matches!(result, Err(Error::UnsupportedLocator(_))));
    }
}
