//! Tag filters
//!
//! Standard-tag keywords map to a concrete tag name plus, for input
//! variants, the `type` attribute that distinguishes them. Anything not in
//! the table is treated as a literal tag name.

use phf::phf_map;
use std::collections::HashMap;

/// Standard tag keywords accepted by element keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdTag {
    Link,
    Image,
    Checkbox,
    Radio,
    Text,
    Password,
    FileUpload,
    Submit,
    Reset,
    Button,
    InputButton,
    TextArea,
    List,
    Form,
}

static STD_TAGS: phf::Map<&'static str, StdTag> = phf_map! {
    "LINK" => StdTag::Link,
    "IMAGE" => StdTag::Image,
    "CHECKBOX" => StdTag::Checkbox,
    "RADIO" => StdTag::Radio,
    "TEXT" => StdTag::Text,
    "PASSWORD" => StdTag::Password,
    "FILEUPLOAD" => StdTag::FileUpload,
    "SUBMIT" => StdTag::Submit,
    "RESET" => StdTag::Reset,
    "BUTTON" => StdTag::Button,
    "INPUTBUTTON" => StdTag::InputButton,
    "TEXTAREA" => StdTag::TextArea,
    "LIST" => StdTag::List,
    "FORM" => StdTag::Form,
};

impl StdTag {
    /// Look up a standard tag by its keyword, case-insensitively
    pub fn from_name(name: &str) -> Option<StdTag> {
        STD_TAGS.get(name.to_ascii_uppercase().as_str()).copied()
    }

    /// HTML tag name this keyword stands for
    pub fn tag_name(&self) -> &'static str {
        match self {
            StdTag::Link => "a",
            StdTag::Image => "img",
            StdTag::Checkbox
            | StdTag::Radio
            | StdTag::Text
            | StdTag::Password
            | StdTag::FileUpload
            | StdTag::Submit
            | StdTag::Reset
            | StdTag::InputButton => "input",
            StdTag::Button => "button",
            StdTag::TextArea => "textarea",
            StdTag::List => "select",
            StdTag::Form => "form",
        }
    }

    /// Value of the `type` attribute this keyword implies, when any
    pub fn type_attribute(&self) -> Option<&'static str> {
        match self {
            StdTag::Checkbox => Some("checkbox"),
            StdTag::Radio => Some("radio"),
            StdTag::Text => Some("text"),
            StdTag::Password => Some("password"),
            StdTag::FileUpload => Some("file"),
            StdTag::Submit => Some("submit"),
            StdTag::Reset => Some("reset"),
            StdTag::InputButton => Some("button"),
            _ => None,
        }
    }
}

/// Post-hoc tag/attribute filter applied to locator results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTag {
    tag_name: String,
    attributes: HashMap<String, String>,
}

impl ElementTag {
    /// Filter by a literal tag name
    pub fn new<S: Into<String>>(tag_name: S) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Build a filter from a tag keyword.
    ///
    /// Standard-tag keywords expand to their tag name and implied `type`
    /// attribute; any other name is taken as a literal tag name. Returns
    /// `None` for an empty name.
    pub fn from_name(name: &str) -> Option<ElementTag> {
        if name.is_empty() {
            return None;
        }
        match StdTag::from_name(name) {
            Some(std_tag) => Some(ElementTag::from(std_tag)),
            None => Some(ElementTag::new(name)),
        }
    }

    /// Require an attribute value
    pub fn add_attribute<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Tag name to match, case-insensitively
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Attribute values to match exactly
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}

impl From<StdTag> for ElementTag {
    fn from(std_tag: StdTag) -> Self {
        let mut tag = ElementTag::new(std_tag.tag_name());
        if let Some(type_value) = std_tag.type_attribute() {
            tag.add_attribute("type", type_value);
        }
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_tag_lookup_is_case_insensitive() {
        assert_eq!(StdTag::from_name("checkbox"), Some(StdTag::Checkbox));
        assert_eq!(StdTag::from_name("CheckBox"), Some(StdTag::Checkbox));
        assert_eq!(StdTag::from_name("divider"), None);
    }

    #[test]
    fn test_element_tag_from_std_keyword() {
        let tag = ElementTag::from_name("CHECKBOX").unwrap();
        assert_eq!(tag.tag_name(), "input");
        assert_eq!(tag.attributes().get("type").map(String::as_str), Some("checkbox"));
    }

    #[test]
    fn test_element_tag_without_type_attribute() {
        let tag = ElementTag::from_name("link").unwrap();
        assert_eq!(tag.tag_name(), "a");
        assert!(tag.attributes().is_empty());
    }

    #[test]
    fn test_element_tag_literal_fallback() {
        let tag = ElementTag::from_name("section").unwrap();
        assert_eq!(tag.tag_name(), "section");
        assert!(tag.attributes().is_empty());
    }

    #[test]
    fn test_element_tag_empty_name() {
        assert_eq!(ElementTag::from_name(""), None);
    }
}
