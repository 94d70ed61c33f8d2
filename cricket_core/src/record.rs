//! # Cricket Records
//!
//! The `Cricket` struct is the only entity in the catalog. Records serialize
//! to plain JSON objects inside the catalog file:
//!
//! ```text
//! {"name": "..", "breed": "..", "level": "5", "size": "中",
//!  "attributes": {"攻击": "7-9", "防御": "4-6", ...}}
//! ```
//!
//! `size` and `level` stay strings on disk so that values written by hand
//! (or by older tools) survive a load/save cycle untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Levels offered by the level selector.
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 15;

/// A single catalogued cricket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cricket {
    /// Display name, used as the lookup key
    pub name: String,

    /// Free-text breed
    pub breed: String,

    /// Level as entered, normally "1" through "15"
    pub level: String,

    /// Size label, normally one of the [`SizeClass`] labels
    pub size: String,

    /// Attribute label to value ("7" or "4-6"), in file order
    pub attributes: IndexMap<String, String>,
}

impl Cricket {
    /// Create a record with no attributes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cricket_core::record::{Attribute, Cricket, SizeClass};
    ///
    /// let cricket = Cricket::new("A", "B", "5", SizeClass::Medium.label())
    ///     .with_attribute(Attribute::Attack, "7-9");
    /// assert_eq!(cricket.size_class(), Some(SizeClass::Medium));
    /// assert_eq!(cricket.attribute(Attribute::Attack), Some("7-9"));
    /// ```
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        level: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Cricket {
            name: name.into(),
            breed: breed.into(),
            level: level.into(),
            size: size.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.attributes.insert(attribute.label().to_string(), value.into());
        self
    }

    /// The recognised size class, if the stored label is one.
    pub fn size_class(&self) -> Option<SizeClass> {
        SizeClass::from_label(&self.size)
    }

    /// Stored value for one of the fixed attributes.
    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        self.attributes.get(attribute.label()).map(String::as_str)
    }

    /// Attribute entries in display order: the fixed attributes first,
    /// then any other keys in the order they appear on disk.
    pub fn ordered_attributes(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = Attribute::ALL
            .iter()
            .filter_map(|attr| {
                self.attributes
                    .get_key_value(attr.label())
                    .map(|(k, v)| (k.as_str(), v.as_str()))
            })
            .collect();

        entries.extend(
            self.attributes
                .iter()
                .filter(|(k, _)| Attribute::from_label(k).is_none())
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        entries
    }
}

/// Options for the level selector ("1" through "15").
pub fn level_options() -> Vec<String> {
    (MIN_LEVEL..=MAX_LEVEL).map(|n| n.to_string()).collect()
}

// ============================================================================
// SIZE CLASS
// ============================================================================

/// Body size, which decides the display tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Label stored in the catalog file
    pub fn label(&self) -> &'static str {
        match self {
            SizeClass::Small => "小",
            SizeClass::Medium => "中",
            SizeClass::Large => "大",
        }
    }

    pub fn from_label(label: &str) -> Option<SizeClass> {
        SizeClass::ALL.iter().copied().find(|s| s.label() == label)
    }

    /// Title of the display tab for this size
    pub fn tab_title(&self) -> String {
        format!("{}体型蟋蟀", self.label())
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// The eight graded attributes every record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Attack,
    Defense,
    Spirit,
    Stamina,
    Critical,
    Accuracy,
    Block,
    Speed,
}

impl Attribute {
    /// Form and display order
    pub const ALL: [Attribute; 8] = [
        Attribute::Attack,
        Attribute::Defense,
        Attribute::Spirit,
        Attribute::Stamina,
        Attribute::Critical,
        Attribute::Accuracy,
        Attribute::Block,
        Attribute::Speed,
    ];

    /// Key used in the `attributes` object of the catalog file
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Attack => "攻击",
            Attribute::Defense => "防御",
            Attribute::Spirit => "斗性",
            Attribute::Stamina => "体力",
            Attribute::Critical => "暴击",
            Attribute::Accuracy => "命中",
            Attribute::Block => "格挡",
            Attribute::Speed => "攻速",
        }
    }

    pub fn from_label(label: &str) -> Option<Attribute> {
        Attribute::ALL.iter().copied().find(|a| a.label() == label)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cricket_json_shape() {
        let cricket = Cricket::new("A", "B", "5", "中").with_attribute(Attribute::Attack, "7-9");
        let json = serde_json::to_string(&cricket).unwrap();
        assert_eq!(
            json,
            r#"{"name":"A","breed":"B","level":"5","size":"中","attributes":{"攻击":"7-9"}}"#
        );
    }

    #[test]
    fn test_unknown_size_survives_roundtrip() {
        let json = r#"{"name":"X","breed":"","level":"","size":"extra-large","attributes":{}}"#;
        let cricket: Cricket = serde_json::from_str(json).unwrap();
        assert_eq!(cricket.size, "extra-large");
        assert_eq!(cricket.size_class(), None);
        assert_eq!(serde_json::to_string(&cricket).unwrap(), json);
    }

    #[test]
    fn test_size_labels() {
        for size in SizeClass::ALL {
            assert_eq!(SizeClass::from_label(size.label()), Some(size));
        }
        assert_eq!(SizeClass::Medium.tab_title(), "中体型蟋蟀");
        assert_eq!(SizeClass::from_label("extra-large"), None);
    }

    #[test]
    fn test_attribute_labels_are_distinct() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_label(attr.label()), Some(attr));
        }
    }

    #[test]
    fn test_level_options() {
        let options = level_options();
        assert_eq!(options.len(), 15);
        assert_eq!(options.first().map(String::as_str), Some("1"));
        assert_eq!(options.last().map(String::as_str), Some("15"));
    }

    #[test]
    fn test_ordered_attributes_follow_form_order() {
        let mut cricket = Cricket::new("A", "B", "1", "小")
            .with_attribute(Attribute::Speed, "11")
            .with_attribute(Attribute::Attack, "1-3");
        cricket.attributes.insert("颜色".to_string(), "青".to_string());
        cricket.attributes.insert("年龄".to_string(), "2".to_string());

        let ordered = cricket.ordered_attributes();
        assert_eq!(
            ordered,
            vec![("攻击", "1-3"), ("攻速", "11"), ("颜色", "青"), ("年龄", "2")]
        );
    }

    #[test]
    fn test_attributes_keep_file_order() {
        let json = r#"{"name":"A","breed":"","level":"","size":"小","attributes":{"攻速":"11","颜色":"青","攻击":"1-3"}}"#;
        let cricket: Cricket = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = cricket.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["攻速", "颜色", "攻击"]);
        assert_eq!(serde_json::to_string(&cricket).unwrap(), json);
    }
}
