//! vCard document type.

use super::property::{VCardProperty, names};

/// vCard format versions found in Android and Apple exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VCardVersion {
    V21,
    #[default]
    V30,
    V40,
}

impl VCardVersion {
    /// Parses a `VERSION` value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V30),
            "4.0" => Some(Self::V40),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V30 => "3.0",
            Self::V40 => "4.0",
        }
    }
}

impl std::fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grouped value line and the `X-ABLabel` sharing its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledItem<'a> {
    pub group: &'a str,
    pub property: &'a VCardProperty,
    pub label: Option<&'a str>,
}

/// A single contact card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    pub version: VCardVersion,
    /// Properties in document order, `VERSION` excluded.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_property(&mut self, property: VCardProperty) {
        self.properties.push(property);
    }

    /// Returns all properties with the given name.
    pub fn properties_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a VCardProperty> {
        self.properties
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of the first property with the given name.
    #[must_use]
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.value.as_str())
    }

    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_value(names::FN)
    }

    /// Pairs each grouped property with the `X-ABLabel` of its group.
    ///
    /// Label lines themselves are not listed.
    #[must_use]
    pub fn labeled_items(&self) -> Vec<LabeledItem<'_>> {
        self.properties
            .iter()
            .filter(|p| p.name != names::X_ABLABEL)
            .filter_map(|property| {
                let group = property.group.as_deref()?;
                let label = self
                    .properties
                    .iter()
                    .find(|p| p.name == names::X_ABLABEL && p.in_group(group))
                    .map(|p| p.value.as_str());
                Some(LabeledItem {
                    group,
                    property,
                    label,
                })
            })
            .collect()
    }
}
