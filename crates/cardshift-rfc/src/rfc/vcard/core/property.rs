//! vCard property types.

use super::parameter::VCardParameter;

/// A vCard property.
///
/// The value is kept exactly as it appeared after unfolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

impl VCardProperty {
    /// Creates an ungrouped property with no parameters.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Creates a grouped property with no parameters.
    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            ..Self::text(name, value)
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns whether this property has the specified type, either as a
    /// `TYPE` value or as a vCard 2.1 bare parameter.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params.iter().any(|p| {
            if p.is_bare() {
                p.name.eq_ignore_ascii_case(type_value)
            } else {
                p.name == "TYPE" && p.has_value(type_value)
            }
        })
    }

    /// Returns whether the value is quoted-printable encoded.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.get_param("ENCODING")
            .is_some_and(|p| p.has_value("QUOTED-PRINTABLE"))
            || self.params.iter().any(|p| p.is_bare() && p.name == "QUOTED-PRINTABLE")
    }

    /// Returns whether this property belongs to `group` (case-insensitive).
    #[must_use]
    pub fn in_group(&self, group: &str) -> bool {
        self.group
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case(group))
    }
}

/// Property names used by Android exports and Apple's dialect.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const BDAY: &str = "BDAY";
    pub const VERSION: &str = "VERSION";

    pub const X_ANDROID_CUSTOM: &str = "X-ANDROID-CUSTOM";
    pub const X_ABLABEL: &str = "X-ABLABEL";
    pub const X_ABRELATEDNAMES: &str = "X-ABRELATEDNAMES";
    pub const X_ABDATE: &str = "X-ABDATE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_text() {
        let prop = VCardProperty::text("fn", "John Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.value, "John Doe");
        assert!(prop.group.is_none());
    }

    #[test]
    fn property_grouped() {
        let prop = VCardProperty::grouped_text("item1", "X-ABLabel", "_$!<Father>!$_");
        assert!(prop.in_group("ITEM1"));
        assert_eq!(prop.name, names::X_ABLABEL);
    }

    #[test]
    fn property_types_bare_and_typed() {
        let mut prop = VCardProperty::text("TEL", "5550100");
        prop.params.push(VCardParameter::bare("CELL"));
        prop.params.push(VCardParameter::new("TYPE", "voice"));

        assert!(prop.has_type("cell"));
        assert!(prop.has_type("VOICE"));
        assert!(!prop.has_type("fax"));
    }

    #[test]
    fn property_quoted_printable() {
        let mut prop = VCardProperty::text("N", "=E7=8E=8B;;;;");
        assert!(!prop.is_quoted_printable());
        prop.params.push(VCardParameter::new("ENCODING", "QUOTED-PRINTABLE"));
        assert!(prop.is_quoted_printable());
    }
}
