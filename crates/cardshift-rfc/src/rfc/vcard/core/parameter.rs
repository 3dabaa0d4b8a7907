//! vCard parameter types.

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work). vCard 2.1
/// bare parameters such as the `CELL` in `TEL;CELL:` have no values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Creates a valueless vCard 2.1 parameter.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self::multi(name, Vec::new())
    }

    /// Returns whether this is a valueless parameter.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}
