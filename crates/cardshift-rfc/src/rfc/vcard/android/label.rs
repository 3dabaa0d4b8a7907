//! Android label codes mapped onto Apple label sentinels.

use cardshift_core::constants::{LABEL_SENTINEL_CLOSE, LABEL_SENTINEL_OPEN};

macro_rules! sentinel {
    ($name:literal) => {
        const_str::concat!(LABEL_SENTINEL_OPEN, $name, LABEL_SENTINEL_CLOSE)
    };
}

/// A closed table of Android integer label codes.
pub trait LabelTable: Copy {
    /// Maps an Android code onto a table entry, falling back for unknown codes.
    fn from_code(code: i64) -> Self;

    /// Label string written after `X-ABLabel:`.
    fn sentinel(self) -> &'static str;
}

/// Android `Relation.TYPE` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationLabel {
    Custom,
    Assistant,
    Brother,
    Child,
    DomesticPartner,
    Father,
    Friend,
    Manager,
    Mother,
    Parent,
    Partner,
    ReferredBy,
    Relative,
    Sister,
    Spouse,
}

impl RelationLabel {
    const BY_CODE: [Self; 15] = [
        Self::Custom,
        Self::Assistant,
        Self::Brother,
        Self::Child,
        Self::DomesticPartner,
        Self::Father,
        Self::Friend,
        Self::Manager,
        Self::Mother,
        Self::Parent,
        Self::Partner,
        Self::ReferredBy,
        Self::Relative,
        Self::Sister,
        Self::Spouse,
    ];
}

impl LabelTable for RelationLabel {
    /// Codes outside 0-14 resolve to [`RelationLabel::Spouse`].
    fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::BY_CODE.get(i).copied())
            .unwrap_or(Self::Spouse)
    }

    fn sentinel(self) -> &'static str {
        match self {
            Self::Custom => sentinel!("Other"),
            Self::Assistant => sentinel!("Assistant"),
            Self::Brother => sentinel!("Brother"),
            Self::Child => sentinel!("Child"),
            Self::DomesticPartner | Self::Partner => sentinel!("Partner"),
            Self::Father => sentinel!("Father"),
            Self::Friend => sentinel!("Friend"),
            Self::Manager => sentinel!("Manager"),
            Self::Mother => sentinel!("Mother"),
            Self::Parent => sentinel!("Parent"),
            Self::ReferredBy => sentinel!("ReferredBy"),
            Self::Relative => sentinel!("Relative"),
            Self::Sister => sentinel!("Sister"),
            Self::Spouse => sentinel!("Spouse"),
        }
    }
}

/// Android `Event.TYPE` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventLabel {
    Custom,
    Anniversary,
    Other,
    Birthday,
}

impl EventLabel {
    const BY_CODE: [Self; 4] = [Self::Custom, Self::Anniversary, Self::Other, Self::Birthday];
}

impl LabelTable for EventLabel {
    /// Codes outside 0-3 resolve to the empty [`EventLabel::Custom`] label.
    fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::BY_CODE.get(i).copied())
            .unwrap_or(Self::Custom)
    }

    fn sentinel(self) -> &'static str {
        match self {
            Self::Custom => "",
            Self::Anniversary => sentinel!("Anniversary"),
            Self::Other => sentinel!("Other"),
            Self::Birthday => sentinel!("Birthday"),
        }
    }
}

/// Outcome of resolving a label token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLabel {
    /// The token was an integer code and went through the table.
    Mapped(&'static str),
    /// The token was free text and is used verbatim.
    Custom(String),
}

impl ResolvedLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mapped(s) => s,
            Self::Custom(s) => s.as_str(),
        }
    }
}

/// Resolves a label token through table `T` when it parses as an integer.
#[must_use]
pub fn resolve<T: LabelTable>(token: &str) -> ResolvedLabel {
    token.parse::<i64>().map_or_else(
        |_| ResolvedLabel::Custom(token.to_string()),
        |code| ResolvedLabel::Mapped(T::from_code(code).sentinel()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_codes_map_to_sentinels() {
        assert_eq!(RelationLabel::from_code(5).sentinel(), "_$!<Father>!$_");
        assert_eq!(RelationLabel::from_code(8).sentinel(), "_$!<Mother>!$_");
        assert_eq!(RelationLabel::from_code(14).sentinel(), "_$!<Spouse>!$_");
        assert_eq!(RelationLabel::from_code(4), RelationLabel::DomesticPartner);
    }

    #[test]
    fn relation_out_of_range_is_spouse() {
        assert_eq!(RelationLabel::from_code(15), RelationLabel::Spouse);
        assert_eq!(RelationLabel::from_code(99), RelationLabel::Spouse);
        assert_eq!(RelationLabel::from_code(-1), RelationLabel::Spouse);
    }

    #[test]
    fn event_codes_map_to_sentinels() {
        assert_eq!(EventLabel::from_code(1).sentinel(), "_$!<Anniversary>!$_");
        assert_eq!(EventLabel::from_code(2).sentinel(), "_$!<Other>!$_");
        assert_eq!(EventLabel::from_code(3), EventLabel::Birthday);
    }

    #[test]
    fn event_out_of_range_is_empty() {
        assert_eq!(EventLabel::from_code(4).sentinel(), "");
        assert_eq!(EventLabel::from_code(-7).sentinel(), "");
    }

    #[test]
    fn resolve_integer_token() {
        assert_eq!(
            resolve::<RelationLabel>("2"),
            ResolvedLabel::Mapped("_$!<Brother>!$_")
        );
    }

    #[test]
    fn resolve_text_token_is_verbatim() {
        let label = resolve::<EventLabel>("Graduation");
        assert_eq!(label, ResolvedLabel::Custom("Graduation".to_string()));
        assert_eq!(label.as_str(), "Graduation");
    }
}
