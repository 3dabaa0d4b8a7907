use serde::Deserialize;

/// How `item`N prefixes are numbered across relation and contact-event lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterMode {
    /// Relation and contact-event lines each count from zero.
    #[default]
    Independent,
    /// One counter is shared by both kinds.
    Shared,
}

impl CounterMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Shared => "shared",
        }
    }
}

impl std::fmt::Display for CounterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CounterMode {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "shared" => Ok(Self::Shared),
            other => Err(crate::error::CoreError::InvalidInput(format!(
                "unknown counter mode: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_mode_defaults_to_independent() {
        assert_eq!(CounterMode::default(), CounterMode::Independent);
    }

    #[test]
    fn counter_mode_parse() {
        assert_eq!("Shared".parse::<CounterMode>().ok(), Some(CounterMode::Shared));
        assert_eq!(
            "independent".parse::<CounterMode>().ok(),
            Some(CounterMode::Independent)
        );
        assert!("both".parse::<CounterMode>().is_err());
    }

    #[test]
    fn counter_mode_display() {
        assert_eq!(CounterMode::Shared.to_string(), "shared");
    }
}
