//! Severity tiers for inspections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default severity tier of an inspection.
///
/// Ordered from most to least severe. `Info` is the lowest informational
/// tier: static inspections that default to it are not worth cataloging and
/// the harvester skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
    Hint,
    Info,
}

impl Severity {
    /// Whether this tier is worth recording for a static inspection.
    pub fn is_catalogable(self) -> bool {
        self != Severity::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Suggestion => "Suggestion",
            Severity::Hint => "Hint",
            Severity::Info => "Info",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_is_not_catalogable() {
        assert!(!Severity::Info.is_catalogable());
        assert!(Severity::Hint.is_catalogable());
        assert!(Severity::Error.is_catalogable());
    }

    #[test]
    fn ordering_runs_most_to_least_severe() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Hint < Severity::Info);
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"Warning\"");
    }
}
