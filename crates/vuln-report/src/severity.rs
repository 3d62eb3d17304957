use std::fmt;

use ui_kit::Tone;

/// Severity of a finding. Ordered so that `Critical` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Unknown,
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Highest first, the order sections and summary lines appear in.
    pub const ALL: &'static [Severity] = &[
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
        Severity::Unknown,
    ];

    /// Case-insensitive; anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" | "moderate" => Severity::Medium,
            "low" => Severity::Low,
            "info" | "informational" | "negligible" => Severity::Info,
            _ => Severity::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
            Severity::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
            Severity::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Severity::Critical | Severity::High => Tone::Danger,
            Severity::Medium => Tone::Warning,
            Severity::Low => Tone::Info,
            Severity::Info => Tone::Primary,
            Severity::Unknown => Tone::Neutral,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ordering_puts_critical_first() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Info > Severity::Unknown);
        let mut sorted = Severity::ALL.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, Severity::ALL);
    }

    #[test]
    fn parsing_is_case_insensitive_with_aliases() {
        assert_eq!(Severity::parse("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse(" High "), Severity::High);
        assert_eq!(Severity::parse("moderate"), Severity::Medium);
        assert_eq!(Severity::parse("Informational"), Severity::Info);
        assert_eq!(Severity::parse("bogus"), Severity::Unknown);
        assert_eq!(Severity::parse(""), Severity::Unknown);
    }
}
