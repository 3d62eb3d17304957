//! Variant enums shared across component families.
//!
//! Each variant resolves to its style bucket through an exhaustive `match`,
//! so adding a value without a bucket fails to compile. The `ALL` constants
//! list every value in declaration order.

/// Component size scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub const ALL: &'static [Size] = &[Size::Sm, Size::Md, Size::Lg];

    /// Value for the `data-size` attribute.
    pub fn class(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    /// Spacing token the size maps onto.
    pub fn token(&self) -> &'static str {
        match self {
            Size::Sm => "var(--ui-space-2)",
            Size::Md => "var(--ui-space-3)",
            Size::Lg => "var(--ui-space-4)",
        }
    }

    /// Pixel edge for square glyphs at this size.
    pub fn icon_px(&self) -> u32 {
        match self {
            Size::Sm => 16,
            Size::Md => 20,
            Size::Lg => 24,
        }
    }
}

/// Colour intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    pub const ALL: &'static [Tone] = &[
        Tone::Neutral,
        Tone::Primary,
        Tone::Success,
        Tone::Warning,
        Tone::Danger,
        Tone::Info,
    ];

    /// Value for the `data-tone` attribute.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
        }
    }

    /// Colour token for the tone's foreground.
    pub fn token(&self) -> &'static str {
        match self {
            Tone::Neutral => "var(--ui-color-text)",
            Tone::Primary => "var(--ui-color-primary)",
            Tone::Success => "var(--ui-color-success)",
            Tone::Warning => "var(--ui-color-warning)",
            Tone::Danger => "var(--ui-color-danger)",
            Tone::Info => "var(--ui-color-info)",
        }
    }
}

/// Layout direction for sequences (tabs, steps, timelines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: &'static [Orientation] = &[Orientation::Horizontal, Orientation::Vertical];

    pub fn class(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_size_has_a_distinct_bucket() {
        let classes: HashSet<_> = Size::ALL.iter().map(Size::class).collect();
        assert_eq!(classes.len(), Size::ALL.len());
        assert!(Size::ALL.iter().all(|s| s.token().starts_with("var(--ui-")));
    }

    #[test]
    fn every_tone_has_a_distinct_bucket() {
        let classes: HashSet<_> = Tone::ALL.iter().map(Tone::class).collect();
        assert_eq!(classes.len(), Tone::ALL.len());
        assert!(Tone::ALL.iter().all(|t| !t.token().is_empty()));
    }

    #[test]
    fn orientation_buckets() {
        assert_eq!(Orientation::default().class(), "horizontal");
        assert_eq!(Orientation::Vertical.class(), "vertical");
        assert_eq!(Orientation::ALL.len(), 2);
    }
}
