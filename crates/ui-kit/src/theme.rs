use dioxus::prelude::*;

/// The token stylesheet, for documents rendered outside an app bundle.
pub const THEME_CSS: &str = include_str!("theme.css");

/// Tokens followed by every component stylesheet, as one string.
pub fn inline_stylesheet() -> String {
    std::iter::once(THEME_CSS)
        .chain(crate::components::STYLESHEETS.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Theme families shipped with the stylesheet.
///
/// Each family provides a dark variant, a light variant, or both.
/// Families with only one mode resolve to that mode regardless of `dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFamily {
    #[default]
    Standard,
    Contrast,
    /// Dark-only.
    Midnight,
    /// Light-only.
    Paper,
}

impl ThemeFamily {
    pub const ALL: &'static [ThemeFamily] = &[
        ThemeFamily::Standard,
        ThemeFamily::Contrast,
        ThemeFamily::Midnight,
        ThemeFamily::Paper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Standard => "standard",
            ThemeFamily::Contrast => "contrast",
            ThemeFamily::Midnight => "midnight",
            ThemeFamily::Paper => "paper",
        }
    }

    /// Parse a family key, falling back to `Standard`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "contrast" => ThemeFamily::Contrast,
            "midnight" => ThemeFamily::Midnight,
            "paper" => ThemeFamily::Paper,
            _ => ThemeFamily::Standard,
        }
    }

    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Paper)
    }

    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Midnight)
    }

    /// Resolve to the `data-theme` attribute value.
    pub fn resolve(&self, dark: bool) -> &'static str {
        match (self, dark) {
            (ThemeFamily::Standard, true) => "standard-dark",
            (ThemeFamily::Standard, false) => "standard",
            (ThemeFamily::Contrast, true) => "contrast-dark",
            (ThemeFamily::Contrast, false) => "contrast",
            (ThemeFamily::Midnight, _) => "midnight",
            (ThemeFamily::Paper, _) => "paper",
        }
    }
}

/// Read-only theme configuration provided to a subtree.
///
/// Components never read token values themselves; the stylesheet consumes
/// `--ui-*` custom properties and `tokens` only overrides them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Theme {
    pub family: ThemeFamily,
    pub dark: bool,
    /// Token overrides as `(name, value)`; names may omit the `--ui-` prefix.
    pub tokens: Vec<(String, String)>,
}

impl Theme {
    pub fn new(family: ThemeFamily, dark: bool) -> Self {
        Self {
            family,
            dark,
            tokens: Vec::new(),
        }
    }

    pub fn with_token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tokens.push((name.into(), value.into()));
        self
    }

    pub fn data_theme(&self) -> &'static str {
        self.family.resolve(self.dark)
    }

    /// Inline `style` declarations for the overrides. Empty values are
    /// skipped so an unset token keeps the stylesheet (or browser) default.
    pub fn style_declarations(&self) -> String {
        self.tokens
            .iter()
            .filter(|(name, value)| !name.trim().is_empty() && !value.trim().is_empty())
            .map(|(name, value)| {
                let name = name.trim().trim_start_matches("--");
                let name = name.strip_prefix("ui-").unwrap_or(name);
                format!("--ui-{name}: {};", value.trim())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Provide `theme` to the subtree and apply it to a wrapping element.
#[component]
pub fn ThemeProvider(
    theme: Theme,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut provided = use_context_provider(|| Signal::new(theme.clone()));
    if *provided.peek() != theme {
        provided.set(theme.clone());
    }

    let style = theme.style_declarations();
    let base = vec![
        Attribute::new("class", "ui-theme", None, false),
        Attribute::new("data-theme", theme.data_theme(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./theme.css") }
        div {
            style: if !style.is_empty() { "{style}" },
            ..merged,
            {children}
        }
    }
}

/// The provided theme, or the default when no provider is mounted.
pub fn use_theme() -> Theme {
    match try_use_context::<Signal<Theme>>() {
        Some(theme) => theme(),
        None => Theme::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn family_default_is_standard() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Standard);
    }

    #[test]
    fn family_key_roundtrip() {
        for family in ThemeFamily::ALL {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
        assert_eq!(ThemeFamily::from_key("unknown"), ThemeFamily::Standard);
    }

    #[test]
    fn single_mode_families_ignore_dark_flag() {
        assert_eq!(ThemeFamily::Midnight.resolve(false), "midnight");
        assert_eq!(ThemeFamily::Paper.resolve(true), "paper");
        assert!(!ThemeFamily::Midnight.has_light());
        assert!(!ThemeFamily::Paper.has_dark());
        assert_eq!(ThemeFamily::Standard.resolve(true), "standard-dark");
    }

    #[test]
    fn token_overrides_become_custom_properties() {
        let theme = Theme::new(ThemeFamily::Contrast, false)
            .with_token("color-primary", "#0af")
            .with_token("--ui-radius", "2px")
            .with_token("space-2", "");
        assert_eq!(
            theme.style_declarations(),
            "--ui-color-primary: #0af; --ui-radius: 2px;"
        );
    }

    #[test]
    fn provider_writes_theme_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            ThemeProvider { theme: Theme::new(ThemeFamily::Paper, true), "body" }
        });
        assert!(html.contains(r#"data-theme="paper""#), "{html}");
        assert!(!html.contains("style="), "{html}");
    }

    #[test]
    fn inline_stylesheet_carries_tokens_and_components() {
        let css = inline_stylesheet();
        assert!(css.starts_with(THEME_CSS));
        assert!(css.contains(".ui-badge"));
        assert!(css.contains(".ui-file-upload"));
    }
}
