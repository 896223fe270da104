//! Color tokens for theming

use crate::theme::ColorScheme;
use clubsite_core::Color;
use std::collections::BTreeMap;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryLight,
    Accent,
    AccentHover,

    // Surface colors
    Background,
    Surface,
    SurfaceMuted,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextOnPrimary,
    TextLink,

    // Borders and feedback
    Border,
    Error,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 13] = [
        ColorToken::Primary,
        ColorToken::PrimaryLight,
        ColorToken::Accent,
        ColorToken::AccentHover,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceMuted,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextOnPrimary,
        ColorToken::TextLink,
        ColorToken::Border,
        ColorToken::Error,
    ];

    /// CSS variable name (without the `--` prefix)
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primary-light",
            Self::Accent => "accent",
            Self::AccentHover => "accent-hover",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::SurfaceMuted => "surface-muted",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextOnPrimary => "text-on-primary",
            Self::TextLink => "text-link",
            Self::Border => "border",
            Self::Error => "error",
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_light: Color,
    pub accent: Color,
    pub accent_hover: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_primary: Color,
    pub text_link: Color,

    pub border: Color,
    pub error: Color,
}

impl ColorTokens {
    /// Light palette
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x0a2540),
            primary_light: Color::from_hex(0x1e3a5f),
            accent: Color::from_hex(0x00b4d8),
            accent_hover: Color::from_hex(0x0096c7),
            background: Color::from_hex(0xf9fafb),
            surface: Color::WHITE,
            surface_muted: Color::from_hex(0xf3f4f6),
            text_primary: Color::from_hex(0x111827),
            text_secondary: Color::from_hex(0x4b5563),
            text_on_primary: Color::WHITE,
            text_link: Color::from_hex(0x0077b6),
            border: Color::from_hex(0xe5e7eb),
            error: Color::from_hex(0xdc2626),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0x111827),
            primary_light: Color::from_hex(0x1f2937),
            accent: Color::from_hex(0x48cae4),
            accent_hover: Color::from_hex(0x90e0ef),
            background: Color::from_hex(0x111827),
            surface: Color::from_hex(0x1f2937),
            surface_muted: Color::from_hex(0x374151),
            text_primary: Color::from_hex(0xf9fafb),
            text_secondary: Color::from_hex(0xd1d5db),
            text_on_primary: Color::WHITE,
            text_link: Color::from_hex(0x48cae4),
            border: Color::from_hex(0x374151),
            error: Color::from_hex(0xf87171),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryLight => self.primary_light,
            ColorToken::Accent => self.accent,
            ColorToken::AccentHover => self.accent_hover,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceMuted => self.surface_muted,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextOnPrimary => self.text_on_primary,
            ColorToken::TextLink => self.text_link,
            ColorToken::Border => self.border,
            ColorToken::Error => self.error,
        }
    }

    /// CSS variable map keyed by variable name (without `--`)
    pub fn css_variables(&self) -> BTreeMap<&'static str, String> {
        ColorToken::ALL
            .iter()
            .map(|token| (token.css_name(), self.get(*token).to_css()))
            .collect()
    }

    /// Render the variables as a CSS rule for `selector`
    pub fn to_css_rule(&self, selector: &str) -> String {
        let mut rule = format!("{selector} {{\n");
        for (name, value) in self.css_variables() {
            rule.push_str(&format!("  --{name}: {value};\n"));
        }
        rule.push('}');
        rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_and_dark_differ_on_background() {
        assert_ne!(
            ColorTokens::light().get(ColorToken::Background),
            ColorTokens::dark().get(ColorToken::Background)
        );
    }

    #[test]
    fn test_css_variables_cover_every_token() {
        let vars = ColorTokens::light().css_variables();
        assert_eq!(vars.len(), ColorToken::ALL.len());
        assert_eq!(vars["surface"], "#ffffff");
    }

    #[test]
    fn test_css_rule_format() {
        let rule = ColorTokens::dark().to_css_rule(":root.dark");
        assert!(rule.starts_with(":root.dark {\n"));
        assert!(rule.contains("  --text-primary: #f9fafb;\n"));
        assert!(rule.ends_with('}'));
    }
}
