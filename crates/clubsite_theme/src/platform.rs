//! Ambient color scheme preference
//!
//! Native stand-in for the browser's `prefers-color-scheme` query. The
//! environment is consulted in order:
//!
//! 1. `CLUBSITE_COLOR_SCHEME` (`dark` or `light`)
//! 2. `COLORFGBG` as set by many terminals (`fg;bg`, dark when bg is 0-6 or 8)

use crate::theme::ColorScheme;

/// Environment variable that forces the ambient scheme
pub const SCHEME_ENV: &str = "CLUBSITE_COLOR_SCHEME";

/// Source of the operating environment's dark-mode preference
pub trait SystemPreference: Send + Sync {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if unknown
    fn prefers_dark(&self) -> Option<bool>;
}

/// A preference fixed up front (configuration or tests)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<bool>);

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Preference read from environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvPreference {
    scheme: Option<String>,
    colorfgbg: Option<String>,
}

impl EnvPreference {
    /// Snapshot the current process environment
    pub fn from_env() -> Self {
        Self {
            scheme: std::env::var(SCHEME_ENV).ok(),
            colorfgbg: std::env::var("COLORFGBG").ok(),
        }
    }

    pub fn from_values(scheme: Option<&str>, colorfgbg: Option<&str>) -> Self {
        Self {
            scheme: scheme.map(str::to_string),
            colorfgbg: colorfgbg.map(str::to_string),
        }
    }
}

impl SystemPreference for EnvPreference {
    fn prefers_dark(&self) -> Option<bool> {
        if let Some(scheme) = self.scheme.as_deref() {
            match scheme.trim().to_ascii_lowercase().as_str() {
                "dark" => return Some(true),
                "light" => return Some(false),
                other => tracing::debug!("ignoring {}={:?}", SCHEME_ENV, other),
            }
        }

        self.colorfgbg.as_deref().and_then(parse_colorfgbg)
    }
}

/// The background is the last `;`-separated field
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

/// Detect the ambient color scheme from the process environment
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    EnvPreference::from_env()
        .prefers_dark()
        .map(ColorScheme::from_dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_scheme_wins() {
        let pref = EnvPreference::from_values(Some("Dark"), Some("0;15"));
        assert_eq!(pref.prefers_dark(), Some(true));
    }

    #[test]
    fn test_colorfgbg_fallback() {
        assert_eq!(EnvPreference::from_values(None, Some("15;0")).prefers_dark(), Some(true));
        assert_eq!(EnvPreference::from_values(None, Some("0;15")).prefers_dark(), Some(false));
        assert_eq!(
            EnvPreference::from_values(Some("auto"), Some("15;default;8")).prefers_dark(),
            Some(true)
        );
    }

    #[test]
    fn test_unknown_environment() {
        assert_eq!(EnvPreference::from_values(None, None).prefers_dark(), None);
        assert_eq!(EnvPreference::from_values(None, Some("garbage")).prefers_dark(), None);
    }
}
