//! Theme mode and toggle semantics.

use std::str::FromStr;

/// User-selectable theme mode.
///
/// `Auto` follows the detected terminal preference until the user toggles,
/// after which an explicit choice is stored and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Follow the detected preference.
    #[default]
    Auto,
    /// Explicit light theme.
    Light,
    /// Explicit dark theme.
    Dark,
}

/// A theme mode with `Auto` resolved away; what the renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve `Auto` against the detected preference.
    pub fn resolve(self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::Auto => {
                if prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }

    /// Toggle the theme.
    ///
    /// From `Auto` the first toggle picks the opposite of the detected
    /// preference (a visible change either way); afterwards it alternates
    /// dark ⇄ light. Never returns `Auto`, so the result is persistable.
    pub fn toggled(self, prefers_dark: bool) -> Self {
        match self {
            Self::Auto => {
                if prefers_dark {
                    Self::Light
                } else {
                    Self::Dark
                }
            }
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Detect whether the terminal prefers a dark background.
///
/// Uses the `COLORFGBG` hint some terminals export ("fg;bg", bg 0-6 and 8
/// are the dark palette slots). Absent or unparseable hints default to
/// dark, the common case for terminal work.
pub fn system_prefers_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => {
            let bg = value.rsplit(';').next().and_then(|s| s.parse::<u8>().ok());
            match bg {
                Some(bg) => bg <= 6 || bg == 8,
                None => true,
            }
        }
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn auto_resolves_against_preference() {
        assert_eq!(ThemeMode::Auto.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemeMode::Auto.resolve(false), ResolvedTheme::Light);
    }

    #[test]
    fn explicit_modes_ignore_preference() {
        assert_eq!(ThemeMode::Light.resolve(true), ResolvedTheme::Light);
        assert_eq!(ThemeMode::Dark.resolve(false), ResolvedTheme::Dark);
    }

    #[test]
    fn first_toggle_from_auto_picks_the_opposite_of_preference() {
        assert_eq!(ThemeMode::Auto.toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::Auto.toggled(false), ThemeMode::Dark);
    }

    #[test]
    fn explicit_modes_alternate() {
        assert_eq!(ThemeMode::Dark.toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(true), ThemeMode::Dark);
    }

    #[test]
    fn toggle_never_returns_auto() {
        for mode in [ThemeMode::Auto, ThemeMode::Light, ThemeMode::Dark] {
            for prefers in [true, false] {
                assert_ne!(mode.toggled(prefers), ThemeMode::Auto);
            }
        }
    }

    #[test]
    fn parses_canonical_names() {
        assert_eq!("auto".parse(), Ok(ThemeMode::Auto));
        assert_eq!("light".parse(), Ok(ThemeMode::Light));
        assert_eq!("dark".parse(), Ok(ThemeMode::Dark));
        assert_eq!("disco".parse::<ThemeMode>(), Err(()));
    }

    #[test]
    #[serial(folio_env)]
    fn colorfgbg_dark_background_detected() {
        std::env::set_var("COLORFGBG", "15;0");
        assert!(system_prefers_dark());
        std::env::set_var("COLORFGBG", "0;15");
        assert!(!system_prefers_dark());
        std::env::remove_var("COLORFGBG");
    }

    #[test]
    #[serial(folio_env)]
    fn missing_hint_defaults_to_dark() {
        std::env::remove_var("COLORFGBG");
        assert!(system_prefers_dark());
    }
}
