//! Application state and transitions (pure).

pub mod app_state;
pub mod theme;

pub use app_state::{AppState, OpenImage, ScrollState, NEAR_BOTTOM_ROWS};
pub use theme::{system_prefers_dark, ResolvedTheme, ThemeMode};
