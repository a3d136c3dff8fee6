//! Configuration: file loading, precedence, key bindings, theme store.

pub mod keybindings;
pub mod loader;
pub mod theme_store;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, load_config_file,
    load_config_with_precedence, merge_config, ConfigError, ConfigFile, ResolvedConfig,
};
pub use theme_store::{load_saved_theme, save_theme};
