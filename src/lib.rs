//! folio
//!
//! TUI viewer for personal portfolio timeline JSON documents.
//!
//! The crate follows a Pure Core / Impure Shell split: `model`, `parser`,
//! `carousel`, and `state` hold pure data and transitions; `view` owns the
//! terminal.

pub mod carousel;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
