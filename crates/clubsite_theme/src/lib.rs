//! Clubsite Theme System
//!
//! Shared light/dark state for every view on the site.
//!
//! # Overview
//!
//! - **ThemeState**: a single authoritative dark-mode flag with subscribers
//! - **Persistence**: the last choice is stored and restored on the next start
//! - **Ambient preference**: the environment's color scheme is used when no
//!   choice has been stored
//! - **Style marker**: the root `dark` class is kept in sync with the flag
//!
//! # Quick Start
//!
//! ```rust
//! use clubsite_theme::{ThemeOptions, ThemeState};
//!
//! let theme = ThemeState::init(ThemeOptions::in_memory());
//! assert!(!theme.is_dark());
//!
//! let (is_dark, toggle) = theme.use_theme();
//! assert!(!is_dark);
//! toggle.toggle();
//! assert!(theme.is_dark());
//! ```
//!
//! Storage failures never surface to callers: the in-memory value stays
//! authoritative and the failure is logged.

mod error;
pub mod marker;
pub mod platform;
pub mod state;
pub mod storage;
pub mod theme;
pub mod tokens;

pub use error::ThemeError;
pub use marker::{RootClassList, StyleMarker, DARK_CLASS};
pub use platform::{detect_system_color_scheme, EnvPreference, FixedPreference, SystemPreference};
pub use state::{InitialSource, ThemeOptions, ThemeState, ThemeToggle, STORAGE_KEY};
pub use storage::{DisabledStorage, FileStorage, MemoryStorage, ThemeStorage};
pub use theme::ColorScheme;
pub use tokens::*;
