//! Clubsite Core
//!
//! Foundational primitives shared by the animation and theme crates:
//!
//! - **Color**: RGBA color values with CSS output
//! - **Geometry**: Rectangles and viewport visibility math
//! - **Listeners**: Callback registries for broadcasting state changes
//!
//! # Example
//!
//! ```rust
//! use clubsite_core::Rect;
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let card = Rect::new(0.0, 500.0, 200.0, 200.0);
//!
//! // Half of the card is inside the viewport
//! assert!((card.visible_fraction(&viewport) - 0.5).abs() < 1e-6);
//! ```

pub mod color;
pub mod geometry;
pub mod listeners;

pub use color::Color;
pub use geometry::Rect;
pub use listeners::{ListenerId, Listeners};
