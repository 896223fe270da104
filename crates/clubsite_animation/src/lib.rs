//! Clubsite Animation System
//!
//! Scroll-triggered reveal animations for page content.
//!
//! # Features
//!
//! - **Reveal Presets**: A closed set of named entry animations (`fade`, `fade-up`, ...)
//! - **Spring Physics**: RK4-integrated damped springs for directional presets
//! - **Viewport Observation**: Visible-fraction tracking with threshold crossing
//! - **One-shot Reveal**: Each mounted region animates in at most once
//! - **Stagger**: Per-index delays for revealing lists
//!
//! # Example
//!
//! ```rust
//! use clubsite_animation::{RevealConfig, RevealPhase, RevealPreset, RevealScheduler};
//! use clubsite_core::Rect;
//!
//! let mut scheduler = RevealScheduler::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
//! let card = scheduler.mount(
//!     Rect::new(0.0, 1000.0, 400.0, 300.0),
//!     RevealConfig::new(RevealPreset::from_name("zoom")),
//! );
//! assert_eq!(scheduler.phase(card), Some(RevealPhase::Hidden));
//!
//! scheduler.scroll_to(600.0);
//! assert_eq!(scheduler.phase(card), Some(RevealPhase::Entering));
//! ```

pub mod easing;
pub mod keyframe;
pub mod observer;
pub mod presets;
pub mod reveal;
pub mod scheduler;
pub mod spring;
pub mod stagger;

pub use easing::Easing;
pub use keyframe::KeyframeProperties;
pub use observer::{
    meets_threshold, normalize_threshold, IntersectionEntry, ObserveError, ViewportObserver,
};
pub use presets::{RevealPreset, RevealTransition};
pub use reveal::{RevealBinding, RevealConfig, RevealPhase};
pub use scheduler::{RevealId, RevealScheduler};
pub use spring::{Spring, SpringConfig};
pub use stagger::{StaggerConfig, StaggerDirection};
