//! Design tokens for theming
//!
//! The site only themes colors; spacing and typography come from the
//! stylesheet and do not change between schemes.

mod color;

pub use color::*;
