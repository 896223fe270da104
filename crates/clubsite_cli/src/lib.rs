//! Clubsite command-line tooling
//!
//! The `clubsite` binary wires the library crates together: it loads
//! `clubsite.toml`, validates site data, renders page metadata, manages the
//! persisted theme choice and previews scroll reveals.

pub mod commands;
pub mod config;
pub mod logging;

pub use config::SiteConfig;
