//! Hueforge - color harmony and accessibility server
//!
//! HTTP and CLI front end for the `color-harmony` engine: palette
//! generation with locks, WCAG contrast, color vision simulation, PNG
//! export and generative palette suggestions.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
