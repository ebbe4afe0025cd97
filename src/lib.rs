// SPDX-License-Identifier: MPL-2.0
//! `floating_image_link` renders a clickable image pinned to the top-right
//! corner of its container as an HTML fragment.
//!
//! The fragment carries its own styles: responsive width, rounded corners
//! and shadow, a keyboard focus ring, and a hover lift that is dropped for
//! users who prefer reduced motion.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use config::DisplayConfig;
pub use error::{Error, Result};
pub use ui::{render_html, FloatingImageLink, Fragment};
