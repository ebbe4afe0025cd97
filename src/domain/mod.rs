// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Value types and the rules that validate them.
//!
//! Apart from `tracing` diagnostics on fallback paths, nothing here depends
//! on crates beyond `std`.
//!
//! # Modules
//!
//! - [`length`]: CSS length expressions ([`CssLength`](length::CssLength))
//! - [`link_target`]: Browsing context selection ([`LinkTarget`](link_target::LinkTarget))

pub mod length;
pub mod link_target;

pub use length::{CssLength, LengthError};
pub use link_target::LinkTarget;
