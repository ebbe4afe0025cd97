// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: tokens, the stylesheet and markup models, and the
//! floating link component built on them.

pub mod css;
pub mod design_tokens;
pub mod floating_image_link;
pub mod host_page;
pub mod markup;
pub mod styles;

pub use floating_image_link::{render_html, FloatingImageLink, Fragment};
