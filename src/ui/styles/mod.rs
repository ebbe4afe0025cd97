// SPDX-License-Identifier: MPL-2.0
//! Centralized style rules for the floating link.

pub mod image;
pub mod link;

/// Class carried by the anchor.
pub const LINK_CLASS: &str = "floating-image-link";

/// Class carried by the image inside the anchor.
pub const IMAGE_CLASS: &str = "floating-image";

/// Builds a class selector, optionally with a pseudo-class.
pub(crate) fn selector(class: &str, pseudo: Option<&str>) -> String {
    match pseudo {
        Some(pseudo) => format!(".{class}:{pseudo}"),
        None => format!(".{class}"),
    }
}
