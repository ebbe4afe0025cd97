// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration fields.
//!
//! This module serves as the single source of truth for default values
//! used when a field is omitted from the configuration.

// ==========================================================================
// Link Defaults
// ==========================================================================

/// Navigation target used when no `href` is configured (no-op anchor).
pub const DEFAULT_HREF: &str = "#";

/// Alternative text used when none is configured.
pub const DEFAULT_ALT: &str = "";

/// Accessible label used when `alt` is empty.
pub const FALLBACK_LABEL: &str = "Open link";

/// Links stay in the current browsing context unless asked otherwise.
pub const DEFAULT_NEW_TAB: bool = false;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Image width below the wide-viewport breakpoint.
pub const DEFAULT_IMG_WIDTH: &str = "min(35vw, 200px)";

/// Offset from the top edge of the positioned ancestor.
pub const DEFAULT_TOP: &str = "0.75rem";

/// Offset from the right edge of the positioned ancestor.
pub const DEFAULT_RIGHT: &str = "0.75rem";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_HREF.is_empty());
    assert!(!FALLBACK_LABEL.is_empty());
    assert!(!DEFAULT_IMG_WIDTH.is_empty());
    assert!(!DEFAULT_TOP.is_empty());
    assert!(!DEFAULT_RIGHT.is_empty());
};
