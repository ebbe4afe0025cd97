// SPDX-License-Identifier: MPL-2.0
//! Image styles: responsive width, rounding, and shadow.

use super::{selector, IMAGE_CLASS};
use crate::domain::CssLength;
use crate::ui::css::{MediaCondition, Rule};
use crate::ui::design_tokens::{breakpoint, px, radius, shadow, sizing};

/// Base image rule; `width` applies below the wide breakpoint.
pub fn base(width: &CssLength) -> Rule {
    Rule::new(selector(IMAGE_CLASS, None))
        .decl("width", width)
        .decl("height", "auto")
        .decl("max-width", sizing::MAX_IMAGE_WIDTH)
        .decl("border-radius", px(radius::LG))
        .decl("box-shadow", shadow::FLOATING)
        .decl("display", "block")
}

pub const WIDE_CONDITION: MediaCondition = MediaCondition::MinWidth(breakpoint::WIDE);

/// Fixed-scale width for wide viewports.
pub fn wide() -> Rule {
    Rule::new(selector(IMAGE_CLASS, None)).decl("width", sizing::WIDE_IMAGE_WIDTH)
}
