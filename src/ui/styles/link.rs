// SPDX-License-Identifier: MPL-2.0
//! Anchor styles: placement, focus ring, and the hover lift.

use super::{selector, LINK_CLASS};
use crate::domain::CssLength;
use crate::ui::css::{MediaCondition, MotionPreference, Rule};
use crate::ui::design_tokens::{focus, layer, motion, palette, px, radius};

/// Pins the link to the top-right of its positioned ancestor.
pub fn placement(top: &CssLength, right: &CssLength) -> Rule {
    Rule::new(selector(LINK_CLASS, None))
        .decl("position", "absolute")
        .decl("top", top)
        .decl("right", right)
        .decl("display", "inline-block")
        .decl("text-decoration", "none")
        // Drops the inline gap under the image.
        .decl("line-height", "0")
        .decl("z-index", layer::FLOATING)
}

/// Keyboard focus outline, following the image's rounded corners.
pub fn focus_ring() -> Rule {
    Rule::new(selector(LINK_CLASS, Some("focus-visible")))
        .decl(
            "outline",
            format!("{} solid {}", px(focus::OUTLINE_WIDTH), palette::FOCUS_RING),
        )
        .decl("outline-offset", px(focus::OUTLINE_OFFSET))
        .decl("border-radius", px(radius::LG))
}

/// Only users without a reduced-motion preference get these rules.
pub const MOTION_CONDITION: MediaCondition =
    MediaCondition::PrefersReducedMotion(MotionPreference::NoPreference);

/// Transition plus hover and active transforms.
pub fn lift() -> Vec<Rule> {
    let timing = format!("{}ms {}", motion::DURATION_MS, motion::EASING);
    vec![
        Rule::new(selector(LINK_CLASS, None)).decl(
            "transition",
            format!("transform {timing}, box-shadow {timing}"),
        ),
        Rule::new(selector(LINK_CLASS, Some("hover")))
            .decl("transform", format!("translateY({})", px(-motion::LIFT))),
        Rule::new(selector(LINK_CLASS, Some("active"))).decl("transform", "translateY(0)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_uses_offsets() {
        let top = CssLength::parse("top", "1rem").unwrap();
        let right = CssLength::parse("right", "2rem").unwrap();
        let rule = placement(&top, &right);
        assert_eq!(rule.selector, ".floating-image-link");
        assert_eq!(rule.get("position"), Some("absolute"));
        assert_eq!(rule.get("top"), Some("1rem"));
        assert_eq!(rule.get("right"), Some("2rem"));
        assert_eq!(rule.get("z-index"), Some("9"));
        assert_eq!(rule.get("line-height"), Some("0"));
    }

    #[test]
    fn focus_ring_matches_tokens() {
        let rule = focus_ring();
        assert_eq!(rule.selector, ".floating-image-link:focus-visible");
        assert_eq!(rule.get("outline"), Some("3px solid rgba(0, 0, 0, 0.5)"));
        assert_eq!(rule.get("outline-offset"), Some("4px"));
        assert_eq!(rule.get("border-radius"), Some("12px"));
    }

    #[test]
    fn lift_rules_cover_transition_hover_and_active() {
        let rules = lift();
        assert_eq!(
            rules[0].get("transition"),
            Some("transform 160ms ease, box-shadow 160ms ease")
        );
        assert_eq!(rules[1].get("transform"), Some("translateY(-2px)"));
        assert_eq!(rules[2].selector, ".floating-image-link:active");
        assert_eq!(rules[2].get("transform"), Some("translateY(0)"));
    }
}
