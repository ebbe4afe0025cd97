// SPDX-License-Identifier: MPL-2.0
//! Clickable image pinned to the top-right corner of its container.
//!
//! The host page must give some ancestor a non-static `position` (see
//! [`host_page::container_rule`](crate::ui::host_page::container_rule)).
//!
//! # Examples
//!
//! ```
//! use floating_image_link::config::DisplayConfig;
//! use floating_image_link::ui::floating_image_link::FloatingImageLink;
//!
//! let mut config = DisplayConfig::new("/img.png");
//! config.alt = "Promo".to_string();
//! config.new_tab = true;
//!
//! let link = FloatingImageLink::new(&config);
//! let html = link.render().to_string();
//! assert!(html.contains(r#"aria-label="Promo""#));
//! assert!(html.contains(r#"rel="noopener noreferrer""#));
//! ```

use crate::config::{
    DisplayConfig, DEFAULT_IMG_WIDTH, DEFAULT_RIGHT, DEFAULT_TOP, FALLBACK_LABEL,
};
use crate::domain::{CssLength, LinkTarget};
use crate::ui::css::Stylesheet;
use crate::ui::markup::Element;
use crate::ui::styles::{image, link, IMAGE_CLASS, LINK_CLASS};
use std::fmt;

/// A resolved, ready-to-render floating link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingImageLink {
    src: String,
    href: String,
    alt: String,
    img_width: CssLength,
    top: CssLength,
    right: CssLength,
    target: LinkTarget,
}

impl FloatingImageLink {
    /// Resolves `config`. Invalid lengths fall back to their defaults.
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            src: config.src.clone(),
            href: config.href.clone(),
            alt: config.alt.clone(),
            img_width: CssLength::parse_or("img_width", &config.img_width, DEFAULT_IMG_WIDTH),
            top: CssLength::parse_or("top", &config.top, DEFAULT_TOP),
            right: CssLength::parse_or("right", &config.right, DEFAULT_RIGHT),
            target: LinkTarget::from_new_tab(config.new_tab),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn target(&self) -> LinkTarget {
        self.target
    }

    pub fn img_width(&self) -> &CssLength {
        &self.img_width
    }

    pub fn top(&self) -> &CssLength {
        &self.top
    }

    pub fn right(&self) -> &CssLength {
        &self.right
    }

    /// `alt` when non-empty, otherwise a generic label.
    pub fn aria_label(&self) -> &str {
        if self.alt.is_empty() {
            FALLBACK_LABEL
        } else {
            &self.alt
        }
    }

    /// Rules for placement, focus, responsive width, and motion.
    pub fn stylesheet(&self) -> Stylesheet {
        Stylesheet::new()
            .rule(link::placement(&self.top, &self.right))
            .rule(link::focus_ring())
            .rule(image::base(&self.img_width))
            .media(image::WIDE_CONDITION, vec![image::wide()])
            .media(link::MOTION_CONDITION, link::lift())
    }

    /// The anchor wrapping the image.
    pub fn anchor(&self) -> Element {
        let img = Element::new("img")
            .attr("class", IMAGE_CLASS)
            .attr("src", self.src.as_str())
            .attr("alt", self.alt.as_str());

        Element::new("a")
            .attr("class", LINK_CLASS)
            .attr("href", self.href.as_str())
            .attr_opt("target", self.target.target_attr())
            .attr_opt("rel", self.target.rel_attr())
            .attr("aria-label", self.aria_label())
            .child(img)
    }

    pub fn render(&self) -> Fragment {
        tracing::debug!(src = %self.src, href = %self.href, link_target = ?self.target, "rendering floating link");
        Fragment {
            stylesheet: self.stylesheet(),
            anchor: self.anchor(),
        }
    }
}

/// Renders `config` straight to HTML.
pub fn render_html(config: &DisplayConfig) -> String {
    FloatingImageLink::new(config).render().to_string()
}

/// Rendered output: a `<style>` element followed by the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub stylesheet: Stylesheet,
    pub anchor: Element,
}

impl Fragment {
    pub fn style_element(&self) -> Element {
        Element::new("style").raw(self.stylesheet.to_string())
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style_element())?;
        write!(f, "{}", self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::css::{MediaEnvironment, MotionPreference};

    fn image(anchor: &Element) -> &Element {
        anchor.child_elements().next().expect("anchor wraps an image")
    }

    #[test]
    fn label_prefers_alt() {
        let mut config = DisplayConfig::new("/img.png");
        config.alt = "Promo".to_string();
        assert_eq!(FloatingImageLink::new(&config).aria_label(), "Promo");
    }

    #[test]
    fn label_falls_back_when_alt_is_empty() {
        let link = FloatingImageLink::new(&DisplayConfig::new("/img.png"));
        assert_eq!(link.aria_label(), "Open link");
        assert_eq!(link.anchor().get_attr("aria-label"), Some("Open link"));
    }

    #[test]
    fn image_keeps_empty_alt_attribute() {
        let anchor = FloatingImageLink::new(&DisplayConfig::new("/img.png")).anchor();
        assert_eq!(image(&anchor).get_attr("alt"), Some(""));
        assert_eq!(image(&anchor).get_attr("src"), Some("/img.png"));
        assert_eq!(image(&anchor).get_attr("class"), Some("floating-image"));
    }

    #[test]
    fn new_tab_adds_target_and_rel() {
        let mut config = DisplayConfig::new("/img.png");
        config.new_tab = true;
        let anchor = FloatingImageLink::new(&config).anchor();
        assert_eq!(anchor.get_attr("target"), Some("_blank"));
        assert_eq!(anchor.get_attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn same_tab_has_neither_target_nor_rel() {
        let anchor = FloatingImageLink::new(&DisplayConfig::new("/img.png")).anchor();
        assert!(!anchor.has_attr("target"));
        assert!(!anchor.has_attr("rel"));
        assert_eq!(anchor.get_attr("href"), Some("#"));
    }

    #[test]
    fn invalid_lengths_fall_back_to_defaults() {
        let mut config = DisplayConfig::new("/img.png");
        config.top = "1px; color: red".to_string();
        config.right = String::new();
        config.img_width = "10vw</style>".to_string();
        let link = FloatingImageLink::new(&config);
        assert_eq!(link.top().as_str(), DEFAULT_TOP);
        assert_eq!(link.right().as_str(), DEFAULT_RIGHT);
        assert_eq!(link.img_width().as_str(), DEFAULT_IMG_WIDTH);
        let html = link.render().to_string();
        assert!(!html.contains("color: red"));
        assert!(!html.contains("10vw"));
    }

    #[test]
    fn unclosed_comment_in_width_keeps_breakpoint_rules() {
        let mut config = DisplayConfig::new("/img.png");
        config.img_width = "10vw /*".to_string();
        let html = render_html(&config);
        assert!(!html.contains("/*"));
        assert!(html.contains("width: min(35vw, 200px);"));
        assert!(html.contains("@media (min-width: 768px)"));
    }

    #[test]
    fn width_switches_at_breakpoint() {
        let mut config = DisplayConfig::new("/img.png");
        config.img_width = "50vw".to_string();
        let sheet = FloatingImageLink::new(&config).stylesheet();
        let narrow = MediaEnvironment::new(767, MotionPreference::NoPreference);
        let wide = MediaEnvironment::new(768, MotionPreference::NoPreference);
        assert_eq!(sheet.computed(".floating-image", "width", &narrow), Some("50vw"));
        assert_eq!(
            sheet.computed(".floating-image", "width", &wide),
            Some("min(22vw, 240px)")
        );
    }

    #[test]
    fn reduced_motion_removes_transition_and_transforms() {
        let sheet = FloatingImageLink::new(&DisplayConfig::new("/img.png")).stylesheet();
        let reduced = sheet.effective(&MediaEnvironment::new(1024, MotionPreference::Reduce));
        assert!(!reduced.declares("transition"));
        assert!(!reduced.declares("transform"));
        assert!(!reduced.has_selector(".floating-image-link:hover"));
        assert!(!reduced.has_selector(".floating-image-link:active"));

        let animated =
            sheet.effective(&MediaEnvironment::new(1024, MotionPreference::NoPreference));
        assert!(animated.declares("transition"));
        assert!(animated.has_selector(".floating-image-link:hover"));
    }

    #[test]
    fn fragment_places_style_before_anchor() {
        let html = render_html(&DisplayConfig::new("/img.png"));
        let style_at = html.find("<style>").unwrap();
        let anchor_at = html.find("<a ").unwrap();
        assert!(style_at < anchor_at);
        assert!(html.ends_with("</a>"));
        assert!(!html.contains("inset"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut config = DisplayConfig::new(r#"/img.png" onerror="x"#);
        config.alt = "Tom & Jerry".to_string();
        let html = render_html(&config);
        assert!(html.contains(r#"src="/img.png&quot; onerror=&quot;x""#));
        assert!(html.contains(r#"aria-label="Tom &amp; Jerry""#));
    }
}
