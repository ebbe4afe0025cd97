// SPDX-License-Identifier: MPL-2.0
//! Host-side helpers: the positioned container the link anchors to, and a
//! standalone preview page.

use crate::config::DisplayConfig;
use crate::ui::css::{Rule, Stylesheet};
use crate::ui::floating_image_link::FloatingImageLink;
use html_escape::encode_text;

/// Class that makes an element the link's positioned ancestor.
pub const CONTAINER_CLASS: &str = "floating-container";

/// `.floating-container { position: relative; }`
pub fn container_rule() -> Rule {
    Rule::new(format!(".{CONTAINER_CLASS}")).decl("position", "relative")
}

/// A complete HTML document showing the link inside a positioned container.
pub fn preview_page(config: &DisplayConfig, title: &str) -> String {
    let fragment = FloatingImageLink::new(config).render();
    let page_styles = Stylesheet::new()
        .rule(
            Rule::new("body")
                .decl("margin", "0")
                .decl("font-family", "system-ui, sans-serif"),
        )
        .rule(
            container_rule()
                .decl("min-height", "100vh")
                .decl("padding", "1rem")
                .decl("box-sizing", "border-box"),
        );
    let title = encode_text(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{page_styles}  </style>
</head>
<body>
  <div class="{CONTAINER_CLASS}">
{fragment}
    <h1>{title}</h1>
  </div>
</body>
</html>
"#
    )
}
