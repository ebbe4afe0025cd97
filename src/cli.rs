// SPDX-License-Identifier: MPL-2.0
//! Command-line handling for the `floating-image-link` binary.
//!
//! Values come from a TOML config file (explicit `--config`, or the default
//! location) and are then overridden by individual flags.

use crate::config::{self, DisplayConfig};
use crate::error::{Error, Result};
use crate::ui::{host_page, render_html};
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
Render a clickable image pinned to the top-right corner of its container.

USAGE:
  floating-image-link [OPTIONS]

OPTIONS:
  --config PATH     Read settings from a TOML file
  --no-config       Ignore the default config file
  --src URI         Image source (required unless set in the config file)
  --href URI        Link target [default: #]
  --alt TEXT        Alternative text and accessible label
  --img-width LEN   Image width below 768px [default: min(35vw, 200px)]
  --top LEN         Offset from the container's top edge [default: 0.75rem]
  --right LEN       Offset from the container's right edge [default: 0.75rem]
  --new-tab         Open the link in a new, isolated tab
  --same-tab        Open the link in the current tab
  --page            Emit a complete preview page instead of a fragment
  --title TEXT      Preview page title [default: Preview]
  --strict          Fail on invalid lengths instead of using defaults
  --output PATH     Write to PATH instead of stdout
  -h, --help        Print help
  -V, --version     Print version
";

const DEFAULT_TITLE: &str = "Preview";

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub config: Option<PathBuf>,
    pub no_config: bool,
    pub src: Option<String>,
    pub href: Option<String>,
    pub alt: Option<String>,
    pub img_width: Option<String>,
    pub top: Option<String>,
    pub right: Option<String>,
    /// `Some(true)` for `--new-tab`, `Some(false)` for `--same-tab`.
    pub new_tab: Option<bool>,
    pub page: bool,
    pub title: Option<String>,
    pub strict: bool,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Render(Flags),
}

/// Parses process arguments (without the program name).
pub fn parse_args(args: Vec<OsString>) -> Result<Command> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if args.contains(["-V", "--version"]) {
        return Ok(Command::Version);
    }

    let new_tab = args.contains("--new-tab");
    let same_tab = args.contains("--same-tab");
    if new_tab && same_tab {
        return Err(Error::Usage(
            "--new-tab and --same-tab cannot be combined".to_string(),
        ));
    }

    let flags = Flags {
        config: args.opt_value_from_str("--config")?,
        no_config: args.contains("--no-config"),
        src: args.opt_value_from_str("--src")?,
        href: args.opt_value_from_str("--href")?,
        alt: args.opt_value_from_str("--alt")?,
        img_width: args.opt_value_from_str("--img-width")?,
        top: args.opt_value_from_str("--top")?,
        right: args.opt_value_from_str("--right")?,
        new_tab: match (new_tab, same_tab) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        page: args.contains("--page"),
        title: args.opt_value_from_str("--title")?,
        strict: args.contains("--strict"),
        output: args.opt_value_from_str("--output")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!(
            "unexpected arguments: {}",
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        )));
    }

    Ok(Command::Render(flags))
}

/// Builds the display config from the config file and flag overrides.
pub fn resolve_config(flags: &Flags) -> Result<DisplayConfig> {
    let base = match (&flags.config, flags.no_config) {
        (Some(path), _) => Some(config::load_from_path(path)?),
        (None, false) => config::load()?,
        (None, true) => None,
    };

    let mut config = match base {
        Some(config) => config,
        None => DisplayConfig::new(flags.src.clone().ok_or(Error::MissingSource)?),
    };

    let overrides = [
        (&mut config.src, &flags.src),
        (&mut config.href, &flags.href),
        (&mut config.alt, &flags.alt),
        (&mut config.img_width, &flags.img_width),
        (&mut config.top, &flags.top),
        (&mut config.right, &flags.right),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }
    if let Some(new_tab) = flags.new_tab {
        config.new_tab = new_tab;
    }

    if config.src.trim().is_empty() {
        return Err(Error::MissingSource);
    }
    Ok(config)
}

/// Produces the output text for `flags`.
pub fn render(flags: &Flags) -> Result<String> {
    let config = resolve_config(flags)?;
    if flags.strict {
        config.validate()?;
    }

    let output = if flags.page {
        let title = flags.title.as_deref().unwrap_or(DEFAULT_TITLE);
        host_page::preview_page(&config, title)
    } else {
        let mut html = render_html(&config);
        html.push('\n');
        html
    };
    Ok(output)
}
