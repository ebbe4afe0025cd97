// SPDX-License-Identifier: MPL-2.0
//! Minimal stylesheet model.
//!
//! Holds rules and media blocks in source order, renders them to CSS text,
//! and resolves which declarations apply for a given [`MediaEnvironment`].
//! Only the media features the component uses are modelled.

use std::fmt::{self, Write};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn decl(mut self, property: impl Into<String>, value: impl ToString) -> Self {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.to_string(),
        });
        self
    }

    /// Last value declared for `property` in this rule.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    fn write_to(&self, out: &mut impl Write, indent: &str) -> fmt::Result {
        writeln!(out, "{indent}{} {{", self.selector)?;
        for d in &self.declarations {
            writeln!(out, "{indent}  {}: {};", d.property, d.value)?;
        }
        writeln!(out, "{indent}}}")
    }
}

/// The user's `prefers-reduced-motion` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    fn keyword(self) -> &'static str {
        match self {
            MotionPreference::NoPreference => "no-preference",
            MotionPreference::Reduce => "reduce",
        }
    }
}

/// Conditions a media block can be gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCondition {
    /// `(min-width: Npx)`
    MinWidth(u32),
    /// `(prefers-reduced-motion: ...)`
    PrefersReducedMotion(MotionPreference),
}

impl MediaCondition {
    #[must_use]
    pub fn matches(self, env: &MediaEnvironment) -> bool {
        match self {
            MediaCondition::MinWidth(min) => env.viewport_width >= min,
            MediaCondition::PrefersReducedMotion(pref) => env.motion == pref,
        }
    }
}

impl fmt::Display for MediaCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaCondition::MinWidth(px) => write!(f, "(min-width: {px}px)"),
            MediaCondition::PrefersReducedMotion(pref) => {
                write!(f, "(prefers-reduced-motion: {})", pref.keyword())
            }
        }
    }
}

/// Viewport and user preferences media conditions are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaEnvironment {
    /// Viewport width in CSS pixels.
    pub viewport_width: u32,
    pub motion: MotionPreference,
}

impl MediaEnvironment {
    pub fn new(viewport_width: u32, motion: MotionPreference) -> Self {
        Self {
            viewport_width,
            motion,
        }
    }
}

/// Rules that only apply while `condition` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlock {
    pub condition: MediaCondition,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Rule(Rule),
    Media(MediaBlock),
}

/// Ordered list of rules and media blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    items: Vec<Item>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.items.push(Item::Rule(rule));
        self
    }

    #[must_use]
    pub fn media(mut self, condition: MediaCondition, rules: Vec<Rule>) -> Self {
        self.items.push(Item::Media(MediaBlock { condition, rules }));
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rules that apply in `env`, in source order.
    pub fn matching_rules(&self, env: MediaEnvironment) -> impl Iterator<Item = &Rule> + '_ {
        self.items.iter().flat_map(move |item| match item {
            Item::Rule(rule) => std::slice::from_ref(rule).iter(),
            Item::Media(block) if block.condition.matches(&env) => block.rules.iter(),
            Item::Media(_) => <&[Rule]>::default().iter(),
        })
    }

    /// Value of `property` on `selector` in `env`. Later declarations win;
    /// all of the component's selectors share one specificity.
    pub fn computed(&self, selector: &str, property: &str, env: &MediaEnvironment) -> Option<&str> {
        self.matching_rules(*env)
            .filter(|rule| rule.selector == selector)
            .filter_map(|rule| rule.get(property))
            .last()
    }

    /// Whether `property` is declared anywhere, regardless of media.
    pub fn declares(&self, property: &str) -> bool {
        self.all_rules()
            .any(|rule| rule.declarations.iter().any(|d| d.property == property))
    }

    /// Whether any rule targets `selector`, regardless of media.
    pub fn has_selector(&self, selector: &str) -> bool {
        self.all_rules().any(|rule| rule.selector == selector)
    }

    /// Flattened copy holding only what applies in `env`.
    #[must_use]
    pub fn effective(&self, env: &MediaEnvironment) -> Stylesheet {
        Stylesheet {
            items: self.matching_rules(*env).cloned().map(Item::Rule).collect(),
        }
    }

    fn all_rules(&self) -> impl Iterator<Item = &Rule> {
        self.items.iter().flat_map(|item| match item {
            Item::Rule(rule) => std::slice::from_ref(rule).iter(),
            Item::Media(block) => block.rules.iter(),
        })
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match item {
                Item::Rule(rule) => rule.write_to(f, "")?,
                Item::Media(block) => {
                    writeln!(f, "@media {} {{", block.condition)?;
                    for rule in &block.rules {
                        rule.write_to(f, "  ")?;
                    }
                    writeln!(f, "}}")?;
                }
            }
        }
        Ok(())
    }
}
