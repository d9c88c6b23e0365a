//! Scoped stylesheet as a data structure.
//!
//! Themes produce declarations, not interpolated CSS strings; the single
//! `to_css_string` call at mount time is the only place text is built.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One selector with its declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    /// Creates an empty rule for the selector.
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    /// Adds one declaration.
    #[must_use]
    pub fn decl(mut self, property: &str, value: &str) -> Self {
        self.declarations
            .push((property.to_string(), value.to_string()));
        self
    }
}

/// A `@media` block wrapping nested rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaBlock {
    /// The query condition, e.g. `(max-width: 600px)`.
    pub condition: String,
    pub rules: Vec<Rule>,
}

/// A complete scoped stylesheet: plain rules followed by media blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
    pub media: Vec<MediaBlock>,
}

impl Stylesheet {
    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Appends a media block.
    pub fn push_media(&mut self, block: MediaBlock) {
        self.media.push(block);
    }

    /// Finds a rule by exact selector.
    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    /// Renders the stylesheet to CSS text.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            write_rule(&mut out, rule, "");
        }
        for block in &self.media {
            let _ = writeln!(out, "@media {} {{", block.condition);
            for rule in &block.rules {
                write_rule(&mut out, rule, "  ");
            }
            out.push_str("}\n");
        }
        out
    }
}

fn write_rule(out: &mut String, rule: &Rule, indent: &str) {
    let _ = writeln!(out, "{indent}{} {{", rule.selector);
    for (property, value) in &rule.declarations {
        let _ = writeln!(out, "{indent}  {property}: {value};");
    }
    let _ = writeln!(out, "{indent}}}");
}
