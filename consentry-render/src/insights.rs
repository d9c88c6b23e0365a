//! Privacy-insights widget view.
//!
//! A small card stack shown a few seconds after consent, independent of
//! the banner. Sponsored entries are labeled; clicks are reported by the
//! runtime, not from here.

use consentry_config::Config;
use consentry_types::{Node, PrivacyInsight, Rule, Stylesheet};

use crate::banner::style_node;
use crate::texts::bundle_for;
use crate::theme::palette;
use crate::{INSIGHTS_ROOT_ID, INSIGHTS_VISIBLE_CLASS};

/// Builds the insights widget subtree.
#[must_use]
pub fn build_insights_widget(
    config: &Config,
    insights: &[PrivacyInsight],
    language: &str,
) -> Node {
    let texts = bundle_for(language);
    let colors = palette(&config.theme, &config.custom_colors);

    let mut sheet = Stylesheet::default();
    let root = format!("#{INSIGHTS_ROOT_ID}");
    sheet.push(
        Rule::new(&root)
            .decl("position", "fixed")
            .decl("bottom", "20px")
            .decl("left", "20px")
            .decl("max-width", "320px")
            .decl("z-index", "999997")
            .decl("background", &colors.background)
            .decl("color", &colors.text)
            .decl(
                "font-family",
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
            )
            .decl("font-size", "13px")
            .decl("border-radius", "12px")
            .decl("padding", "16px")
            .decl("box-shadow", "0 4px 20px rgba(0,0,0,0.15)")
            .decl("opacity", "0")
            .decl("transform", "translateY(12px)")
            .decl("transition", "all 0.3s ease"),
    );
    sheet.push(
        Rule::new(&format!("{root}.{INSIGHTS_VISIBLE_CLASS}"))
            .decl("opacity", "1")
            .decl("transform", "translateY(0)"),
    );
    sheet.push(
        Rule::new(".cns-insights-header")
            .decl("font-weight", "600")
            .decl("margin-bottom", "10px")
            .decl("color", &colors.accent),
    );
    sheet.push(
        Rule::new(".cns-insight")
            .decl("margin", "10px 0")
            .decl("padding", "10px")
            .decl("border", &format!("1px solid {}", colors.border))
            .decl("border-radius", "6px")
            .decl("cursor", "pointer"),
    );
    sheet.push(
        Rule::new(".cns-insight-title")
            .decl("font-weight", "600")
            .decl("margin-bottom", "4px"),
    );
    sheet.push(
        Rule::new(".cns-insight-sponsored")
            .decl("font-size", "11px")
            .decl("color", &colors.button_secondary)
            .decl("text-transform", "uppercase"),
    );

    let mut widget = Node::elem("div")
        .id(INSIGHTS_ROOT_ID)
        .class("cns-insights")
        .class(&format!("cns-theme-{}", config.theme.as_str()))
        .child(
            Node::elem("div")
                .class("cns-insights-header")
                .child(Node::text(texts.insights_header)),
        );

    for insight in insights {
        widget = widget.child(
            Node::elem("div")
                .class("cns-insight")
                .attr("data-insight-id", &insight.id)
                .child(
                    Node::elem("div")
                        .class("cns-insight-title")
                        .child(Node::text(&insight.title)),
                )
                .child(
                    Node::elem("div")
                        .class("cns-insight-description")
                        .child(Node::text(&insight.description)),
                )
                .child_if(
                    insight.sponsored,
                    Node::elem("span")
                        .class("cns-insight-sponsored")
                        .child(Node::text(texts.sponsored)),
                ),
        );
    }

    widget.child(style_node(&sheet))
}
