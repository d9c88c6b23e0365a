//! Insights widget construction.

use consentry_config::{merge, Options};
use consentry_render::{build_insights_widget, INSIGHTS_ROOT_ID};
use consentry_types::PrivacyInsight;
use pretty_assertions::assert_eq;

fn insight(id: &str, sponsored: bool) -> PrivacyInsight {
    PrivacyInsight {
        id: id.to_string(),
        title: format!("Insight {id}"),
        description: "Your trackers this week".to_string(),
        category: "statistics".to_string(),
        sponsored,
    }
}

#[test]
fn widget_lists_every_insight_under_the_reserved_root() {
    let config = merge(Options::default());
    let widget = build_insights_widget(&config, &[insight("a", false), insight("b", true)], "en");

    assert_eq!(widget.get_attr("id"), Some(INSIGHTS_ROOT_ID));
    let cards = widget.count(&mut |n| n.get_attr("data-insight-id").is_some());
    assert_eq!(cards, 2);
}

#[test]
fn only_sponsored_entries_carry_the_sponsored_label() {
    let config = merge(Options::default());
    let widget = build_insights_widget(&config, &[insight("a", false)], "en");
    assert!(!widget.text_content().contains("Sponsored"));

    let sponsored = build_insights_widget(&config, &[insight("b", true)], "en");
    assert!(sponsored.text_content().contains("Sponsored"));
}

#[test]
fn header_is_localized() {
    let config = merge(Options::default());
    let widget = build_insights_widget(&config, &[insight("a", false)], "fr-CA");
    assert!(widget
        .text_content()
        .contains("Conseils de confidentialité"));
}
