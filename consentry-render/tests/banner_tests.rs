//! Banner construction rules.

use consentry_config::{merge, BannerType, Config, Options, Theme};
use consentry_render::{build_banner, build_overlay, control, BANNER_ROOT_ID, OVERLAY_ROOT_ID};
use consentry_types::{AffiliateAd, Node};
use pretty_assertions::assert_eq;

fn config_with(banner_type: BannerType) -> Config {
    let mut config = merge(Options::default());
    config.banner_type = banner_type;
    config
}

fn count_buttons(root: &Node) -> usize {
    root.count(&mut |n| {
        n.tag() == Some("button")
            && n.get_attr("class")
                .is_some_and(|c| c.split_whitespace().any(|class| class == "cns-button"))
    })
}

fn count_checkboxes(root: &Node) -> usize {
    root.count(&mut |n| n.tag() == Some("input") && n.get_attr("type") == Some("checkbox"))
}

// ── Button sets by banner type ───────────────────────────────────────

#[test]
fn accept_only_renders_a_single_accept_button() {
    let banner = build_banner(&config_with(BannerType::AcceptOnly), &[], "en");
    assert!(banner.find_by_id(control::ACCEPT_BUTTON).is_some());
    assert!(banner.find_by_id(control::DECLINE_BUTTON).is_none());
    assert!(banner.find_by_id(control::SAVE_BUTTON).is_none());
    assert_eq!(count_checkboxes(&banner), 0);
}

#[test]
fn accept_decline_renders_exactly_two_buttons_and_no_checkboxes() {
    let banner = build_banner(&config_with(BannerType::AcceptDecline), &[], "en");
    assert_eq!(count_buttons(&banner), 2);
    assert!(banner.find_by_id(control::DECLINE_BUTTON).is_some());
    assert!(banner.find_by_id(control::ACCEPT_BUTTON).is_some());
    assert_eq!(count_checkboxes(&banner), 0);
}

#[test]
fn ccpa_renders_do_not_sell_checkbox_and_save_button() {
    let banner = build_banner(&config_with(BannerType::Ccpa), &[], "en");
    assert_eq!(count_checkboxes(&banner), 1);
    assert!(banner.find_by_id(control::DO_NOT_SELL_CHECKBOX).is_some());
    assert_eq!(count_buttons(&banner), 1);
    assert!(banner.find_by_id(control::SAVE_BUTTON).is_some());
}

#[test]
fn inline_multilevel_defers_checkboxes_to_the_second_level() {
    let banner = build_banner(&config_with(BannerType::InlineMultilevel), &[], "en");
    assert_eq!(count_checkboxes(&banner), 0);
    assert!(banner.find_by_id(control::CUSTOMIZE_BUTTON).is_some());
    assert!(banner.find_by_id(control::ACCEPT_BUTTON).is_some());
}

#[test]
fn unknown_banner_type_falls_back_to_the_multilevel_set() {
    let banner = build_banner(&config_with(BannerType::Other("fancy".into())), &[], "en");
    assert!(banner.find_by_id(control::SAVE_BUTTON).is_some());
    assert!(banner.find_by_id(control::ACCEPT_BUTTON).is_some());
    // Four categories, necessary included.
    assert_eq!(count_checkboxes(&banner), 4);
}

// ── Granular checkboxes ──────────────────────────────────────────────

#[test]
fn necessary_checkbox_is_checked_and_disabled() {
    let banner = build_banner(&config_with(BannerType::Multilevel), &[], "en");
    let necessary = banner
        .find(&mut |n| {
            n.tag() == Some("input") && n.get_attr("disabled").is_some()
        })
        .expect("necessary checkbox");
    assert!(necessary.get_attr("checked").is_some());
}

#[test]
fn checkbox_defaults_precheck_the_optional_categories() {
    let mut config = config_with(BannerType::Multilevel);
    config.checkbox_defaults.statistics = true;
    let banner = build_banner(&config, &[], "en");

    let statistics = banner.find_by_id(control::STATISTICS_CHECKBOX).unwrap();
    assert!(statistics.get_attr("checked").is_some());
    let marketing = banner.find_by_id(control::MARKETING_CHECKBOX).unwrap();
    assert!(marketing.get_attr("checked").is_none());
}

#[test]
fn granular_consent_off_drops_the_category_checkboxes() {
    let mut config = config_with(BannerType::Multilevel);
    config.granular_consent = false;
    let banner = build_banner(&config, &[], "en");
    assert_eq!(count_checkboxes(&banner), 0);
}

// ── Chrome ───────────────────────────────────────────────────────────

#[test]
fn root_id_and_variant_classes_are_applied() {
    let banner = build_banner(&merge(Options::default()), &[], "en");
    assert_eq!(banner.get_attr("id"), Some(BANNER_ROOT_ID));
    let classes = banner.get_attr("class").unwrap();
    assert!(classes.contains("cns-layout-dialog"));
    assert!(classes.contains("cns-position-bottom"));
    assert!(classes.contains("cns-theme-light"));
    assert!(classes.contains("cns-type-multilevel"));
}

#[test]
fn close_icon_renders_only_when_configured() {
    let mut config = merge(Options::default());
    assert!(build_banner(&config, &[], "en")
        .find_by_id(control::CLOSE_BUTTON)
        .is_none());
    config.show_close_icon = true;
    assert!(build_banner(&config, &[], "en")
        .find_by_id(control::CLOSE_BUTTON)
        .is_some());
}

#[test]
fn company_name_renders_as_logo_text() {
    let mut config = merge(Options::default());
    config.company_name = "Acme Corp".to_string();
    let banner = build_banner(&config, &[], "en");
    assert!(banner.text_content().contains("Acme Corp"));
}

#[test]
fn localized_texts_follow_the_primary_subtag() {
    let config = merge(Options::default());
    let banner = build_banner(&config, &[], "es-MX");
    assert!(banner.text_content().contains("Valoramos tu privacidad"));

    let fallback = build_banner(&config, &[], "zz");
    assert!(fallback.text_content().contains("We value your privacy"));
}

#[test]
fn affiliate_section_appears_only_with_ads() {
    let config = merge(Options::default());
    let without = build_banner(&config, &[], "en");
    assert!(without
        .find(&mut |n| n.get_attr("class") == Some("cns-affiliate-section"))
        .is_none());

    let ads = vec![AffiliateAd {
        id: "ad-1".to_string(),
        image: "https://cdn.example/ad.png".to_string(),
        title: "Private VPN".to_string(),
        description: "Browse privately".to_string(),
        url: "https://vpn.example".to_string(),
    }];
    let with = build_banner(&config, &ads, "en");
    let card = with
        .find(&mut |n| n.get_attr("data-ad-id").is_some())
        .expect("ad card");
    assert_eq!(card.get_attr("data-ad-id"), Some("ad-1"));
    assert!(with.text_content().contains("Recommended for you"));
}

#[test]
fn banner_embeds_its_scoped_stylesheet() {
    let banner = build_banner(&merge(Options::default()), &[], "en");
    let style = banner.find(&mut |n| n.tag() == Some("style")).unwrap();
    let css = style.text_content();
    assert!(css.contains(&format!("#{BANNER_ROOT_ID}")));
    assert!(css.contains("z-index: 999999"));
}

// ── Overlay ──────────────────────────────────────────────────────────

#[test]
fn overlay_uses_the_theme_overlay_color() {
    let mut config = merge(Options::default());
    config.theme = Theme::Dark;
    let overlay = build_overlay(&config);
    assert_eq!(overlay.get_attr("id"), Some(OVERLAY_ROOT_ID));
    let css = overlay
        .find(&mut |n| n.tag() == Some("style"))
        .unwrap()
        .text_content();
    assert!(css.contains("rgba(0, 0, 0, 0.7)"));
}
