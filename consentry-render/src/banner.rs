//! Banner and overlay view builders.

use consentry_config::{BannerType, Config};
use consentry_types::{AffiliateAd, Node, Rule, Stylesheet};

use crate::style::banner_stylesheet;
use crate::texts::{bundle_for, TextBundle};
use crate::theme::palette;
use crate::{control, BANNER_ROOT_ID, OVERLAY_ROOT_ID, OVERLAY_VISIBLE_CLASS};

/// Builds the complete banner subtree for one show.
///
/// Pure: the same configuration, ads and language always produce the same
/// tree. The scoped stylesheet rides along as an embedded `<style>` child
/// so a single mount call installs everything.
#[must_use]
pub fn build_banner(config: &Config, ads: &[AffiliateAd], language: &str) -> Node {
    let texts = bundle_for(language);

    let root_classes = format!(
        "cns-banner cns-layout-{} cns-position-{} cns-theme-{} cns-buttons-{} cns-type-{}",
        config.layout.as_str(),
        config.position.as_str(),
        config.theme.as_str(),
        config.button_style.as_str(),
        config.banner_type.as_str(),
    );

    let mut main = Node::elem("div").class("cns-main-content").child(
        Node::elem("div")
            .class("cns-message")
            .child(
                Node::elem("h3")
                    .class("cns-title")
                    .child(Node::text(texts.title)),
            )
            .child(
                Node::elem("p")
                    .class("cns-description")
                    .child(Node::text(texts.description)),
            ),
    );
    main = main.maybe_child(consent_options(config, texts));
    if !ads.is_empty() {
        main = main.child(affiliate_section(ads, texts));
    }
    main = main.child(buttons(config, texts));

    let content = Node::elem("div")
        .class("cns-banner-content")
        .child_if(config.show_close_icon, close_button())
        .maybe_child(logo(config))
        .child(main);

    Node::elem("div")
        .id(BANNER_ROOT_ID)
        .attr("class", &root_classes)
        .child(content)
        .child(style_node(&banner_stylesheet(config)))
}

/// Builds the dialog overlay subtree.
#[must_use]
pub fn build_overlay(config: &Config) -> Node {
    let colors = palette(&config.theme, &config.custom_colors);
    let mut sheet = Stylesheet::default();
    sheet.push(
        Rule::new(&format!("#{OVERLAY_ROOT_ID}"))
            .decl("position", "fixed")
            .decl("top", "0")
            .decl("left", "0")
            .decl("width", "100%")
            .decl("height", "100%")
            .decl("background", &colors.overlay_color)
            .decl("z-index", "999998")
            .decl("opacity", "0")
            .decl("transition", "opacity 0.3s ease")
            .decl("pointer-events", "none"),
    );
    sheet.push(
        Rule::new(&format!("#{OVERLAY_ROOT_ID}.{OVERLAY_VISIBLE_CLASS}")).decl("opacity", "1"),
    );

    Node::elem("div")
        .id(OVERLAY_ROOT_ID)
        .class("cns-overlay")
        .child(style_node(&sheet))
}

pub(crate) fn style_node(sheet: &Stylesheet) -> Node {
    Node::elem("style").child(Node::text(&sheet.to_css_string()))
}

fn close_button() -> Node {
    Node::elem("button")
        .id(control::CLOSE_BUTTON)
        .class("cns-close-button")
        .attr("aria-label", "Close")
        .child(Node::text("\u{2715}"))
}

fn logo(config: &Config) -> Option<Node> {
    if !config.show_logo || (config.logo_url.is_none() && config.company_name.is_empty()) {
        return None;
    }
    let inner = match &config.logo_url {
        Some(url) => Node::elem("img")
            .class("cns-logo-img")
            .attr("src", url)
            .attr("alt", &config.company_name),
        None => Node::elem("span")
            .class("cns-logo-text")
            .child(Node::text(&config.company_name)),
    };
    Some(Node::elem("div").class("cns-logo").child(inner))
}

/// The granular consent controls, when the banner type carries any.
///
/// Only the multilevel type shows per-category checkboxes inline (and
/// only with `granularConsent`); the inline-multilevel type defers them
/// to its second level, and the CCPA type shows a single do-not-sell
/// checkbox instead.
fn consent_options(config: &Config, texts: &TextBundle) -> Option<Node> {
    match &config.banner_type {
        BannerType::Ccpa => Some(
            Node::elem("div").class("cns-ccpa-options").child(checkbox(
                control::DO_NOT_SELL_CHECKBOX,
                texts.do_not_sell,
                false,
                false,
            )),
        ),
        BannerType::Multilevel | BannerType::Other(_) if config.granular_consent => {
            let defaults = &config.checkbox_defaults;
            Some(
                Node::elem("div")
                    .class("cns-consent-options")
                    .child(category(checkbox("", texts.necessary, true, true)))
                    .child(category(checkbox(
                        control::PREFERENCES_CHECKBOX,
                        texts.preferences,
                        defaults.preferences,
                        false,
                    )))
                    .child(category(checkbox(
                        control::STATISTICS_CHECKBOX,
                        texts.statistics,
                        defaults.statistics,
                        false,
                    )))
                    .child(category(checkbox(
                        control::MARKETING_CHECKBOX,
                        texts.marketing,
                        defaults.marketing,
                        false,
                    ))),
            )
        }
        _ => None,
    }
}

fn category(label: Node) -> Node {
    Node::elem("div").class("cns-consent-category").child(label)
}

fn checkbox(id: &str, label: &str, checked: bool, disabled: bool) -> Node {
    let mut input = Node::elem("input")
        .attr("type", "checkbox")
        .class("cns-checkbox");
    if !id.is_empty() {
        input = input.id(id);
    }
    if checked {
        input = input.flag("checked");
    }
    if disabled {
        input = input.flag("disabled");
    }
    Node::elem("label")
        .class("cns-checkbox-label")
        .child(input)
        .child(Node::text(label))
}

fn affiliate_section(ads: &[AffiliateAd], texts: &TextBundle) -> Node {
    let mut list = Node::elem("div").class("cns-affiliate-ads");
    for ad in ads {
        list = list.child(
            Node::elem("div")
                .class("cns-affiliate-ad")
                .attr("data-ad-id", &ad.id)
                .child(
                    Node::elem("img")
                        .class("cns-ad-image")
                        .attr("src", &ad.image)
                        .attr("alt", &ad.title),
                )
                .child(
                    Node::elem("div")
                        .class("cns-ad-content")
                        .child(
                            Node::elem("div")
                                .class("cns-ad-title")
                                .child(Node::text(&ad.title)),
                        )
                        .child(
                            Node::elem("div")
                                .class("cns-ad-description")
                                .child(Node::text(&ad.description)),
                        )
                        .child(
                            Node::elem("a")
                                .class("cns-ad-link")
                                .attr("href", &ad.url)
                                .attr("target", "_blank")
                                .attr("rel", "noopener")
                                .child(Node::text(texts.learn_more)),
                        ),
                ),
        );
    }
    Node::elem("div")
        .class("cns-affiliate-section")
        .child(
            Node::elem("div")
                .class("cns-affiliate-header")
                .child(Node::text(texts.affiliate_header)),
        )
        .child(list)
}

fn button(id: &str, kind: &str, label: &str) -> Node {
    Node::elem("button")
        .id(id)
        .class("cns-button")
        .class(&format!("cns-button-{kind}"))
        .child(Node::text(label))
}

/// The button row, strictly by banner type.
fn buttons(config: &Config, texts: &TextBundle) -> Node {
    let row = Node::elem("div").class("cns-buttons");
    match &config.banner_type {
        BannerType::AcceptOnly => {
            row.child(button(control::ACCEPT_BUTTON, "accept", texts.accept))
        }
        BannerType::AcceptDecline => row
            .child(button(control::DECLINE_BUTTON, "decline", texts.decline))
            .child(button(control::ACCEPT_BUTTON, "accept", texts.accept)),
        BannerType::InlineMultilevel => row
            .child(button(
                control::CUSTOMIZE_BUTTON,
                "customize",
                texts.customize,
            ))
            .child(button(control::ACCEPT_BUTTON, "accept", texts.accept)),
        BannerType::Ccpa => row.child(button(
            control::SAVE_BUTTON,
            "save",
            texts.save_preferences,
        )),
        BannerType::Multilevel | BannerType::Other(_) => row
            .child_if(
                config.show_decline_button,
                button(control::DECLINE_BUTTON, "decline", texts.decline),
            )
            .child(button(
                control::SAVE_BUTTON,
                "save",
                texts.save_preferences,
            ))
            .child(button(control::ACCEPT_BUTTON, "accept", texts.accept)),
    }
}
