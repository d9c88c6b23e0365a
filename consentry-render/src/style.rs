//! Scoped banner stylesheet.
//!
//! One stylesheet per banner, parameterized by palette, layout and
//! breakpoints. Selectors are all anchored under the reserved root id or
//! the `cns-` class prefix so host-page styles are never touched.

use consentry_config::{ButtonStyle, Config};
use consentry_types::{MediaBlock, Rule, Stylesheet};

use crate::theme::palette;
use crate::BANNER_ROOT_ID;

/// Builds the complete scoped stylesheet for the banner subtree.
#[must_use]
pub fn banner_stylesheet(config: &Config) -> Stylesheet {
    let colors = palette(&config.theme, &config.custom_colors);
    let root = format!("#{BANNER_ROOT_ID}");
    let mut sheet = Stylesheet::default();

    sheet.push(
        Rule::new(&root)
            .decl("position", "fixed")
            .decl("z-index", "999999")
            .decl("background", &colors.background)
            .decl("color", &colors.text)
            .decl(
                "font-family",
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
            )
            .decl("font-size", "14px")
            .decl("line-height", "1.5")
            .decl("opacity", "0")
            .decl("transition", "all 0.3s ease")
            .decl("box-shadow", "0 4px 20px rgba(0,0,0,0.15)"),
    );

    sheet.push(
        Rule::new(&format!("{root}.cns-layout-dialog"))
            .decl("max-width", "500px")
            .decl("border-radius", "12px")
            .decl("padding", "24px")
            .decl("margin", "20px"),
    );
    sheet.push(
        Rule::new(&format!("{root}.cns-layout-dialog.cns-position-bottom"))
            .decl("bottom", "0")
            .decl("right", "0")
            .decl("transform", "translateY(100%)"),
    );
    sheet.push(
        Rule::new(&format!("{root}.cns-layout-dialog.cns-position-top"))
            .decl("top", "0")
            .decl("right", "0")
            .decl("transform", "translateY(-100%)"),
    );
    sheet.push(
        Rule::new(&format!("{root}.cns-layout-dialog.cns-position-center"))
            .decl("top", "50%")
            .decl("left", "50%")
            .decl("transform", "translate(-50%, -50%) scale(0.9)"),
    );

    sheet.push(
        Rule::new(&format!("{root}.cns-layout-bar"))
            .decl("left", "0")
            .decl("right", "0")
            .decl("max-width", "none")
            .decl("border-radius", "0")
            .decl("padding", "16px 24px")
            .decl("margin", "0"),
    );
    sheet.push(
        Rule::new(&format!("{root}.cns-layout-bar.cns-position-bottom"))
            .decl("bottom", "0")
            .decl("transform", "translateY(100%)"),
    );
    sheet.push(
        Rule::new(&format!("{root}.cns-layout-bar.cns-position-top"))
            .decl("top", "0")
            .decl("transform", "translateY(-100%)"),
    );

    sheet.push(Rule::new(&format!("{root}.cns-banner-visible")).decl("opacity", "1"));
    sheet.push(
        Rule::new(&format!(
            "{root}.cns-banner-visible.cns-layout-dialog.cns-position-bottom, \
             {root}.cns-banner-visible.cns-layout-dialog.cns-position-top, \
             {root}.cns-banner-visible.cns-layout-bar"
        ))
        .decl("transform", "translateY(0)"),
    );
    sheet.push(
        Rule::new(&format!(
            "{root}.cns-banner-visible.cns-layout-dialog.cns-position-center"
        ))
        .decl("transform", "translate(-50%, -50%) scale(1)"),
    );

    sheet.push(
        Rule::new(".cns-close-button")
            .decl("position", "absolute")
            .decl("top", "12px")
            .decl("right", "12px")
            .decl("background", "none")
            .decl("border", "none")
            .decl("color", &colors.text)
            .decl("cursor", "pointer")
            .decl("padding", "4px")
            .decl("border-radius", "4px")
            .decl("opacity", "0.6")
            .decl("transition", "opacity 0.2s ease"),
    );

    sheet.push(
        Rule::new(".cns-logo")
            .decl("margin-bottom", "16px")
            .decl("text-align", "center"),
    );
    sheet.push(
        Rule::new(".cns-logo-img")
            .decl("max-height", "40px")
            .decl("max-width", "150px"),
    );
    sheet.push(
        Rule::new(".cns-logo-text")
            .decl("font-weight", "bold")
            .decl("font-size", "16px")
            .decl("color", &colors.accent),
    );

    sheet.push(Rule::new(".cns-banner-content").decl("position", "relative"));
    sheet.push(
        Rule::new(".cns-title")
            .decl("margin", "0 0 12px 0")
            .decl("font-size", "18px")
            .decl("font-weight", "600")
            .decl("color", &colors.accent),
    );
    sheet.push(
        Rule::new(".cns-description")
            .decl("margin", "0 0 16px 0")
            .decl("color", &colors.text)
            .decl("opacity", "0.9")
            .decl("line-height", "1.6"),
    );

    sheet.push(
        Rule::new(".cns-consent-options")
            .decl("margin", "16px 0")
            .decl("display", "grid")
            .decl("gap", "12px"),
    );
    sheet.push(
        Rule::new(".cns-checkbox-label")
            .decl("display", "flex")
            .decl("align-items", "center")
            .decl("cursor", "pointer")
            .decl("font-size", "14px")
            .decl("font-weight", "500"),
    );
    sheet.push(
        Rule::new(".cns-checkbox")
            .decl("margin-right", "12px")
            .decl("width", "18px")
            .decl("height", "18px")
            .decl("accent-color", &colors.accent),
    );

    sheet.push(
        Rule::new(".cns-ccpa-options")
            .decl("margin", "16px 0")
            .decl("padding", "16px")
            .decl("background", "rgba(0,0,0,0.05)")
            .decl("border-radius", "8px")
            .decl("border-left", &format!("4px solid {}", colors.accent)),
    );

    sheet.push(
        Rule::new(".cns-affiliate-section")
            .decl("margin", "16px 0")
            .decl("padding", "16px")
            .decl("background", "rgba(0,0,0,0.03)")
            .decl("border-radius", "8px")
            .decl("border", &format!("1px solid {}", colors.border)),
    );
    sheet.push(
        Rule::new(".cns-affiliate-header")
            .decl("font-weight", "600")
            .decl("margin-bottom", "12px")
            .decl("color", &colors.accent),
    );
    sheet.push(
        Rule::new(".cns-affiliate-ad")
            .decl("display", "flex")
            .decl("align-items", "center")
            .decl("margin", "12px 0")
            .decl("padding", "12px")
            .decl("background", &colors.background)
            .decl("border-radius", "6px")
            .decl("border", &format!("1px solid {}", colors.border)),
    );
    sheet.push(
        Rule::new(".cns-ad-image")
            .decl("width", "48px")
            .decl("height", "48px")
            .decl("border-radius", "6px")
            .decl("margin-right", "12px")
            .decl("object-fit", "cover"),
    );
    sheet.push(
        Rule::new(".cns-ad-link")
            .decl("font-size", "12px")
            .decl("color", &colors.accent)
            .decl("text-decoration", "none")
            .decl("font-weight", "600"),
    );

    sheet.push(
        Rule::new(".cns-buttons")
            .decl("display", "flex")
            .decl("gap", "12px")
            .decl("flex-wrap", "wrap")
            .decl("margin-top", "20px"),
    );
    sheet.push(
        Rule::new(".cns-button")
            .decl("padding", "12px 20px")
            .decl("border", "none")
            .decl("border-radius", "6px")
            .decl("cursor", "pointer")
            .decl("font-size", "14px")
            .decl("font-weight", "600")
            .decl("transition", "all 0.2s ease")
            .decl("flex", "1")
            .decl("min-width", "100px")
            .decl("text-align", "center"),
    );

    push_button_style(&mut sheet, config, &colors);

    sheet.push_media(MediaBlock {
        condition: format!("(max-width: {}px)", config.tablet_breakpoint),
        rules: vec![Rule::new(&format!("{root}.cns-layout-bar"))
            .decl("bottom", "20px")
            .decl("left", "20px")
            .decl("right", "20px")
            .decl("max-width", "none")
            .decl("border-radius", "12px")
            .decl("padding", "20px")],
    });
    sheet.push_media(MediaBlock {
        condition: format!("(max-width: {}px)", config.mobile_breakpoint),
        rules: vec![
            Rule::new(&root)
                .decl("left", "10px")
                .decl("right", "10px")
                .decl("bottom", "10px")
                .decl("top", "auto")
                .decl("max-width", "none")
                .decl("margin", "0")
                .decl("border-radius", "12px")
                .decl("padding", "16px"),
            Rule::new(".cns-buttons")
                .decl("flex-direction", "column")
                .decl("gap", "8px"),
            Rule::new(".cns-title").decl("font-size", "16px"),
            Rule::new(".cns-description").decl("font-size", "13px"),
        ],
    });

    sheet
}

fn push_button_style(sheet: &mut Stylesheet, config: &Config, colors: &crate::Palette) {
    match config.button_style {
        ButtonStyle::Solid => {
            sheet.push(
                Rule::new(".cns-buttons-solid .cns-button")
                    .decl("background", &colors.accent)
                    .decl("color", "white")
                    .decl("border", &format!("2px solid {}", colors.accent)),
            );
        }
        ButtonStyle::Outline => {
            sheet.push(
                Rule::new(".cns-buttons-outline .cns-button")
                    .decl("background", "transparent")
                    .decl("color", &colors.accent)
                    .decl("border", &format!("2px solid {}", colors.accent)),
            );
        }
        ButtonStyle::Default | ButtonStyle::Other(_) => {
            sheet.push(
                Rule::new(".cns-buttons-default .cns-button-accept")
                    .decl("background", &colors.button_primary)
                    .decl("color", "white")
                    .decl("border", &format!("2px solid {}", colors.button_primary)),
            );
            sheet.push(
                Rule::new(
                    ".cns-buttons-default .cns-button-decline, \
                     .cns-buttons-default .cns-button-save, \
                     .cns-buttons-default .cns-button-customize",
                )
                .decl("background", "transparent")
                .decl("color", &colors.text)
                .decl("border", &format!("2px solid {}", colors.border)),
            );
        }
    }
}
