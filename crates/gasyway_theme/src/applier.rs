//! Token applier
//!
//! Maps a complete [`TokenSet`] onto style variables. The mapping is total and
//! deterministic: the same token set always produces the same variables with
//! the same values. Numeric px fields are written as `"{n}px"`, everything
//! else in its natural form.
//!
//! Values are not validated here. Out-of-range numbers coming from a remote
//! load are written as-is; clamping belongs to the editor.
//!
//! # Variable names
//!
//! The names are the contract every component styles against:
//!
//! - colors: `--primary`, `--primary-foreground`, ... `--border`
//! - `--font-family`, `--font-size`, `--font-weight-normal`, `--font-weight-medium`
//! - per element: `--h1-font-size`, `--h1-line-height`, `--h1-font-weight`,
//!   `--h1-text-transform`, `--h1-letter-spacing` (and so on for h2-h6, p, label)
//! - `--radius-base`, `--spacing-base`
//! - legacy aliases: `--radius`, `--text-2xl` .. `--text-xs`

use crate::error::Result;
use crate::style::{render_root_rule, StyleTarget};
use crate::tokens::{ColorToken, TextElement, TokenSet};
use indexmap::IndexMap;

/// Coarse text-size aliases kept for components that predate per-element
/// typography, and the element each one follows.
pub const LEGACY_TEXT_ALIASES: [(&str, TextElement); 6] = [
    ("--text-2xl", TextElement::H1),
    ("--text-xl", TextElement::H2),
    ("--text-lg", TextElement::H3),
    ("--text-base", TextElement::Paragraph),
    ("--text-sm", TextElement::Label),
    ("--text-xs", TextElement::H6),
];

fn px(value: impl std::fmt::Display) -> String {
    format!("{value}px")
}

/// Generate the full variable map for a token set.
///
/// Keys include the `--` prefix and come out in a fixed order.
pub fn css_variables(tokens: &TokenSet) -> IndexMap<String, String> {
    let mut vars = IndexMap::with_capacity(64);

    for token in ColorToken::ALL {
        vars.insert(token.css_var().to_string(), tokens.color(token).to_string());
    }

    vars.insert("--font-family".into(), tokens.font_family.clone());
    vars.insert("--font-size".into(), px(tokens.font_size));
    vars.insert(
        "--font-weight-normal".into(),
        tokens.font_weight_normal.to_string(),
    );
    vars.insert(
        "--font-weight-medium".into(),
        tokens.font_weight_medium.to_string(),
    );

    for element in TextElement::ALL {
        let block = tokens.element(element);
        let prefix = element.key();
        vars.insert(format!("--{prefix}-font-size"), px(block.font_size));
        vars.insert(
            format!("--{prefix}-line-height"),
            block.line_height.to_string(),
        );
        vars.insert(
            format!("--{prefix}-font-weight"),
            block.font_weight.to_string(),
        );
        vars.insert(
            format!("--{prefix}-text-transform"),
            block.text_transform.to_string(),
        );
        vars.insert(
            format!("--{prefix}-letter-spacing"),
            px(block.letter_spacing),
        );
    }

    vars.insert("--radius-base".into(), px(tokens.radius_base));
    vars.insert("--spacing-base".into(), px(tokens.spacing_base));

    // Legacy aliases
    vars.insert("--radius".into(), px(tokens.radius_base));
    for (name, element) in LEGACY_TEXT_ALIASES {
        vars.insert(name.to_string(), px(tokens.element(element).font_size));
    }

    vars
}

/// Write every variable of `tokens` onto `target`.
///
/// This is the only writer of token variables. It never reads the target.
/// Returns the number of variables written.
pub fn apply(tokens: &TokenSet, target: &dyn StyleTarget) -> Result<usize> {
    let vars = css_variables(tokens);
    for (name, value) in &vars {
        target.set_property(name, value)?;
    }
    tracing::debug!(count = vars.len(), primary = %tokens.primary, "applied design tokens");
    Ok(vars.len())
}

/// Render a token set as a standalone `:root` stylesheet
pub fn to_stylesheet(tokens: &TokenSet) -> String {
    render_root_rule(css_variables(tokens).iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DocumentStyle;
    use crate::tokens::{ElementTypography, TextTransform};

    #[test]
    fn px_fields_get_unit_suffix() {
        let vars = css_variables(&TokenSet::default());
        assert_eq!(vars["--font-size"], "16px");
        assert_eq!(vars["--h1-font-size"], "32px");
        assert_eq!(vars["--h1-letter-spacing"], "-0.5px");
        assert_eq!(vars["--p-letter-spacing"], "0px");
        assert_eq!(vars["--radius-base"], "10px");
        assert_eq!(vars["--spacing-base"], "16px");
    }

    #[test]
    fn unitless_fields_keep_natural_form() {
        let vars = css_variables(&TokenSet::default());
        assert_eq!(vars["--h1-line-height"], "1.2");
        assert_eq!(vars["--h1-font-weight"], "700");
        assert_eq!(vars["--h6-text-transform"], "uppercase");
        assert_eq!(vars["--font-weight-medium"], "500");
        assert_eq!(vars["--font-family"], "Outfit");
    }

    #[test]
    fn legacy_aliases_follow_element_blocks() {
        let mut tokens = TokenSet::default();
        tokens.h6 = ElementTypography::new(11, 1.0, 400, TextTransform::None, 0.0);
        tokens.radius_base = 4;

        let vars = css_variables(&tokens);
        assert_eq!(vars["--text-xs"], "11px");
        assert_eq!(vars["--text-2xl"], "32px");
        assert_eq!(vars["--radius"], "4px");
    }

    #[test]
    fn out_of_range_values_are_written_as_is() {
        let mut tokens = TokenSet::default();
        tokens.font_size = -3;
        tokens.h2.font_weight = 1250;
        tokens.h2.letter_spacing = 42.25;

        let style = DocumentStyle::new();
        apply(&tokens, &style).unwrap();
        assert_eq!(style.get_property("--font-size").unwrap().as_deref(), Some("-3px"));
        assert_eq!(style.get_property("--h2-font-weight").unwrap().as_deref(), Some("1250"));
        assert_eq!(
            style.get_property("--h2-letter-spacing").unwrap().as_deref(),
            Some("42.25px")
        );
    }

    #[test]
    fn apply_writes_every_variable() {
        let style = DocumentStyle::new();
        let written = apply(&TokenSet::default(), &style).unwrap();
        // 13 colors + 4 general + 8 elements * 5 + 2 spacing + 7 aliases
        assert_eq!(written, 66);
        assert_eq!(style.len(), written);
    }

    #[test]
    fn stylesheet_starts_with_root_rule() {
        let css = to_stylesheet(&TokenSet::default());
        assert!(css.starts_with(":root {\n  --primary: #0d4047;\n"));
        assert!(css.contains("  --text-xs: 14px;\n"));
        assert!(css.ends_with("}\n"));
    }
}
