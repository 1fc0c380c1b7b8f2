//! Design tokens
//!
//! A [`TokenSet`] is the complete bundle of values that parameterizes the
//! console's appearance:
//! - Colors (brand, surface, feedback, border)
//! - General typography (family, base size, weights)
//! - Per-element typography blocks (h1-h6, paragraph, label)
//! - Spacing (radius and spacing bases)
//!
//! A token set is always fully populated. Payloads missing some fields are
//! completed from [`TokenSet::default`] during deserialization, so partial
//! state never reaches the applier.

mod color;
mod typography;

pub use color::*;
pub use typography::*;

use serde::{Deserialize, Serialize};

/// Complete set of design tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenSet {
    // Brand colors
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub accent: String,
    pub accent_foreground: String,

    // Surface colors
    pub background: String,
    pub foreground: String,
    pub muted: String,
    pub muted_foreground: String,

    // Feedback colors
    pub destructive: String,
    pub destructive_foreground: String,

    // Border colors
    pub border: String,

    // General typography
    pub font_family: String,
    /// Base font size in px
    pub font_size: i32,
    pub font_weight_normal: i32,
    pub font_weight_medium: i32,

    // Per-element typography
    pub h1: ElementTypography,
    pub h2: ElementTypography,
    pub h3: ElementTypography,
    pub h4: ElementTypography,
    pub h5: ElementTypography,
    pub h6: ElementTypography,
    pub p: ElementTypography,
    pub label: ElementTypography,

    // Spacing
    /// Border radius base in px
    pub radius_base: i32,
    /// Spacing base in px
    pub spacing_base: i32,
}

impl TokenSet {
    /// Get a color by token key
    pub fn color(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::PrimaryForeground => &self.primary_foreground,
            ColorToken::Secondary => &self.secondary,
            ColorToken::SecondaryForeground => &self.secondary_foreground,
            ColorToken::Accent => &self.accent,
            ColorToken::AccentForeground => &self.accent_foreground,
            ColorToken::Background => &self.background,
            ColorToken::Foreground => &self.foreground,
            ColorToken::Muted => &self.muted,
            ColorToken::MutedForeground => &self.muted_foreground,
            ColorToken::Destructive => &self.destructive,
            ColorToken::DestructiveForeground => &self.destructive_foreground,
            ColorToken::Border => &self.border,
        }
    }

    /// Mutable access to a color slot
    pub fn color_mut(&mut self, token: ColorToken) -> &mut String {
        match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryForeground => &mut self.primary_foreground,
            ColorToken::Secondary => &mut self.secondary,
            ColorToken::SecondaryForeground => &mut self.secondary_foreground,
            ColorToken::Accent => &mut self.accent,
            ColorToken::AccentForeground => &mut self.accent_foreground,
            ColorToken::Background => &mut self.background,
            ColorToken::Foreground => &mut self.foreground,
            ColorToken::Muted => &mut self.muted,
            ColorToken::MutedForeground => &mut self.muted_foreground,
            ColorToken::Destructive => &mut self.destructive,
            ColorToken::DestructiveForeground => &mut self.destructive_foreground,
            ColorToken::Border => &mut self.border,
        }
    }

    /// Get the typography block of a text element
    pub fn element(&self, element: TextElement) -> &ElementTypography {
        match element {
            TextElement::H1 => &self.h1,
            TextElement::H2 => &self.h2,
            TextElement::H3 => &self.h3,
            TextElement::H4 => &self.h4,
            TextElement::H5 => &self.h5,
            TextElement::H6 => &self.h6,
            TextElement::Paragraph => &self.p,
            TextElement::Label => &self.label,
        }
    }

    /// Replace the typography block of a text element
    pub fn set_element(&mut self, element: TextElement, block: ElementTypography) {
        let slot = match element {
            TextElement::H1 => &mut self.h1,
            TextElement::H2 => &mut self.h2,
            TextElement::H3 => &mut self.h3,
            TextElement::H4 => &mut self.h4,
            TextElement::H5 => &mut self.h5,
            TextElement::H6 => &mut self.h6,
            TextElement::Paragraph => &mut self.p,
            TextElement::Label => &mut self.label,
        };
        *slot = block;
    }

    /// Wire keys of the fields that differ between `self` and `other`.
    ///
    /// Keys come out in declaration order. An empty result means the two sets
    /// are structurally equal.
    pub fn diff(&self, other: &TokenSet) -> Vec<&'static str> {
        let mut changed = Vec::new();

        for token in ColorToken::ALL {
            if self.color(token) != other.color(token) {
                changed.push(token.key());
            }
        }

        if self.font_family != other.font_family {
            changed.push("fontFamily");
        }
        if self.font_size != other.font_size {
            changed.push("fontSize");
        }
        if self.font_weight_normal != other.font_weight_normal {
            changed.push("fontWeightNormal");
        }
        if self.font_weight_medium != other.font_weight_medium {
            changed.push("fontWeightMedium");
        }

        for element in TextElement::ALL {
            if self.element(element) != other.element(element) {
                changed.push(element.key());
            }
        }

        if self.radius_base != other.radius_base {
            changed.push("radiusBase");
        }
        if self.spacing_base != other.spacing_base {
            changed.push("spacingBase");
        }

        changed
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self {
            primary: "#0d4047".to_string(),
            primary_foreground: "#ffffff".to_string(),
            secondary: "#c6e5de".to_string(),
            secondary_foreground: "#0d4047".to_string(),
            accent: "#bcdc49".to_string(),
            accent_foreground: "#0d4047".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#0d4047".to_string(),
            muted: "#ececf0".to_string(),
            muted_foreground: "#717182".to_string(),
            destructive: "#d4183d".to_string(),
            destructive_foreground: "#ffffff".to_string(),
            border: "rgba(0, 0, 0, 0.1)".to_string(),

            font_family: "Outfit".to_string(),
            font_size: 16,
            font_weight_normal: 400,
            font_weight_medium: 500,

            h1: ElementTypography::new(32, 1.2, 700, TextTransform::None, -0.5),
            h2: ElementTypography::new(28, 1.25, 600, TextTransform::None, -0.25),
            h3: ElementTypography::new(24, 1.3, 600, TextTransform::None, 0.0),
            h4: ElementTypography::new(20, 1.4, 500, TextTransform::None, 0.0),
            h5: ElementTypography::new(18, 1.4, 500, TextTransform::None, 0.0),
            h6: ElementTypography::new(14, 1.5, 500, TextTransform::Uppercase, 0.5),
            p: ElementTypography::new(16, 1.6, 400, TextTransform::None, 0.0),
            label: ElementTypography::new(14, 1.4, 500, TextTransform::None, 0.0),

            radius_base: 10,
            spacing_base: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_brand_primary() {
        let tokens = TokenSet::default();
        assert_eq!(tokens.color(ColorToken::Primary), "#0d4047");
        assert_eq!(tokens.font_size, 16);
    }

    #[test]
    fn color_mut_targets_matching_slot() {
        let mut tokens = TokenSet::default();
        *tokens.color_mut(ColorToken::MutedForeground) = "#123456".to_string();
        assert_eq!(tokens.muted_foreground, "#123456");
        assert_eq!(tokens.diff(&TokenSet::default()), vec!["mutedForeground"]);
    }

    #[test]
    fn set_element_replaces_whole_block() {
        let mut tokens = TokenSet::default();
        let block = ElementTypography::new(40, 1.1, 800, TextTransform::Capitalize, -1.0);
        tokens.set_element(TextElement::H2, block.clone());
        assert_eq!(tokens.element(TextElement::H2), &block);
        assert_eq!(tokens.diff(&TokenSet::default()), vec!["h2"]);
    }

    #[test]
    fn diff_of_equal_sets_is_empty() {
        assert!(TokenSet::default().diff(&TokenSet::default()).is_empty());
    }

    #[test]
    fn keys_round_trip_through_lookup() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_key(token.key()), Some(token));
        }
        for element in TextElement::ALL {
            assert_eq!(TextElement::from_key(element.key()), Some(element));
        }
        assert_eq!(ColorToken::from_key("ring"), None);
    }
}
