//! Typography tokens
//!
//! Each text element (heading levels 1-6, paragraph and label) carries its own
//! block of typography values. Blocks are replaced whole when edited.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Text elements that own a typography block
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextElement {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Paragraph,
    Label,
}

impl TextElement {
    /// Every element, in variable-emission order.
    pub const ALL: [TextElement; 8] = [
        TextElement::H1,
        TextElement::H2,
        TextElement::H3,
        TextElement::H4,
        TextElement::H5,
        TextElement::H6,
        TextElement::Paragraph,
        TextElement::Label,
    ];

    /// Wire key, also used as the style-variable prefix (`--h1-font-size`).
    pub fn key(self) -> &'static str {
        match self {
            TextElement::H1 => "h1",
            TextElement::H2 => "h2",
            TextElement::H3 => "h3",
            TextElement::H4 => "h4",
            TextElement::H5 => "h5",
            TextElement::H6 => "h6",
            TextElement::Paragraph => "p",
            TextElement::Label => "label",
        }
    }

    /// Look up an element by its wire key.
    pub fn from_key(key: &str) -> Option<TextElement> {
        Self::ALL.into_iter().find(|element| element.key() == key)
    }
}

/// CSS `text-transform` values accepted by the editor
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    pub fn as_str(self) -> &'static str {
        match self {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
    }

    pub fn parse(value: &str) -> Option<TextTransform> {
        match value {
            "none" => Some(TextTransform::None),
            "uppercase" => Some(TextTransform::Uppercase),
            "lowercase" => Some(TextTransform::Lowercase),
            "capitalize" => Some(TextTransform::Capitalize),
            _ => None,
        }
    }
}

impl Display for TextTransform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typography block for a single text element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementTypography {
    /// Font size in px
    pub font_size: i32,
    /// Unitless line-height multiplier
    pub line_height: f64,
    /// Font weight (100-900 in the editor)
    pub font_weight: i32,
    pub text_transform: TextTransform,
    /// Letter spacing in px, may be negative
    pub letter_spacing: f64,
}

impl ElementTypography {
    pub const fn new(
        font_size: i32,
        line_height: f64,
        font_weight: i32,
        text_transform: TextTransform,
        letter_spacing: f64,
    ) -> Self {
        Self {
            font_size,
            line_height,
            font_weight,
            text_transform,
            letter_spacing,
        }
    }
}
