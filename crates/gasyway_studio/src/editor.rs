//! Token editor change tracking
//!
//! [`TokenEditor`] holds the working copy being edited and the baseline it was
//! loaded or last saved from. The editor is `Dirty` exactly when the two
//! differ structurally; the flag is recomputed after every mutation.
//!
//! ```text
//!            edit (differs)            save ok / reset / replace
//!   Clean ─────────────────────▶ Dirty ─────────────────────────▶ Clean
//!     ▲ │                        │  ▲
//!     │ └── edit (equal) ────────┘  └── edit / save failed
//! ```

use crate::error::{EditError, Result};
use crate::limits::{self, clamp_float, clamp_int, clamp_step};
use gasyway_theme::{ColorToken, ElementTypography, TextElement, TextTransform, TokenSet};
use serde_json::{Map, Value};

/// Whether the working copy matches the baseline
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum EditorState {
    #[default]
    Clean,
    Dirty,
}

/// A single field edit on the working copy
#[derive(Clone, Debug, PartialEq)]
pub enum TokenEdit {
    Color(ColorToken, String),
    FontFamily(String),
    FontSize(i32),
    FontWeightNormal(i32),
    FontWeightMedium(i32),
    /// Replaces the element's whole typography block
    Element(TextElement, ElementTypography),
    RadiusBase(i32),
    SpacingBase(i32),
}

impl TokenEdit {
    /// Wire key of the edited field
    pub fn key(&self) -> &'static str {
        match self {
            TokenEdit::Color(token, _) => token.key(),
            TokenEdit::FontFamily(_) => "fontFamily",
            TokenEdit::FontSize(_) => "fontSize",
            TokenEdit::FontWeightNormal(_) => "fontWeightNormal",
            TokenEdit::FontWeightMedium(_) => "fontWeightMedium",
            TokenEdit::Element(element, _) => element.key(),
            TokenEdit::RadiusBase(_) => "radiusBase",
            TokenEdit::SpacingBase(_) => "spacingBase",
        }
    }

    /// Build an edit from a wire key and a JSON value.
    ///
    /// Element blocks accept either a (possibly partial) object under the
    /// element key (`"h1"`) or a dotted field path (`"h1.fontSize"`). Missing
    /// block fields are taken from `current`.
    pub fn parse(key: &str, value: &Value, current: &TokenSet) -> Result<TokenEdit> {
        if let Some(token) = ColorToken::from_key(key) {
            return Ok(TokenEdit::Color(token, string_value(key, value)?));
        }

        if let Some((element_key, field)) = key.split_once('.') {
            let element = TextElement::from_key(element_key)
                .ok_or_else(|| EditError::UnknownField(key.to_string()))?;
            let mut patch = serde_json::Map::new();
            patch.insert(field.to_string(), value.clone());
            let block = merge_block(element_key, current.element(element), &Value::Object(patch))?;
            return Ok(TokenEdit::Element(element, block));
        }

        if let Some(element) = TextElement::from_key(key) {
            let block = merge_block(key, current.element(element), value)?;
            return Ok(TokenEdit::Element(element, block));
        }

        match key {
            "fontFamily" => Ok(TokenEdit::FontFamily(string_value(key, value)?)),
            "fontSize" => Ok(TokenEdit::FontSize(int_value(key, value)?)),
            "fontWeightNormal" => Ok(TokenEdit::FontWeightNormal(int_value(key, value)?)),
            "fontWeightMedium" => Ok(TokenEdit::FontWeightMedium(int_value(key, value)?)),
            "radiusBase" => Ok(TokenEdit::RadiusBase(int_value(key, value)?)),
            "spacingBase" => Ok(TokenEdit::SpacingBase(int_value(key, value)?)),
            _ => Err(EditError::UnknownField(key.to_string())),
        }
    }

    /// Reject values the editor never accepts (empty strings, NaN)
    pub fn validate(&self) -> Result<()> {
        match self {
            TokenEdit::Color(_, value) | TokenEdit::FontFamily(value) if value.trim().is_empty() => {
                Err(EditError::Empty(self.key().to_string()))
            }
            TokenEdit::Element(_, block)
                if !block.line_height.is_finite() || !block.letter_spacing.is_finite() =>
            {
                Err(EditError::NotFinite(self.key().to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Bring numeric values into the editor ranges
    pub fn clamped(self) -> TokenEdit {
        match self {
            TokenEdit::FontSize(size) => TokenEdit::FontSize(clamp_int(size, &limits::BASE_FONT_SIZE)),
            TokenEdit::FontWeightNormal(weight) => TokenEdit::FontWeightNormal(clamp_step(
                weight,
                &limits::FONT_WEIGHT,
                limits::FONT_WEIGHT_STEP,
            )),
            TokenEdit::FontWeightMedium(weight) => TokenEdit::FontWeightMedium(clamp_step(
                weight,
                &limits::FONT_WEIGHT,
                limits::FONT_WEIGHT_STEP,
            )),
            TokenEdit::Element(element, block) => TokenEdit::Element(
                element,
                ElementTypography {
                    font_size: clamp_int(block.font_size, &limits::ELEMENT_FONT_SIZE),
                    line_height: clamp_float(block.line_height, &limits::LINE_HEIGHT),
                    font_weight: clamp_step(
                        block.font_weight,
                        &limits::FONT_WEIGHT,
                        limits::FONT_WEIGHT_STEP,
                    ),
                    text_transform: block.text_transform,
                    letter_spacing: clamp_float(block.letter_spacing, &limits::LETTER_SPACING),
                },
            ),
            TokenEdit::RadiusBase(radius) => TokenEdit::RadiusBase(clamp_int(radius, &limits::RADIUS_BASE)),
            TokenEdit::SpacingBase(spacing) => TokenEdit::SpacingBase(clamp_step(
                spacing,
                &limits::SPACING_BASE,
                limits::SPACING_BASE_STEP,
            )),
            other => other,
        }
    }

    fn apply_to(self, tokens: &mut TokenSet) {
        match self {
            TokenEdit::Color(token, value) => *tokens.color_mut(token) = value,
            TokenEdit::FontFamily(family) => tokens.font_family = family,
            TokenEdit::FontSize(size) => tokens.font_size = size,
            TokenEdit::FontWeightNormal(weight) => tokens.font_weight_normal = weight,
            TokenEdit::FontWeightMedium(weight) => tokens.font_weight_medium = weight,
            TokenEdit::Element(element, block) => tokens.set_element(element, block),
            TokenEdit::RadiusBase(radius) => tokens.radius_base = radius,
            TokenEdit::SpacingBase(spacing) => tokens.spacing_base = spacing,
        }
    }
}

fn string_value(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EditError::InvalidValue {
            field: key.to_string(),
            reason: format!("expected a string, got {value}"),
        })
}

fn int_value(key: &str, value: &Value) -> Result<i32> {
    let number = value.as_f64().ok_or_else(|| EditError::InvalidValue {
        field: key.to_string(),
        reason: format!("expected a number, got {value}"),
    })?;
    if !number.is_finite() {
        return Err(EditError::NotFinite(key.to_string()));
    }
    // Float-to-int `as` casts saturate at the i32 bounds.
    Ok(number.round() as i32)
}

fn float_value(key: &str, value: &Value) -> Result<f64> {
    let number = value.as_f64().ok_or_else(|| EditError::InvalidValue {
        field: key.to_string(),
        reason: format!("expected a number, got {value}"),
    })?;
    if !number.is_finite() {
        return Err(EditError::NotFinite(key.to_string()));
    }
    Ok(number)
}

/// Overlay `patch` onto `current`, one typography field at a time.
///
/// `element_key` is the bare element key (`"h1"`); field errors are reported
/// as `"h1.fontSize"`.
fn merge_block(
    element_key: &str,
    current: &ElementTypography,
    patch: &Value,
) -> Result<ElementTypography> {
    let patch = patch.as_object().ok_or_else(|| EditError::InvalidValue {
        field: element_key.to_string(),
        reason: format!("expected an object, got {patch}"),
    })?;

    let mut block = current.clone();
    for (name, value) in patch {
        let field = format!("{element_key}.{name}");
        match name.as_str() {
            "fontSize" => block.font_size = int_value(&field, value)?,
            "lineHeight" => block.line_height = float_value(&field, value)?,
            "fontWeight" => block.font_weight = int_value(&field, value)?,
            "letterSpacing" => block.letter_spacing = float_value(&field, value)?,
            "textTransform" => {
                let text = string_value(&field, value)?;
                block.text_transform =
                    TextTransform::parse(&text).ok_or_else(|| EditError::InvalidValue {
                        field: field.clone(),
                        reason: format!("unknown text transform {text:?}"),
                    })?;
            }
            _ => return Err(EditError::UnknownField(field)),
        }
    }
    Ok(block)
}

/// Working copy + baseline pair with a dirty flag
#[derive(Clone, Debug, Default)]
pub struct TokenEditor {
    working: TokenSet,
    baseline: TokenSet,
    state: EditorState,
}

impl TokenEditor {
    /// Start clean on the default token set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working(&self) -> &TokenSet {
        &self.working
    }

    pub fn baseline(&self) -> &TokenSet {
        &self.baseline
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditorState::Dirty
    }

    /// Save and reset are only offered with unsaved changes
    pub fn can_save(&self) -> bool {
        self.is_dirty()
    }

    pub fn can_reset(&self) -> bool {
        self.is_dirty()
    }

    /// Wire keys of the fields that differ from the baseline
    pub fn unsaved_fields(&self) -> Vec<&'static str> {
        self.working.diff(&self.baseline)
    }

    fn refresh(&mut self) {
        self.state = if self.working == self.baseline {
            EditorState::Clean
        } else {
            EditorState::Dirty
        };
    }

    /// Apply one field edit to the working copy
    pub fn edit(&mut self, edit: TokenEdit) -> Result<EditorState> {
        edit.validate()?;
        let edit = edit.clamped();
        tracing::trace!(field = edit.key(), "token edit");
        edit.apply_to(&mut self.working);
        self.refresh();
        Ok(self.state)
    }

    /// Apply an edit given as wire key + JSON value
    pub fn edit_key(&mut self, key: &str, value: &Value) -> Result<EditorState> {
        let edit = TokenEdit::parse(key, value, &self.working)?;
        self.edit(edit)
    }

    /// Discard unsaved edits. Returns false when there was nothing to discard.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.working = self.baseline.clone();
        self.refresh();
        true
    }

    /// Replace both working copy and baseline, e.g. after a load
    pub fn replace(&mut self, tokens: TokenSet) {
        self.baseline = tokens.clone();
        self.working = tokens;
        self.refresh();
    }

    /// Apply a batch of wire-key edits on top of the working copy.
    ///
    /// Every entry goes through the same validation and clamping as
    /// [`edit_key`](Self::edit_key). Fields not named keep their current
    /// value. If any entry is rejected the working copy is left untouched.
    pub fn import(&mut self, fields: &Map<String, Value>) -> Result<EditorState> {
        let previous = self.working.clone();
        for (key, value) in fields {
            if let Err(e) = self.edit_key(key, value) {
                self.working = previous;
                self.refresh();
                return Err(e);
            }
        }
        Ok(self.state)
    }

    /// Record the working copy as persisted
    pub fn mark_saved(&mut self) {
        self.baseline = self.working.clone();
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_clean_on_defaults() {
        let editor = TokenEditor::new();
        assert_eq!(editor.state(), EditorState::Clean);
        assert_eq!(editor.working(), &TokenSet::default());
        assert!(!editor.can_save());
    }

    #[test]
    fn editing_back_to_baseline_is_clean() {
        let mut editor = TokenEditor::new();
        assert_eq!(
            editor.edit(TokenEdit::Color(ColorToken::Primary, "#ff0000".into())),
            Ok(EditorState::Dirty)
        );
        assert_eq!(
            editor.edit(TokenEdit::Color(ColorToken::Primary, "#0d4047".into())),
            Ok(EditorState::Clean)
        );
    }

    #[test]
    fn numeric_edits_are_clamped() {
        let mut editor = TokenEditor::new();
        editor.edit(TokenEdit::FontSize(64)).unwrap();
        editor.edit(TokenEdit::SpacingBase(30)).unwrap();
        editor.edit(TokenEdit::FontWeightMedium(660)).unwrap();

        assert_eq!(editor.working().font_size, 20);
        assert_eq!(editor.working().spacing_base, 32);
        assert_eq!(editor.working().font_weight_medium, 700);
    }

    #[test]
    fn empty_color_is_rejected() {
        let mut editor = TokenEditor::new();
        assert_eq!(
            editor.edit(TokenEdit::Color(ColorToken::Border, "  ".into())),
            Err(EditError::Empty("border".into()))
        );
        assert_eq!(editor.state(), EditorState::Clean);
    }

    #[test]
    fn dotted_key_replaces_element_block() {
        let mut editor = TokenEditor::new();
        editor.edit_key("h3.textTransform", &json!("uppercase")).unwrap();

        let mut expected = TokenSet::default().h3;
        expected.text_transform = TextTransform::Uppercase;
        assert_eq!(editor.working().h3, expected);
        assert_eq!(editor.unsaved_fields(), vec!["h3"]);
    }

    #[test]
    fn element_object_is_merged_then_clamped() {
        let mut editor = TokenEditor::new();
        editor
            .edit_key("label", &json!({ "fontSize": 4, "letterSpacing": 9.5 }))
            .unwrap();

        assert_eq!(editor.working().label.font_size, 10);
        assert_eq!(editor.working().label.letter_spacing, 5.0);
        assert_eq!(editor.working().label.font_weight, TokenSet::default().label.font_weight);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut editor = TokenEditor::new();
        assert_eq!(
            editor.edit_key("ring", &json!("#000")),
            Err(EditError::UnknownField("ring".into()))
        );
        assert_eq!(
            editor.edit_key("h1.color", &json!("#000")),
            Err(EditError::UnknownField("h1.color".into()))
        );
        assert!(matches!(
            editor.edit_key("fontSize", &json!("large")),
            Err(EditError::InvalidValue { .. })
        ));
    }

    #[test]
    fn reset_only_acts_when_dirty() {
        let mut editor = TokenEditor::new();
        assert!(!editor.reset());

        editor.edit(TokenEdit::RadiusBase(2)).unwrap();
        assert!(editor.reset());
        assert_eq!(editor.working(), editor.baseline());
        assert_eq!(editor.state(), EditorState::Clean);
    }

    #[test]
    fn import_overlays_named_fields() {
        let mut editor = TokenEditor::new();
        editor.edit(TokenEdit::FontFamily("Inter".into())).unwrap();
        editor.mark_saved();

        let fields = json!({ "radiusBase": 4, "spacingBase": 999, "h2": { "fontSize": 26 } });
        let state = editor.import(fields.as_object().unwrap()).unwrap();

        assert_eq!(state, EditorState::Dirty);
        assert_eq!(editor.working().font_family, "Inter");
        assert_eq!(editor.working().spacing_base, 32);
        assert_eq!(editor.working().h2.font_size, 26);
        assert_eq!(editor.unsaved_fields(), vec!["h2", "radiusBase", "spacingBase"]);
    }

    #[test]
    fn rejected_import_changes_nothing() {
        let mut editor = TokenEditor::new();
        let fields = json!({ "primary": "#ff0000", "accent": "" });

        assert_eq!(
            editor.import(fields.as_object().unwrap()),
            Err(EditError::Empty("accent".into()))
        );
        assert_eq!(EditError::Empty("accent".into()).to_string(), "accent must not be empty");
        assert_eq!(editor.working(), &TokenSet::default());
        assert_eq!(editor.state(), EditorState::Clean);
    }

    #[test]
    fn dotted_numbers_round_like_top_level_keys() {
        let mut editor = TokenEditor::new();
        editor.edit_key("fontSize", &json!(17.6)).unwrap();
        editor.edit_key("h1.fontSize", &json!(20.5)).unwrap();
        editor.edit_key("h1.lineHeight", &json!(1.35)).unwrap();

        assert_eq!(editor.working().font_size, 18);
        assert_eq!(editor.working().h1.font_size, 21);
        assert_eq!(editor.working().h1.line_height, 1.35);
        assert!(matches!(
            editor.edit_key("h1.textTransform", &json!("shout")),
            Err(EditError::InvalidValue { .. })
        ));
    }

    #[test]
    fn replace_sets_both_copies() {
        let mut editor = TokenEditor::new();
        editor.edit(TokenEdit::FontFamily("Inter".into())).unwrap();

        let mut loaded = TokenSet::default();
        loaded.accent = "#00aa88".into();
        editor.replace(loaded.clone());

        assert_eq!(editor.state(), EditorState::Clean);
        assert_eq!(editor.working(), &loaded);
        assert_eq!(editor.baseline(), &loaded);
    }
}
