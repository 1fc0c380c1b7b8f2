use gasyway_theme::{
    apply, bind_live_theme, css_variables, DocumentStyle, StyleTarget, TextTransform, TokenBus,
    TokenSet,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn read(style: &DocumentStyle, name: &str) -> Option<String> {
    style.get_property(name).unwrap()
}

#[test]
fn applying_twice_matches_applying_once() {
    let mut tokens = TokenSet::default();
    tokens.secondary = "oklch(0.7 0.1 200)".to_string();

    let once = DocumentStyle::new();
    apply(&tokens, &once).unwrap();

    let twice = DocumentStyle::new();
    apply(&tokens, &twice).unwrap();
    apply(&tokens, &twice).unwrap();

    assert_eq!(once.snapshot().unwrap(), twice.snapshot().unwrap());
}

#[test]
fn default_tokens_round_trip_through_probed_variables() {
    let defaults = TokenSet::default();
    let style = DocumentStyle::new();
    apply(&defaults, &style).unwrap();

    assert_eq!(read(&style, "--primary"), Some(defaults.primary.clone()));
    assert_eq!(read(&style, "--font-size"), Some("16px".to_string()));
    assert_eq!(read(&style, "--font-family"), Some(defaults.font_family.clone()));
}

#[test]
fn edited_primary_is_visible_after_apply() {
    let mut tokens = TokenSet::default();
    assert_eq!(tokens.primary, "#0d4047");
    tokens.primary = "#ff0000".to_string();

    let style = DocumentStyle::new();
    apply(&tokens, &style).unwrap();
    assert_eq!(read(&style, "--primary"), Some("#ff0000".to_string()));
}

#[test]
fn reapplying_overwrites_previous_values() {
    let style = DocumentStyle::new();
    apply(&TokenSet::default(), &style).unwrap();

    let mut tokens = TokenSet::default();
    tokens.label.text_transform = TextTransform::Lowercase;
    tokens.spacing_base = 24;
    apply(&tokens, &style).unwrap();

    assert_eq!(style.snapshot().unwrap(), css_variables(&tokens));
}

#[test]
fn partial_payload_is_completed_from_defaults() {
    let tokens: TokenSet = serde_json::from_str(
        r##"{ "primary": "#112233", "h1": { "fontSize": 40, "lineHeight": 1.1, "fontWeight": 800, "textTransform": "capitalize", "letterSpacing": -1 } }"##,
    )
    .unwrap();

    let mut expected = TokenSet::default();
    expected.primary = "#112233".to_string();
    expected.h1.font_size = 40;
    expected.h1.line_height = 1.1;
    expected.h1.font_weight = 800;
    expected.h1.text_transform = TextTransform::Capitalize;
    expected.h1.letter_spacing = -1.0;

    assert_eq!(tokens, expected);
}

#[test]
fn serialized_keys_are_camel_case() {
    let value = serde_json::to_value(TokenSet::default()).unwrap();
    assert_eq!(value["primaryForeground"], "#ffffff");
    assert_eq!(value["fontWeightNormal"], 400);
    assert_eq!(value["h6"]["textTransform"], "uppercase");
    assert_eq!(value["radiusBase"], 10);
}

#[test]
fn listener_registered_before_publish_gets_one_equal_copy() {
    let bus = TokenBus::new();
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    bus.subscribe(move |tokens| sink.lock().unwrap().push(tokens.clone()));

    let mut tokens = TokenSet::default();
    tokens.border = "#e2e8f0".to_string();
    bus.publish(&tokens);

    assert_eq!(*received.lock().unwrap(), vec![tokens]);
}

#[test]
fn listener_registered_after_publish_gets_nothing() {
    let bus = TokenBus::new();
    bus.publish(&TokenSet::default());

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    bus.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn live_theme_binding_reapplies_published_set() {
    let bus = TokenBus::new();
    let document = Arc::new(DocumentStyle::new());
    let id = bind_live_theme(&bus, document.clone());

    let mut tokens = TokenSet::default();
    tokens.font_family = "Inter".to_string();
    bus.publish(&tokens);
    assert_eq!(read(&document, "--font-family"), Some("Inter".to_string()));

    bus.unsubscribe(id);
    bus.publish(&TokenSet::default());
    assert_eq!(read(&document, "--font-family"), Some("Inter".to_string()));
}
