//! Color tokens for theming

/// Semantic color slots of a [`TokenSet`](super::TokenSet)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,

    // Surface colors
    Background,
    Foreground,
    Muted,
    MutedForeground,

    // Feedback colors
    Destructive,
    DestructiveForeground,

    // Border colors
    Border,
}

impl ColorToken {
    /// Every color slot, in variable-emission order.
    pub const ALL: [ColorToken; 13] = [
        ColorToken::Primary,
        ColorToken::PrimaryForeground,
        ColorToken::Secondary,
        ColorToken::SecondaryForeground,
        ColorToken::Accent,
        ColorToken::AccentForeground,
        ColorToken::Background,
        ColorToken::Foreground,
        ColorToken::Muted,
        ColorToken::MutedForeground,
        ColorToken::Destructive,
        ColorToken::DestructiveForeground,
        ColorToken::Border,
    ];

    /// Wire key used in token payloads (camelCase).
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryForeground => "primaryForeground",
            ColorToken::Secondary => "secondary",
            ColorToken::SecondaryForeground => "secondaryForeground",
            ColorToken::Accent => "accent",
            ColorToken::AccentForeground => "accentForeground",
            ColorToken::Background => "background",
            ColorToken::Foreground => "foreground",
            ColorToken::Muted => "muted",
            ColorToken::MutedForeground => "mutedForeground",
            ColorToken::Destructive => "destructive",
            ColorToken::DestructiveForeground => "destructiveForeground",
            ColorToken::Border => "border",
        }
    }

    /// Style variable name, including the `--` prefix.
    pub fn css_var(self) -> &'static str {
        match self {
            ColorToken::Primary => "--primary",
            ColorToken::PrimaryForeground => "--primary-foreground",
            ColorToken::Secondary => "--secondary",
            ColorToken::SecondaryForeground => "--secondary-foreground",
            ColorToken::Accent => "--accent",
            ColorToken::AccentForeground => "--accent-foreground",
            ColorToken::Background => "--background",
            ColorToken::Foreground => "--foreground",
            ColorToken::Muted => "--muted",
            ColorToken::MutedForeground => "--muted-foreground",
            ColorToken::Destructive => "--destructive",
            ColorToken::DestructiveForeground => "--destructive-foreground",
            ColorToken::Border => "--border",
        }
    }

    /// Look up a color slot by its wire key.
    pub fn from_key(key: &str) -> Option<ColorToken> {
        Self::ALL.into_iter().find(|token| token.key() == key)
    }
}
