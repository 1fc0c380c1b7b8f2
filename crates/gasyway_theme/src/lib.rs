//! GasyWay Theme
//!
//! Design tokens and live theming for the GasyWay console.
//!
//! # Overview
//!
//! - **Tokens**: [`TokenSet`], the complete bundle of colors, typography and
//!   spacing values, with a built-in default
//! - **Style surface**: [`StyleTarget`] and the in-process [`DocumentStyle`]
//!   namespace of `--name` variables
//! - **Applier**: [`apply`] writes a token set onto a style target through one
//!   deterministic mapping
//! - **Broadcast bus**: [`TokenBus`] tells mounted consumers about newly saved
//!   token sets
//!
//! # Quick Start
//!
//! ```rust
//! use gasyway_theme::{apply, DocumentStyle, StyleTarget, TokenSet};
//!
//! let document = DocumentStyle::new();
//! apply(&TokenSet::default(), &document).unwrap();
//!
//! assert_eq!(document.get_property("--font-size").unwrap().as_deref(), Some("16px"));
//! ```
//!
//! # Live updates
//!
//! ```rust
//! use std::sync::Arc;
//! use gasyway_theme::{bind_live_theme, DocumentStyle, TokenBus, TokenSet};
//!
//! let bus = TokenBus::new();
//! let document = Arc::new(DocumentStyle::new());
//! bind_live_theme(&bus, document.clone());
//!
//! bus.publish(&TokenSet::default());
//! assert!(!document.is_empty());
//! ```

pub mod applier;
pub mod bus;
pub mod error;
pub mod style;
pub mod tokens;

// Re-export commonly used types
pub use applier::{apply, css_variables, to_stylesheet};
pub use bus::{bind_live_theme, SubscriptionId, TokenBus, DESIGN_TOKENS_UPDATED};
pub use error::StyleError;
pub use style::{DocumentStyle, StyleTarget};
pub use tokens::*;
