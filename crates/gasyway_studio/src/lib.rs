//! GasyWay Token Studio
//!
//! Editing and verification of the live design tokens.
//!
//! - [`TokenEditor`]: working copy vs. baseline with a `Clean`/`Dirty` flag
//! - [`ThemeStudio`]: load, edit, save, reset and cleanup against the store,
//!   applying and broadcasting saved sets
//! - [`run_diagnostics`]: store, health, style-variable and full-path probes
//! - [`load_design_tokens`] / [`load_and_apply`]: startup theme loading
//!
//! ```rust,ignore
//! let bus = TokenBus::global();
//! let document = DocumentStyle::global();
//! let notices = TracingNotifier;
//!
//! let mut studio = ThemeStudio::new(&client, credential, document, bus, &notices);
//! studio.load().await;
//! studio.edit(TokenEdit::Color(ColorToken::Primary, "#ff0000".into()))?;
//! studio.save().await?;
//! ```

pub mod diagnostics;
pub mod editor;
pub mod error;
pub mod limits;
pub mod loader;
pub mod notify;
pub mod studio;

pub use diagnostics::{
    run_diagnostics, DiagnosticReport, Health, Probe, ProbeResult, ProbeStatus, PROBED_VARIABLES,
};
pub use editor::{EditorState, TokenEdit, TokenEditor};
pub use error::EditError;
pub use loader::{load_and_apply, load_design_tokens};
pub use notify::{Notice, NoticeLevel, NoticeLog, Notifier, TracingNotifier};
pub use studio::{SaveOutcome, ThemeStudio};
