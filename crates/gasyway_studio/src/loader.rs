//! Startup loading of the active token set

use gasyway_store::{TokenStoreClient, Transport};
use gasyway_theme::{apply, StyleTarget, TokenSet};

/// Fetch the active token set, or `None` on any failure.
///
/// Failures are logged and swallowed so callers keep whatever theme is
/// already applied.
pub async fn load_design_tokens<T: Transport>(client: &TokenStoreClient<T>) -> Option<TokenSet> {
    match client.fetch_active_tokens().await {
        Ok(tokens) => Some(tokens),
        Err(e) => {
            tracing::warn!("could not load design tokens, keeping current theme: {e}");
            None
        }
    }
}

/// Fetch the active token set and apply it to `target`.
///
/// Returns true when a token set was both obtained and applied.
pub async fn load_and_apply<T: Transport>(
    client: &TokenStoreClient<T>,
    target: &dyn StyleTarget,
) -> bool {
    let Some(tokens) = load_design_tokens(client).await else {
        return false;
    };
    match apply(&tokens, target) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("loaded design tokens but could not apply them: {e}");
            false
        }
    }
}
