//! GasyWay Token Store
//!
//! Client for the remote design token store.
//!
//! - [`TokenStoreClient::fetch_active_tokens`]: public, active token set
//! - [`TokenStoreClient::fetch_current_tokens`]: the admin's working set
//! - [`TokenStoreClient::save_tokens`]: wholesale replace
//! - [`TokenStoreClient::cleanup_duplicates`]: server-side dedup
//! - [`TokenStoreClient::check_health`]: reachability of the functions host
//!
//! ```rust,ignore
//! use gasyway_store::{StoreConfig, TokenStoreClient};
//!
//! let client = TokenStoreClient::new(StoreConfig::new(base_url, anon_key))?;
//! let tokens = client.fetch_active_tokens().await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;


pub use client::{endpoints, CleanupReport, TokenStoreClient, TokensEnvelope};
pub use config::{Credential, StoreConfig};
pub use error::{Result, StoreError};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
