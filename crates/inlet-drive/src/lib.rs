//! Inlet Drive - Remote file-store client.

mod client;
mod error;
mod store;
mod types;

pub use client::DriveClient;
pub use error::{StoreError, StoreResult};
pub use store::FileStore;
