/// Uplink module: everything read from the static data host
///
/// This module handles:
/// - Loading the dataset once per session (loader.rs)
/// - Resolving, fetching and caching card imagery (imagery.rs)

pub mod imagery;
pub mod loader;

pub use imagery::{ImageSlot, ImageryCache};
pub use loader::{DataLoader, LoadState};

use crate::config::Source;
use crate::error::LoadFailure;

/// Read the raw bytes behind a source
///
/// HTTP sources must answer with a 2xx status; anything else is a failure.
pub async fn fetch_bytes(source: &Source) -> Result<Vec<u8>, LoadFailure> {
    match source {
        Source::Http(url) => {
            let read_failure = |e: reqwest::Error| LoadFailure::Read {
                origin: url.to_string(),
                reason: e.to_string(),
            };

            let response = reqwest::get(url.clone()).await.map_err(read_failure)?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadFailure::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            let bytes = response.bytes().await.map_err(read_failure)?;
            Ok(bytes.to_vec())
        }
        Source::File(path) => tokio::fs::read(path).await.map_err(|e| LoadFailure::Read {
            origin: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}
