/// Dataset loader
///
/// The dataset is read once when the dashboard starts. Until the read
/// completes the loader is `Loading`; afterwards it is either `Ready` with
/// the dataset or `Failed` with the reason. A failed load stays failed
/// until the user asks for a retry.

use std::collections::HashSet;

use super::fetch_bytes;
use crate::config::Source;
use crate::error::LoadFailure;
use crate::state::Dataset;

/// Lifecycle of the dataset read
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Dataset),
    Failed(LoadFailure),
}

/// Owns the dataset and its load lifecycle
#[derive(Debug)]
pub struct DataLoader {
    source: Source,
    state: LoadState,
    /// Number of reads handed out so far
    attempts: u32,
}

impl DataLoader {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            state: LoadState::Loading,
            attempts: 0,
        }
    }

    /// Hand out the source for the initial read
    ///
    /// Returns `Some` exactly once per loader; later calls return `None`.
    pub fn request(&mut self) -> Option<Source> {
        if self.attempts > 0 {
            return None;
        }
        self.attempts = 1;
        log::info!("🛰️  Requesting dataset from {}", self.source.describe());
        Some(self.source.clone())
    }

    /// Start another read after a failure
    ///
    /// Only a `Failed` loader can be retried; returns `None` otherwise.
    pub fn retry(&mut self) -> Option<Source> {
        if !matches!(self.state, LoadState::Failed(_)) {
            return None;
        }
        self.state = LoadState::Loading;
        self.attempts += 1;
        log::info!(
            "🔁 Retrying dataset from {} (attempt {})",
            self.source.describe(),
            self.attempts
        );
        Some(self.source.clone())
    }

    /// Apply the outcome of a read
    ///
    /// Ignored unless a read is outstanding. Returns whether it was applied.
    pub fn complete(&mut self, result: Result<Dataset, LoadFailure>) -> bool {
        if self.state != LoadState::Loading || self.attempts == 0 {
            log::warn!("Ignoring dataset result with no read outstanding");
            return false;
        }

        self.state = match result {
            Ok(dataset) => {
                log::info!(
                    "✅ Dataset ready: {} targets, last updated {}",
                    dataset.locations.len(),
                    dataset.last_updated
                );
                LoadState::Ready(dataset)
            }
            Err(failure) => {
                log::error!("❌ Dataset load failed: {}", failure);
                LoadState::Failed(failure)
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The dataset, once ready
    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.state {
            LoadState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Read and parse the dataset behind `source`
pub async fn fetch_dataset(source: Source) -> Result<Dataset, LoadFailure> {
    let bytes = fetch_bytes(&source).await?;
    parse_dataset(&bytes)
}

/// Parse a dataset payload and check the id invariant
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, LoadFailure> {
    let dataset: Dataset =
        serde_json::from_slice(bytes).map_err(|e| LoadFailure::Parse(e.to_string()))?;

    let mut seen = HashSet::new();
    for location in &dataset.locations {
        if !seen.insert(location.id.as_str()) {
            return Err(LoadFailure::DuplicateId(location.id.clone()));
        }
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = r#"{
        "last_updated": "2024-05-01",
        "locations": [
            {
                "id": "lagos",
                "name": "Lagos, Nigeria",
                "coordinates": "6.524, 3.379",
                "image_visual": "/images/lagos_visual.jpg",
                "image_thermal": "/images/lagos_thermal.jpg"
            },
            {
                "id": "tokyo",
                "name": "Tokyo, Japan",
                "coordinates": "35.676, 139.65",
                "image_visual": "/images/tokyo_visual.jpg",
                "image_thermal": "/images/tokyo_thermal.jpg"
            }
        ]
    }"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "orbital-command-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn loader() -> DataLoader {
        DataLoader::new(Source::File(PathBuf::from("satellite_data.json")))
    }

    #[test]
    fn test_parse_sample() {
        let dataset = parse_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.last_updated, "2024-05-01");
        let ids: Vec<&str> = dataset.locations.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["lagos", "tokyo"]);
    }

    #[test]
    fn test_parse_empty_locations_is_ready_not_error() {
        let dataset = parse_dataset(br#"{"last_updated": "2024-05-01", "locations": []}"#).unwrap();
        assert!(dataset.locations.is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_schema() {
        let missing_field = parse_dataset(br#"{"locations": []}"#);
        assert!(matches!(missing_field, Err(LoadFailure::Parse(_))));

        let not_json = parse_dataset(b"<html>404</html>");
        assert!(matches!(not_json, Err(LoadFailure::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let duplicated = SAMPLE.replace("\"tokyo\"", "\"lagos\"");
        assert_eq!(
            parse_dataset(duplicated.as_bytes()),
            Err(LoadFailure::DuplicateId("lagos".to_string()))
        );
    }

    #[test]
    fn test_request_is_issued_once() {
        let mut loader = loader();
        assert_eq!(loader.state(), &LoadState::Loading);
        assert!(loader.request().is_some());
        assert!(loader.request().is_none());
        assert_eq!(loader.attempts(), 1);
    }

    #[test]
    fn test_loading_to_ready() {
        let mut loader = loader();
        loader.request();
        let dataset = parse_dataset(SAMPLE.as_bytes()).unwrap();

        assert!(loader.complete(Ok(dataset.clone())));
        assert_eq!(loader.dataset(), Some(&dataset));
        assert!(loader.retry().is_none());
    }

    #[test]
    fn test_loading_to_failed_then_manual_retry() {
        let mut loader = loader();
        loader.request();
        let failure = LoadFailure::Parse("bad".to_string());

        assert!(loader.complete(Err(failure.clone())));
        assert_eq!(loader.state(), &LoadState::Failed(failure));
        assert!(loader.dataset().is_none());

        assert!(loader.retry().is_some());
        assert_eq!(loader.state(), &LoadState::Loading);
        assert_eq!(loader.attempts(), 2);
        // only one read outstanding at a time
        assert!(loader.retry().is_none());
    }

    #[test]
    fn test_complete_without_request_is_ignored() {
        let mut loader = loader();
        assert!(!loader.complete(Ok(parse_dataset(SAMPLE.as_bytes()).unwrap())));
        assert_eq!(loader.state(), &LoadState::Loading);
    }

    #[test]
    fn test_late_result_after_ready_is_ignored() {
        let mut loader = loader();
        loader.request();
        loader.complete(Ok(parse_dataset(SAMPLE.as_bytes()).unwrap()));

        assert!(!loader.complete(Err(LoadFailure::Parse("late".to_string()))));
        assert!(loader.dataset().is_some());
    }

    #[tokio::test]
    async fn test_fetch_dataset_from_file() {
        let path = temp_file("fetch", SAMPLE);
        let dataset = fetch_dataset(Source::File(path.clone())).await.unwrap();
        assert_eq!(dataset.locations.len(), 2);
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_fetch_dataset_missing_file() {
        let path = std::env::temp_dir().join("orbital-command-missing-dataset.json");
        match fetch_dataset(Source::File(path)).await {
            Err(LoadFailure::Read { origin, .. }) => {
                assert!(origin.ends_with("orbital-command-missing-dataset.json"))
            }
            other => panic!("expected read failure, got {:?}", other),
        }
    }
}
