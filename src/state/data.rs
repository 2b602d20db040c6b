/// Shared data structures for the dashboard
///
/// `Dataset` and `Location` mirror the JSON served by the dataset endpoint.
/// `TargetDraft` is the raw text of the "add target" form.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// The full dataset served by the uplink
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Timestamp-like string, shown verbatim in the header
    pub last_updated: String,
    /// Targets in display order
    pub locations: Vec<Location>,
}

impl Dataset {
    /// Parse `last_updated` as a calendar date
    ///
    /// Accepts a plain `YYYY-MM-DD` date (what the generator writes) or a
    /// full RFC 3339 timestamp. Anything else yields `None`.
    pub fn updated_on(&self) -> Option<NaiveDate> {
        let raw = self.last_updated.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.date_naive()))
    }

    /// Whole days between `last_updated` and `today`
    pub fn age_in_days(&self, today: NaiveDate) -> Option<i64> {
        self.updated_on().map(|date| (today - date).num_days())
    }
}

/// A monitored target with its two image variants
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    /// Unique, stable key (join key into the view-mode store)
    pub id: String,
    pub name: String,
    /// Display string, e.g. "6.524, 3.379"
    pub coordinates: String,
    /// URI of the optical (RGB) image
    pub image_visual: String,
    /// URI of the thermal image
    pub image_thermal: String,
    /// Optional status label written by the dataset generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Location {
    /// URI of the image for the requested mode
    pub fn image_for(&self, thermal: bool) -> &str {
        if thermal {
            &self.image_thermal
        } else {
            &self.image_visual
        }
    }
}

/// Raw, unvalidated text of the "add target" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDraft {
    pub name: String,
    pub lat: String,
    pub lon: String,
}
