/// Turns an "add target" draft into a submission request
///
/// `build` is a pure function of the draft and the configured sink URL:
/// no clock, no randomness, no I/O. Opening the resulting URL is the
/// caller's job (see `navigator.rs`).

use serde::Serialize;
use url::Url;

use super::encoding::{encode_uri_component, parse_float, serialize_js_number};
use crate::error::ValidationError;
use crate::state::TargetDraft;

/// Zoom written into every request (not user-configurable)
pub const DEFAULT_ZOOM: f64 = 0.1;

/// Prefix of every issue title
pub const TITLE_PREFIX: &str = "ADD_TARGET: ";

/// A ready-to-open "add target" request
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub title: String,
    /// Pretty-printed JSON (2-space indent)
    pub body: String,
    pub destination_url: String,
}

/// JSON body of the request, fields in output order
#[derive(Serialize)]
struct TargetPayload<'a> {
    id: String,
    name: &'a str,
    #[serde(serialize_with = "serialize_js_number")]
    lat: f64,
    #[serde(serialize_with = "serialize_js_number")]
    lon: f64,
    zoom: f64,
}

/// Builds requests against one submission sink
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
}

impl RequestBuilder {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Host of the submission sink, for logging
    pub fn host(&self) -> Option<&str> {
        self.base_url.host_str()
    }

    /// Build a request from the draft exactly as typed
    ///
    /// Unparseable coordinates are passed through as `null` rather than
    /// rejected, so this never fails.
    pub fn build(&self, draft: &TargetDraft) -> SubmissionRequest {
        let title = format!("{}{}", TITLE_PREFIX, draft.name);

        let payload = TargetPayload {
            id: derive_id(&draft.name),
            name: &draft.name,
            lat: parse_float(&draft.lat),
            lon: parse_float(&draft.lon),
            zoom: DEFAULT_ZOOM,
        };
        // Only plain strings and numbers: serialization cannot fail
        let body = serde_json::to_string_pretty(&payload).unwrap_or_default();

        let destination_url = self.destination_for(&title, &body);

        SubmissionRequest {
            title,
            body,
            destination_url,
        }
    }

    /// Validate the draft first, then `build`
    ///
    /// `existing_ids` are the ids of the loaded targets; a draft whose
    /// derived id is among them is rejected.
    pub fn build_checked<'a, I>(
        &self,
        draft: &TargetDraft,
        existing_ids: I,
    ) -> Result<SubmissionRequest, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        validate(draft, existing_ids)?;
        Ok(self.build(draft))
    }

    fn destination_for(&self, title: &str, body: &str) -> String {
        let base = self.base_url.as_str();
        let separator = match self.base_url.query() {
            Some(query) if !query.is_empty() => "&",
            Some(_) => "",
            None => "?",
        };

        format!(
            "{}{}title={}&body={}",
            base,
            separator,
            encode_uri_component(title),
            encode_uri_component(body)
        )
    }
}

/// Machine id for a target name
///
/// Lower-cased, each run of whitespace collapsed to one `_`. Nothing else
/// is normalized and uniqueness is not checked.
pub fn derive_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() || c == '\u{feff}' {
            if !in_whitespace {
                id.push('_');
                in_whitespace = true;
            }
        } else {
            id.push(c);
            in_whitespace = false;
        }
    }

    id
}

fn validate<'a, I>(draft: &TargetDraft, existing_ids: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let lat = parse_float(&draft.lat);
    if !lat.is_finite() {
        return Err(ValidationError::InvalidLatitude(draft.lat.clone()));
    }
    let lon = parse_float(&draft.lon);
    if !lon.is_finite() {
        return Err(ValidationError::InvalidLongitude(draft.lon.clone()));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(ValidationError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ValidationError::LongitudeOutOfRange(lon));
    }

    let id = derive_id(&draft.name);
    if existing_ids.into_iter().any(|existing| existing == id) {
        return Err(ValidationError::IdCollision(id));
    }

    Ok(())
}
