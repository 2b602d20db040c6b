/// New-target request pipeline
///
/// This module handles:
/// - Building the issue title, JSON body and destination URL (builder.rs)
/// - Browser-compatible number and URI encoding (encoding.rs)
/// - Handing the URL to the browser (navigator.rs)

pub mod builder;
pub mod encoding;
pub mod navigator;

pub use builder::{RequestBuilder, SubmissionRequest};
pub use navigator::{BrowserNavigator, Navigator};
