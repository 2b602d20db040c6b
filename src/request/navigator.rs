/// The "open this URL somewhere else" side effect
///
/// Submissions end with the user's browser showing a pre-filled issue form.
/// The dashboard only talks to the `Navigator` trait so its update logic
/// can be exercised without launching a browser.

use crate::error::NavigationError;

/// Opens a URL in a new browsing context
pub trait Navigator {
    fn open(&self, url: &str) -> Result<(), NavigationError>;
}

/// Opens URLs with the system's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<(), NavigationError> {
        webbrowser::open(url).map_err(|e| NavigationError(e.to_string()))
    }
}
