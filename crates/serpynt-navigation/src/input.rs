//! URL bar input

use url::{ParseError, Url};

use crate::error::NavigationError;
use crate::Result;

/// Turn URL bar text into a URL to hand to the engine.
///
/// Text that already carries a scheme is used as-is; anything else is tried
/// again with `http://` in front. No further checks: whatever the engine
/// makes of the result is what the user sees.
pub fn normalize_input(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(NavigationError::InvalidUrl("URL cannot be empty".to_string()));
    }

    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let with_scheme = format!("http://{input}");
            Url::parse(&with_scheme).map_err(|e| NavigationError::InvalidUrl(format!("{input}: {e}")))
        }
        Err(e) => Err(NavigationError::InvalidUrl(format!("{input}: {e}"))),
    }
}
