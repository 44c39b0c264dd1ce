pub mod analyze;
pub mod render;
pub mod session;

use anyhow::{bail, Result};

/// Reject blank input before it reaches the synthesizer.
///
/// Returns the input untouched; only the emptiness check trims.
pub fn validate_input(raw: &str) -> Result<&str> {
    if raw.trim().is_empty() {
        bail!("Please enter some text or a URL to analyze (the input can't be empty)");
    }
    Ok(raw)
}
