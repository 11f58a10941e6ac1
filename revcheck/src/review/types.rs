//! Owned message types for the review worker thread.
//!
//! Everything crossing the channel boundary is fully owned so the worker and
//! the main loop never share borrowed data.

use thiserror::Error;

/// Ways the review fetch can fail.
///
/// All variants are terminal for the session — there is no retry. The
/// message is shown verbatim on the Failed screen.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Transport-level failure: connection refused, DNS, or the 60 s timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with its structured error payload.
    #[error("API error: {0}")]
    Api(String),
    /// A well-formed response carrying no choices.
    #[error("empty response from API")]
    EmptyResponse,
}

/// The single request sent to the review worker at session start.
#[derive(Debug)]
pub struct ReviewRequest {
    /// Unified diff text to review.
    pub diff: String,
    /// Chat-completion model name.
    pub model: String,
}

/// The worker's one completion message, carried inside
/// `AppEvent::ReviewResult(Box<ReviewOutcome>)`.
#[derive(Debug)]
pub struct ReviewOutcome {
    /// Review text on success, or the terminal error to display.
    pub result: Result<String, ReviewError>,
}
