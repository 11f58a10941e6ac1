//! Background thread that owns the blocking HTTP client for its lifetime.
//!
//! All communication is via channels: one `ReviewRequest` in over crossbeam,
//! one `AppEvent::ReviewResult` out over the unified event channel. The
//! thread exits when the request sender is dropped. Quitting the TUI while a
//! request is in flight simply abandons the thread — the process exits and
//! the in-flight call is never awaited or cancelled.

use crossbeam_channel::Receiver;
use tokio::sync::mpsc::UnboundedSender;

use crate::event::AppEvent;
use crate::review::openai;
use crate::review::types::{ReviewOutcome, ReviewRequest};

/// Entry point for the review worker thread.
///
/// Builds the blocking client once (with the fixed request timeout) and
/// answers each incoming request with exactly one result event. Send errors
/// are ignored — if the event receiver is gone, the session is over anyway.
pub fn review_worker_loop(
    api_key: String,
    rx: Receiver<ReviewRequest>,
    event_tx: UnboundedSender<AppEvent>,
) {
    let client = match reqwest::blocking::Client::builder()
        .timeout(openai::REQUEST_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            let outcome = ReviewOutcome { result: Err(e.into()) };
            let _ = event_tx.send(AppEvent::ReviewResult(Box::new(outcome)));
            return;
        }
    };

    for request in rx {
        let result = openai::review_diff(&client, &api_key, &request.model, &request.diff);
        let outcome = ReviewOutcome { result };
        let _ = event_tx.send(AppEvent::ReviewResult(Box::new(outcome)));
    }
}
