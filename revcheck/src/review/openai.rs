//! Chat-completion request building and response extraction.
//!
//! The prompt pins down the response structure the extractor understands:
//! four numbered bold sections, `📄 file.ext:line` references, `Severity:`
//! lines, and fenced code snippets. The engine still degrades gracefully when
//! the model ignores any of it — see `revcheck_core::extract` and the
//! markdown fallback view.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::types::ReviewError;

/// Chat-completion endpoint.
pub const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Upper bound on the whole fetch; the worker reports a transport error when
/// it elapses.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// Builds the review prompt around the given diff.
///
/// The section names, the `📄` reference format, and the `Severity:` lines
/// are what the item extractor keys on — keep them in sync with
/// `revcheck_core::extract`.
pub fn build_prompt(diff: &str) -> String {
    format!(
        "You are an expert code reviewer. Review the following git diff and \
provide a detailed analysis.\n\n\
For each point you make:\n\
- Reference the specific file and approximate line numbers (e.g., \"main.go:45-50\")\n\
- Include relevant code snippets using markdown code blocks with language syntax\n\
- Be specific about what should be changed and why\n\n\
Structure your review with these sections:\n\n\
1. **Summary**: Brief overview of what changed\n\n\
2. **Quality Assessment**:\n\
   - Code quality observations\n\
   - Best practices compliance\n\
   - Performance considerations\n\
   Reference specific files and line numbers.\n\n\
3. **Issues Found**:\n\
   For each issue, provide:\n\
   - File reference (e.g., \"📄 main.go:42\")\n\
   - Description of the problem\n\
   - Code snippet showing the issue\n\
   - Severity (Critical/High/Medium/Low)\n\n\
4. **Suggestions**:\n\
   For each suggestion, provide:\n\
   - File reference (e.g., \"📄 utils.go:78\")\n\
   - What to change\n\
   - Code snippet showing the recommended change\n\
   - Explanation of why this is better\n\n\
Use markdown code blocks with proper language syntax highlighting.\n\
Use file references in the format: 📄 filename.ext:lineNumber\n\n\
Here's the git diff:\n\n{diff}\n\n\
Please provide a comprehensive review with specific file references and code examples."
    )
}

/// Sends the diff for review and returns the review text.
///
/// Blocking; intended to run on the worker thread only. Exactly one HTTP
/// round trip — no retries.
pub fn review_diff(
    client: &reqwest::blocking::Client,
    api_key: &str,
    model: &str,
    diff: &str,
) -> Result<String, ReviewError> {
    let prompt = build_prompt(diff);
    let request = ChatRequest {
        model,
        messages: vec![ChatMessage { role: "user", content: &prompt }],
    };

    let response: ChatResponse = client
        .post(API_URL)
        .bearer_auth(api_key)
        .json(&request)
        .send()?
        .json()?;

    extract_content(response)
}

/// Pulls the first choice's content out of a parsed response.
///
/// An API error payload wins over any choices; a response with neither is
/// reported as empty.
fn extract_content(response: ChatResponse) -> Result<String, ReviewError> {
    if let Some(error) = response.error {
        return Err(ReviewError::Api(error.message));
    }
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(ReviewError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_diff_and_section_names() {
        let prompt = build_prompt("diff --git a/x.go b/x.go");
        assert!(prompt.contains("diff --git a/x.go b/x.go"));
        assert!(prompt.contains("**Issues Found**"));
        assert!(prompt.contains("**Suggestions**"));
        assert!(prompt.contains("📄 filename.ext:lineNumber"));
    }

    #[test]
    fn request_serializes_with_expected_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![ChatMessage { role: "user", content: "hi" }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn first_choice_content_is_extracted() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"looks good"}},
                {"message":{"role":"assistant","content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(response).unwrap(), "looks good");
    }

    #[test]
    fn api_error_payload_maps_to_api_error() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"error":{"message":"invalid key","type":"auth"}}"#,
        )
        .unwrap();
        match extract_content(response) {
            Err(ReviewError::Api(msg)) => assert_eq!(msg, "invalid key"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn no_choices_is_empty_response() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(extract_content(response), Err(ReviewError::EmptyResponse)));
    }
}
