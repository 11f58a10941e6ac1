//! Owned data types for extracted review findings.

use std::fmt;

/// Severity assigned to a review finding.
///
/// Set from a `Severity:` marker line in the review text; findings without a
/// marker stay at the default `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Critical or high-impact finding.
    High,
    /// Worth fixing, not urgent.
    Medium,
    /// Nitpick or informational.
    #[default]
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        };
        f.write_str(s)
    }
}

/// One structured finding (issue or suggestion) extracted from review text.
///
/// Items are numbered in discovery order, starting at 1. `title` keeps the
/// raw file-reference line that introduced the item; `content` is the
/// narrative with words space-joined across source lines; `code_blocks`
/// holds the verbatim text of each fenced excerpt belonging to the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// 1-based sequential number, stable across the parse pass.
    pub number: usize,
    /// The raw file-reference line, e.g. `📄 main.go:42`.
    pub title: String,
    /// Accumulated narrative text, space-joined and trimmed.
    pub content: String,
    /// Fenced code excerpts in the order they appeared.
    pub code_blocks: Vec<String>,
    /// Parsed severity; `Low` until a marker line says otherwise.
    pub severity: Severity,
    /// User-toggled completion flag.
    pub checked: bool,
}

impl ReviewItem {
    /// Starts a fresh item with the given number and title line.
    pub fn new(number: usize, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            content: String::new(),
            code_blocks: Vec::new(),
            severity: Severity::default(),
            checked: false,
        }
    }
}
