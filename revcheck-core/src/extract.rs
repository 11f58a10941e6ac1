//! Best-effort extraction of structured review items from free-form text.
//!
//! The review text is scanned once, line by line, through a fixed cascade of
//! rules (first match consumes the line):
//!
//! 1. Issues/Suggestions section markers set the section flag.
//! 2. Any other fully-bold line is an unrelated header and clears the flag.
//! 3. Everything outside a recognized section is ignored.
//! 4. A file-reference line starts a new item (finalizing the previous one).
//! 5. A fence line toggles code-block mode; closing attaches the buffer.
//! 6. Inside a fence, lines are buffered verbatim.
//! 7. A `severity:` marker line sets the current item's severity.
//! 8. Any other non-empty line is appended to the current item's narrative.
//!
//! The rule order is load-bearing: a file-reference line wins over fence
//! content, and section markers win over everything. An item under
//! construction is only appended when superseded or at end of input, so a
//! half-built item is never observable in the result.
//!
//! Known quirk, kept on purpose: an unrelated bold header drops any later
//! Issues/Suggestions content until the next explicit section marker.

use crate::types::{ReviewItem, Severity};

/// Marker character the review prompt asks the model to put in front of
/// file references (`📄 main.go:42`).
pub const FILE_MARKER: &str = "📄";

/// Extensions that qualify a colon-bearing line as a file reference.
///
/// Matched by substring containment, so `.js` also matches `.json` — the
/// extractor is tolerant by design and a stray extra item is harmless.
const SOURCE_EXTENSIONS: [&str; 8] = [
    ".go", ".js", ".ts", ".py", ".java", ".vue", ".jsx", ".tsx",
];

/// Which region of the review the scan is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    /// Outside any recognized section; lines are ignored.
    #[default]
    None,
    /// Inside "Issues Found".
    Issues,
    /// Inside "Suggestions".
    Suggestions,
}

/// Transient state for one extraction pass.
#[derive(Default)]
struct Scan {
    section: Section,
    in_fence: bool,
    code_buffer: Vec<String>,
    current: Option<ReviewItem>,
    items: Vec<ReviewItem>,
}

impl Scan {
    /// Moves the item under construction (if any) into the result list.
    fn finalize_current(&mut self) {
        if let Some(item) = self.current.take() {
            self.items.push(item);
        }
    }

    /// Finalizes the previous item and starts a new one titled `title`.
    fn start_item(&mut self, title: &str) {
        self.finalize_current();
        let number = self.items.len() + 1;
        self.current = Some(ReviewItem::new(number, title));
    }

    /// Attaches the buffered code lines to the current item, if both exist.
    ///
    /// When there is no current item the buffer is left alone (it will be
    /// cleared by the next opening fence), matching the original behavior.
    fn close_fence(&mut self) {
        if let Some(item) = self.current.as_mut() {
            if !self.code_buffer.is_empty() {
                item.code_blocks.push(self.code_buffer.join("\n"));
                self.code_buffer.clear();
            }
        }
        self.in_fence = false;
    }
}

/// Extracts review items from raw review text.
///
/// Never fails; unrecognizable input yields an empty vec, which callers treat
/// as the trigger for fallback markdown rendering.
pub fn extract(review: &str) -> Vec<ReviewItem> {
    let mut scan = Scan::default();

    for line in review.lines() {
        let trimmed = line.trim();

        if let Some(section) = section_transition(trimmed) {
            scan.section = section;
            continue;
        }

        if scan.section == Section::None {
            continue;
        }

        if is_file_reference(trimmed) {
            scan.start_item(trimmed);
            continue;
        }

        if trimmed.starts_with("```") {
            if scan.in_fence {
                scan.close_fence();
            } else {
                scan.in_fence = true;
                scan.code_buffer.clear();
            }
            continue;
        }

        if scan.in_fence {
            // Verbatim, untrimmed — indentation inside excerpts matters.
            scan.code_buffer.push(line.to_owned());
            continue;
        }

        if let Some(severity) = severity_marker(trimmed) {
            if let Some(item) = scan.current.as_mut() {
                item.severity = severity;
            }
            continue;
        }

        if !trimmed.is_empty() {
            if let Some(item) = scan.current.as_mut() {
                if !item.content.is_empty() {
                    item.content.push(' ');
                }
                item.content.push_str(trimmed);
            }
        }
    }

    scan.finalize_current();
    scan.items
}

/// Returns the section change a line triggers, or `None` if it is not a
/// header line at all.
///
/// `Some(Section::None)` means the line is an unrelated bold header that
/// clears both section flags.
fn section_transition(trimmed: &str) -> Option<Section> {
    if trimmed.contains("**Issues Found**") || trimmed.contains("3. Issues") {
        Some(Section::Issues)
    } else if trimmed.contains("**Suggestions**") || trimmed.contains("4. Suggestions") {
        Some(Section::Suggestions)
    } else if trimmed.starts_with("**") && trimmed.ends_with("**") {
        Some(Section::None)
    } else {
        None
    }
}

/// True when a line should become a new item's title.
///
/// Requires the file marker or a colon, plus a recognized source extension
/// anywhere in the line.
fn is_file_reference(trimmed: &str) -> bool {
    if !(trimmed.contains(FILE_MARKER) || trimmed.contains(':')) {
        return false;
    }
    SOURCE_EXTENSIONS.iter().any(|ext| trimmed.contains(ext))
}

/// Parses a `severity:` marker line into a severity level.
///
/// Match is case-insensitive on both the marker and the level keywords.
/// Unknown levels map to `Low`.
fn severity_marker(trimmed: &str) -> Option<Severity> {
    let lower = trimmed.to_lowercase();
    if !lower.contains("severity:") {
        return None;
    }
    if lower.contains("critical") || lower.contains("high") {
        Some(Severity::High)
    } else if lower.contains("medium") {
        Some(Severity::Medium)
    } else {
        Some(Severity::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_section_markers_yields_nothing() {
        let text = "📄 main.go:10\nLooks wrong\nSeverity: high";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn section_without_file_reference_yields_nothing() {
        let text = "**Issues Found**\nSomething is off here\nReally off";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn numbered_section_headings_are_recognized() {
        let text = "3. Issues Found\n📄 main.go:10\nBad naming";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "Bad naming");
    }

    #[test]
    fn content_joins_lines_with_single_spaces() {
        let text = "**Issues Found**\n📄 main.go:10\nfirst line\nsecond line\n\nthird";
        let items = extract(text);
        assert_eq!(items[0].content, "first line second line third");
    }

    #[test]
    fn unrelated_bold_header_clears_section() {
        // Content after the unrelated header is dropped until the next
        // section marker. Inherited behavior, documented here.
        let text = "**Issues Found**\n📄 a.go:1\nkept\n**Something Else**\n📄 b.go:2\ndropped";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "kept");
    }

    #[test]
    fn severity_markers_are_case_insensitive() {
        for (line, expected) in [
            ("Severity: High", Severity::High),
            ("severity: critical", Severity::High),
            ("SEVERITY: MEDIUM", Severity::Medium),
            ("Severity: low", Severity::Low),
            ("Severity: whatever", Severity::Low),
        ] {
            let text = format!("**Issues Found**\n📄 a.go:1\n{line}");
            let items = extract(&text);
            assert_eq!(items[0].severity, expected, "line: {line}");
        }
    }

    #[test]
    fn severity_line_is_not_content() {
        let text = "**Issues Found**\n📄 a.go:1\nbody\nSeverity: high";
        let items = extract(&text.to_string());
        assert_eq!(items[0].content, "body");
    }

    #[test]
    fn file_reference_needs_known_extension() {
        let text = "**Issues Found**\n📄 README.md:3\nnot an item\n📄 main.go:10\nan item";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert!(items[0].title.contains("main.go:10"));
    }

    #[test]
    fn colon_line_with_extension_starts_item_without_marker() {
        let text = "**Issues Found**\nsrc/app.ts:42: unused import";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "src/app.ts:42: unused import");
    }

    #[test]
    fn fenced_code_is_attached_verbatim() {
        let text = "**Issues Found**\n📄 a.go:1\n```go\nif x {\n    y()\n}\n```\ntrailing";
        let items = extract(text);
        assert_eq!(items[0].code_blocks, vec!["if x {\n    y()\n}"]);
        assert_eq!(items[0].content, "trailing");
    }

    #[test]
    fn multiple_code_blocks_stay_ordered() {
        let text = "**Issues Found**\n📄 a.go:1\n```\nfirst\n```\n```\nsecond\n```";
        let items = extract(text);
        assert_eq!(items[0].code_blocks, vec!["first", "second"]);
    }

    #[test]
    fn unclosed_fence_attaches_nothing() {
        let text = "**Issues Found**\n📄 a.go:1\n```\ndangling";
        let items = extract(text);
        assert!(items[0].code_blocks.is_empty());
    }

    #[test]
    fn numbers_are_sequential_across_sections() {
        let text = "**Issues Found**\n📄 a.go:1\none\n📄 b.go:2\ntwo\n**Suggestions**\n📄 c.go:3\nthree";
        let items = extract(text);
        let numbers: Vec<usize> = items.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn last_item_is_finalized_at_end_of_input() {
        let text = "**Suggestions**\n📄 tail.py:9\nuse a comprehension";
        let items = extract(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "use a comprehension");
    }
}
