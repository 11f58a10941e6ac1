//! Color theme system for revcheck.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every UI
//! surface revcheck renders. Two built-in themes are provided:
//!
//! - `dark` — uses ANSI 16 colors (`Color::Reset`, `Color::DarkGray`, etc.)
//!   so it works on any terminal including 256-color SSH sessions with no
//!   truecolor support.
//! - `dracula` — Dracula palette in RGB; requires truecolor.

use ratatui::style::Color;

/// All color values used across revcheck's UI surfaces.
///
/// Every field is a `ratatui::style::Color`. Callers use `theme.field`
/// directly inside `Style::default().fg(theme.title)`.
#[derive(Debug, Clone)]
pub struct Theme {
    // Header
    /// Application title line.
    pub title: Color,
    /// Secondary header text (target line, summary counts).
    pub subtitle: Color,

    // Chrome
    /// Horizontal rule lines.
    pub separator: Color,
    /// Footer key hints.
    pub footer: Color,
    /// Loading spinner glyph.
    pub spinner: Color,

    // Body text
    /// General prose and item descriptions.
    pub text: Color,
    /// `📄 file:line` references and item titles.
    pub file_ref: Color,
    /// Bold sub-headings in the markdown fallback.
    pub heading: Color,
    /// Numbered section titles in the markdown fallback.
    pub section: Color,
    /// Fallback code text when syntax highlighting does not apply.
    pub code: Color,
    /// Background behind fallback code lines.
    pub code_bg: Color,

    // Status
    /// Error banner and message.
    pub error: Color,
    /// Completion banner and checked boxes.
    pub success: Color,

    // Checklist
    /// Background of the row under the cursor.
    pub cursor_bg: Color,
    /// Badge color for high severity.
    pub severity_high: Color,
    /// Badge color for medium severity.
    pub severity_medium: Color,
    /// Badge color for low severity.
    pub severity_low: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    ///
    /// Works on all terminals: 16-color, 256-color, and truecolor. Suitable
    /// as the default when no config is present or color capability is
    /// unknown.
    pub fn dark() -> Self {
        Self {
            title: Color::Magenta,
            subtitle: Color::DarkGray,

            separator: Color::DarkGray,
            footer: Color::DarkGray,
            spinner: Color::Magenta,

            text: Color::Reset,
            file_ref: Color::Cyan,
            heading: Color::Green,
            section: Color::Magenta,
            code: Color::White,
            code_bg: Color::Black,

            error: Color::Red,
            success: Color::Green,

            cursor_bg: Color::DarkGray,
            severity_high: Color::Red,
            severity_medium: Color::Yellow,
            severity_low: Color::Blue,
        }
    }

    /// Returns the Dracula theme using RGB truecolor values.
    ///
    /// Requires a truecolor terminal. Colors degrade to the nearest ANSI
    /// 256-color approximation elsewhere; use `dark()` on SSH or 256-color
    /// terminals.
    ///
    /// Palette source: <https://draculatheme.com/contribute>.
    pub fn dracula() -> Self {
        // Dracula palette (selected subset)
        let purple = Color::Rgb(125, 86, 244);    // #7d56f4
        let comment = Color::Rgb(98, 114, 164);   // #6272a4
        let selection = Color::Rgb(68, 71, 90);   // #44475a
        let foreground = Color::Rgb(248, 248, 242); // #f8f8f2
        let cyan = Color::Rgb(139, 233, 253);     // #8be9fd
        let green = Color::Rgb(80, 250, 123);     // #50fa7b
        let violet = Color::Rgb(189, 147, 249);   // #bd93f9
        let background = Color::Rgb(40, 42, 54);  // #282a36
        let red = Color::Rgb(255, 0, 0);          // #ff0000
        let teal_green = Color::Rgb(4, 181, 117); // #04b575
        let orange = Color::Rgb(255, 165, 0);     // #ffa500
        let gold = Color::Rgb(255, 215, 0);       // #ffd700

        Self {
            title: purple,
            subtitle: comment,

            separator: selection,
            footer: comment,
            spinner: purple,

            text: foreground,
            file_ref: cyan,
            heading: green,
            section: violet,
            code: foreground,
            code_bg: background,

            error: red,
            success: teal_green,

            cursor_bg: selection,
            severity_high: red,
            severity_medium: orange,
            severity_low: gold,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never
    /// prevents startup. The fallback is logged to stderr (not a hard
    /// error).
    pub fn from_name(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "dark" => Self::dark(),
            other => {
                eprintln!("revcheck: unknown theme '{}', falling back to 'dark'", other);
                Self::dark()
            }
        }
    }
}
