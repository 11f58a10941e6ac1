//! Core review-text processing for revcheck.
//!
//! This crate is pure text transformation — no terminal, no network, no I/O.
//! It turns the free-form markdown-ish text produced by a chat-completion
//! review into structured [`ReviewItem`]s, and provides the word-wrapping and
//! inline-markup-stripping primitives shared by the item view and the
//! fallback markdown view in the `revcheck` binary.
//!
//! The extractor is deliberately tolerant: it never fails. Text that does not
//! match the expected review structure simply yields fewer items, down to an
//! empty vec, which is the caller's signal to fall back to plain markdown
//! rendering.

pub mod extract;
pub mod types;
pub mod wrap;

pub use extract::{extract, FILE_MARKER};
pub use types::{ReviewItem, Severity};
pub use wrap::{strip_inline, wrap};
