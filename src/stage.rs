//! Core normalization stage abstraction.
//!
//! A stage is a small, pure rewrite over a string. Every stage answers two
//! questions about a text:
//!
//! * `needs_apply` – would `apply` change anything?  Must be exact, because
//!   callers use it to decide whether to offer the rewrite at all.
//! * `apply` – perform the rewrite.  When nothing changes the input `Cow` is
//!   handed back untouched, so clean text never allocates.
//!
//! Stages are total: they accept every string and never fail.

pub mod collapse_whitespace;
pub mod join_japanese;

use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and assertion messages.
    fn name(&self) -> &'static str;

    /// Exact pre-check.  `false` guarantees `apply` is the identity on `text`.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation.  Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
