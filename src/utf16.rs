//! UTF-16 entry points for hosts whose strings are sequences of code units.
//!
//! Such strings may hold unpaired surrogates.  They are treated as opaque
//! units: not whitespace, not Japanese, never removed and never moved.
//!
//! Each unpaired surrogate is decoded to U+FFFD, which is neither whitespace
//! nor Japanese, and remembered.  Normalization only deletes or replaces
//! whitespace, so the n-th U+FFFD of the output is the n-th U+FFFD of the
//! input and can be mapped back to the unit it stood for.

use crate::normalizer::{is_normalizable, normalize};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::char::{REPLACEMENT_CHARACTER, decode_utf16};

/// One entry per U+FFFD in the decoded text: the lone surrogate it replaced,
/// or `None` for a genuine U+FFFD.
type Placeholders = SmallVec<[Option<u16>; 4]>;

fn decode(units: &[u16]) -> (String, Placeholders) {
    let mut text = String::with_capacity(units.len());
    let mut placeholders = Placeholders::new();
    for decoded in decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                if c == REPLACEMENT_CHARACTER {
                    placeholders.push(None);
                }
                text.push(c);
            }
            Err(e) => {
                placeholders.push(Some(e.unpaired_surrogate()));
                text.push(REPLACEMENT_CHARACTER);
            }
        }
    }
    (text, placeholders)
}

fn encode(text: &str, placeholders: &[Option<u16>]) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len());
    let mut placeholders = placeholders.iter();
    let mut buf = [0u16; 2];
    for c in text.chars() {
        if c == REPLACEMENT_CHARACTER {
            if let Some(&Some(unit)) = placeholders.next() {
                out.push(unit);
                continue;
            }
        }
        out.extend_from_slice(c.encode_utf16(&mut buf));
    }
    out
}

/// [`normalize`] over UTF-16 code units.
pub fn normalize_utf16(units: &[u16]) -> Vec<u16> {
    let (text, placeholders) = decode(units);
    match normalize(&text) {
        Cow::Borrowed(_) => units.to_vec(),
        Cow::Owned(out) => encode(&out, &placeholders),
    }
}

/// [`is_normalizable`] over UTF-16 code units.
pub fn is_normalizable_utf16(units: &[u16]) -> bool {
    let (text, _) = decode(units);
    is_normalizable(&text)
}
