// src/stage/join_japanese.rs
//! JoinJapanese stage – deletes whitespace sitting between two Japanese
//! code points.
//!
//! OCR engines and PDF text extraction insert spaces between kana and kanji
//! that carry no meaning.  A run is removed only when the code points on
//! *both* sides belong to Han, Hiragana or Katakana (by `Script_Extensions`),
//! so spaces next to Latin words, digits or the string edges survive.

use crate::{
    runs::{WhitespaceRun, whitespace_runs},
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct JoinJapanese;

pub const JOIN_JAPANESE: JoinJapanese = JoinJapanese;

impl Stage for JoinJapanese {
    fn name(&self) -> &'static str {
        "join_japanese"
    }

    fn needs_apply(&self, text: &str) -> bool {
        // ASCII text has no Japanese neighbours.
        if text.is_ascii() {
            return false;
        }
        whitespace_runs(text).any(|run| run.is_between_japanese())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        let mut runs = whitespace_runs(&text)
            .filter(WhitespaceRun::is_between_japanese)
            .peekable();
        if runs.peek().is_none() {
            drop(runs);
            return text;
        }

        let s = text.as_ref();
        let mut result = String::with_capacity(s.len());
        let mut copied = 0;
        for run in runs {
            result.push_str(&s[copied..run.range.start]);
            copied = run.range.end;
        }
        result.push_str(&s[copied..]);
        Cow::Owned(result)
    }
}

impl StageTestConfig for JoinJapanese {
    fn samples() -> &'static [&'static str] {
        &[
            "これ は 日本語 です",
            "Hello 世界 です",
            "2024 年 1 月",
            "日本 、 東京",
            "カタカナ\u{3000}ひらがな",
            " 前後 ",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello world",
            "これは日本語",
            "Hello 世界",
            "2024 年 1 月",
            " 日本 ",
            "한국 어",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("これ は 日本語 です", "これは日本語です"),
            ("Hello 世界 です", "Hello 世界です"),
            ("これ  は", "これは"),
            ("日本 、 東京", "日本、東京"),
            ("カタカナ\u{3000}ひらがな", "カタカナひらがな"),
            ("漢字\n\tかな", "漢字かな"),
        ]
    }
}
