use crate::{
    runs::whitespace_runs,
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Collapse every run of two or more whitespace code points into one ASCII
/// space.
///
/// Single whitespace code points are left exactly as they are: a lone tab,
/// NBSP or ideographic space survives this stage unchanged.  Leading and
/// trailing runs are collapsed too, never trimmed.
///
/// | Input            | Output        |
/// |------------------|---------------|
/// | `"a    b"`       | `"a b"`       |
/// | `"a\tb"`         | `"a\tb"`      |
/// | `"Hello  世界"`  | `"Hello 世界"` |
/// | `"\u{3000}\u{3000}x"` | `" x"`   |
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseWhitespace;

pub const COLLAPSE_WHITESPACE: CollapseWhitespace = CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str) -> bool {
        if text.len() < 2 {
            return false;
        }
        whitespace_runs(text).any(|run| run.is_multi())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut runs = whitespace_runs(&text).filter(|run| run.is_multi()).peekable();
        if runs.peek().is_none() {
            drop(runs);
            return text;
        }

        let s = text.as_ref();
        let mut result = String::with_capacity(s.len());
        let mut copied = 0;
        for run in runs {
            result.push_str(&s[copied..run.range.start]);
            result.push(' ');
            copied = run.range.end;
        }
        result.push_str(&s[copied..]);
        Cow::Owned(result)
    }
}

impl StageTestConfig for CollapseWhitespace {
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            "a    b",
            "  leading and trailing  ",
            "hello \t\n world \u{00A0}\u{3000}",
            "これ  は\u{3000}\u{3000}日本語",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello world",
            "a\tb",
            " edge ",
            "これ は 日本語",
            "no\u{00A0}change",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("a    b", "a b"),
            ("Hello  世界", "Hello 世界"),
            ("世界  Hello", "世界 Hello"),
            ("a\t\tb", "a b"),
            ("\u{3000}\u{3000}x", " x"),
            ("x \n", "x "),
            ("   ", " "),
        ]
    }
}
