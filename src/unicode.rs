use icu_properties::{props::Script, script::ScriptWithExtensions};

/// Whitespace as used by every stage: the Unicode `White_Space` property.
///
/// Covers ASCII space, tab and line breaks as well as U+0085, U+00A0, U+1680,
/// U+2000..=U+200A, U+2028, U+2029, U+202F, U+205F and U+3000.
#[inline(always)]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Script of a single code point, restricted to the scripts that make up
/// Japanese running text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum ScriptClass {
    Han,
    Hiragana,
    Katakana,
    Other,
}

impl ScriptClass {
    #[inline(always)]
    pub const fn is_japanese(self) -> bool {
        !matches!(self, ScriptClass::Other)
    }
}

/// Classify `c` through its `Script_Extensions` (scx) set.
///
/// scx rather than plain `Script`: shared CJK punctuation such as `、` `。`
/// `ー` `・` `「` is `Common` by script but lists Han/Hiragana/Katakana in its
/// extensions. When several Japanese scripts match, Han wins over Hiragana,
/// Hiragana over Katakana.
#[inline]
pub fn classify_script(c: char) -> ScriptClass {
    // ASCII never carries a Japanese script extension.
    if c.is_ascii() {
        return ScriptClass::Other;
    }

    let scx = ScriptWithExtensions::new();
    if scx.has_script(c, Script::Han) {
        ScriptClass::Han
    } else if scx.has_script(c, Script::Hiragana) {
        ScriptClass::Hiragana
    } else if scx.has_script(c, Script::Katakana) {
        ScriptClass::Katakana
    } else {
        ScriptClass::Other
    }
}

#[inline(always)]
pub fn is_japanese(c: char) -> bool {
    classify_script(c).is_japanese()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        // Independent scx tables from regex-syntax, used as an oracle. They
        // lag behind ICU4X's Unicode version: code points assigned later
        // (e.g. U+16FF2, U+2B73A) are Han to ICU but unknown here, so only
        // compare characters both tables know.
        static ref JAPANESE_SCX: Regex =
            Regex::new(r"^[\p{scx=Han}\p{scx=Hiragana}\p{scx=Katakana}]$").unwrap();
    }

    macro_rules! assert_class {
        ($c:expr, $expected:expr) => {
            assert_eq!(
                classify_script($c),
                $expected,
                "U+{:04X} '{}' misclassified",
                $c as u32,
                $c
            );
        };
    }

    #[test]
    fn whitespace_covers_unicode_spaces() {
        for c in [
            ' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{A0}', '\u{1680}', '\u{2003}',
            '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
        ] {
            assert!(is_space(c), "U+{:04X} should be whitespace", c as u32);
        }
        for c in ['a', '0', '\u{200B}', '\u{FEFF}', 'あ', '、'] {
            assert!(!is_space(c), "U+{:04X} should not be whitespace", c as u32);
        }
    }

    #[test]
    fn letters_by_script() {
        use ScriptClass::*;

        assert_class!('日', Han);
        assert_class!('語', Han);
        assert_class!('々', Han);
        assert_class!('\u{20B9F}', Han); // 𠮟, Ext B
        assert_class!('あ', Hiragana);
        assert_class!('ゟ', Hiragana);
        assert_class!('ア', Katakana);
        assert_class!('ｱ', Katakana); // halfwidth
        assert_class!('ヿ', Katakana);
    }

    #[test]
    fn shared_punctuation_counts_as_japanese() {
        // `Common` by Script, Japanese by Script_Extensions.
        for c in ['、', '。', 'ー', '・', '「', '」', '〜'] {
            assert!(is_japanese(c), "U+{:04X} '{c}' should be Japanese", c as u32);
        }
    }

    #[test]
    fn non_japanese_is_other() {
        use ScriptClass::*;

        assert_class!('A', Other);
        assert_class!('7', Other);
        assert_class!('!', Other);
        assert_class!('é', Other);
        assert_class!('я', Other);
        assert_class!('한', Other);
        assert_class!('ㄅ', Other); // Bopomofo
        assert_class!('\u{FFFD}', Other);
        assert_class!('★', Other);
    }

    #[test]
    fn agrees_with_regex_scx_tables() {
        // Long-standing code points only, see `JAPANESE_SCX`.
        let samples = "日本語のテキスト、。ー・「」〜々〆ゝゞヽヾｱｰAa1!?é한ㄅ★\u{FFFD}";
        for c in samples.chars() {
            assert_eq!(
                is_japanese(c),
                JAPANESE_SCX.is_match(c.encode_utf8(&mut [0; 4])),
                "scx disagreement on U+{:04X} '{c}'",
                c as u32
            );
        }
    }
}
