#[cfg(test)]
mod unit_tests {

    use crate::{is_normalizable, normalize};
    use std::borrow::Cow;

    #[test]
    fn removes_spaces_between_japanese() {
        assert_eq!(normalize("これ は 日本語 です"), "これは日本語です");
    }

    #[test]
    fn preserves_japanese_english_boundary() {
        assert_eq!(normalize("Hello 世界 です"), "Hello 世界です");
    }

    #[test]
    fn double_space_at_en_ja_boundary() {
        assert_eq!(normalize("Hello  世界"), "Hello 世界");
    }

    #[test]
    fn double_space_at_ja_en_boundary() {
        assert_eq!(normalize("世界  Hello"), "世界 Hello");
    }

    #[test]
    fn mixed_double_and_inner_spaces() {
        assert_eq!(normalize("Hello  世界 です"), "Hello 世界です");
    }

    #[test]
    fn numbers_keep_their_spaces() {
        assert_eq!(normalize("2024 年 1 月"), "2024 年 1 月");
    }

    #[test]
    fn ascii_runs_collapse() {
        assert_eq!(normalize("a    b"), "a b");
    }

    #[test]
    fn ascii_single_spaces_kept() {
        assert_eq!(normalize("a b c"), "a b c");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert!(!is_normalizable(""));
    }

    #[test]
    fn edges_are_collapsed_never_removed() {
        assert_eq!(normalize("  これ は  "), " これは ");
        assert_eq!(normalize("\u{3000}日本"), "\u{3000}日本");
    }

    #[test]
    fn exotic_whitespace_behaves_like_space() {
        assert_eq!(normalize("日本\u{3000}語"), "日本語");
        assert_eq!(normalize("日本\u{00A0}\u{2003}語"), "日本語");
        assert_eq!(normalize("OCR\u{00A0}\u{00A0}結果"), "OCR 結果");
        assert_eq!(normalize("OCR\u{00A0}結果"), "OCR\u{00A0}結果");
    }

    #[test]
    fn line_breaks_inside_japanese_are_joined() {
        assert_eq!(normalize("吾輩は\n猫である"), "吾輩は猫である");
        assert_eq!(normalize("名前は\r\nまだ無い"), "名前はまだ無い");
    }

    #[test]
    fn shared_punctuation_is_japanese() {
        assert_eq!(normalize("日本 、 東京"), "日本、東京");
        assert_eq!(normalize("「 はい 」 と 言った 。"), "「はい」と言った。");
    }

    #[test]
    fn detection_cases() {
        assert!(is_normalizable("これ は"));
        assert!(is_normalizable("Hello  世界"));
        assert!(is_normalizable("世界  Hello"));
        assert!(!is_normalizable("Hello 世界"));
        assert!(!is_normalizable("これは日本語"));
        assert!(!is_normalizable("2024 年 1 月"));
        assert!(!is_normalizable("a b c"));
    }

    #[test]
    fn zero_copy_when_clean() {
        let input = "Hello 世界、2024 年";
        let result = normalize(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn allocates_when_changed() {
        assert!(matches!(normalize("これ は"), Cow::Owned(_)));
    }
}
