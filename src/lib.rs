pub mod normalizer;
pub mod process;
pub mod profile;
pub mod runs;
pub mod stage;
pub mod unicode;
pub mod utf16;

#[doc(hidden)]
pub mod testing {
    pub mod stage_contract;
}

pub use normalizer::{is_normalizable, normalize};
pub use profile::Profile;
pub use profile::preset::{JAPANESE_SPACING, japanese_spacing, join_only};
pub use stage::Stage;
pub use stage::collapse_whitespace::{COLLAPSE_WHITESPACE, CollapseWhitespace};
pub use stage::join_japanese::{JOIN_JAPANESE, JoinJapanese};
pub use unicode::{ScriptClass, classify_script};
pub use utf16::{is_normalizable_utf16, normalize_utf16};
