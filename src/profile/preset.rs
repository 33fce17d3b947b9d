use crate::{
    CollapseWhitespace, JoinJapanese,
    process::{ChainedProcess, EmptyProcess, Process},
    profile::Profile,
    stage::{collapse_whitespace::COLLAPSE_WHITESPACE, join_japanese::JOIN_JAPANESE},
};

pub type JapaneseSpacing =
    ChainedProcess<JoinJapanese, ChainedProcess<CollapseWhitespace, EmptyProcess>>;

/// Collapse multi-whitespace runs, then delete whitespace between Japanese
/// code points.  This is what [`crate::normalize`] runs.
///
/// Collapsing first means a double space at a Japanese/Latin boundary ends up
/// as exactly one space instead of surviving untouched.
pub const JAPANESE_SPACING: Profile<JapaneseSpacing> = Profile {
    name: "japanese_spacing",
    pipeline: ChainedProcess {
        stage: JOIN_JAPANESE,
        previous: ChainedProcess {
            stage: COLLAPSE_WHITESPACE,
            previous: EmptyProcess,
        },
    },
};

#[inline(always)]
pub fn japanese_spacing() -> Profile<JapaneseSpacing> {
    JAPANESE_SPACING
}

/// Only delete whitespace between Japanese code points; every other run is
/// left exactly as written, including double spaces at script boundaries.
pub fn join_only() -> Profile<impl Process> {
    Profile::builder("join_only").add_stage(JOIN_JAPANESE).build()
}
