//! Process abstraction
//! ChainedProcess is monomorphised – the compiler knows the concrete type of
//! every stage, so a whole chain of zero-sized stages compiles down to the
//! stage bodies themselves, with no boxing and no dispatch.
use crate::stage::Stage;
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// Whether `process` would change `text`.
    ///
    /// Chains answer by asking every stage about the *original* input.  That
    /// is exact as long as each stage is run-preserving: it only rewrites
    /// whitespace runs in place, never touching non-whitespace and never
    /// creating, merging or splitting runs.  Every stage in this crate is.
    fn needs_process(&self, text: &str) -> bool;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        text
    }

    #[inline(always)]
    fn needs_process(&self, _text: &str) -> bool {
        false
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let current: Cow<'_, str> = self.previous.process(text);
        if !self.stage.needs_apply(&current) {
            return current;
        }
        self.stage.apply(current)
    }

    #[inline(always)]
    fn needs_process(&self, text: &str) -> bool {
        self.previous.needs_process(text) || self.stage.needs_apply(text)
    }
}
