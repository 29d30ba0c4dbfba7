/// Duration of the accordion answer's enter/exit transition.
pub const TRANSITION_DURATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Settled,
    Exiting,
}

/// Explicit mount/unmount transition for conditionally rendered
/// content. `None` means unmounted. The caller drives the timed steps:
/// `enter` on mount, `settle` once the enter frame has painted, `exit`
/// to start leaving and `finish` after [`TRANSITION_DURATION_MS`].
/// Every step is guarded, so a stale timer firing after a quick
/// re-toggle is a no-op instead of a corrupt phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    phase: Option<Phase>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Transition {
    pub fn hidden() -> Self {
        Self { phase: None }
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase.is_some()
    }

    pub fn enter(&mut self) {
        match self.phase {
            None | Some(Phase::Exiting) => self.phase = Some(Phase::Entering),
            _ => {}
        }
    }

    pub fn settle(&mut self) {
        if self.phase == Some(Phase::Entering) {
            self.phase = Some(Phase::Settled);
        }
    }

    pub fn exit(&mut self) {
        match self.phase {
            Some(Phase::Entering) | Some(Phase::Settled) => self.phase = Some(Phase::Exiting),
            _ => {}
        }
    }

    pub fn finish(&mut self) {
        if self.phase == Some(Phase::Exiting) {
            self.phase = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut t = Transition::hidden();
        assert!(!t.is_mounted());
        t.enter();
        assert_eq!(t.phase(), Some(Phase::Entering));
        t.settle();
        assert_eq!(t.phase(), Some(Phase::Settled));
        t.exit();
        assert_eq!(t.phase(), Some(Phase::Exiting));
        t.finish();
        assert!(!t.is_mounted());
    }

    #[test]
    fn reentry_during_exit_restarts_the_enter_phase() {
        let mut t = Transition::hidden();
        t.enter();
        t.settle();
        t.exit();
        t.enter();
        assert_eq!(t.phase(), Some(Phase::Entering));
        // The old exit timer fires late and must not unmount.
        t.finish();
        assert_eq!(t.phase(), Some(Phase::Entering));
    }

    #[test]
    fn stale_settle_after_exit_is_ignored() {
        let mut t = Transition::hidden();
        t.enter();
        t.exit();
        t.settle();
        assert_eq!(t.phase(), Some(Phase::Exiting));
    }

    #[test]
    fn finish_only_applies_while_exiting() {
        let mut t = Transition::hidden();
        t.finish();
        assert!(!t.is_mounted());
        t.enter();
        t.settle();
        t.finish();
        assert_eq!(t.phase(), Some(Phase::Settled));
    }
}
