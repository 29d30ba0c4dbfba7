/// Visible fraction of an element that triggers its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.2;
/// Vertical offset of the hidden state, in CSS pixels.
pub const REVEAL_HIDDEN_OFFSET_PX: f64 = 16.0;
/// Duration of the reveal transition.
pub const REVEAL_DURATION_MS: u32 = 500;

/// One-shot viewport reveal flag for a tracked element. Starts hidden;
/// flips to revealed the first time the element's visible fraction
/// reaches [`REVEAL_THRESHOLD`] and never flips back, so scrolling the
/// element out of view does not replay the transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn observe(&mut self, visible_fraction: f64) {
        if visible_fraction >= REVEAL_THRESHOLD {
            self.revealed = true;
        }
    }

    pub fn has_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!Reveal::default().has_revealed());
    }

    #[test]
    fn stays_hidden_below_the_threshold() {
        let mut r = Reveal::default();
        r.observe(0.0);
        r.observe(0.19);
        assert!(!r.has_revealed());
    }

    #[test]
    fn reveals_at_the_threshold() {
        let mut r = Reveal::default();
        r.observe(0.2);
        assert!(r.has_revealed());
    }

    #[test]
    fn never_reverts_once_revealed() {
        let mut r = Reveal::default();
        r.observe(0.6);
        r.observe(0.0);
        assert!(r.has_revealed());
    }
}
