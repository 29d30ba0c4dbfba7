/// Scroll distance from the top (in CSS pixels) past which the navbar
/// switches to its solid backdrop.
pub const SCROLL_THRESHOLD: f64 = 8.0;

/// Binary scroll state, recomputed from the raw scroll offset on every
/// scroll event and once at mount so a page loaded mid-scroll renders
/// correctly right away. No debouncing; each event pays for one
/// comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub crossed: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            crossed: offset > SCROLL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_is_not_crossed() {
        assert!(!ScrollState::from_offset(0.0).crossed);
    }

    #[test]
    fn threshold_itself_is_not_crossed() {
        assert!(!ScrollState::from_offset(8.0).crossed);
    }

    #[test]
    fn past_threshold_is_crossed() {
        assert!(ScrollState::from_offset(9.0).crossed);
    }

    #[test]
    fn mid_page_load_evaluates_without_a_scroll_event() {
        // Mount-time evaluation is just a call with the current offset.
        assert!(ScrollState::from_offset(20.0).crossed);
    }
}
