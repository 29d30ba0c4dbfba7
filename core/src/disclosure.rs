/// Accordion open state over an ordered item list. At most one item is
/// open at any time; the first item starts open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disclosure {
    open: Option<usize>,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new()
    }
}

impl Disclosure {
    pub fn new() -> Self {
        Self { open: Some(0) }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggling the open item closes it; toggling any other item opens
    /// it and closes whatever was open before.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_starts_open() {
        assert_eq!(Disclosure::new().open_index(), Some(0));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let mut d = Disclosure::new();
        d.toggle(0);
        assert_eq!(d.open_index(), None);
        d.toggle(0);
        assert_eq!(d.open_index(), Some(0));
    }

    #[test]
    fn opening_another_item_closes_the_previous_one() {
        let mut d = Disclosure::new();
        d.toggle(2);
        assert_eq!(d.open_index(), Some(2));
        assert!(!d.is_open(0));
        assert!(d.is_open(2));
    }
}
