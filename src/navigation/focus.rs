/// A wrapping selection index over `len` entries
///
/// Moving previous from the first entry lands on the last one and vice versa,
/// so the index can never leave `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    len: usize,
}

impl FocusRing {
    /// Ring of `len` entries (at least 1), starting on the first
    pub fn new(len: usize) -> Self {
        FocusRing {
            index: 0,
            len: len.max(1),
        }
    }

    /// Ring starting on `index`, wrapped into range
    #[cfg(test)]
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut ring = FocusRing::new(len);
        ring.index = index % ring.len;
        ring
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Move selection back (wraps to last)
    pub fn select_previous(&mut self) {
        if self.index == 0 {
            self.index = self.len - 1;
        } else {
            self.index -= 1;
        }
    }

    /// Move selection forward (wraps to first)
    pub fn select_next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}
