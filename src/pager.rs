// Visibility and page index of the letter modal.
//
// The index is clamped to `[0, len - 1]`. Moves past either end are no-ops
// and report [`PageChange::Unchanged`] so the caller can skip re-rendering.

/// Outcome of a pager transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageChange {
    /// The displayed page is now this index and must be rendered.
    Show(usize),
    Unchanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    index: usize,
    visible: bool,
}

impl Pager {
    /// A hidden pager over `len` pages. `len` of zero is treated as one page.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            visible: false,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the modal from the first page. Always renders.
    pub fn open(&mut self) -> PageChange {
        self.visible = true;
        self.index = 0;
        PageChange::Show(0)
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn next(&mut self) -> PageChange {
        if self.index < self.last_index() {
            self.index += 1;
            PageChange::Show(self.index)
        } else {
            PageChange::Unchanged
        }
    }

    pub fn prev(&mut self) -> PageChange {
        if self.index > 0 {
            self.index -= 1;
            PageChange::Show(self.index)
        } else {
            PageChange::Unchanged
        }
    }
}
