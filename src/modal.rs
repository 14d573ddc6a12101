use crate::anim::Reveal;
use crate::constants::MODAL_SHOW_CLASS;
use crate::dom::PageElements;
use crate::keys::ModalAction;
use crate::letter::{LetterPage, LETTER_PAGES};
use crate::pager::{PageChange, Pager};
use crate::text::letterize;
use crate::timeline;
use std::cell::RefCell;

/// The paginated letter: element handles, page state and the reveal player.
pub struct LetterModal {
    els: PageElements,
    pages: &'static [LetterPage],
    pager: RefCell<Pager>,
    reveal: Reveal,
}

impl LetterModal {
    pub fn new(els: PageElements) -> Self {
        Self::with_pages(els, &LETTER_PAGES)
    }

    pub fn with_pages(els: PageElements, pages: &'static [LetterPage]) -> Self {
        Self {
            els,
            pages,
            pager: RefCell::new(Pager::new(pages.len())),
            reveal: Reveal::new(timeline::letter_reveal()),
        }
    }

    pub fn elements(&self) -> &PageElements {
        &self.els
    }

    pub fn index(&self) -> usize {
        self.pager.borrow().index()
    }

    pub fn is_visible(&self) -> bool {
        self.pager.borrow().is_visible()
    }

    pub fn open(&self) {
        let change = self.pager.borrow_mut().open();
        _ = self.els.modal.class_list().add_1(MODAL_SHOW_CLASS);
        log::debug!("[modal] open");
        self.show(change);
    }

    pub fn close(&self) {
        self.pager.borrow_mut().close();
        _ = self.els.modal.class_list().remove_1(MODAL_SHOW_CLASS);
        log::debug!("[modal] close");
    }

    pub fn next(&self) {
        let change = self.pager.borrow_mut().next();
        self.show(change);
    }

    pub fn prev(&self) {
        let change = self.pager.borrow_mut().prev();
        self.show(change);
    }

    /// Keyboard entry point; ignored while the modal is hidden.
    pub fn apply(&self, action: ModalAction) {
        if !self.is_visible() {
            return;
        }
        match action {
            ModalAction::Next => self.next(),
            ModalAction::Prev => self.prev(),
            ModalAction::Close => self.close(),
        }
    }

    fn show(&self, change: PageChange) {
        let PageChange::Show(index) = change else {
            return;
        };
        let Some(page) = self.pages.get(index) else {
            return;
        };
        log::debug!("[modal] page {}/{}", page.number, self.pages.len());
        self.els.letter.set_inner_html(page.text);
        self.els
            .num_page
            .set_text_content(Some(page.number.to_string().as_str()));
        self.els
            .total_page
            .set_text_content(Some(self.pages.len().to_string().as_str()));
        // Re-read so this also works when #letter and the reveal target differ.
        let html = self.els.letters.inner_html();
        self.els.letters.set_inner_html(&letterize(&html));
        self.reveal.play();
    }
}
