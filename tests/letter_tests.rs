// Host-side tests for the letter content and the modal's page state.

#![allow(dead_code)]
mod letter {
    include!("../src/letter.rs");
}
mod pager {
    include!("../src/pager.rs");
}

use letter::*;
use pager::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn letter_has_seven_pages_numbered_from_one() {
    assert_eq!(page_count(), 7);
    for (i, page) in LETTER_PAGES.iter().enumerate() {
        assert_eq!(page.number as usize, i + 1);
        assert!(!page.text.is_empty());
    }
}

#[test]
fn last_page_ends_with_the_heart_icon() {
    let last = LETTER_PAGES[page_count() - 1];
    assert!(last.text.contains("icon_heart"));
}

#[test]
fn pager_starts_hidden_on_first_page() {
    let p = Pager::new(page_count());
    assert!(!p.is_visible());
    assert_eq!(p.index(), 0);
    assert_eq!(p.last_index(), 6);
}

#[test]
fn open_always_shows_first_page() {
    let mut p = Pager::new(page_count());
    assert_eq!(p.open(), PageChange::Show(0));
    assert!(p.is_visible());
    assert_eq!(LETTER_PAGES[p.index()].number, 1);

    p.next();
    p.next();
    p.close();
    assert!(!p.is_visible());
    assert_eq!(p.open(), PageChange::Show(0));
    assert_eq!(p.index(), 0);
}

#[test]
fn next_at_last_page_is_a_no_op() {
    let mut p = Pager::new(page_count());
    p.open();
    for i in 1..page_count() {
        assert_eq!(p.next(), PageChange::Show(i));
    }
    assert_eq!(p.index(), 6);
    assert_eq!(p.next(), PageChange::Unchanged);
    assert_eq!(p.index(), 6);
}

#[test]
fn prev_at_first_page_is_a_no_op() {
    let mut p = Pager::new(page_count());
    p.open();
    assert_eq!(p.prev(), PageChange::Unchanged);
    assert_eq!(p.index(), 0);
}

#[test]
fn prev_onto_first_page_renders_it() {
    let mut p = Pager::new(page_count());
    p.open();
    p.next();
    assert_eq!(p.prev(), PageChange::Show(0));
    assert_eq!(p.index(), 0);
}

#[test]
fn random_walks_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut p = Pager::new(page_count());
        p.open();
        for _ in 0..200 {
            let change = if rng.gen_bool(0.5) { p.next() } else { p.prev() };
            assert!(p.index() <= p.last_index());
            if let PageChange::Show(i) = change {
                assert_eq!(i, p.index());
            }
        }
    }
}

#[test]
fn empty_pager_still_has_one_page() {
    let mut p = Pager::new(0);
    assert_eq!(p.len(), 1);
    assert_eq!(p.open(), PageChange::Show(0));
    assert_eq!(p.next(), PageChange::Unchanged);
}
