// Host-side tests for splitting letter text into animated characters.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod letter {
    include!("../src/letter.rs");
}
mod text {
    include!("../src/text.rs");
}

use letter::LETTER_PAGES;
use text::*;

fn span(c: &str) -> String {
    format!("<span class='letter'>{}</span>", c)
}

#[test]
fn wraps_each_visible_character() {
    let expected = format!("{}{} {}{}", span("H"), span("i"), span("y"), span("o"));
    assert_eq!(letterize("Hi yo"), expected);
}

#[test]
fn whitespace_is_kept_verbatim() {
    assert_eq!(letterize("  \n"), "  \n");
    assert_eq!(letterize(""), "");
}

#[test]
fn tags_pass_through_untouched() {
    let html = "a<i class=\"icon_heart fa-solid fa-heart\"></i>.";
    let expected = format!(
        "{}<i class=\"icon_heart fa-solid fa-heart\"></i>{}",
        span("a"),
        span(".")
    );
    assert_eq!(letterize(html), expected);
}

#[test]
fn entities_are_one_character() {
    assert_eq!(
        units("&amp;x"),
        vec![Unit::Glyph("&amp;"), Unit::Glyph("x")]
    );
    assert_eq!(units("&#39;"), vec![Unit::Glyph("&#39;")]);
    assert_eq!(letterize("a & b"), format!("{} {} {}", span("a"), span("&amp;"), span("b")));
}

#[test]
fn no_break_space_is_not_animated() {
    assert_eq!(units("a&nbsp;b")[1], Unit::Space("&nbsp;"));
    assert_eq!(
        letterize("a&nbsp;b\u{a0}c"),
        format!("{}&nbsp;{}\u{a0}{}", span("a"), span("b"), span("c"))
    );
    assert_eq!(glyph_count("a&#160;b"), 2);
}

#[test]
fn unterminated_tag_is_shown_as_text() {
    assert_eq!(units("<b"), vec![Unit::Glyph("&lt;"), Unit::Glyph("b")]);
}

#[test]
fn multibyte_characters_stay_whole() {
    assert_eq!(glyph_count("c\u{f4} gi\u{e1}o"), 6);
    assert_eq!(letterize("\u{f4}"), span("\u{f4}"));
}

#[test]
fn plain_pages_animate_every_non_space_character() {
    let text = LETTER_PAGES[0].text;
    let expected = text.chars().filter(|c| !c.is_whitespace()).count();
    assert_eq!(glyph_count(text), expected);
}

#[test]
fn heart_icon_survives_letterizing() {
    let last = LETTER_PAGES[LETTER_PAGES.len() - 1].text;
    let out = letterize(last);
    assert!(out.contains("<i class=\"icon_heart fa-solid fa-heart\""));
    assert!(out.ends_with(&format!("</i>{}", span("."))));
}
