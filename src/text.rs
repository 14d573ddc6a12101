// Splits a page's HTML fragment into per-character units for the reveal
// animation.

use crate::constants::LETTER_CLASS;

/// One piece of a page fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit<'a> {
    /// A tag such as `<i class="icon_heart">`, kept as-is.
    Markup(&'a str),
    /// Whitespace, kept as-is so lines still wrap.
    Space(&'a str),
    /// A visible character or a character entity like `&amp;`.
    Glyph(&'a str),
}

/// Tokenize `html` in document order.
pub fn units(html: &str) -> Vec<Unit<'_>> {
    let mut out = Vec::new();
    let mut rest = html;
    while let Some(c) = rest.chars().next() {
        let len = match c {
            '<' => match rest.find('>') {
                Some(end) => {
                    out.push(Unit::Markup(&rest[..=end]));
                    end + 1
                }
                // unterminated tag: show the bracket as text
                None => {
                    out.push(Unit::Glyph("&lt;"));
                    1
                }
            },
            '&' => {
                let end = entity_len(rest);
                let entity = &rest[..end];
                // no-break space arrives serialized from inner_html
                if matches!(entity, "&nbsp;" | "&#160;" | "&#xa0;" | "&#xA0;") {
                    out.push(Unit::Space(entity));
                } else {
                    out.push(Unit::Glyph(entity));
                }
                end
            }
            c if c.is_whitespace() => {
                let n = c.len_utf8();
                out.push(Unit::Space(&rest[..n]));
                n
            }
            c => {
                let n = c.len_utf8();
                out.push(Unit::Glyph(&rest[..n]));
                n
            }
        };
        rest = &rest[len..];
    }
    out
}

/// Length of a character entity at the start of `s`, or 1 for a bare `&`.
fn entity_len(s: &str) -> usize {
    let body = &s[1..];
    let name_len = body
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '#')
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    if name_len > 0 && body[name_len..].starts_with(';') {
        name_len + 2
    } else {
        1
    }
}

/// Wrap every visible character in a `letter` span, leaving tags and
/// whitespace untouched.
pub fn letterize(html: &str) -> String {
    let mut out = String::with_capacity(html.len() * 4);
    for unit in units(html) {
        match unit {
            Unit::Markup(s) | Unit::Space(s) => out.push_str(s),
            Unit::Glyph("&") => {
                out.push_str("<span class='");
                out.push_str(LETTER_CLASS);
                out.push_str("'>&amp;</span>");
            }
            Unit::Glyph(s) => {
                out.push_str("<span class='");
                out.push_str(LETTER_CLASS);
                out.push_str("'>");
                out.push_str(s);
                out.push_str("</span>");
            }
        }
    }
    out
}

/// Number of animated characters in `html`.
pub fn glyph_count(html: &str) -> usize {
    units(html)
        .iter()
        .filter(|u| matches!(u, Unit::Glyph(_)))
        .count()
}
