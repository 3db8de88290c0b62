//! Translation from strftime-style percent directives to the layout
//! vocabulary understood by [`time::format_description::parse`].

use regex::Regex;
use std::sync::LazyLock;

use crate::layout::DEFAULT_LAYOUT;

/// A directive is `%` followed by one or two of `[a-zA-Z-]`; a leading
/// hyphen in the token selects the unpadded variant (`%-d`). The outer
/// groups pick up literal text adjacent to the directive.
static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([^%]+)?%([a-zA-Z-]{1,2})([^%]+)?").expect("directive regex is valid"));

fn fragment(token: &str) -> Option<&'static str> {
    Some(match token {
        "Y" => "[year]",
        "y" => "[year repr:last_two]",
        "B" => "[month repr:long]",
        "b" => "[month repr:short]",
        "m" => "[month]",
        "-m" => "[month padding:none]",
        "A" => "[weekday]",
        "a" => "[weekday repr:short]",
        "d" => "[day]",
        "-d" => "[day padding:none]",
        "H" => "[hour]",
        "-H" => "[hour padding:none]",
        "I" => "[hour repr:12]",
        "-I" => "[hour repr:12 padding:none]",
        "M" => "[minute]",
        "-M" => "[minute padding:none]",
        "S" => "[second]",
        "-S" => "[second padding:none]",
        "p" => "[period]",
        // The host time type carries a numeric offset and no zone name,
        // so the abbreviation token renders the offset as well.
        "Z" => "[offset_hour sign:mandatory][offset_minute]",
        "z" => "[offset_hour sign:mandatory][offset_minute]",
        "f" => "[subsecond digits:6]",
        "c" => DEFAULT_LAYOUT,
        _ => return None,
    })
}

/// Rewrites `pattern` into a native layout string.
///
/// Single left-to-right scan over directive matches. Known tokens are
/// replaced by their layout fragment; unknown directives pass through
/// verbatim, percent sign included. Literal text is emitted exactly
/// once, in order, whether it was captured by a match or sat in the gap
/// between two matches. An input without directives comes back
/// unchanged (modulo `[` escaping).
pub fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut last_end = 0;
    for caps in DIRECTIVE_RE.captures_iter(pattern) {
        let Some(m) = caps.get(0) else { continue };
        // Text the match engine skipped over, e.g. a stray `%` that did
        // not start a directive.
        if m.start() > last_end {
            push_literal(&mut out, &pattern[last_end..m.start()]);
        }
        if let Some(lead) = caps.get(1) {
            push_literal(&mut out, lead.as_str());
        }
        if let Some(token) = caps.get(2) {
            match fragment(token.as_str()) {
                Some(frag) => out.push_str(frag),
                None => {
                    out.push('%');
                    out.push_str(token.as_str());
                }
            }
        }
        if let Some(trail) = caps.get(3) {
            push_literal(&mut out, trail.as_str());
        }
        last_end = m.end();
    }
    if last_end < pattern.len() {
        push_literal(&mut out, &pattern[last_end..]);
    }
    out
}

/// `[` opens a component in the layout vocabulary, so literal brackets
/// are doubled to keep the output directly parseable.
fn push_literal(out: &mut String, text: &str) {
    for ch in text.chars() {
        out.push(ch);
        if ch == '[' {
            out.push('[');
        }
    }
}
