//! Best-effort repair for JSON that uses `'` as a string delimiter.
//!
//! Some server builds emit Python-style objects such as `{'id': 'abc'}`. The
//! repair rewrites single-quoted strings into double-quoted ones and leaves
//! every double-quoted string exactly as it was, so an apostrophe inside a
//! valid value survives. It is not a general JSON fixer: text that is broken
//! in other ways stays broken, and a bare `'` outside any string is treated as
//! the start of a string.

use std::borrow::Cow;

#[derive(Clone, Copy, PartialEq)]
enum State {
    Outside,
    Double,
    Single,
}

/// Rewrites single-quoted string literals as double-quoted literals.
///
/// Returns the input unchanged (borrowed) when it holds no `'` at all.
pub fn repair_single_quotes(text: &str) -> Cow<'_, str> {
    if !text.contains('\'') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut state = State::Outside;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Outside => match c {
                '"' => {
                    state = State::Double;
                    out.push('"');
                }
                '\'' => {
                    state = State::Single;
                    out.push('"');
                }
                _ => out.push(c),
            },
            State::Double => {
                out.push(c);
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            out.push(escaped);
                        }
                    }
                    '"' => state = State::Outside,
                    _ => {}
                }
            }
            State::Single => match c {
                '\\' => match chars.next() {
                    // `\'` is not a valid JSON escape; the quote needs none inside `"..."`.
                    Some('\'') => out.push('\''),
                    Some(escaped) => {
                        out.push('\\');
                        out.push(escaped);
                    }
                    None => out.push('\\'),
                },
                '"' => out.push_str("\\\""),
                '\'' => {
                    state = State::Outside;
                    out.push('"');
                }
                _ => out.push(c),
            },
        }
    }

    Cow::Owned(out)
}
