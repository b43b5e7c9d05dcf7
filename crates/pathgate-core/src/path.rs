//! Canonical escaped form of a request path.
//!
//! Transports may hand over a path with raw non-ASCII or reserved bytes
//! (`/café`, `/a|b`). Patterns are written against the escaped form, so those
//! bytes are percent-encoded before matching. Existing `%XX` sequences and the
//! sub-delims allowed in a path segment are left untouched.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except unreserved, `/`, `%`, and `!$&'()*+,;=:@[]`.
const PATH_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/')
    .remove(b'%')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'[')
    .remove(b']');

/// Escape `path` for matching. Borrows when nothing needs encoding.
pub fn escape_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH_ESCAPE).into()
}
