//! Percent-escape handling at the wire boundary.
//!
//! # Responsibilities
//! - Turn escaped non-ASCII UTF-8 (`%C3%89`) back into text before case checks
//! - Escape non-ASCII text again before it goes into a `Location` header
//!
//! # Design Decisions
//! - ASCII escapes (`%2F`, `%3F`, `%25`) stay escaped: decoding them would
//!   change which resource the URL names
//! - Escapes that are not valid UTF-8 are left untouched

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, CONTROLS};

use crate::canonical::{evaluate, CanonicalOptions, Decision, Exemptions, RequestView};

/// `evaluate` for a request whose path and query are still escaped.
///
/// Case checks run on the decoded text; the redirect target is escaped
/// again so it can be sent as-is.
pub fn evaluate_escaped(
    request: &RequestView<'_>,
    options: &CanonicalOptions,
    exemptions: Exemptions,
) -> Decision {
    let path = decode_non_ascii(request.path);
    let query = decode_non_ascii(request.query);
    let view = RequestView {
        path: &path,
        query: &query,
        ..*request
    };

    match evaluate(&view, options, exemptions) {
        Decision::Redirect(mut redirect) => {
            redirect.location = encode_location(&redirect.location).into_owned();
            Decision::Redirect(redirect)
        }
        Decision::Canonical => Decision::Canonical,
    }
}

/// Decode escaped non-ASCII UTF-8 sequences, leaving everything else as is.
pub fn decode_non_ascii(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let escaped = &rest[start..];
        let run = non_ascii_run(escaped);
        if run == 0 {
            out.push('%');
            rest = &escaped[1..];
            continue;
        }

        match percent_decode_str(&escaped[..run]).decode_utf8() {
            Ok(text) => out.push_str(&text),
            Err(_) => out.push_str(&escaped[..run]),
        }
        rest = &escaped[run..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Escape non-ASCII and control characters so `location` fits a header.
pub fn encode_location(location: &str) -> Cow<'_, str> {
    utf8_percent_encode(location, CONTROLS).into()
}

/// Byte length of the leading run of `%XY` escapes with `XY >= 0x80`.
fn non_ascii_run(s: &str) -> usize {
    s.as_bytes()
        .chunks(3)
        .take_while(|chunk| match chunk {
            [b'%', hi, lo] => matches!((hex(*hi), hex(*lo)), (Some(h), Some(_)) if h >= 8),
            _ => false,
        })
        .count()
        * 3
}

fn hex(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
