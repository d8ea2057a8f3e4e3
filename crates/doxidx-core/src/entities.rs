//! HTML entity decoding for display labels.
//!
//! Doxygen HTML-escapes the scope text it puts in target labels
//! (`std::array&lt; int, 2 &gt; &amp;size`). The browser widget renders
//! those through the DOM; terminal output has to decode them itself. Only
//! the named entities that actually occur in generated output are handled,
//! plus decimal/hex numeric references. Unknown entities pass through
//! verbatim.

/// Decode HTML entities in `s`. Returns the input unchanged (no allocation
/// beyond the output string) when no `&` is present.
pub fn decode(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match decode_one(rest) {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Try to decode a single entity at the start of `s` (which begins with
/// `&`). Returns the decoded char and the byte length consumed.
fn decode_one(s: &str) -> Option<(char, usize)> {
    let semi = s.find(';')?;
    if semi > 12 {
        return None; // not an entity, just a stray ampersand
    }
    let body = &s[1..semi];
    let c = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let value = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            char::from_u32(value)?
        }
    };
    Some((c, semi + 1))
}
