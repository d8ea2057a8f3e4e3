//! Writer — serializes entries back to the generated fragment format.
//!
//! Output matches the layout Doxygen emits (two-space indent, single-quoted
//! strings, `];` terminator) so a written fragment can be dropped next to
//! generated ones and reparsed. The target flag is emitted as the constant
//! `1` seen in all generated output.

use crate::types::IndexEntry;
use std::io::{self, Write};

/// Write `entries` as a fragment named `variable` (usually `searchData`).
pub fn write_fragment<'a, W, I>(w: &mut W, variable: &str, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a IndexEntry>,
{
    writeln!(w, "var {variable}=")?;
    write!(w, "[")?;
    let mut first = true;
    for entry in entries {
        if !first {
            write!(w, ",")?;
        }
        first = false;
        write!(w, "\n  ['{}',['{}'", escape(&entry.key), escape(&entry.name))?;
        for target in &entry.targets {
            write!(w, ",['{}',1,'{}']", escape(&target.url), escape(&target.label))?;
        }
        write!(w, "]]")?;
    }
    writeln!(w, "\n];")
}

/// [`write_fragment`] into a `String`.
pub fn fragment_to_string<'a, I>(variable: &str, entries: I) -> String
where
    I: IntoIterator<Item = &'a IndexEntry>,
{
    let mut buf = Vec::new();
    write_fragment(&mut buf, variable, entries)
        .expect("writing a fragment to a Vec cannot fail");
    String::from_utf8(buf).expect("fragment output is built from UTF-8 strings")
}

/// Escape a string for a single-quoted JS literal.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment;
    use crate::types::Target;

    fn sample() -> Vec<IndexEntry> {
        vec![
            IndexEntry {
                key: "calib_0".into(),
                name: "Calib".into(),
                targets: vec![Target::new("../md_README.html", "")],
            },
            IndexEntry {
                key: "close_1".into(),
                name: "close".into(),
                targets: vec![
                    Target::new("../classCamCv.html#abecc", "CamCv::close()"),
                    Target::new("../classCamera.html#a8988", "Camera::close()"),
                ],
            },
        ]
    }

    #[test]
    fn output_matches_the_generated_layout() {
        let text = fragment_to_string("searchData", &sample());
        assert_eq!(
            text,
            "var searchData=\n\
             [\n\
             \x20 ['calib_0',['Calib',['../md_README.html',1,'']]],\n\
             \x20 ['close_1',['close',['../classCamCv.html#abecc',1,'CamCv::close()'],['../classCamera.html#a8988',1,'Camera::close()']]]\n\
             ];\n"
        );
    }

    #[test]
    fn empty_index_still_round_trips() {
        let text = fragment_to_string("searchData", []);
        assert_eq!(text, "var searchData=\n[\n];\n");
        let frag = fragment::parse(&text).unwrap();
        assert!(frag.entries.is_empty());
    }

    #[test]
    fn escaped_strings_survive_a_round_trip() {
        let entries = vec![IndexEntry {
            key: "operator_27_0".into(),
            name: "operator'".into(),
            targets: vec![Target::new("../a.html", "a\\b\nc")],
        }];
        let frag = fragment::parse(&fragment_to_string("searchData", &entries)).unwrap();
        assert_eq!(frag.entries, entries);
    }
}
