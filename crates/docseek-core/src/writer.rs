//! Writer: serialises entries back into the `searchData` literal.
//!
//! Output layout matches what Doxygen emits, so loading a generated file and
//! writing it again reproduces it byte for byte:
//!
//! ```text
//! var searchData=
//! [
//!   ['imag',['imag',['../dd/dc0/a.html#a2c',1,'QFT']]],
//!   ['init',['init',['../d8/d8a/b.html#afb',1,'Logging::init()']]]
//! ];
//! ```

use crate::types::{IndexEntry, Target};
use serde_json::{json, Value};
use std::io::{self, Write};

/// Render entries as a complete `search/*.js` file.
pub fn to_js(entries: &[IndexEntry]) -> String {
    let mut out = String::from("var searchData=\n[\n");
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        out.push_str("  ");
        push_record(&mut out, entry);
        if i != last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

pub fn write_js<W: Write>(mut w: W, entries: &[IndexEntry]) -> io::Result<()> {
    w.write_all(to_js(entries).as_bytes())?;
    w.flush()
}

/// The same records as a JSON array of the same shape.
pub fn to_json(entries: &[IndexEntry]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|entry| {
                let mut body = vec![Value::String(entry.display_label.clone())];
                body.extend(entry.targets.iter().map(target_json));
                json!([entry.search_key, body])
            })
            .collect(),
    )
}

fn target_json(target: &Target) -> Value {
    json!([target.href(), u8::from(target.internal), target.scope])
}

fn push_record(out: &mut String, entry: &IndexEntry) {
    out.push('[');
    push_quoted(out, &entry.search_key);
    out.push_str(",[");
    push_quoted(out, &entry.display_label);
    for target in &entry.targets {
        out.push_str(",[");
        push_quoted(out, &target.href());
        out.push_str(if target.internal { ",1," } else { ",0," });
        push_quoted(out, &target.scope);
        out.push(']');
    }
    out.push_str("]]");
}

fn push_quoted(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
