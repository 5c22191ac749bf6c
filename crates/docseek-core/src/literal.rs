//! Reader for the JavaScript literal Doxygen writes into `search/*.js`.
//!
//! The files look like `var searchData=\n[ ... ];\n`: a single assignment of a
//! nested array of single-quoted strings and small integers. The array itself
//! is valid JSON5, so once the assignment is peeled off it is handed to
//! `serde_json5` and comes back as a [`serde_json::Value`] for the loader to
//! decode. Plain JSON is a subset of JSON5 and is accepted as well.

use crate::error::LoadError;
use serde_json::Value;

/// Deepest bracket nesting accepted. Index records are three levels deep; the
/// limit keeps hostile input from exhausting the stack inside the parser.
pub const MAX_DEPTH: usize = 64;

/// Parse a complete source file into a value.
///
/// Accepts an optional `var <ident> =` prologue and an optional trailing `;`.
pub fn parse(src: &str) -> Result<Value, LoadError> {
    let body = strip_assignment(src)?;
    check_depth(body)?;
    serde_json5::from_str::<Value>(body).map_err(|e| LoadError::Syntax {
        message: e.to_string(),
    })
}

/// The literal with any `var <ident> =` prefix and trailing `;` removed.
fn strip_assignment(src: &str) -> Result<&str, LoadError> {
    let mut body = src.trim();
    let declared = body
        .strip_prefix("var")
        .filter(|after| after.starts_with(char::is_whitespace));
    if let Some(after) = declared {
        let (ident, value) = after.split_once('=').ok_or_else(|| LoadError::Syntax {
            message: "expected '=' after 'var'".to_string(),
        })?;
        let ident = ident.trim();
        let valid = !ident.is_empty()
            && ident
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if !valid {
            return Err(LoadError::Syntax {
                message: format!("invalid variable name {ident:?}"),
            });
        }
        body = value.trim();
    }
    Ok(body.strip_suffix(';').unwrap_or(body).trim_end())
}

/// Reject input nested deeper than [`MAX_DEPTH`], ignoring brackets inside
/// string literals.
fn check_depth(body: &str) -> Result<(), LoadError> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in body.chars() {
        if let Some(q) = quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '[' | '{' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(LoadError::Syntax {
                        message: format!("nesting deeper than {MAX_DEPTH} levels"),
                    });
                }
            }
            ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
