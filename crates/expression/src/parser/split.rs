//! Top-level splitting and escape handling

/// Splits `text` on `separator` wherever it is outside brackets, braces and
/// double quotes.
///
/// Nesting depth counts `[`/`{` against `]`/`}`. A `"` toggles quoting unless
/// the previous character is a backslash. Every segment is trimmed. A trailing
/// empty segment is dropped, but empty segments in the middle are kept so
/// callers can reject them.
pub fn split_top_level(text: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut in_quotes = false;
    let mut prev_backslash = false;

    for c in text.chars() {
        match c {
            '[' | '{' => depth += 1,
            ']' | '}' => depth -= 1,
            '"' if !prev_backslash => in_quotes = !in_quotes,
            c if c == separator && depth == 0 && !in_quotes => {
                parts.push(current.trim().to_owned());
                current.clear();
                prev_backslash = false;
                continue;
            }
            _ => {}
        }
        prev_backslash = c == '\\' && !prev_backslash;
        current.push(c);
    }

    if !current.is_empty() {
        parts.push(current.trim().to_owned());
    }

    parts
}

/// Replaces every `\x` pair with `x`. A lone trailing backslash is dropped.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut escaped = false;

    for c in text.chars() {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            out.push(c);
        }
    }

    out
}
