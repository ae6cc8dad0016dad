//! Rendering for `%m` — printf-style substitution over the event's argument
//! list, with a structural fallback for everything the template didn't use.

use crate::event::Value;

/// Renders an argument list to a single string.
///
/// A leading string argument acts as the template: each `%s`, `%d`, `%j`
/// consumes the next queued argument in encounter order. Arguments left in
/// the queue (or all of them, when there is no template) are appended
/// space-separated in their structural form; an error-like argument adds its
/// stack trace on the following line.
#[must_use]
pub fn format_data(data: &[Value]) -> String {
    let mut rest = data;
    let mut output = String::new();

    if let [Value::Str(template), tail @ ..] = data {
        let mut args = tail.iter();
        output = substitute(template, &mut args);
        rest = args.as_slice();
    }

    for value in rest {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(&value.inspect());
        if let Some(stack) = value.stack() {
            output.push('\n');
            output.push_str(stack);
        }
    }

    output
}

/// Template scan. Only the exact 2-character sequences `%s`, `%d`, `%j` are
/// substitution points; any other `%` passes through unchanged, as does a
/// substitution point once the queue is exhausted.
fn substitute(template: &str, args: &mut std::slice::Iter<'_, Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some(kind @ ('s' | 'd' | 'j')) => {
                if let Some(value) = args.next() {
                    chars.next();
                    match kind {
                        's' => out.push_str(&value.to_string()),
                        'd' => out.push_str(&value.as_number().to_string()),
                        _ => out.push_str(&value.to_json().to_string()),
                    }
                } else {
                    out.push('%');
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
