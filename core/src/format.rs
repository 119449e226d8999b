//! Positional message templates.
//!
//! Templates use `{N}` placeholders indexed into an ordered parameter list.
//! `{N,type}` and `{N,type,style}` are accepted and insert the parameter text
//! unchanged. Single quotes escape: `''` is a literal apostrophe and text
//! between quotes is copied verbatim, braces included.

use crate::errors::FormatError;

pub fn format_message<S: AsRef<str>>(template: &str, params: &[S]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + params.len() * 8);
    let mut chars = template.char_indices().peekable();
    let mut quoted = false;

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            '{' if !quoted => {
                let start = i;
                let mut body = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(FormatError::UnclosedPlaceholder { offset: start });
                }

                let index_text = body.split(',').next().unwrap_or_default().trim();
                let index: usize =
                    index_text
                        .parse()
                        .map_err(|_| FormatError::InvalidArgumentIndex {
                            offset: start,
                            text: body.clone(),
                        })?;

                match params.get(index) {
                    Some(p) => out.push_str(p.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(&body);
                        out.push('}');
                    }
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
