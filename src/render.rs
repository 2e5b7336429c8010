use std::borrow::Cow;


/// Request display stops after this many lines even when no blank
/// header/body separator is present.
const MAX_REQUEST_LINES: usize = 20;

/// Response bodies are cut after this many characters.
const MAX_BODY_CHARS: usize = 10_000;

const TRUNCATION_MARKER: &str = "... (truncated)";

/// Formats a request payload: at most the first 20 CRLF-separated lines,
/// stopping at the first empty line. The body is never shown.
pub fn render_request(payload: &[u8]) -> String {
    let text = decode(payload);
    let mut out = Vec::new();
    for line in text.split("\r\n").take(MAX_REQUEST_LINES) {
        if line.is_empty() {
            break;
        }
        out.push(line);
    }
    out.join("\n")
}

/// Formats a response payload: every header line up to the blank
/// separator, then the body behind a blank line, truncated past
/// [`MAX_BODY_CHARS`] characters.
pub fn render_response(payload: &[u8]) -> String {
    let text = decode(payload);
    let lines: Vec<&str> = text.split("\r\n").collect();

    let mut headers = Vec::new();
    let mut body_lines: &[&str] = &[];
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            if i < lines.len() - 1 {
                body_lines = &lines[i + 1..];
            }
            break;
        }
        headers.push(*line);
    }

    let mut out = headers.join("\n");
    if !body_lines.is_empty() {
        let body = body_lines.join("\n");
        out.push_str("\n\n");
        out.push_str(&truncate_body(&body));
    }
    out
}

fn truncate_body(body: &str) -> Cow<'_, str> {
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}\n{}", &body[..cut], TRUNCATION_MARKER)),
        None => Cow::Borrowed(body),
    }
}

fn decode(payload: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(payload)
}
