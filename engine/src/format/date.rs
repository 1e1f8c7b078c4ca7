use chrono::Local;

const DISPLAY_SHAPE: &[u8] = b"99/99/9999";
const CANONICAL_SHAPE: &[u8] = b"9999-99-99";

// '9' in a shape stands for any ASCII digit, every other byte must match literally.
fn has_shape(text: &str, shape: &[u8]) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == shape.len()
        && bytes.iter().zip(shape).all(|(&b, &s)| match s {
            b'9' => b.is_ascii_digit(),
            literal => b == literal,
        })
}

/// `"25/12/2024"` -> `"2024-12-25"`. Anything not shaped exactly like
/// `DD/MM/YYYY` gives an empty string. The calendar is not checked, so
/// `"31/02/2023"` converts as-is.
pub fn to_canonical(display: &str) -> String {
    if !has_shape(display, DISPLAY_SHAPE) {
        return String::new();
    }
    // Shape check guarantees ASCII, so byte slicing is safe.
    format!("{}-{}-{}", &display[6..10], &display[3..5], &display[0..2])
}

/// `"2024-12-25"` -> `"25/12/2024"`. Only the first ten characters are
/// looked at, so a timestamp like `"2024-12-25T10:00:00Z"` works too.
pub fn to_display(canonical: &str) -> String {
    let head = match canonical.get(..10) {
        Some(head) if has_shape(head, CANONICAL_SHAPE) => head,
        _ => return String::new(),
    };
    format!("{}/{}/{}", &head[8..10], &head[5..7], &head[0..4])
}

/// Accepts either display or canonical text and returns the canonical form,
/// or an empty string when neither shape matches.
pub fn normalize_date(text: &str) -> String {
    let text = text.trim();
    let canonical = to_canonical(text);
    if !canonical.is_empty() {
        return canonical;
    }
    match text.get(..10) {
        Some(head) if has_shape(head, CANONICAL_SHAPE) => head.to_string(),
        _ => String::new(),
    }
}

/// Today's date on the local clock as `YYYY-MM-DD`.
pub fn today_canonical() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Chronological "strictly earlier" for canonical dates, via plain string
/// ordering. An empty date sorts before everything.
pub fn is_before(date: &str, reference: &str) -> bool {
    date < reference
}
