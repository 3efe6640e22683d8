/// Grouping key for commits whose message contains no ticket reference.
pub const UNKNOWN_TICKET: &str = "Unknown";

/// Extract the canonical ticket key from a commit message.
///
/// Scans left to right for the first occurrence of:
/// - 3 or 4 ASCII letters (longest match tried first at each position),
/// - a separator, space or hyphen,
/// - 1 to 6 ASCII digits,
/// - a terminator character: space, `|`, `,`, `-` or `_`.
///
/// End of input does not terminate a match; `"ABC-123"` with nothing after
/// the digits is not a ticket reference. On a match the letters are
/// uppercased and joined to the digits with a hyphen (`"abc 0042,"` becomes
/// `"ABC-0042"`, digits kept verbatim). On no match, [`UNKNOWN_TICKET`].
///
/// This is a heuristic, not a grammar: real tickets written without a
/// terminator are missed, and 3-4 letter words followed by numbers (version
/// strings, dates) can match. Both are accepted failure modes.
pub fn extract_ticket_key(message: &str) -> String {
    let bytes = message.as_bytes();
    for start in 0..bytes.len() {
        for prefix_len in [4, 3] {
            if let Some(key) = match_at(bytes, start, prefix_len) {
                return key;
            }
        }
    }
    UNKNOWN_TICKET.to_string()
}

fn is_terminator(b: u8) -> bool {
    matches!(b, b' ' | b'|' | b',' | b'-' | b'_')
}

/// Try to match a ticket reference with a `prefix_len`-letter prefix
/// beginning at byte offset `start`. The pattern is pure ASCII, so byte
/// offsets are safe even in multibyte messages.
fn match_at(bytes: &[u8], start: usize, prefix_len: usize) -> Option<String> {
    let sep_idx = start + prefix_len;
    if sep_idx >= bytes.len() {
        return None;
    }

    let prefix = &bytes[start..sep_idx];
    if !prefix.iter().all(u8::is_ascii_alphabetic) {
        return None;
    }
    if !matches!(bytes[sep_idx], b' ' | b'-') {
        return None;
    }

    let digits_start = sep_idx + 1;
    let mut digits_end = digits_start;
    while digits_end < bytes.len() && bytes[digits_end].is_ascii_digit() {
        digits_end += 1;
    }
    let run = digits_end - digits_start;
    // A run longer than 6 cannot match: shortening it only puts another
    // digit where the terminator has to be.
    if run == 0 || run > 6 {
        return None;
    }
    if digits_end >= bytes.len() || !is_terminator(bytes[digits_end]) {
        return None;
    }

    let mut key = String::with_capacity(prefix_len + 1 + run);
    for &b in prefix {
        key.push(b.to_ascii_uppercase() as char);
    }
    key.push('-');
    for &b in &bytes[digits_start..digits_end] {
        key.push(b as char);
    }
    Some(key)
}
