//! Splitting of messages that exceed the console line limit.

/// Longest message logcat prints on a single line, in characters.
pub const MAX_LOG_LENGTH: usize = 4000;

pub fn exceeds(message: &str, max_len: usize) -> bool {
    message.chars().nth(max_len).is_some()
}

/// Splits `message` into chunks of at most `max_len` characters.
///
/// Chunks end at a newline or at the length limit, whichever comes first. The
/// newlines themselves are dropped, a trailing newline does not produce an empty
/// chunk, and an empty message produces no chunks at all.
pub fn split(message: &str, max_len: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    if message.is_empty() || max_len == 0 {
        return chunks;
    }

    let body = message.strip_suffix('\n').unwrap_or(message);
    for line in body.split('\n') {
        split_line(line, max_len, &mut chunks);
    }
    chunks
}

fn split_line<'a>(line: &'a str, max_len: usize, chunks: &mut Vec<&'a str>) {
    if line.is_empty() {
        chunks.push(line);
        return;
    }

    let mut rest = line;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max_len)
            .map_or(rest.len(), |(idx, _)| idx);
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
}
