/// Collapse every whitespace run to a single ASCII space and trim both ends.
pub(super) fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        cursor = next_cursor;
    }

    out
}

pub(super) fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::with_capacity(count_words(text));
    let mut cursor = 0usize;

    while let Some((word, next_cursor)) = next_word_at(text, cursor) {
        words.push(word.to_owned());
        cursor = next_cursor;
    }

    words
}

pub(super) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// Next whitespace-delimited word starting at byte offset `cursor`, together
/// with the byte offset just past it.
pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;
    let start = cursor + rest.find(|ch: char| !ch.is_whitespace())?;
    let end = text[start..]
        .find(char::is_whitespace)
        .map_or(text.len(), |offset| start + offset);

    Some((&text[start..end], end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_mixed_whitespace() {
        assert_eq!(normalize("  the\tquick \n\n brown  "), "the quick brown");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn tokenize_splits_on_unicode_whitespace() {
        let words = tokenize("uno\u{00A0}dos\u{2003}tres");
        assert_eq!(words, ["uno", "dos", "tres"]);
    }

    #[test]
    fn next_word_at_walks_offsets() {
        let text = "ab  cd";
        let (first, after_first) = next_word_at(text, 0).unwrap();
        assert_eq!((first, after_first), ("ab", 2));
        let (second, after_second) = next_word_at(text, after_first).unwrap();
        assert_eq!((second, after_second), ("cd", 6));
        assert!(next_word_at(text, after_second).is_none());
    }
}
