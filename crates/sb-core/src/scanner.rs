//! Quote-aware scanning
//!
//! Everything here is a single forward pass over the characters of the input,
//! tracking which quote character (if any) is currently open. Unterminated
//! quotes close implicitly at the end of the input.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Split `input` at every delimiter that lies outside a quoted span.
///
/// A quoted span opens at any character in `quotes` and closes at the next
/// occurrence of that same character. `n` unquoted delimiters always produce
/// `n + 1` pieces, empty pieces included.
pub fn split_unquoted<'a, F>(input: &'a str, quotes: &[char], mut is_delimiter: F) -> Vec<&'a str>
where
    F: FnMut(char) -> bool,
{
    let mut pieces = Vec::new();
    let mut active_quote: Option<char> = None;
    let mut start = 0;

    for (i, ch) in input.char_indices() {
        match active_quote {
            Some(quote) => {
                if ch == quote {
                    active_quote = None;
                }
            }
            None => {
                if quotes.contains(&ch) {
                    active_quote = Some(ch);
                } else if is_delimiter(ch) {
                    pieces.push(&input[start..i]);
                    start = i + ch.len_utf8();
                }
            }
        }
    }

    pieces.push(&input[start..]);
    pieces
}

/// Split a snippet body into statements at semicolons outside double quotes.
pub fn split_statements(body: &str) -> Vec<&str> {
    split_unquoted(body, &['"'], |ch| ch == ';')
}

/// Break a statement into whitespace-separated tokens.
///
/// A token that starts with `'` or `"` runs up to and including the next
/// matching quote, whitespace included. Any other token is the longest run of
/// non-whitespace characters; quotes inside such a run are plain characters.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        let mut end = input.len();
        if ch == '\'' || ch == '"' {
            for (i, next) in chars.by_ref() {
                if next == ch {
                    end = i + next.len_utf8();
                    break;
                }
            }
        } else {
            while let Some(&(i, next)) = chars.peek() {
                if next.is_whitespace() {
                    end = i;
                    break;
                }
                chars.next();
            }
        }

        tokens.push(&input[start..end]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unquoted_plain() {
        assert_eq!(split_unquoted("a;b;c", &['"'], |ch| ch == ';'), vec!["a", "b", "c"]);
        assert_eq!(split_unquoted("abc", &['"'], |ch| ch == ';'), vec!["abc"]);
        assert_eq!(split_unquoted("", &['"'], |ch| ch == ';'), vec![""]);
    }

    #[test]
    fn test_split_unquoted_keeps_empty_pieces() {
        assert_eq!(split_unquoted("a;;b;", &['"'], |ch| ch == ';'), vec!["a", "", "b", ""]);
    }

    #[test]
    fn test_split_unquoted_respects_quotes() {
        assert_eq!(
            split_unquoted(r#"log "a;b"; log c"#, &['"'], |ch| ch == ';'),
            vec![r#"log "a;b""#, " log c"]
        );
        assert_eq!(
            split_unquoted("x 'a b' y", &['\'', '"'], char::is_whitespace),
            vec!["x", "'a b'", "y"]
        );
        // Only the opening quote character closes the span.
        assert_eq!(
            split_unquoted(r#"'a"b;c';d"#, &['\'', '"'], |ch| ch == ';'),
            vec![r#"'a"b;c'"#, "d"]
        );
    }

    #[test]
    fn test_split_unquoted_unterminated_quote() {
        assert_eq!(split_unquoted(r#"a;"b;c"#, &['"'], |ch| ch == ';'), vec!["a", r#""b;c"#]);
    }

    #[test]
    fn test_split_statements_quote_parity() {
        assert_eq!(
            split_statements(r#"log "x;y" z; log w"#),
            vec![r#"log "x;y" z"#, " log w"]
        );
        // Single quotes do not protect semicolons.
        assert_eq!(split_statements("log 'x;y'"), vec!["log 'x", "y'"]);
    }

    #[test]
    fn test_tokenize_words() {
        assert_eq!(tokenize("  hide-if-contains   foo\tbar "), vec!["hide-if-contains", "foo", "bar"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_tokenize_quoted_runs() {
        assert_eq!(tokenize("log 'hello world' \"a b\""), vec!["log", "'hello world'", "\"a b\""]);
        assert_eq!(tokenize("x ''"), vec!["x", "''"]);
    }

    #[test]
    fn test_tokenize_quote_boundaries() {
        // A closing quote ends the token even without whitespace after it.
        assert_eq!(tokenize("'foo'bar"), vec!["'foo'", "bar"]);
        // Quotes inside an unquoted run are ordinary characters.
        assert_eq!(tokenize("foo'bar baz'"), vec!["foo'bar", "baz'"]);
        // Unterminated quote swallows the rest of the statement.
        assert_eq!(tokenize("log 'foo bar"), vec!["log", "'foo bar"]);
    }

    #[test]
    fn test_tokenize_multibyte() {
        assert_eq!(tokenize("log 'héllo wörld' ü"), vec!["log", "'héllo wörld'", "ü"]);
    }
}
