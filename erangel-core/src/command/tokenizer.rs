//! Argument tokenization with double-quote grouping.
//!
//! Arguments split on single spaces, except that a piece beginning with a
//! double quote opens a quoted span: following pieces are re-joined with
//! single spaces until one ends with a double quote, and the surrounding
//! quotes are stripped from the merged token. A piece that both begins and
//! ends with a quote closes its own span immediately, without looking at any
//! later piece. The two closing paths are intentionally distinct; see the
//! `quoted_single_piece_*` tests before changing either.

use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub enum TokenizeError {
    /// A quoted span was opened but no later piece closes it.
    UnterminatedQuote,
}
impl Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedQuote => {
                f.write_str("Error:: Must specify both quotes when using quotation parameters.")
            },
        }
    }
}
impl std::error::Error for TokenizeError {}

/// Splits raw argument text into tokens. Returns no tokens at all if a quoted
/// span is left unterminated.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut pieces: Vec<&str> = input.split(' ').filter(|p| !p.is_empty()).collect();
    let mut tokens: Vec<String> = Vec::new();

    let mut i = 0;
    while i < pieces.len() {
        let piece = pieces[i];

        if piece.starts_with('"') {
            let mut merged = piece.to_owned();
            let mut closed = piece.ends_with('"');

            if !closed {
                // consume following pieces into the span, removing them so the
                // outer scan neither re-processes nor skips anything
                while i + 1 < pieces.len() {
                    let next = pieces.remove(i + 1);
                    merged.push(' ');
                    merged.push_str(next);

                    if next.ends_with('"') {
                        closed = true;
                        break;
                    }
                }
            }

            if !closed {
                return Err(TokenizeError::UnterminatedQuote);
            }

            // strip the surrounding quotes; a lone `"` piece merges to nothing
            let stripped = if merged.len() >= 2 {
                &merged[1..merged.len() - 1]
            } else {
                ""
            };
            tokens.push(stripped.to_owned());
        } else {
            tokens.push(piece.to_owned());
        }

        i += 1;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokens_pass_through() {
        assert_eq!(tokenize("foo bar baz").unwrap(), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn quoted_span_merges_pieces() {
        assert_eq!(tokenize(r#"foo "bar baz" qux"#).unwrap(), vec!["foo", "bar baz", "qux"]);
    }

    #[test]
    fn quoted_span_preserves_interior_spacing_content() {
        let tokens = tokenize(r#""Player A" season=2018-03 region=pc-na"#).unwrap();
        assert_eq!(tokens, vec!["Player A", "season=2018-03", "region=pc-na"]);
    }

    #[test]
    fn unterminated_quote_fails_with_no_tokens() {
        assert_eq!(tokenize(r#"foo "bar baz"#), Err(TokenizeError::UnterminatedQuote));
    }

    #[test]
    fn quoted_single_piece_closes_immediately() {
        // `"solo"` must not consume `duo`
        assert_eq!(tokenize(r#""solo" duo"#).unwrap(), vec!["solo", "duo"]);
    }

    #[test]
    fn quoted_single_piece_lone_quote_closes_itself() {
        // a lone `"` is its own opener and closer: it merges to an empty
        // token and the following pieces are left untouched
        assert_eq!(tokenize(r#"" a b""#).unwrap(), vec!["", "a", "b\""]);
    }

    #[test]
    fn token_following_closed_span_is_not_skipped() {
        let tokens = tokenize(r#""a b" c "d e" f"#).unwrap();
        assert_eq!(tokens, vec!["a b", "c", "d e", "f"]);
    }

    #[test]
    fn long_span_consumes_many_pieces() {
        assert_eq!(tokenize(r#""a b c d e" f"#).unwrap(), vec!["a b c d e", "f"]);
    }

    #[test]
    fn token_count_bounded_by_piece_count() {
        let input = r#"one "two three" four "five six seven""#;
        let pieces = input.split(' ').count();
        assert!(tokenize(input).unwrap().len() <= pieces);
    }

    #[test]
    fn round_trip_preserves_quoted_content() {
        let content = "some multi word name";
        let tokens = tokenize(&format!("\"{content}\" tail")).unwrap();
        assert_eq!(format!("\"{}\"", tokens[0]), format!("\"{content}\""));
    }
}
