//! Token-preserving text partitioning for parallel mapping.

use crate::error::{Error, Result};

/// Split `text` into at most `parts` contiguous pieces of roughly
/// equal byte length. Each boundary is moved forward to the nearest
/// whitespace, so no word-like token is ever divided between two
/// pieces; the final piece absorbs any remainder. Concatenating the
/// pieces in order reconstructs `text` exactly.
///
/// Short texts yield fewer pieces and an empty text yields none;
/// pieces are never empty.
pub fn chunk_text(text: &str, parts: usize) -> Result<Vec<String>> {
    if parts == 0 {
        return Err(Error::config("chunk count must be at least 1"));
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let target = text.len() / parts;
    if target == 0 {
        return Ok(vec![text.to_string()]);
    }

    let mut pieces = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 1..parts {
        let candidate = (i * target).max(start);
        let cut = next_split_point(text, candidate);
        if cut >= text.len() {
            break;
        }
        if cut > start {
            pieces.push(text[start..cut].to_string());
            start = cut;
        }
    }
    pieces.push(text[start..].to_string());

    Ok(pieces)
}

/// First byte offset at or after `pos` where a piece may end without
/// splitting a token: the character starting there must be whitespace.
/// Returns `text.len()` when no such offset exists.
fn next_split_point(text: &str, mut pos: usize) -> usize {
    while pos < text.len() && !text.is_char_boundary(pos) {
        pos += 1;
    }
    for (offset, ch) in text[pos..].char_indices() {
        if ch.is_whitespace() {
            return pos + offset;
        }
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pieces_reassemble_exactly() {
        let text = "the quick brown fox jumps over the lazy dog";
        for parts in [1, 2, 4, 7] {
            let pieces = chunk_text(text, parts).unwrap();
            assert_eq!(pieces.concat(), text, "parts = {parts}");
            assert!(pieces.len() <= parts);
            assert!(pieces.iter().all(|p| !p.is_empty()));
        }
    }

    #[test]
    fn test_boundaries_never_split_a_token() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota";
        let pieces = chunk_text(text, 4).unwrap();
        assert!(pieces.len() > 1);
        // Every piece after the first begins at a whitespace character,
        // so the token before each boundary is intact.
        for piece in &pieces[1..] {
            assert!(piece.chars().next().unwrap().is_whitespace(), "{piece:?}");
        }
    }

    #[test]
    fn test_multibyte_text_is_partitioned_on_char_boundaries() {
        let text = "héllo wörld çà et là über alles ñandú";
        for parts in [2, 3, 5] {
            let pieces = chunk_text(text, parts).unwrap();
            assert_eq!(pieces.concat(), text);
        }
    }

    #[test]
    fn test_unsplittable_text_collapses_to_one_piece() {
        let text = "supercalifragilisticexpialidocious";
        let pieces = chunk_text(text, 4).unwrap();
        assert_eq!(pieces, vec![text.to_string()]);
    }

    #[test]
    fn test_text_shorter_than_parts() {
        let pieces = chunk_text("hi", 10).unwrap();
        assert_eq!(pieces, vec!["hi".to_string()]);
    }

    #[test]
    fn test_empty_text_yields_no_pieces() {
        assert!(chunk_text("", 4).unwrap().is_empty());
    }

    #[test]
    fn test_zero_parts_is_rejected() {
        assert!(chunk_text("some text", 0).is_err());
    }
}
