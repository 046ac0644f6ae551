//! Text chunking for document indexing.
//!
//! Character-budget splitter with overlap: prefers paragraph boundaries,
//! then line boundaries, then word boundaries, and only cuts mid-word as a
//! last resort. Budget and overlap come from `VectorConfig`.

/// Split `text` into chunks of at most `chunk_size` characters, carrying
/// roughly `chunk_overlap` trailing characters into the next chunk.
///
/// `chunk_overlap` larger than `chunk_size` is treated as `chunk_size / 2`
/// so the splitter always makes forward progress.
pub fn split_text(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    if text.trim().is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let overlap = if chunk_overlap >= chunk_size {
        chunk_size / 2
    } else {
        chunk_overlap
    };

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= chunk_size {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let hard_end = (start + chunk_size).min(chars.len());
        let end = if hard_end == chars.len() {
            hard_end
        } else {
            find_break(&chars, start, hard_end)
        };

        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if end == chars.len() {
            break;
        }

        // Step back by the overlap, but always move past the previous start.
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}

/// Pick the best split point in `chars[start..hard_end]`, searching backwards
/// for a paragraph break, then a newline, then a space.
fn find_break(chars: &[char], start: usize, hard_end: usize) -> usize {
    // Paragraph boundary: "\n\n"
    for i in (start + 1..hard_end).rev() {
        if chars[i] == '\n' && chars[i - 1] == '\n' {
            return i + 1;
        }
    }
    // Line boundary
    for i in (start + 1..hard_end).rev() {
        if chars[i] == '\n' {
            return i + 1;
        }
    }
    // Word boundary
    for i in (start + 1..hard_end).rev() {
        if chars[i] == ' ' {
            return i + 1;
        }
    }
    // Last resort: hard cut
    hard_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(split_text("", 1000, 200).is_empty());
        assert!(split_text("   \n\n  ", 1000, 200).is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = split_text("a short document", 1000, 200);
        assert_eq!(chunks, vec!["a short document".to_string()]);
    }

    #[test]
    fn test_respects_chunk_size() {
        let text = "word ".repeat(500);
        let chunks = split_text(&text, 100, 20);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 100, "oversized chunk: {chunk}");
        }
    }

    #[test]
    fn test_prefers_paragraph_boundary() {
        let para1 = "alpha ".repeat(10);
        let para2 = "beta ".repeat(10);
        let text = format!("{}\n\n{}", para1.trim(), para2.trim());
        let chunks = split_text(&text, 70, 0);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains("alpha"));
        assert!(!chunks[0].contains("beta"));
        assert!(chunks[1].starts_with("beta"));
    }

    #[test]
    fn test_overlap_carries_content() {
        let text = "one two three four five six seven eight nine ten ".repeat(10);
        let chunks = split_text(&text, 100, 30);
        assert!(chunks.len() > 1);
        // The tail of chunk N must reappear at the head of chunk N+1.
        let tail: String = chunks[0]
            .chars()
            .rev()
            .take(10)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        assert!(chunks[1].contains(tail.trim()));
    }

    #[test]
    fn test_unsplittable_text_hard_cuts() {
        let text = "x".repeat(250);
        let chunks = split_text(&text, 100, 0);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 100);
    }

    #[test]
    fn test_degenerate_overlap_still_progresses() {
        // overlap >= chunk_size would loop forever without the clamp
        let text = "word ".repeat(100);
        let chunks = split_text(&text, 50, 50);
        assert!(!chunks.is_empty());
        assert!(chunks.len() < 200);
    }
}
