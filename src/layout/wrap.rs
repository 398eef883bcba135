//! Greedy word wrapping, by measured pixel width or by character count.
//!
//! Both wrappers accumulate words onto the current line while the line still
//! fits and start a new line otherwise. Words are never split; a single word
//! wider than the limit gets a line of its own.

use super::metrics::GlyphMetrics;

/// Wrap `text` so each line measures at most `max_width` pixels at `size`.
///
/// Embedded `\n` starts a new paragraph; an empty paragraph becomes an empty
/// line. Whitespace-only text produces no lines.
pub fn wrap_pixels<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    size: u32,
    max_width: u32,
) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if metrics.text_width(&candidate, size) <= max_width {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(current);
                }
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// ```
/// use fortuna::layout::wrap::wrap_chars;
///
/// let lines = wrap_chars("Adventure awaits around the corner.", 28);
/// assert_eq!(lines, vec!["Adventure awaits around the", "corner."]);
/// ```
pub fn wrap_chars(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let sep = usize::from(!current.is_empty());

        if current_len + sep + word_len <= max_chars {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_len += sep + word_len;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::BlockFont;

    const CRIME: &str = "You will commit a very small crime against productivity.";

    #[test]
    fn test_wrap_chars_limits_and_preserves_words() {
        let lines = wrap_chars(CRIME, 28);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 28, "{:?}", line);
        }
        assert_eq!(lines.join(" "), CRIME);

        let words: Vec<&str> = CRIME.split_whitespace().collect();
        let wrapped_words: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(words, wrapped_words);
    }

    #[test]
    fn test_wrap_chars_long_word_gets_own_line() {
        let lines = wrap_chars("a supercalifragilistic b", 10);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_chars_empty() {
        assert!(wrap_chars("", 28).is_empty());
        assert!(wrap_chars("   ", 28).is_empty());
    }

    #[test]
    fn test_wrap_pixels_fits_width() {
        // size 20 -> 10px per char, 100px -> 10 chars
        let lines = wrap_pixels(&BlockFont, "one two three four five", 20, 100);
        assert_eq!(lines, vec!["one two", "three four", "five"]);
        for line in &lines {
            assert!(BlockFont.text_width(line, 20) <= 100);
        }
    }

    #[test]
    fn test_wrap_pixels_paragraphs() {
        let lines = wrap_pixels(&BlockFont, "ab\n\ncd", 20, 100);
        assert_eq!(lines, vec!["ab", "", "cd"]);
    }

    #[test]
    fn test_wrap_pixels_empty_text() {
        assert!(wrap_pixels(&BlockFont, "", 20, 100).is_empty());
        assert!(wrap_pixels(&BlockFont, " \n ", 20, 100).is_empty());
    }
}
