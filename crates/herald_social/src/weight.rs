//! Weighted character counting.

use regex::Regex;
use std::sync::LazyLock;

/// Flat cost of any URL, matching the platform's link shortener.
pub const URL_WEIGHT: usize = 23;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("Valid URL regex"));

/// Weight of a single character.
///
/// Hangul Jamo, CJK symbols and ideographs, Hangul syllables, CJK
/// compatibility ideographs and the emoji planes count double.
pub fn char_weight(c: char) -> usize {
    match u32::from(c) {
        0x1100..=0x11FF
        | 0x3000..=0x9FFF
        | 0xAC00..=0xD7FF
        | 0xF900..=0xFAFF
        | 0x1F000..=0x1FFFF => 2,
        _ => 1,
    }
}

/// Weighted length of `text`.
///
/// # Examples
///
/// ```
/// use herald_social::weighted_len;
///
/// assert_eq!(weighted_len("abc"), 3);
/// assert_eq!(weighted_len("로또"), 4);
/// assert_eq!(weighted_len("see https://lottery.io.kr/blog/a-very-long-slug"), 4 + 23);
/// ```
pub fn weighted_len(text: &str) -> usize {
    let urls = URL_PATTERN.find_iter(text).count();
    let rest: usize = URL_PATTERN
        .split(text)
        .flat_map(str::chars)
        .map(char_weight)
        .sum();
    urls * URL_WEIGHT + rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_ranges_count_double() {
        assert_eq!(char_weight('a'), 1);
        assert_eq!(char_weight(' '), 1);
        assert_eq!(char_weight('…'), 1);
        assert_eq!(char_weight('가'), 2);
        assert_eq!(char_weight('ㄱ'), 2);
        assert_eq!(char_weight('漢'), 2);
        assert_eq!(char_weight('🎯'), 2);
    }

    #[test]
    fn urls_cost_flat_regardless_of_length() {
        let short = weighted_len("https://a.io");
        let long = weighted_len("https://lottery.io.kr/blog/frequency-analysis-2024-01-08");
        assert_eq!(short, URL_WEIGHT);
        assert_eq!(long, URL_WEIGHT);
        assert_eq!(weighted_len("x https://a.io\n\n#로또"), 2 + 23 + 2 + 1 + 4);
    }
}
