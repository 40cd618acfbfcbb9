//! Caption Text Normalization
//!
//! Pure string transforms applied to translated caption text before display:
//! clause-stripping to fit a display byte budget and CJK-aware newline
//! replacement. All thresholds are UTF-8 byte lengths, not character counts,
//! since the display constraints are byte-based for mixed CJK/Latin text.

/// End-of-sentence punctuation, Latin and full-width.
pub const PUNC_EOS: &[char] = &['.', '?', '!', '。', '？', '！'];

/// Comma-class separators marking a clause boundary.
pub const PUNC_COMMA: &[char] = &[',', '，', '、', '—', '\n'];

/// Byte-length buckets for classifying sentence length.
pub const SHORT_THRESHOLD: usize = 12;
pub const MEDIUM_THRESHOLD: usize = 32;
pub const LONG_THRESHOLD: usize = 160;
pub const VERY_LONG_THRESHOLD: usize = 200;

/// Chinese/Japanese code point (CJK unified, extension A, kana).
pub fn is_cj_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{3040}'..='\u{30FF}')
}

/// Hangul syllable. Korean text takes Latin-style punctuation, not full-width.
pub fn is_hangul_char(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7AF}')
}

/// Strip leading clauses until `text` fits under `max_byte_length` bytes.
///
/// Each round drops everything up to and including the first comma-class
/// separator. Stops once the text fits, when no separator remains, or when
/// the only separator is the final character. Never cuts mid-word: text
/// without a separator is returned unchanged even if over the limit.
pub fn shorten_display_sentence(text: &str, max_byte_length: usize) -> String {
    let mut rest = text;
    while rest.len() >= max_byte_length {
        match rest.char_indices().find(|(_, c)| PUNC_COMMA.contains(c)) {
            Some((idx, c)) if idx + c.len_utf8() < rest.len() => {
                rest = &rest[idx + c.len_utf8()..];
            }
            _ => break,
        }
    }
    rest.to_string()
}

/// Flatten newlines into punctuation so a caption renders as one line.
///
/// Every segment except the last gets a full stop when it is at least
/// `byte_threshold` bytes long, or a dash to signal a soft break when it is
/// shorter. Segments ending in Chinese/Japanese take the full-width marks
/// ("。" / "——"), everything else the Latin ones (". " / "—"). The final
/// segment is trimmed but left unpunctuated, as it already terminates the
/// caption.
pub fn replace_newlines(text: &str, byte_threshold: usize) -> String {
    let segments: Vec<&str> = text.split('\n').map(str::trim).collect();
    let last = segments.len() - 1;

    let mut result = String::with_capacity(text.len() + 4 * segments.len());
    for (i, segment) in segments.iter().enumerate() {
        result.push_str(segment);
        if i == last {
            continue;
        }
        // An empty segment has no final character and counts as non-CJ.
        let full_width = segment
            .chars()
            .next_back()
            .is_some_and(|c| is_cj_char(c) && !is_hangul_char(c));
        if segment.len() >= byte_threshold {
            result.push_str(if full_width { "。" } else { ". " });
        } else {
            result.push_str(if full_width { "——" } else { "—" });
        }
    }
    result
}
