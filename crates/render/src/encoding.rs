//! WinAnsi (CP-1252) encoding for content-stream strings.
//!
//! The engine emits ASCII plus a short list of typographic characters, so
//! the mapping is spelled out here instead of pulling in an encoding table.
//! Unmappable characters degrade to '?' rather than corrupting the stream.

pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{0}'..='\u{7e}' => ch as u8,
            '\u{20ac}' => 0x80, // euro sign
            '\u{2018}' => 0x91, // left single quote
            '\u{2019}' => 0x92, // right single quote
            '\u{201c}' => 0x93, // left double quote
            '\u{201d}' => 0x94, // right double quote
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{a0}' => 0xa0,   // no-break space
            '\u{a3}' => 0xa3,   // pound sign
            '\u{a9}' => 0xa9,   // copyright
            '\u{d7}' => 0xd7,   // multiplication sign
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::encode_win_ansi;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Subtotal $10.00"), b"Subtotal $10.00");
    }

    #[test]
    fn test_typographic_characters() {
        assert_eq!(encode_win_ansi("\u{2014}"), vec![0x97]);
        assert_eq!(encode_win_ansi("\u{d7}2"), vec![0xd7, b'2']);
        assert_eq!(encode_win_ansi("\u{20ac}5.00"), vec![0x80, b'5', b'.', b'0', b'0']);
    }

    #[test]
    fn test_unmappable_degrades_to_question_mark() {
        assert_eq!(encode_win_ansi("\u{4e2d}"), vec![b'?']);
    }
}
