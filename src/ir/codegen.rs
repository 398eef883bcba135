//! # Code Generation
//!
//! Converts print commands to ESC/POS bytes. Pure functions, no I/O.

use super::ops::PrintCommand;
use crate::protocol::{commands, graphics, text};

/// Encode one command into its exact byte layout.
///
/// ## Panics
///
/// If a `BitImageRow` carries more than 65535 bytes.
///
/// ## Example
///
/// ```
/// use fortuna::ir::{encode, PrintCommand};
/// use fortuna::protocol::text::Justify;
///
/// assert_eq!(encode(&PrintCommand::SetJustify(Justify::Center)), vec![0x1B, b'a', 1]);
/// assert_eq!(encode(&PrintCommand::Feed(5)), vec![0x1B, b'd', 5]);
/// ```
pub fn encode(cmd: &PrintCommand) -> Vec<u8> {
    match cmd {
        PrintCommand::Initialize => commands::init(),
        PrintCommand::SetJustify(j) => text::justify(*j),
        PrintCommand::SetFontScale(s) => text::font_scale(*s),
        PrintCommand::SetBold(on) => text::bold(*on),
        PrintCommand::SetUnderline(on) => text::underline(*on),
        PrintCommand::SetLineSpacing(s) => text::line_spacing(*s),
        PrintCommand::Text(bytes) => bytes.clone(),
        PrintCommand::Feed(n) => commands::feed_lines(*n),
        PrintCommand::SetAbsolutePosition(dots) => graphics::absolute_position(*dots),
        PrintCommand::BitImageRow { mode, data } => graphics::bit_image_row(*mode, data),
        PrintCommand::Raw(bytes) => bytes.clone(),
    }
}

/// Encode a sequence of commands into one contiguous buffer.
pub fn encode_all<'a>(cmds: impl IntoIterator<Item = &'a PrintCommand>) -> Vec<u8> {
    let mut out = Vec::new();
    for cmd in cmds {
        out.extend(encode(cmd));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::{FontScale, Justify, LineSpacing};

    #[test]
    fn test_encode_justify() {
        assert_eq!(encode(&PrintCommand::SetJustify(Justify::Left)), vec![0x1B, b'a', 0]);
        assert_eq!(encode(&PrintCommand::SetJustify(Justify::Center)), vec![0x1B, b'a', 1]);
        assert_eq!(encode(&PrintCommand::SetJustify(Justify::Right)), vec![0x1B, b'a', 2]);
    }

    #[test]
    fn test_encode_font_scale() {
        let bytes: Vec<u8> = [
            FontScale::Normal,
            FontScale::DoubleHeight,
            FontScale::DoubleWidth,
            FontScale::DoubleBoth,
        ]
        .iter()
        .map(|s| encode(&PrintCommand::SetFontScale(*s))[2])
        .collect();
        assert_eq!(bytes, vec![0, 16, 32, 48]);
    }

    #[test]
    fn test_encode_bold_underline() {
        assert_eq!(encode(&PrintCommand::SetBold(true)), vec![0x1B, b'E', 1]);
        assert_eq!(encode(&PrintCommand::SetUnderline(false)), vec![0x1B, b'-', 0]);
    }

    #[test]
    fn test_encode_feed_paths_agree() {
        for n in 0..=255u8 {
            assert_eq!(encode(&PrintCommand::Feed(n)), vec![0x1B, b'd', n]);
        }
    }

    #[test]
    fn test_encode_absolute_position() {
        assert_eq!(
            encode(&PrintCommand::SetAbsolutePosition(0x0102)),
            vec![0x1B, b'$', 0x02, 0x01]
        );
    }

    #[test]
    fn test_encode_bit_image_row() {
        let cmd = PrintCommand::BitImageRow {
            mode: 0,
            data: vec![0xFF, 0x00],
        };
        assert_eq!(encode(&cmd), vec![0x1B, b'*', 0, 2, 0, 0xFF, 0x00]);
    }

    #[test]
    fn test_encode_line_spacing_and_passthrough() {
        assert_eq!(
            encode(&PrintCommand::SetLineSpacing(LineSpacing::Default)),
            vec![0x1B, b'2']
        );
        assert_eq!(encode(&PrintCommand::Text(b"ok\n".to_vec())), b"ok\n".to_vec());
        assert_eq!(encode(&PrintCommand::Raw(vec![1, 2, 3])), vec![1, 2, 3]);
        assert_eq!(encode(&PrintCommand::Initialize), vec![0x1B, b'@']);
    }

    #[test]
    fn test_encode_all_concatenates() {
        let cmds = [
            PrintCommand::SetJustify(Justify::Center),
            PrintCommand::line("X"),
            PrintCommand::SetJustify(Justify::Left),
        ];
        assert_eq!(
            encode_all(&cmds),
            vec![0x1B, b'a', 1, b'X', b'\n', 0x1B, b'a', 0]
        );
    }
}
