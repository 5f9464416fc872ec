//! Operator and punctuation matching.

use ry_ir::TokenCode;

/// Longest operator spelling, in bytes.
pub(crate) const MAX_OPERATOR_LEN: usize = 3;

/// Look up an operator by exact spelling.
pub(crate) fn lookup(text: &[u8]) -> Option<TokenCode> {
    let code = match text {
        b"<<=" => TokenCode::ShlEq,
        b">>=" => TokenCode::ShrEq,

        b":=" => TokenCode::ColonEq,
        b"=>" => TokenCode::FatArrow,
        b"<<" => TokenCode::Shl,
        b">>" => TokenCode::Shr,
        b"==" => TokenCode::EqEq,
        b"!=" => TokenCode::NotEq,
        b"<=" => TokenCode::LtEq,
        b">=" => TokenCode::GtEq,
        b"+=" => TokenCode::PlusEq,
        b"-=" => TokenCode::MinusEq,
        b"*=" => TokenCode::StarEq,
        b"/=" => TokenCode::SlashEq,
        b"%=" => TokenCode::PercentEq,
        b"|=" => TokenCode::PipeEq,
        b"^=" => TokenCode::CaretEq,
        b"&=" => TokenCode::AmpEq,

        b";" => TokenCode::Semicolon,
        b"," => TokenCode::Comma,
        b"(" => TokenCode::LParen,
        b")" => TokenCode::RParen,
        b"[" => TokenCode::LBracket,
        b"]" => TokenCode::RBracket,
        b"{" => TokenCode::LBrace,
        b"}" => TokenCode::RBrace,
        b":" => TokenCode::Colon,
        b"?" => TokenCode::Question,
        b"=" => TokenCode::Eq,
        b"+" => TokenCode::Plus,
        b"-" => TokenCode::Minus,
        b"*" => TokenCode::Star,
        b"/" => TokenCode::Slash,
        b"%" => TokenCode::Percent,
        b"|" => TokenCode::Pipe,
        b"^" => TokenCode::Caret,
        b"&" => TokenCode::Amp,
        b"~" => TokenCode::Tilde,
        b"." => TokenCode::Dot,
        b"<" => TokenCode::Lt,
        b">" => TokenCode::Gt,
        _ => return None,
    };
    Some(code)
}

/// Match the longest operator at the start of `input`.
///
/// Tries every 3-byte spelling, then 2-byte, then 1-byte. Returns the code
/// and the number of bytes it spans.
pub(crate) fn longest_match(input: &[u8]) -> Option<(TokenCode, usize)> {
    (1..=MAX_OPERATOR_LEN.min(input.len()))
        .rev()
        .find_map(|len| lookup(&input[..len]).map(|code| (code, len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operator_code_resolves() {
        for code in TokenCode::ALL.into_iter().filter(|c| c.is_operator()) {
            assert_eq!(lookup(code.spelling().as_bytes()), Some(code), "{code:?}");
        }
    }

    #[test]
    fn test_longest_match_prefers_longer() {
        assert_eq!(longest_match(b"<<=1"), Some((TokenCode::ShlEq, 3)));
        assert_eq!(longest_match(b"<<1"), Some((TokenCode::Shl, 2)));
        assert_eq!(longest_match(b"<1"), Some((TokenCode::Lt, 1)));
        assert_eq!(longest_match(b":=="), Some((TokenCode::ColonEq, 2)));
        assert_eq!(longest_match(b"!x"), None);
        assert_eq!(longest_match(b""), None);
    }
}
