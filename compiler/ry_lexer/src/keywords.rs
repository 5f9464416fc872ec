//! Keyword resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter (keywords
//! are 2-8 characters), then matches against the keywords of that length.
//! `true` and `false` are boolean literals, not keywords; the lexer checks
//! them separately.

use ry_ir::TokenCode;

/// Look up a keyword by text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenCode> {
    let bytes = text.as_bytes();
    if !(2..=8).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "do" => Some(TokenCode::Do),
            "if" => Some(TokenCode::If),
            "or" => Some(TokenCode::Or),
            "as" => Some(TokenCode::As),
            "i8" => Some(TokenCode::I8),
            "u8" => Some(TokenCode::U8),
            _ => None,
        },
        3 => match text {
            "not" => Some(TokenCode::Not),
            "and" => Some(TokenCode::And),
            "i16" => Some(TokenCode::I16),
            "i32" => Some(TokenCode::I32),
            "i64" => Some(TokenCode::I64),
            "u16" => Some(TokenCode::U16),
            "u32" => Some(TokenCode::U32),
            "u64" => Some(TokenCode::U64),
            "f32" => Some(TokenCode::F32),
            "f64" => Some(TokenCode::F64),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenCode::Else),
            "loop" => Some(TokenCode::Loop),
            "null" => Some(TokenCode::Null),
            "comp" => Some(TokenCode::Comp),
            "char" => Some(TokenCode::Char),
            "i128" => Some(TokenCode::I128),
            "u128" => Some(TokenCode::U128),
            "bool" => Some(TokenCode::Bool),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenCode::Break),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenCode::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// Look up a boolean literal.
#[inline]
pub(crate) fn bool_literal(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_code_resolves() {
        for code in TokenCode::ALL.into_iter().filter(|c| c.is_keyword()) {
            assert_eq!(lookup(code.spelling()), Some(code), "{code:?}");
        }
    }

    #[test]
    fn test_non_keywords() {
        for text in ["", "x", "Do", "iff", "i", "i256", "true", "false", "continues", "_if"] {
            assert_eq!(lookup(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_bool_literals() {
        assert_eq!(bool_literal("true"), Some(true));
        assert_eq!(bool_literal("false"), Some(false));
        assert_eq!(bool_literal("True"), None);
    }
}
