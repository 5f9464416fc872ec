//! Numeric codes shared by keyword and operator tokens.

/// Numeric code of a keyword or operator token, with semantic range layout.
///
/// All values fit below 128, so every code is a valid bit index of a
/// [`TokenSet`](super::TokenSet). Categories occupy contiguous ranges with
/// gaps between them:
///
/// | Range | Category                 |
/// |-------|--------------------------|
/// | 0-11  | Keywords                 |
/// | 16-29 | Primitive type keywords  |
/// | 32-44 | Punctuation              |
/// | 48-59 | Arithmetic and bitwise   |
/// | 64-69 | Comparison               |
/// | 72-81 | Compound assignment      |
///
/// Semantic kinds with a contiguous range (`TypePrimitive`,
/// `CompoundAssignmentKind`) convert by subtracting the first code of their
/// range. Kinds whose spellings are spread across ranges use a code table
/// aligned with their variant order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenCode {
    // === Keywords (0-11) ===
    Do = 0,
    If = 1,
    Else = 2,
    Loop = 3,
    Continue = 4,
    Break = 5,
    Null = 6,
    Not = 7,
    Or = 8,
    And = 9,
    As = 10,
    Comp = 11,

    // === Primitive type keywords (16-29) ===
    Char = 16,
    I8 = 17,
    I16 = 18,
    I32 = 19,
    I64 = 20,
    I128 = 21,
    U8 = 22,
    U16 = 23,
    U32 = 24,
    U64 = 25,
    U128 = 26,
    F32 = 27,
    F64 = 28,
    Bool = 29,

    // === Punctuation (32-44) ===
    Semicolon = 32,
    Comma = 33,
    LParen = 34,
    RParen = 35,
    LBracket = 36,
    RBracket = 37,
    LBrace = 38,
    RBrace = 39,
    Colon = 40,
    Question = 41,
    ColonEq = 42,
    FatArrow = 43,
    Eq = 44,

    // === Arithmetic, bitwise and access (48-59) ===
    Plus = 48,
    Minus = 49,
    Star = 50,
    Slash = 51,
    Percent = 52,
    Pipe = 53,
    Caret = 54,
    Amp = 55,
    Shl = 56,
    Shr = 57,
    Tilde = 58,
    Dot = 59,

    // === Comparison (64-69) ===
    EqEq = 64,
    NotEq = 65,
    Lt = 66,
    LtEq = 67,
    Gt = 68,
    GtEq = 69,

    // === Compound assignment (72-81) ===
    PlusEq = 72,
    MinusEq = 73,
    StarEq = 74,
    SlashEq = 75,
    PercentEq = 76,
    PipeEq = 77,
    CaretEq = 78,
    AmpEq = 79,
    ShlEq = 80,
    ShrEq = 81,
}

impl TokenCode {
    /// First code of the primitive type keyword range.
    pub const FIRST_PRIMITIVE: u8 = Self::Char as u8;
    /// Last code of the primitive type keyword range.
    pub const LAST_PRIMITIVE: u8 = Self::Bool as u8;
    /// First code of the compound assignment range.
    pub const FIRST_COMPOUND_ASSIGN: u8 = Self::PlusEq as u8;
    /// Last code of the compound assignment range.
    pub const LAST_COMPOUND_ASSIGN: u8 = Self::ShrEq as u8;

    /// First code that is spelled with punctuation rather than letters.
    const FIRST_OPERATOR: u8 = Self::Semicolon as u8;

    /// Every code, in ascending order.
    pub const ALL: [TokenCode; 67] = [
        Self::Do,
        Self::If,
        Self::Else,
        Self::Loop,
        Self::Continue,
        Self::Break,
        Self::Null,
        Self::Not,
        Self::Or,
        Self::And,
        Self::As,
        Self::Comp,
        Self::Char,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::I128,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::U128,
        Self::F32,
        Self::F64,
        Self::Bool,
        Self::Semicolon,
        Self::Comma,
        Self::LParen,
        Self::RParen,
        Self::LBracket,
        Self::RBracket,
        Self::LBrace,
        Self::RBrace,
        Self::Colon,
        Self::Question,
        Self::ColonEq,
        Self::FatArrow,
        Self::Eq,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::Percent,
        Self::Pipe,
        Self::Caret,
        Self::Amp,
        Self::Shl,
        Self::Shr,
        Self::Tilde,
        Self::Dot,
        Self::EqEq,
        Self::NotEq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::PlusEq,
        Self::MinusEq,
        Self::StarEq,
        Self::SlashEq,
        Self::PercentEq,
        Self::PipeEq,
        Self::CaretEq,
        Self::AmpEq,
        Self::ShlEq,
        Self::ShrEq,
    ];

    /// The numeric value of this code.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Codes spelled as identifiers (keywords and primitive type names).
    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) < Self::FIRST_OPERATOR
    }

    /// Codes spelled with punctuation characters.
    #[inline]
    pub const fn is_operator(self) -> bool {
        !self.is_keyword()
    }

    #[inline]
    pub const fn is_primitive(self) -> bool {
        let v = self as u8;
        v >= Self::FIRST_PRIMITIVE && v <= Self::LAST_PRIMITIVE
    }

    #[inline]
    pub const fn is_compound_assign(self) -> bool {
        let v = self as u8;
        v >= Self::FIRST_COMPOUND_ASSIGN && v <= Self::LAST_COMPOUND_ASSIGN
    }

    /// Source spelling of this code.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::If => "if",
            Self::Else => "else",
            Self::Loop => "loop",
            Self::Continue => "continue",
            Self::Break => "break",
            Self::Null => "null",
            Self::Not => "not",
            Self::Or => "or",
            Self::And => "and",
            Self::As => "as",
            Self::Comp => "comp",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Colon => ":",
            Self::Question => "?",
            Self::ColonEq => ":=",
            Self::FatArrow => "=>",
            Self::Eq => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Amp => "&",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Tilde => "~",
            Self::Dot => ".",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::PipeEq => "|=",
            Self::CaretEq => "^=",
            Self::AmpEq => "&=",
            Self::ShlEq => "<<=",
            Self::ShrEq => ">>=",
        }
    }
}

/// A set of token codes using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a [`TokenCode`] value; every code is
/// below 128.
///
/// ```
/// use ry_ir::{TokenCode, TokenSet};
///
/// const SIGNS: TokenSet = TokenSet::new().with(TokenCode::Plus).with(TokenCode::Minus);
/// assert!(SIGNS.contains(TokenCode::Minus));
/// assert!(!SIGNS.contains(TokenCode::Star));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single code.
    #[inline]
    pub const fn single(code: TokenCode) -> Self {
        Self(1u128 << code as u8)
    }

    /// Build a set from a code table.
    pub const fn from_codes(codes: &[TokenCode]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < codes.len() {
            bits |= 1u128 << codes[i] as u8;
            i += 1;
        }
        Self(bits)
    }

    /// Add a code to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, code: TokenCode) -> Self {
        Self(self.0 | (1u128 << code as u8))
    }

    #[inline]
    pub const fn contains(self, code: TokenCode) -> bool {
        self.0 & (1u128 << code as u8) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }
}
