//! Semantic kinds that share the token code space.
//!
//! `TypePrimitive` and `CompoundAssignmentKind` each own a contiguous code
//! range: a code converts to them by offset, and their code tables list that
//! range in order. Unary and binary operators reuse codes from
//! several ranges (`-`, `*` and `&` are in both), so each carries a code table
//! aligned with its variant order and a [`TokenSet`] built from that table.

use std::fmt;

use crate::{TokenCode, TokenSet};

/// Built-in primitive types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypePrimitive {
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    Bool,
}

impl TypePrimitive {
    pub const ALL: [TypePrimitive; 14] = [
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
    ];

    /// Token code for each variant, in variant order.
    pub const TOKEN_CODES: [TokenCode; 14] = [
        TokenCode::Char,
        TokenCode::I8,
        TokenCode::I16,
        TokenCode::I32,
        TokenCode::I64,
        TokenCode::I128,
        TokenCode::U8,
        TokenCode::U16,
        TokenCode::U32,
        TokenCode::U64,
        TokenCode::U128,
        TokenCode::F32,
        TokenCode::F64,
        TokenCode::Bool,
    ];

    /// Map a primitive type keyword to its primitive.
    #[inline]
    pub fn from_code(code: TokenCode) -> Option<Self> {
        if code.is_primitive() {
            Self::ALL
                .get(usize::from(code.value() - TokenCode::FIRST_PRIMITIVE))
                .copied()
        } else {
            None
        }
    }

    #[inline]
    pub const fn code(self) -> TokenCode {
        Self::TOKEN_CODES[self as usize]
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.code().spelling()
    }
}

impl fmt::Display for TypePrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnaryOperationKind {
    ArithmeticNegation,
    BitwiseNegation,
    LogicalNegation,
    AddressOf,
    Comp,
    PointerDereference,
}

impl UnaryOperationKind {
    pub const ALL: [UnaryOperationKind; 6] = [
        Self::ArithmeticNegation,
        Self::BitwiseNegation,
        Self::LogicalNegation,
        Self::AddressOf,
        Self::Comp,
        Self::PointerDereference,
    ];

    /// Token code for each variant, in variant order.
    pub const TOKEN_CODES: [TokenCode; 6] = [
        TokenCode::Minus,
        TokenCode::Tilde,
        TokenCode::Not,
        TokenCode::Amp,
        TokenCode::Comp,
        TokenCode::Star,
    ];

    /// Codes that can start a unary operation.
    pub const TOKEN_SET: TokenSet = TokenSet::from_codes(&Self::TOKEN_CODES);

    pub fn from_code(code: TokenCode) -> Option<Self> {
        if !Self::TOKEN_SET.contains(code) {
            return None;
        }
        Self::TOKEN_CODES
            .iter()
            .position(|c| *c == code)
            .map(|index| Self::ALL[index])
    }

    #[inline]
    pub const fn code(self) -> TokenCode {
        Self::TOKEN_CODES[self as usize]
    }

    #[inline]
    pub const fn spelling(self) -> &'static str {
        self.code().spelling()
    }
}

/// Infix operators, each with a fixed parse priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BinaryOperationKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitOr,
    BitXor,
    BitAnd,
    BitLShift,
    BitRShift,
    Eq,
    Uneq,
    Less,
    LessEqual,
    Great,
    GreatEqual,
    Or,
    And,
    StructMemberAccess,
}

impl BinaryOperationKind {
    pub const ALL: [BinaryOperationKind; 19] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::BitOr,
        Self::BitXor,
        Self::BitAnd,
        Self::BitLShift,
        Self::BitRShift,
        Self::Eq,
        Self::Uneq,
        Self::Less,
        Self::LessEqual,
        Self::Great,
        Self::GreatEqual,
        Self::Or,
        Self::And,
        Self::StructMemberAccess,
    ];

    /// Token code for each variant, in variant order.
    pub const TOKEN_CODES: [TokenCode; 19] = [
        TokenCode::Plus,
        TokenCode::Minus,
        TokenCode::Star,
        TokenCode::Slash,
        TokenCode::Percent,
        TokenCode::Pipe,
        TokenCode::Caret,
        TokenCode::Amp,
        TokenCode::Shl,
        TokenCode::Shr,
        TokenCode::EqEq,
        TokenCode::NotEq,
        TokenCode::Lt,
        TokenCode::LtEq,
        TokenCode::Gt,
        TokenCode::GtEq,
        TokenCode::Or,
        TokenCode::And,
        TokenCode::Dot,
    ];

    /// Codes that can continue an expression as a binary operator.
    pub const TOKEN_SET: TokenSet = TokenSet::from_codes(&Self::TOKEN_CODES);

    pub fn from_code(code: TokenCode) -> Option<Self> {
        if !Self::TOKEN_SET.contains(code) {
            return None;
        }
        Self::TOKEN_CODES
            .iter()
            .position(|c| *c == code)
            .map(|index| Self::ALL[index])
    }

    #[inline]
    pub const fn code(self) -> TokenCode {
        Self::TOKEN_CODES[self as usize]
    }

    #[inline]
    pub const fn spelling(self) -> &'static str {
        self.code().spelling()
    }

    /// Binding priority; higher binds tighter.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::Uneq
            | Self::Less
            | Self::LessEqual
            | Self::Great
            | Self::GreatEqual => 3,
            Self::BitOr => 4,
            Self::BitXor => 5,
            Self::BitAnd => 6,
            Self::BitLShift | Self::BitRShift => 7,
            Self::Add | Self::Sub => 8,
            Self::Mul | Self::Div | Self::Mod => 9,
            Self::StructMemberAccess => 10,
        }
    }
}

/// Assignment operators that combine the target with a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompoundAssignmentKind {
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    BitOrAssign,
    BitXorAssign,
    BitAndAssign,
    BitLShiftAssign,
    BitRShiftAssign,
}

impl CompoundAssignmentKind {
    pub const ALL: [CompoundAssignmentKind; 10] = [
        Self::AddAssign,
        Self::SubAssign,
        Self::MulAssign,
        Self::DivAssign,
        Self::ModAssign,
        Self::BitOrAssign,
        Self::BitXorAssign,
        Self::BitAndAssign,
        Self::BitLShiftAssign,
        Self::BitRShiftAssign,
    ];

    /// Token code for each variant, in variant order.
    pub const TOKEN_CODES: [TokenCode; 10] = [
        TokenCode::PlusEq,
        TokenCode::MinusEq,
        TokenCode::StarEq,
        TokenCode::SlashEq,
        TokenCode::PercentEq,
        TokenCode::PipeEq,
        TokenCode::CaretEq,
        TokenCode::AmpEq,
        TokenCode::ShlEq,
        TokenCode::ShrEq,
    ];

    #[inline]
    pub fn from_code(code: TokenCode) -> Option<Self> {
        if code.is_compound_assign() {
            Self::ALL
                .get(usize::from(code.value() - TokenCode::FIRST_COMPOUND_ASSIGN))
                .copied()
        } else {
            None
        }
    }

    #[inline]
    pub const fn code(self) -> TokenCode {
        Self::TOKEN_CODES[self as usize]
    }

    #[inline]
    pub const fn spelling(self) -> &'static str {
        self.code().spelling()
    }

    /// The binary operation applied before storing.
    ///
    /// Compound assignments are laid out in the same order as the first ten
    /// binary operations.
    #[inline]
    pub const fn operation(self) -> BinaryOperationKind {
        BinaryOperationKind::ALL[self as usize]
    }
}
