//! Best-effort constant evaluation.
//!
//! Only literals and unary/binary operations over them fold. Values are
//! computed as `f64`; bitwise operators truncate their operands to `i64`
//! first and convert the result back.

use super::{BinaryOperationKind, ExprKind, Expression, Literal, UnaryOperationKind};

impl Expression {
    /// Evaluate this expression as a number, if it is a constant.
    pub fn try_number_value(&self) -> Option<f64> {
        match &self.kind {
            ExprKind::Literal(literal) => literal.try_number_value(),
            ExprKind::UnaryOperation { kind, operand } => {
                fold_unary(*kind, operand.try_number_value()?)
            }
            ExprKind::BinaryOperation { kind, left, right } => {
                fold_binary(*kind, left.try_number_value()?, right.try_number_value()?)
            }
            ExprKind::FunctionCall { .. }
            | ExprKind::Block { .. }
            | ExprKind::If { .. }
            | ExprKind::Loop { .. }
            | ExprKind::Name(_) => None,
        }
    }
}

impl Literal {
    #[allow(clippy::cast_precision_loss)] // large integers lose precision as f64
    pub fn try_number_value(&self) -> Option<f64> {
        match self {
            Literal::Int(v) => Some(*v as f64),
            Literal::Float(v) => Some(*v),
            Literal::Char(c) => Some(f64::from(*c)),
            Literal::Bool(b) => Some(bool_value(*b)),
            Literal::Null | Literal::String(_) | Literal::Struct(_) => None,
        }
    }
}

#[inline]
fn bool_value(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn is_true(v: f64) -> bool {
    v != 0.0
}

#[allow(clippy::cast_possible_truncation)] // truncation is the defined semantics
#[inline]
fn to_int(v: f64) -> i64 {
    v as i64
}

#[allow(clippy::cast_precision_loss)]
#[inline]
fn from_int(v: i64) -> f64 {
    v as f64
}

fn fold_unary(kind: UnaryOperationKind, v: f64) -> Option<f64> {
    match kind {
        UnaryOperationKind::ArithmeticNegation => Some(-v),
        UnaryOperationKind::BitwiseNegation => Some(from_int(!to_int(v))),
        UnaryOperationKind::LogicalNegation => Some(bool_value(!is_true(v))),
        UnaryOperationKind::AddressOf
        | UnaryOperationKind::Comp
        | UnaryOperationKind::PointerDereference => None,
    }
}

#[allow(clippy::float_cmp)] // `==` on folded constants compares exact values
fn fold_binary(kind: BinaryOperationKind, l: f64, r: f64) -> Option<f64> {
    use BinaryOperationKind as K;

    let value = match kind {
        K::Add => l + r,
        K::Sub => l - r,
        K::Mul => l * r,
        K::Div => l / r,
        K::Mod => l % r,
        K::BitOr => from_int(to_int(l) | to_int(r)),
        K::BitXor => from_int(to_int(l) ^ to_int(r)),
        K::BitAnd => from_int(to_int(l) & to_int(r)),
        K::BitLShift => from_int(to_int(l).checked_shl(shift_amount(r)?)?),
        K::BitRShift => from_int(to_int(l).checked_shr(shift_amount(r)?)?),
        K::Eq => bool_value(l == r),
        K::Uneq => bool_value(l != r),
        K::Less => bool_value(l < r),
        K::LessEqual => bool_value(l <= r),
        K::Great => bool_value(l > r),
        K::GreatEqual => bool_value(l >= r),
        K::Or => bool_value(is_true(l) || is_true(r)),
        K::And => bool_value(is_true(l) && is_true(r)),
        K::StructMemberAccess => return None,
    };
    Some(value)
}

fn shift_amount(v: f64) -> Option<u32> {
    u32::try_from(to_int(v)).ok().filter(|amount| *amount < 64)
}
