//! Source-like rendering of AST nodes.
//!
//! The output of `Display` lexes and parses back into an equal tree, except
//! that grouping flags are only restored where parentheses were printed.

use std::fmt::{self, Write as _};

use super::{
    AstNode, BinaryOperationKind, ExprKind, Expression, Literal, NamedField, Statement, StructField,
    StructLiteral, Type, TypeAttribs, TypeData, TypeStruct, UnnamedField,
};

impl AstNode {
    /// Render the node as source text.
    pub fn pretty(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Type(t) => t.fmt(f),
            AstNode::Statement(s) => s.fmt(f),
            AstNode::Expression(e) => e.fmt(f),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attribs.contains(TypeAttribs::MUTABLE) {
            f.write_char('~')?;
        }
        if self.attribs.contains(TypeAttribs::OPTIONAL) {
            f.write_char('?')?;
        }
        match &self.data {
            TypeData::Primitive(p) => p.fmt(f),
            TypeData::Pointer(inner) => write!(f, "*{inner}"),
            TypeData::Function(func) => write!(f, "{} => {}", func.arguments, func.return_type),
            TypeData::Struct(st) => st.fmt(f),
        }
    }
}

impl fmt::Display for TypeStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            field.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default_value = match self {
            StructField::Named(NamedField {
                names,
                ty,
                default_value,
            }) => {
                write!(f, "{}: {ty}", names.join(", "))?;
                default_value
            }
            StructField::Unnamed(UnnamedField {
                ty,
                type_reps,
                default_value,
            }) => {
                if let Some(reps) = type_reps {
                    write!(f, "{reps} * ")?;
                }
                ty.fmt(f)?;
                default_value
            }
        };
        if let Some(value) = default_value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_grouped {
            write!(f, "({})", self.kind)
        } else {
            self.kind.fmt(f)
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Literal(lit) => lit.fmt(f),
            ExprKind::FunctionCall {
                function,
                arguments,
            } => write!(f, "{function}{arguments}"),
            ExprKind::Block { label, statements } => {
                if let Some(label) = label {
                    write_string_literal(f, label)?;
                    f.write_char(' ')?;
                }
                f.write_char('{')?;
                for (i, stmt) in statements.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    stmt.fmt(f)?;
                }
                f.write_char('}')
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "if {condition} do {then_branch}")?;
                if let Some(else_branch) = else_branch {
                    write!(f, " else {else_branch}")?;
                }
                Ok(())
            }
            ExprKind::Loop {
                init,
                condition,
                post,
                body,
            } => {
                f.write_str("loop ")?;
                if init.is_some() || post.is_some() {
                    if let Some(init) = init {
                        init.fmt(f)?;
                    }
                    f.write_str("; ")?;
                }
                if let Some(condition) = condition {
                    condition.fmt(f)?;
                }
                if let Some(post) = post {
                    write!(f, "; {post}")?;
                }
                if init.is_some() || condition.is_some() || post.is_some() {
                    f.write_str(" do ")?;
                }
                body.fmt(f)
            }
            ExprKind::UnaryOperation { kind, operand } => {
                let spelling = kind.spelling();
                if kind.code().is_keyword() {
                    write!(f, "{spelling} {operand}")
                } else {
                    write!(f, "{spelling}{operand}")
                }
            }
            ExprKind::BinaryOperation { kind, left, right } => {
                if *kind == BinaryOperationKind::StructMemberAccess {
                    // `1.5` would lex as one float.
                    if ends_with_int(left) && starts_with_number(right) {
                        write!(f, "{left} .{right}")
                    } else {
                        write!(f, "{left}.{right}")
                    }
                } else {
                    write!(f, "{left} {} {right}", kind.spelling())
                }
            }
            ExprKind::Name(name) => f.write_str(name),
        }
    }
}

/// Whether the printed form of `e` ends in the digits of an integer.
fn ends_with_int(e: &Expression) -> bool {
    if e.is_grouped {
        return false;
    }
    match &e.kind {
        ExprKind::Literal(Literal::Int(_)) => true,
        ExprKind::BinaryOperation { right, .. } => ends_with_int(right),
        ExprKind::UnaryOperation { operand, .. } => ends_with_int(operand),
        _ => false,
    }
}

/// Whether the printed form of `e` starts with a digit.
fn starts_with_number(e: &Expression) -> bool {
    if e.is_grouped {
        return false;
    }
    match &e.kind {
        ExprKind::Literal(Literal::Int(_) | Literal::Float(_)) => true,
        ExprKind::BinaryOperation { left, .. } => starts_with_number(left),
        ExprKind::FunctionCall { function, .. } => starts_with_number(function),
        _ => false,
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Int(v) => write!(f, "{v}"),
            // `{:?}` always keeps a fraction or an exponent.
            Literal::Float(v) => write!(f, "{v:?}"),
            Literal::String(s) => write_string_literal(f, s),
            Literal::Char(c) => {
                f.write_char('\'')?;
                write_escaped_byte(f, *c, b'\'')?;
                f.write_char('\'')
            }
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Struct(lit) => lit.fmt(f),
        }
    }
}

impl fmt::Display for StructLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(name) = &field.name {
                write!(f, "{name} = ")?;
            }
            field.value.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(e) => e.fmt(f),
            Statement::CompoundAssignment {
                kind,
                target,
                value,
            } => write!(f, "{target} {} {value}", kind.spelling()),
            Statement::VariableDefinition { name, ty, value } => match (ty, value) {
                (Some(ty), Some(value)) => write!(f, "{name}: {ty} = {value}"),
                (Some(ty), None) => write!(f, "{name}: {ty}"),
                (None, Some(value)) => write!(f, "{name} := {value}"),
                (None, None) => f.write_str(name),
            },
            Statement::Assignment { target, value } => write!(f, "{target} = {value}"),
            Statement::Continue => f.write_str("continue"),
            Statement::Break { label, value } => {
                f.write_str("break")?;
                if let Some(label) = label {
                    f.write_char(' ')?;
                    write_string_literal(f, label)?;
                }
                if let Some(value) = value {
                    write!(f, " {value}")?;
                }
                Ok(())
            }
        }
    }
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match u8::try_from(c) {
            Ok(b) if b.is_ascii() => write_escaped_byte(f, b, b'"')?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Write one ASCII byte, escaping it if it cannot appear verbatim inside a
/// literal delimited by `quote`.
fn write_escaped_byte(f: &mut fmt::Formatter<'_>, b: u8, quote: u8) -> fmt::Result {
    let escape = match b {
        0x07 => "\\a",
        0x08 => "\\b",
        0x1b => "\\e",
        0x0c => "\\f",
        b'\n' => "\\n",
        b'\r' => "\\r",
        b'\t' => "\\t",
        0x0b => "\\v",
        b'\\' => "\\\\",
        _ if b == quote => {
            return write!(f, "\\{}", char::from(b));
        }
        _ if b.is_ascii_control() || !b.is_ascii() => {
            return write!(f, "\\{b:03}");
        }
        _ => return f.write_char(char::from(b)),
    };
    f.write_str(escape)
}
