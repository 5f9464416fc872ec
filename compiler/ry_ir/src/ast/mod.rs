//! AST node types.
//!
//! Every composite node owns its children directly (`Box`/`Vec`); trees are
//! never shared after construction.
//!
//! Nodes render two ways: [`DebugTree`] produces an indented structural dump,
//! and `Display` produces source-like text that re-parses to the same tree.

mod debug_tree;
mod fold;
mod operators;
mod pretty;

pub use debug_tree::{DebugTree, TreeWriter};
pub use operators::{BinaryOperationKind, CompoundAssignmentKind, TypePrimitive, UnaryOperationKind};

use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Attribute prefixes of a type (`~` mutable, `?` optional).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeAttribs: u8 {
        const MUTABLE = 1 << 0;
        const OPTIONAL = 1 << 1;
    }
}

/// A type expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Type {
    pub attribs: TypeAttribs,
    pub data: TypeData,
}

impl Type {
    pub fn new(data: TypeData) -> Self {
        Type {
            attribs: TypeAttribs::empty(),
            data,
        }
    }

    pub fn primitive(primitive: TypePrimitive) -> Self {
        Type::new(TypeData::Primitive(primitive))
    }

    #[must_use]
    pub fn with_attribs(mut self, attribs: TypeAttribs) -> Self {
        self.attribs = attribs;
        self
    }

    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.attribs.contains(TypeAttribs::MUTABLE)
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.attribs.contains(TypeAttribs::OPTIONAL)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeData {
    Primitive(TypePrimitive),
    Pointer(Box<Type>),
    Function(TypeFunction),
    Struct(TypeStruct),
}

/// Function type: an argument struct and a return type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeFunction {
    pub arguments: TypeStruct,
    pub return_type: Box<Type>,
}

/// Struct type: an ordered list of fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeStruct {
    pub fields: Vec<StructField>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StructField {
    Named(NamedField),
    Unnamed(UnnamedField),
}

/// `a, b: T = default`: one or more names sharing a type.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedField {
    pub names: SmallVec<[String; 2]>,
    pub ty: Type,
    pub default_value: Option<Expression>,
}

/// `n * T = default`: a field without a name, optionally repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct UnnamedField {
    pub ty: Type,
    pub type_reps: Option<Expression>,
    pub default_value: Option<Expression>,
}

/// An expression with its grouping flag.
///
/// `is_grouped` records that the source wrapped the expression in
/// parentheses. It only affects pretty printing.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub kind: ExprKind,
    pub is_grouped: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    FunctionCall {
        function: Box<Expression>,
        arguments: StructLiteral,
    },
    Block {
        label: Option<String>,
        statements: Vec<Statement>,
    },
    If {
        condition: Box<Expression>,
        then_branch: Box<Expression>,
        else_branch: Option<Box<Expression>>,
    },
    Loop {
        init: Option<Box<Statement>>,
        condition: Option<Box<Expression>>,
        post: Option<Box<Statement>>,
        body: Box<Expression>,
    },
    UnaryOperation {
        kind: UnaryOperationKind,
        operand: Box<Expression>,
    },
    BinaryOperation {
        kind: BinaryOperationKind,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Name(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Int(u128),
    Float(f64),
    String(String),
    Char(u8),
    Bool(bool),
    Struct(StructLiteral),
}

/// Struct construction or call argument list: `[a = 1, 2]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructLiteral {
    pub fields: Vec<StructLiteralField>,
}

impl StructLiteral {
    fn clear_grouping(&mut self) {
        for field in &mut self.fields {
            field.value.clear_grouping();
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructLiteralField {
    pub name: Option<String>,
    pub value: Box<Expression>,
}

/// Assignable view of an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LValue<'a> {
    Name(&'a str),
    /// Operand of a `*` dereference.
    PointerDereference(&'a Expression),
    /// Both sides of a `.` access.
    StructMemberAccess(&'a Expression, &'a Expression),
}

impl Expression {
    pub fn new(kind: ExprKind) -> Self {
        Expression {
            kind,
            is_grouped: false,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Expression::new(ExprKind::Name(name.into()))
    }

    pub fn literal(literal: Literal) -> Self {
        Expression::new(ExprKind::Literal(literal))
    }

    pub fn unary(kind: UnaryOperationKind, operand: Expression) -> Self {
        Expression::new(ExprKind::UnaryOperation {
            kind,
            operand: Box::new(operand),
        })
    }

    pub fn binary(kind: BinaryOperationKind, left: Expression, right: Expression) -> Self {
        Expression::new(ExprKind::BinaryOperation {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    #[must_use]
    pub fn grouped(mut self) -> Self {
        self.is_grouped = true;
        self
    }

    /// Reinterpret this expression as an assignment target.
    ///
    /// Only names, pointer dereferences and member accesses are assignable.
    pub fn as_lvalue(&self) -> Option<LValue<'_>> {
        match &self.kind {
            ExprKind::Name(name) => Some(LValue::Name(name)),
            ExprKind::UnaryOperation {
                kind: UnaryOperationKind::PointerDereference,
                operand,
            } => Some(LValue::PointerDereference(operand)),
            ExprKind::BinaryOperation {
                kind: BinaryOperationKind::StructMemberAccess,
                left,
                right,
            } => Some(LValue::StructMemberAccess(left, right)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_lvalue(&self) -> bool {
        self.as_lvalue().is_some()
    }

    /// Copy of this expression with every grouping flag cleared.
    ///
    /// Useful for comparing trees that differ only in parenthesization.
    #[must_use]
    pub fn ungrouped(&self) -> Self {
        let mut expr = self.clone();
        expr.clear_grouping();
        expr
    }

    fn clear_grouping(&mut self) {
        self.is_grouped = false;
        match &mut self.kind {
            ExprKind::Literal(Literal::Struct(lit)) => lit.clear_grouping(),
            ExprKind::FunctionCall {
                function,
                arguments,
            } => {
                function.clear_grouping();
                arguments.clear_grouping();
            }
            ExprKind::Literal(_) | ExprKind::Name(_) => {}
            ExprKind::Block { statements, .. } => {
                for stmt in statements {
                    stmt.clear_grouping();
                }
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                condition.clear_grouping();
                then_branch.clear_grouping();
                if let Some(e) = else_branch {
                    e.clear_grouping();
                }
            }
            ExprKind::Loop {
                init,
                condition,
                post,
                body,
            } => {
                if let Some(s) = init {
                    s.clear_grouping();
                }
                if let Some(c) = condition {
                    c.clear_grouping();
                }
                if let Some(s) = post {
                    s.clear_grouping();
                }
                body.clear_grouping();
            }
            ExprKind::UnaryOperation { operand, .. } => operand.clear_grouping(),
            ExprKind::BinaryOperation { left, right, .. } => {
                left.clear_grouping();
                right.clear_grouping();
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Expression(Expression),
    CompoundAssignment {
        kind: CompoundAssignmentKind,
        target: Expression,
        value: Expression,
    },
    /// `name: T = value`, `name: T` or `name := value`.
    VariableDefinition {
        name: String,
        ty: Option<Type>,
        value: Option<Expression>,
    },
    Assignment {
        target: Expression,
        value: Expression,
    },
    Continue,
    Break {
        label: Option<String>,
        value: Option<Expression>,
    },
}

impl Statement {
    /// The assignment target of an assignment statement, as an lvalue.
    pub fn target(&self) -> Option<LValue<'_>> {
        match self {
            Statement::Assignment { target, .. } | Statement::CompoundAssignment { target, .. } => {
                target.as_lvalue()
            }
            _ => None,
        }
    }

    /// Copy of this statement with every grouping flag cleared.
    #[must_use]
    pub fn ungrouped(&self) -> Self {
        let mut stmt = self.clone();
        stmt.clear_grouping();
        stmt
    }

    fn clear_grouping(&mut self) {
        match self {
            Statement::Expression(e) => e.clear_grouping(),
            Statement::CompoundAssignment { target, value, .. }
            | Statement::Assignment { target, value } => {
                target.clear_grouping();
                value.clear_grouping();
            }
            Statement::VariableDefinition { ty, value, .. } => {
                if let Some(t) = ty {
                    t.clear_grouping();
                }
                if let Some(v) = value {
                    v.clear_grouping();
                }
            }
            Statement::Continue => {}
            Statement::Break { value, .. } => {
                if let Some(v) = value {
                    v.clear_grouping();
                }
            }
        }
    }
}

impl Type {
    fn clear_grouping(&mut self) {
        match &mut self.data {
            TypeData::Primitive(_) => {}
            TypeData::Pointer(inner) => inner.clear_grouping(),
            TypeData::Function(func) => {
                func.arguments.clear_grouping();
                func.return_type.clear_grouping();
            }
            TypeData::Struct(st) => st.clear_grouping(),
        }
    }
}

impl TypeStruct {
    fn clear_grouping(&mut self) {
        for field in &mut self.fields {
            match field {
                StructField::Named(f) => {
                    f.ty.clear_grouping();
                    if let Some(d) = &mut f.default_value {
                        d.clear_grouping();
                    }
                }
                StructField::Unnamed(f) => {
                    f.ty.clear_grouping();
                    if let Some(r) = &mut f.type_reps {
                        r.clear_grouping();
                    }
                    if let Some(d) = &mut f.default_value {
                        d.clear_grouping();
                    }
                }
            }
        }
    }
}

/// Root of a parse.
#[derive(Clone, Debug, PartialEq)]
pub enum AstNode {
    Type(Type),
    Statement(Statement),
    Expression(Expression),
}

impl AstNode {
    /// Name of the root variant, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AstNode::Type(_) => "type",
            AstNode::Statement(_) => "statement",
            AstNode::Expression(_) => "expression",
        }
    }

    /// Copy of this node with every grouping flag cleared.
    #[must_use]
    pub fn ungrouped(&self) -> Self {
        match self {
            AstNode::Type(t) => {
                let mut t = t.clone();
                t.clear_grouping();
                AstNode::Type(t)
            }
            AstNode::Statement(s) => AstNode::Statement(s.ungrouped()),
            AstNode::Expression(e) => AstNode::Expression(e.ungrouped()),
        }
    }
}
