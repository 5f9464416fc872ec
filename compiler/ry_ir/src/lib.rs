//! ry IR - tokens, spans and syntax trees.
//!
//! This crate contains the data shared by the ry front end:
//! - [`SourceSpan`] line/column locations
//! - [`Token`], [`TokenKind`] and the [`TokenCode`] space shared by keywords,
//!   operators and the semantic kinds derived from them
//! - [`TokenSet`] bitsets for O(1) membership tests
//! - AST nodes with constant folding, a debug tree and a pretty form

pub mod ast;
mod span;
mod token;

pub use ast::{
    AstNode, BinaryOperationKind, CompoundAssignmentKind, DebugTree, ExprKind, Expression, LValue,
    Literal, NamedField, Statement, StructField, StructLiteral, StructLiteralField, Type,
    TypeAttribs, TypeData, TypeFunction, TypePrimitive, TypeStruct, UnaryOperationKind,
    UnnamedField,
};
pub use span::{SourcePosition, SourceSpan};
pub use token::{Token, TokenCode, TokenKind, TokenList, TokenSet};
