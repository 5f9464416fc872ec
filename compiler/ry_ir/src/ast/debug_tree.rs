//! Indented structural dump of AST nodes.
//!
//! One node per line, two spaces per nesting level, labeled by node kind.

use std::fmt::{self, Write as _};

use super::{
    AstNode, ExprKind, Expression, Literal, Statement, StructField, StructLiteral, Type, TypeData,
    TypeStruct,
};

/// Line-oriented writer that tracks the current nesting depth.
#[derive(Default)]
pub struct TreeWriter {
    out: String,
    depth: usize,
}

impl TreeWriter {
    pub fn new() -> Self {
        TreeWriter::default()
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        // Writing into a String cannot fail.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }

    /// Run `f` one level deeper.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    /// Write a label line with `node` nested under it.
    pub fn labeled(&mut self, label: &str, node: &dyn DebugTree) {
        self.line(format_args!("{label}"));
        self.nested(|w| node.write_tree(w));
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Structural dump of a node.
pub trait DebugTree {
    fn write_tree(&self, w: &mut TreeWriter);

    fn debug_tree(&self) -> String {
        let mut w = TreeWriter::new();
        self.write_tree(&mut w);
        w.finish()
    }
}

impl DebugTree for AstNode {
    fn write_tree(&self, w: &mut TreeWriter) {
        match self {
            AstNode::Type(t) => t.write_tree(w),
            AstNode::Statement(s) => s.write_tree(w),
            AstNode::Expression(e) => e.write_tree(w),
        }
    }
}

impl DebugTree for Type {
    fn write_tree(&self, w: &mut TreeWriter) {
        let mut attrs = String::new();
        if self.is_mutable() {
            attrs.push_str(" mutable");
        }
        if self.is_optional() {
            attrs.push_str(" optional");
        }
        match &self.data {
            TypeData::Primitive(p) => w.line(format_args!("Type{attrs} Primitive {p}")),
            TypeData::Pointer(inner) => {
                w.line(format_args!("Type{attrs} Pointer"));
                w.nested(|w| inner.write_tree(w));
            }
            TypeData::Function(func) => {
                w.line(format_args!("Type{attrs} Function"));
                w.nested(|w| {
                    w.labeled("Arguments", &func.arguments);
                    w.labeled("Return", &*func.return_type);
                });
            }
            TypeData::Struct(st) => {
                w.line(format_args!("Type{attrs} Struct"));
                w.nested(|w| st.write_tree(w));
            }
        }
    }
}

impl DebugTree for TypeStruct {
    /// Fields only; the caller writes the header line.
    fn write_tree(&self, w: &mut TreeWriter) {
        for field in &self.fields {
            field.write_tree(w);
        }
    }
}

impl DebugTree for StructField {
    fn write_tree(&self, w: &mut TreeWriter) {
        match self {
            StructField::Named(field) => {
                w.line(format_args!("NamedField {}", field.names.join(", ")));
                w.nested(|w| {
                    field.ty.write_tree(w);
                    if let Some(default) = &field.default_value {
                        w.labeled("Default", default);
                    }
                });
            }
            StructField::Unnamed(field) => {
                w.line(format_args!("UnnamedField"));
                w.nested(|w| {
                    field.ty.write_tree(w);
                    if let Some(reps) = &field.type_reps {
                        w.labeled("Repetitions", reps);
                    }
                    if let Some(default) = &field.default_value {
                        w.labeled("Default", default);
                    }
                });
            }
        }
    }
}

impl DebugTree for Expression {
    fn write_tree(&self, w: &mut TreeWriter) {
        let grouped = if self.is_grouped { " (grouped)" } else { "" };
        match &self.kind {
            ExprKind::Literal(lit) => {
                w.line(format_args!("Literal{grouped} {}", literal_header(lit)));
                if let Literal::Struct(st) = lit {
                    w.nested(|w| st.write_tree(w));
                }
            }
            ExprKind::FunctionCall {
                function,
                arguments,
            } => {
                w.line(format_args!("FunctionCall{grouped}"));
                w.nested(|w| {
                    function.write_tree(w);
                    w.labeled("Arguments", arguments);
                });
            }
            ExprKind::Block { label, statements } => {
                match label {
                    Some(label) => w.line(format_args!("Block{grouped} {label:?}")),
                    None => w.line(format_args!("Block{grouped}")),
                }
                w.nested(|w| {
                    for stmt in statements {
                        stmt.write_tree(w);
                    }
                });
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                w.line(format_args!("If{grouped}"));
                w.nested(|w| {
                    w.labeled("Condition", &**condition);
                    w.labeled("Then", &**then_branch);
                    if let Some(else_branch) = else_branch {
                        w.labeled("Else", &**else_branch);
                    }
                });
            }
            ExprKind::Loop {
                init,
                condition,
                post,
                body,
            } => {
                w.line(format_args!("Loop{grouped}"));
                w.nested(|w| {
                    if let Some(init) = init {
                        w.labeled("Init", &**init);
                    }
                    if let Some(condition) = condition {
                        w.labeled("Condition", &**condition);
                    }
                    if let Some(post) = post {
                        w.labeled("Post", &**post);
                    }
                    w.labeled("Body", &**body);
                });
            }
            ExprKind::UnaryOperation { kind, operand } => {
                w.line(format_args!("UnaryOperation{grouped} {kind:?}"));
                w.nested(|w| operand.write_tree(w));
            }
            ExprKind::BinaryOperation { kind, left, right } => {
                w.line(format_args!("BinaryOperation{grouped} {kind:?}"));
                w.nested(|w| {
                    left.write_tree(w);
                    right.write_tree(w);
                });
            }
            ExprKind::Name(name) => w.line(format_args!("Name{grouped} {name}")),
        }
    }
}

fn literal_header(lit: &Literal) -> String {
    match lit {
        Literal::Null => "Null".to_string(),
        Literal::Int(v) => format!("Int {v}"),
        Literal::Float(v) => format!("Float {v:?}"),
        Literal::String(s) => format!("String {s:?}"),
        Literal::Char(c) => format!("Char {:?}", char::from(*c)),
        Literal::Bool(b) => format!("Bool {b}"),
        Literal::Struct(_) => "Struct".to_string(),
    }
}

impl DebugTree for StructLiteral {
    /// Fields only; the caller writes the header line.
    fn write_tree(&self, w: &mut TreeWriter) {
        for field in &self.fields {
            match &field.name {
                Some(name) => w.line(format_args!("Field {name}")),
                None => w.line(format_args!("Field")),
            }
            w.nested(|w| field.value.write_tree(w));
        }
    }
}

impl DebugTree for Statement {
    fn write_tree(&self, w: &mut TreeWriter) {
        match self {
            Statement::Expression(e) => {
                w.line(format_args!("ExpressionStatement"));
                w.nested(|w| e.write_tree(w));
            }
            Statement::CompoundAssignment {
                kind,
                target,
                value,
            } => {
                w.line(format_args!("CompoundAssignment {kind:?}"));
                w.nested(|w| {
                    w.labeled("Target", target);
                    w.labeled("Value", value);
                });
            }
            Statement::VariableDefinition { name, ty, value } => {
                w.line(format_args!("VariableDefinition {name}"));
                w.nested(|w| {
                    if let Some(ty) = ty {
                        ty.write_tree(w);
                    }
                    if let Some(value) = value {
                        w.labeled("Value", value);
                    }
                });
            }
            Statement::Assignment { target, value } => {
                w.line(format_args!("Assignment"));
                w.nested(|w| {
                    w.labeled("Target", target);
                    w.labeled("Value", value);
                });
            }
            Statement::Continue => w.line(format_args!("Continue")),
            Statement::Break { label, value } => {
                match label {
                    Some(label) => w.line(format_args!("Break {label:?}")),
                    None => w.line(format_args!("Break")),
                }
                if let Some(value) = value {
                    w.nested(|w| value.write_tree(w));
                }
            }
        }
    }
}
