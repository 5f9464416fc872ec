//! Type parsing.
//!
//! `Type := '~'? '?'? (Primitive | '*' Type | '[' Fields ']' ('=>' Type)?)`.
//! A bracketed field list followed by `=>` is a function type whose
//! arguments are that struct.

use ry_ir::{
    NamedField, StructField, TokenCode, TokenKind, Type, TypeAttribs, TypeData, TypeFunction,
    TypePrimitive, TypeStruct, UnnamedField,
};
use smallvec::SmallVec;

use crate::{MustParse, Parser};

impl Parser<'_> {
    pub(crate) fn parse_type_with(&mut self, must: MustParse) -> Option<Type> {
        self.attempt(must, "type", |p| p.nested(Self::parse_type_inner))
    }

    fn parse_type_inner(&mut self) -> Option<Type> {
        let mut attribs = TypeAttribs::empty();
        if self.cursor.eat(TokenCode::Tilde) {
            attribs |= TypeAttribs::MUTABLE;
        }
        if self.cursor.eat(TokenCode::Question) {
            attribs |= TypeAttribs::OPTIONAL;
        }

        let data = match self.cursor.current_code()? {
            code if code.is_primitive() => {
                let primitive = TypePrimitive::from_code(code)?;
                self.cursor.advance();
                TypeData::Primitive(primitive)
            }
            TokenCode::Star => {
                self.cursor.advance();
                TypeData::Pointer(Box::new(self.parse_type_with(MustParse::No)?))
            }
            TokenCode::LBracket => {
                let fields = self.parse_type_struct()?;
                if self.cursor.eat(TokenCode::FatArrow) {
                    let return_type = self.parse_type_with(MustParse::No)?;
                    TypeData::Function(TypeFunction {
                        arguments: fields,
                        return_type: Box::new(return_type),
                    })
                } else {
                    TypeData::Struct(fields)
                }
            }
            _ => return None,
        };
        Some(Type::new(data).with_attribs(attribs))
    }

    /// `'[' (StructField (',' StructField)* ','?)? ']'`.
    fn parse_type_struct(&mut self) -> Option<TypeStruct> {
        if !self.cursor.eat(TokenCode::LBracket) {
            return None;
        }
        let mut fields = Vec::new();
        while !self.cursor.eat(TokenCode::RBracket) {
            fields.push(self.parse_struct_field()?);
            if !self.cursor.eat(TokenCode::Comma) && !self.cursor.check(TokenCode::RBracket) {
                return None;
            }
        }
        Some(TypeStruct { fields })
    }

    fn parse_struct_field(&mut self) -> Option<StructField> {
        if let Some(field) = self.attempt(MustParse::No, "named field", Self::parse_named_field) {
            return Some(StructField::Named(field));
        }
        self.attempt(MustParse::No, "unnamed field", Self::parse_unnamed_field)
            .map(StructField::Unnamed)
    }

    /// `Name (',' Name)* ':' Type ('=' Expression)?`.
    fn parse_named_field(&mut self) -> Option<NamedField> {
        let mut names: SmallVec<[String; 2]> = SmallVec::new();
        names.push(self.cursor.eat_name()?.to_string());
        while self.cursor.check(TokenCode::Comma)
            && matches!(self.cursor.peek(1).map(|t| &t.kind), Some(TokenKind::Name(_)))
        {
            self.cursor.advance();
            names.push(self.cursor.eat_name()?.to_string());
        }
        if !self.cursor.eat(TokenCode::Colon) {
            return None;
        }
        let ty = self.parse_type_with(MustParse::No)?;
        let default_value = self.parse_initializer();
        Some(NamedField {
            names,
            ty,
            default_value,
        })
    }

    /// `(Expression '*')? Type ('*' Expression)? ('=' Expression)?`.
    ///
    /// The repetition count is tried before the type first, then after it.
    fn parse_unnamed_field(&mut self) -> Option<UnnamedField> {
        let leading_reps = self.attempt(MustParse::No, "repetition count", |p| {
            let reps = p.parse_expression_with(MustParse::No)?;
            p.cursor.eat(TokenCode::Star).then_some(reps)
        });
        let ty = self.parse_type_with(MustParse::No)?;
        let type_reps = match leading_reps {
            Some(reps) => Some(reps),
            None => self.attempt(MustParse::No, "repetition count", |p| {
                if !p.cursor.eat(TokenCode::Star) {
                    return None;
                }
                p.parse_expression_with(MustParse::No)
            }),
        };
        let default_value = self.parse_initializer();
        Some(UnnamedField {
            ty,
            type_reps,
            default_value,
        })
    }
}
