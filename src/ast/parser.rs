use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind, TokenValue};
use crate::error::{Error, ErrorKind, ParseErrorCode, Result};
use bumpalo::collections::Vec;
use log::debug;
use std::fmt;

/// Options that change which information the parser records on the AST.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ParseOptions {
    /// Don't attach any [Location] to parsed nodes.
    pub no_location: bool,
    /// Attach [Location] offsets without a reference to their [Source].
    pub no_source: bool,
}

pub(crate) mod private {
    use super::{
        fmt, ASTContext, Error, ErrorKind, Lexer, Location, ParseErrorCode, ParseOptions, Result,
        Source, Token, TokenKind, ValidName, Vec,
    };

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena, a [Lexer], and one token of lookahead.
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) source: &'a Source,
        pub(crate) lexer: Lexer<'a>,
        pub(crate) token: Token<'a>,
        pub(crate) prev_end: usize,
        pub(crate) options: ParseOptions,
        pub(crate) is_const: bool,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and read the first token of the
        /// source text.
        pub(crate) fn new(
            ctx: &'a ASTContext,
            source: &'a Source,
            options: ParseOptions,
        ) -> Result<Self> {
            let mut lexer = Lexer::new(ctx, source);
            let token = lexer.next_token()?;
            Ok(ParserContext {
                arena: &ctx.arena,
                source,
                lexer,
                token,
                prev_end: 0,
                options,
                is_const: false,
            })
        }

        /// Consume the current token and return it.
        #[inline]
        pub(crate) fn next(&mut self) -> Result<Token<'a>> {
            let token = self.token;
            self.prev_end = token.end;
            self.token = self.lexer.next_token()?;
            Ok(token)
        }

        #[inline]
        pub(crate) fn peek(&self, kind: TokenKind) -> bool {
            self.token.kind == kind
        }

        #[inline]
        pub(crate) fn peek_keyword(&self, keyword: &str) -> bool {
            self.token.name() == Some(keyword)
        }

        /// Consume the current token if it's of the given kind and fail otherwise.
        pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>> {
            if self.peek(kind) {
                self.next()
            } else {
                Err(self.unexpected(kind))
            }
        }

        /// Consume the current token if it's a name matching the keyword and fail otherwise.
        pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<Token<'a>> {
            if self.peek_keyword(keyword) {
                self.next()
            } else {
                Err(self.unexpected(format_args!("\"{}\"", keyword)))
            }
        }

        /// Consume the current token if it's of the given kind and report whether it was.
        pub(crate) fn skip(&mut self, kind: TokenKind) -> Result<bool> {
            if self.peek(kind) {
                self.next()?;
                Ok(true)
            } else {
                Ok(false)
            }
        }

        pub(crate) fn expect_name(&mut self) -> Result<ValidName<'a>> {
            let token = self.expect(TokenKind::Name)?;
            Ok(ValidName {
                value: token.name().unwrap_or_default(),
                location: self.locate(token.start),
            })
        }

        /// Parse a list of at least one item enclosed by `left` and `right`.
        pub(crate) fn one_or_more_between<T>(
            &mut self,
            left: TokenKind,
            mut item: impl FnMut(&mut Self) -> Result<T>,
            right: TokenKind,
        ) -> Result<Vec<'a, T>> {
            self.expect(left)?;
            let mut items = Vec::new_in(self.arena);
            loop {
                items.push(item(self)?);
                if self.skip(right)? {
                    return Ok(items);
                }
            }
        }

        /// Parse a possibly empty list of items enclosed by `left` and `right`.
        pub(crate) fn zero_or_more_between<T>(
            &mut self,
            left: TokenKind,
            mut item: impl FnMut(&mut Self) -> Result<T>,
            right: TokenKind,
        ) -> Result<Vec<'a, T>> {
            self.expect(left)?;
            let mut items = Vec::new_in(self.arena);
            while !self.skip(right)? {
                items.push(item(self)?);
            }
            Ok(items)
        }

        /// Returns the location from `start` up to the end of the last consumed token.
        #[inline]
        pub(crate) fn locate(&self, start: usize) -> Option<Location<'a>> {
            if self.options.no_location {
                None
            } else {
                Some(Location {
                    start,
                    end: self.prev_end,
                    source: if self.options.no_source {
                        None
                    } else {
                        Some(self.source)
                    },
                })
            }
        }

        pub(crate) fn unexpected(&self, expected: impl fmt::Display) -> Error {
            Error::syntax(
                ErrorKind::Parse(ParseErrorCode::UnexpectedToken),
                self.source,
                self.prev_end,
                Some(format!("Expected {}, found {}", expected, self.token)),
            )
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Self>;
    }
}

use private::{ParseNode as _, ParserContext};

/// Trait for parsing AST Nodes from source texts using recursive descent.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL
/// language.
/// However, mostly this will be used via `Document::parse`. The whole source text must be consumed
/// by the parsed node.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure, allocating the source
    /// and the AST's lists into the current AST Context's arena.
    fn parse<S: Into<Source>>(ctx: &'a ASTContext, source: S) -> Result<&'a Self> {
        Self::parse_with_options(ctx, source, ParseOptions::default())
    }

    /// Parse an input source text while recording only the information the options ask for.
    fn parse_with_options<S: Into<Source>>(
        ctx: &'a ASTContext,
        source: S,
        options: ParseOptions,
    ) -> Result<&'a Self> {
        let source: &'a Source = ctx.arena.alloc(source.into());
        debug!(
            "parsing {} ({} bytes)",
            source.name(),
            source.body().len()
        );
        let result = ParserContext::new(ctx, source, options).and_then(|mut parser_ctx| {
            let node = Self::new_with_ctx(&mut parser_ctx)?;
            parser_ctx.expect(TokenKind::EndOfFile)?;
            Ok(ctx.alloc(node))
        });
        if let Err(error) = &result {
            debug!("failed to parse {}: {}", source.name(), error.print(false));
        }
        result
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

impl<'a> private::ParseNode<'a> for ValidName<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ValidName<'a>> {
        ctx.expect_name()
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Variable<'a>> {
        let start = ctx.expect(TokenKind::Dollar)?.start;
        let name = ctx.expect_name()?;
        Ok(Variable {
            name,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Value<'a>> {
        match ctx.token.kind {
            TokenKind::BracketLeft => ListValue::new_with_ctx(ctx).map(Value::List),
            TokenKind::BraceLeft => InputObjectValue::new_with_ctx(ctx).map(Value::Object),
            TokenKind::Dollar if !ctx.is_const => Variable::new_with_ctx(ctx).map(Value::Variable),
            TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Name => {
                let token = ctx.next()?;
                let location = ctx.locate(token.start);
                Ok(match token.value {
                    Some(TokenValue::Int(value)) => Value::Int(IntValue { value, location }),
                    Some(TokenValue::Float(value)) => Value::Float(FloatValue { value, location }),
                    Some(TokenValue::String(value)) => {
                        Value::String(StringValue { value, location })
                    }
                    Some(TokenValue::Name("true")) => Value::Boolean(BooleanValue {
                        value: true,
                        location,
                    }),
                    Some(TokenValue::Name("false")) => Value::Boolean(BooleanValue {
                        value: false,
                        location,
                    }),
                    Some(TokenValue::Name(value)) => Value::Enum(EnumValue { value, location }),
                    None => return Err(ctx.unexpected("Value")),
                })
            }
            _ => Err(ctx.unexpected("Value")),
        }
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<ListValue<'a>> {
        let start = ctx.token.start;
        let values = ctx.zero_or_more_between(
            TokenKind::BracketLeft,
            Value::new_with_ctx,
            TokenKind::BracketRight,
        )?;
        Ok(ListValue {
            values,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputObjectField<'a>> {
        let start = ctx.token.start;
        let name = ctx.expect_name()?;
        ctx.expect(TokenKind::Colon)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(InputObjectField {
            name,
            value,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InputObjectValue<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<InputObjectValue<'a>> {
        let start = ctx.expect(TokenKind::BraceLeft)?.start;
        let mut fields: Vec<'a, InputObjectField<'a>> = Vec::new_in(ctx.arena);
        while !ctx.skip(TokenKind::BraceRight)? {
            let name_start = ctx.token.start;
            let field = InputObjectField::new_with_ctx(ctx)?;
            if fields
                .iter()
                .any(|seen| seen.name.value == field.name.value)
            {
                return Err(Error::syntax(
                    ErrorKind::Parse(ParseErrorCode::DuplicateInputObjectField {
                        name: field.name.value.to_string(),
                    }),
                    ctx.source,
                    name_start,
                    None,
                ));
            }
            fields.push(field);
        }
        Ok(InputObjectValue {
            fields,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Argument<'a>> {
        let start = ctx.token.start;
        let name = ctx.expect_name()?;
        ctx.expect(TokenKind::Colon)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument {
            name,
            value,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Arguments<'a>> {
        let children = if ctx.peek(TokenKind::ParenLeft) {
            ctx.one_or_more_between(
                TokenKind::ParenLeft,
                Argument::new_with_ctx,
                TokenKind::ParenRight,
            )?
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Directive<'a>> {
        let start = ctx.expect(TokenKind::At)?.start;
        let name = ctx.expect_name()?;
        let arguments = Arguments::new_with_ctx(ctx)?;
        Ok(Directive {
            name,
            arguments,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Directives<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        while ctx.peek(TokenKind::At) {
            children.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Field<'a>> {
        let start = ctx.token.start;
        let name_or_alias = ctx.expect_name()?;
        let (alias, name) = if ctx.skip(TokenKind::Colon)? {
            (Some(name_or_alias), ctx.expect_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = Arguments::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = if ctx.peek(TokenKind::BraceLeft) {
            Some(SelectionSet::new_with_ctx(ctx)?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<NamedType<'a>> {
        let name = ctx.expect_name()?;
        Ok(NamedType {
            name: name.value,
            location: name.location,
        })
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Selection<'a>> {
        if !ctx.peek(TokenKind::Spread) {
            return Field::new_with_ctx(ctx).map(Selection::Field);
        }

        let start = ctx.next()?.start;
        if ctx.peek(TokenKind::Name) && !ctx.peek_keyword("on") {
            let name = ctx.expect_name()?;
            let directives = Directives::new_with_ctx(ctx)?;
            Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                location: ctx.locate(start),
            }))
        } else {
            let type_condition = if ctx.peek_keyword("on") {
                ctx.next()?;
                Some(NamedType::new_with_ctx(ctx)?)
            } else {
                None
            };
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            Ok(Selection::InlineFragment(InlineFragment {
                type_condition,
                directives,
                selection_set,
                location: ctx.locate(start),
            }))
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<SelectionSet<'a>> {
        let start = ctx.token.start;
        let selections = ctx.one_or_more_between(
            TokenKind::BraceLeft,
            Selection::new_with_ctx,
            TokenKind::BraceRight,
        )?;
        Ok(SelectionSet {
            selections,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Type<'a>> {
        let start = ctx.token.start;
        let of_type = if ctx.skip(TokenKind::BracketLeft)? {
            let inner = Type::new_with_ctx(ctx)?;
            ctx.expect(TokenKind::BracketRight)?;
            Type::ListType(ListType {
                of_type: ctx.arena.alloc(inner),
                location: ctx.locate(start),
            })
        } else {
            Type::NamedType(NamedType::new_with_ctx(ctx)?)
        };
        if ctx.skip(TokenKind::Bang)? {
            Ok(Type::NonNullType(NonNullType {
                of_type: ctx.arena.alloc(of_type),
                location: ctx.locate(start),
            }))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<VariableDefinition<'a>> {
        let start = ctx.token.start;
        let variable = Variable::new_with_ctx(ctx)?;
        ctx.expect(TokenKind::Colon)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.skip(TokenKind::Equals)? {
            ctx.is_const = true;
            let value = Value::new_with_ctx(ctx);
            ctx.is_const = false;
            Some(value?)
        } else {
            None
        };
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<VariableDefinitions<'a>> {
        let children = if ctx.peek(TokenKind::ParenLeft) {
            ctx.one_or_more_between(
                TokenKind::ParenLeft,
                VariableDefinition::new_with_ctx,
                TokenKind::ParenRight,
            )?
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<FragmentDefinition<'a>> {
        let start = ctx.expect_keyword("fragment")?.start;
        if ctx.peek_keyword("on") {
            return Err(ctx.unexpected("fragment name"));
        }
        let name = ctx.expect_name()?;
        ctx.expect_keyword("on")?;
        let type_condition = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationKind> {
        let operation = match ctx.token.name() {
            Some("query") => OperationKind::Query,
            Some("mutation") => OperationKind::Mutation,
            _ => return Err(ctx.unexpected("\"query\" or \"mutation\"")),
        };
        ctx.next()?;
        Ok(operation)
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<OperationDefinition<'a>> {
        let start = ctx.token.start;
        if ctx.peek(TokenKind::BraceLeft) {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: VariableDefinitions::default_in(ctx.arena),
                directives: Directives::default_in(ctx.arena),
                selection_set,
                location: ctx.locate(start),
            });
        }

        let operation = OperationKind::new_with_ctx(ctx)?;
        let name = if ctx.peek(TokenKind::Name) {
            Some(ctx.expect_name()?)
        } else {
            None
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            location: ctx.locate(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Definition<'a>> {
        if ctx.peek(TokenKind::BraceLeft)
            || ctx.peek_keyword("query")
            || ctx.peek_keyword("mutation")
        {
            OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
        } else if ctx.peek_keyword("fragment") {
            FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
        } else {
            Err(ctx.unexpected("Definition"))
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> Result<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        loop {
            definitions.push(Definition::new_with_ctx(ctx)?);
            if ctx.peek(TokenKind::EndOfFile) {
                break;
            }
        }
        Ok(Document {
            definitions,
            location: ctx.locate(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{super::ast::*, ParseNode, ParseOptions};
    use crate::ast::ASTNode;
    use crate::error::{ErrorKind, ParseErrorCode, SourcePosition};
    use crate::visit::{VisitFlow, VisitInfo, VisitNode, Visitor};
    use bumpalo::collections::Vec;

    const NO_LOCATION: ParseOptions = ParseOptions {
        no_location: true,
        no_source: false,
    };

    fn assert_parse<'a, T>(ctx: &'a ASTContext, source: &str, expected: T)
    where
        T: ParseNode<'a> + std::fmt::Debug + PartialEq + 'a,
    {
        assert_eq!(
            T::parse_with_options(ctx, source, NO_LOCATION).unwrap(),
            &expected
        );
    }

    fn parse_error_code(source: &str) -> ParseErrorCode {
        let ctx = ASTContext::new();
        match Document::parse(&ctx, source).unwrap_err().kind() {
            ErrorKind::Parse(code) => code.clone(),
            kind => panic!("expected a parse error, got {:?}", kind),
        }
    }

    #[test]
    fn error() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "query { document { $ }}").unwrap_err();
        assert_eq!(
            error.location(),
            &Some(SourcePosition {
                line: 1,
                column: 19
            })
        );
        assert_eq!(error.message(), "Expected Name, found \"$\"");
        assert_eq!(error.offset(), Some(18));

        let error = Document::parse(
            &ctx,
            "query {
            document {
                $
            }
        }",
        )
        .unwrap_err();
        assert_eq!(
            error.location(),
            &Some(SourcePosition {
                line: 2,
                column: 23
            })
        );
    }

    #[test]
    fn variable() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "$test", Variable::from("test"));
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "true", Value::Boolean(true.into()));
        assert_parse(&ctx, "false", Value::Boolean(false.into()));
        assert_parse(&ctx, "$var", Value::Variable(Variable::from("var")));
        assert_parse(
            &ctx,
            "Opt",
            Value::Enum(EnumValue {
                value: "Opt",
                location: None,
            }),
        );
        assert_parse(
            &ctx,
            "null",
            Value::Enum(EnumValue {
                value: "null",
                location: None,
            }),
        );
        assert_parse(&ctx, "123", Value::Int(123.into()));
        assert_parse(&ctx, "-1.5", Value::Float((-1.5).into()));
        assert_parse(
            &ctx,
            "\"hello world\"",
            Value::String(StringValue::from("hello world")),
        );
        assert_parse(&ctx, "[]", Value::List(ListValue::default_in(&ctx.arena)));
        assert_parse(
            &ctx,
            "[1, 2]",
            Value::List(ListValue {
                values: Vec::from_iter_in(
                    [Value::Int(1.into()), Value::Int(2.into())],
                    &ctx.arena,
                ),
                location: None,
            }),
        );
        assert_parse(
            &ctx,
            "{}",
            Value::Object(InputObjectValue::default_in(&ctx.arena)),
        );
        assert_parse(
            &ctx,
            "{ test: true }",
            Value::Object(InputObjectValue {
                fields: Vec::from_iter_in(
                    [InputObjectField {
                        name: ValidName::new("test"),
                        value: Value::Boolean(true.into()),
                        location: None,
                    }],
                    &ctx.arena,
                ),
                location: None,
            }),
        );
    }

    #[test]
    fn arguments() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "", Arguments::default_in(&ctx.arena));
        assert_parse(
            &ctx,
            "(a: 1, b: $b)",
            Arguments {
                children: Vec::from_iter_in(
                    [
                        Argument {
                            name: ValidName::new("a"),
                            value: Value::Int(1.into()),
                            location: None,
                        },
                        Argument {
                            name: ValidName::new("b"),
                            value: Value::Variable(Variable::from("b")),
                            location: None,
                        },
                    ],
                    &ctx.arena,
                ),
            },
        );
        assert!(Arguments::parse(&ctx, "()").is_err());
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();
        let named = Type::NamedType(NamedType::from("Int"));
        assert_parse(&ctx, "Int", named);
        assert_parse(&ctx, "Int!", named.into_nonnull(&ctx));
        assert_parse(&ctx, "[Int]", named.into_list(&ctx));
        assert_parse(
            &ctx,
            "[Int!]!",
            named.into_nonnull(&ctx).into_list(&ctx).into_nonnull(&ctx),
        );
        assert!(Type::parse(&ctx, "Int!!").is_err());
        assert!(Type::parse(&ctx, "[Int").is_err());
        assert_eq!(Type::parse(&ctx, "[ Int! ]!").unwrap().to_string(), "[Int!]!");
    }

    #[test]
    fn variable_definitions() {
        let ctx = ASTContext::new();
        let definitions =
            VariableDefinitions::parse(&ctx, "($a: Int = 1, $b: [String!]! = [\"x\"])").unwrap();
        assert_eq!(definitions.children.len(), 2);
        assert_eq!(definitions.children[0].variable.name.value, "a");
        assert!(matches!(
            definitions.children[0].default_value,
            Some(Value::Int(IntValue { value: 1, .. }))
        ));
        assert_eq!(definitions.children[1].of_type.named_type().name, "String");

        // Default values are constant
        let error = VariableDefinitions::parse(&ctx, "($a: Int = $b)").unwrap_err();
        assert_eq!(error.message(), "Expected Value, found \"$\"");
    }

    #[test]
    fn selection_scenario() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ node(id: 4) { id, name } }").unwrap();
        assert_eq!(document.definitions.len(), 1);

        let operation = document.definitions[0].operation().unwrap();
        assert_eq!(operation.operation, OperationKind::Query);
        assert_eq!(operation.name, None);
        assert_eq!(operation.selection_set.selections.len(), 1);

        let node = operation.selection_set.selections[0].field().unwrap();
        assert_eq!(node.name.value, "node");
        assert_eq!(node.arguments.children.len(), 1);
        assert_eq!(node.arguments.children[0].name.value, "id");
        assert!(matches!(
            node.arguments.children[0].value,
            Value::Int(IntValue { value: 4, .. })
        ));

        let selection_set = node.selection_set.as_ref().unwrap();
        let names: std::vec::Vec<&str> = selection_set
            .selections
            .iter()
            .map(|selection| selection.field().unwrap().name.value)
            .collect();
        assert_eq!(names, ["id", "name"]);
        assert!(selection_set.selections[0]
            .field()
            .unwrap()
            .selection_set
            .is_none());
    }

    #[test]
    fn locations() {
        let ctx = ASTContext::new();
        let body = "{ node(id: 4) { id, name } }";
        let document = Document::parse(&ctx, body).unwrap();
        let location = document.location.unwrap();
        assert_eq!((location.start, location.end), (0, body.len()));

        let operation = document.definitions[0].operation().unwrap();
        let node = operation.selection_set.selections[0].field().unwrap();
        assert_eq!(node.name.location.unwrap().source_text(), Some("node"));
        assert_eq!(
            node.location.unwrap().source_text(),
            Some("node(id: 4) { id, name }")
        );
        assert_eq!(
            node.arguments.children[0].location.unwrap().source_text(),
            Some("id: 4")
        );
        let name = node.selection_set.as_ref().unwrap().selections[1]
            .field()
            .unwrap();
        assert_eq!(name.name.location.unwrap().span(), 20..24);
    }

    #[derive(Default)]
    struct SpanChecker {
        body_len: usize,
        nodes: usize,
        fields: usize,
    }

    impl<'a> Visitor<'a> for SpanChecker {
        fn enter_node(
            &mut self,
            _ctx: &mut (),
            node: ASTNode<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            let location = node.location().unwrap();
            assert!(
                location.start <= location.end && location.end <= self.body_len,
                "{} node spans {:?}",
                node.kind(),
                location.span()
            );
            if let ASTNode::Field(field) = node {
                let name = field.name.location.unwrap();
                assert_eq!(name.source_text(), Some(field.name.value));
                assert!(location.start <= name.start && name.end <= location.end);
                self.fields += 1;
            }
            self.nodes += 1;
            VisitFlow::Next
        }
    }

    #[test]
    fn every_location_lies_within_source() {
        let ctx = ASTContext::new();
        let body = include_str!("../../fixture/kitchen_sink.graphql");
        let document = Document::parse(&ctx, body).unwrap();

        let mut checker = SpanChecker {
            body_len: body.len(),
            ..SpanChecker::default()
        };
        document.visit(&mut (), &mut checker);
        assert_eq!(checker.fields, 20);
        assert!(checker.nodes > checker.fields);
    }

    #[test]
    fn parse_options() {
        let ctx = ASTContext::new();
        let document = Document::parse_with_options(&ctx, "{ a }", NO_LOCATION).unwrap();
        assert_eq!(document.location, None);
        let field = document.definitions[0].operation().unwrap().selection_set.selections[0]
            .field()
            .unwrap();
        assert_eq!(field.name.location, None);

        let options = ParseOptions {
            no_location: false,
            no_source: true,
        };
        let document = Document::parse_with_options(&ctx, "{ a }", options).unwrap();
        let location = document.location.unwrap();
        assert_eq!((location.start, location.end, location.source), (0, 5, None));
    }

    #[test]
    fn aliases_and_fragments() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc::indoc! {r#"
                query Q($flag: Boolean!) @live {
                    me: user {
                        ...UserFields
                        ... on User { id }
                        ... @include(if: $flag) { name }
                    }
                }

                fragment UserFields on User @defer {
                    id
                }
            "#},
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 2);

        let operation = document.operation(Some("Q")).unwrap();
        assert_eq!(operation.variable_definitions.children.len(), 1);
        assert_eq!(operation.directives.children[0].name.value, "live");

        let me = operation.selection_set.selections[0].field().unwrap();
        assert_eq!(me.alias.map(|alias| alias.value), Some("me"));
        assert_eq!(me.name.value, "user");
        assert_eq!(me.alias_or_name(), "me");

        let selections = &me.selection_set.as_ref().unwrap().selections;
        assert_eq!(
            selections[0].fragment_spread().unwrap().name.value,
            "UserFields"
        );
        let typed = selections[1].inline_fragment().unwrap();
        assert_eq!(typed.type_condition.map(|named| named.name), Some("User"));
        let untyped = selections[2].inline_fragment().unwrap();
        assert_eq!(untyped.type_condition, None);
        assert_eq!(untyped.directives.children[0].name.value, "include");

        let fragment = document.definitions[1].fragment().unwrap();
        assert_eq!(fragment.name.value, "UserFields");
        assert_eq!(fragment.type_condition.name, "User");
        assert_eq!(fragment.directives.children.len(), 1);
    }

    #[test]
    fn mutations() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "mutation { like(id: \"1\") { count } }").unwrap();
        let operation = document.operation(None).unwrap();
        assert_eq!(operation.operation, OperationKind::Mutation);
    }

    #[test]
    fn duplicate_input_object_field() {
        assert_eq!(
            parse_error_code("{ field(arg: {a: 1, a: 2}) }"),
            ParseErrorCode::DuplicateInputObjectField {
                name: "a".to_string()
            }
        );
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "{ field(arg: {a: 1, a: 2}) }").unwrap_err();
        assert_eq!(error.offset(), Some(20));
        assert!(Document::parse(&ctx, "{ field(arg: {a: {a: 1}, b: 2}) }").is_ok());
    }

    #[test]
    fn unexpected_tokens() {
        assert_eq!(parse_error_code(""), ParseErrorCode::UnexpectedToken);
        assert_eq!(parse_error_code("{}"), ParseErrorCode::UnexpectedToken);
        assert_eq!(
            parse_error_code("subscription { a }"),
            ParseErrorCode::UnexpectedToken
        );
        assert_eq!(
            parse_error_code("fragment on on User { a }"),
            ParseErrorCode::UnexpectedToken
        );
        assert_eq!(
            parse_error_code("query ($a: Int!!) { a }"),
            ParseErrorCode::UnexpectedToken
        );
        assert_eq!(parse_error_code("{ a(b:) }"), ParseErrorCode::UnexpectedToken);
        assert_eq!(parse_error_code("{ a } }"), ParseErrorCode::UnexpectedToken);

        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "query { a").unwrap_err();
        assert_eq!(error.message(), "Expected Name, found <EOF>");
        assert_eq!(error.offset(), Some(9));
    }

    #[test]
    fn lexing_errors_abort_parsing() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "{ a(b: \"unterminated) }").unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Lex(_)));
        assert_eq!(error.source().map(Source::name), Some("GraphQL"));
    }

    #[test]
    fn kitchen_sink() {
        let ctx = ASTContext::new();
        let query = include_str!("../../fixture/kitchen_sink.graphql");
        let document = Document::parse(&ctx, query).unwrap();
        assert_eq!(document.definitions.len(), 5);
    }
}
