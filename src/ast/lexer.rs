use super::ast::{ASTContext, Source};
use crate::error::{Error, ErrorKind, LexErrorCode, Result};
use logos::Logos;
use std::fmt;

/// The kind of a lexed [Token].
///
/// Punctuators carry no payload, while `Name`, `Int`, `Float`, and `String` tokens carry their
/// decoded literal as a [`TokenValue`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    EndOfFile,
    Bang,
    Dollar,
    ParenLeft,
    ParenRight,
    Spread,
    Colon,
    Equals,
    At,
    BracketLeft,
    BracketRight,
    BraceLeft,
    BraceRight,
    Pipe,
    Name,
    Int,
    Float,
    String,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TokenKind::EndOfFile => "<EOF>",
            TokenKind::Bang => "\"!\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::ParenLeft => "\"(\"",
            TokenKind::ParenRight => "\")\"",
            TokenKind::Spread => "\"...\"",
            TokenKind::Colon => "\":\"",
            TokenKind::Equals => "\"=\"",
            TokenKind::At => "\"@\"",
            TokenKind::BracketLeft => "\"[\"",
            TokenKind::BracketRight => "\"]\"",
            TokenKind::BraceLeft => "\"{\"",
            TokenKind::BraceRight => "\"}\"",
            TokenKind::Pipe => "\"|\"",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
        };
        f.write_str(kind)
    }
}

/// The decoded literal of a `Name`, `Int`, `Float`, or `String` token.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TokenValue<'a> {
    Name(&'a str),
    Int(i64),
    Float(f64),
    String(&'a str),
}

/// A single lexical token spanning `start..end` of its [Source].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: Option<TokenValue<'a>>,
}

impl<'a> Token<'a> {
    #[inline]
    fn punctuator(kind: TokenKind, start: usize, end: usize) -> Self {
        Token {
            kind,
            start,
            end,
            value: None,
        }
    }

    /// Returns the token's name literal if it's a `Name` token.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self.value {
            Some(TokenValue::Name(name)) => Some(name),
            _ => None,
        }
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(TokenValue::Name(name)) => write!(f, "Name \"{}\"", name),
            Some(TokenValue::Int(value)) => write!(f, "Int \"{}\"", value),
            Some(TokenValue::Float(value)) => write!(f, "Float \"{}\"", value),
            Some(TokenValue::String(value)) => write!(f, "String \"{}\"", value),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Logos, Debug, PartialEq)]
enum StringPart {
    #[regex(r#"[^\n\r\\"\x{2028}\x{2029}]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedFormFeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

/// A lexer over a single [Source] that remembers the position it has advanced to.
///
/// Tokens may also be read from any explicit offset using [`Lexer::read_token`], which doesn't
/// touch the remembered position. Decoded string literals that contain escape sequences are
/// allocated on the AST Context's arena.
pub struct Lexer<'a> {
    arena: &'a bumpalo::Bump,
    source: &'a Source,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(ctx: &'a ASTContext, source: &'a Source) -> Self {
        Lexer {
            arena: &ctx.arena,
            source,
            position: 0,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a Source {
        self.source
    }

    /// The offset the next call to [`Lexer::next_token`] starts scanning from.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Read the next token from the remembered position and advance past it.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        let token = self.read_token(self.position)?;
        self.position = token.end;
        Ok(token)
    }

    /// Read the token at or after `position`, skipping any insignificant whitespace and comments.
    ///
    /// A `position` past the end of the source reads the `EndOfFile` token, while a `position`
    /// inside of a multi-byte character fails with an `UnexpectedCharacter` error at the start of
    /// that character.
    pub fn read_token(&self, position: usize) -> Result<Token<'a>> {
        let body = self.source.body();
        let position = position.min(body.len());
        if !body.is_char_boundary(position) {
            let char_start = (0..position)
                .rev()
                .find(|index| body.is_char_boundary(*index))
                .unwrap_or(0);
            return Err(self.error(LexErrorCode::UnexpectedCharacter, char_start));
        }
        let start = skip_ignored(body, position);
        let byte = match body.as_bytes().get(start) {
            Some(byte) => *byte,
            None => return Ok(Token::punctuator(TokenKind::EndOfFile, start, start)),
        };
        let kind = match byte {
            b'!' => TokenKind::Bang,
            b'$' => TokenKind::Dollar,
            b'(' => TokenKind::ParenLeft,
            b')' => TokenKind::ParenRight,
            b':' => TokenKind::Colon,
            b'=' => TokenKind::Equals,
            b'@' => TokenKind::At,
            b'[' => TokenKind::BracketLeft,
            b']' => TokenKind::BracketRight,
            b'{' => TokenKind::BraceLeft,
            b'|' => TokenKind::Pipe,
            b'}' => TokenKind::BraceRight,
            b'.' => return self.read_spread(start),
            b'"' => return self.read_string(start),
            b'-' | b'0'..=b'9' => return self.read_number(start),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => return Ok(self.read_name(start)),
            _ => return Err(self.error(LexErrorCode::UnexpectedCharacter, start)),
        };
        Ok(Token::punctuator(kind, start, start + 1))
    }

    #[inline]
    fn byte(&self, position: usize) -> Option<u8> {
        self.source.body().as_bytes().get(position).copied()
    }

    fn error(&self, code: LexErrorCode, offset: usize) -> Error {
        Error::syntax(ErrorKind::Lex(code), self.source, offset, None)
    }

    fn read_spread(&self, start: usize) -> Result<Token<'a>> {
        match (self.byte(start + 1), self.byte(start + 2)) {
            (Some(b'.'), Some(b'.')) => {
                Ok(Token::punctuator(TokenKind::Spread, start, start + 3))
            }
            (Some(b'.'), _) => Err(self.error(LexErrorCode::UnexpectedCharacter, start + 2)),
            // A dot not followed by another can only start a number missing its integer part
            _ => Err(self.error(LexErrorCode::InvalidNumber, start)),
        }
    }

    fn read_name(&self, start: usize) -> Token<'a> {
        let body = self.source.body();
        let end = body.as_bytes()[start..]
            .iter()
            .position(|byte| !matches!(byte, b'_' | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'))
            .map_or(body.len(), |length| start + length);
        Token {
            kind: TokenKind::Name,
            start,
            end,
            value: Some(TokenValue::Name(&body[start..end])),
        }
    }

    /// Consume one or more digits starting at `position` and return the offset after them.
    fn read_digits(&self, position: usize) -> Result<usize> {
        let mut end = position;
        while let Some(b'0'..=b'9') = self.byte(end) {
            end += 1;
        }
        if end == position {
            Err(self.error(LexErrorCode::InvalidNumber, position))
        } else {
            Ok(end)
        }
    }

    fn read_number(&self, start: usize) -> Result<Token<'a>> {
        let mut position = start;
        if let Some(b'-') = self.byte(position) {
            position += 1;
        }

        match self.byte(position) {
            Some(b'0') => {
                position += 1;
                // A run of zeros still denotes zero, any other digit is a leading zero
                while let Some(b'0') = self.byte(position) {
                    position += 1;
                }
                if let Some(b'1'..=b'9') = self.byte(position) {
                    return Err(self.error(LexErrorCode::InvalidNumber, position));
                }
            }
            Some(b'1'..=b'9') => position = self.read_digits(position)?,
            _ => return Err(self.error(LexErrorCode::InvalidNumber, position)),
        }

        let mut is_float = false;
        if let Some(b'.') = self.byte(position) {
            is_float = true;
            position = self.read_digits(position + 1)?;
            if let Some(b'e' | b'E') = self.byte(position) {
                position += 1;
                if let Some(b'-') = self.byte(position) {
                    position += 1;
                }
                position = self.read_digits(position)?;
            }
        }

        let text = self.source.body()[start..position].as_bytes();
        let (kind, value) = if is_float {
            let value = lexical_core::parse::<f64>(text)
                .map_err(|_| self.error(LexErrorCode::InvalidNumber, start))?;
            (TokenKind::Float, TokenValue::Float(value))
        } else {
            let value = lexical_core::parse::<i64>(text)
                .map_err(|_| self.error(LexErrorCode::InvalidNumber, start))?;
            (TokenKind::Int, TokenValue::Int(value))
        };

        Ok(Token {
            kind,
            start,
            end: position,
            value: Some(value),
        })
    }

    fn read_string(&self, start: usize) -> Result<Token<'a>> {
        let body = self.source.body();
        let content_start = start + 1;
        let remainder = &body[content_start..];

        // Strings without escape sequences are sliced straight out of the source
        for (index, c) in remainder.char_indices() {
            match c {
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => {
                    return Err(self.error(LexErrorCode::UnterminatedString, content_start + index))
                }
                '\\' => {
                    let output = String::from(&remainder[..index]);
                    return self.read_escaped_string(start, content_start + index, output);
                }
                '"' => {
                    return Ok(Token {
                        kind: TokenKind::String,
                        start,
                        end: content_start + index + 1,
                        value: Some(TokenValue::String(&remainder[..index])),
                    })
                }
                _ => {}
            }
        }

        Err(self.error(LexErrorCode::UnterminatedString, body.len()))
    }

    fn read_escaped_string(
        &self,
        start: usize,
        position: usize,
        mut output: String,
    ) -> Result<Token<'a>> {
        let body = self.source.body();
        let mut sublex = StringPart::lexer(&body[position..]);
        while let Some(part) = sublex.next() {
            match part {
                StringPart::Text => output.push_str(sublex.slice()),
                StringPart::EscapedQuote => output.push('"'),
                StringPart::EscapedBackslash => output.push('\\'),
                StringPart::EscapedSlash => output.push('/'),
                StringPart::EscapedBackspace => output.push('\u{8}'),
                StringPart::EscapedFormFeed => output.push('\u{c}'),
                StringPart::EscapedNewline => output.push('\n'),
                StringPart::EscapedReturn => output.push('\r'),
                StringPart::EscapedTab => output.push('\t'),
                StringPart::EscapedCodepoint => {
                    use lexical_core::*;
                    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                    const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
                    let c = parse_with_options::<u32, FORMAT>(
                        sublex.slice()[2..].as_bytes(),
                        &OPTIONS,
                    )
                    .ok()
                    .and_then(std::char::from_u32)
                    .ok_or_else(|| {
                        self.error(
                            LexErrorCode::BadCharacterEscapeSequence,
                            position + sublex.span().start,
                        )
                    })?;
                    output.push(c);
                }
                StringPart::EndString => {
                    return Ok(Token {
                        kind: TokenKind::String,
                        start,
                        end: position + sublex.span().end,
                        value: Some(TokenValue::String(self.arena.alloc_str(&output))),
                    });
                }
                StringPart::Error => {
                    let code = if sublex.slice().starts_with('\\') {
                        LexErrorCode::BadCharacterEscapeSequence
                    } else {
                        LexErrorCode::UnterminatedString
                    };
                    return Err(self.error(code, position + sublex.span().start));
                }
            }
        }
        Err(self.error(LexErrorCode::UnterminatedString, body.len()))
    }
}

/// Returns the offset of the first significant character at or after `position`.
fn skip_ignored(body: &str, position: usize) -> usize {
    let mut in_comment = false;
    for (index, c) in body[position..].char_indices() {
        match c {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' if in_comment => in_comment = false,
            _ if in_comment => {}
            '#' => in_comment = true,
            ' ' | ',' | '\t'..='\r' | '\u{2028}' | '\u{2029}' => {}
            _ => return position + index,
        }
    }
    body.len()
}

/// Read a single token from `source` starting at `position`.
///
/// This is the stateless counterpart to [`Lexer::next_token`].
pub fn next<'a>(ctx: &'a ASTContext, source: &'a Source, position: usize) -> Result<Token<'a>> {
    Lexer::new(ctx, source).read_token(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one<'a>(ctx: &'a ASTContext, body: &str) -> Result<Token<'a>> {
        let source = ctx.alloc(Source::new(body));
        next(ctx, source, 0)
    }

    fn lex_all<'a>(ctx: &'a ASTContext, body: &str) -> Vec<Token<'a>> {
        let source = ctx.alloc(Source::new(body));
        let mut lexer = Lexer::new(ctx, source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            tokens.push(token);
            if token.kind == TokenKind::EndOfFile {
                return tokens;
            }
        }
    }

    fn lex_error(body: &str) -> (LexErrorCode, usize) {
        let ctx = ASTContext::new();
        let error = lex_one(&ctx, body).unwrap_err();
        match error.kind() {
            ErrorKind::Lex(code) => (*code, error.offset().unwrap()),
            kind => panic!("expected a lexing error, got {:?}", kind),
        }
    }

    #[test]
    fn skips_whitespace_and_comments() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "   \n  \t   foo   \n   \t    ").unwrap();
        assert_eq!(
            token,
            Token {
                kind: TokenKind::Name,
                start: 10,
                end: 13,
                value: Some(TokenValue::Name("foo")),
            }
        );

        let token = lex_one(&ctx, "    # comment\n    foo#bar\n").unwrap();
        assert_eq!(token.start, 18);
        assert_eq!(token.name(), Some("foo"));

        let token = lex_one(&ctx, ",,,foo,,,").unwrap();
        assert_eq!((token.start, token.end), (3, 6));

        let token = lex_one(&ctx, "\u{2028}\u{2029}foo").unwrap();
        assert_eq!(token.name(), Some("foo"));

        let token = lex_one(&ctx, "# c\u{2028}foo").unwrap();
        assert_eq!((token.kind, token.start, token.end), (TokenKind::Name, 6, 9));
        let token = lex_one(&ctx, "# c\u{2029}\r# d\nfoo").unwrap();
        assert_eq!(token.name(), Some("foo"));
    }

    #[test]
    fn read_from_any_position() {
        let ctx = ASTContext::new();
        let source = ctx.alloc(Source::new("ab \u{e9} c"));
        let lexer = Lexer::new(&ctx, source);

        let token = lexer.read_token(1).unwrap();
        assert_eq!((token.kind, token.start, token.end), (TokenKind::Name, 1, 2));

        let token = lexer.read_token(42).unwrap();
        assert_eq!((token.kind, token.start, token.end), (TokenKind::EndOfFile, 7, 7));

        let error = lexer.read_token(4).unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::Lex(LexErrorCode::UnexpectedCharacter));
        assert_eq!(error.offset(), Some(3));

        let token = next(&ctx, source, 5).unwrap();
        assert_eq!((token.kind, token.start, token.end), (TokenKind::Name, 6, 7));
    }

    #[test]
    fn end_of_file() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "  # trailing comment").unwrap();
        assert_eq!(token.kind, TokenKind::EndOfFile);
        assert_eq!((token.start, token.end), (20, 20));
    }

    #[test]
    fn punctuators() {
        let ctx = ASTContext::new();
        let kinds: Vec<TokenKind> = lex_all(&ctx, "! $ ( ) ... : = @ [ ] { | }")
            .into_iter()
            .map(|token| token.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Bang,
                TokenKind::Dollar,
                TokenKind::ParenLeft,
                TokenKind::ParenRight,
                TokenKind::Spread,
                TokenKind::Colon,
                TokenKind::Equals,
                TokenKind::At,
                TokenKind::BracketLeft,
                TokenKind::BracketRight,
                TokenKind::BraceLeft,
                TokenKind::Pipe,
                TokenKind::BraceRight,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn spread_needs_three_dots() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "...Foo").unwrap();
        assert_eq!((token.kind, token.start, token.end), (TokenKind::Spread, 0, 3));
        assert_eq!(lex_error("..").0, LexErrorCode::UnexpectedCharacter);
        assert_eq!(lex_error(".").0, LexErrorCode::InvalidNumber);
        assert_eq!(lex_error(".a"), (LexErrorCode::InvalidNumber, 0));
        assert_eq!(lex_error("..a"), (LexErrorCode::UnexpectedCharacter, 2));
    }

    #[test]
    fn names() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "_under_score9 rest").unwrap();
        assert_eq!(token.name(), Some("_under_score9"));
        assert_eq!(token.end, 13);
    }

    #[test]
    fn integers() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "4").unwrap();
        assert_eq!(token.value, Some(TokenValue::Int(4)));
        let token = lex_one(&ctx, "-42").unwrap();
        assert_eq!(token.value, Some(TokenValue::Int(-42)));
        let token = lex_one(&ctx, "00").unwrap();
        assert_eq!(token.kind, TokenKind::Int);
        assert_eq!(token.value, Some(TokenValue::Int(0)));
        assert_eq!(token.end, 2);
    }

    #[test]
    fn floats() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "4.123").unwrap();
        assert_eq!(token.value, Some(TokenValue::Float(4.123)));

        let token = lex_one(&ctx, "-1.123e-4").unwrap();
        assert_eq!(token.kind, TokenKind::Float);
        match token.value {
            Some(TokenValue::Float(value)) => assert!((value - -0.0001123).abs() < 1e-12),
            value => panic!("expected a float, got {:?}", value),
        }

        let token = lex_one(&ctx, "1.5E3").unwrap();
        assert_eq!(token.value, Some(TokenValue::Float(1500.0)));
    }

    #[test]
    fn numbers_followed_by_names() {
        let ctx = ASTContext::new();
        let tokens = lex_all(&ctx, "5.3andwemoveon");
        assert_eq!(tokens[0].value, Some(TokenValue::Float(5.3)));
        assert_eq!(tokens[0].end, 3);
        assert_eq!(tokens[1].start, 3);
        assert_eq!(tokens[1].name(), Some("andwemoveon"));

        let tokens = lex_all(&ctx, "5andwemoveon");
        assert_eq!(tokens[0].value, Some(TokenValue::Int(5)));
        assert_eq!(tokens[1].name(), Some("andwemoveon"));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(lex_error("-"), (LexErrorCode::InvalidNumber, 1));
        assert_eq!(lex_error("-a"), (LexErrorCode::InvalidNumber, 1));
        assert_eq!(lex_error("01"), (LexErrorCode::InvalidNumber, 1));
        assert_eq!(lex_error("1."), (LexErrorCode::InvalidNumber, 2));
        assert_eq!(lex_error("1.a"), (LexErrorCode::InvalidNumber, 2));
        assert_eq!(lex_error("1.5e"), (LexErrorCode::InvalidNumber, 4));
        assert_eq!(
            lex_error("99999999999999999999").0,
            LexErrorCode::InvalidNumber
        );
    }

    #[test]
    fn strings() {
        let ctx = ASTContext::new();
        let token = lex_one(&ctx, "\"simple\"").unwrap();
        assert_eq!(token.value, Some(TokenValue::String("simple")));
        assert_eq!((token.start, token.end), (0, 8));

        let token = lex_one(&ctx, " \" white space \" ").unwrap();
        assert_eq!(token.value, Some(TokenValue::String(" white space ")));

        let token = lex_one(&ctx, "\"hello \\u0064olly\"").unwrap();
        assert_eq!(token.value, Some(TokenValue::String("hello dolly")));
        assert_eq!(token.end, 18);

        let token = lex_one(&ctx, r#""escaped \n\r\b\t\f\/\\\"""#).unwrap();
        assert_eq!(
            token.value,
            Some(TokenValue::String("escaped \n\r\u{8}\t\u{c}/\\\""))
        );
    }

    #[test]
    fn invalid_strings() {
        assert_eq!(lex_error("\"hello"), (LexErrorCode::UnterminatedString, 6));
        assert_eq!(
            lex_error("\"multi\nline\""),
            (LexErrorCode::UnterminatedString, 6)
        );
        assert_eq!(
            lex_error("\"esc\\n\rape\""),
            (LexErrorCode::UnterminatedString, 6)
        );
        assert_eq!(
            lex_error("\"bad \\x esc\""),
            (LexErrorCode::BadCharacterEscapeSequence, 5)
        );
        assert_eq!(
            lex_error("\"bad \\u00 esc\""),
            (LexErrorCode::BadCharacterEscapeSequence, 5)
        );
        assert_eq!(
            lex_error("\"\\u0064 unterminated"),
            (LexErrorCode::UnterminatedString, 20)
        );
    }

    #[test]
    fn unexpected_characters() {
        assert_eq!(lex_error("?"), (LexErrorCode::UnexpectedCharacter, 0));
        assert_eq!(lex_error("  \u{203B}"), (LexErrorCode::UnexpectedCharacter, 2));
    }

    #[test]
    fn error_carries_source() {
        let ctx = ASTContext::new();
        let error = lex_one(&ctx, "?").unwrap_err();
        assert_eq!(error.source().map(|source| source.body()), Some("?"));
        assert_eq!(error.message(), "Unexpected character");
    }
}
