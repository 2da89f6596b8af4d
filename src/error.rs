//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate. Lexing, parsing
//! and validation all convert their failures into it, and the [`ErrorKind`] tells them apart.

use crate::ast::Source;
use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For lexing and parsing the
/// context string is populated with a snippet of the source text, while for validation with
/// multiple failures the context is populated with a list of errors.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) description: Option<String>,
    pub(crate) location: Option<SourcePosition>,
    pub(crate) context: Option<String>,
    pub(crate) kind: ErrorKind,
    pub(crate) source: Option<Source>,
    pub(crate) offset: Option<usize>,
}

/// Classifies an [Error] by the stage that raised it.
#[derive(Debug, PartialEq, Clone)]
pub enum ErrorKind {
    /// Malformed source text found while scanning tokens.
    Lex(LexErrorCode),
    /// A grammar violation found while parsing tokens into an AST.
    Parse(ParseErrorCode),
    /// A single validation rule violation.
    Validation(DocumentValidationError),
    /// Two or more validation rule violations, in rule order and then document order.
    MultipleErrors(Vec<DocumentValidationError>),
    /// Any other error that isn't tied to a source text, e.g. a failed operation lookup.
    GraphQL,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum LexErrorCode {
    UnexpectedCharacter,
    InvalidNumber,
    UnterminatedString,
    BadCharacterEscapeSequence,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum ParseErrorCode {
    UnexpectedToken,
    DuplicateInputObjectField { name: String },
}

/// A name as it occurred in a document, along with its span if locations were recorded.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NameOccurrence {
    pub name: String,
    pub span: Option<Span>,
}

/// A semantic rule violation reported by a validation rule.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum DocumentValidationError {
    /// Two operations share a name. Both occurrences are carried, first one first.
    DuplicateOperationNames {
        name1: NameOccurrence,
        name2: NameOccurrence,
    },
    DuplicateArgumentNames {
        name: String,
    },
    VariableIsNonInputType {
        variable: String,
        type_name: String,
    },
    AnonymousOperationNotAlone,
    DuplicateFragmentNames {
        name: String,
    },
    DuplicateVariableNames {
        name: String,
    },
    UnknownFragment {
        name: String,
    },
    UnusedFragment {
        name: String,
    },
    UndefinedField {
        field: String,
        type_name: String,
    },
}

impl fmt::Display for LexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorCode::UnexpectedCharacter => write!(f, "Unexpected character"),
            LexErrorCode::InvalidNumber => write!(f, "Invalid number"),
            LexErrorCode::UnterminatedString => write!(f, "Unterminated string"),
            LexErrorCode::BadCharacterEscapeSequence => {
                write!(f, "Bad character escape sequence")
            }
        }
    }
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorCode::UnexpectedToken => write!(f, "Unexpected token"),
            ParseErrorCode::DuplicateInputObjectField { name } => {
                write!(f, "Duplicate input object field {}", name)
            }
        }
    }
}

impl fmt::Display for DocumentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DocumentValidationError::*;
        match self {
            DuplicateOperationNames { name1, .. } => {
                write!(f, "There can be only one operation named \"{}\"", name1.name)
            }
            DuplicateArgumentNames { name } => {
                write!(f, "There can be only one argument named \"{}\"", name)
            }
            VariableIsNonInputType {
                variable,
                type_name,
            } => write!(
                f,
                "Variable \"${}\" cannot be non-input type \"{}\"",
                variable, type_name
            ),
            AnonymousOperationNotAlone => {
                write!(f, "This anonymous operation must be the only defined operation")
            }
            DuplicateFragmentNames { name } => {
                write!(f, "There can be only one fragment named \"{}\"", name)
            }
            DuplicateVariableNames { name } => {
                write!(f, "There can be only one variable named \"${}\"", name)
            }
            UnknownFragment { name } => write!(f, "Unknown fragment \"{}\"", name),
            UnusedFragment { name } => write!(f, "Fragment \"{}\" is never used", name),
            UndefinedField { field, type_name } => write!(
                f,
                "Cannot query field \"{}\" on type \"{}\"",
                field, type_name
            ),
        }
    }
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, kind: Option<ErrorKind>) -> Self {
        Self {
            message: message.into(),
            description: None,
            location: None,
            context: None,
            kind: kind.unwrap_or(ErrorKind::GraphQL),
            source: None,
            offset: None,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<SourcePosition>,
        context: S,
        kind: Option<ErrorKind>,
    ) -> Self {
        Self {
            message: message.into(),
            description: None,
            location,
            context: Some(context.into()),
            kind: kind.unwrap_or(ErrorKind::GraphQL),
            source: None,
            offset: None,
        }
    }

    /// Create a lexing or parsing Error positioned at `offset` inside `source`.
    pub(crate) fn syntax(
        kind: ErrorKind,
        source: &Source,
        offset: usize,
        description: Option<String>,
    ) -> Self {
        let body = source.body();
        let offset = offset.min(body.len());
        let message = match (&kind, &description) {
            (_, Some(description)) => description.clone(),
            (ErrorKind::Lex(code), None) => code.to_string(),
            (ErrorKind::Parse(code), None) => code.to_string(),
            _ => String::from("Invalid source text"),
        };
        let end = body[offset..]
            .chars()
            .next()
            .map_or(offset, |c| offset + c.len_utf8());
        Self {
            message,
            description,
            location: Some(get_location(body, offset)),
            context: Some(print_span(body, offset..end)),
            kind,
            source: Some(source.clone()),
            offset: Some(offset),
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the human-readable description that was attached when the error was raised.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the line and column of the current error.
    pub fn location(&self) -> &Option<SourcePosition> {
        &self.location
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the [Source] the error was raised on, for lexing and parsing errors.
    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// Returns the byte offset into the [Source] at which the error was detected.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns every validation error this error carries, which is empty for non-validation
    /// errors.
    pub fn validation_errors(&self) -> &[DocumentValidationError] {
        match &self.kind {
            ErrorKind::Validation(error) => std::slice::from_ref(error),
            ErrorKind::MultipleErrors(errors) => errors,
            _ => &[],
        }
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.kind {
            ErrorKind::Lex(_) | ErrorKind::Parse(_) => match self.location {
                Some(ref position) => format!(
                    "Syntax Error: {} ({}:{})",
                    self.message, position.line, position.column
                ),
                None => format!("Syntax Error: {}", self.message),
            },
            _ => format!("GraphQL Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

/// Converts the collected errors of a validation run into a result.
///
/// A single error is surfaced on its own while several are wrapped into
/// [`ErrorKind::MultipleErrors`].
pub(crate) fn validation_result(mut errors: Vec<DocumentValidationError>) -> Result<()> {
    match errors.len() {
        0 => Ok(()),
        1 => {
            let error = errors.remove(0);
            Err(Error::new(
                error.to_string(),
                Some(ErrorKind::Validation(error)),
            ))
        }
        _ => {
            let mut context = String::new();
            for (index, error) in errors.iter().enumerate() {
                if index > 0 {
                    context.push('\n');
                }
                context.push_str("- ");
                context.push_str(&error.to_string());
            }
            Err(Error::new_with_context(
                String::from("Document failed validation"),
                None,
                context,
                Some(ErrorKind::MultipleErrors(errors)),
            ))
        }
    }
}

pub(crate) fn print_span(source: &str, span: Span) -> String {
    let mut out = String::new();

    let start = source[..span.start]
        .rfind('\n')
        .and_then(|start| source[..start].rfind('\n'))
        .map_or(0, |idx| idx + 1);

    let end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |idx| idx + span.end);

    let start_line = source[..start].matches('\n').count() + 1;
    let snippet = &source[start..end];
    let line_num_pad = (start_line + snippet.lines().count().max(1) - 1)
        .to_string()
        .len();
    for (index, line) in snippet.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (start_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line);
    }
    if !source[span.start..span.end].contains('\n') {
        let line_start = source[..span.start].rfind('\n').map_or(0, |idx| idx + 1);
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(source[line_start..span.start].chars().count()));
        out.push_str(&"^".repeat(source[span.start..span.end].chars().count().max(1)));
    };

    out
}

/// A one-based line and column position inside a source text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

pub(crate) fn get_location(source: &str, offset: usize) -> SourcePosition {
    let prefix = &source[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |idx| idx + 1);
    SourcePosition {
        line,
        column: prefix[line_start..].chars().count() + 1,
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_one_based() {
        let source = "query {\n  field\n}";
        assert_eq!(get_location(source, 0), SourcePosition { line: 1, column: 1 });
        assert_eq!(get_location(source, 10), SourcePosition { line: 2, column: 3 });
    }

    #[test]
    fn span_snippet_points_at_offset() {
        let source = "{\n  field(\n}";
        let snippet = print_span(source, 11..12);
        assert_eq!(snippet, " 2 |   field(\n 3 | }\n   | ^");
    }

    #[test]
    fn single_validation_error_is_bare() {
        let error = validation_result(vec![DocumentValidationError::UnknownFragment {
            name: "Foo".into(),
        }])
        .unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Validation(_)));
        assert_eq!(error.validation_errors().len(), 1);
        assert_eq!(
            error.print(false),
            "GraphQL Error: Unknown fragment \"Foo\""
        );
    }

    #[test]
    fn several_validation_errors_are_composite() {
        let error = validation_result(vec![
            DocumentValidationError::AnonymousOperationNotAlone,
            DocumentValidationError::DuplicateArgumentNames {
                name: "arg1".into(),
            },
        ])
        .unwrap_err();
        match error.kind() {
            ErrorKind::MultipleErrors(errors) => assert_eq!(errors.len(), 2),
            kind => panic!("unexpected error kind {:?}", kind),
        }
        assert_eq!(
            error.print(true),
            "GraphQL Error: Document failed validation\n\
             - This anonymous operation must be the only defined operation\n\
             - There can be only one argument named \"arg1\""
        );
    }
}
