//! Error types for parsing values and path data

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised when a value cannot be built from its parts or its text form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("length magnitude must be finite, got {0}")]
    NonFinite(f64),

    #[error("invalid length '{0}'")]
    InvalidLength(String),

    #[error("invalid paint '{0}'")]
    InvalidPaint(String),

    #[error("invalid viewBox '{0}': expected four numbers")]
    InvalidViewBox(String),

    #[error("invalid attribute name '{0}'")]
    InvalidAttributeName(String),

    #[error("path operand must be finite, got {0}")]
    NonFiniteOperand(f64),
}

/// Errors raised when looking up an icon by name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown icon '{name}'{}", did_you_mean(suggestions))]
    UnknownIcon {
        name: String,
        suggestions: Vec<String>,
    },
}

impl CatalogError {
    /// Create an unknown icon error with suggestions
    pub fn unknown(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownIcon {
            name: name.into(),
            suggestions,
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Errors raised while reading path-data text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathDataError {
    #[error("invalid character in path data at {span:?}")]
    InvalidCharacter { span: Span },

    #[error("path data error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl PathDataError {
    /// Byte range of the offending input
    pub fn span(&self) -> &Span {
        match self {
            PathDataError::InvalidCharacter { span } => span,
            PathDataError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().clone();
        let message = match self {
            PathDataError::InvalidCharacter { .. } => "invalid character".to_string(),
            PathDataError::Syntax {
                message, expected, ..
            } => {
                if expected.is_empty() {
                    message.clone()
                } else {
                    format!("{}\nExpected: {}", message, expected.join(", "))
                }
            }
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("malformed path data")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::path::lexer::Token>> for PathDataError {
    fn from(err: chumsky::error::Rich<'a, crate::path::lexer::Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        PathDataError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::path::lexer::Token) -> String {
    use crate::path::lexer::Token;
    match tok {
        Token::Number(n) => format!("number {}", n),
        other => match other.letter() {
            Some(letter) => format!("command '{}'", letter),
            None => format!("{:?}", other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_error_messages() {
        assert_eq!(
            ValueError::InvalidLength("12em".into()).to_string(),
            "invalid length '12em'"
        );
        assert_eq!(
            ValueError::NonFinite(f64::INFINITY).to_string(),
            "length magnitude must be finite, got inf"
        );
    }

    #[test]
    fn test_catalog_error_lists_suggestions() {
        let err = CatalogError::unknown("clse", vec!["close".to_string()]);
        assert_eq!(err.to_string(), "unknown icon 'clse' (did you mean close?)");
        assert_eq!(
            CatalogError::unknown("zzz", vec![]).to_string(),
            "unknown icon 'zzz'"
        );
    }

    #[test]
    fn test_format_includes_message_and_expected() {
        let err = PathDataError::Syntax {
            span: 3..4,
            message: "Unexpected command 'L'".to_string(),
            expected: vec!["number".to_string()],
        };
        let report = err.format("M10L5,5", "inline");
        assert!(report.contains("malformed path data"));
        assert!(report.contains("Unexpected command 'L'"));
        assert!(report.contains("Expected: number"));
    }
}
