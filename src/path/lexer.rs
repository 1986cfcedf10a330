//! Lexer for path-data text using logos

use logos::Logos;

use crate::error::Span;

use super::command::Mode;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\x0C,]+")]
pub enum Token {
    #[token("M", |_| Mode::Absolute)]
    #[token("m", |_| Mode::Relative)]
    MoveTo(Mode),
    #[token("L", |_| Mode::Absolute)]
    #[token("l", |_| Mode::Relative)]
    LineTo(Mode),
    #[token("H", |_| Mode::Absolute)]
    #[token("h", |_| Mode::Relative)]
    HorizontalTo(Mode),
    #[token("V", |_| Mode::Absolute)]
    #[token("v", |_| Mode::Relative)]
    VerticalTo(Mode),
    #[token("C", |_| Mode::Absolute)]
    #[token("c", |_| Mode::Relative)]
    CubicTo(Mode),
    #[token("S", |_| Mode::Absolute)]
    #[token("s", |_| Mode::Relative)]
    SmoothCubicTo(Mode),
    #[token("Q", |_| Mode::Absolute)]
    #[token("q", |_| Mode::Relative)]
    QuadraticTo(Mode),
    #[token("T", |_| Mode::Absolute)]
    #[token("t", |_| Mode::Relative)]
    SmoothQuadraticTo(Mode),
    #[token("A", |_| Mode::Absolute)]
    #[token("a", |_| Mode::Relative)]
    ArcTo(Mode),
    #[token("Z", |_| Mode::Absolute)]
    #[token("z", |_| Mode::Relative)]
    Close(Mode),

    // Sign, digits, optional fraction, optional exponent: "-.5", "1e-3", "4."
    // Literals that overflow to infinity are rejected.
    #[regex(r"[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?", finite_number)]
    Number(f64),
}

fn finite_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
}

impl Token {
    /// The command letter this token was written with, if it is a command
    pub fn letter(&self) -> Option<char> {
        let (upper, mode) = match self {
            Token::MoveTo(mode) => ('M', mode),
            Token::LineTo(mode) => ('L', mode),
            Token::HorizontalTo(mode) => ('H', mode),
            Token::VerticalTo(mode) => ('V', mode),
            Token::CubicTo(mode) => ('C', mode),
            Token::SmoothCubicTo(mode) => ('S', mode),
            Token::QuadraticTo(mode) => ('Q', mode),
            Token::SmoothQuadraticTo(mode) => ('T', mode),
            Token::ArcTo(mode) => ('A', mode),
            Token::Close(mode) => ('Z', mode),
            Token::Number(_) => return None,
        };
        Some(match mode {
            Mode::Absolute => upper,
            Mode::Relative => upper.to_ascii_lowercase(),
        })
    }
}

/// Lex path data into tokens with spans.
///
/// Unlike a permissive lexer, any unrecognised character is reported with its
/// span so malformed path data never renders silently.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, Span> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => Err(span),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_command_letters_carry_mode() {
        assert_eq!(
            tokens("M m Z z"),
            vec![
                Token::MoveTo(Mode::Absolute),
                Token::MoveTo(Mode::Relative),
                Token::Close(Mode::Absolute),
                Token::Close(Mode::Relative),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("42 3.25 -10 .5 4. 8.11624501e-16 1E3"),
            vec![
                Token::Number(42.0),
                Token::Number(3.25),
                Token::Number(-10.0),
                Token::Number(0.5),
                Token::Number(4.0),
                Token::Number(8.11624501e-16),
                Token::Number(1000.0),
            ]
        );
    }

    #[test]
    fn test_compact_numbers_split_on_sign_and_second_dot() {
        assert_eq!(
            tokens("1-2.5.5"),
            vec![Token::Number(1.0), Token::Number(-2.5), Token::Number(0.5)]
        );
    }

    #[test]
    fn test_commas_and_letters_without_separators() {
        assert_eq!(
            tokens("M10,2L3,4"),
            vec![
                Token::MoveTo(Mode::Absolute),
                Token::Number(10.0),
                Token::Number(2.0),
                Token::LineTo(Mode::Absolute),
                Token::Number(3.0),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_invalid_character_reports_span() {
        assert_eq!(lex("M1,1 X2").unwrap_err(), 5..6);
    }

    #[test]
    fn test_letter() {
        assert_eq!(Token::ArcTo(Mode::Relative).letter(), Some('a'));
        assert_eq!(Token::Number(1.0).letter(), None);
    }
}
