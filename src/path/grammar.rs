//! Path-data parser using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::PathDataError;

use super::command::{Mode, PathCommand, Point, Segment};
use super::lexer::{lex, Token};

/// Parse path-data text into commands.
///
/// Separators may be commas or whitespace and may be omitted where the
/// grammar allows (`M10-2L3.5.5`). Extra operand groups after a command
/// repeat it; after `M`/`m` they are line-to commands in the same mode.
pub fn parse(input: &str) -> Result<Vec<PathCommand>, PathDataError> {
    let len = input.len();

    let tokens = lex(input).map_err(|span| PathDataError::InvalidCharacter { span })?;
    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));

    let token_stream =
        Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    path_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| match errs.into_iter().next() {
            Some(err) => err.into(),
            None => PathDataError::Syntax {
                span: 0..len,
                message: "malformed path data".to_string(),
                expected: vec![],
            },
        })
}

/// Expand one command letter with its operand groups into commands
fn expand<T>(
    mode: Mode,
    groups: Vec<T>,
    mut segment: impl FnMut(T) -> Segment,
) -> Vec<PathCommand> {
    groups
        .into_iter()
        .map(|group| PathCommand {
            mode,
            segment: segment(group),
        })
        .collect()
}

fn path_parser<'a, I>() -> impl Parser<'a, I, Vec<PathCommand>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    };

    let point = number
        .clone()
        .then(number.clone())
        .map(|(x, y)| Point::new(x, y));

    let flag = number.clone().try_map(|n, span| {
        if n == 0.0 {
            Ok(false)
        } else if n == 1.0 {
            Ok(true)
        } else {
            Err(Rich::custom(span, format!("arc flag must be 0 or 1, found {}", n)))
        }
    });

    // The first pair after a moveto moves, the rest draw lines
    let move_to = select! { Token::MoveTo(mode) => mode }
        .then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, points)| {
            let mut first = true;
            expand(mode, points, |p| {
                if std::mem::take(&mut first) {
                    Segment::MoveTo(p)
                } else {
                    Segment::LineTo(p)
                }
            })
        });

    let line_to = select! { Token::LineTo(mode) => mode }
        .then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, points)| expand(mode, points, Segment::LineTo));

    let horizontal_to = select! { Token::HorizontalTo(mode) => mode }
        .then(number.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, xs)| expand(mode, xs, Segment::HorizontalLineTo));

    let vertical_to = select! { Token::VerticalTo(mode) => mode }
        .then(number.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, ys)| expand(mode, ys, Segment::VerticalLineTo));

    let cubic_group = point
        .clone()
        .then(point.clone())
        .then(point.clone())
        .map(|((control1, control2), end)| Segment::CubicTo {
            control1,
            control2,
            end,
        });
    let cubic_to = select! { Token::CubicTo(mode) => mode }
        .then(cubic_group.repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, segments)| expand(mode, segments, |s| s));

    let smooth_cubic_group = point
        .clone()
        .then(point.clone())
        .map(|(control2, end)| Segment::SmoothCubicTo { control2, end });
    let smooth_cubic_to = select! { Token::SmoothCubicTo(mode) => mode }
        .then(smooth_cubic_group.repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, segments)| expand(mode, segments, |s| s));

    let quadratic_group = point
        .clone()
        .then(point.clone())
        .map(|(control, end)| Segment::QuadraticTo { control, end });
    let quadratic_to = select! { Token::QuadraticTo(mode) => mode }
        .then(quadratic_group.repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, segments)| expand(mode, segments, |s| s));

    let smooth_quadratic_to = select! { Token::SmoothQuadraticTo(mode) => mode }
        .then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, points)| expand(mode, points, Segment::SmoothQuadraticTo));

    let arc_group = number
        .clone()
        .then(number.clone())
        .then(number.clone())
        .then(flag.clone())
        .then(flag)
        .then(point.clone())
        .map(
            |(((((rx, ry), x_axis_rotation), large_arc), sweep), end)| Segment::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            },
        );
    let arc_to = select! { Token::ArcTo(mode) => mode }
        .then(arc_group.repeated().at_least(1).collect::<Vec<_>>())
        .map(|(mode, segments)| expand(mode, segments, |s| s));

    let close = select! { Token::Close(mode) => mode }.map(|mode| {
        vec![PathCommand {
            mode,
            segment: Segment::Close,
        }]
    });

    choice((
        move_to,
        line_to,
        horizontal_to,
        vertical_to,
        cubic_to,
        smooth_cubic_to,
        quadratic_to,
        smooth_quadratic_to,
        arc_to,
        close,
    ))
    .repeated()
    .collect::<Vec<_>>()
    .map(|groups: Vec<Vec<PathCommand>>| groups.into_iter().flatten().collect::<Vec<_>>())
    .then_ignore(end())
}
