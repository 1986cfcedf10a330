//! Typed path commands

use std::fmt;

use crate::value::number::shortest;

/// A 2D coordinate in the icon's authored space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether operands are absolute coordinates or offsets from the current point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Absolute,
    Relative,
}

/// The drawing operation of a path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    HorizontalLineTo(f64),
    VerticalLineTo(f64),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Cubic curve whose first control point reflects the previous one
    SmoothCubicTo { control2: Point, end: Point },
    QuadraticTo { control: Point, end: Point },
    /// Quadratic curve with a reflected control point
    SmoothQuadraticTo(Point),
    ArcTo {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    Close,
}

impl Segment {
    /// Uppercase command letter
    pub fn letter(&self) -> char {
        match self {
            Segment::MoveTo(_) => 'M',
            Segment::LineTo(_) => 'L',
            Segment::HorizontalLineTo(_) => 'H',
            Segment::VerticalLineTo(_) => 'V',
            Segment::CubicTo { .. } => 'C',
            Segment::SmoothCubicTo { .. } => 'S',
            Segment::QuadraticTo { .. } => 'Q',
            Segment::SmoothQuadraticTo(_) => 'T',
            Segment::ArcTo { .. } => 'A',
            Segment::Close => 'Z',
        }
    }

    /// Operands in path-data order; arc flags are `0.0` or `1.0`
    pub fn operands(&self) -> Vec<f64> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadraticTo(p) => {
                vec![p.x, p.y]
            }
            Segment::HorizontalLineTo(x) => vec![x],
            Segment::VerticalLineTo(y) => vec![y],
            Segment::CubicTo {
                control1,
                control2,
                end,
            } => vec![
                control1.x, control1.y, control2.x, control2.y, end.x, end.y,
            ],
            Segment::SmoothCubicTo { control2, end } => {
                vec![control2.x, control2.y, end.x, end.y]
            }
            Segment::QuadraticTo { control, end } => vec![control.x, control.y, end.x, end.y],
            Segment::ArcTo {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            } => vec![
                rx,
                ry,
                x_axis_rotation,
                flag(large_arc),
                flag(sweep),
                end.x,
                end.y,
            ],
            Segment::Close => vec![],
        }
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// One command of a path: a segment plus its coordinate mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    pub mode: Mode,
    pub segment: Segment,
}

impl PathCommand {
    pub fn absolute(segment: Segment) -> Self {
        Self {
            mode: Mode::Absolute,
            segment,
        }
    }

    pub fn relative(segment: Segment) -> Self {
        Self {
            mode: Mode::Relative,
            segment,
        }
    }

    /// The first NaN or infinite operand, if any
    pub fn non_finite_operand(&self) -> Option<f64> {
        self.segment.operands().into_iter().find(|n| !n.is_finite())
    }

    /// Command letter: uppercase for absolute, lowercase for relative
    pub fn letter(&self) -> char {
        let letter = self.segment.letter();
        match self.mode {
            Mode::Absolute => letter,
            Mode::Relative => letter.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<String> = self.segment.operands().into_iter().map(shortest).collect();
        write!(f, "{}{}", self.letter(), operands.join(","))
    }
}
