//! Chainable builder for path data

use std::fmt;
use std::str::FromStr;

use crate::error::{PathDataError, ValueError};

use super::command::{Mode, PathCommand, Point, Segment};
use super::grammar;

/// An ordered sequence of path commands, rendered as a `d` attribute value.
///
/// Every builder method consumes the path and returns the extended copy,
/// so a shared prefix can be cloned and continued in several directions.
/// Method names ending in `_to` take absolute coordinates and their `_by`
/// twins take offsets from the current point.
///
/// Operands must be finite. The builder methods panic on NaN or infinity;
/// use [`PathData::try_push`] for computed input.
///
/// ```rust
/// use svg_glyphs::path::PathData;
///
/// let d = PathData::new().move_to(2.0, 2.0).line_by(4.0, 0.0).close();
/// assert_eq!(d.to_string(), "M2,2 l4,0 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append any command
    ///
    /// # Panics
    ///
    /// Panics if an operand is NaN or infinite.
    pub fn push(self, command: PathCommand) -> Self {
        match self.try_push(command) {
            Ok(data) => data,
            Err(err) => panic!("{}", err),
        }
    }

    /// Append a command, rejecting NaN and infinite operands
    pub fn try_push(mut self, command: PathCommand) -> Result<Self, ValueError> {
        if let Some(operand) = command.non_finite_operand() {
            return Err(ValueError::NonFiniteOperand(operand));
        }
        self.commands.push(command);
        Ok(self)
    }

    fn abs(self, segment: Segment) -> Self {
        self.push(PathCommand::absolute(segment))
    }

    fn rel(self, segment: Segment) -> Self {
        self.push(PathCommand::relative(segment))
    }

    pub fn move_to(self, x: f64, y: f64) -> Self {
        self.abs(Segment::MoveTo(Point::new(x, y)))
    }

    pub fn move_by(self, dx: f64, dy: f64) -> Self {
        self.rel(Segment::MoveTo(Point::new(dx, dy)))
    }

    pub fn line_to(self, x: f64, y: f64) -> Self {
        self.abs(Segment::LineTo(Point::new(x, y)))
    }

    pub fn line_by(self, dx: f64, dy: f64) -> Self {
        self.rel(Segment::LineTo(Point::new(dx, dy)))
    }

    pub fn horizontal_to(self, x: f64) -> Self {
        self.abs(Segment::HorizontalLineTo(x))
    }

    pub fn horizontal_by(self, dx: f64) -> Self {
        self.rel(Segment::HorizontalLineTo(dx))
    }

    pub fn vertical_to(self, y: f64) -> Self {
        self.abs(Segment::VerticalLineTo(y))
    }

    pub fn vertical_by(self, dy: f64) -> Self {
        self.rel(Segment::VerticalLineTo(dy))
    }

    pub fn cubic_to(self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        self.abs(cubic(c1, c2, end))
    }

    pub fn cubic_by(self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) -> Self {
        self.rel(cubic(c1, c2, end))
    }

    pub fn smooth_cubic_to(self, control2: (f64, f64), end: (f64, f64)) -> Self {
        self.abs(smooth_cubic(control2, end))
    }

    pub fn smooth_cubic_by(self, control2: (f64, f64), end: (f64, f64)) -> Self {
        self.rel(smooth_cubic(control2, end))
    }

    pub fn quad_to(self, control: (f64, f64), end: (f64, f64)) -> Self {
        self.abs(quadratic(control, end))
    }

    pub fn quad_by(self, control: (f64, f64), end: (f64, f64)) -> Self {
        self.rel(quadratic(control, end))
    }

    pub fn smooth_quad_to(self, x: f64, y: f64) -> Self {
        self.abs(Segment::SmoothQuadraticTo(Point::new(x, y)))
    }

    pub fn smooth_quad_by(self, dx: f64, dy: f64) -> Self {
        self.rel(Segment::SmoothQuadraticTo(Point::new(dx, dy)))
    }

    /// Elliptical arc to an absolute endpoint
    pub fn arc_to(
        self,
        radii: (f64, f64),
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: (f64, f64),
    ) -> Self {
        self.abs(arc(radii, x_axis_rotation, large_arc, sweep, end))
    }

    /// Elliptical arc to an endpoint offset from the current point
    pub fn arc_by(
        self,
        radii: (f64, f64),
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: (f64, f64),
    ) -> Self {
        self.rel(arc(radii, x_axis_rotation, large_arc, sweep, end))
    }

    pub fn close(self) -> Self {
        self.abs(Segment::Close)
    }

    /// Append every command of `other`, e.g. to join the subpaths of a compound glyph
    pub fn extend(mut self, other: PathData) -> Self {
        self.commands.extend(other.commands);
        self
    }

    /// Whether any command uses relative coordinates
    pub fn has_relative(&self) -> bool {
        self.commands.iter().any(|c| c.mode == Mode::Relative)
    }
}

fn point((x, y): (f64, f64)) -> Point {
    Point::new(x, y)
}

fn cubic(control1: (f64, f64), control2: (f64, f64), end: (f64, f64)) -> Segment {
    Segment::CubicTo {
        control1: point(control1),
        control2: point(control2),
        end: point(end),
    }
}

fn smooth_cubic(control2: (f64, f64), end: (f64, f64)) -> Segment {
    Segment::SmoothCubicTo {
        control2: point(control2),
        end: point(end),
    }
}

fn quadratic(control: (f64, f64), end: (f64, f64)) -> Segment {
    Segment::QuadraticTo {
        control: point(control),
        end: point(end),
    }
}

fn arc(
    radii: (f64, f64),
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    end: (f64, f64),
) -> Segment {
    Segment::ArcTo {
        rx: radii.0,
        ry: radii.1,
        x_axis_rotation,
        large_arc,
        sweep,
        end: point(end),
    }
}

/// # Panics
///
/// Panics if an operand is NaN or infinite.
impl From<Vec<PathCommand>> for PathData {
    fn from(commands: Vec<PathCommand>) -> Self {
        commands.into_iter().collect()
    }
}

/// # Panics
///
/// Panics if an operand is NaN or infinite.
impl FromIterator<PathCommand> for PathData {
    fn from_iter<T: IntoIterator<Item = PathCommand>>(iter: T) -> Self {
        iter.into_iter().fold(PathData::new(), PathData::push)
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

impl FromStr for PathData {
    type Err = PathDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse(s).map(PathData::from)
    }
}
