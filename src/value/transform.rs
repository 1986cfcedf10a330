//! `transform` functions and `viewBox` rectangles

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::number::decimal;

/// A single SVG transform function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate { x: f64, y: f64 },
    Scale { x: f64, y: f64 },
    /// Rotation in degrees, optionally about a center point
    Rotate {
        angle: f64,
        center: Option<(f64, f64)>,
    },
    SkewX(f64),
    SkewY(f64),
    Matrix([f64; 6]),
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Transform::Translate { x, y }
    }

    pub fn scale(factor: f64) -> Self {
        Transform::Scale {
            x: factor,
            y: factor,
        }
    }

    pub fn rotate(angle: f64) -> Self {
        Transform::Rotate {
            angle,
            center: None,
        }
    }

    pub fn rotate_about(angle: f64, cx: f64, cy: f64) -> Self {
        Transform::Rotate {
            angle,
            center: Some((cx, cy)),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate { x, y } => {
                write!(f, "translate({} {})", decimal(*x), decimal(*y))
            }
            Transform::Scale { x, y } if x == y => write!(f, "scale({})", decimal(*x)),
            Transform::Scale { x, y } => write!(f, "scale({} {})", decimal(*x), decimal(*y)),
            Transform::Rotate {
                angle,
                center: None,
            } => write!(f, "rotate({})", decimal(*angle)),
            Transform::Rotate {
                angle,
                center: Some((cx, cy)),
            } => write!(
                f,
                "rotate({} {} {})",
                decimal(*angle),
                decimal(*cx),
                decimal(*cy)
            ),
            Transform::SkewX(angle) => write!(f, "skewX({})", decimal(*angle)),
            Transform::SkewY(angle) => write!(f, "skewY({})", decimal(*angle)),
            Transform::Matrix(values) => {
                let parts: Vec<String> = values.iter().map(|v| decimal(*v)).collect();
                write!(f, "matrix({})", parts.join(" "))
            }
        }
    }
}

/// Transform functions applied left to right
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformList(Vec<Transform>);

impl TransformList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function, returning the extended list
    pub fn then(mut self, transform: Transform) -> Self {
        self.0.push(transform);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transform> {
        self.0.iter()
    }
}

impl From<Transform> for TransformList {
    fn from(transform: Transform) -> Self {
        Self(vec![transform])
    }
}

impl FromIterator<Transform> for TransformList {
    fn from_iter<T: IntoIterator<Item = Transform>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        f.write_str(&parts.join(" "))
    }
}

/// The authored coordinate space of an `svg` element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// A `0 0 size size` box
    pub fn square(size: f64) -> Self {
        Self::new(0.0, 0.0, size, size)
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            decimal(self.min_x),
            decimal(self.min_y),
            decimal(self.width),
            decimal(self.height)
        )
    }
}

impl FromStr for ViewBox {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers: Vec<f64> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| ValueError::InvalidViewBox(s.to_string()))?;

        match numbers.as_slice() {
            [min_x, min_y, width, height] => Ok(Self::new(*min_x, *min_y, *width, *height)),
            _ => Err(ValueError::InvalidViewBox(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_display() {
        assert_eq!(Transform::translate(10.0, 10.0).to_string(), "translate(10 10)");
        assert_eq!(Transform::scale(2.0).to_string(), "scale(2)");
        assert_eq!(
            Transform::Scale { x: 1.0, y: -1.0 }.to_string(),
            "scale(1 -1)"
        );
        assert_eq!(
            Transform::rotate_about(-90.0, 10.0, 10.0).to_string(),
            "rotate(-90 10 10)"
        );
        assert_eq!(
            Transform::Matrix([1.0, 0.0, 0.0, 1.0, 0.5, 0.0]).to_string(),
            "matrix(1 0 0 1 0.5 0)"
        );
    }

    #[test]
    fn test_transform_list_joins_in_order() {
        let list = TransformList::new()
            .then(Transform::translate(4.0, 0.0))
            .then(Transform::rotate(45.0));
        assert_eq!(list.to_string(), "translate(4 0) rotate(45)");
    }

    #[test]
    fn test_view_box() {
        assert_eq!(ViewBox::square(20.0).to_string(), "0 0 20 20");
        assert_eq!(
            "0 0 24 24".parse::<ViewBox>().unwrap(),
            ViewBox::square(24.0)
        );
        assert_eq!(
            "-1,-1, 18 18".parse::<ViewBox>().unwrap(),
            ViewBox::new(-1.0, -1.0, 18.0, 18.0)
        );
        assert!("0 0 24".parse::<ViewBox>().is_err());
        assert!("0 0 a b".parse::<ViewBox>().is_err());
    }
}
