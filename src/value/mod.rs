//! Value types rendered into attribute text
//!
//! Lengths, paints, references, transforms and view boxes. Every value is
//! immutable and well formed by construction, so rendering them cannot fail.

pub mod length;
pub mod number;
pub mod paint;
pub mod transform;

pub use length::{Length, Unit};
pub use paint::{Paint, Rgb, Url};
pub use transform::{Transform, TransformList, ViewBox};
