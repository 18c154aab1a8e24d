//! Basic 2D point type used as input to [`Point3`](super::Point3).

use std::fmt;

/// Representation of a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

#[cfg(feature = "geo")]
impl From<geo_types::Coord<f64>> for Point {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

#[cfg(feature = "geo")]
impl From<Point> for geo_types::Coord<f64> {
    fn from(p: Point) -> Self {
        geo_types::Coord { x: p.x, y: p.y }
    }
}

#[cfg(feature = "geo")]
impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

#[cfg(feature = "geo")]
impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }

    #[test]
    fn display_braces() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "{1.5, -2}");
    }

    #[cfg(feature = "geo")]
    #[test]
    fn geo_types_conversion() {
        let c = geo_types::Coord { x: 3.0, y: 4.0 };
        let p = Point::from(c);
        assert_eq!(p, Point::new(3.0, 4.0));
        let gp: geo_types::Point<f64> = p.into();
        assert_eq!(gp.x(), 3.0);
        assert_eq!(gp.y(), 4.0);
    }
}
