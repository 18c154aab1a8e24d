//! Basic geometry primitives.

pub mod point;
pub use point::Point;

pub mod point3;
pub use point3::Point3;

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Point3, b: Point3) -> f64 {
    (b - a).norm()
}

/// Calculates the area of a planar polygon in 3D space.
pub fn polygon_area3(vertices: &[Point3]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = Point3::ORIGIN;
    for i in 1..(vertices.len() - 1) {
        let v0 = vertices[i] - vertices[0];
        let v1 = vertices[i + 1] - vertices[0];
        sum += v0.cross(&v1);
    }
    0.5 * sum.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_2d() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn distance_3d() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert!((distance3(a, b) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn polygon_area3_triangle() {
        let boundary = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert!((polygon_area3(&boundary) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn polygon_area3_tilted_square() {
        let boundary = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        assert!((polygon_area3(&boundary) - 2f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn polygon_area3_degenerate() {
        assert_eq!(polygon_area3(&[Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0)]), 0.0);
    }
}
