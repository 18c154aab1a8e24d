//! Core library for 2D/3D point values.

pub mod geometry;

pub use geometry::{Point, Point3};
