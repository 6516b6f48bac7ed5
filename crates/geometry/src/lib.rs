mod aabb;
mod error;
mod ray;

pub use aabb::{check_for_intersection, Face, AABB};
pub use error::GeometryError;
pub use ray::Ray;
