use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid half-extent {value} on the {axis} axis")]
    InvalidDimension { axis: char, value: f32 },
}
