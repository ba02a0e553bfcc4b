use crate::types::{Operation, Point};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate { x: f32, y: f32 },
    #[error("Invalid stroke width: {0}")]
    InvalidWidth(f32),
}

/// Check that a point can be rasterized
pub fn validate_point(point: Point) -> Result<(), ValidationError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteCoordinate {
            x: point.x,
            y: point.y,
        })
    }
}

/// Validate an operation received from outside the engine
pub fn validate_operation(op: &Operation) -> Result<(), ValidationError> {
    match op {
        Operation::SetStroke(style) => {
            // Width must be positive; color is already validated by parsing
            if style.width.is_finite() && style.width > 0.0 {
                Ok(())
            } else {
                Err(ValidationError::InvalidWidth(style.width))
            }
        }
        Operation::StrokeStart(p) | Operation::StrokeExtend(p) => validate_point(*p),
        Operation::StrokeEnd | Operation::ClearMarker => Ok(()),
    }
}
