//! JSON encoding of operation batches exchanged with remote peers.

use thiserror::Error;

use crate::types::Operation;
use crate::validation::{validate_operation, ValidationError};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("Failed to (de)serialize operations: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Operation {index} rejected: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Encode operations as a JSON array
pub fn encode_operations(ops: &[Operation]) -> Result<String, WireError> {
    Ok(serde_json::to_string(ops)?)
}

/// Decode a JSON array of operations, rejecting any that fail validation
pub fn decode_operations(json: &str) -> Result<Vec<Operation>, WireError> {
    let ops: Vec<Operation> = serde_json::from_str(json)?;
    for (index, op) in ops.iter().enumerate() {
        validate_operation(op).map_err(|source| WireError::Invalid { index, source })?;
    }
    Ok(ops)
}
