//! Error kinds (§7). Input validation happens at the boundary so that
//! `InvalidInput` never crosses into the core packing loops.

use thiserror::Error;

use crate::Algorithm;

/// Failure modes the packing facade can report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackingError {
  /// A container or box-type field was non-positive where it must be
  /// positive, or a quantity was invalid. Rejected before the core runs.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// A box type's minimum-orientation footprint exceeds the container on
  /// some axis, and the running algorithm cannot recover (LAFF: no new
  /// container helps either).
  #[error("box {code} does not fit the container: {reason}")]
  OversizedBox { code: String, reason: String },

  /// The requested algorithm variant is not implemented.
  #[error("algorithm {0:?} is not supported")]
  Unsupported(Algorithm),
}

pub type PackingResult<T> = Result<T, PackingError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_input_message_includes_the_reason() {
    let err = PackingError::InvalidInput("container width must be positive".to_string());
    assert_eq!(err.to_string(), "invalid input: container width must be positive");
  }

  #[test]
  fn oversized_box_message_includes_code_and_reason() {
    let err = PackingError::OversizedBox {
      code: "BIG".to_string(),
      reason: "no orientation fits the container".to_string(),
    };
    assert_eq!(err.to_string(), "box BIG does not fit the container: no orientation fits the container");
  }

  #[test]
  fn unsupported_message_names_the_algorithm() {
    let err = PackingError::Unsupported(Algorithm::Guided);
    assert_eq!(err.to_string(), "algorithm Guided is not supported");
  }
}
