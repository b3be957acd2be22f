//! Guided — manual row template (§9 Open Questions).
//!
//! The template this strategy reads is an externally supplied JSON document
//! describing the row layout by hand; its schema is referenced by the
//! source material but never specified. Rather than guess at a schema,
//! Guided is declared in the `Algorithm` enum and wired into the facade,
//! but its `pack` reports `PackingError::Unsupported` until a template
//! format is actually provided (see DESIGN.md).

use crate::boxes::{BoxType, PlacedBox};
use crate::config::{Algorithm, Container, PackingConfig};
use crate::error::{PackingError, PackingResult};

pub fn pack(_container: &Container, _box_types: &[BoxType], _config: &PackingConfig) -> PackingResult<Vec<PlacedBox>> {
  Err(PackingError::Unsupported(Algorithm::Guided))
}
