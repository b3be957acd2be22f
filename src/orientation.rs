//! Orientation generator (C2, §4.1).
//!
//! Enumerates the legal `(w, l, h)` permutations of a box under its
//! packing-method rule. CARTON always yields two; PRE_PACK yields two, or
//! four when the piece may also stand on its end.

use smallvec::SmallVec;

use crate::boxes::PackingMethod;
use crate::geometry::Dimensions;

/// Up to four legal orientations; never heap-allocates in practice.
pub type Orientations = SmallVec<[Dimensions; 4]>;

/// Enumerate the legal orientations of `dims` under `method`.
///
/// CARTON: `{(w,l,h), (l,w,h)}` — the base face stays on the floor, the box
/// may only spin 90° about the vertical axis.
///
/// PRE_PACK: always `{(w,l,h), (l,w,h)}`; additionally, when `h > l`, also
/// `{(l,h,w), (h,l,w)}` — the piece may stand on its end only when that end
/// is taller than the original length. `(w×h)` on the floor is never legal.
pub fn orientations(dims: Dimensions, method: PackingMethod) -> Orientations {
  let (w, l, h) = (dims.w, dims.l, dims.h);
  let mut out = Orientations::new();
  out.push(Dimensions::new(w, l, h));
  out.push(Dimensions::new(l, w, h));

  if method == PackingMethod::PrePack && h > l {
    out.push(Dimensions::new(l, h, w));
    out.push(Dimensions::new(h, l, w));
  }

  out
}

/// True if some legal orientation of `dims` fits inside an envelope of
/// `(width, length, height)` — used to detect `OversizedBox` (§7) before
/// a box type ever reaches a packing algorithm, independent of any other
/// placed boxes.
pub fn fits_envelope(dims: Dimensions, method: PackingMethod, width: f64, length: f64, height: f64) -> bool {
  orientations(dims, method).into_iter().any(|o| o.w <= width && o.l <= length && o.h <= height)
}

/// LAFF's richer fit predicate (§4.1): among the legal orientations of
/// `dims` under `method`, return the smallest-width one that fits inside a
/// cuboid of extents `space`, or `None` if none fits.
pub fn smallest_fitting_orientation(
  dims: Dimensions,
  method: PackingMethod,
  space: Dimensions,
) -> Option<Dimensions> {
  orientations(dims, method)
    .into_iter()
    .filter(|o| o.w <= space.w && o.l <= space.l && o.h <= space.h)
    .min_by(|a, b| a.w.partial_cmp(&b.w).unwrap())
}

#[cfg(test)]
#[path = "orientation_test.rs"]
mod orientation_test;
