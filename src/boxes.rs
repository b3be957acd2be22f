//! Box-type input records and placed-box output records (§3).

use crate::geometry::{Cuboid, Dimensions, Position};

/// How a box type is allowed to be oriented and stacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackingMethod {
  /// Requires vertical stacking support; floor orientation fixed.
  PrePack,
  /// No support check; forbids the `w×h` face on the floor.
  Carton,
}

impl PackingMethod {
  /// PRE_PACK sorts before CARTON at every priority comparison in C5/C6.
  #[inline]
  pub fn priority(&self) -> u8 {
    match self {
      PackingMethod::PrePack => 0,
      PackingMethod::Carton => 1,
    }
  }
}

/// Default/sentinel `sort_order` when a box type does not specify one.
pub const DEFAULT_SORT_ORDER: i32 = 999;

/// An input box type: read-only, one entry per distinct SKU.
#[derive(Clone, Debug)]
pub struct BoxType {
  pub code: String,
  pub dimensions: Dimensions,
  pub quantity: u32,
  pub packing_method: PackingMethod,
  pub material: String,
  pub purchasing_doc: String,
  pub sort_order: i32,
}

impl BoxType {
  pub fn new(code: impl Into<String>, dimensions: Dimensions, quantity: u32, packing_method: PackingMethod) -> Self {
    Self {
      code: code.into(),
      dimensions,
      quantity,
      packing_method,
      material: String::new(),
      purchasing_doc: String::new(),
      sort_order: DEFAULT_SORT_ORDER,
    }
  }

  pub fn with_material(mut self, material: impl Into<String>) -> Self {
    self.material = material.into();
    self
  }

  pub fn with_purchasing_doc(mut self, doc: impl Into<String>) -> Self {
    self.purchasing_doc = doc.into();
    self
  }

  pub fn with_sort_order(mut self, sort_order: i32) -> Self {
    self.sort_order = sort_order;
    self
  }

  /// Key grouping placed instances back to their originating box type
  /// (§4.5's `remaining_counts` key).
  pub fn group_key(&self) -> BoxGroupKey {
    BoxGroupKey {
      code: self.code.clone(),
      material: self.material.clone(),
      purchasing_doc: self.purchasing_doc.clone(),
      packing_method: self.packing_method,
    }
  }
}

/// `(code, material, purchasing_doc, method)` grouping key (§4.5).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxGroupKey {
  pub code: String,
  pub material: String,
  pub purchasing_doc: String,
  pub packing_method: PackingMethod,
}

/// A single placed box instance: one per unit packed.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBox {
  pub code: String,
  pub dimensions: Dimensions,
  pub position: Position,
  pub material: String,
  pub purchasing_doc: String,
  pub packing_method: PackingMethod,
  pub sort_order: i32,
}

impl PlacedBox {
  pub fn footprint(&self) -> Cuboid {
    Cuboid::new(self.position, self.dimensions)
  }

  #[inline]
  pub fn top_z(&self) -> f64 {
    self.position.z + self.dimensions.h
  }

  pub fn group_key(&self) -> BoxGroupKey {
    BoxGroupKey {
      code: self.code.clone(),
      material: self.material.clone(),
      purchasing_doc: self.purchasing_doc.clone(),
      packing_method: self.packing_method,
    }
  }
}

/// A single box instance still waiting to be placed — an expanded slot
/// from a `BoxType`'s quantity, carrying everything needed to build a
/// `PlacedBox` once an orientation and position are chosen.
#[derive(Clone, Debug)]
pub struct PendingBox {
  pub code: String,
  pub dimensions: Dimensions,
  pub packing_method: PackingMethod,
  pub material: String,
  pub purchasing_doc: String,
  pub sort_order: i32,
}

impl From<&BoxType> for PendingBox {
  fn from(box_type: &BoxType) -> Self {
    Self {
      code: box_type.code.clone(),
      dimensions: box_type.dimensions,
      packing_method: box_type.packing_method,
      material: box_type.material.clone(),
      purchasing_doc: box_type.purchasing_doc.clone(),
      sort_order: box_type.sort_order,
    }
  }
}

impl PendingBox {
  pub fn place(&self, dimensions: Dimensions, position: Position) -> PlacedBox {
    PlacedBox {
      code: self.code.clone(),
      dimensions,
      position,
      material: self.material.clone(),
      purchasing_doc: self.purchasing_doc.clone(),
      packing_method: self.packing_method,
      sort_order: self.sort_order,
    }
  }
}

/// Expand a box type's quantity into individual pending slots.
pub fn expand_quantity(box_type: &BoxType) -> Vec<PendingBox> {
  let pending = PendingBox::from(box_type);
  (0..box_type.quantity).map(|_| pending.clone()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Position;

  #[test]
  fn expand_quantity_produces_one_pending_box_per_unit() {
    let box_type = BoxType::new("A", Dimensions::new(10.0, 10.0, 10.0), 3, PackingMethod::Carton);
    let expanded = expand_quantity(&box_type);
    assert_eq!(expanded.len(), 3);
    assert!(expanded.iter().all(|p| p.code == "A"));
  }

  #[test]
  fn group_key_matches_between_box_type_and_its_placed_boxes() {
    let box_type = BoxType::new("A", Dimensions::new(10.0, 10.0, 10.0), 1, PackingMethod::PrePack)
      .with_material("steel")
      .with_purchasing_doc("PO-1");
    let pending = PendingBox::from(&box_type);
    let placed = pending.place(box_type.dimensions, Position::new(0.0, 0.0, 0.0));
    assert_eq!(box_type.group_key(), placed.group_key());
  }

  #[test]
  fn top_z_accounts_for_position_and_height() {
    let placed = PlacedBox {
      code: "A".to_string(),
      dimensions: Dimensions::new(10.0, 10.0, 5.0),
      position: Position::new(0.0, 0.0, 2.0),
      material: String::new(),
      purchasing_doc: String::new(),
      packing_method: PackingMethod::Carton,
      sort_order: DEFAULT_SORT_ORDER,
    };
    assert_eq!(placed.top_z(), 7.0);
  }

  #[test]
  fn pre_pack_sorts_before_carton() {
    assert!(PackingMethod::PrePack.priority() < PackingMethod::Carton.priority());
  }
}
