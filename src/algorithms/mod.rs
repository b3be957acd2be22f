//! The four algorithm entry points (§6, §9): one `pack` function per
//! strategy, all sharing C1–C2 and (where applicable) C3's empty-space
//! substrate.

pub mod guided;
pub mod laff;
pub mod simple_index;
pub mod z_first;
