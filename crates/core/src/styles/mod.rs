//! Weight and slant of a face, as inferred from its filename.

mod design;

pub use design::{Slant, WEIGHTS, Weight};
