//! Core domain logic for the friend grid.
//!
//! Pure, UI-free computations: grid layout derivation, drag-selection
//! geometry, and list filtering. Everything here is deterministic and
//! covered by unit tests.

pub mod grid;
pub mod selection_geometry;
pub mod filtering;
