//! The vector value type and its elementwise operators.
//!
//! `Vector` owns a single exactly-sized `f64` buffer and exposes no mutating
//! methods. `BinaryOp` tags the four arithmetic operators so one routine
//! serves all of them.
pub mod binop;
pub mod vector;

pub use binop::BinaryOp;
pub use vector::{Vector, VECTOR_TYPE_NAME};
