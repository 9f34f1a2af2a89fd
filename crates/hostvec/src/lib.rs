//! hostvec: an immutable `f64` vector value type for interpreter hosts.
//!
//! The crate provides the [`Vector`] type with its construction, inspection,
//! string conversion and elementwise arithmetic, plus the small call
//! convention ([`call::Args`], [`call::Results`]) through which a host invokes
//! the operations in [`ops`]. Host values are modelled by the closed
//! [`Value`] enum, where a vector is just one variant.
//!
//! Registering these functions with a particular interpreter is left to the
//! embedding host.
pub mod call;
pub mod config;
pub mod error;
pub mod math;
pub mod ops;
pub mod value;

pub use call::{invoke, Args, NativeFn, Results};
pub use error::{ErrorKind, Result, VectorError};
pub use math::{BinaryOp, Vector, VECTOR_TYPE_NAME};
pub use value::Value;
