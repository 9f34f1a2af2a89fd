use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Div, Index, Mul, Sub};
use std::slice::Iter;

use crate::config::DisplayConfig;
use crate::error::{Result, VectorError};
use crate::math::binop::BinaryOp;
use crate::value::Value;

/// Host-visible type tag of [`Vector`] values.
pub const VECTOR_TYPE_NAME: &str = "vector";

/// Immutable, fixed-length vector of `f64`.
///
/// The buffer is allocated once with exact capacity and never resized, so
/// `len() == capacity()` for every instance. There are no mutating methods;
/// arithmetic always returns a new vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn from_vec(mut data: Vec<f64>) -> Self {
        data.shrink_to_fit();
        Self { data }
    }

    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Empty vector. Distinct from "no vector".
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Builds a vector of `len` elements from a fallible element reader.
    ///
    /// The partially filled buffer is discarded on the first error, so a
    /// half-built vector is never observable.
    pub(crate) fn try_from_fn<F>(len: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<f64>,
    {
        let mut data = Vec::with_capacity(len);
        for i in 0..len {
            data.push(f(i)?);
        }
        Ok(Self { data })
    }

    /// Builds a vector from numeric host values, preserving order.
    ///
    /// Arguments are checked front to back; the error names the first
    /// non-numeric one by its 0-based position.
    pub fn from_values(values: &[Value]) -> Result<Vector> {
        Vector::try_from_fn(values.len(), |i| {
            values[i].as_f64().ok_or_else(|| {
                VectorError::bad_arg(VECTOR_TYPE_NAME, i, "float", values[i].type_name())
            })
        })
    }

    /// Builds a vector from the elements of a host list.
    pub fn from_list(items: &[Value]) -> Result<Vector> {
        Vector::try_from_fn(items.len(), |i| {
            items[i].as_f64().ok_or_else(|| {
                VectorError::type_error(format!(
                    "{} expected list element {} to be of type float, got element of type {}.",
                    VECTOR_TYPE_NAME,
                    i,
                    items[i].type_name()
                ))
            })
        })
    }

    /// Independent host list holding a copy of the elements.
    pub fn to_list(&self) -> Value {
        Value::List(self.iter().map(|v| Value::Float(*v)).collect())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Elementwise `self[i] op other[i]`.
    ///
    /// # Errors
    ///
    /// `ValueError` when the lengths differ.
    pub fn zip_with(&self, other: &Vector, op: BinaryOp) -> Result<Vector> {
        if self.len() != other.len() {
            return Err(VectorError::length_mismatch(
                &format!("{}.{}", VECTOR_TYPE_NAME, op.method_name()),
                self.len(),
                other.len(),
            ));
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op.apply(*a, *b))
            .collect())
    }

    /// Elementwise `self[i] op n`.
    pub fn map_scalar(&self, n: f64, op: BinaryOp) -> Vector {
        self.iter().map(|a| op.apply(*a, n)).collect()
    }

    /// Renders like `Display`, but honours `config.precision` when set.
    pub fn render(&self, config: &DisplayConfig) -> String {
        match config.precision {
            None => self.to_string(),
            Some(precision) => {
                let items: Vec<String> = self
                    .iter()
                    .map(|v| format!("{:.*}", precision, v))
                    .collect();
                format!("{}({})", VECTOR_TYPE_NAME, items.join(", "))
            }
        }
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::empty()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<'a> $trait<f64> for &'a Vector {
            type Output = Vector;

            fn $method(self, rhs: f64) -> Self::Output {
                self.map_scalar(rhs, $op)
            }
        }
    };
}

impl_scalar_op!(Add, add, BinaryOp::Add);
impl_scalar_op!(Sub, sub, BinaryOp::Sub);
impl_scalar_op!(Mul, mul, BinaryOp::Mul);
impl_scalar_op!(Div, div, BinaryOp::Div);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", VECTOR_TYPE_NAME)?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}
