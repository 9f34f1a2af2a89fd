//! Call convention between the host and the native vector functions.
//!
//! Arguments arrive as an ordered slice of [`Value`]s, results are pushed in
//! order onto [`Results`], and the function returns how many it pushed.
use crate::error::{Result, VectorError};
use crate::math::vector::{Vector, VECTOR_TYPE_NAME};
use crate::value::Value;

/// Signature shared by every host-facing operation.
pub type NativeFn = fn(&Args<'_>, &mut Results) -> Result<usize>;

/// Borrowed positional arguments of one call.
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self { values }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, n: usize) -> Option<&'a Value> {
        self.values.get(n)
    }

    pub fn as_slice(&self) -> &'a [Value] {
        self.values
    }

    pub fn is_vector(&self, n: usize) -> bool {
        matches!(self.get(n), Some(Value::Vector(_)))
    }

    pub fn is_number(&self, n: usize) -> bool {
        self.get(n).is_some_and(Value::is_number)
    }

    pub fn is_list(&self, n: usize) -> bool {
        matches!(self.get(n), Some(Value::List(_)))
    }

    fn type_name_at(&self, n: usize) -> &'static str {
        self.get(n).map_or(Value::Null.type_name(), Value::type_name)
    }

    /// Type error unless exactly `expected` arguments were passed.
    pub fn check_count(&self, fn_name: &str, expected: usize) -> Result<()> {
        if self.count() != expected {
            return Err(VectorError::type_error(format!(
                "{} expected {} arg(s), got {}.",
                fn_name,
                expected,
                self.count()
            )));
        }
        Ok(())
    }

    /// Argument `n` as a vector, or a type error naming `fn_name`.
    pub fn check_vector(&self, fn_name: &str, n: usize) -> Result<&'a Vector> {
        match self.get(n) {
            Some(Value::Vector(v)) => Ok(&**v),
            _ => Err(VectorError::bad_arg(
                fn_name,
                n,
                VECTOR_TYPE_NAME,
                self.type_name_at(n),
            )),
        }
    }

    /// Argument `n` converted to `f64`, or a type error naming `fn_name`.
    pub fn check_number(&self, fn_name: &str, n: usize) -> Result<f64> {
        self.get(n)
            .and_then(Value::as_f64)
            .ok_or_else(|| VectorError::bad_arg(fn_name, n, "float", self.type_name_at(n)))
    }
}

/// Ordered result sink of one call.
#[derive(Clone, Debug, Default)]
pub struct Results {
    values: Vec<Value>,
}

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

/// Runs `f` against `args` and hands back the pushed results.
///
/// Results pushed before a failure are dropped so a failed call is never
/// partially observable.
pub fn invoke(f: NativeFn, args: &[Value]) -> Result<Vec<Value>> {
    let mut results = Results::new();
    let pushed = f(&Args::new(args), &mut results)?;
    debug_assert_eq!(pushed, results.len());
    Ok(results.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_shape_predicates() {
        let values = vec![Value::from(Vector::empty()), Value::Int(3), Value::List(vec![])];
        let args = Args::new(&values);
        assert_eq!(args.count(), 3);
        assert!(args.is_vector(0));
        assert!(!args.is_vector(1));
        assert!(args.is_number(1));
        assert!(args.is_list(2));
        assert!(!args.is_number(5));
    }

    #[test]
    fn test_check_number_reports_position_and_type() {
        let values = vec![Value::Float(1.0), Value::from("abc")];
        let args = Args::new(&values);
        assert_eq!(args.check_number("f", 0).unwrap(), 1.0);
        let err = args.check_number("f", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err.message(),
            "f expected arg in position 1 to be of type float, got arg of type str."
        );
    }

    #[test]
    fn test_check_count() {
        let values = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
        let args = Args::new(&values);
        assert!(args.check_count("f", 3).is_ok());
        let err = args.check_count("f", 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.message(), "f expected 2 arg(s), got 3.");
    }

    #[test]
    fn test_check_vector_missing_arg() {
        let args = Args::new(&[]);
        let err = args.check_vector("vector.tostr", 0).unwrap_err();
        assert!(err.message().contains("got arg of type undef"));
    }
}
