//! Host-facing native functions of the vector type.
//!
//! Each function follows the [`NativeFn`](crate::call::NativeFn) convention:
//! read from `args`, push onto `results`, return the number pushed. The four
//! arithmetic overloads share [`binary_op`].
use crate::call::{Args, Results};
use crate::error::{Result, VectorError};
use crate::math::binop::BinaryOp;
use crate::math::vector::Vector;
use crate::value::Value;

const NEW_NAME: &str = "vector";
const LEN_NAME: &str = "vector.__len";
const SPREAD_NAME: &str = "vector.spread";
const TOSTR_NAME: &str = "vector.tostr";
const TOLIST_NAME: &str = "vector.tolist";

/// `vector(...)`: a single list argument is read as a sequence, anything
/// else as variadic numeric scalars.
pub fn vector_new(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    log::trace!("{}: {} args", NEW_NAME, args.count());
    let vector = match args.as_slice() {
        [Value::List(items)] => Vector::from_list(items)?,
        values => Vector::from_values(values)?,
    };
    results.push(vector);
    Ok(1)
}

pub fn vector_len(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    log::trace!("{}: {} args", LEN_NAME, args.count());
    args.check_count(LEN_NAME, 1)?;
    let v = args.check_vector(LEN_NAME, 0)?;
    results.push(v.len() as i64);
    Ok(1)
}

/// Pushes every element as its own result.
pub fn vector_spread(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    log::trace!("{}: {} args", SPREAD_NAME, args.count());
    args.check_count(SPREAD_NAME, 1)?;
    let v = args.check_vector(SPREAD_NAME, 0)?;
    for value in v.iter() {
        results.push(*value);
    }
    Ok(v.len())
}

pub fn vector_tostr(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    log::trace!("{}: {} args", TOSTR_NAME, args.count());
    args.check_count(TOSTR_NAME, 1)?;
    let v = args.check_vector(TOSTR_NAME, 0)?;
    results.push(Value::Str(v.to_string()));
    Ok(1)
}

pub fn vector_tolist(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    log::trace!("{}: {} args", TOLIST_NAME, args.count());
    args.check_count(TOLIST_NAME, 1)?;
    let v = args.check_vector(TOLIST_NAME, 0)?;
    results.push(v.to_list());
    Ok(1)
}

/// Shared dispatch of the arithmetic overloads.
///
/// Tries `(vector, vector)`, then `(vector, number)`; any other shape,
/// including extra or missing arguments, is a type error.
pub fn binary_op(op: BinaryOp, args: &Args<'_>, results: &mut Results) -> Result<usize> {
    let fn_name = format!("vector.{}", op.method_name());
    log::trace!(
        "{}: ({}, {})",
        fn_name,
        args.get(0).map_or("undef", Value::type_name),
        args.get(1).map_or("undef", Value::type_name)
    );

    if args.count() != 2 {
        return Err(shape_error(&fn_name, args));
    }

    let result = if args.is_vector(0) && args.is_vector(1) {
        let a = args.check_vector(&fn_name, 0)?;
        let b = args.check_vector(&fn_name, 1)?;
        a.zip_with(b, op)?
    } else if args.is_vector(0) && args.is_number(1) {
        let a = args.check_vector(&fn_name, 0)?;
        let n = args.check_number(&fn_name, 1)?;
        a.map_scalar(n, op)
    } else {
        return Err(shape_error(&fn_name, args));
    };

    results.push(result);
    Ok(1)
}

fn shape_error(fn_name: &str, args: &Args<'_>) -> VectorError {
    let types: Vec<&str> = args.as_slice().iter().map(Value::type_name).collect();
    VectorError::type_error(format!(
        "{} expected (vector, vector) or (vector, float), got ({}).",
        fn_name,
        types.join(", ")
    ))
}

pub fn vector_add(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    binary_op(BinaryOp::Add, args, results)
}

pub fn vector_sub(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    binary_op(BinaryOp::Sub, args, results)
}

pub fn vector_mul(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    binary_op(BinaryOp::Mul, args, results)
}

pub fn vector_div(args: &Args<'_>, results: &mut Results) -> Result<usize> {
    binary_op(BinaryOp::Div, args, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{invoke, NativeFn};
    use crate::error::ErrorKind;

    fn vec_value(items: &[f64]) -> Value {
        Value::from(Vector::from_slice(items))
    }

    #[test]
    fn test_new_variadic_mixed_numbers() {
        let out = invoke(vector_new, &[Value::Int(1), Value::Float(2.5), Value::Int(-3)]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_vector().unwrap().as_slice(), &[1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_new_no_args_is_empty_vector() {
        let out = invoke(vector_new, &[]).unwrap();
        let v = out[0].as_vector().unwrap();
        assert!(v.is_empty());
        assert_ne!(out[0], Value::Null);
    }

    #[test]
    fn test_new_bad_scalar_reports_position() {
        let err = invoke(vector_new, &[Value::Int(1), Value::Bool(true)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err.message(),
            "vector expected arg in position 1 to be of type float, got arg of type bool."
        );
    }

    #[test]
    fn test_new_list_with_bad_element() {
        let list = Value::List(vec![Value::Int(1), Value::from("two")]);
        let err = invoke(vector_new, &[list]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.message().contains("list element 1"));
    }

    #[test]
    fn test_two_lists_are_not_a_sequence() {
        let err = invoke(vector_new, &[Value::List(vec![]), Value::List(vec![])]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_spread_count_matches_len() {
        let out = invoke(vector_spread, &[vec_value(&[4.0, 5.0])]).unwrap();
        assert_eq!(out, vec![Value::Float(4.0), Value::Float(5.0)]);
        assert!(invoke(vector_spread, &[vec_value(&[])]).unwrap().is_empty());
    }

    #[test]
    fn test_inspection_requires_vector() {
        let inspectors: [NativeFn; 4] = [vector_len, vector_spread, vector_tostr, vector_tolist];
        for f in inspectors {
            let err = invoke(f, &[Value::Int(1)]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn test_scalar_left_operand_is_type_error() {
        let err = invoke(vector_add, &[Value::Int(2), vec_value(&[1.0])]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err.message(),
            "vector.__add expected (vector, vector) or (vector, float), got (int, vector)."
        );
    }

    #[test]
    fn test_operators_reject_extra_args() {
        let v = vec_value(&[1.0, 2.0]);
        let operators: [NativeFn; 4] = [vector_add, vector_sub, vector_mul, vector_div];
        for f in operators {
            let err = invoke(f, &[v.clone(), v.clone(), Value::from("junk")]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
            assert!(err.message().ends_with("got (vector, vector, str)."));

            let err = invoke(f, &[v.clone()]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn test_inspectors_reject_extra_args() {
        let v = vec_value(&[1.0, 2.0]);
        let inspectors: [NativeFn; 4] = [vector_len, vector_spread, vector_tostr, vector_tolist];
        for f in inspectors {
            let err = invoke(f, &[v.clone(), Value::Int(9)]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
            assert!(err.message().ends_with("expected 1 arg(s), got 2."));
            assert!(invoke(f, &[]).is_err());
        }
    }

    #[test]
    fn test_failed_op_pushes_nothing() {
        let mut results = Results::new();
        let values = [vec_value(&[1.0, 2.0]), vec_value(&[1.0])];
        let res = vector_sub(&Args::new(&values), &mut results);
        assert!(res.is_err());
        assert!(results.is_empty());
    }
}
