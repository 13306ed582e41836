use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// Type-checked operators. Numbers and booleans mix freely,
/// strings only meet other strings.
pub struct Operation {}

impl Operation {
    /// NaN is a domain error, infinity an overflow.
    pub fn finite(n: f64) -> Result<Val> {
        if n.is_nan() {
            Err(error!(IllegalFunctionCall))
        } else if n.is_infinite() {
            Err(error!(Overflow))
        } else {
            Ok(Val::Number(n))
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Number(-val.to_number()?))
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::Boolean(!val.truth()?))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(&lhs, &rhs)?;
        if l == 0.0 && r < 0.0 {
            return Err(error!(DivisionByZero));
        }
        Operation::finite(l.powf(r))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(&lhs, &rhs)?;
        Operation::finite(l * r)
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(&lhs, &rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Operation::finite(l / r)
    }

    /// Floored modulus, the result takes the sign of the divisor.
    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(&lhs, &rhs)?;
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Operation::finite(l - r * (l / r).floor())
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            (String(_), _) | (_, String(_)) => Err(error!(TypeMismatch)),
            (l, r) => Operation::finite(l.to_number()? + r.to_number()?),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::numbers(&lhs, &rhs)?;
        Operation::finite(l - r)
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(&lhs, &rhs)? == Ordering::Equal))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(&lhs, &rhs)? != Ordering::Equal))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(&lhs, &rhs)? == Ordering::Less))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(&lhs, &rhs)? != Ordering::Greater))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(&lhs, &rhs)? == Ordering::Greater))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Boolean(Operation::compare(&lhs, &rhs)? != Ordering::Less))
    }

    fn numbers(lhs: &Val, rhs: &Val) -> Result<(f64, f64)> {
        Ok((lhs.to_number()?, rhs.to_number()?))
    }

    fn compare(lhs: &Val, rhs: &Val) -> Result<Ordering> {
        use Val::*;
        match (lhs, rhs) {
            (String(l), String(r)) => Ok(l.cmp(r)),
            (String(_), _) | (_, String(_)) => Err(error!(TypeMismatch)),
            (l, r) => {
                let (l, r) = Operation::numbers(l, r)?;
                match l.partial_cmp(&r) {
                    Some(ordering) => Ok(ordering),
                    None => Err(error!(IllegalFunctionCall)),
                }
            }
        }
    }
}
