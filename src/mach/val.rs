use crate::error;
use crate::lang::{Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Run-time values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    String(Rc<str>),
    Number(f64),
    Boolean(bool),
}

impl Val {
    /// Numeric context. Booleans become 1 or 0; strings never coerce.
    pub fn to_number(&self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(*n),
            Val::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// Truth context. Any non-zero number is true.
    pub fn truth(&self) -> Result<bool> {
        match self {
            Val::Boolean(b) => Ok(*b),
            Val::Number(n) => Ok(*n != 0.0),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    /// Text of a number with a leading space where the sign would go.
    pub fn signed_text(n: f64) -> String {
        let s = format_number(n);
        if s.starts_with('-') {
            s
        } else {
            format!(" {}", s)
        }
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    format!("{}", n)
}

impl TryFrom<Val> for f64 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        val.to_number()
    }
}

impl TryFrom<Val> for LineNumber {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        let n = val.to_number()?;
        if n.fract() != 0.0 || n < 1.0 || n > LineNumber::MAX as f64 {
            return Err(error!(UndefinedLine; &format_number(n)));
        }
        Ok(n as LineNumber)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(n)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            String(s) => write!(f, "{}", s),
            Number(n) => write!(f, "{}", format_number(*n)),
            Boolean(true) => write!(f, "TRUE"),
            Boolean(false) => write!(f, "FALSE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Val::Number(14.0).to_string(), "14");
        assert_eq!(Val::Number(-0.0).to_string(), "0");
        assert_eq!(Val::Number(2.5).to_string(), "2.5");
        assert_eq!(Val::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Val::Boolean(true).to_string(), "TRUE");
        assert_eq!(Val::from("HI").to_string(), "HI");
    }

    #[test]
    fn test_signed_text() {
        assert_eq!(Val::signed_text(5.0), " 5");
        assert_eq!(Val::signed_text(-5.0), "-5");
        assert_eq!(Val::signed_text(0.25), " 0.25");
    }

    #[test]
    fn test_coercion() {
        assert_eq!(Val::Boolean(true).to_number().unwrap(), 1.0);
        assert!(Val::Number(-2.0).truth().unwrap());
        assert!(!Val::Number(0.0).truth().unwrap());
        assert!(Val::from("1").to_number().is_err());
        assert!(Val::from("").truth().is_err());
    }

    #[test]
    fn test_line_number() {
        assert_eq!(LineNumber::try_from(Val::Number(100.0)).unwrap(), 100);
        assert!(LineNumber::try_from(Val::Number(10.5)).is_err());
        assert!(LineNumber::try_from(Val::Number(-10.0)).is_err());
    }
}
