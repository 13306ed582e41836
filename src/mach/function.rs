use super::{device::Clock, Operation, Val};
use crate::error;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::Rng;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Builtin functions

pub struct Function {}

impl Function {
    /// Accepted argument counts, or `None` when `name` is not a builtin.
    /// Names are case-insensitive.
    pub fn arity(name: &str) -> Option<std::ops::RangeInclusive<usize>> {
        match name.to_ascii_uppercase().as_str() {
            "PI" | "DATE$" | "TIME$" => Some(0..=0),
            "RND" => Some(0..=1),
            "ABS" | "LEN" | "SIN" | "COS" | "TAN" | "LOG" | "EXP" | "SQR" | "SQRT" | "INT"
            | "FLOOR" | "CEIL" | "VAL" | "STR$" | "CHR$" | "ASC" | "TRIM$" | "DEGREES"
            | "RADIANS" => Some(1..=1),
            "ROUND" => Some(1..=2),
            "LEFT$" | "RIGHT$" => Some(2..=2),
            "MID$" => Some(2..=3),
            _ => None,
        }
    }

    pub fn is_builtin(name: &str) -> bool {
        Function::arity(name).is_some()
    }

    /// Calls a builtin. The caller has already checked the arity.
    pub fn call(name: &str, args: Vec<Val>, rng: &mut StdRng, clock: &dyn Clock) -> Result<Val> {
        let mut args = args.into_iter();
        let mut arg = || match args.next() {
            Some(v) => Ok(v),
            None => Err(error!(WrongArity)),
        };
        match name.to_ascii_uppercase().as_str() {
            "ABS" => Function::abs(arg()?),
            "ASC" => Function::asc(arg()?),
            "CEIL" => Operation::finite(arg()?.to_number()?.ceil()),
            "CHR$" => Function::chr(arg()?),
            "COS" => Operation::finite(arg()?.to_number()?.cos()),
            "DATE$" => Ok(Val::String(clock.now().format("%Y-%m-%d").to_string().into())),
            "DEGREES" => Operation::finite(arg()?.to_number()?.to_degrees()),
            "EXP" => Operation::finite(arg()?.to_number()?.exp()),
            "FLOOR" | "INT" => Operation::finite(arg()?.to_number()?.floor()),
            "LEFT$" => Function::left(arg()?, arg()?),
            "LEN" => Function::len(arg()?),
            "LOG" => Function::log(arg()?),
            "MID$" => {
                let (s, start) = (arg()?, arg()?);
                Function::mid(s, start, arg().ok())
            }
            "PI" => Ok(Val::Number(std::f64::consts::PI)),
            "RADIANS" => Operation::finite(arg()?.to_number()?.to_radians()),
            "RIGHT$" => Function::right(arg()?, arg()?),
            "RND" => {
                if let Ok(v) = arg() {
                    v.to_number()?;
                }
                Ok(Val::Number(rng.gen::<f64>()))
            }
            "ROUND" => {
                let x = arg()?;
                Function::round(x, arg().ok())
            }
            "SIN" => Operation::finite(arg()?.to_number()?.sin()),
            "SQR" | "SQRT" => Function::sqr(arg()?),
            "STR$" => Ok(Val::String(Val::signed_text(arg()?.to_number()?).into())),
            "TAN" => Operation::finite(arg()?.to_number()?.tan()),
            "TIME$" => Ok(Val::String(clock.now().format("%H:%M:%S").to_string().into())),
            "TRIM$" => Ok(Val::String(Function::string(arg()?)?.trim().into())),
            "VAL" => Function::val(arg()?),
            _ => Err(error!(UndefinedVariable; name)),
        }
    }

    fn string(val: Val) -> Result<Rc<str>> {
        match val {
            Val::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// A character count argument. Negative counts are illegal.
    fn count(val: Val) -> Result<usize> {
        let n = val.to_number()?.floor();
        if n < 0.0 {
            return Err(error!(IllegalFunctionCall));
        }
        Ok(n as usize)
    }

    pub fn abs(val: Val) -> Result<Val> {
        Ok(Val::Number(val.to_number()?.abs()))
    }

    pub fn asc(val: Val) -> Result<Val> {
        match Function::string(val)?.chars().next() {
            Some(ch) => Ok(Val::Number(ch as u32 as f64)),
            None => Err(error!(IllegalFunctionCall; "EMPTY STRING")),
        }
    }

    pub fn chr(val: Val) -> Result<Val> {
        let n = val.to_number()?;
        if n.fract() != 0.0 || n < 0.0 || n > u32::MAX as f64 {
            return Err(error!(IllegalFunctionCall));
        }
        match std::char::from_u32(n as u32) {
            Some(ch) => Ok(Val::String(ch.to_string().into())),
            None => Err(error!(IllegalFunctionCall)),
        }
    }

    pub fn len(val: Val) -> Result<Val> {
        Ok(Val::Number(Function::string(val)?.chars().count() as f64))
    }

    pub fn log(val: Val) -> Result<Val> {
        let n = val.to_number()?;
        if n <= 0.0 {
            return Err(error!(IllegalFunctionCall));
        }
        Operation::finite(n.ln())
    }

    pub fn sqr(val: Val) -> Result<Val> {
        let n = val.to_number()?;
        if n < 0.0 {
            return Err(error!(IllegalFunctionCall));
        }
        Ok(Val::Number(n.sqrt()))
    }

    /// Half away from zero, at `places` decimals.
    pub fn round(val: Val, places: Option<Val>) -> Result<Val> {
        let n = val.to_number()?;
        let places = match places {
            Some(p) => p.to_number()?.trunc(),
            None => 0.0,
        };
        let factor = 10f64.powf(places);
        if !factor.is_finite() || factor == 0.0 {
            return Err(error!(IllegalFunctionCall));
        }
        let rounded = (n * factor).round() / factor;
        if rounded.is_finite() {
            Ok(Val::Number(rounded))
        } else {
            Ok(Val::Number(n))
        }
    }

    pub fn left(s: Val, n: Val) -> Result<Val> {
        let s = Function::string(s)?;
        let n = Function::count(n)?;
        Ok(Val::String(s.chars().take(n).collect::<String>().into()))
    }

    pub fn right(s: Val, n: Val) -> Result<Val> {
        let s = Function::string(s)?;
        let n = Function::count(n)?;
        let skip = s.chars().count().saturating_sub(n);
        Ok(Val::String(s.chars().skip(skip).collect::<String>().into()))
    }

    /// 1-indexed. A start before the first character is illegal.
    pub fn mid(s: Val, start: Val, len: Option<Val>) -> Result<Val> {
        let s = Function::string(s)?;
        let start = start.to_number()?.floor();
        if start < 1.0 {
            return Err(error!(IllegalFunctionCall));
        }
        let chars = s.chars().skip(start as usize - 1);
        let text: String = match len {
            Some(n) => chars.take(Function::count(n)?).collect(),
            None => chars.collect(),
        };
        Ok(Val::String(text.into()))
    }

    /// The longest numeric prefix after trimming, 0 when there is none.
    pub fn val(val: Val) -> Result<Val> {
        let s = Function::string(val)?;
        let s = s.trim();
        let bytes = s.as_bytes();
        let digits = |mut i: usize| {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            i
        };
        let mut end = 0;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let int_end = digits(end);
        let mut mantissa = int_end > end;
        end = int_end;
        if end < bytes.len() && bytes[end] == b'.' {
            let frac_end = digits(end + 1);
            if mantissa || frac_end > end + 1 {
                mantissa = true;
                end = frac_end;
            }
        }
        if !mantissa {
            return Ok(Val::Number(0.0));
        }
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp = end + 1;
            if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
                exp += 1;
            }
            let exp_end = digits(exp);
            if exp_end > exp {
                end = exp_end;
            }
        }
        match s[..end].parse::<f64>() {
            Ok(n) => Operation::finite(n),
            Err(_) => Ok(Val::Number(0.0)),
        }
    }
}
