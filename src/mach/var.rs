use super::Val;
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, ident: &Ident) -> bool {
        self.vars.contains_key(ident.name())
    }

    /// Unset variables are an error, there are no defaults.
    pub fn fetch(&self, ident: &Ident) -> Result<Val> {
        match self.vars.get(ident.name()) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; ident.name())),
        }
    }

    /// A `$` name only accepts strings. Other names take
    /// whatever type was assigned last.
    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        if ident.is_string() && !value.is_string() {
            return Err(error!(TypeMismatch; ident.name()));
        }
        match self.vars.get_mut(ident.name()) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(ident.name().clone(), value);
            }
        }
        Ok(())
    }
}
