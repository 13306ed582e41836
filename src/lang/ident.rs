use std::rc::Rc;

// Used in both Token and Ast

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    pub fn new(s: &str) -> Ident {
        if s.ends_with('$') {
            Ident::String(s.into())
        } else {
            Ident::Plain(s.into())
        }
    }

    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }

    /// True for `FNxxx` names which call a `DEF FN` function.
    pub fn is_user_function(&self) -> bool {
        let s = self.name();
        s.len() > 2 && s.get(..2).map_or(false, |p| p.eq_ignore_ascii_case("FN"))
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
