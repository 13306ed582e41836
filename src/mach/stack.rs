use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack with a BASIC error on underflow

pub struct Stack<T> {
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(underflow: ErrorCode) -> Stack<T> {
        Stack {
            underflow,
            vec: vec![],
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
    /// Drops everything at and above `len`.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    /// Index of the topmost entry matching `f`.
    pub fn rposition<F>(&self, f: F) -> Option<usize>
    where
        F: Fn(&T) -> bool,
    {
        self.vec.iter().rposition(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_code() {
        let mut s: Stack<u32> = Stack::new(ErrorCode::ReturnWithoutGosub);
        s.push(10);
        assert_eq!(s.pop().unwrap(), 10);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::ReturnWithoutGosub);
    }

    #[test]
    fn test_rposition_truncate() {
        let mut s: Stack<char> = Stack::new(ErrorCode::NextWithoutFor);
        for c in "IJKJ".chars() {
            s.push(c);
        }
        assert_eq!(s.rposition(|c| *c == 'J'), Some(3));
        s.truncate(2);
        assert_eq!(s.last(), Some(&'J'));
        assert_eq!(s.len(), 2);
    }
}
