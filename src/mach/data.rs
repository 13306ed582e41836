use super::Val;
use crate::error;
use crate::lang::{
    ast::{Datum, Statement},
    Error,
};

type Result<T> = std::result::Result<T, Error>;

/// ## DATA sequence and READ cursor

#[derive(Debug, Default)]
pub struct Data {
    items: Vec<Datum>,
    cursor: usize,
}

impl Data {
    /// Gathers every `DATA` literal in program order and rewinds.
    pub fn prescan<'a, I>(&mut self, statements: I)
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        self.items.clear();
        for statement in statements {
            if let Statement::Data(items) = statement {
                self.items.extend(items.iter().cloned());
            }
        }
        self.cursor = 0;
    }

    pub fn read(&mut self) -> Result<Val> {
        match self.items.get(self.cursor) {
            Some(datum) => {
                self.cursor += 1;
                Ok(match datum {
                    Datum::Number(n) => Val::Number(*n),
                    Datum::String(s) => Val::String(s.clone()),
                })
            }
            None => Err(error!(OutOfData)),
        }
    }

    pub fn restore(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{parse, ErrorCode};

    #[test]
    fn test_read_across_statements() {
        let program = ["DATA 1,2,3", "PRINT X", "DATA \"FOUR\", 5"];
        let statements: Vec<Statement> = program.iter().map(|s| parse(s).unwrap()).collect();
        let mut data = Data::default();
        data.prescan(&statements);
        assert_eq!(data.len(), 5);
        assert_eq!(data.read().unwrap(), Val::Number(1.0));
        data.read().unwrap();
        data.read().unwrap();
        assert_eq!(data.read().unwrap(), Val::from("FOUR"));
        assert_eq!(data.read().unwrap(), Val::Number(5.0));
        assert_eq!(data.read().unwrap_err().code(), ErrorCode::OutOfData);
        data.restore();
        assert_eq!(data.cursor(), 0);
        assert_eq!(data.read().unwrap(), Val::Number(1.0));
    }
}
