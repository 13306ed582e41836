use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program store
///
/// Statement text keyed by line number. Iteration is ascending and
/// `next_line_after` is the only sequencing rule the runtime uses.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, Line>>,
}

impl Listing {
    /// Parses multi-line program text. Nothing is replaced unless
    /// every line is valid; later duplicates win.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        let mut source: BTreeMap<LineNumber, Line> = BTreeMap::default();
        for (index, s) in text.lines().enumerate() {
            if s.trim().is_empty() {
                continue;
            }
            let malformed = || error!(MalformedLine; &format!("TEXT LINE {}", index + 1));
            let line = match Line::from_str(s) {
                Ok(line) => line,
                Err(_) => return Err(malformed()),
            };
            match line.number() {
                Some(number) => {
                    source.insert(number, line);
                }
                None => return Err(malformed()),
            }
        }
        self.source = Arc::new(source);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, number: LineNumber) -> Result<&Line> {
        match self.source.get(&number) {
            Some(line) => Ok(line),
            None => Err(error!(UndefinedLine; &number.to_string())),
        }
    }

    pub fn contains(&self, number: LineNumber) -> bool {
        self.source.contains_key(&number)
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// Smallest stored line number strictly greater than `number`.
    pub fn next_line_after(&self, number: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(n, _)| *n)
    }

    /// Numbered lines only; a direct line has nowhere to go.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        let number = line.number()?;
        Arc::make_mut(&mut self.source).insert(number, line)
    }

    pub fn remove(&mut self, number: LineNumber) -> Option<Line> {
        Arc::make_mut(&mut self.source).remove(&number)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    /// One `"<number> <text>"` line per statement, ascending.
    pub fn to_text(&self) -> String {
        self.lines().map(|line| format!("{}\n", line)).collect()
    }
}
