use super::{ast::Statement, parse, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// One line of source text, either numbered (part of a program)
/// or direct (executed immediately).
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    text: String,
}

impl Line {
    pub fn new(number: LineNumber, text: &str) -> Line {
        Line {
            number: Some(number),
            text: text.trim().to_string(),
        }
    }

    /// Splits an optional leading line number from the statement body.
    /// `10PRINT` and `10 PRINT` are the same line. A line number of zero
    /// or one too large to store is malformed.
    pub fn from_str(s: &str) -> Result<Line> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r').trim();
        let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Ok(Line {
                number: None,
                text: s.to_string(),
            });
        }
        match s[..digits].parse::<LineNumber>() {
            Ok(n) if n > 0 => Ok(Line::new(n, &s[digits..])),
            _ => Err(error!(MalformedLine; &format!("INVALID LINE NUMBER {}", &s[..digits]))),
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn ast(&self) -> Result<Statement> {
        match parse(&self.text) {
            Ok(statement) => Ok(statement),
            Err(e) => match self.number {
                Some(n) => Err(e.in_line_number(n)),
                None => Err(e),
            },
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(n) if self.text.is_empty() => write!(f, "{}", n),
            Some(n) => write!(f, "{} {}", n, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}
