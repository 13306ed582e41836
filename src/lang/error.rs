use super::LineNumber;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: Rc<str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "".into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    /// Attaches a line number unless the error already names one.
    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number.or(Some(line)),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.into(),
        }
    }

    pub fn get_message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        let msg = error.to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; &msg),
            _ => error!(DiskIoError; &msg),
        }
    }
}

impl std::error::Error for Error {}

/// The failure categories a caller can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedLine,
    NoSuchLine,
    Evaluation,
    EmptyLoopStack,
    EmptyCallStack,
    DataExhausted,
    InvalidStatement,
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    UndefinedLine = 8,
    DivisionByZero = 11,
    IllegalDirect = 12,
    TypeMismatch = 13,
    UndefinedVariable = 14,
    WrongArity = 15,
    UnknownStatement = 16,
    MalformedLine = 24,
    BadFileNumber = 52,
    FileNotFound = 53,
    DiskIoError = 57,
    NoDevice = 68,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        use ErrorCode::*;
        match self {
            MalformedLine => ErrorKind::MalformedLine,
            UndefinedLine => ErrorKind::NoSuchLine,
            SyntaxError | IllegalFunctionCall | Overflow | DivisionByZero | TypeMismatch
            | UndefinedVariable | WrongArity => ErrorKind::Evaluation,
            NextWithoutFor => ErrorKind::EmptyLoopStack,
            ReturnWithoutGosub => ErrorKind::EmptyCallStack,
            OutOfData => ErrorKind::DataExhausted,
            UnknownStatement | IllegalDirect => ErrorKind::InvalidStatement,
            BadFileNumber | FileNotFound | DiskIoError | NoDevice => ErrorKind::Resource,
        }
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "OUT OF DATA",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            UndefinedLine => "UNDEFINED LINE",
            DivisionByZero => "DIVISION BY ZERO",
            IllegalDirect => "ILLEGAL DIRECT",
            TypeMismatch => "TYPE MISMATCH",
            UndefinedVariable => "UNDEFINED VARIABLE",
            WrongArity => "WRONG NUMBER OF ARGUMENTS",
            UnknownStatement => "UNKNOWN STATEMENT",
            MalformedLine => "MALFORMED LINE",
            BadFileNumber => "BAD FILE NUMBER",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
            NoDevice => "DEVICE UNAVAILABLE",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code.as_str(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(ReturnWithoutGosub, 40).to_string(), "RETURN WITHOUT GOSUB IN 40");
        assert_eq!(
            error!(UndefinedVariable; "X").to_string(),
            "UNDEFINED VARIABLE; X"
        );
        assert_eq!(
            error!(SyntaxError, 10; "MISSING THEN").to_string(),
            "SYNTAX ERROR IN 10; MISSING THEN"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(error!(DivisionByZero).kind(), ErrorKind::Evaluation);
        assert_eq!(error!(UndefinedLine).kind(), ErrorKind::NoSuchLine);
        assert_eq!(error!(IllegalDirect).kind(), ErrorKind::InvalidStatement);
        assert_eq!(error!(BadFileNumber).kind(), ErrorKind::Resource);
    }
}
