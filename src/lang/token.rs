pub use super::ident::Ident;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(w.clone()))
        .chain(Operator::ALL.iter().map(|o| Token::Operator(o.clone())))
        .map(|t| (t.keyword(), t))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    /// Uninterpreted remainder of a line, e.g. after `REM` or `DATA`.
    Raw(String),
    LParen,
    RParen,
    Comma,
    Semicolon,
    Hash,
}

impl Token {
    /// Reserved word lookup. Case-insensitive.
    pub fn from_string(s: &str) -> Option<Token> {
        let upper = s.to_ascii_uppercase();
        STRING_TO_TOKEN.with(|stt| stt.get(upper.as_str()).cloned())
    }

    fn keyword(&self) -> &'static str {
        match self {
            Token::Word(w) => w.as_str(),
            Token::Operator(o) => o.as_str(),
            _ => "",
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Raw(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Hash => write!(f, "#"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    As,
    Circle,
    Close,
    Cls,
    Data,
    Date,
    Def,
    Else,
    End,
    For,
    Gosub,
    Goto,
    Help,
    If,
    Inkey,
    Input,
    Let,
    Line,
    List,
    Load,
    New,
    Next,
    Open,
    Plot,
    Print1,
    Print2,
    Quit,
    Read,
    Rectangle,
    Rem1,
    Rem2,
    Restore,
    Return,
    Run,
    Save,
    Step,
    Stop,
    Then,
    Time,
    To,
    Trace,
    Wait,
}

impl Word {
    pub const ALL: [Word; 42] = [
        Word::As,
        Word::Circle,
        Word::Close,
        Word::Cls,
        Word::Data,
        Word::Date,
        Word::Def,
        Word::Else,
        Word::End,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::Help,
        Word::If,
        Word::Inkey,
        Word::Input,
        Word::Let,
        Word::Line,
        Word::List,
        Word::Load,
        Word::New,
        Word::Next,
        Word::Open,
        Word::Plot,
        Word::Print1,
        Word::Print2,
        Word::Quit,
        Word::Read,
        Word::Rectangle,
        Word::Rem1,
        Word::Rem2,
        Word::Restore,
        Word::Return,
        Word::Run,
        Word::Save,
        Word::Step,
        Word::Stop,
        Word::Then,
        Word::Time,
        Word::To,
        Word::Trace,
        Word::Wait,
    ];

    /// Words after which the rest of the line is kept as raw text.
    pub fn takes_raw_text(&self) -> bool {
        use Word::*;
        matches!(self, Rem1 | Rem2 | Data | Save | Load)
    }

    fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            As => "AS",
            Circle => "CIRCLE",
            Close => "CLOSE",
            Cls => "CLS",
            Data => "DATA",
            Date => "DATE",
            Def => "DEF",
            Else => "ELSE",
            End => "END",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            Help => "HELP",
            If => "IF",
            Inkey => "INKEY$",
            Input => "INPUT",
            Let => "LET",
            Line => "LINE",
            List => "LIST",
            Load => "LOAD",
            New => "NEW",
            Next => "NEXT",
            Open => "OPEN",
            Plot => "PLOT",
            Print1 => "PRINT",
            Print2 => "?",
            Quit => "QUIT",
            Read => "READ",
            Rectangle => "RECTANGLE",
            Rem1 => "REM",
            Rem2 => "'",
            Restore => "RESTORE",
            Return => "RETURN",
            Run => "RUN",
            Save => "SAVE",
            Step => "STEP",
            Stop => "STOP",
            Then => "THEN",
            Time => "TIME",
            To => "TO",
            Trace => "TRACE",
            Wait => "WAIT",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Equal,
    EqualEqual,
    NotEqual,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
}

impl Operator {
    pub const ALL: [Operator; 17] = [
        Operator::Caret,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulus,
        Operator::Plus,
        Operator::Minus,
        Operator::Equal,
        Operator::EqualEqual,
        Operator::NotEqual,
        Operator::BangEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::Not,
        Operator::And,
        Operator::Or,
    ];

    pub fn is_reserved_word(&self) -> bool {
        use Operator::*;
        matches!(self, Modulus | Not | And | Or)
    }

    fn as_str(&self) -> &'static str {
        use Operator::*;
        match self {
            Caret => "^",
            Multiply => "*",
            Divide => "/",
            Modulus => "MOD",
            Plus => "+",
            Minus => "-",
            Equal => "=",
            EqualEqual => "==",
            NotEqual => "<>",
            BangEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Not => "NOT",
            And => "AND",
            Or => "OR",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("REM");
        assert_eq!(t, Some(Token::Word(Word::Rem1)));
        let t = Token::from_string("gosub");
        assert_eq!(t, Some(Token::Word(Word::Gosub)));
        let t = Token::from_string("<>");
        assert_eq!(t, Some(Token::Operator(Operator::NotEqual)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }
}
