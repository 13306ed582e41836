use super::{ast::*, lex, token::*, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parses the text of one statement. An empty text is a no-op `REM`.
pub fn parse(s: &str) -> Result<Statement> {
    let tokens = lex(s);
    let mut parse = Parser::new(&tokens);
    if parse.peek().is_none() {
        return Ok(Statement::Rem);
    }
    let statement = parse.statement()?;
    parse.expect_end()?;
    Ok(statement)
}

pub fn parse_expression(s: &str) -> Result<Expression> {
    let tokens = lex(s);
    let mut parse = Parser::new(&tokens);
    let expr = parse.expression()?;
    parse.expect_end()?;
    Ok(expr)
}

const UNARY_NOT: usize = 3;
const UNARY_MINUS: usize = 7;
const MAX_NESTING: usize = 100;

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            token_stream: tokens.iter(),
            peeked: None,
            depth: 0,
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            let t = self.token_stream.next()?;
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.peek() {
            Some(Token::Ident(_)) => Statement::r#let(self),
            Some(Token::Word(_)) => match self.next() {
                Some(Token::Word(word)) => Statement::for_word(self, word),
                _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
            },
            Some(t) => Err(error!(UnknownStatement; &t.to_string())),
            None => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            if this.depth >= MAX_NESTING {
                return Err(error!(SyntaxError; "EXPRESSION TOO COMPLEX"));
            }
            this.depth += 1;
            let expr = climb(this, precedence);
            this.depth -= 1;
            expr
        }
        fn climb(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Ident(i)) => match this.peek() {
                    Some(&&Token::LParen) => Expression::Function(i.clone(), this.expression_list()?),
                    _ => Expression::Var(i.clone()),
                },
                Some(Token::Literal(l)) => Expression::for_literal(l)?,
                Some(Token::Operator(Operator::Minus)) => {
                    Expression::Negation(Box::new(parse(this, UNARY_MINUS)?))
                }
                Some(Token::Operator(Operator::Plus)) => parse(this, UNARY_MINUS)?,
                Some(Token::Operator(Operator::Not)) => {
                    Expression::Not(Box::new(parse(this, UNARY_NOT)?))
                }
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                match this.peek() {
                    Some(Token::Operator(op)) => {
                        let op_precedence = match Expression::op_precedence(op) {
                            Some(p) => p,
                            None => break,
                        };
                        if op_precedence < precedence {
                            break;
                        }
                        this.next();
                        let rhs = parse(this, op_precedence + 1)?;
                        lhs = Expression::for_binary_op(op, lhs, rhs);
                    }
                    _ => break,
                }
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let mut v: Vec<Expression> = vec![];
        if let Some(Token::RParen) = self.peek() {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.expression()?);
            match self.next() {
                Some(Token::RParen) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn printer_list(&mut self) -> Result<Vec<Expression>> {
        let mut v: Vec<Expression> = vec![];
        let mut linefeed = true;
        loop {
            match self.peek() {
                None | Some(Token::Word(Word::Else)) => {
                    if linefeed {
                        v.push(Expression::Char('\n'));
                    }
                    return Ok(v);
                }
                Some(Token::Semicolon) => {
                    linefeed = false;
                    self.next();
                }
                Some(Token::Comma) => {
                    linefeed = false;
                    self.next();
                    v.push(Expression::Char('\t'));
                }
                _ => {
                    linefeed = true;
                    v.push(self.expression()?);
                }
            };
        }
    }

    /// Comma separated expressions with a fixed count, as in `LINE 1,2,3,4`.
    fn arguments(&mut self, count: usize) -> Result<Vec<Expression>> {
        let mut v = Vec::with_capacity(count);
        for index in 0..count {
            if index > 0 {
                self.expect(Token::Comma)?;
            }
            v.push(self.expression()?);
        }
        Ok(v)
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.clone()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn ident_list(&mut self) -> Result<Vec<Ident>> {
        let mut v = vec![self.ident()?];
        while let Some(Token::Comma) = self.peek() {
            self.next();
            v.push(self.ident()?);
        }
        Ok(v)
    }

    fn raw(&mut self) -> &'a str {
        match self.peek() {
            Some(Token::Raw(_)) => match self.next() {
                Some(Token::Raw(s)) => s,
                _ => "",
            },
            _ => "",
        }
    }

    fn maybe(&mut self, token: Token) -> bool {
        match self.peek() {
            Some(t) if **t == token => {
                self.next();
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError;
            match token {
                Token::Unknown(_) | Token::Whitespace(_) | Token::Raw(_) => "UNEXPECTED TOKEN",
                Token::Literal(_) => "EXPECTED LITERAL",
                Token::Word(Word::Then) => "MISSING THEN",
                Token::Word(Word::To) => "MISSING TO",
                Token::Word(_) => "EXPECTED RESERVED WORD",
                Token::Operator(Operator::Equal) => "EXPECTED =",
                Token::Operator(_) => "EXPECTED OPERATOR",
                Token::Ident(_) => "EXPECTED IDENTIFIER",
                Token::LParen => "EXPECTED LEFT PARENTHESIS",
                Token::RParen => "EXPECTED RIGHT PARENTHESIS",
                Token::Comma => "EXPECTED COMMA",
                Token::Semicolon => "EXPECTED SEMICOLON",
                Token::Hash => "EXPECTED #",
            }
        ))
    }

    fn expect_end(&mut self) -> Result<()> {
        match self.next() {
            None => Ok(()),
            Some(t) => Err(error!(SyntaxError; &format!("UNEXPECTED {}", t))),
        }
    }
}

impl Expression {
    fn for_binary_op(op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            Caret => Expression::Power(lhs, rhs),
            Multiply => Expression::Multiply(lhs, rhs),
            Divide => Expression::Divide(lhs, rhs),
            Modulus => Expression::Modulus(lhs, rhs),
            Plus => Expression::Add(lhs, rhs),
            Minus => Expression::Subtract(lhs, rhs),
            Equal | EqualEqual => Expression::Equal(lhs, rhs),
            NotEqual | BangEqual => Expression::NotEqual(lhs, rhs),
            Less => Expression::Less(lhs, rhs),
            LessEqual => Expression::LessEqual(lhs, rhs),
            Greater => Expression::Greater(lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(lhs, rhs),
            And => Expression::And(lhs, rhs),
            Or => Expression::Or(lhs, rhs),
            Not => unreachable!("NOT is unary"),
        }
    }

    /// Binary operator precedence; `None` for operators that are only unary.
    fn op_precedence(op: &Operator) -> Option<usize> {
        use Operator::*;
        match op {
            Or => Some(1),
            And => Some(2),
            Not => None,
            Equal | EqualEqual | NotEqual | BangEqual | Less | LessEqual | Greater
            | GreaterEqual => Some(4),
            Plus | Minus => Some(5),
            Multiply | Divide | Modulus => Some(6),
            Caret => Some(8),
        }
    }

    fn for_literal(lit: &Literal) -> Result<Expression> {
        match lit {
            Literal::Number(s) => match s.parse::<f64>() {
                Ok(n) => Ok(Expression::Number(n)),
                Err(_) => Err(error!(SyntaxError; &format!("INVALID NUMBER {}", s))),
            },
            Literal::String(s) => Ok(Expression::String(s.as_str().into())),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        use Word::*;
        match word {
            Circle => {
                let mut a = parse.arguments(3)?.into_iter();
                match (a.next(), a.next(), a.next()) {
                    (Some(x), Some(y), Some(r)) => Ok(Statement::Circle(x, y, r)),
                    _ => Err(error!(SyntaxError; "EXPECTED X,Y,RADIUS")),
                }
            }
            Close => {
                parse.maybe(Token::Hash);
                Ok(Statement::Close(parse.expression()?))
            }
            Cls => Ok(Statement::Cls),
            Data => Ok(Statement::Data(Datum::parse_list(parse.raw()))),
            Date => Ok(Statement::Date),
            Def => Self::r#def(parse),
            End => Ok(Statement::End),
            For => Self::r#for(parse),
            Gosub => Ok(Statement::Gosub(parse.expression()?)),
            Goto => Ok(Statement::Goto(parse.expression()?)),
            Help => Ok(Statement::Help),
            If => Self::r#if(parse),
            Inkey => Ok(Statement::Inkey),
            Input => Self::r#input(parse),
            Let => Self::r#let(parse),
            Line => {
                let (x1, y1, x2, y2) = Self::four(parse)?;
                Ok(Statement::Line(x1, y1, x2, y2))
            }
            List => Ok(Statement::List),
            Load => Ok(Statement::Load(Self::filename(parse)?)),
            New => Ok(Statement::New),
            Next => match parse.peek() {
                Some(Token::Ident(_)) => Ok(Statement::Next(Some(parse.ident()?))),
                _ => Ok(Statement::Next(None)),
            },
            Open => Self::r#open(parse),
            Plot => {
                let mut a = parse.arguments(2)?.into_iter();
                match (a.next(), a.next()) {
                    (Some(x), Some(y)) => Ok(Statement::Plot(x, y)),
                    _ => Err(error!(SyntaxError; "EXPECTED X,Y")),
                }
            }
            Print1 | Print2 => Self::r#print(parse),
            Quit => Ok(Statement::Quit),
            Read => Ok(Statement::Read(parse.ident_list()?)),
            Rectangle => {
                let (x1, y1, x2, y2) = Self::four(parse)?;
                Ok(Statement::Rectangle(x1, y1, x2, y2))
            }
            Rem1 | Rem2 => {
                parse.raw();
                Ok(Statement::Rem)
            }
            Restore => Ok(Statement::Restore),
            Return => Ok(Statement::Return),
            Run => Ok(Statement::Run),
            Save => Ok(Statement::Save(Self::filename(parse)?)),
            Stop => Ok(Statement::Stop),
            Time => Ok(Statement::Time),
            Trace => Ok(Statement::Trace),
            Wait => Ok(Statement::Wait(parse.expression()?)),
            As | Else | Step | Then | To => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.ident()?;
        match parse.peek() {
            Some(Token::Operator(Operator::Equal)) => {
                parse.next();
            }
            _ => return Err(error!(UnknownStatement; &ident.to_string())),
        }
        Ok(Statement::Let(ident, parse.expression()?))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        if parse.maybe(Token::Hash) {
            let handle = parse.expression()?;
            parse.expect(Token::Comma)?;
            return Ok(Statement::PrintFile(handle, parse.printer_list()?));
        }
        Ok(Statement::Print(parse.printer_list()?))
    }

    fn r#input(parse: &mut Parser) -> Result<Statement> {
        let mut prompt = None;
        if let Some(Token::Literal(Literal::String(_))) = parse.peek() {
            if let Some(Token::Literal(Literal::String(s))) = parse.next() {
                prompt = Some(s.as_str().into());
            }
            if !parse.maybe(Token::Semicolon) {
                parse.expect(Token::Comma)?;
            }
        }
        Ok(Statement::Input(prompt, parse.ident()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        let predicate = parse.expression()?;
        let then = match parse.peek() {
            Some(Token::Word(Word::Goto)) => {
                parse.next();
                Statement::Goto(parse.expression()?)
            }
            _ => {
                parse.expect(Token::Word(Word::Then))?;
                Self::branch(parse)?
            }
        };
        let otherwise = if parse.maybe(Token::Word(Word::Else)) {
            Some(Box::new(Self::branch(parse)?))
        } else {
            None
        };
        Ok(Statement::If(predicate, Box::new(then), otherwise))
    }

    fn branch(parse: &mut Parser) -> Result<Statement> {
        match parse.peek() {
            Some(Token::Literal(Literal::Number(_))) => Ok(Statement::Goto(parse.expression()?)),
            _ => parse.statement(),
        }
    }

    fn r#for(parse: &mut Parser) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        parse.expect(Token::Word(Word::To))?;
        let to = parse.expression()?;
        let step = if parse.maybe(Token::Word(Word::Step)) {
            Some(parse.expression()?)
        } else {
            None
        };
        Ok(Statement::For(ident, from, to, step))
    }

    fn r#def(parse: &mut Parser) -> Result<Statement> {
        let mut name = parse.ident()?;
        if name.name().eq_ignore_ascii_case("FN") {
            let rest = parse.ident()?;
            name = Ident::new(&format!("{}{}", name, rest));
        }
        if !name.is_user_function() {
            return Err(error!(SyntaxError; "FUNCTION NAME MUST BEGIN WITH FN"));
        }
        let mut params = vec![];
        if parse.maybe(Token::LParen) {
            if !parse.maybe(Token::RParen) {
                params = parse.ident_list()?;
                parse.expect(Token::RParen)?;
            }
        }
        parse.expect(Token::Operator(Operator::Equal))?;
        let body = parse.expression()?;
        Ok(Statement::Def(name, params, Rc::new(body)))
    }

    fn r#open(parse: &mut Parser) -> Result<Statement> {
        let filename = parse.expression()?;
        parse.expect(Token::Word(Word::For))?;
        let mode = match parse.next() {
            Some(Token::Word(Word::Input)) => FileMode::Input,
            Some(Token::Ident(i)) if i.name().eq_ignore_ascii_case("OUTPUT") => FileMode::Output,
            _ => return Err(error!(SyntaxError; "EXPECTED INPUT OR OUTPUT")),
        };
        parse.expect(Token::Word(Word::As))?;
        parse.maybe(Token::Hash);
        Ok(Statement::Open(filename, mode, parse.expression()?))
    }

    fn four(parse: &mut Parser) -> Result<(Expression, Expression, Expression, Expression)> {
        let mut a = parse.arguments(4)?.into_iter();
        match (a.next(), a.next(), a.next(), a.next()) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => Ok((x1, y1, x2, y2)),
            _ => Err(error!(SyntaxError; "EXPECTED X1,Y1,X2,Y2")),
        }
    }

    fn filename(parse: &mut Parser) -> Result<Rc<str>> {
        let raw = parse.raw();
        let name = raw.trim_matches('"').trim();
        if name.is_empty() {
            return Err(error!(SyntaxError; "EXPECTED FILE NAME"));
        }
        Ok(name.into())
    }
}

impl Datum {
    /// Splits the text after `DATA` on commas outside of quotes.
    fn parse_list(raw: &str) -> Vec<Datum> {
        let mut items = vec![];
        if raw.trim().is_empty() {
            return items;
        }
        let mut item = String::new();
        let mut quoted = false;
        for ch in raw.chars() {
            match ch {
                '"' => {
                    quoted = !quoted;
                    item.push(ch);
                }
                ',' if !quoted => {
                    items.push(Datum::from_str(&item));
                    item.clear();
                }
                _ => item.push(ch),
            }
        }
        items.push(Datum::from_str(&item));
        items
    }

    fn from_str(s: &str) -> Datum {
        let s = s.trim();
        if s.starts_with('"') {
            return Datum::String(s.trim_matches('"').into());
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Datum::Number(n),
            _ => Datum::String(s.into()),
        }
    }
}
