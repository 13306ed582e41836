use super::Ident;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    Circle(Expression, Expression, Expression),
    Close(Expression),
    Cls,
    Data(Vec<Datum>),
    Date,
    Def(Ident, Vec<Ident>, Rc<Expression>),
    End,
    For(Ident, Expression, Expression, Option<Expression>),
    Gosub(Expression),
    Goto(Expression),
    Help,
    If(Expression, Box<Statement>, Option<Box<Statement>>),
    Inkey,
    Input(Option<Rc<str>>, Ident),
    Let(Ident, Expression),
    Line(Expression, Expression, Expression, Expression),
    List,
    Load(Rc<str>),
    New,
    Next(Option<Ident>),
    Open(Expression, FileMode, Expression),
    Plot(Expression, Expression),
    Print(Vec<Expression>),
    PrintFile(Expression, Vec<Expression>),
    Quit,
    Read(Vec<Ident>),
    Rectangle(Expression, Expression, Expression, Expression),
    Rem,
    Restore,
    Return,
    Run,
    Save(Rc<str>),
    Stop,
    Time,
    Trace,
    Wait(Expression),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FileMode {
    Input,
    Output,
}

/// One literal from a `DATA` statement.
#[derive(Debug, PartialEq, Clone)]
pub enum Datum {
    Number(f64),
    String(Rc<str>),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(f64),
    String(Rc<str>),
    Char(char),
    Var(Ident),
    Function(Ident, Vec<Expression>),
    Negation(Box<Expression>),
    Not(Box<Expression>),
    Power(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Modulus(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}
