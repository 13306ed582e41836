use super::{
    device::{Clock, SystemClock},
    Function, Operation, Val, Var,
};
use crate::error;
use crate::lang::{ast::Expression, parse_expression, Error, Ident};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// `DEF FN` calls nested deeper than this are an illegal function call.
const MAX_DEPTH: usize = 100;

/// A single-expression function from `DEF FN`.
#[derive(Debug, Clone)]
pub struct UserFunction {
    params: Vec<Ident>,
    body: Rc<Expression>,
}

impl UserFunction {
    pub fn new(params: Vec<Ident>, body: Rc<Expression>) -> UserFunction {
        UserFunction { params, body }
    }
}

/// `DEF FN` definitions keyed by upper-cased name.
pub type UserFunctions = HashMap<Rc<str>, UserFunction>;

/// Evaluates one expression parse from `source` against `vars`.
pub fn evaluate(source: &str, vars: &Var) -> Result<Val> {
    let expr = parse_expression(source)?;
    let functions = UserFunctions::new();
    let mut rng = StdRng::from_entropy();
    Evaluator::new(vars, &functions, &mut rng, &SystemClock).evaluate(&expr)
}

/// ## Expression evaluation
///
/// Reads variables but never writes them. Parameters of a `DEF FN`
/// call shadow variables of the same name while its body runs.
pub struct Evaluator<'a> {
    vars: &'a Var,
    functions: &'a UserFunctions,
    rng: &'a mut StdRng,
    clock: &'a dyn Clock,
    locals: HashMap<Rc<str>, Val>,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        vars: &'a Var,
        functions: &'a UserFunctions,
        rng: &'a mut StdRng,
        clock: &'a dyn Clock,
    ) -> Evaluator<'a> {
        Evaluator {
            vars,
            functions,
            rng,
            clock,
            locals: HashMap::new(),
            depth: 0,
        }
    }

    pub fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        use Expression::*;
        match expr {
            Number(n) => Ok(Val::Number(*n)),
            String(s) => Ok(Val::String(s.clone())),
            Char(c) => Ok(Val::String(c.to_string().into())),
            Expression::Var(ident) => self.variable(ident),
            Expression::Function(ident, args) => self.call(ident, args),
            Negation(e) => Operation::negate(self.evaluate(e)?),
            Not(e) => Operation::not(self.evaluate(e)?),
            Power(l, r) => Operation::power(self.evaluate(l)?, self.evaluate(r)?),
            Multiply(l, r) => Operation::multiply(self.evaluate(l)?, self.evaluate(r)?),
            Divide(l, r) => Operation::divide(self.evaluate(l)?, self.evaluate(r)?),
            Modulus(l, r) => Operation::modulus(self.evaluate(l)?, self.evaluate(r)?),
            Add(l, r) => Operation::sum(self.evaluate(l)?, self.evaluate(r)?),
            Subtract(l, r) => Operation::subtract(self.evaluate(l)?, self.evaluate(r)?),
            Equal(l, r) => Operation::equal(self.evaluate(l)?, self.evaluate(r)?),
            NotEqual(l, r) => Operation::not_equal(self.evaluate(l)?, self.evaluate(r)?),
            Less(l, r) => Operation::less(self.evaluate(l)?, self.evaluate(r)?),
            LessEqual(l, r) => Operation::less_equal(self.evaluate(l)?, self.evaluate(r)?),
            Greater(l, r) => Operation::greater(self.evaluate(l)?, self.evaluate(r)?),
            GreaterEqual(l, r) => Operation::greater_equal(self.evaluate(l)?, self.evaluate(r)?),
            And(l, r) => {
                if !self.evaluate(l)?.truth()? {
                    return Ok(Val::Boolean(false));
                }
                Ok(Val::Boolean(self.evaluate(r)?.truth()?))
            }
            Or(l, r) => {
                if self.evaluate(l)?.truth()? {
                    return Ok(Val::Boolean(true));
                }
                Ok(Val::Boolean(self.evaluate(r)?.truth()?))
            }
        }
    }

    fn variable(&mut self, ident: &Ident) -> Result<Val> {
        if let Some(val) = self.locals.get(ident.name()) {
            return Ok(val.clone());
        }
        if ident.is_user_function() || Function::is_builtin(ident.name()) {
            return self.call(ident, &[]);
        }
        self.vars.fetch(ident)
    }

    fn call(&mut self, ident: &Ident, args: &[Expression]) -> Result<Val> {
        if ident.is_user_function() {
            return self.call_user(ident, args);
        }
        let name = ident.name();
        let arity = match Function::arity(name) {
            Some(arity) => arity,
            None => return Err(error!(UndefinedVariable; name)),
        };
        if !arity.contains(&args.len()) {
            return Err(error!(WrongArity; name));
        }
        let mut vals = Vec::with_capacity(args.len());
        for arg in args {
            vals.push(self.evaluate(arg)?);
        }
        Function::call(name, vals, &mut *self.rng, self.clock)
    }

    fn call_user(&mut self, ident: &Ident, args: &[Expression]) -> Result<Val> {
        let key = ident.name().to_ascii_uppercase();
        let functions = self.functions;
        let function = match functions.get(key.as_str()) {
            Some(f) => f,
            None => return Err(error!(UndefinedVariable; ident.name())),
        };
        if function.params.len() != args.len() {
            return Err(error!(WrongArity; ident.name()));
        }
        if self.depth >= MAX_DEPTH {
            return Err(error!(IllegalFunctionCall; "FUNCTION NESTING TOO DEEP"));
        }
        let mut locals = HashMap::new();
        for (param, arg) in function.params.iter().zip(args) {
            let val = self.evaluate(arg)?;
            if param.is_string() != val.is_string() {
                return Err(error!(TypeMismatch; param.name()));
            }
            locals.insert(param.name().clone(), val);
        }
        let mut inner = Evaluator {
            vars: self.vars,
            functions,
            rng: &mut *self.rng,
            clock: self.clock,
            locals,
            depth: self.depth + 1,
        };
        inner.evaluate(&function.body)
    }
}
