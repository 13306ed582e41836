use super::{LoopFrame, Result, Runtime};
use crate::error;
use crate::lang::{
    ast::{Expression, Statement},
    parse_expression, Ident, LineNumber,
};
use crate::mach::device::{FileHandle, Graphics};
use crate::mach::{eval::UserFunction, Evaluator, Function, Val};
use log::{debug, info};
use std::rc::Rc;

/// What the execution loop does after one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Continue,
    JumpTo(LineNumber),
    Halt,
}

const HELP: &str = "\
PRINT [expr][;|,]...          print values
[LET] var = expr              assign a variable
INPUT [\"prompt\";] var         read a value
IF cond THEN stmt|line [ELSE stmt|line]
GOTO line, GOSUB line, RETURN
FOR var = a TO b [STEP s], NEXT [var]
DATA, READ var[,var], RESTORE
DEF FNname(params) = expr     define a function
OPEN \"f\" FOR INPUT|OUTPUT AS #n, PRINT #n, CLOSE #n
CLS, PLOT, LINE, CIRCLE, RECTANGLE
WAIT secs, INKEY$, DATE, TIME
LIST, RUN, NEW, SAVE f, LOAD f, TRACE, HELP
STOP, END, QUIT
";

impl Runtime {
    /// Performs one statement. `line` is `None` in direct mode.
    pub fn execute(&mut self, statement: &Statement, line: Option<LineNumber>) -> Result<ControlAction> {
        use ControlAction::*;
        match statement {
            Statement::Circle(x, y, r) => {
                let (x, y, r) = (self.number(x)?, self.number(y)?, self.number(r)?);
                self.graphics()?.circle(x, y, r)?;
            }
            Statement::Close(handle) => {
                let handle = self.file_handle(handle)?;
                self.devices.files.close(handle)?;
            }
            Statement::Cls => self.graphics()?.clear()?,
            Statement::Data(_) | Statement::Rem => {}
            Statement::Date => {
                let now = self.devices.clock.now();
                self.print(&format!("{}\n", now.format("%Y-%m-%d")));
            }
            Statement::Def(name, params, body) => {
                let key: Rc<str> = name.name().to_ascii_uppercase().into();
                let function = UserFunction::new(params.clone(), Rc::clone(body));
                self.functions.insert(key, function);
            }
            Statement::End => return Ok(Halt),
            Statement::For(var, from, to, step) => return self.r#for(line, var, from, to, step),
            Statement::Gosub(target) => {
                let here = self.indirect(line)?;
                let target = self.line_target(target)?;
                self.calls.push(here);
                return Ok(JumpTo(target));
            }
            Statement::Goto(target) => return Ok(JumpTo(self.line_target(target)?)),
            Statement::Help => self.print(HELP),
            Statement::If(predicate, then, otherwise) => {
                if self.eval(predicate)?.truth()? {
                    return self.execute(then, line);
                }
                if let Some(otherwise) = otherwise {
                    return self.execute(otherwise, line);
                }
            }
            Statement::Inkey => match self.devices.keyboard.read_key() {
                Some(key) => self.print(&format!("Key pressed: {}\n", key)),
                None => debug!("no key"),
            },
            Statement::Input(prompt, var) => return self.r#input(prompt, var),
            Statement::Let(var, expr) => {
                Self::assignable(var)?;
                let val = self.eval(expr)?;
                self.vars.store(var, val)?;
            }
            Statement::Line(x1, y1, x2, y2) => {
                let (x1, y1, x2, y2) = self.four(x1, y1, x2, y2)?;
                self.graphics()?.line(x1, y1, x2, y2)?;
            }
            Statement::List => {
                let text = self.listing.to_text();
                self.print(&text);
            }
            Statement::Load(name) => {
                self.load(name)?;
                return Ok(Halt);
            }
            Statement::New => {
                self.listing.clear();
                self.rebuild();
                self.reset_session();
                return Ok(Halt);
            }
            Statement::Next(var) => return self.r#next(line, var),
            Statement::Open(name, mode, handle) => {
                let name = match self.eval(name)? {
                    Val::String(s) => s,
                    _ => return Err(error!(TypeMismatch)),
                };
                let handle = self.file_handle(handle)?;
                self.devices.files.open(handle, &name, *mode)?;
                debug!("opened {} as #{} for {:?}", name, handle, mode);
            }
            Statement::Plot(x, y) => {
                let (x, y) = (self.number(x)?, self.number(y)?);
                self.graphics()?.plot(x, y)?;
            }
            Statement::Print(items) => {
                let text = self.print_list(items)?;
                self.print(&text);
            }
            Statement::PrintFile(handle, items) => {
                let handle = self.file_handle(handle)?;
                let text = self.print_list(items)?;
                self.devices.files.write(handle, &text)?;
            }
            Statement::Quit => {
                self.quit = true;
                return Ok(Halt);
            }
            Statement::Read(vars) => {
                for var in vars {
                    Self::assignable(var)?;
                    let val = self.data.read()?;
                    self.vars.store(var, val)?;
                }
            }
            Statement::Rectangle(x1, y1, x2, y2) => {
                let (x1, y1, x2, y2) = self.four(x1, y1, x2, y2)?;
                self.graphics()?.rectangle(x1, y1, x2, y2)?;
            }
            Statement::Restore => self.data.restore(),
            Statement::Return => {
                self.indirect(line)?;
                let from = self.calls.pop()?;
                return Ok(self.line_after(from));
            }
            Statement::Run => {
                self.reset_session();
                return Ok(match self.listing.first() {
                    Some(first) => JumpTo(first),
                    None => Halt,
                });
            }
            Statement::Save(name) => {
                let text = self.listing.to_text();
                self.devices.storage.save_text(name, &text)?;
                info!("saved {} lines to {}", self.listing.len(), name);
            }
            Statement::Stop => {
                if let Some(line) = line {
                    info!("stop in {}", line);
                    self.print(&format!("BREAK IN {}\n", line));
                }
                return Ok(Halt);
            }
            Statement::Time => {
                let now = self.devices.clock.now();
                self.print(&format!("{}\n", now.format("%H:%M:%S")));
            }
            Statement::Trace => {
                self.tracing = !self.tracing;
                let msg = if self.tracing { "TRACE ON\n" } else { "TRACE OFF\n" };
                self.print(msg);
            }
            Statement::Wait(seconds) => {
                let seconds = self.number(seconds)?;
                if std::time::Duration::try_from_secs_f64(seconds).is_err() {
                    return Err(error!(IllegalFunctionCall));
                }
                self.devices.clock.sleep(seconds);
            }
        }
        Ok(Continue)
    }

    fn r#for(
        &mut self,
        line: Option<LineNumber>,
        var: &Ident,
        from: &Expression,
        to: &Expression,
        step: &Option<Expression>,
    ) -> Result<ControlAction> {
        let line = self.indirect(line)?;
        Self::assignable(var)?;
        let start = self.number(from)?;
        let limit = self.number(to)?;
        let step = match step {
            Some(step) => self.number(step)?,
            None => 1.0,
        };
        self.vars.store(var, Val::Number(start))?;
        if let Some(index) = self.loops.rposition(|frame| frame.var == *var) {
            self.loops.truncate(index);
        }
        self.loops.push(LoopFrame {
            line,
            var: var.clone(),
            limit,
            step,
        });
        Ok(ControlAction::Continue)
    }

    fn r#next(&mut self, line: Option<LineNumber>, var: &Option<Ident>) -> Result<ControlAction> {
        self.indirect(line)?;
        let index = match var {
            Some(var) if self.config.strict_next => {
                match self.loops.rposition(|frame| frame.var == *var) {
                    Some(index) => index,
                    None => return Err(error!(NextWithoutFor; var.name())),
                }
            }
            _ => match self.loops.len() {
                0 => return Err(error!(NextWithoutFor)),
                len => len - 1,
            },
        };
        self.loops.truncate(index + 1);
        let frame = match self.loops.last() {
            Some(frame) => frame.clone(),
            None => return Err(error!(NextWithoutFor)),
        };
        let current = self.vars.fetch(&frame.var)?.to_number()?;
        let next = current + frame.step;
        self.vars.store(&frame.var, Val::Number(next))?;
        let more = if frame.step >= 0.0 {
            next <= frame.limit
        } else {
            next >= frame.limit
        };
        if more {
            return Ok(self.line_after(frame.line));
        }
        self.loops.pop()?;
        Ok(ControlAction::Continue)
    }

    fn r#input(&mut self, prompt: &Option<Rc<str>>, var: &Ident) -> Result<ControlAction> {
        Self::assignable(var)?;
        let prompt = match prompt {
            Some(prompt) => prompt.to_string(),
            None => format!("Enter value for {}: ", var),
        };
        let text = match self.devices.console.read_line(&prompt) {
            Some(text) => text,
            None => {
                info!("end of input");
                return Ok(ControlAction::Halt);
            }
        };
        let val = if var.is_string() {
            Val::String(text.into())
        } else {
            let expr = parse_expression(&text)?;
            self.eval(&expr)?
        };
        self.vars.store(var, val)?;
        Ok(ControlAction::Continue)
    }

    fn eval(&mut self, expr: &Expression) -> Result<Val> {
        Evaluator::new(
            &self.vars,
            &self.functions,
            &mut self.rng,
            self.devices.clock.as_ref(),
        )
        .evaluate(expr)
    }

    fn number(&mut self, expr: &Expression) -> Result<f64> {
        self.eval(expr)?.to_number()
    }

    fn four(
        &mut self,
        a: &Expression,
        b: &Expression,
        c: &Expression,
        d: &Expression,
    ) -> Result<(f64, f64, f64, f64)> {
        Ok((self.number(a)?, self.number(b)?, self.number(c)?, self.number(d)?))
    }

    fn print(&mut self, text: &str) {
        self.devices.console.print(text);
    }

    fn print_list(&mut self, items: &[Expression]) -> Result<String> {
        let mut s = String::new();
        for item in items {
            match item {
                Expression::Char(ch) => s.push(*ch),
                _ => s.push_str(&self.eval(item)?.to_string()),
            }
        }
        Ok(s)
    }

    /// Target of GOTO or GOSUB, which must exist.
    fn line_target(&mut self, expr: &Expression) -> Result<LineNumber> {
        let target = LineNumber::try_from(self.eval(expr)?)?;
        if !self.listing.contains(target) {
            return Err(error!(UndefinedLine; &target.to_string()));
        }
        Ok(target)
    }

    fn line_after(&self, line: LineNumber) -> ControlAction {
        match self.listing.next_line_after(line) {
            Some(next) => ControlAction::JumpTo(next),
            None => ControlAction::Halt,
        }
    }

    fn file_handle(&mut self, expr: &Expression) -> Result<FileHandle> {
        let n = self.number(expr)?;
        if n.fract() != 0.0 || n < 0.0 || n > FileHandle::MAX as f64 {
            return Err(error!(BadFileNumber));
        }
        Ok(n as FileHandle)
    }

    /// The graphics device, initialized on first use.
    fn graphics(&mut self) -> Result<&mut dyn Graphics> {
        let graphics = match self.devices.graphics.as_mut() {
            Some(graphics) => graphics,
            None => return Err(error!(NoDevice; "GRAPHICS")),
        };
        if !self.graphics_ready {
            graphics.init()?;
            self.graphics_ready = true;
            debug!("graphics initialized");
        }
        Ok(graphics.as_mut())
    }

    /// Loops and subroutines need a program counter.
    fn indirect(&self, line: Option<LineNumber>) -> Result<LineNumber> {
        match line {
            Some(line) => Ok(line),
            None => Err(error!(IllegalDirect)),
        }
    }

    fn assignable(var: &Ident) -> Result<()> {
        if var.is_user_function() || Function::is_builtin(var.name()) {
            return Err(error!(SyntaxError; "RESERVED FOR BUILT-IN"));
        }
        Ok(())
    }
}
