use super::{device::Devices, eval::UserFunctions, Data, Listing, Stack, Var};
use crate::lang::{ast::Statement, Error, ErrorCode, Ident, Line, LineNumber};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod exec;

pub use exec::ControlAction;

type Result<T> = std::result::Result<T, Error>;

/// Session options chosen by the embedder.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `NEXT I` unwinds to the loop over `I` instead of closing
    /// the innermost loop.
    pub strict_next: bool,
    /// Start with line tracing on, as if `TRACE` had been entered.
    pub trace: bool,
    /// Fixed seed for `RND`. Entropy seeded when `None`.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

#[derive(Debug, Clone)]
struct LoopFrame {
    line: LineNumber,
    var: Ident,
    limit: f64,
    step: f64,
}

/// ## Interpreter session
///
/// Owns the program, every piece of control-flow state and the
/// collaborators. Single threaded; the only thing shared with other
/// threads is the halt flag.
pub struct Runtime {
    config: Config,
    devices: Devices,
    listing: Listing,
    cache: BTreeMap<LineNumber, Rc<Statement>>,
    data: Data,
    vars: Var,
    functions: UserFunctions,
    loops: Stack<LoopFrame>,
    calls: Stack<LineNumber>,
    pc: Option<LineNumber>,
    state: State,
    tracing: bool,
    graphics_ready: bool,
    quit: bool,
    halt: Arc<AtomicBool>,
    rng: StdRng,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default(), Devices::default())
    }
}

impl Runtime {
    pub fn new(config: Config, devices: Devices) -> Runtime {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runtime {
            tracing: config.trace,
            config,
            devices,
            listing: Listing::default(),
            cache: BTreeMap::new(),
            data: Data::default(),
            vars: Var::new(),
            functions: UserFunctions::new(),
            loops: Stack::new(ErrorCode::NextWithoutFor),
            calls: Stack::new(ErrorCode::ReturnWithoutGosub),
            pc: None,
            state: State::Halted,
            graphics_ready: false,
            quit: false,
            halt: Arc::new(AtomicBool::new(false)),
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn devices_mut(&mut self) -> &mut Devices {
        &mut self.devices
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn pc(&self) -> Option<LineNumber> {
        self.pc
    }

    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    pub fn call_depth(&self) -> usize {
        self.calls.len()
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    /// True once `QUIT` has asked the front end to exit.
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Requests a halt before the next statement.
    pub fn interrupt(&self) {
        self.halt.store(true, Ordering::SeqCst);
    }

    /// The flag behind [`Runtime::interrupt`], for signal handlers.
    pub fn halt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.halt)
    }

    /// Replaces the program. On error the old program stays.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.listing.load_str(text)?;
        self.rebuild();
        self.reset_session();
        self.stop();
        debug!("loaded {} lines", self.listing.len());
        Ok(())
    }

    /// Loads program text through the storage device.
    pub fn load(&mut self, name: &str) -> Result<()> {
        let text = self.devices.storage.load_text(name)?;
        self.load_str(&text)
    }

    /// Console entry. A numbered line edits the program (a bare number
    /// deletes), anything else executes immediately. Errors are reported
    /// to the console.
    pub fn enter(&mut self, s: &str) -> State {
        let line = match Line::from_str(s) {
            Ok(line) => line,
            Err(e) => {
                self.report(&e);
                return self.state;
            }
        };
        match line.number() {
            Some(number) => {
                if line.is_empty() {
                    self.listing.remove(number);
                } else {
                    self.listing.insert(line);
                }
                self.rebuild();
            }
            None if line.is_empty() => {}
            None => match line.ast().and_then(|s| self.execute(&s, None)) {
                Ok(action) => self.apply(action, None),
                Err(e) => self.report(&e),
            },
        }
        self.state
    }

    /// Resets the session and points at the first line.
    pub fn start(&mut self) -> State {
        self.reset_session();
        match self.listing.first() {
            Some(first) => self.apply(ControlAction::JumpTo(first), None),
            None => self.stop(),
        }
        self.state
    }

    /// Runs the program from the top until it halts.
    pub fn run(&mut self) -> State {
        self.start();
        self.finish()
    }

    /// Keeps stepping until halted.
    pub fn finish(&mut self) -> State {
        while self.step() == State::Running {}
        self.state
    }

    /// At most `cycles` statements.
    pub fn execute_cycles(&mut self, cycles: usize) -> State {
        for _ in 0..cycles {
            if self.step() == State::Halted {
                break;
            }
        }
        self.state
    }

    /// Executes the statement at the program counter and advances it.
    pub fn step(&mut self) -> State {
        let line = match (self.state, self.pc) {
            (State::Running, Some(line)) => line,
            _ => {
                self.stop();
                return self.state;
            }
        };
        if self.halt.swap(false, Ordering::SeqCst) {
            self.break_in(line);
            return self.state;
        }
        if self.tracing {
            self.devices.console.print(&format!("[{}]", line));
        }
        trace!("line {}", line);
        let action = match self
            .statement(line)
            .and_then(|s| self.execute(&s, Some(line)))
        {
            Ok(action) => action,
            Err(e) => {
                self.report(&e.in_line_number(line));
                ControlAction::Continue
            }
        };
        self.apply(action, Some(line));
        self.state
    }

    fn apply(&mut self, action: ControlAction, line: Option<LineNumber>) {
        match action {
            ControlAction::Continue => {
                if let Some(line) = line {
                    match self.listing.next_line_after(line) {
                        Some(next) => self.pc = Some(next),
                        None => {
                            debug!("ran off the end after {}", line);
                            self.stop();
                        }
                    }
                }
            }
            ControlAction::JumpTo(target) => {
                if self.state == State::Halted {
                    debug!("running from {}", target);
                    self.halt.store(false, Ordering::SeqCst);
                }
                self.pc = Some(target);
                self.state = State::Running;
            }
            ControlAction::Halt => self.stop(),
        }
    }

    fn statement(&mut self, line: LineNumber) -> Result<Rc<Statement>> {
        if let Some(statement) = self.cache.get(&line) {
            return Ok(Rc::clone(statement));
        }
        let statement = Rc::new(self.listing.get(line)?.ast()?);
        self.cache.insert(line, Rc::clone(&statement));
        Ok(statement)
    }

    /// Reparses the program and gathers DATA again after any change.
    fn rebuild(&mut self) {
        self.cache.clear();
        for line in self.listing.lines() {
            if let (Some(number), Ok(statement)) = (line.number(), line.ast()) {
                self.cache.insert(number, Rc::new(statement));
            }
        }
        self.data.prescan(self.cache.values().map(|s| s.as_ref()));
    }

    fn reset_session(&mut self) {
        self.vars.clear();
        self.functions.clear();
        self.loops.clear();
        self.calls.clear();
        self.data.restore();
        self.devices.files.close_all();
        self.pc = None;
    }

    fn stop(&mut self) {
        if self.state == State::Running {
            debug!("halted");
        }
        self.state = State::Halted;
        self.pc = None;
    }

    fn break_in(&mut self, line: LineNumber) {
        info!("break in {}", line);
        self.devices.console.print(&format!("BREAK IN {}\n", line));
        self.stop();
    }

    fn report(&mut self, error: &Error) {
        warn!("{}", error);
        self.devices.console.print_error(&format!("?{}\n", error));
    }
}
