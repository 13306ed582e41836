#![allow(dead_code)]

use basic::lang::{ast::FileMode, Error, ErrorCode};
use basic::mach::device::{Clock, Console, FileHandle, Files, Graphics, Keyboard, Storage};
use basic::mach::{Config, Devices, Runtime, State};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Shared state of the in-memory devices, inspected by the tests.
#[derive(Clone, Default)]
pub struct Io {
    output: Rc<RefCell<String>>,
    input: Rc<RefCell<VecDeque<String>>>,
    keys: Rc<RefCell<VecDeque<char>>>,
    pub disk: Rc<RefCell<HashMap<String, String>>>,
    pub drawing: Rc<RefCell<Vec<String>>>,
    pub sleeps: Rc<RefCell<Vec<f64>>>,
}

impl Io {
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.output.borrow_mut())
    }

    pub fn type_line(&self, s: &str) {
        self.input.borrow_mut().push_back(s.to_string());
    }

    pub fn press(&self, ch: char) {
        self.keys.borrow_mut().push_back(ch);
    }

    pub fn file(&self, name: &str) -> Option<String> {
        self.disk.borrow().get(name).cloned()
    }

    pub fn drawing(&self) -> Vec<String> {
        self.drawing.borrow().clone()
    }
}

struct TestConsole(Io);

impl Console for TestConsole {
    fn print(&mut self, text: &str) {
        self.0.output.borrow_mut().push_str(text);
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.print(prompt);
        let line = self.0.input.borrow_mut().pop_front()?;
        self.print(&format!("{}\n", line));
        Some(line)
    }
}

/// Output files land in the disk map when closed.
struct TestFiles {
    io: Io,
    open: BTreeMap<FileHandle, (String, FileMode, String)>,
}

impl Files for TestFiles {
    fn open(&mut self, handle: FileHandle, name: &str, mode: FileMode) -> Result<()> {
        if self.open.contains_key(&handle) {
            return Err(Error::new(ErrorCode::BadFileNumber));
        }
        if mode == FileMode::Input && !self.io.disk.borrow().contains_key(name) {
            return Err(Error::new(ErrorCode::FileNotFound).message(name));
        }
        self.open.insert(handle, (name.to_string(), mode, String::new()));
        Ok(())
    }

    fn write(&mut self, handle: FileHandle, text: &str) -> Result<()> {
        match self.open.get_mut(&handle) {
            Some((_, FileMode::Output, buffer)) => {
                buffer.push_str(text);
                Ok(())
            }
            _ => Err(Error::new(ErrorCode::BadFileNumber)),
        }
    }

    fn close(&mut self, handle: FileHandle) -> Result<()> {
        match self.open.remove(&handle) {
            Some((name, FileMode::Output, buffer)) => {
                self.io.disk.borrow_mut().insert(name, buffer);
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err(Error::new(ErrorCode::BadFileNumber)),
        }
    }

    fn close_all(&mut self) {
        let handles: Vec<FileHandle> = self.open.keys().copied().collect();
        for handle in handles {
            let _ = self.close(handle);
        }
    }
}

struct TestGraphics(Io);

impl TestGraphics {
    fn draw(&self, s: String) -> Result<()> {
        self.0.drawing.borrow_mut().push(s);
        Ok(())
    }
}

impl Graphics for TestGraphics {
    fn init(&mut self) -> Result<()> {
        self.draw("init".to_string())
    }
    fn clear(&mut self) -> Result<()> {
        self.draw("clear".to_string())
    }
    fn plot(&mut self, x: f64, y: f64) -> Result<()> {
        self.draw(format!("plot {} {}", x, y))
    }
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        self.draw(format!("line {} {} {} {}", x1, y1, x2, y2))
    }
    fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.draw(format!("circle {} {} {}", x, y, radius))
    }
    fn rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        self.draw(format!("rectangle {} {} {} {}", x1, y1, x2, y2))
    }
}

/// Always 2024-01-02 03:04:05. Sleeping only records the duration.
struct TestClock(Io);

impl Clock for TestClock {
    fn sleep(&self, seconds: f64) {
        self.0.sleeps.borrow_mut().push(seconds);
    }

    fn now(&self) -> chrono::NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap()
    }
}

struct TestKeyboard(Io);

impl Keyboard for TestKeyboard {
    fn read_key(&mut self) -> Option<char> {
        self.0.keys.borrow_mut().pop_front()
    }
}

struct TestStorage(Io);

impl Storage for TestStorage {
    fn save_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.0.disk.borrow_mut().insert(name.to_string(), text.to_string());
        Ok(())
    }

    fn load_text(&mut self, name: &str) -> Result<String> {
        match self.0.file(name) {
            Some(text) => Ok(text),
            None => Err(Error::new(ErrorCode::FileNotFound).message(name)),
        }
    }
}

pub fn machine_with(config: Config, graphics: bool) -> (Runtime, Io) {
    let io = Io::default();
    let devices = Devices {
        console: Box::new(TestConsole(io.clone())),
        files: Box::new(TestFiles {
            io: io.clone(),
            open: BTreeMap::new(),
        }),
        graphics: if graphics {
            Some(Box::new(TestGraphics(io.clone())))
        } else {
            None
        },
        clock: Box::new(TestClock(io.clone())),
        keyboard: Box::new(TestKeyboard(io.clone())),
        storage: Box::new(TestStorage(io.clone())),
    };
    (Runtime::new(config, devices), io)
}

pub fn machine() -> (Runtime, Io) {
    machine_with(
        Config {
            seed: Some(1),
            ..Config::default()
        },
        true,
    )
}

/// Enters each line in order.
pub fn program(r: &mut Runtime, lines: &[&str]) {
    for line in lines {
        r.enter(line);
    }
}

pub fn exec(r: &mut Runtime, io: &Io) -> String {
    exec_n(r, io, 5000)
}

pub fn exec_n(r: &mut Runtime, io: &Io, cycles: usize) -> String {
    if r.execute_cycles(cycles) == State::Running {
        io.output
            .borrow_mut()
            .push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
    }
    io.take()
}
