/*!
## Collaborator capabilities

Everything the interpreter needs from the outside world goes through
one of these traits. The runtime only ever sees trait objects, so a
front end (or a test) swaps in its own console, files, graphics and
so on through [`Devices`].

*/

use crate::error;
use crate::lang::{ast::FileMode, Error};
use std::collections::HashMap;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, Error>;

pub type FileHandle = u16;

pub trait Console {
    fn print(&mut self, text: &str);
    fn print_error(&mut self, text: &str) {
        self.print(text)
    }
    /// `None` is the end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

pub trait Files {
    fn open(&mut self, handle: FileHandle, name: &str, mode: FileMode) -> Result<()>;
    fn write(&mut self, handle: FileHandle, text: &str) -> Result<()>;
    fn close(&mut self, handle: FileHandle) -> Result<()>;
    fn close_all(&mut self);
}

pub trait Graphics {
    fn init(&mut self) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn plot(&mut self, x: f64, y: f64) -> Result<()>;
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()>;
    fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()>;
    fn rectangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()>;
}

pub trait Clock {
    fn sleep(&self, seconds: f64);
    fn now(&self) -> chrono::NaiveDateTime;
}

pub trait Keyboard {
    /// Blocks for one key. `None` when no key can be read.
    fn read_key(&mut self) -> Option<char>;
}

pub trait Storage {
    fn save_text(&mut self, name: &str, text: &str) -> Result<()>;
    fn load_text(&mut self, name: &str) -> Result<String>;
}

/// The set of collaborators one `Runtime` talks to.
pub struct Devices {
    pub console: Box<dyn Console>,
    pub files: Box<dyn Files>,
    pub graphics: Option<Box<dyn Graphics>>,
    pub clock: Box<dyn Clock>,
    pub keyboard: Box<dyn Keyboard>,
    pub storage: Box<dyn Storage>,
}

impl Default for Devices {
    fn default() -> Self {
        Devices {
            console: Box::new(StdConsole),
            files: Box::new(DiskFiles::default()),
            graphics: None,
            clock: Box::new(SystemClock),
            keyboard: Box::new(StdinKeyboard),
            storage: Box::new(DiskStorage),
        }
    }
}

impl std::fmt::Debug for Devices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Devices {{ graphics: {} }}", self.graphics.is_some())
    }
}

pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, text: &str) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn print_error(&mut self, text: &str) {
        eprint!("{}", text);
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.print(prompt);
        read_stdin_line()
    }
}

fn read_stdin_line() -> Option<String> {
    let mut s = String::new();
    match std::io::stdin().lock().read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim_end_matches(|c| c == '\n' || c == '\r').to_string()),
    }
}

/// Files opened for `INPUT` are only checked to exist.
enum OpenFile {
    Input,
    Output(std::io::BufWriter<std::fs::File>),
}

#[derive(Default)]
pub struct DiskFiles {
    open: HashMap<FileHandle, OpenFile>,
}

impl Files for DiskFiles {
    fn open(&mut self, handle: FileHandle, name: &str, mode: FileMode) -> Result<()> {
        if self.open.contains_key(&handle) {
            return Err(error!(BadFileNumber; "FILE ALREADY OPEN"));
        }
        let file = match mode {
            FileMode::Input => {
                std::fs::File::open(name)?;
                OpenFile::Input
            }
            FileMode::Output => {
                OpenFile::Output(std::io::BufWriter::new(std::fs::File::create(name)?))
            }
        };
        self.open.insert(handle, file);
        Ok(())
    }

    fn write(&mut self, handle: FileHandle, text: &str) -> Result<()> {
        match self.open.get_mut(&handle) {
            Some(OpenFile::Output(w)) => Ok(w.write_all(text.as_bytes())?),
            Some(OpenFile::Input) => Err(error!(BadFileNumber; "FILE NOT OPEN FOR OUTPUT")),
            None => Err(error!(BadFileNumber)),
        }
    }

    fn close(&mut self, handle: FileHandle) -> Result<()> {
        match self.open.remove(&handle) {
            Some(OpenFile::Output(mut w)) => Ok(w.flush()?),
            Some(OpenFile::Input) => Ok(()),
            None => Err(error!(BadFileNumber)),
        }
    }

    fn close_all(&mut self) {
        for (_, file) in self.open.drain() {
            if let OpenFile::Output(mut w) = file {
                if let Err(e) = w.flush() {
                    log::warn!("flush on close: {}", e);
                }
            }
        }
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, seconds: f64) {
        match std::time::Duration::try_from_secs_f64(seconds) {
            Ok(duration) => std::thread::sleep(duration),
            Err(error) => log::warn!("sleep {}: {}", seconds, error),
        }
    }

    fn now(&self) -> chrono::NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Line buffered stand-in for raw key capture.
pub struct StdinKeyboard;

impl Keyboard for StdinKeyboard {
    fn read_key(&mut self) -> Option<char> {
        read_stdin_line().and_then(|s| s.chars().next())
    }
}

/// Program text on disk. Names starting with `http://` or `https://`
/// load over the network.
pub struct DiskStorage;

impl DiskStorage {
    fn is_url(name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    fn fetch(url: &str) -> Result<String> {
        let response = match reqwest::blocking::get(url) {
            Ok(r) => r,
            Err(e) => return Err(error!(DiskIoError; &e.to_string())),
        };
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(error!(FileNotFound; url));
        }
        match response.error_for_status().and_then(|r| r.text()) {
            Ok(text) => Ok(text),
            Err(e) => Err(error!(DiskIoError; &e.to_string())),
        }
    }
}

impl Storage for DiskStorage {
    fn save_text(&mut self, name: &str, text: &str) -> Result<()> {
        if DiskStorage::is_url(name) {
            return Err(error!(DiskIoError; "CAN NOT SAVE TO A URL"));
        }
        Ok(std::fs::write(name, text)?)
    }

    fn load_text(&mut self, name: &str) -> Result<String> {
        if DiskStorage::is_url(name) {
            return DiskStorage::fetch(name);
        }
        Ok(std::fs::read_to_string(name)?)
    }
}
