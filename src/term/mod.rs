use ansi_term::Style;
use basic::lang::Line;
use basic::mach::device::{Console, Keyboard};
use basic::mach::{Config, Devices, Runtime, State};
use linefeed::{DefaultTerminal, Interface, ReadResult};
use std::sync::atomic::Ordering;
use std::sync::Arc;

const CYCLES: usize = 5000;

pub fn main(config: Config, file: Option<&str>, run: bool) {
    if let Err(error) = main_loop(config, file, run) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: Config, file: Option<&str>, run: bool) -> std::io::Result<()> {
    let command = Arc::new(Interface::new("BASIC")?);
    let devices = Devices {
        console: Box::new(TermConsole::new(Arc::clone(&command))?),
        keyboard: Box::new(TermKeyboard),
        ..Devices::default()
    };
    let mut runtime = Runtime::new(config, devices);
    let halt = runtime.halt_handle();
    if let Err(error) = ctrlc::set_handler(move || halt.store(true, Ordering::SeqCst)) {
        log::warn!("Ctrl-C will not interrupt programs: {}", error);
    }

    command.write_fmt(format_args!("LINE BASIC {}\n", env!("CARGO_PKG_VERSION")))?;
    if let Some(file) = file {
        match runtime.load(file) {
            Ok(()) if run => {
                runtime.start();
            }
            Ok(()) => {}
            Err(error) => {
                let error = format!("?{}", error);
                command.write_fmt(format_args!("{}\n", Style::new().bold().paint(error)))?;
            }
        }
    }

    let mut print_ready = true;
    loop {
        if runtime.execute_cycles(CYCLES) == State::Running {
            continue;
        }
        if runtime.is_quit() {
            break;
        }
        if print_ready {
            print_ready = false;
            command.write_fmt(format_args!("READY.\n"))?;
        }
        let input = match command.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if input.trim().is_empty() {
            continue;
        }
        command.add_history_unique(input.clone());
        print_ready = match Line::from_str(&input) {
            Ok(line) => line.is_direct(),
            Err(_) => true,
        };
        runtime.enter(&input);
    }
    Ok(())
}

/// Program output shares the command line editor. `INPUT` gets its
/// own editor so its history stays separate.
struct TermConsole {
    command: Arc<Interface<DefaultTerminal>>,
    input: Interface<DefaultTerminal>,
}

impl TermConsole {
    fn new(command: Arc<Interface<DefaultTerminal>>) -> std::io::Result<TermConsole> {
        Ok(TermConsole {
            command,
            input: Interface::new("INPUT")?,
        })
    }
}

impl Console for TermConsole {
    fn print(&mut self, text: &str) {
        if let Err(error) = self.command.write_fmt(format_args!("{}", text)) {
            log::error!("console write: {}", error);
        }
    }

    fn print_error(&mut self, text: &str) {
        let text = text.trim_end_matches('\n');
        if let Err(error) = self
            .command
            .write_fmt(format_args!("{}\n", Style::new().bold().paint(text)))
        {
            log::error!("console write: {}", error);
        }
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Err(error) = self.input.set_prompt(prompt) {
            log::error!("input prompt: {}", error);
            return None;
        }
        match self.input.read_line() {
            Ok(ReadResult::Input(input)) => {
                self.input.add_history_unique(input.clone());
                Some(input)
            }
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => None,
            Err(error) => {
                log::error!("input: {}", error);
                None
            }
        }
    }
}

/// Raw mode single key capture for `INKEY$`.
struct TermKeyboard;

impl TermKeyboard {
    fn read_raw_key() -> std::io::Result<Option<char>> {
        let terminal = mortal::Terminal::new()?;
        let state = terminal.prepare(mortal::PrepareConfig::default())?;
        let key = loop {
            match terminal.read_event(None)? {
                Some(mortal::Event::Key(mortal::Key::Char(ch))) => break Some(ch),
                Some(mortal::Event::Key(mortal::Key::Enter)) => break Some('\n'),
                Some(mortal::Event::Signal(_)) | None => break None,
                Some(_) => continue,
            }
        };
        terminal.restore(state)?;
        Ok(key)
    }
}

impl Keyboard for TermKeyboard {
    fn read_key(&mut self) -> Option<char> {
        match TermKeyboard::read_raw_key() {
            Ok(key) => key,
            Err(error) => {
                log::warn!("key capture: {}", error);
                None
            }
        }
    }
}
