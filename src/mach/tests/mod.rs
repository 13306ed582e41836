use super::device::Console;
use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

mod runtime_test;

#[derive(Clone, Default)]
struct Output(Rc<RefCell<String>>);

impl Output {
    fn take(&self) -> String {
        self.0.replace(String::new())
    }
}

struct TestConsole {
    output: Output,
    input: VecDeque<String>,
}

impl Console for TestConsole {
    fn print(&mut self, text: &str) {
        self.output.0.borrow_mut().push_str(text);
    }
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.print(prompt);
        self.input.pop_front()
    }
}

fn runtime_with(config: Config, input: &[&str]) -> (Runtime, Output) {
    let output = Output::default();
    let devices = Devices {
        console: Box::new(TestConsole {
            output: output.clone(),
            input: input.iter().map(|s| s.to_string()).collect(),
        }),
        ..Devices::default()
    };
    (Runtime::new(config, devices), output)
}

fn runtime() -> (Runtime, Output) {
    runtime_with(Config::default(), &[])
}

fn run(runtime: &mut Runtime, output: &Output) -> String {
    run_cycles(runtime, output, 5000)
}

fn run_cycles(runtime: &mut Runtime, output: &Output, cycles: usize) -> String {
    let mut s = output.take();
    if runtime.execute_cycles(cycles) == State::Running {
        s.push_str(&output.take());
        s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
        return s;
    }
    s.push_str(&output.take());
    s
}
