//! The interactive attendance menu.
//!
//! A session reads one line per prompt and runs one operation per menu
//! choice. Operation errors are printed and the loop resumes; only `0`,
//! end-of-input, or Ctrl-C end the session.

use std::future::{poll_fn, Future};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::task::Poll;

use anyhow::{Context, Result};

use rollcall_core::config::RollcallConfig;
use rollcall_core::model::parse_date;
use rollcall_core::seed::{builtin_seed, parse_seed};
use rollcall_core::{AttendanceStatus, Register};
use rollcall_report::{day_table, history_table, roster_table, summary_line};

pub const FAREWELL: &str = "Goodbye!";

const MENU: &str = "
=== Attendance Register ===
1. Add student
2. Record attendance
3. View attendance by date
4. Search student
5. List students
0. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    AddStudent,
    RecordAttendance,
    ViewDate,
    SearchStudent,
    ListStudents,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(MenuChoice::Exit),
            "1" => Ok(MenuChoice::AddStudent),
            "2" => Ok(MenuChoice::RecordAttendance),
            "3" => Ok(MenuChoice::ViewDate),
            "4" => Ok(MenuChoice::SearchStudent),
            "5" => Ok(MenuChoice::ListStudents),
            other => Err(format!("invalid option '{other}', choose 0-5")),
        }
    }
}

/// Whether the loop keeps going after an operation.
enum Flow {
    Continue,
    Quit,
}

/// Read the next answer, or end the session on end-of-input.
macro_rules! answer {
    ($session:expr, $label:expr) => {
        match $session.prompt($label)? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        }
    };
}

/// One menu session over a register.
pub struct Session<R, W> {
    register: Register,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(register: Register, input: R, output: W) -> Self {
        Self {
            register,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Select an option: ")? else {
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(message) => {
                    self.failure(&message)?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Consume the session and hand back the register.
    #[cfg(test)]
    pub fn into_register(self) -> Register {
        self.register
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::Exit => Ok(Flow::Quit),
            MenuChoice::AddStudent => self.add_student(),
            MenuChoice::RecordAttendance => self.record_attendance(),
            MenuChoice::ViewDate => self.view_date(),
            MenuChoice::SearchStudent => self.search_student(),
            MenuChoice::ListStudents => self.list_students(),
        }
    }

    fn add_student(&mut self) -> Result<Flow> {
        let name = answer!(self, "Name: ");
        let group = answer!(self, "Group: ");

        match self.register.add_student(&name, &group) {
            Ok(id) => self.success(&format!("added {} with ID {id}", name.trim()))?,
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn record_attendance(&mut self) -> Result<Flow> {
        let raw_date = answer!(self, "Date (YYYY-MM-DD): ");
        let date = match parse_date(&raw_date) {
            Ok(date) => date,
            Err(e) => return self.failure(&e.to_string()).map(|_| Flow::Continue),
        };

        let name = answer!(self, "Student name: ");
        let student = match self.register.find_by_name(&name) {
            Ok(id) => id,
            Err(e) => return self.failure(&e.to_string()).map(|_| Flow::Continue),
        };

        let raw_status = answer!(self, "Status (p/a): ");
        let status = match raw_status.parse::<AttendanceStatus>() {
            Ok(status) => status,
            Err(e) => return self.failure(&e.to_string()).map(|_| Flow::Continue),
        };

        match self.register.record(date, student, status) {
            Ok(previous) => {
                let name = self
                    .register
                    .roster()
                    .get(student)
                    .map_or_else(|| name.trim().to_string(), |s| s.name.clone());
                let mut message = format!("marked {name} {status} on {date}");
                if let Some(previous) = previous.filter(|p| *p != status) {
                    message.push_str(&format!(" (was {previous})"));
                }
                self.success(&message)?;
            }
            Err(e) => self.failure(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn view_date(&mut self) -> Result<Flow> {
        let raw_date = answer!(self, "Date (YYYY-MM-DD): ");
        let entries = match self.register.view_date(&raw_date) {
            Ok(entries) => entries,
            Err(e) => return self.failure(&e.to_string()).map(|_| Flow::Continue),
        };

        if entries.is_empty() {
            self.info("no students registered")?;
            return Ok(Flow::Continue);
        }

        let marked = entries.iter().filter(|e| e.status.is_some()).count();
        writeln!(self.output, "{}", day_table(&entries))?;
        self.info(&format!(
            "{marked} of {} students marked on {}",
            entries.len(),
            raw_date.trim()
        ))?;
        Ok(Flow::Continue)
    }

    fn search_student(&mut self) -> Result<Flow> {
        let name = answer!(self, "Student name: ");
        let history = match self.register.search_student(&name) {
            Ok(history) => history,
            Err(e) => return self.failure(&e.to_string()).map(|_| Flow::Continue),
        };

        if history.records.is_empty() {
            self.info(&format!(
                "no attendance recorded for {}",
                history.student.name
            ))?;
            return Ok(Flow::Continue);
        }

        writeln!(
            self.output,
            "{} ({}, ID {})",
            history.student.name, history.student.group, history.student.id
        )?;
        writeln!(self.output, "{}", history_table(&history.records))?;
        self.info(&summary_line(&history.summary()))?;
        Ok(Flow::Continue)
    }

    fn list_students(&mut self) -> Result<Flow> {
        if self.register.roster().is_empty() {
            self.info("no students registered")?;
        } else {
            writeln!(self.output, "{}", roster_table(self.register.list_students()))?;
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        // Raw bytes, so a line that is not UTF-8 becomes bad input rather
        // than an I/O error that ends the session.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "OK: {message}")?;
        Ok(())
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "Error: {message}")?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "Info: {message}")?;
        Ok(())
    }
}

/// Build the starting register from the configured seeds.
pub fn load_register(config: &RollcallConfig) -> Result<Register> {
    let mut seeds = Vec::new();
    if config.seed.builtin {
        seeds.push(builtin_seed()?);
    }
    if let Some(path) = &config.seed.file {
        seeds.push(parse_seed(path)?);
    }

    let register = Register::from_seeds(&seeds).context("failed to apply seed data")?;
    tracing::info!(
        seeds = seeds.len(),
        students = register.roster().len(),
        "register ready"
    );
    Ok(register)
}

pub async fn execute(config: &RollcallConfig) -> Result<()> {
    let register = load_register(config)?;

    // The handler is installed on first poll; do that before the first
    // prompt is printed so an early Ctrl-C is not fatal.
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);
    if let Poll::Ready(signal) = poll_fn(|cx| Poll::Ready(interrupt.as_mut().poll(cx))).await {
        signal.context("failed to listen for Ctrl-C")?;
        return interrupted();
    }

    let session = tokio::task::spawn_blocking(move || {
        Session::new(register, std::io::stdin().lock(), std::io::stdout()).run()
    });

    tokio::select! {
        joined = session => {
            joined.context("menu session panicked")??;
            tracing::info!("session ended");
            Ok(())
        }
        signal = &mut interrupt => {
            signal.context("failed to listen for Ctrl-C")?;
            interrupted()
        }
    }
}

fn interrupted() -> Result<()> {
    tracing::info!("session interrupted");
    println!("\n{FAREWELL}");
    // The session thread is still blocked reading stdin; the runtime would
    // wait on it forever during shutdown.
    std::process::exit(0)
}
