//! Interactive planning session
//!
//! Owns every input value and recomputes the whole dashboard after each
//! accepted change. Commands arrive as text lines:
//!
//! ```text
//! passengers 60000
//! efficiency 15
//! actual 3000
//! scenario -10
//! ```

use std::io::{BufRead, Write};

use anyhow::Result;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{ActualStaffing, ForecastInputs, ScenarioFactor};
use crate::report::Dashboard;
use crate::validation::{self, InputError};

pub const HELP: &str = "\
Commands:
  passengers <n>   set passenger volume (>= 0)
  flights <n>      set number of flights (>= 0)
  efficiency <n>   set labor efficiency improvement, 0-50 (%)
  actual <n>       set actual staffing (>= 0)
  actual auto      let actual staffing follow the forecast
  scenario <n>     set scenario factor, -20-20 (%)
  show             print the current dashboard
  reset            restore default inputs
  help             show this list
  quit             leave the session";

/// A single parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetPassengers(f64),
    SetFlights(f64),
    SetEfficiency(f64),
    SetActual(f64),
    AutoActual,
    SetScenario(f64),
    Show,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unrecognised command: {0:?} (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs a numeric value")]
    MissingValue(&'static str),

    #[error("'{0}' is not a number")]
    BadNumber(String),
}

/// Turns text lines into [`Command`]s
pub struct CommandParser {
    line_re: Regex,
}

impl CommandParser {
    pub fn new() -> Result<Self> {
        // keyword, optional argument
        let line_re = Regex::new(r"^\s*([A-Za-z]+)(?:\s+(\S+))?\s*$")?;
        Ok(Self { line_re })
    }

    pub fn parse(&self, line: &str) -> std::result::Result<Command, CommandError> {
        let Some(cap) = self.line_re.captures(line) else {
            return Err(CommandError::Unknown(line.trim().to_string()));
        };
        let keyword = cap[1].to_ascii_lowercase();
        let arg = cap.get(2).map(|m| m.as_str());

        let command = match (keyword.as_str(), arg) {
            ("show", None) => Command::Show,
            ("reset", None) => Command::Reset,
            ("help", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            ("actual", Some(a)) if a.eq_ignore_ascii_case("auto") => Command::AutoActual,
            ("passengers", arg) => Command::SetPassengers(number("passengers", arg)?),
            ("flights", arg) => Command::SetFlights(number("flights", arg)?),
            ("efficiency", arg) => Command::SetEfficiency(number("efficiency", arg)?),
            ("actual", arg) => Command::SetActual(number("actual", arg)?),
            ("scenario", arg) => Command::SetScenario(number("scenario", arg)?),
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(command)
    }
}

fn number(keyword: &'static str, arg: Option<&str>) -> std::result::Result<f64, CommandError> {
    let raw = arg.ok_or(CommandError::MissingValue(keyword))?;
    raw.parse::<f64>()
        .map_err(|_| CommandError::BadNumber(raw.to_string()))
}

/// Input state for one planner, starting from the documented defaults
#[derive(Debug, Clone, Default)]
pub struct Session {
    inputs: ForecastInputs,
    actual: Option<ActualStaffing>, // None = follow the forecast
    scenario: ScenarioFactor,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> ForecastInputs {
        self.inputs
    }

    /// Apply one input change. Rejected values leave the session untouched.
    pub fn apply(&mut self, command: &Command) -> std::result::Result<(), InputError> {
        match *command {
            Command::SetPassengers(v) => {
                self.inputs.passenger_volume = validation::passenger_volume(v)?;
            }
            Command::SetFlights(v) => {
                self.inputs.flight_schedule = validation::flight_schedule(v)?;
            }
            Command::SetEfficiency(v) => {
                self.inputs.labor_efficiency = validation::labor_efficiency(v)?;
            }
            Command::SetActual(v) => self.actual = Some(validation::actual_staffing(v)?),
            Command::AutoActual => self.actual = None,
            Command::SetScenario(v) => self.scenario = validation::scenario_factor(v)?,
            Command::Reset => *self = Self::default(),
            Command::Show | Command::Help | Command::Quit => {}
        }
        debug!(?command, "applied command");
        Ok(())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::evaluate(self.inputs, self.actual, self.scenario)
    }

    /// Drive the session from `input` until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let parser = CommandParser::new()?;
        info!("interactive session started");

        writeln!(output, "Airport Labor Planning and Forecasting Tool")?;
        writeln!(output, "Type 'help' for commands.\n")?;
        write!(output, "{}", self.dashboard())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match parser.parse(&line) {
                Ok(c) => c,
                Err(e) => {
                    warn!(%e, "rejected command");
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(output, "{}", HELP)?,
                _ => match self.apply(&command) {
                    Ok(()) => write!(output, "\n{}", self.dashboard())?,
                    Err(e) => {
                        warn!(%e, "rejected input");
                        writeln!(output, "error: {}", e)?;
                    }
                },
            }
        }

        info!(inputs = ?self.inputs(), "interactive session ended");
        Ok(())
    }
}
