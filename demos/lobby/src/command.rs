//! Console commands for `lobby live`.
//!
//! ```text
//! up N      UP hall call on floor N
//! down N    DOWN hall call on floor N
//! car N     car call to floor N
//! stop      emergency stop
//! reset     clear an emergency stop
//! state     print the dispatch state
//! eta N     estimated seconds to floor N
//! quit      leave
//! ```

use std::str::FromStr;

use thiserror::Error;

use lift_core::Floor;
use lift_dispatch::CarObserver;
use lift_orders::OrderKind;
use lift_sim::{reply, Controller};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Call(OrderKind, i32),
    Stop,
    Reset,
    State,
    Eta(i32),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a floor number")]
    MissingFloor(&'static str),

    #[error("`{0}` is not a floor number")]
    BadFloor(String),

    #[error("unexpected argument `{0}`")]
    Extra(String),
}

pub const HELP: &str = "commands: up N | down N | car N | stop | reset | state | eta N | quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match verb.as_str() {
            "up"    => Command::Call(OrderKind::Up, floor_arg(words.next(), "up")?),
            "down"  => Command::Call(OrderKind::Down, floor_arg(words.next(), "down")?),
            "car"   => Command::Call(OrderKind::Neutral, floor_arg(words.next(), "car")?),
            "eta"   => Command::Eta(floor_arg(words.next(), "eta")?),
            "stop"  => Command::Stop,
            "reset" => Command::Reset,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Extra(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn floor_arg(word: Option<&str>, verb: &'static str) -> Result<i32, CommandError> {
    let word = word.ok_or(CommandError::MissingFloor(verb))?;
    word.parse().map_err(|_| CommandError::BadFloor(word.to_string()))
}

/// Apply `command` to `controller` and return the text to print.
///
/// Rejected requests are answered with the error text; nothing here fails.
pub fn execute<O: CarObserver>(controller: &Controller<O>, command: Command) -> String {
    match command {
        Command::Call(kind, floor) => controller
            .request(floor, kind)
            .unwrap_or_else(|e| e.to_string()),
        Command::Stop => {
            controller.emergency_stop();
            reply::emergency_stopped()
        }
        Command::Reset => reply::reset(controller.reset()),
        Command::State => reply::current_state(controller.state()),
        Command::Eta(floor) => match controller.estimated_time(floor) {
            Ok(secs) => reply::estimated_time(Floor(floor), secs),
            Err(e) => e.to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}
