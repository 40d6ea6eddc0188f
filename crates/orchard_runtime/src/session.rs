//! The orchard handle.
//!
//! A [`Session`] either holds an open [`Orchard`] or nothing. Calls against
//! an empty session are rejected as invalid input, and each call collapses
//! to a [`StatusType`] for callers that only see status codes.

use std::fmt;

use orchard_foundation::{Error, InvalidArgument, NO_FRUIT, Result, StatusType};
use orchard_storage::Orchard;
use tracing::debug;

use crate::command::Command;

/// A handle that may hold an open orchard.
#[derive(Clone, Debug, Default)]
pub struct Session {
    orchard: Option<Orchard>,
}

impl Session {
    /// Creates a session with no orchard.
    #[must_use]
    pub const fn new() -> Self {
        Self { orchard: None }
    }

    /// Returns true if an orchard is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.orchard.is_some()
    }

    /// Opens a fresh `extent x extent` orchard, replacing any open one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `extent <= 0`. The open orchard, if any,
    /// is kept in that case.
    pub fn init(&mut self, extent: i32) -> Result<()> {
        let orchard = Orchard::new(extent)?;
        if self.orchard.replace(orchard).is_some() {
            debug!(extent, "replaced open orchard");
        }
        Ok(())
    }

    /// Releases the orchard. Does nothing if none is open.
    pub fn quit(&mut self) {
        if self.orchard.take().is_some() {
            debug!("orchard released");
        }
    }

    /// Returns the open orchard.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no orchard is open.
    pub fn orchard(&self) -> Result<&Orchard> {
        self.orchard
            .as_ref()
            .ok_or_else(|| Error::invalid(InvalidArgument::NoOrchard))
    }

    /// Returns the open orchard, mutably.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if no orchard is open.
    pub fn orchard_mut(&mut self) -> Result<&mut Orchard> {
        self.orchard
            .as_mut()
            .ok_or_else(|| Error::invalid(InvalidArgument::NoOrchard))
    }

    /// Plants a tree.
    ///
    /// # Errors
    ///
    /// See [`Orchard::plant_tree`]; also fails if no orchard is open.
    pub fn plant_tree(&mut self, row: i32, col: i32) -> Result<()> {
        self.orchard_mut()?.plant_tree(row, col)
    }

    /// Hangs a fruit on a tree.
    ///
    /// # Errors
    ///
    /// See [`Orchard::add_fruit`]; also fails if no orchard is open.
    pub fn add_fruit(&mut self, row: i32, col: i32, id: i32, ripeness: i32) -> Result<()> {
        self.orchard_mut()?.add_fruit(row, col, id, ripeness)
    }

    /// Removes a fruit.
    ///
    /// # Errors
    ///
    /// See [`Orchard::pick_fruit`]; also fails if no orchard is open.
    pub fn pick_fruit(&mut self, id: i32) -> Result<()> {
        self.orchard_mut()?.pick_fruit(id).map(drop)
    }

    /// Changes a fruit's ripeness.
    ///
    /// # Errors
    ///
    /// See [`Orchard::rate_fruit`]; also fails if no orchard is open.
    pub fn rate_fruit(&mut self, id: i32, ripeness: i32) -> Result<()> {
        self.orchard_mut()?.rate_fruit(id, ripeness)
    }

    /// Returns the raw id of a tree's best fruit, or [`NO_FRUIT`] if it bears
    /// none.
    ///
    /// # Errors
    ///
    /// See [`Orchard::best_fruit`]; also fails if no orchard is open.
    pub fn get_best_fruit(&self, row: i32, col: i32) -> Result<i32> {
        let best = self.orchard()?.best_fruit(row, col)?;
        Ok(best.map_or(NO_FRUIT, |id| id.raw()))
    }

    /// Returns the raw ids of a tree's fruits in ascending (ripeness, id)
    /// order.
    ///
    /// # Errors
    ///
    /// See [`Orchard::fruits_by_rate`]; also fails if no orchard is open.
    pub fn get_all_fruits_by_rate(&self, row: i32, col: i32) -> Result<Vec<i32>> {
        let ids = self.orchard()?.fruits_by_rate(row, col)?;
        Ok(ids.into_iter().map(|id| id.raw()).collect())
    }

    /// Rots every fruit whose id is a multiple of `base`.
    ///
    /// # Errors
    ///
    /// See [`Orchard::update_rotten_fruits`]; also fails if no orchard is
    /// open.
    pub fn update_rotten_fruits(&mut self, base: i32, factor: i32) -> Result<()> {
        self.orchard_mut()?
            .update_rotten_fruits(base, factor)
            .map(drop)
    }

    /// Runs one command and reports its outcome.
    pub fn execute(&mut self, command: &Command) -> Outcome {
        let result = match *command {
            Command::Init { extent } => self.init(extent).map(|()| Output::Nothing),
            Command::PlantTree { row, col } => {
                self.plant_tree(row, col).map(|()| Output::Nothing)
            }
            Command::AddFruit {
                row,
                col,
                id,
                ripeness,
            } => self
                .add_fruit(row, col, id, ripeness)
                .map(|()| Output::Nothing),
            Command::PickFruit { id } => self.pick_fruit(id).map(|()| Output::Nothing),
            Command::RateFruit { id, ripeness } => {
                self.rate_fruit(id, ripeness).map(|()| Output::Nothing)
            }
            Command::GetBestFruit { row, col } => {
                self.get_best_fruit(row, col).map(Output::Fruit)
            }
            Command::GetAllFruitsByRate { row, col } => {
                self.get_all_fruits_by_rate(row, col).map(Output::Fruits)
            }
            Command::UpdateRottenFruits { base, factor } => self
                .update_rotten_fruits(base, factor)
                .map(|()| Output::Nothing),
            Command::Quit => {
                self.quit();
                Ok(Output::Nothing)
            }
        };
        Outcome::new(command.name(), result)
    }
}

/// The payload of a successful command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// No payload.
    Nothing,
    /// A single fruit id, or [`NO_FRUIT`].
    Fruit(i32),
    /// Fruit ids in ascending (ripeness, id) order.
    Fruits(Vec<i32>),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => Ok(()),
            Self::Fruit(id) => write!(f, "{id}"),
            Self::Fruits(ids) => {
                write!(f, "[")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{id}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// What running one command produced.
#[derive(Debug)]
pub struct Outcome {
    /// The command name.
    pub command: &'static str,
    /// The handle-level status.
    pub status: StatusType,
    /// The payload; [`Output::Nothing`] unless the command succeeded.
    pub output: Output,
    /// The rejection, if the command failed.
    pub error: Option<Error>,
}

impl Outcome {
    fn new(command: &'static str, result: Result<Output>) -> Self {
        let status = StatusType::of(&result);
        let (output, error) = match result {
            Ok(output) => (output, None),
            Err(e) => (Output::Nothing, Some(e)),
        };
        Self {
            command,
            status,
            output,
            error,
        }
    }

    /// Returns true if the command succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.command, self.status)?;
        if self.output != Output::Nothing {
            write!(f, " {}", self.output)?;
        }
        Ok(())
    }
}
