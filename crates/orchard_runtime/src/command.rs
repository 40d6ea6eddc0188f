//! The orchard command language.
//!
//! One command per line: a command name followed by whitespace-separated
//! integer arguments. Blank lines and `#` comments are ignored.
//!
//! ```text
//! Init 3
//! PlantTree 0 0
//! AddFruit 0 0 5 10     # row col id ripeness
//! GetAllFruitsByRate 0 0
//! Quit
//! ```

use std::fmt;

use thiserror::Error;

/// A parsed command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open a new `extent x extent` orchard.
    Init {
        /// Grid extent `N`.
        extent: i32,
    },
    /// Plant a tree.
    PlantTree {
        /// Row.
        row: i32,
        /// Column.
        col: i32,
    },
    /// Hang a fruit on a tree.
    AddFruit {
        /// Row.
        row: i32,
        /// Column.
        col: i32,
        /// Fruit id.
        id: i32,
        /// Ripeness level.
        ripeness: i32,
    },
    /// Remove a fruit.
    PickFruit {
        /// Fruit id.
        id: i32,
    },
    /// Change a fruit's ripeness.
    RateFruit {
        /// Fruit id.
        id: i32,
        /// New ripeness level.
        ripeness: i32,
    },
    /// Query a tree's first fruit.
    GetBestFruit {
        /// Row.
        row: i32,
        /// Column.
        col: i32,
    },
    /// Query a tree's fruits in order.
    GetAllFruitsByRate {
        /// Row.
        row: i32,
        /// Column.
        col: i32,
    },
    /// Rot every fruit whose id is a multiple of `base`.
    UpdateRottenFruits {
        /// Modulus.
        base: i32,
        /// Ripeness multiplier.
        factor: i32,
    },
    /// Release the orchard.
    Quit,
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first word is not a command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong number of arguments.
    #[error("{command} takes {expected} argument(s), got {found}")]
    Arity {
        /// The command name.
        command: &'static str,
        /// Expected argument count.
        expected: usize,
        /// Actual argument count.
        found: usize,
    },

    /// An argument is not a 32-bit integer.
    #[error("{command}: not an integer: {token}")]
    NotAnInteger {
        /// The command name.
        command: &'static str,
        /// The offending token.
        token: String,
    },
}

impl Command {
    /// Every command name with its argument count.
    pub const SIGNATURES: [(&'static str, usize); 9] = [
        ("Init", 1),
        ("PlantTree", 2),
        ("AddFruit", 4),
        ("PickFruit", 1),
        ("RateFruit", 2),
        ("GetBestFruit", 2),
        ("GetAllFruitsByRate", 2),
        ("UpdateRottenFruits", 2),
        ("Quit", 0),
    ];

    /// Parses one line.
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for unknown names, wrong arity, or
    /// non-integer arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let code = line.split_once('#').map_or(line, |(code, _)| code);
        let mut tokens = code.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };

        let (name, arity) = Self::SIGNATURES
            .iter()
            .copied()
            .find(|(name, _)| *name == word)
            .ok_or_else(|| ParseError::UnknownCommand(word.to_string()))?;

        let args = tokens
            .map(|token| {
                token.parse::<i32>().map_err(|_| ParseError::NotAnInteger {
                    command: name,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let command = match (name, args.as_slice()) {
            ("Init", &[extent]) => Self::Init { extent },
            ("PlantTree", &[row, col]) => Self::PlantTree { row, col },
            ("AddFruit", &[row, col, id, ripeness]) => Self::AddFruit {
                row,
                col,
                id,
                ripeness,
            },
            ("PickFruit", &[id]) => Self::PickFruit { id },
            ("RateFruit", &[id, ripeness]) => Self::RateFruit { id, ripeness },
            ("GetBestFruit", &[row, col]) => Self::GetBestFruit { row, col },
            ("GetAllFruitsByRate", &[row, col]) => Self::GetAllFruitsByRate { row, col },
            ("UpdateRottenFruits", &[base, factor]) => Self::UpdateRottenFruits { base, factor },
            ("Quit", &[]) => Self::Quit,
            _ => {
                return Err(ParseError::Arity {
                    command: name,
                    expected: arity,
                    found: args.len(),
                });
            }
        };
        Ok(Some(command))
    }

    /// Returns the command's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "Init",
            Self::PlantTree { .. } => "PlantTree",
            Self::AddFruit { .. } => "AddFruit",
            Self::PickFruit { .. } => "PickFruit",
            Self::RateFruit { .. } => "RateFruit",
            Self::GetBestFruit { .. } => "GetBestFruit",
            Self::GetAllFruitsByRate { .. } => "GetAllFruitsByRate",
            Self::UpdateRottenFruits { .. } => "UpdateRottenFruits",
            Self::Quit => "Quit",
        }
    }

    /// Returns every command name.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::SIGNATURES.iter().map(|(name, _)| *name)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match *self {
            Self::Init { extent } => write!(f, " {extent}"),
            Self::PlantTree { row, col }
            | Self::GetBestFruit { row, col }
            | Self::GetAllFruitsByRate { row, col } => write!(f, " {row} {col}"),
            Self::AddFruit {
                row,
                col,
                id,
                ripeness,
            } => write!(f, " {row} {col} {id} {ripeness}"),
            Self::PickFruit { id } => write!(f, " {id}"),
            Self::RateFruit { id, ripeness } => write!(f, " {id} {ripeness}"),
            Self::UpdateRottenFruits { base, factor } => write!(f, " {base} {factor}"),
            Self::Quit => Ok(()),
        }
    }
}
