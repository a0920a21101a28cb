//! Call shape accepted by the action-dispatch boundary.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Action names understood by the remote processor.
pub mod actions {
    pub const CHECK_IN: &str = "CHECK_IN";
    pub const MOVE_SEEKER: &str = "MOVE_SEEKER";
    pub const DEV_SPAWN_TILE: &str = "DEV_SPAWN_TILE";
    pub const DEV_SPAWN_SEEKER: &str = "DEV_SPAWN_SEEKER";
}

/// One ordered scalar argument of an action call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionArg {
    U64(u64),
    I64(i64),
    Str(String),
}

impl From<u64> for ActionArg {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<u32> for ActionArg {
    fn from(value: u32) -> Self {
        Self::U64(value as u64)
    }
}

impl From<i64> for ActionArg {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<i32> for ActionArg {
    fn from(value: i32) -> Self {
        Self::I64(value as i64)
    }
}

impl From<String> for ActionArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ActionArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl fmt::Display for ActionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U64(value) => write!(f, "{value}"),
            Self::I64(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
        }
    }
}

/// A validated action name plus its ordered scalar arguments.
///
/// The core only constructs one of these after its local eligibility checks
/// pass; the dispatcher never re-validates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCall {
    pub name: String,
    pub args: Vec<ActionArg>,
}

impl ActionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument, builder style.
    pub fn arg(mut self, value: impl Into<ActionArg>) -> Self {
        self.args.push(value.into());
        self
    }
}

impl fmt::Display for ActionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ")")
    }
}
