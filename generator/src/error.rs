use thiserror::Error;

/// Usage text printed for every rejected invocation
pub const USAGE: &str = "usage: State either male or female as only argument on the command line";

/// Rejected command line. Both kinds print [`USAGE`] but exit differently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArguments {
    #[error("unknown category {0:?}, expected male or female")]
    UnknownCategory(String),

    #[error("expected at most one argument, got {0}")]
    TooManyArguments(usize),
}

impl InvalidArguments {
    pub fn exit_code(&self) -> i32 {
        match self {
            InvalidArguments::UnknownCategory(_) => 1,
            InvalidArguments::TooManyArguments(_) => 2,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    InvalidArguments(#[from] InvalidArguments),

    #[error("{var} must be an unsigned 64-bit integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

impl Error {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArguments(invalid) => invalid.exit_code(),
            Error::InvalidSeed { .. } => 3,
        }
    }

    /// Message shown to the user on stderr
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidArguments(_) => USAGE.to_string(),
            Error::InvalidSeed { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
