use thiserror::Error;

/// Everything that can go wrong with a user action. All of these are
/// recoverable and surface as a status-line message, never as a crash.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Character not recognized.")]
    NotFound,
    #[error("Character not found in practice list.")]
    NotInList,
    #[error("No apple kill data found.")]
    NoData,
    #[error("Please enter a character name.")]
    EmptyInput,
    #[error("No character selected.")]
    NoSelection,
}
