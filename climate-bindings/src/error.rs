/// Error types for graph wiring and session access
use crate::{
    session::SessionId,
    slot::{InputId, OutputId},
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Two bindings write the same output slot
    #[error("Output slot {0} is bound more than once")]
    DuplicateOutput(OutputId),

    /// Two selectors share an id
    #[error("Selector {0} is declared more than once")]
    DuplicateSelector(InputId),

    /// A selector id that the graph does not declare
    #[error("Unknown input: {0}")]
    UnknownInput(String),

    /// An output id that the graph does not declare
    #[error("Unknown output: {0}")]
    UnknownOutput(String),

    /// A selector whose default is not one of its options
    #[error("Default {value:?} of selector {input} is not one of its options")]
    InvalidDefault { input: InputId, value: String },

    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),

    /// The slot exists but holds no rendered view right now
    #[error("Output slot {0} is not rendered")]
    NotRendered(OutputId),
}

/// Type alias for Results using BindingError
pub type Result<T> = std::result::Result<T, BindingError>;
