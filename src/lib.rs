pub mod cli;
pub mod echo;
pub mod fs_op;
pub mod logging;
pub mod stage;

pub use crate::echo::{echo, open_inputs, EchoError};
pub use crate::stage::{stage, StageError, StageEvent, StageSummary};
