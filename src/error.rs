// error.rs
use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Errors the vote program can report back to the runtime.
///
/// All three are terminal for the triggering message: the instruction is
/// rejected and no account write is committed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteError {
    /// The persisted record is not exactly two 32-bit counters.
    #[error("vote record is malformed")]
    CorruptStorage,
    /// The operation code is outside the recognized set.
    #[error("unknown operation code")]
    UnknownOperation,
    /// Incrementing would push a counter past u32::MAX.
    #[error("vote counter overflow")]
    CounterOverflow,
}

impl From<VoteError> for ProgramError {
    fn from(e: VoteError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
