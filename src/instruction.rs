// instruction.rs
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program_error::ProgramError;

use crate::error::VoteError;

/// Operation codes recognized on the wire, 32-bit unsigned big-endian at
/// the start of the message body.
pub const OP_DEPLOY: u32 = 0;
pub const OP_VOTE_YES: u32 = 1;
pub const OP_VOTE_NO: u32 = 2;

/// Deploy-time configuration. Absent fields default to 0.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteConfig {
    pub yes_votes: Option<u32>,
    pub no_votes: Option<u32>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum VoteInstruction {
    /// One-time initialization of the vote record. An empty message body
    /// deploys with defaults; opcode 0 carries an optional Borsh-encoded
    /// `VoteConfig` payload.
    Deploy { config: VoteConfig },
    /// Count one yes vote.
    VoteYes,
    /// Count one no vote.
    VoteNo,
}

impl VoteInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        // An empty body is the deploy operation.
        if input.is_empty() {
            return Ok(Self::Deploy {
                config: VoteConfig::default(),
            });
        }

        // A non-empty body must carry at least the 4-byte operation code.
        if input.len() < 4 {
            return Err(ProgramError::InvalidInstructionData);
        }

        let (opcode_bytes, rest) = input.split_at(4);
        let mut opcode = [0u8; 4];
        opcode.copy_from_slice(opcode_bytes);

        Ok(match u32::from_be_bytes(opcode) {
            OP_DEPLOY => {
                let config = if rest.is_empty() {
                    VoteConfig::default()
                } else {
                    VoteConfig::try_from_slice(rest)?
                };
                Self::Deploy { config }
            }
            // Trailing payload bytes are ignored for the vote operations.
            OP_VOTE_YES => Self::VoteYes,
            OP_VOTE_NO => Self::VoteNo,
            _ => return Err(VoteError::UnknownOperation.into()),
        })
    }
}
