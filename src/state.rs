// state.rs
use solana_program::pubkey::Pubkey;

use crate::error::VoteError;
use crate::instruction::VoteConfig;

/// Seed of the program-derived account holding the vote record.
pub const VOTE_STATE_SEED: &[u8] = b"vote_state";

/// The persistent tally. Encoded as two 32-bit big-endian unsigned
/// integers, yes before no, with no padding and no length prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteState {
    pub yes_votes: u32,
    pub no_votes: u32,
}

impl VoteState {
    pub const SIZE: usize = 8;

    pub fn from_config(config: VoteConfig) -> Self {
        Self {
            yes_votes: config.yes_votes.unwrap_or(0),
            no_votes: config.no_votes.unwrap_or(0),
        }
    }

    /// Serialize into the fixed-width record.
    pub fn pack(&self) -> [u8; Self::SIZE] {
        let mut record = [0u8; Self::SIZE];
        record[..4].copy_from_slice(&self.yes_votes.to_be_bytes());
        record[4..].copy_from_slice(&self.no_votes.to_be_bytes());
        record
    }

    /// Write the record into an account buffer of exactly `SIZE` bytes.
    pub fn pack_into(&self, data: &mut [u8]) -> Result<(), VoteError> {
        if data.len() != Self::SIZE {
            return Err(VoteError::CorruptStorage);
        }
        data.copy_from_slice(&self.pack());
        Ok(())
    }

    /// Deserialize a committed record. Anything but exactly two readable
    /// 32-bit fields is corrupt.
    pub fn unpack(data: &[u8]) -> Result<Self, VoteError> {
        if data.len() != Self::SIZE {
            return Err(VoteError::CorruptStorage);
        }
        let mut yes = [0u8; 4];
        let mut no = [0u8; 4];
        yes.copy_from_slice(&data[..4]);
        no.copy_from_slice(&data[4..]);
        Ok(Self {
            yes_votes: u32::from_be_bytes(yes),
            no_votes: u32::from_be_bytes(no),
        })
    }

    /// Count one yes vote. The no tally is untouched.
    pub fn record_yes(&mut self) -> Result<(), VoteError> {
        self.yes_votes = self
            .yes_votes
            .checked_add(1)
            .ok_or(VoteError::CounterOverflow)?;
        Ok(())
    }

    /// Count one no vote. The yes tally is untouched.
    pub fn record_no(&mut self) -> Result<(), VoteError> {
        self.no_votes = self
            .no_votes
            .checked_add(1)
            .ok_or(VoteError::CounterOverflow)?;
        Ok(())
    }
}

/// Derive the vote-state account address for a program.
pub fn vote_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTE_STATE_SEED], program_id)
}
