// query.rs
//
// Read-only accessors over a committed vote record, for off-chain readers
// that fetched the state account's data. None of these mutate anything;
// the only failure mode is a malformed record.

use crate::error::VoteError;
use crate::state::VoteState;

/// Current yes tally.
pub fn get_yes_votes(record: &[u8]) -> Result<u32, VoteError> {
    Ok(VoteState::unpack(record)?.yes_votes)
}

/// Current no tally.
pub fn get_no_votes(record: &[u8]) -> Result<u32, VoteError> {
    Ok(VoteState::unpack(record)?.no_votes)
}

/// Both tallies, yes then no. Decoded from the record in one pass, so the
/// pair always reflects a single committed state.
pub fn get_votes(record: &[u8]) -> Result<(u32, u32), VoteError> {
    let state = VoteState::unpack(record)?;
    Ok((state.yes_votes, state.no_votes))
}
