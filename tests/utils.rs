#![allow(dead_code)]

use solana_program_test::{processor, ProgramTest};
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    rent::Rent,
    system_program,
};
use vote_counter::instruction::{VoteConfig, OP_DEPLOY, OP_VOTE_NO, OP_VOTE_YES};
use vote_counter::state::{vote_state_address, VoteState};

pub const PROGRAM: Pubkey = Pubkey::new_from_array([7u8; 32]);

pub fn program_test() -> ProgramTest {
    ProgramTest::new(
        "vote_counter",
        PROGRAM,
        processor!(vote_counter::entrypoint::process_instruction),
    )
}

pub fn vote_state_pda() -> Pubkey {
    vote_state_address(&PROGRAM).0
}

/// Deploy message: empty body, defaults both tallies to 0.
pub fn deploy_ix(payer: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(vote_state_pda(), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: vec![],
    }
}

/// Deploy message carrying an explicit initial configuration.
pub fn deploy_with_config_ix(payer: Pubkey, yes_votes: Option<u32>, no_votes: Option<u32>) -> Instruction {
    let config = VoteConfig { yes_votes, no_votes };
    let mut data = OP_DEPLOY.to_be_bytes().to_vec();
    data.extend_from_slice(&borsh::to_vec(&config).expect("config must serialize"));
    Instruction {
        program_id: PROGRAM,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new(vote_state_pda(), false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    }
}

/// A mutating message whose body is the given 32-bit operation code.
pub fn op_ix(opcode: u32) -> Instruction {
    Instruction {
        program_id: PROGRAM,
        accounts: vec![AccountMeta::new(vote_state_pda(), false)],
        data: opcode.to_be_bytes().to_vec(),
    }
}

pub fn vote_yes_ix() -> Instruction {
    op_ix(OP_VOTE_YES)
}

pub fn vote_no_ix() -> Instruction {
    op_ix(OP_VOTE_NO)
}

/// A rent-exempt vote-state account holding an already-committed record.
pub fn committed_state(yes_votes: u32, no_votes: u32) -> Account {
    let record = VoteState { yes_votes, no_votes }.pack();
    Account {
        lamports: Rent::default().minimum_balance(VoteState::SIZE),
        data: record.to_vec(),
        owner: PROGRAM,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn read_votes(data: &[u8]) -> (u32, u32) {
    vote_counter::query::get_votes(data).expect("vote record must decode")
}
