use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction,
    sysvar::rent::Rent,
    sysvar::Sysvar,
};

use crate::{
    instruction::{VoteConfig, VoteInstruction},
    state::{vote_state_address, VoteState, VOTE_STATE_SEED},
};

// program entrypoint's implementation
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Unpack the operation code and any payload
    let instruction = VoteInstruction::unpack(instruction_data)?;

    // Call the corresponding handler
    match instruction {
        // empty body / opcode 0: Deploy
        VoteInstruction::Deploy { config } => {
            msg!("Instruction: Deploy");
            process_deploy(program_id, accounts, config)
        }

        // opcode 1: VoteYes
        VoteInstruction::VoteYes => {
            msg!("Instruction: VoteYes");
            process_vote_yes(program_id, accounts)
        }

        // opcode 2: VoteNo
        VoteInstruction::VoteNo => {
            msg!("Instruction: VoteNo");
            process_vote_no(program_id, accounts)
        }
    }
}

pub fn process_deploy(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    config: VoteConfig,
) -> ProgramResult {
    // Iterating accounts
    let accounts_iter = &mut accounts.iter();
    let payer_account = next_account_info(accounts_iter)?;
    let vote_account = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;

    // Check to ensure that you're using the right PDA
    let (vote_pda, bump_seed) = vote_state_address(program_id);
    if vote_pda != *vote_account.key {
        msg!("Invalid seeds for PDA");
        return Err(ProgramError::InvalidArgument);
    }

    // Re-deploy on an existing instance is a no-op: the committed tallies
    // are never reset.
    if vote_account.lamports() > 0 {
        msg!("Vote state {} already deployed, nothing to do", vote_pda);
        return Ok(());
    }

    let rent = Rent::get()?;
    let rent_lamports = rent.minimum_balance(VoteState::SIZE);
    msg!(
        "Initializing vote state account {} with {} lamports",
        vote_pda,
        rent_lamports
    );
    invoke_signed(
        &system_instruction::create_account(
            payer_account.key,
            vote_account.key,
            rent_lamports,
            VoteState::SIZE as u64,
            program_id,
        ),
        &[
            payer_account.clone(),
            vote_account.clone(),
            system_program.clone(),
        ],
        &[&[VOTE_STATE_SEED, &[bump_seed]]],
    )?;

    let state = VoteState::from_config(config);
    state.pack_into(&mut vote_account.data.borrow_mut()[..])?;
    msg!(
        "Vote state {} deployed: yes={} no={}",
        vote_account.key,
        state.yes_votes,
        state.no_votes
    );

    Ok(())
}

pub fn process_vote_yes(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    // Iterating accounts. No signer check: any sender may vote, repeat
    // votes included.
    let accounts_iter = &mut accounts.iter();
    let vote_account = next_account_info(accounts_iter)?;

    // Check to ensure that you're using the right PDA
    let (vote_pda, _bump_seed) = vote_state_address(program_id);
    if vote_pda != *vote_account.key {
        msg!("Invalid seeds for PDA");
        return Err(ProgramError::InvalidArgument);
    }

    // Increment the yes tally by exactly 1 using deserialization and serialization
    let mut state = VoteState::unpack(&vote_account.data.borrow())?;
    state.record_yes()?;
    state.pack_into(&mut vote_account.data.borrow_mut()[..])?;
    msg!(
        "PDA {} votes: yes={} no={}",
        vote_account.key,
        state.yes_votes,
        state.no_votes
    );

    Ok(())
}

pub fn process_vote_no(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    // Iterating accounts. No signer check: any sender may vote, repeat
    // votes included.
    let accounts_iter = &mut accounts.iter();
    let vote_account = next_account_info(accounts_iter)?;

    // Check to ensure that you're using the right PDA
    let (vote_pda, _bump_seed) = vote_state_address(program_id);
    if vote_pda != *vote_account.key {
        msg!("Invalid seeds for PDA");
        return Err(ProgramError::InvalidArgument);
    }

    // Increment the no tally by exactly 1 using deserialization and serialization
    let mut state = VoteState::unpack(&vote_account.data.borrow())?;
    state.record_no()?;
    state.pack_into(&mut vote_account.data.borrow_mut()[..])?;
    msg!(
        "PDA {} votes: yes={} no={}",
        vote_account.key,
        state.yes_votes,
        state.no_votes
    );

    Ok(())
}
