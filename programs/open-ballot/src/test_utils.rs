use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use crate::{
    config::DeployParams,
    constants::MIN_BALANCE,
    error::BallotError,
    fees::{global_schema_rent, voter_record_rent},
    instructions::PollSetup,
    txn::{PaymentTxn, TxnContext},
    OpenBallot,
};

pub const START: u64 = 1_700_000_000;
pub const DAY: u64 = 24 * 60 * 60;

/// A moment inside the default poll window
pub const DURING: u64 = START + DAY;

/// A moment after the default poll window
pub const AFTER: u64 = START + 5 * DAY;

pub fn creator() -> Pubkey {
    Pubkey::new_from_array([1; 32])
}

pub fn app_address() -> Pubkey {
    Pubkey::new_from_array([2; 32])
}

pub fn voter(n: u8) -> Pubkey {
    let mut bytes = [0xA0; 32];
    bytes[0] = n;
    Pubkey::new_from_array(bytes)
}

pub fn assert_rejected<T: std::fmt::Debug>(result: Result<T>, expected: BallotError) {
    let err = result.expect_err("operation should have been rejected");
    assert_eq!(ProgramError::from(err), ProgramError::Custom(expected.into()));
}

pub fn four_day_poll() -> PollSetup {
    PollSetup {
        title: b"T".to_vec(),
        choice1: b"A".to_vec(),
        choice2: b"B".to_vec(),
        choice3: b"C".to_vec(),
        start_unix: START,
        end_unix: START + 4 * DAY,
    }
}

pub fn creator_txn(now: u64) -> TxnContext {
    TxnContext::new(creator(), now)
}

pub fn voter_txn(n: u8, now: u64) -> TxnContext {
    TxnContext::new(voter(n), now)
}

pub fn rent_from(payer: Pubkey) -> PaymentTxn {
    PaymentTxn::new(payer, app_address(), voter_record_rent())
}

pub fn deploy(params: DeployParams) -> OpenBallot {
    let txn = creator_txn(START - DAY).with_balance(MIN_BALANCE + global_schema_rent());
    OpenBallot::initialize(app_address(), params, &txn).unwrap()
}

/// Deployed, configured and funded by the creator, ready for voters
pub fn open_ballot(params: DeployParams) -> OpenBallot {
    let mut ballot = deploy(params);
    ballot
        .configure_poll(&creator_txn(START - DAY), four_day_poll())
        .unwrap();
    let funding = PaymentTxn::new(creator(), app_address(), MIN_BALANCE + voter_record_rent());
    ballot.fund_for_creator(&creator_txn(DURING), &funding).unwrap();
    ballot
}
