use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;

use open_ballot::{
    config::{DeployParams, StorageMode},
    constants::{MIN_BALANCE, MIN_TXN_FEE},
    error::BallotError,
    fees::{global_schema_rent, voter_record_rent},
    instructions::PollSetup,
    state::{Choice, PollPhase, VoteStatus},
    txn::{PaymentTxn, TxnContext},
    OpenBallot,
};

const START: u64 = 1_700_000_000;
const DAY: u64 = 86_400;
const DURING: u64 = START + 2 * DAY;
const AFTER: u64 = START + 4 * DAY + 1;

fn creator() -> Pubkey {
    Pubkey::new_from_array([7; 32])
}

fn app() -> Pubkey {
    Pubkey::new_from_array([8; 32])
}

fn account(n: u8) -> Pubkey {
    let mut bytes = [0x5E; 32];
    bytes[31] = n;
    Pubkey::new_from_array(bytes)
}

fn at(sender: Pubkey, now: u64) -> TxnContext {
    TxnContext::new(sender, now)
}

fn expect_error<T: std::fmt::Debug>(result: Result<T>, expected: BallotError) {
    let err = result.expect_err("expected a rejection");
    assert_eq!(ProgramError::from(err), ProgramError::Custom(expected.into()));
}

fn poll(start_unix: u64, end_unix: u64) -> PollSetup {
    PollSetup {
        title: b"T".to_vec(),
        choice1: b"A".to_vec(),
        choice2: b"B".to_vec(),
        choice3: b"C".to_vec(),
        start_unix,
        end_unix,
    }
}

fn deployed(params: DeployParams) -> OpenBallot {
    let txn = at(creator(), START - DAY).with_balance(MIN_BALANCE + global_schema_rent());
    OpenBallot::initialize(app(), params, &txn).unwrap()
}

fn ready() -> OpenBallot {
    let mut ballot = deployed(DeployParams::default());
    ballot
        .configure_poll(&at(creator(), START - DAY), poll(START, START + 4 * DAY))
        .unwrap();
    let funding = PaymentTxn::new(creator(), app(), MIN_BALANCE + voter_record_rent());
    ballot
        .fund_for_creator(&at(creator(), DURING), &funding)
        .unwrap();
    ballot
}

fn allocate(ballot: &mut OpenBallot, n: u8) {
    let payment = PaymentTxn::new(account(n), app(), voter_record_rent());
    ballot
        .request_allocation(&at(account(n), DURING), &payment)
        .unwrap();
}

#[test]
fn scenario_a_configure_is_one_shot() {
    let mut ballot = deployed(DeployParams::default());
    assert_eq!(ballot.phase(START), PollPhase::Unconfigured);

    ballot
        .configure_poll(&at(creator(), START - DAY), poll(START, START + 4 * DAY))
        .unwrap();
    expect_error(
        ballot.configure_poll(
            &at(creator(), START - DAY),
            PollSetup {
                title: b"Changed".to_vec(),
                ..poll(START, START + 5 * DAY)
            },
        ),
        BallotError::AlreadyFinalized,
    );

    let stored = ballot.poll();
    assert!(stored.finalized);
    assert_eq!(stored.title, b"T".to_vec());
    assert_eq!(stored.end_unix, START + 4 * DAY);
    assert_eq!(stored.label(Choice::Choice2), Some(&b"B"[..]));
}

#[test]
fn scenario_b_window_length_bounds() {
    let mut ballot = deployed(DeployParams::default());
    expect_error(
        ballot.configure_poll(&at(creator(), START - DAY), poll(START, START + 2 * DAY)),
        BallotError::InvalidPollWindow,
    );
    expect_error(
        ballot.configure_poll(&at(creator(), START - DAY), poll(START, START + 15 * DAY)),
        BallotError::InvalidPollWindow,
    );
    assert!(!ballot.poll().finalized);
}

#[test]
fn scenario_c_allocation_payment() {
    let mut ballot = ready();

    let short = PaymentTxn::new(account(1), app(), voter_record_rent() - 1);
    expect_error(
        ballot.request_allocation(&at(account(1), DURING), &short),
        BallotError::InsufficientPayment,
    );
    assert!(!ballot.has_allocation(&account(1)));

    allocate(&mut ballot, 1);
    let record = ballot.voter_record(&account(1)).unwrap();
    assert_eq!(record.voted(), VoteStatus::NotVoted);
    assert_eq!(record.choice(), Choice::None);
}

#[test]
fn scenario_d_single_vote() {
    let mut ballot = ready();
    allocate(&mut ballot, 1);

    ballot.submit_vote(&at(account(1), DURING), 2).unwrap();
    let after_first = ballot.tally();
    assert_eq!(after_first.choice2_total, 1);
    assert_eq!(after_first.total_votes, 1);

    expect_error(
        ballot.submit_vote(&at(account(1), DURING), 2),
        BallotError::AlreadyVoted,
    );
    assert_eq!(ballot.tally(), after_first);
}

#[test]
fn scenario_e_purge_batch_is_atomic() {
    let mut ballot = ready();
    allocate(&mut ballot, 1);

    expect_error(
        ballot.purge_allocations(&at(creator(), AFTER), &[account(1), account(2)]),
        BallotError::NotAllocated,
    );
    assert!(ballot.has_allocation(&account(1)));
    assert_eq!(ballot.total_purged(), 0);
}

#[test]
fn payment_mismatches_are_rejected() {
    let mut ballot = ready();

    let someone_else = PaymentTxn::new(account(2), app(), voter_record_rent());
    expect_error(
        ballot.request_allocation(&at(account(1), DURING), &someone_else),
        BallotError::InvalidPayer,
    );

    let elsewhere = PaymentTxn::new(account(1), creator(), voter_record_rent());
    expect_error(
        ballot.request_allocation(&at(account(1), DURING), &elsewhere),
        BallotError::InvalidRecipient,
    );

    allocate(&mut ballot, 1);
    let again = PaymentTxn::new(account(1), app(), voter_record_rent());
    expect_error(
        ballot.request_allocation(&at(account(1), DURING), &again),
        BallotError::DuplicateAllocation,
    );
}

#[test]
fn release_refunds_rent_less_fee() {
    let mut ballot = ready();
    allocate(&mut ballot, 1);
    let balance = ballot.balance();

    let refund = ballot.release_allocation(&at(account(1), DURING)).unwrap();
    assert_eq!(refund.sender, app());
    assert_eq!(refund.receiver, account(1));
    assert_eq!(refund.amount, voter_record_rent() - MIN_TXN_FEE);
    assert_eq!(refund.close_remainder_to, None);
    assert!(!ballot.has_allocation(&account(1)));
    assert_eq!(ballot.balance(), balance - voter_record_rent());

    expect_error(
        ballot.release_allocation(&at(creator(), DURING)),
        BallotError::CreatorRecordProtected,
    );
}

#[test]
fn purge_then_terminate_settles_everything() {
    let mut ballot = ready();
    for n in 1..=4 {
        allocate(&mut ballot, n);
    }
    ballot.submit_vote(&at(account(1), DURING), 1).unwrap();
    ballot.submit_vote(&at(account(2), DURING), 3).unwrap();
    ballot.submit_vote(&at(account(3), DURING), 3).unwrap();

    expect_error(
        ballot.purge_allocations(&at(creator(), AFTER), &[account(1), creator()]),
        BallotError::CreatorRecordProtected,
    );
    let purged = ballot
        .purge_allocations(&at(creator(), AFTER), &[account(1), account(2), account(3)])
        .unwrap();
    assert_eq!(purged, 3);
    assert_eq!(ballot.total_purged(), 3);

    let results = ballot.results();
    assert_eq!(results.tally.total_votes, 3);
    assert_eq!(results.leading, Some(Choice::Choice3));

    let balance = ballot.balance();
    let closing = ballot.terminate(&at(creator(), AFTER)).unwrap();
    assert_eq!(closing.receiver, creator());
    assert_eq!(closing.amount, 3 * voter_record_rent() - MIN_TXN_FEE);
    assert_eq!(closing.fee, MIN_TXN_FEE);
    assert_eq!(closing.close_remainder_to, Some(creator()));
    assert_eq!(closing.total_debit().unwrap(), balance);

    assert!(ballot.is_terminated());
    assert!(!ballot.has_allocation(&creator()));
    assert_eq!(ballot.balance(), 0);
}

#[test]
fn undeletable_ballot_stays() {
    let mut ballot = deployed(DeployParams {
        deletable: false,
        ..DeployParams::default()
    });
    expect_error(ballot.terminate(&at(creator(), START)), BallotError::NotDeletable);
    assert!(!ballot.is_terminated());
}

#[test]
fn open_window_when_not_enforced() {
    let mut ballot = deployed(DeployParams {
        enforce_voting_window: false,
        ..DeployParams::default()
    });
    let payment = PaymentTxn::new(account(1), app(), voter_record_rent());
    ballot
        .request_allocation(&at(account(1), START - 30 * DAY), &payment)
        .unwrap();
    ballot
        .submit_vote(&at(account(1), START - 30 * DAY), 1)
        .unwrap();
    assert_eq!(ballot.tally().choice1_total, 1);
}

#[test]
fn deploy_needs_schema_rent() {
    let txn = at(creator(), START).with_balance(MIN_BALANCE + global_schema_rent() - 1);
    expect_error(
        OpenBallot::initialize(app(), DeployParams::default(), &txn),
        BallotError::BalanceInsufficient,
    );
}

#[test]
fn version_stamp_is_reported() {
    let ballot = deployed(DeployParams {
        version_unix: 1_699_000_000,
        ..DeployParams::default()
    });
    assert_eq!(ballot.version(), 1_699_000_000);
    assert_eq!(ballot.creator(), creator());
    assert_eq!(ballot.address(), app());
}

#[test]
fn local_state_mode_round_trip() {
    let mut ballot = deployed(DeployParams {
        storage_mode: StorageMode::LocalState,
        ..DeployParams::default()
    });
    ballot
        .configure_poll(&at(creator(), START - DAY), poll(START, START + 4 * DAY))
        .unwrap();

    let txn = at(account(1), DURING).with_balance(1_000_000);
    ballot.opt_in(&txn, &account(1)).unwrap();
    ballot.submit_vote(&txn, 1).unwrap();
    assert_eq!(ballot.total_opted_in(), 1);

    expect_error(
        ballot.release_allocation(&txn),
        BallotError::StorageModeMismatch,
    );

    ballot.opt_out(&txn, &account(1)).unwrap();
    assert_eq!(ballot.total_opted_in(), 0);
    assert!(!ballot.has_allocation(&account(1)));
}

#[test]
fn released_record_does_not_restore_the_vote() {
    let mut ballot = ready();
    allocate(&mut ballot, 1);
    ballot.submit_vote(&at(account(1), DURING), 1).unwrap();
    ballot.release_allocation(&at(account(1), DURING)).unwrap();

    allocate(&mut ballot, 1);
    expect_error(
        ballot.submit_vote(&at(account(1), DURING), 1),
        BallotError::AlreadyVoted,
    );
    assert_eq!(ballot.tally().choice1_total, 1);
    assert_eq!(ballot.tally().total_votes, 1);
}

#[test]
fn local_state_ballot_terminates() {
    let mut ballot = deployed(DeployParams {
        storage_mode: StorageMode::LocalState,
        ..DeployParams::default()
    });
    ballot
        .configure_poll(&at(creator(), START - DAY), poll(START, START + 4 * DAY))
        .unwrap();
    let funding = PaymentTxn::new(creator(), app(), MIN_BALANCE);
    ballot
        .fund_for_creator(&at(creator(), DURING), &funding)
        .unwrap();
    assert!(!ballot.has_allocation(&creator()));

    let closing = ballot.terminate(&at(creator(), AFTER)).unwrap();
    assert_eq!(closing.amount, 0);
    assert_eq!(closing.remainder, MIN_BALANCE - MIN_TXN_FEE);
    assert_eq!(closing.close_remainder_to, Some(creator()));
    assert!(ballot.is_terminated());
    assert_eq!(ballot.balance(), 0);
}
