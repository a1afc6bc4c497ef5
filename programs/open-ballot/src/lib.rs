use anchor_lang::prelude::*;

// Import our modules
pub mod config;
pub mod constants;
pub mod error;
pub mod fees;
pub mod instructions;
pub mod settlement;
pub mod state;
pub mod store;
pub mod txn;

#[cfg(test)]
pub(crate) mod test_utils;

// Import instruction handlers
use instructions::*;

use crate::{
    config::DeployParams,
    settlement::Settlement,
    state::{Ballot, PollConfig, PollPhase, PollResults, RentLedger, TallyState, VoterRecord},
    store::VoterRecordStore,
    txn::{PaymentTxn, TxnContext},
};

declare_id!("LKeENHWLZLpdjUrFkTCbseZ89EQJkvJjteiagVfkC6V");

/// One deployed ballot: a single three-choice poll with its voter records
/// and the balance held at its address.
///
/// Every operation either commits fully or returns an error and leaves
/// the instance exactly as it was.
#[derive(Debug)]
pub struct OpenBallot {
    address: Pubkey,
    ballot: Ballot,
    records: VoterRecordStore,
    ledger: RentLedger,
}

impl OpenBallot {
    /// Create the ballot; the sender becomes its creator
    pub fn initialize(address: Pubkey, params: DeployParams, txn: &TxnContext) -> Result<Self> {
        let ballot = Initialize {
            creator: txn.sender,
            creator_balance: txn.sender_balance,
        }
        .initialize(&params)?;

        Ok(Self {
            address,
            ballot,
            records: VoterRecordStore::default(),
            ledger: RentLedger::default(),
        })
    }

    /// Set the poll title, choices and voting window (creator only, once)
    pub fn configure_poll(&mut self, txn: &TxnContext, setup: PollSetup) -> Result<()> {
        ConfigurePoll {
            caller: txn.sender,
            ballot: &mut self.ballot,
        }
        .configure_poll(setup)
    }

    /// Fund the ballot's minimum balance and the creator's own voter record
    pub fn fund_for_creator(&mut self, txn: &TxnContext, payment: &PaymentTxn) -> Result<()> {
        FundForCreator {
            caller: txn.sender,
            address: self.address,
            ballot: &self.ballot,
            records: &mut self.records,
            ledger: &mut self.ledger,
        }
        .fund_for_creator(payment, txn.latest_timestamp)
    }

    /// Pay for and allocate the sender's voter record
    pub fn request_allocation(&mut self, txn: &TxnContext, payment: &PaymentTxn) -> Result<()> {
        RequestAllocation {
            caller: txn.sender,
            address: self.address,
            ballot: &self.ballot,
            records: &mut self.records,
            ledger: &mut self.ledger,
        }
        .request_allocation(payment, txn.latest_timestamp)
    }

    /// Cast the sender's vote for choice 1, 2 or 3
    pub fn submit_vote(&mut self, txn: &TxnContext, choice: u8) -> Result<()> {
        SubmitVote {
            voter: txn.sender,
            ballot: &mut self.ballot,
            records: &mut self.records,
        }
        .submit_vote(choice, txn.latest_timestamp)
    }

    /// Delete the sender's record and return the refund to pay out
    pub fn release_allocation(&mut self, txn: &TxnContext) -> Result<Settlement> {
        ReleaseAllocation {
            caller: txn.sender,
            address: self.address,
            ballot: &self.ballot,
            records: &mut self.records,
            ledger: &mut self.ledger,
        }
        .release_allocation()
    }

    /// Delete a batch of other accounts' records (creator only)
    pub fn purge_allocations(&mut self, txn: &TxnContext, accounts: &[Pubkey]) -> Result<u64> {
        PurgeAllocations {
            caller: txn.sender,
            ballot: &mut self.ballot,
            records: &mut self.records,
        }
        .purge_allocations(accounts, txn.latest_timestamp)
    }

    /// End the ballot and return the closing settlement to the creator
    pub fn terminate(&mut self, txn: &TxnContext) -> Result<Settlement> {
        Terminate {
            caller: txn.sender,
            address: self.address,
            ballot: &mut self.ballot,
            records: &mut self.records,
            ledger: &mut self.ledger,
        }
        .terminate()
    }

    /// Take a local-state voting slot for the sender (local-state mode only)
    pub fn opt_in(&mut self, txn: &TxnContext, account: &Pubkey) -> Result<()> {
        OptIn {
            caller: txn.sender,
            caller_balance: txn.sender_balance,
            ballot: &mut self.ballot,
            records: &mut self.records,
        }
        .opt_in(account, txn.latest_timestamp)
    }

    /// Give up the sender's local-state slot (local-state mode only)
    pub fn opt_out(&mut self, txn: &TxnContext, account: &Pubkey) -> Result<()> {
        OptOut {
            caller: txn.sender,
            ballot: &mut self.ballot,
            records: &mut self.records,
        }
        .opt_out(account)
    }

    /// Accept a plain payment into the ballot balance
    pub fn deposit(&mut self, payment: &PaymentTxn) -> Result<()> {
        self.ballot.ensure_active()?;
        payment.ensure_receiver(&self.address)?;
        self.ledger.credit(payment.amount)?;

        msg!(
            "Deposit: sender={}, amount={}, ballot_balance={}",
            payment.sender,
            payment.amount,
            self.ledger.balance()
        );

        Ok(())
    }

    // Queries

    /// Address the ballot receives payments at
    pub fn address(&self) -> Pubkey {
        self.address
    }

    /// Account that deployed the ballot
    pub fn creator(&self) -> Pubkey {
        self.ballot.creator
    }

    /// Deploy-time version stamp
    pub fn version(&self) -> u64 {
        self.ballot.version_unix
    }

    /// Poll title, choices and voting window
    pub fn poll(&self) -> &PollConfig {
        &self.ballot.poll
    }

    /// Current vote counts
    pub fn tally(&self) -> TallyState {
        self.ballot.tally
    }

    /// Vote counts with the leading choice, if there is a single one
    pub fn results(&self) -> PollResults {
        self.ballot.results()
    }

    /// Where `now` falls relative to the voting window
    pub fn phase(&self, now: u64) -> PollPhase {
        self.ballot.phase(now)
    }

    /// The record stored for `account`, if it holds one
    pub fn voter_record(&self, account: &Pubkey) -> Option<VoterRecord> {
        self.records.get(account).copied()
    }

    /// Whether `account` currently holds a record
    pub fn has_allocation(&self, account: &Pubkey) -> bool {
        self.records.contains(account)
    }

    /// Whether `account` has cast a vote, even if its record has since been released
    pub fn has_voted(&self, account: &Pubkey) -> bool {
        self.records.has_voted(account)
    }

    /// Storage key under which `account`'s record lives
    pub fn voter_record_key(&self, account: &Pubkey) -> [u8; constants::VOTER_RECORD_KEY_SIZE] {
        store::voter_record_key(account)
    }

    /// Records purged by the creator over the ballot's lifetime
    pub fn total_purged(&self) -> u64 {
        self.ballot.total_purged
    }

    /// Accounts currently opted in to local state
    pub fn total_opted_in(&self) -> u64 {
        self.ballot.total_opted_in
    }

    /// Balance held at the ballot address
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    /// Whether the creator has ended the ballot
    pub fn is_terminated(&self) -> bool {
        self.ballot.terminated
    }
}
