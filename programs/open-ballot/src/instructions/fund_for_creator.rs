use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    constants::MIN_BALANCE,
    error::BallotError,
    fees::voter_record_rent,
    state::{Ballot, RentLedger},
    store::VoterRecordStore,
    txn::PaymentTxn,
};

/// Creator pays for the ballot's minimum balance and, in box storage,
/// its own voter record. In local-state mode the creator opts in like
/// any other account, so only the minimum balance is funded here.
pub struct FundForCreator<'a> {
    pub caller: Pubkey,

    /// The ballot's own address, the only valid payment receiver
    pub address: Pubkey,

    pub ballot: &'a Ballot,
    pub records: &'a mut VoterRecordStore,
    pub ledger: &'a mut RentLedger,
}

impl FundForCreator<'_> {
    pub fn fund_for_creator(&mut self, payment: &PaymentTxn, now: u64) -> Result<()> {
        let balance_after = self.validate_funding(payment, now)?;

        if self.ballot.storage_mode == StorageMode::BoxStorage {
            self.records.allocate(self.caller)?;
        }
        self.ledger.credit(payment.amount)?;

        msg!(
            "Creator funding accepted: creator={}, paid={}, storage={:?}, ballot_balance={}",
            self.caller,
            payment.amount,
            self.ballot.storage_mode,
            balance_after
        );

        Ok(())
    }

    /// Run every check and return the balance the ballot will hold afterwards
    fn validate_funding(&self, payment: &PaymentTxn, now: u64) -> Result<u64> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_creator(&self.caller)?;
        self.ballot.ensure_voting_open(now)?;

        let required = match self.ballot.storage_mode {
            StorageMode::BoxStorage => {
                self.records
                    .ensure_allocatable(&self.caller, payment, &self.address)?;
                MIN_BALANCE + voter_record_rent()
            }
            StorageMode::LocalState => {
                payment.ensure_sender(&self.caller)?;
                payment.ensure_receiver(&self.address)?;
                MIN_BALANCE
            }
        };

        let balance_after = self.ledger.preview_credit(payment.amount)?;
        if balance_after < required {
            msg!(
                "Ballot balance after funding would be {}, needs at least {}",
                balance_after,
                required
            );
            return Err(BallotError::BalanceInsufficient.into());
        }

        Ok(balance_after)
    }
}
