use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    error::BallotError,
    state::{Ballot, RentLedger},
    store::VoterRecordStore,
    txn::PaymentTxn,
};

/// A voter pays the rent for their own record
pub struct RequestAllocation<'a> {
    pub caller: Pubkey,
    pub address: Pubkey,
    pub ballot: &'a Ballot,
    pub records: &'a mut VoterRecordStore,
    pub ledger: &'a mut RentLedger,
}

impl RequestAllocation<'_> {
    pub fn request_allocation(&mut self, payment: &PaymentTxn, now: u64) -> Result<()> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_storage_mode(StorageMode::BoxStorage)?;
        // the creator's record goes through fund_for_creator
        require_keys_neq!(self.caller, self.ballot.creator, BallotError::Unauthorized);
        self.ballot.ensure_voting_open(now)?;
        self.records
            .ensure_allocatable(&self.caller, payment, &self.address)?;
        let balance_after = self.ledger.preview_credit(payment.amount)?;

        self.records.allocate(self.caller)?;
        self.ledger.credit(payment.amount)?;

        msg!(
            "Voter record allocated: voter={}, paid={}, records={}, ballot_balance={}",
            self.caller,
            payment.amount,
            self.records.len(),
            balance_after
        );

        Ok(())
    }
}
