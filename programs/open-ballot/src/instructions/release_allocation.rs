use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    error::BallotError,
    fees::release_refund,
    settlement::Settlement,
    state::{Ballot, RentLedger},
    store::VoterRecordStore,
};

/// A voter deletes their own record and takes back its rent, less the transfer fee
pub struct ReleaseAllocation<'a> {
    pub caller: Pubkey,
    pub address: Pubkey,
    pub ballot: &'a Ballot,
    pub records: &'a mut VoterRecordStore,
    pub ledger: &'a mut RentLedger,
}

impl ReleaseAllocation<'_> {
    pub fn release_allocation(&mut self) -> Result<Settlement> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_storage_mode(StorageMode::BoxStorage)?;
        require_keys_neq!(
            self.caller,
            self.ballot.creator,
            BallotError::CreatorRecordProtected
        );
        self.records.ensure_allocated(&self.caller)?;

        let refund = Settlement::refund(
            self.address,
            self.caller,
            release_refund(),
            "voter record released",
        );
        self.ledger.ensure_covers(&refund)?;

        let record = self.records.release(&self.caller)?;
        self.ledger.settle(&refund)?;

        msg!(
            "Voter record released: voter={}, had_voted={}, refund={}",
            self.caller,
            record.has_voted(),
            refund.amount
        );
        refund.log();

        Ok(refund)
    }
}
