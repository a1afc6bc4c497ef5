use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    error::{reject, BallotError},
    settlement::Settlement,
    state::{Ballot, RentLedger},
    store::VoterRecordStore,
};

const CLOSE_NOTE: &str = "Closed remainder of ballot balance and purged record rent to creator";

/// Creator ends the ballot and takes back everything it holds.
///
/// One settlement pays the purge refund to the creator and closes the
/// remaining balance out to the same account. Nothing is accepted afterwards.
pub struct Terminate<'a> {
    pub caller: Pubkey,
    pub address: Pubkey,
    pub ballot: &'a mut Ballot,
    pub records: &'a mut VoterRecordStore,
    pub ledger: &'a mut RentLedger,
}

impl Terminate<'_> {
    pub fn terminate(&mut self) -> Result<Settlement> {
        self.ballot.ensure_active()?;
        if !self.ballot.deletable {
            return reject(BallotError::NotDeletable, "terminate");
        }
        self.ballot.ensure_creator(&self.caller)?;

        let settlement = self.build_settlement()?;

        if self.ballot.storage_mode == StorageMode::BoxStorage
            && self.records.contains(&self.ballot.creator)
        {
            self.records.release(&self.ballot.creator)?;
            msg!("Creator record deleted: creator={}", self.ballot.creator);
        }
        self.ledger.settle(&settlement)?;
        self.ballot.terminated = true;

        msg!(
            "TERMINATE EVENT: creator={}, total_votes={}, total_purged={}, refund={}, remainder={}",
            self.ballot.creator,
            self.ballot.tally.total_votes,
            self.ballot.total_purged,
            settlement.amount,
            settlement.remainder
        );
        settlement.log();

        Ok(settlement)
    }

    /// Purge refund plus a close-out of whatever the ledger holds beyond it
    fn build_settlement(&self) -> Result<Settlement> {
        let refund = self.ballot.purge_refund()?;
        let creator = self.ballot.creator;

        let refund_only = Settlement::close_out(self.address, creator, refund, 0, CLOSE_NOTE);
        self.ledger.ensure_covers(&refund_only)?;
        let remainder = self.ledger.balance() - refund_only.total_debit()?;

        Ok(Settlement::close_out(
            self.address,
            creator,
            refund,
            remainder,
            CLOSE_NOTE,
        ))
    }
}
