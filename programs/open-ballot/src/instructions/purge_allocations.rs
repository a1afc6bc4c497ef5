use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    state::Ballot,
    store::VoterRecordStore,
};

/// Creator deletes up to eight voter records once voting is over.
/// The rent stays in the ballot until termination.
pub struct PurgeAllocations<'a> {
    pub caller: Pubkey,
    pub ballot: &'a mut Ballot,
    pub records: &'a mut VoterRecordStore,
}

impl PurgeAllocations<'_> {
    pub fn purge_allocations(&mut self, accounts: &[Pubkey], now: u64) -> Result<u64> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_storage_mode(StorageMode::BoxStorage)?;
        self.ballot.ensure_creator(&self.caller)?;
        self.ballot.ensure_voting_over(now)?;
        self.records.ensure_purgeable(accounts, &self.ballot.creator)?;

        // last fallible step, nothing has been written yet
        self.ballot.record_purged(accounts.len() as u64)?;
        let purged = self.records.purge(accounts, &self.ballot.creator)?;

        msg!(
            "Voter records purged: count={}, total_purged={}, remaining={}",
            purged,
            self.ballot.total_purged,
            self.records.len()
        );

        Ok(purged)
    }
}
