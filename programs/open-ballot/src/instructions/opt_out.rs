use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    error::{safe_sub_u64, BallotError},
    state::Ballot,
    store::VoterRecordStore,
};

/// Account gives up its local-state slot; the ledger releases the schema rent itself
pub struct OptOut<'a> {
    pub caller: Pubkey,
    pub ballot: &'a mut Ballot,
    pub records: &'a mut VoterRecordStore,
}

impl OptOut<'_> {
    pub fn opt_out(&mut self, account: &Pubkey) -> Result<()> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_storage_mode(StorageMode::LocalState)?;
        require_keys_eq!(self.caller, *account, BallotError::Unauthorized);
        self.records.ensure_allocated(account)?;
        let total_opted_in = safe_sub_u64(self.ballot.total_opted_in, 1)?;

        let record = self.records.release(account)?;
        self.ballot.total_opted_in = total_opted_in;

        msg!(
            "Account opted out: account={}, had_voted={}, total_opted_in={}",
            account,
            record.has_voted(),
            total_opted_in
        );

        Ok(())
    }
}
