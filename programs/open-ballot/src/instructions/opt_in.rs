use anchor_lang::prelude::*;

use crate::{
    config::StorageMode,
    constants::MIN_BALANCE,
    error::{safe_add_u64, BallotError},
    fees::local_schema_rent,
    state::Ballot,
    store::VoterRecordStore,
};

/// Account acquires its local-state voting slot
pub struct OptIn<'a> {
    pub caller: Pubkey,

    /// Caller balance before the opt-in transaction
    pub caller_balance: u64,

    pub ballot: &'a mut Ballot,
    pub records: &'a mut VoterRecordStore,
}

impl OptIn<'_> {
    pub fn opt_in(&mut self, account: &Pubkey, now: u64) -> Result<()> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_storage_mode(StorageMode::LocalState)?;
        require_keys_eq!(self.caller, *account, BallotError::Unauthorized);

        let required = MIN_BALANCE + local_schema_rent();
        if self.caller_balance < required {
            msg!(
                "Account balance {} is below the {} needed to opt in",
                self.caller_balance,
                required
            );
            return Err(BallotError::BalanceInsufficient.into());
        }

        self.records.ensure_unallocated(account)?;
        self.ballot.ensure_voting_open(now)?;
        let total_opted_in = safe_add_u64(self.ballot.total_opted_in, 1)?;

        self.records.allocate(*account)?;
        self.ballot.total_opted_in = total_opted_in;

        msg!(
            "Account opted in: account={}, total_opted_in={}",
            account,
            total_opted_in
        );

        Ok(())
    }
}
