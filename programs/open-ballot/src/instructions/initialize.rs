use anchor_lang::prelude::*;

use crate::{
    config::DeployParams, constants::MIN_BALANCE, error::BallotError, fees::global_schema_rent,
    state::Ballot,
};

/// Create the ballot's global state.
/// The deployer becomes the creator and pays for the global schema.
pub struct Initialize {
    pub creator: Pubkey,

    /// Deployer balance before the creation transaction
    pub creator_balance: u64,
}

impl Initialize {
    pub fn initialize(&self, params: &DeployParams) -> Result<Ballot> {
        self.validate_balance()?;

        let ballot = Ballot::new(self.creator, params);

        msg!(
            "Ballot initialized: creator={}, version={}, deletable={}, enforce_window={}, storage={:?}",
            ballot.creator,
            ballot.version_unix,
            ballot.deletable,
            ballot.enforce_voting_window,
            ballot.storage_mode
        );

        Ok(ballot)
    }

    fn validate_balance(&self) -> Result<()> {
        let required = MIN_BALANCE + global_schema_rent();
        if self.creator_balance < required {
            msg!(
                "Creator balance {} is below the {} needed for the global schema",
                self.creator_balance,
                required
            );
            return Err(BallotError::BalanceInsufficient.into());
        }
        Ok(())
    }
}
