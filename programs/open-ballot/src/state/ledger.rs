use anchor_lang::prelude::*;

use crate::{
    error::{safe_add_u64, BallotError},
    settlement::Settlement,
};

/// Mirror of the balance held at the ballot address.
/// Credited by accepted payments, debited by settlements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RentLedger {
    balance: u64,
}

impl RentLedger {
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Balance after crediting `amount`, without applying it
    pub fn preview_credit(&self, amount: u64) -> Result<u64> {
        safe_add_u64(self.balance, amount)
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.preview_credit(amount)?;
        Ok(())
    }

    /// Reject unless the balance can pay for `settlement`
    pub fn ensure_covers(&self, settlement: &Settlement) -> Result<()> {
        let required = settlement.total_debit()?;
        if self.balance < required {
            msg!(
                "Ballot balance {} can not cover settlement of {}",
                self.balance,
                required
            );
            return Err(BallotError::BalanceInsufficient.into());
        }
        Ok(())
    }

    pub fn settle(&mut self, settlement: &Settlement) -> Result<()> {
        self.ensure_covers(settlement)?;
        self.balance -= settlement.total_debit()?;
        Ok(())
    }
}
