use anchor_lang::prelude::*;

use crate::{constants::MIN_TXN_FEE, error::safe_add_u64};

/// An outbound transfer the ledger must execute in the same transaction
/// as the state change that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Always the ballot's own address
    pub sender: Pubkey,

    pub receiver: Pubkey,

    pub amount: u64,

    /// Transaction fee paid by the ballot on top of `amount`
    pub fee: u64,

    /// Account receiving whatever balance is left once `amount` and `fee` are paid
    pub close_remainder_to: Option<Pubkey>,

    /// Balance swept to `close_remainder_to`
    pub remainder: u64,

    pub note: &'static str,
}

impl Settlement {
    /// A plain refund paid out of the ballot balance
    pub fn refund(sender: Pubkey, receiver: Pubkey, amount: u64, note: &'static str) -> Self {
        Self {
            sender,
            receiver,
            amount,
            fee: MIN_TXN_FEE,
            close_remainder_to: None,
            remainder: 0,
            note,
        }
    }

    /// A refund that also closes the ballot account out to the receiver
    pub fn close_out(
        sender: Pubkey,
        receiver: Pubkey,
        amount: u64,
        remainder: u64,
        note: &'static str,
    ) -> Self {
        Self {
            sender,
            receiver,
            amount,
            fee: MIN_TXN_FEE,
            close_remainder_to: Some(receiver),
            remainder,
            note,
        }
    }

    /// Everything leaving the ballot balance
    pub fn total_debit(&self) -> Result<u64> {
        safe_add_u64(safe_add_u64(self.amount, self.fee)?, self.remainder)
    }

    pub fn log(&self) {
        msg!(
            "SETTLEMENT: sender={}, receiver={}, amount={}, fee={}, note={}",
            self.sender,
            self.receiver,
            self.amount,
            self.fee,
            self.note
        );
        if let Some(close_to) = self.close_remainder_to {
            msg!("Closing remainder of {} to {}", self.remainder, close_to);
        }
    }
}
