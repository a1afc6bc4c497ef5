use anchor_lang::prelude::*;

use crate::error::BallotError;

/// What the ledger tells the ballot about the transaction it is running in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxnContext {
    /// Authenticated sender of the call
    pub sender: Pubkey,

    /// Latest confirmed block timestamp (Unix seconds)
    pub latest_timestamp: u64,

    /// Sender's balance as seen by the ledger before this transaction
    pub sender_balance: u64,
}

impl TxnContext {
    pub fn new(sender: Pubkey, latest_timestamp: u64) -> Self {
        Self {
            sender,
            latest_timestamp,
            sender_balance: 0,
        }
    }

    pub fn with_balance(mut self, sender_balance: u64) -> Self {
        self.sender_balance = sender_balance;
        self
    }
}

/// A payment bundled atomically with the call.
/// Its authenticity is checked by the ledger; the ballot only checks the declared fields.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentTxn {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
}

impl PaymentTxn {
    pub fn new(sender: Pubkey, receiver: Pubkey, amount: u64) -> Self {
        Self {
            sender,
            receiver,
            amount,
        }
    }

    pub fn ensure_sender(&self, payer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.sender, *payer, BallotError::InvalidPayer);
        Ok(())
    }

    pub fn ensure_receiver(&self, receiver: &Pubkey) -> Result<()> {
        require_keys_eq!(self.receiver, *receiver, BallotError::InvalidRecipient);
        Ok(())
    }

    pub fn ensure_covers(&self, minimum: u64) -> Result<()> {
        if self.amount < minimum {
            msg!("Payment of {} is short of the required {}", self.amount, minimum);
            return Err(BallotError::InsufficientPayment.into());
        }
        Ok(())
    }
}
