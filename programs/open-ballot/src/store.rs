use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::BallotError,
    fees::voter_record_rent,
    state::{Choice, VoterRecord},
    txn::PaymentTxn,
};

/// Storage key of a voter record: `a_` followed by the identity bytes
pub fn voter_record_key(id: &Pubkey) -> [u8; VOTER_RECORD_KEY_SIZE] {
    let mut key = [0u8; VOTER_RECORD_KEY_SIZE];
    key[..VOTER_RECORD_PREFIX.len()].copy_from_slice(VOTER_RECORD_PREFIX);
    key[VOTER_RECORD_PREFIX.len()..].copy_from_slice(id.as_ref());
    key
}

/// Voter records owned by one ballot, keyed by voter identity.
///
/// Presence of a key is meaningful on its own: an absent key means the
/// account never paid for storage (or has since released it).
/// Identities that voted stay in `voted` after their record is gone, so a
/// released and re-allocated record can not vote a second time.
/// The `ensure_*` checks never mutate; callers run every check they need
/// before the first write so a rejected call leaves the store unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoterRecordStore {
    records: BTreeMap<Pubkey, VoterRecord>,
    voted: BTreeSet<Pubkey>,
}

impl VoterRecordStore {
    pub fn contains(&self, id: &Pubkey) -> bool {
        self.records.contains_key(id)
    }

    pub fn get(&self, id: &Pubkey) -> Option<&VoterRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ensure_allocated(&self, id: &Pubkey) -> Result<&VoterRecord> {
        self.records
            .get(id)
            .ok_or_else(|| BallotError::NotAllocated.into())
    }

    pub fn ensure_unallocated(&self, id: &Pubkey) -> Result<()> {
        require!(!self.contains(id), BallotError::DuplicateAllocation);
        Ok(())
    }

    /// Check a paid allocation of a record for `id` without applying it.
    /// The payer must be `id` itself and the payment must reach `ballot_address`.
    pub fn ensure_allocatable(
        &self,
        id: &Pubkey,
        payment: &PaymentTxn,
        ballot_address: &Pubkey,
    ) -> Result<()> {
        payment.ensure_sender(id)?;
        self.ensure_unallocated(id)?;
        payment.ensure_covers(voter_record_rent())?;
        payment.ensure_receiver(ballot_address)?;
        Ok(())
    }

    /// Insert a zero-valued record; a second allocation for the same key fails closed
    pub fn allocate(&mut self, id: Pubkey) -> Result<()> {
        self.ensure_unallocated(&id)?;
        self.records.insert(id, VoterRecord::default());
        Ok(())
    }

    /// Whether `id` has ever voted on this ballot, record or not
    pub fn has_voted(&self, id: &Pubkey) -> bool {
        self.voted.contains(id)
    }

    /// Check that `id` holds a record and has never voted
    pub fn ensure_can_vote(&self, id: &Pubkey) -> Result<()> {
        let record = self.ensure_allocated(id)?;
        require!(
            !record.has_voted() && !self.has_voted(id),
            BallotError::AlreadyVoted
        );
        Ok(())
    }

    pub fn vote(&mut self, id: &Pubkey, choice: Choice) -> Result<()> {
        self.ensure_can_vote(id)?;
        let record = self
            .records
            .get_mut(id)
            .ok_or(BallotError::NotAllocated)?;
        record.cast(choice)?;
        self.voted.insert(*id);
        Ok(())
    }

    pub fn release(&mut self, id: &Pubkey) -> Result<VoterRecord> {
        self.records
            .remove(id)
            .ok_or_else(|| BallotError::NotAllocated.into())
    }

    /// Check a whole purge batch: 1..=8 entries, each allocated, none protected.
    /// A key repeated within the batch counts as not allocated the second time.
    pub fn ensure_purgeable(&self, ids: &[Pubkey], protected: &Pubkey) -> Result<()> {
        require!(
            is_valid_purge_batch(ids.len()),
            BallotError::InvalidPurgeBatch
        );

        let mut seen = BTreeSet::new();
        for id in ids {
            require!(
                self.contains(id) && seen.insert(*id),
                BallotError::NotAllocated
            );
            require_keys_neq!(*id, *protected, BallotError::CreatorRecordProtected);
        }

        Ok(())
    }

    /// Delete every record in the batch, or none of them
    pub fn purge(&mut self, ids: &[Pubkey], protected: &Pubkey) -> Result<u64> {
        self.ensure_purgeable(ids, protected)?;
        for id in ids {
            self.records.remove(id);
        }
        Ok(ids.len() as u64)
    }
}
