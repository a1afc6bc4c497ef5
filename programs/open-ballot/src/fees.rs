//! Minimum balance requirement (rent) calculations.
//!
//! The amounts are part of the observable contract: clients pay exactly
//! these figures when funding storage, so the formulas must not drift.

use anchor_lang::Space;

use crate::constants::*;
use crate::state::VoterRecord;

/// Rent for a key-value schema with `num_bytes` byte-slice fields and
/// `num_uints` integer fields.
pub fn schema_rent(num_bytes: u64, num_uints: u64) -> u64 {
    SCHEMA_BASE_FEE + SCHEMA_BYTES_FEE * num_bytes + SCHEMA_UINT_FEE * num_uints
}

/// Rent for a single keyed record.
pub fn single_record_fee(key_size: u64, value_size: u64) -> u64 {
    RECORD_BASE_FEE + RECORD_BYTE_FEE * (key_size + value_size)
}

/// Rent for one voter record: `a_` prefix + identity as key, 2-byte value.
pub fn voter_record_rent() -> u64 {
    single_record_fee(VOTER_RECORD_KEY_SIZE as u64, VoterRecord::INIT_SPACE as u64)
}

/// Rent for the global schema the ballot holds from creation onwards.
pub fn global_schema_rent() -> u64 {
    schema_rent(GLOBAL_SCHEMA_BYTES, GLOBAL_SCHEMA_UINTS)
}

/// Rent an account pays to opt in to local state.
pub fn local_schema_rent() -> u64 {
    schema_rent(LOCAL_SCHEMA_BYTES, LOCAL_SCHEMA_UINTS)
}

/// What a voter gets back after releasing their own record.
pub fn release_refund() -> u64 {
    voter_record_rent() - MIN_TXN_FEE
}
