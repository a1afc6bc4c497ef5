// Storage keys

/// Key prefix for voter records: ["a_", voter.key()]
/// One record per voter per ballot instance
pub const VOTER_RECORD_PREFIX: &[u8] = b"a_";

/// Size of an account identity in bytes
pub const IDENTITY_SIZE: usize = 32;

/// Full key size of a voter record (prefix + identity)
pub const VOTER_RECORD_KEY_SIZE: usize = 2 + IDENTITY_SIZE;

// Ledger Constants

/// Minimum balance every account must hold, in base units
pub const MIN_BALANCE: u64 = 100_000;

/// Fee withheld from every outbound settlement transfer
pub const MIN_TXN_FEE: u64 = 1_000;

// Schema Rent Constants

/// Flat schema fee charged once per contract
pub const SCHEMA_BASE_FEE: u64 = 100_000;

/// Fee per variable-size (byte slice) key-value pair: 25_000 + 25_000
pub const SCHEMA_BYTES_FEE: u64 = 50_000;

/// Fee per fixed-size (integer) key-value pair: 25_000 + 3_500
pub const SCHEMA_UINT_FEE: u64 = 28_500;

/// Global schema shape: title + three choices as byte slices,
/// start, end, finalized, three choice totals, total votes and purge count as integers
pub const GLOBAL_SCHEMA_BYTES: u64 = 4;
pub const GLOBAL_SCHEMA_UINTS: u64 = 8;

/// Local schema shape used by the local-state storage mode (vote status + vote choice)
pub const LOCAL_SCHEMA_BYTES: u64 = 0;
pub const LOCAL_SCHEMA_UINTS: u64 = 2;

// Record Rent Constants

/// Flat fee for a single keyed record
pub const RECORD_BASE_FEE: u64 = 2_500;

/// Fee per byte of record key + value
pub const RECORD_BYTE_FEE: u64 = 400;

// Poll Limits

/// Maximum poll title size in bytes
pub const MAX_TITLE_LEN: usize = 118;

/// Maximum choice label size in bytes
pub const MAX_CHOICE_LEN: usize = 116;

/// Minimum voting period (3 days in seconds)
pub const MIN_VOTING_PERIOD: u64 = 3 * 24 * 60 * 60; // 259,200 seconds

/// Maximum voting period (14 days in seconds)
pub const MAX_VOTING_PERIOD: u64 = 14 * 24 * 60 * 60; // 1,209,600 seconds

/// Maximum number of records a single purge may delete
pub const MAX_PURGE_BATCH: usize = 8;

/// Check that a title fits its storage slot
pub fn is_valid_title(title: &[u8]) -> bool {
    title.len() <= MAX_TITLE_LEN
}

/// Check that a choice label fits its storage slot
pub fn is_valid_choice_label(label: &[u8]) -> bool {
    label.len() <= MAX_CHOICE_LEN
}

/// Check a voting window: start strictly before end, length between 3 and 14 days
pub fn is_valid_voting_window(start_unix: u64, end_unix: u64) -> bool {
    if start_unix >= end_unix {
        return false;
    }
    let period = end_unix - start_unix;
    period >= MIN_VOTING_PERIOD && period <= MAX_VOTING_PERIOD
}

/// Check that a purge batch is neither empty nor oversized
pub fn is_valid_purge_batch(len: usize) -> bool {
    len > 0 && len <= MAX_PURGE_BATCH
}
