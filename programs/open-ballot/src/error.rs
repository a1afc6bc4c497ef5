use anchor_lang::prelude::*;

/// Every reason a ballot operation can be rejected.
/// A rejected operation leaves the ballot untouched.
#[error_code]
pub enum BallotError {
    // Access Errors
    #[msg("Only the ballot creator can perform this action")]
    Unauthorized,

    #[msg("The creator's own record can only be settled at termination")]
    CreatorRecordProtected,

    // Payment Errors
    #[msg("Payment sender does not match the expected payer")]
    InvalidPayer,

    #[msg("Payment receiver must be the ballot address")]
    InvalidRecipient,

    #[msg("Payment amount is below the voter record rent")]
    InsufficientPayment,

    #[msg("Balance is below the minimum balance plus storage rent")]
    BalanceInsufficient,

    // Storage Errors
    #[msg("A voter record already exists for this account")]
    DuplicateAllocation,

    #[msg("No voter record exists for this account")]
    NotAllocated,

    #[msg("Purge batch must hold between 1 and 8 accounts")]
    InvalidPurgeBatch,

    #[msg("Operation is not available in this storage mode")]
    StorageModeMismatch,

    // Voting Errors
    #[msg("Account already submitted a vote")]
    AlreadyVoted,

    #[msg("Invalid choice, can only select choices 1, 2, 3")]
    InvalidChoice,

    #[msg("Voting period has not started yet")]
    VotingNotStarted,

    #[msg("Voting period is over")]
    VotingClosed,

    #[msg("Voting period is still in progress")]
    VotingInProgress,

    // Poll Setup Errors
    #[msg("Poll can only be set up once")]
    AlreadyFinalized,

    #[msg("Poll has not been set up yet")]
    PollNotConfigured,

    #[msg("Poll title can not exceed 118 bytes")]
    TitleTooLong,

    #[msg("Poll choice can not exceed 116 bytes")]
    ChoiceTooLong,

    #[msg("Voting period must start before it ends and last between 3 and 14 days")]
    InvalidPollWindow,

    // Lifecycle Errors
    #[msg("Ballot was not deployed as deletable")]
    NotDeletable,

    #[msg("Ballot has been terminated")]
    BallotTerminated,

    // Math Errors
    #[msg("Mathematical overflow in calculations")]
    MathOverflow,
}

impl BallotError {
    /// Get human-readable error category
    pub fn category(&self) -> &'static str {
        match self {
            BallotError::Unauthorized | BallotError::CreatorRecordProtected => "Access Control",

            BallotError::InvalidPayer
            | BallotError::InvalidRecipient
            | BallotError::InsufficientPayment
            | BallotError::BalanceInsufficient => "Payment",

            BallotError::DuplicateAllocation
            | BallotError::NotAllocated
            | BallotError::InvalidPurgeBatch
            | BallotError::StorageModeMismatch => "Record Storage",

            BallotError::AlreadyVoted
            | BallotError::InvalidChoice
            | BallotError::VotingNotStarted
            | BallotError::VotingClosed
            | BallotError::VotingInProgress => "Voting",

            BallotError::AlreadyFinalized
            | BallotError::PollNotConfigured
            | BallotError::TitleTooLong
            | BallotError::ChoiceTooLong
            | BallotError::InvalidPollWindow => "Poll Setup",

            BallotError::NotDeletable | BallotError::BallotTerminated => "Lifecycle",

            BallotError::MathOverflow => "Mathematical Operations",
        }
    }
}

/// Log a rejection with its category and context, then return it
pub fn reject<T>(error: BallotError, context: &str) -> Result<T> {
    msg!("Rejected [{}] {} in context: {}", error.category(), error, context);
    Err(error.into())
}

/// Helper function to safely add two u64 values
pub fn safe_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(BallotError::MathOverflow.into())
}

/// Helper function to safely subtract two u64 values
pub fn safe_sub_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(BallotError::MathOverflow.into())
}

/// Helper function to safely multiply two u64 values
pub fn safe_mul_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(BallotError::MathOverflow.into())
}
