use anchor_lang::prelude::*;

use crate::error::BallotError;

/// Whether a voter record has been used to vote
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VoteStatus {
    #[default]
    NotVoted,
    Voted,
}

/// One of the three fixed poll choices, or `None` before a vote is cast
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    None,
    Choice1,
    Choice2,
    Choice3,
}

impl Choice {
    /// Map a wire-level choice number (1, 2, 3) to a choice
    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            1 => Ok(Choice::Choice1),
            2 => Ok(Choice::Choice2),
            3 => Ok(Choice::Choice3),
            _ => Err(BallotError::InvalidChoice.into()),
        }
    }

    /// The wire-level choice number, 0 for `None`
    pub fn index(&self) -> u8 {
        match self {
            Choice::None => 0,
            Choice::Choice1 => 1,
            Choice::Choice2 => 2,
            Choice::Choice3 => 3,
        }
    }
}

/// Per-voter storage record, keyed by `["a_", voter.key()]`.
///
/// Fields are private so the only way from `NotVoted`/`None` to
/// `Voted`/`ChoiceN` is [`VoterRecord::cast`], which keeps both in step.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct VoterRecord {
    voted: VoteStatus,
    choice: Choice,
}

impl VoterRecord {
    pub fn voted(&self) -> VoteStatus {
        self.voted
    }

    pub fn choice(&self) -> Choice {
        self.choice
    }

    pub fn has_voted(&self) -> bool {
        self.voted == VoteStatus::Voted
    }

    /// Record a vote; a record accepts exactly one
    pub fn cast(&mut self, choice: Choice) -> Result<()> {
        require!(!self.has_voted(), BallotError::AlreadyVoted);
        require!(choice != Choice::None, BallotError::InvalidChoice);

        self.voted = VoteStatus::Voted;
        self.choice = choice;

        Ok(())
    }

    /// `NotVoted` exactly when no choice is recorded
    pub fn is_consistent(&self) -> bool {
        (self.voted == VoteStatus::NotVoted) == (self.choice == Choice::None)
    }
}
