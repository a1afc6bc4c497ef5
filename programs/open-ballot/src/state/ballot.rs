use anchor_lang::prelude::*;

use crate::{
    config::{DeployParams, StorageMode},
    constants::MIN_TXN_FEE,
    error::{safe_add_u64, safe_mul_u64, safe_sub_u64, BallotError},
    fees::voter_record_rent,
    state::Choice,
};

/// Poll metadata, set exactly once by the creator
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq, Default)]
pub struct PollConfig {
    #[max_len(118)]
    pub title: Vec<u8>,

    #[max_len(116)]
    pub choice1: Vec<u8>,

    #[max_len(116)]
    pub choice2: Vec<u8>,

    #[max_len(116)]
    pub choice3: Vec<u8>,

    /// First second votes are accepted (Unix timestamp)
    pub start_unix: u64,

    /// Last second votes are accepted (Unix timestamp)
    pub end_unix: u64,

    /// Once set, the fields above never change again
    pub finalized: bool,
}

impl PollConfig {
    /// Label of one of the three choices
    pub fn label(&self, choice: Choice) -> Option<&[u8]> {
        match choice {
            Choice::None => None,
            Choice::Choice1 => Some(&self.choice1),
            Choice::Choice2 => Some(&self.choice2),
            Choice::Choice3 => Some(&self.choice3),
        }
    }
}

/// Running vote counts
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TallyState {
    pub choice1_total: u64,
    pub choice2_total: u64,
    pub choice3_total: u64,
    pub total_votes: u64,
}

impl TallyState {
    /// Count one vote for `choice`
    pub fn record(&mut self, choice: Choice) -> Result<()> {
        // compute both counters before writing either
        let total_votes = safe_add_u64(self.total_votes, 1)?;
        match choice {
            Choice::Choice1 => self.choice1_total = safe_add_u64(self.choice1_total, 1)?,
            Choice::Choice2 => self.choice2_total = safe_add_u64(self.choice2_total, 1)?,
            Choice::Choice3 => self.choice3_total = safe_add_u64(self.choice3_total, 1)?,
            Choice::None => return Err(BallotError::InvalidChoice.into()),
        }
        self.total_votes = total_votes;

        Ok(())
    }

    pub fn total_for(&self, choice: Choice) -> u64 {
        match choice {
            Choice::None => 0,
            Choice::Choice1 => self.choice1_total,
            Choice::Choice2 => self.choice2_total,
            Choice::Choice3 => self.choice3_total,
        }
    }

    /// The choice with strictly the most votes, if any
    pub fn leading(&self) -> Option<Choice> {
        let mut leader = None;
        let mut max_votes = 0;
        let mut tied = false;

        for choice in [Choice::Choice1, Choice::Choice2, Choice::Choice3] {
            let votes = self.total_for(choice);
            if votes > max_votes {
                max_votes = votes;
                leader = Some(choice);
                tied = false;
            } else if votes == max_votes && votes > 0 {
                tied = true;
            }
        }

        if tied {
            None
        } else {
            leader
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.choice1_total
            .checked_add(self.choice2_total)
            .and_then(|sum| sum.checked_add(self.choice3_total))
            == Some(self.total_votes)
    }
}

/// Where the poll is relative to its voting window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollPhase {
    Unconfigured,
    Upcoming,
    Open,
    Closed,
}

/// Snapshot of the poll outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollResults {
    pub tally: TallyState,
    pub leading: Option<Choice>,
}

/// Global ballot state, one per deployed instance
#[account]
#[derive(InitSpace, Debug)]
pub struct Ballot {
    /// The deploying account; the only one allowed to administer the ballot
    pub creator: Pubkey,

    /// Deploy-time version stamp (Unix timestamp)
    pub version_unix: u64,

    /// Whether the creator may terminate the ballot
    pub deletable: bool,

    /// Whether voting and allocation are confined to the poll window
    pub enforce_voting_window: bool,

    /// Box records or local-state slots
    pub storage_mode: StorageMode,

    pub poll: PollConfig,

    pub tally: TallyState,

    /// Records deleted by the creator whose rent is reclaimed at termination
    pub total_purged: u64,

    /// Accounts currently opted in (local-state mode only)
    pub total_opted_in: u64,

    pub terminated: bool,
}

impl Ballot {
    pub fn new(creator: Pubkey, params: &DeployParams) -> Self {
        Self {
            creator,
            version_unix: params.version_unix,
            deletable: params.deletable,
            enforce_voting_window: params.enforce_voting_window,
            storage_mode: params.storage_mode,
            poll: PollConfig::default(),
            tally: TallyState::default(),
            total_purged: 0,
            total_opted_in: 0,
            terminated: false,
        }
    }

    pub fn ensure_creator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, BallotError::Unauthorized);
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(!self.terminated, BallotError::BallotTerminated);
        Ok(())
    }

    pub fn ensure_storage_mode(&self, mode: StorageMode) -> Result<()> {
        require!(self.storage_mode == mode, BallotError::StorageModeMismatch);
        Ok(())
    }

    pub fn phase(&self, now: u64) -> PollPhase {
        if !self.poll.finalized {
            PollPhase::Unconfigured
        } else if now < self.poll.start_unix {
            PollPhase::Upcoming
        } else if now <= self.poll.end_unix {
            PollPhase::Open
        } else {
            PollPhase::Closed
        }
    }

    /// Reject unless `now` lies inside the poll window, when the window is enforced
    pub fn ensure_voting_open(&self, now: u64) -> Result<()> {
        if !self.enforce_voting_window {
            return Ok(());
        }

        match self.phase(now) {
            PollPhase::Open => Ok(()),
            PollPhase::Unconfigured => Err(BallotError::PollNotConfigured.into()),
            PollPhase::Upcoming => {
                msg!(
                    "Voting opens in {} seconds",
                    self.poll.start_unix.saturating_sub(now)
                );
                Err(BallotError::VotingNotStarted.into())
            }
            PollPhase::Closed => Err(BallotError::VotingClosed.into()),
        }
    }

    /// Reject until the poll window has passed, when the window is enforced
    pub fn ensure_voting_over(&self, now: u64) -> Result<()> {
        if !self.enforce_voting_window {
            return Ok(());
        }

        match self.phase(now) {
            PollPhase::Closed => Ok(()),
            PollPhase::Unconfigured => Err(BallotError::PollNotConfigured.into()),
            PollPhase::Upcoming | PollPhase::Open => Err(BallotError::VotingInProgress.into()),
        }
    }

    pub fn record_purged(&mut self, count: u64) -> Result<()> {
        self.total_purged = safe_add_u64(self.total_purged, count)?;
        Ok(())
    }

    /// Rent owed back to the creator for purged records, net of the transfer fee
    pub fn purge_refund(&self) -> Result<u64> {
        if self.total_purged == 0 {
            return Ok(0);
        }
        let reclaimed = safe_mul_u64(self.total_purged, voter_record_rent())?;
        safe_sub_u64(reclaimed, MIN_TXN_FEE)
    }

    pub fn results(&self) -> PollResults {
        PollResults {
            tally: self.tally,
            leading: self.tally.leading(),
        }
    }
}
