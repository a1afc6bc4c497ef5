use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::{reject, BallotError},
    state::{Ballot, PollConfig},
};

/// Poll metadata as supplied by the creator
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PollSetup {
    pub title: Vec<u8>,
    pub choice1: Vec<u8>,
    pub choice2: Vec<u8>,
    pub choice3: Vec<u8>,
    pub start_unix: u64,
    pub end_unix: u64,
}

impl PollConfig {
    /// Finalized configuration built from an already validated setup
    pub fn from_setup(setup: PollSetup) -> Self {
        Self {
            title: setup.title,
            choice1: setup.choice1,
            choice2: setup.choice2,
            choice3: setup.choice3,
            start_unix: setup.start_unix,
            end_unix: setup.end_unix,
            finalized: true,
        }
    }
}

/// Check field sizes and the voting window of a poll setup
pub fn validate_poll_setup(setup: &PollSetup) -> Result<()> {
    require!(is_valid_title(&setup.title), BallotError::TitleTooLong);

    for label in [&setup.choice1, &setup.choice2, &setup.choice3] {
        require!(is_valid_choice_label(label), BallotError::ChoiceTooLong);
    }

    if !is_valid_voting_window(setup.start_unix, setup.end_unix) {
        msg!(
            "Invalid voting window: start={}, end={}, length={} seconds",
            setup.start_unix,
            setup.end_unix,
            setup.end_unix.saturating_sub(setup.start_unix)
        );
        return Err(BallotError::InvalidPollWindow.into());
    }

    Ok(())
}

/// One-shot poll setup by the creator
pub struct ConfigurePoll<'a> {
    pub caller: Pubkey,
    pub ballot: &'a mut Ballot,
}

impl ConfigurePoll<'_> {
    pub fn configure_poll(&mut self, setup: PollSetup) -> Result<()> {
        self.ballot.ensure_active()?;
        self.ballot.ensure_creator(&self.caller)?;
        if self.ballot.poll.finalized {
            return reject(BallotError::AlreadyFinalized, "configure_poll");
        }
        validate_poll_setup(&setup)?;

        self.ballot.poll = PollConfig::from_setup(setup);

        let poll = &self.ballot.poll;
        msg!(
            "Poll configured: title_len={}, start={}, end={}, duration_days={}",
            poll.title.len(),
            poll.start_unix,
            poll.end_unix,
            (poll.end_unix - poll.start_unix) / (24 * 60 * 60)
        );

        Ok(())
    }
}
