use anchor_lang::prelude::*;

use crate::{
    state::{Ballot, Choice},
    store::VoterRecordStore,
};

/// Cast the caller's single vote
pub struct SubmitVote<'a> {
    pub voter: Pubkey,
    pub ballot: &'a mut Ballot,
    pub records: &'a mut VoterRecordStore,
}

impl SubmitVote<'_> {
    pub fn submit_vote(&mut self, choice: u8, now: u64) -> Result<()> {
        self.ballot.ensure_active()?;
        self.records.ensure_can_vote(&self.voter)?;
        let choice = Choice::from_index(choice)?;
        self.ballot.ensure_voting_open(now)?;

        // count on a copy so a failed write leaves the tally as it was
        let mut tally = self.ballot.tally;
        tally.record(choice)?;
        self.records.vote(&self.voter, choice)?;
        self.ballot.tally = tally;

        msg!(
            "VOTE EVENT: voter={}, choice={}, choice_total={}, total_votes={}",
            self.voter,
            choice.index(),
            tally.total_for(choice),
            tally.total_votes
        );

        Ok(())
    }
}
