//! Quadratic voting: one token balance, square-root many credits.
//!
//! A voter's weight on a proposal is `isqrt(balance)`, so influence
//! grows with the square root of holdings rather than linearly. The
//! tally is integer-only; see [`crate::math::isqrt`] for the rounding
//! contract (floor).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AccountId, Amount};
use crate::error::VotingError;
use crate::math::isqrt;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteChoice {
    /// Against the proposal.
    No,
    /// For the proposal.
    Yes,
}

/// Record of one cast vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    voter: AccountId,
    choice: VoteChoice,
    credits: u128,
}

impl VoteReceipt {
    /// Returns the voting account.
    #[must_use]
    pub const fn voter(&self) -> AccountId {
        self.voter
    }

    /// Returns the chosen direction.
    #[must_use]
    pub const fn choice(&self) -> VoteChoice {
        self.choice
    }

    /// Returns the credits this vote contributed.
    #[must_use]
    pub const fn credits(&self) -> u128 {
        self.credits
    }
}

/// A proposal and its running quadratic tally.
///
/// Each voter may cast at most one vote; the proposal keeps the receipt
/// so a second attempt is rejected rather than double-counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    metadata: String,
    yes_credits: u128,
    no_credits: u128,
    receipts: HashMap<AccountId, VoteReceipt>,
}

impl Proposal {
    /// Creates a proposal with empty tallies.
    #[must_use]
    pub fn new(metadata: impl Into<String>) -> Self {
        Self {
            metadata: metadata.into(),
            yes_credits: 0,
            no_credits: 0,
            receipts: HashMap::new(),
        }
    }

    /// Returns the proposal description.
    #[must_use]
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Total credits cast in favour.
    #[must_use]
    pub const fn yes_credits(&self) -> u128 {
        self.yes_credits
    }

    /// Total credits cast against.
    #[must_use]
    pub const fn no_credits(&self) -> u128 {
        self.no_credits
    }

    /// Whether yes currently outweighs no.
    #[must_use]
    pub const fn is_passing(&self) -> bool {
        self.yes_credits > self.no_credits
    }

    /// Casts `voter`'s vote weighted by the square root of `balance`.
    ///
    /// # Errors
    ///
    /// Returns [`VotingError::InsufficientBalance`] when the balance
    /// roots to zero credits, [`VotingError::AlreadyVoted`] on a second
    /// vote from the same account, and
    /// [`VotingError::ArithmeticOverflow`] if the tally counter would
    /// wrap.
    pub fn cast_vote(
        &mut self,
        voter: AccountId,
        choice: VoteChoice,
        balance: Amount,
    ) -> Result<VoteReceipt, VotingError> {
        let credits = isqrt(balance.get());
        if credits == 0 {
            return Err(VotingError::InsufficientBalance(
                "balance yields zero voting credits",
            ));
        }
        if self.receipts.contains_key(&voter) {
            return Err(VotingError::AlreadyVoted);
        }

        let tally = match choice {
            VoteChoice::Yes => &mut self.yes_credits,
            VoteChoice::No => &mut self.no_credits,
        };
        *tally = tally
            .checked_add(credits)
            .ok_or(VotingError::ArithmeticOverflow("tally counter"))?;

        let receipt = VoteReceipt {
            voter,
            choice,
            credits,
        };
        self.receipts.insert(voter, receipt);
        debug!(%voter, ?choice, credits, "vote cast");
        Ok(receipt)
    }

    /// Looks up the receipt a voter holds, if any.
    #[must_use]
    pub fn receipt(&self, voter: &AccountId) -> Option<&VoteReceipt> {
        self.receipts.get(voter)
    }

    /// Number of votes cast.
    #[must_use]
    pub fn vote_count(&self) -> usize {
        self.receipts.len()
    }
}
