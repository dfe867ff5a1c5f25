//! Roll-under dice bets settled by an attested randomness oracle.
//!
//! A player places a bet naming a target in `[2, 96]`; the house later
//! resolves it by presenting an oracle signature over the bet's byte
//! layout. The verified digest is folded into a roll in `[1, 100]`, and
//! the player wins when the roll lands at or under the target. If the
//! house never resolves, the player reclaims the stake once
//! [`TIMEOUT_SLOTS`] have elapsed since placement.
//!
//! Like the pool engines, this module only does the accounting; paying
//! out or refunding the stake goes through the host's
//! [`SettlementAdapter`](crate::traits::SettlementAdapter).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AccountId, Amount};
use crate::error::DiceError;
use crate::traits::BetAttestor;

/// Slots a bet must age before the player can claim a refund.
pub const TIMEOUT_SLOTS: u64 = 1_000;

/// House edge retained on winning payouts, in basis points.
pub const HOUSE_EDGE_BPS: u128 = 150;

/// Smallest playable roll-under target. A target of 1 would divide the
/// payout by zero.
pub const MIN_ROLL_TARGET: u8 = 2;

/// Largest playable roll-under target, keeping the house a margin even
/// at the top of the range.
pub const MAX_ROLL_TARGET: u8 = 96;

/// Lifecycle of a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetState {
    /// Staked and waiting for the oracle.
    Placed,
    /// Resolved by an attested roll. `payout` is zero on a loss.
    Resolved {
        /// The derived roll in `[1, 100]`.
        roll: u8,
        /// Amount owed to the player.
        payout: Amount,
    },
    /// Stake returned after the resolution window lapsed.
    Refunded,
}

/// A single roll-under bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    seed: u128,
    player: AccountId,
    roll_under: u8,
    amount: Amount,
    placed_slot: u64,
    state: BetState,
}

impl Bet {
    /// Places a bet.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidRollTarget`] for targets outside
    /// `[2, 96]` and [`DiceError::InvalidBetAmount`] for a zero stake.
    pub fn place(
        seed: u128,
        player: AccountId,
        roll_under: u8,
        amount: Amount,
        current_slot: u64,
    ) -> Result<Self, DiceError> {
        if !(MIN_ROLL_TARGET..=MAX_ROLL_TARGET).contains(&roll_under) {
            return Err(DiceError::InvalidRollTarget(
                "target must be between 2 and 96",
            ));
        }
        if amount.is_zero() {
            return Err(DiceError::InvalidBetAmount("stake must be non-zero"));
        }
        debug!(seed, %player, roll_under, %amount, "bet placed");
        Ok(Self {
            seed,
            player,
            roll_under,
            amount,
            placed_slot: current_slot,
            state: BetState::Placed,
        })
    }

    /// Returns the creator-chosen seed.
    #[must_use]
    pub const fn seed(&self) -> u128 {
        self.seed
    }

    /// Returns the betting player.
    #[must_use]
    pub const fn player(&self) -> AccountId {
        self.player
    }

    /// Returns the roll-under target.
    #[must_use]
    pub const fn roll_under(&self) -> u8 {
        self.roll_under
    }

    /// Returns the staked amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the slot the bet was placed at.
    #[must_use]
    pub const fn placed_slot(&self) -> u64 {
        self.placed_slot
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> BetState {
        self.state
    }

    /// Canonical byte layout the oracle signs: seed, player, target,
    /// amount, placement slot, all little-endian.
    #[must_use]
    pub fn message(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + 32 + 1 + 16 + 8);
        out.extend_from_slice(&self.seed.to_le_bytes());
        out.extend_from_slice(self.player.as_bytes());
        out.push(self.roll_under);
        out.extend_from_slice(&self.amount.get().to_le_bytes());
        out.extend_from_slice(&self.placed_slot.to_le_bytes());
        out
    }

    /// Resolves the bet against an attested signature.
    ///
    /// The digest returned by the attestor is split into two
    /// little-endian halves whose wrapping sum, reduced mod 100 plus
    /// one, gives the roll. A winning bet pays
    /// `amount * (10_000 - 150) / ((target - 1) * 100)`.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidBetState`] unless the bet is
    /// `Placed`, propagates attestation failures, and returns
    /// [`DiceError::ArithmeticOverflow`] if the payout product exceeds
    /// `u128`.
    pub fn resolve<A: BetAttestor>(
        &mut self,
        attestor: &A,
        signature: &[u8],
    ) -> Result<BetState, DiceError> {
        if self.state != BetState::Placed {
            return Err(DiceError::InvalidBetState("bet is not awaiting resolution"));
        }
        let digest = attestor.attest(&self.message(), signature)?;
        let roll = roll_from_digest(&digest);

        let payout = if roll <= self.roll_under {
            let gross = self
                .amount
                .get()
                .checked_mul(10_000 - HOUSE_EDGE_BPS)
                .ok_or(DiceError::ArithmeticOverflow("payout product"))?;
            // Target is >= 2, so the divisor is never zero.
            Amount::new(gross / ((u128::from(self.roll_under) - 1) * 100))
        } else {
            Amount::ZERO
        };

        self.state = BetState::Resolved { roll, payout };
        debug!(seed = self.seed, roll, %payout, "bet resolved");
        Ok(self.state)
    }

    /// Refunds the stake after the resolution window lapsed.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidBetState`] unless the bet is
    /// `Placed`, or [`DiceError::TimeoutNotReached`] if fewer than
    /// [`TIMEOUT_SLOTS`] have passed since placement.
    pub fn refund(&mut self, current_slot: u64) -> Result<Amount, DiceError> {
        if self.state != BetState::Placed {
            return Err(DiceError::InvalidBetState("bet is not awaiting resolution"));
        }
        if current_slot.saturating_sub(self.placed_slot) < TIMEOUT_SLOTS {
            return Err(DiceError::TimeoutNotReached);
        }
        self.state = BetState::Refunded;
        debug!(seed = self.seed, amount = %self.amount, "bet refunded");
        Ok(self.amount)
    }
}

/// Folds a digest into a roll in `[1, 100]`.
fn roll_from_digest(digest: &[u8; 32]) -> u8 {
    let mut lower = [0u8; 16];
    let mut upper = [0u8; 16];
    lower.copy_from_slice(&digest[0..16]);
    upper.copy_from_slice(&digest[16..32]);

    let lower = u128::from_le_bytes(lower);
    let upper = u128::from_le_bytes(upper);

    // wrapping_rem 100 leaves [0, 99]; +1 shifts to [1, 100].
    (lower.wrapping_add(upper).wrapping_rem(100) as u8) + 1
}
