//! Randomness attestation for the dice game.

use crate::error::DiceError;

/// Verifies an oracle signature over a bet message and returns the
/// 32-byte digest the roll is derived from.
///
/// The dice module never inspects signatures itself; the host supplies
/// an implementation backed by whatever verifiable-randomness oracle it
/// trusts. Determinism is required: the same `(message, signature)`
/// pair must always yield the same digest.
pub trait BetAttestor {
    /// Verifies `signature` over `message` and returns the digest.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::AttestationRejected`] when the signature
    /// does not verify.
    fn attest(&self, message: &[u8], signature: &[u8]) -> Result<[u8; 32], DiceError>;
}
