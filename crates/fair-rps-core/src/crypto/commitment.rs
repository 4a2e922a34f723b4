//! HMAC commitment to the opponent's move.
//!
//! digest = HMAC-SHA3-256(key = hex(secret_key), message = move)
//!
//! Only the digest is visible until the commitment is opened.

use super::{CryptoError, RandomSource, SecretKey};
use crate::games::{Move, MoveSet};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

type HmacSha3 = Hmac<Sha3_256>;

/// Digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// HMAC-SHA3-256 output
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HmacDigest([u8; DIGEST_LEN]);

impl HmacDigest {
    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl fmt::Debug for HmacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for HmacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for HmacDigest {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| CryptoError::InvalidDigest(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for HmacDigest {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        hex::encode(self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for HmacDigest {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

fn keyed_mac(key: &SecretKey, message: &str) -> Result<HmacSha3, CryptoError> {
    let mut mac = <HmacSha3 as Mac>::new_from_slice(key.to_hex().as_bytes())
        .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
    mac.update(message.as_bytes());
    Ok(mac)
}

/// Compute HMAC-SHA3-256 of `message` under `key`
pub fn compute_hmac(key: &SecretKey, message: &str) -> Result<HmacDigest, CryptoError> {
    let mac = keyed_mac(key, message)?;
    Ok(HmacDigest(mac.finalize().into_bytes().into()))
}

/// Check a revealed key and move against a digest shown earlier
///
/// All inputs are the text forms a player sees on screen.
pub fn verify_reveal(key_hex: &str, chosen_move: &str, digest_hex: &str) -> Result<bool, CryptoError> {
    let key: SecretKey = key_hex.parse()?;
    let digest: HmacDigest = digest_hex.parse()?;
    let mac = keyed_mac(&key, chosen_move)?;
    Ok(mac.verify_slice(digest.as_bytes()).is_ok())
}

/// Sealed commitment to the opponent's move
///
/// The key and move stay private until [`Commitment::open`] consumes it.
pub struct Commitment {
    key: SecretKey,
    chosen_index: usize,
    chosen_move: Move,
    digest: HmacDigest,
}

impl Commitment {
    /// Commit to a random move from `moves`
    ///
    /// The key is drawn before the move is picked.
    pub fn generate(moves: &MoveSet, rng: &mut impl RandomSource) -> Result<Self, CryptoError> {
        let key = SecretKey::generate(rng);
        let chosen_index = rng.pick_index(moves.len());
        let chosen_move = moves[chosen_index].clone();
        let digest = compute_hmac(&key, chosen_move.as_str())?;

        Ok(Self {
            key,
            chosen_index,
            chosen_move,
            digest,
        })
    }

    /// The digest shown before the player chooses
    pub fn digest(&self) -> HmacDigest {
        self.digest
    }

    /// Verify that the given key and move produce this commitment
    pub fn verify(&self, key: &SecretKey, chosen_move: &str) -> bool {
        keyed_mac(key, chosen_move)
            .map(|mac| mac.verify_slice(self.digest.as_bytes()).is_ok())
            .unwrap_or(false)
    }

    /// Index of the sealed move, for resolving without opening
    pub(crate) fn sealed_index(&self) -> usize {
        self.chosen_index
    }

    /// Open the commitment, returning the key, the move index and the move
    pub fn open(self) -> (SecretKey, usize, Move) {
        (self.key, self.chosen_index, self.chosen_move)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}
