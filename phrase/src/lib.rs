//! BIP39 recovery phrase validation.
//!
//! A well-formed phrase encodes entropy plus a checksum: each word is an
//! 11-bit position on the English wordlist, the first `ENT` bits are
//! entropy, and the remaining `ENT/32` bits must equal the leading bits of
//! `SHA-256(entropy)`. Validation reverses that construction:
//!
//! 1. Word count must be 12, 15, 18, 21, or 24.
//! 2. Every word must be on the wordlist.
//! 3. The carried checksum bits must match the recomputed digest.
//!
//! Word splitting is on Unicode whitespace, so repeated separators do not
//! invalidate a phrase by themselves. Scratch buffers holding word
//! positions or reconstructed entropy are wiped before returning.
//!
//! Reference: <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki>

mod wordlist;

use reclaim_types::PhraseValidator;
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// Word counts a well-formed phrase may have.
///
/// Each count pairs with an entropy size: 12 words carry 128 bits, and
/// every 3 further words add 32 bits, up to 256 bits at 24 words.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

const MAX_WORDS: usize = 24;
/// 24 words at 11 bits each is 264 bits, which packs into 33 bytes.
const MAX_PACKED_BYTES: usize = 33;

/// Why a phrase failed validation.
///
/// Variants never carry phrase text. [`UnknownWord`] reports a position
/// rather than the word itself, because the word may be a misspelled part
/// of a real secret.
///
/// [`UnknownWord`]: PhraseCheckError::UnknownWord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhraseCheckError {
    #[error("phrase must have 12, 15, 18, 21, or 24 words (got {0})")]
    WordCount(usize),
    /// `position` is 1-based.
    #[error("word {position} is not on the wordlist")]
    UnknownWord { position: usize },
    #[error("checksum mismatch")]
    Checksum,
}

/// Check a phrase against the wordlist and its checksum.
pub fn check_phrase(phrase: &str) -> Result<(), PhraseCheckError> {
    let count = phrase.split_whitespace().count();
    if !VALID_WORD_COUNTS.contains(&count) {
        return Err(PhraseCheckError::WordCount(count));
    }

    let mut positions = [0u16; MAX_WORDS];
    let result = match resolve_positions(phrase, &mut positions) {
        Ok(()) => verify_checksum(&positions[..count]),
        Err(err) => Err(err),
    };
    positions.zeroize();
    result
}

/// Whether `word` appears on the wordlist.
///
/// Display-only helper for typing feedback. Acceptance always goes through
/// [`check_phrase`]; this function must never gate a submission.
#[must_use]
pub fn known_word(word: &str) -> bool {
    wordlist::word_index(word).is_some()
}

/// Wordlist-and-checksum implementation of [`PhraseValidator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Bip39Validator;

impl PhraseValidator for Bip39Validator {
    fn is_valid(&self, phrase: &str) -> bool {
        check_phrase(phrase).is_ok()
    }
}

/// Resolve each word to its wordlist position.
///
/// The caller has already bounded the word count, so indexing into
/// `positions` cannot overrun.
fn resolve_positions(
    phrase: &str,
    positions: &mut [u16; MAX_WORDS],
) -> Result<(), PhraseCheckError> {
    for (index, word) in phrase.split_whitespace().enumerate() {
        match wordlist::word_index(word) {
            Some(value) => positions[index] = value,
            None => {
                return Err(PhraseCheckError::UnknownWord {
                    position: index + 1,
                });
            }
        }
    }
    Ok(())
}

/// Recompute the checksum from the packed positions and compare.
fn verify_checksum(positions: &[u16]) -> Result<(), PhraseCheckError> {
    let checksum_bits = positions.len() / 3;
    let entropy_bits = positions.len() * 11 - checksum_bits;
    // Entropy ends on a byte boundary for every valid count.
    let entropy_bytes = entropy_bits / 8;

    // Pack the 11-bit positions MSB-first.
    let mut packed = [0u8; MAX_PACKED_BYTES];
    let mut bit = 0usize;
    for &position in positions {
        for shift in (0..11).rev() {
            if (position >> shift) & 1 == 1 {
                packed[bit / 8] |= 1 << (7 - (bit % 8));
            }
            bit += 1;
        }
    }

    let digest = Sha256::digest(&packed[..entropy_bytes]);
    let mask = 0xFFu8 << (8 - checksum_bits);
    let carried = packed[entropy_bytes] & mask;
    let expected = digest[0] & mask;

    packed.zeroize();

    if carried == expected {
        Ok(())
    } else {
        Err(PhraseCheckError::Checksum)
    }
}
