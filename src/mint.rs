/// Validated Solana mint addresses.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Length in bytes of a decoded Solana public key.
const PUBKEY_LEN: usize = 32;

/// Errors from parsing a mint address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    /// Nothing (or only whitespace) was provided.
    #[error("Mint address is required")]
    Empty,

    /// The input is not a base58-encoded 32-byte public key.
    #[error("Invalid mint address '{input}': {reason}")]
    Invalid {
        /// The rejected input, trimmed.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A base58 token mint address, checked to decode to a 32-byte key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MintAddress(String);

impl MintAddress {
    /// The address as its base58 string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MintAddress {
    type Err = MintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(MintError::Empty);
        }

        let bytes = bs58::decode(input)
            .into_vec()
            .map_err(|e| MintError::Invalid {
                input: input.to_owned(),
                reason: e.to_string(),
            })?;

        if bytes.len() != PUBKEY_LEN {
            return Err(MintError::Invalid {
                input: input.to_owned(),
                reason: format!("decodes to {} bytes, expected {PUBKEY_LEN}", bytes.len()),
            });
        }

        Ok(Self(input.to_owned()))
    }
}

impl fmt::Display for MintAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MintAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn test_parses_known_mint() {
        let mint: MintAddress = USDC.parse().unwrap();
        assert_eq!(mint.as_str(), USDC);
        assert_eq!(mint.to_string(), USDC);
    }

    #[test]
    fn test_trims_whitespace() {
        let mint: MintAddress = format!("  {USDC}\n").parse().unwrap();
        assert_eq!(mint.as_str(), USDC);
    }

    #[test]
    fn test_empty_is_required() {
        assert_eq!("".parse::<MintAddress>(), Err(MintError::Empty));
        assert_eq!("   ".parse::<MintAddress>(), Err(MintError::Empty));
    }

    #[test]
    fn test_rejects_non_base58() {
        // '0' and 'l' are outside the base58 alphabet.
        let err = "0OIl".parse::<MintAddress>().unwrap_err();
        assert!(matches!(err, MintError::Invalid { ref input, .. } if input == "0OIl"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = "abc".parse::<MintAddress>().unwrap_err();
        assert!(err.to_string().contains("expected 32"));
    }
}
