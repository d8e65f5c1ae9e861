/// Address normalizer - converts a chain-native address representation into
/// the canonical 32-byte big-endian form carried in the swap instruction.
///
/// Per-chain rules:
/// - Solana: base58 public key, already 32 bytes
/// - EVM-style chains: hex address, left zero-padded to 32 bytes
/// - Aptos family: SHA3-256 hash of the textual `addr::module::type` id
///
/// Deterministic for a given (address, chain id); the only side effect is a
/// diagnostic log on the unsupported-chain branch.

use once_cell::sync::Lazy;
use regex::Regex;
use sha3::{Digest, Sha3_256};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::chains::{CHAIN_ID_APTOS, CHAIN_ID_SOLANA, EVM_CHAIN_IDS};
use crate::errors::SwapError;
use crate::logger::{log, LogTag};

/// Aptos coin type id: optional 0x, hex account, module and type identifiers
static APTOS_TYPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]+::\w+::\w+$").expect("valid pattern"));

/// Check whether a string is a syntactically valid Aptos coin type id
pub fn is_valid_aptos_type(address: &str) -> bool {
    APTOS_TYPE_PATTERN.is_match(address)
}

/// Normalize a chain-native address into its canonical 32-byte form
pub fn normalize_address(address: &str, chain_id: u16) -> Result<[u8; 32], SwapError> {
    if chain_id == CHAIN_ID_SOLANA {
        let pubkey = Pubkey::from_str(address).map_err(|e| {
            SwapError::InvalidAddress(format!("invalid solana address {}: {}", address, e))
        })?;
        return Ok(pubkey.to_bytes());
    }

    if EVM_CHAIN_IDS.contains(&chain_id) {
        let stripped = address.strip_prefix("0x").unwrap_or(address);
        let raw = hex::decode(stripped).map_err(|e| {
            SwapError::InvalidAddress(format!("invalid hex address {}: {}", address, e))
        })?;
        if raw.len() > 32 {
            return Err(SwapError::InvalidAddress(format!(
                "address {} is {} bytes, exceeds 32",
                address,
                raw.len()
            )));
        }
        let mut padded = [0u8; 32];
        padded[32 - raw.len()..].copy_from_slice(&raw);
        return Ok(padded);
    }

    if chain_id == CHAIN_ID_APTOS {
        if !is_valid_aptos_type(address) {
            return Err(SwapError::InvalidAddress(format!(
                "invalid aptos coin type: {}",
                address
            )));
        }
        let digest = Sha3_256::digest(address.as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        return Ok(out);
    }

    log(
        LogTag::Address,
        "UNSUPPORTED_CHAIN",
        &format!("chain id {} for address {}", chain_id, address),
    );
    Err(SwapError::UnsupportedChain(format!(
        "no address encoding for chain id {}",
        chain_id
    )))
}
