/// Derived-account resolver - protocol-owned program-derived addresses and
/// associated token accounts.
///
/// Derivations are deterministic given the program id and seed material. The
/// per-swap state account additionally seeds two single-use public keys so
/// every swap attempt lands on a fresh, unguessable state address.

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};

use crate::config::{ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::errors::SwapError;

/// Seed tag of the singleton protocol main account
const MAIN_SEED: &[u8] = b"MAIN";

/// Seed tag of the per-swap state account
const STATE_SEED: &[u8] = b"V2STATE";

/// Derive the singleton protocol main account: (address, nonce)
pub fn derive_main_account(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MAIN_SEED], program_id)
}

/// Derive the per-swap state account from two single-use message keys
pub fn derive_state_account(program_id: &Pubkey, msg1: &Pubkey, msg2: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, msg1.as_ref(), msg2.as_ref()], program_id)
}

/// Derive the associated token account holding `mint` for `owner`
///
/// Protocol-owned token accounts have a program-derived owner with no private
/// key; callers must opt into that explicitly or the derivation fails with
/// `OwnerOffCurve`.
pub fn derive_associated_token_account(
    owner: &Pubkey,
    mint: &Pubkey,
    allow_owner_off_curve: bool,
) -> Result<Pubkey, SwapError> {
    if !allow_owner_off_curve && !owner.is_on_curve() {
        return Err(SwapError::OwnerOffCurve(format!(
            "token account owner {} is off-curve",
            owner
        )));
    }
    let (address, _) = Pubkey::find_program_address(
        &[owner.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    );
    Ok(address)
}

/// Source of the two single-use message keys seeded into the state account
///
/// Generated fresh per swap attempt from a cryptographically sound source and
/// never reused; tests inject fixed keys to pin derived addresses.
pub trait EphemeralMessageSource: Send + Sync {
    fn generate(&self) -> (Pubkey, Pubkey);
}

/// Production source backed by the OS keypair generator
pub struct RandomEphemeralMessages;

impl EphemeralMessageSource for RandomEphemeralMessages {
    fn generate(&self) -> (Pubkey, Pubkey) {
        (Keypair::new().pubkey(), Keypair::new().pubkey())
    }
}
