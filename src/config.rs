/// Protocol configuration - fixed program identifiers and sentinels
/// Built once at startup and passed by reference into every component;
/// nothing in here is mutable after construction.

use solana_sdk::pubkey::Pubkey;

// =============================================================================
// PROGRAM IDENTIFIERS
// =============================================================================

/// Mayan swap program (mainnet)
pub const MAYAN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("FC4eXxkyrMPTjiYUpp4EAnkmwMbQyZ6NDCh1kfLn6vsf");

/// SPL Token program
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// SPL Associated Token Account program
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

// =============================================================================
// SENTINELS
// =============================================================================

/// Wrapped SOL mint address
pub const WSOL_MINT: Pubkey =
    solana_sdk::pubkey!("So11111111111111111111111111111111111111112");

/// Zero contract address marking a native-asset source in a quote
pub const NATIVE_CONTRACT_SENTINEL: &str = "0x0000000000000000000000000000000000000000";

/// Default mainnet RPC endpoint
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Immutable protocol configuration handed into the swap builder
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    /// The on-chain swap program receiving the encoded instruction
    pub swap_program: Pubkey,
    /// SPL token program holding the custodial token accounts
    pub token_program: Pubkey,
    /// Associated token account program used for derivations
    pub associated_token_program: Pubkey,
}

impl ProtocolConfig {
    /// Mainnet deployment of the protocol
    pub fn mainnet() -> Self {
        Self {
            swap_program: MAYAN_PROGRAM_ID,
            token_program: TOKEN_PROGRAM_ID,
            associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
        }
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
