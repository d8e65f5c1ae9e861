//! Client-side builder for Mayan cross-chain swap transactions on Solana.
//!
//! The crate derives the protocol-owned accounts, normalizes the destination
//! address into its canonical 32-byte form, encodes the fixed-layout swap
//! instruction and assembles the full transaction from conditional
//! sub-instructions, then hands it to an injected signer and broadcasts it.

pub mod address;
pub mod amounts;
pub mod chains;
pub mod config;
pub mod derive;
pub mod errors;
pub mod instruction;
pub mod logger;
pub mod rpc;
pub mod swap;

pub use config::ProtocolConfig;
pub use errors::SwapError;
pub use rpc::{SolanaRpc, SwapRpc};
pub use swap::{build_swap_draft, swap_from_solana, Quote, QuoteToken, TransactionDraft};
