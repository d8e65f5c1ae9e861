/// Chain registry - symbolic chain names, canonical chain ids and per-chain
/// decimal conventions. The mapping is a fixed bijection over the supported
/// set; an unknown name yields None, never a fallback id.

/// Canonical chain id of Solana
pub const CHAIN_ID_SOLANA: u16 = 1;

/// Chain ids whose addresses normalize by hex decoding + left zero padding
pub const EVM_CHAIN_IDS: [u16; 5] = [2, 4, 5, 6, 23];

/// Canonical chain id of the Aptos family (hash-encoded addresses)
pub const CHAIN_ID_APTOS: u16 = 22;

/// Supported chains: (name, canonical chain id)
const CHAINS: [(&str, u16); 7] = [
    ("solana", 1),
    ("ethereum", 2),
    ("bsc", 4),
    ("polygon", 5),
    ("avalanche", 6),
    ("aptos", 22),
    ("arbitrum", 23),
];

/// Native EVM network ids mapped to canonical chain ids
const EVM_NETWORK_IDS: [(u64, u16); 5] = [
    (1, 2),      // Ethereum mainnet
    (56, 4),     // BNB Smart Chain
    (137, 5),    // Polygon
    (43114, 6),  // Avalanche C-Chain
    (42161, 23), // Arbitrum One
];

/// Resolve a symbolic chain name to its canonical chain id
pub fn chain_id_by_name(name: &str) -> Option<u16> {
    CHAINS.iter().find(|(n, _)| *n == name).map(|(_, id)| *id)
}

/// Resolve a native EVM network id (eth_chainId) to its canonical chain id
pub fn chain_id_by_evm_id(evm_chain_id: u64) -> Option<u16> {
    EVM_NETWORK_IDS
        .iter()
        .find(|(n, _)| *n == evm_chain_id)
        .map(|(_, id)| *id)
}

/// Decimal count of a chain's native gas asset in its own ledger
pub fn native_asset_decimals(chain: &str) -> u8 {
    if chain == "solana" {
        9
    } else {
        18
    }
}

/// Decimal count used when a foreign chain's gas asset is expressed inside
/// Solana's base-unit convention. Solana's ledger keeps 9-decimal accounting
/// for everything it custodies, foreign gas assets are capped at 8.
pub fn gas_decimals_on_solana(chain: &str) -> u8 {
    if chain == "solana" {
        9
    } else {
        8
    }
}
