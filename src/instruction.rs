/// Instruction payload encoder for the on-chain swap program.
///
/// The byte layout below is the wire contract with the receiving program:
/// field order, widths and endianness must never change on one side alone.
/// Any layout revision has to be versioned through the opcode.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program, sysvar,
};

use crate::config::ProtocolConfig;

/// Opcode of the swap instruction
pub const OP_SWAP: u8 = 101;

/// Encoded length: opcode + 2 nonces + 6 u64 fields + u16 chain + 32-byte address
pub const SWAP_INSTRUCTION_LEN: usize = 1 + 1 + 1 + 8 * 6 + 2 + 32;

/// Fields of the swap instruction payload, already converted to base units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapInstructionData {
    pub main_nonce: u8,
    pub state_nonce: u8,
    pub amount: u64,
    pub min_amount_out: u64,
    pub deadline: u64,
    pub fee_swap: u64,
    pub fee_return: u64,
    pub fee_cancel: u64,
    pub destination_chain: u16,
    pub destination_address: [u8; 32],
}

/// Serialize the swap payload into its fixed 85-byte layout
///
/// All multi-byte numeric fields are little-endian; the destination address
/// is carried verbatim (padding was applied by the address normalizer).
pub fn encode_swap_instruction(data: &SwapInstructionData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SWAP_INSTRUCTION_LEN);
    buf.push(OP_SWAP);
    buf.push(data.main_nonce);
    buf.push(data.state_nonce);
    buf.extend_from_slice(&data.amount.to_le_bytes());
    buf.extend_from_slice(&data.min_amount_out.to_le_bytes());
    buf.extend_from_slice(&data.deadline.to_le_bytes());
    buf.extend_from_slice(&data.fee_swap.to_le_bytes());
    buf.extend_from_slice(&data.fee_return.to_le_bytes());
    buf.extend_from_slice(&data.fee_cancel.to_le_bytes());
    buf.extend_from_slice(&data.destination_chain.to_le_bytes());
    buf.extend_from_slice(&data.destination_address);
    debug_assert_eq!(buf.len(), SWAP_INSTRUCTION_LEN);
    buf
}

/// Accounts referenced by the swap instruction, in their wire order
#[derive(Debug, Clone)]
pub struct SwapAccounts {
    pub swapper: Pubkey,
    pub main: Pubkey,
    pub msg1: Pubkey,
    pub msg2: Pubkey,
    pub state: Pubkey,
    pub from_account: Pubkey,
    pub to_account: Pubkey,
    pub from_mint: Pubkey,
    pub to_mint: Pubkey,
}

/// Build the swap instruction with its exact account-meta list
///
/// Flags are part of the contract: the swapper signs but is not written, the
/// state and both token accounts are writable, everything else is read-only.
pub fn swap_instruction(
    config: &ProtocolConfig,
    accounts: &SwapAccounts,
    data: &SwapInstructionData,
) -> Instruction {
    let keys = vec![
        AccountMeta::new_readonly(accounts.swapper, true),
        AccountMeta::new_readonly(accounts.main, false),
        AccountMeta::new_readonly(accounts.msg1, false),
        AccountMeta::new_readonly(accounts.msg2, false),
        AccountMeta::new(accounts.state, false),
        AccountMeta::new(accounts.from_account, false),
        AccountMeta::new(accounts.to_account, false),
        AccountMeta::new_readonly(accounts.from_mint, false),
        AccountMeta::new_readonly(accounts.to_mint, false),
        AccountMeta::new_readonly(sysvar::clock::id(), false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(config.token_program, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Instruction {
        program_id: config.swap_program,
        accounts: keys,
        data: encode_swap_instruction(data),
    }
}
