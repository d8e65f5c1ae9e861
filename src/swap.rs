/// Swap transaction assembler.
///
/// Orchestrates the derivations, conditional account-creation and native-asset
/// wrapping steps into one ordered transaction, runs the destination safety
/// check, and hands the sealed draft to the injected signer before broadcast.
/// Any failure before the signing call aborts without soliciting a signature.

use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    system_instruction,
    transaction::Transaction,
};
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::address::normalize_address;
use crate::amounts::to_base_units;
use crate::chains::{chain_id_by_name, CHAIN_ID_SOLANA};
use crate::config::{ProtocolConfig, NATIVE_CONTRACT_SENTINEL};
use crate::derive::{
    derive_associated_token_account, derive_main_account, derive_state_account,
    EphemeralMessageSource, RandomEphemeralMessages,
};
use crate::errors::SwapError;
use crate::instruction::{swap_instruction, SwapAccounts, SwapInstructionData};
use crate::logger::{log, LogTag};
use crate::rpc::SwapRpc;

/// One side of a quoted swap
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteToken {
    /// Solana mint address of the (possibly wrapped) asset
    pub mint: String,
    /// Origin-chain contract address; the zero address marks the native asset
    pub contract: String,
    /// Decimal count of the mint
    pub decimals: u8,
}

/// External quote describing one proposed swap, immutable per build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub from_token: QuoteToken,
    pub to_token: QuoteToken,
    pub from_chain: String,
    pub to_chain: String,
    /// Effective amount in, decimal string in source-asset units
    pub effective_amount_in: String,
    /// Minimum acceptable output, decimal string in destination-asset units
    pub min_amount_out: String,
    /// Relayer fee for performing the swap (source-asset units)
    pub swap_relayer_fee: String,
    /// Relayer fee for redeeming on the destination side (destination-asset units)
    pub redeem_relayer_fee: String,
    /// Relayer fee for refunding on the source side (source-asset units)
    pub refund_relayer_fee: String,
}

impl Quote {
    /// Parse a quote from its JSON wire form (camelCase fields)
    pub fn from_json(data: &str) -> Result<Self, SwapError> {
        let quote: Quote = serde_json::from_str(data)?;
        Ok(quote)
    }
}

/// Append-only ordered list of sub-instructions plus the fee payer,
/// sealed with a recent blockhash into an unsigned transaction
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    fee_payer: Pubkey,
    instructions: Vec<Instruction>,
}

impl TransactionDraft {
    pub fn new(fee_payer: Pubkey) -> Self {
        Self {
            fee_payer,
            instructions: Vec::new(),
        }
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn fee_payer(&self) -> &Pubkey {
        &self.fee_payer
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Seal the draft with a recent blockhash into an unsigned transaction
    pub fn seal(&self, recent_blockhash: Hash) -> Transaction {
        let message = Message::new_with_blockhash(
            &self.instructions,
            Some(&self.fee_payer),
            &recent_blockhash,
        );
        Transaction::new_unsigned(message)
    }
}

/// Build the ordered swap transaction draft.
///
/// Instruction order: conditional source-account creation, conditional
/// custody-account creation, conditional native wrap (transfer + sync),
/// then the swap instruction itself.
pub async fn build_swap_draft(
    config: &ProtocolConfig,
    rpc: &dyn SwapRpc,
    quote: &Quote,
    swapper: &Pubkey,
    destination_address: &str,
    timeout: u64,
    ephemeral: &dyn EphemeralMessageSource,
) -> Result<TransactionDraft, SwapError> {
    // Both chain names must resolve before anything else is derived
    chain_id_by_name(&quote.from_chain).ok_or_else(|| {
        SwapError::UnsupportedChain(format!("unknown source chain: {}", quote.from_chain))
    })?;
    let destination_chain = chain_id_by_name(&quote.to_chain).ok_or_else(|| {
        SwapError::UnsupportedChain(format!("unknown destination chain: {}", quote.to_chain))
    })?;

    let (main, main_nonce) = derive_main_account(&config.swap_program);
    let (msg1, msg2) = ephemeral.generate();
    let (state, state_nonce) = derive_state_account(&config.swap_program, &msg1, &msg2);

    let from_mint = Pubkey::from_str(&quote.from_token.mint).map_err(|e| {
        SwapError::InvalidAddress(format!("invalid source mint {}: {}", quote.from_token.mint, e))
    })?;
    let to_mint = Pubkey::from_str(&quote.to_token.mint).map_err(|e| {
        SwapError::InvalidAddress(format!(
            "invalid destination mint {}: {}",
            quote.to_token.mint, e
        ))
    })?;

    // Swapper's own account must be on-curve; the custody account is owned by
    // the main PDA and holds the same source mint until the swap settles
    let from_account = derive_associated_token_account(swapper, &from_mint, false)?;
    let to_account = derive_associated_token_account(&main, &from_mint, true)?;

    let mut draft = TransactionDraft::new(*swapper);

    // The two existence lookups are independent, issue them together
    let (from_info, to_info) = tokio::try_join!(
        rpc.account_summary(&from_account),
        rpc.account_summary(&to_account)
    )?;

    let needs_account = |info: &Option<crate::rpc::AccountSummary>| {
        info.as_ref().map_or(true, |summary| summary.data_len == 0)
    };
    if needs_account(&from_info) {
        log(
            LogTag::Swap,
            "CREATE_SOURCE_ATA",
            &format!("creating source token account {}", from_account),
        );
        draft.push(create_associated_token_account(
            swapper,
            swapper,
            &from_mint,
            &config.token_program,
        ));
    }
    if needs_account(&to_info) {
        log(
            LogTag::Swap,
            "CREATE_CUSTODY_ATA",
            &format!("creating custody token account {}", to_account),
        );
        draft.push(create_associated_token_account(
            swapper,
            &main,
            &from_mint,
            &config.token_program,
        ));
    }

    // A zero origin contract means the source asset is the chain's native
    // currency: move lamports into the token account and sync its balance
    // before the swap instruction can operate on it
    if quote.from_token.contract == NATIVE_CONTRACT_SENTINEL {
        let lamports = to_base_units(&quote.effective_amount_in, 9)?;
        log(
            LogTag::Swap,
            "WRAP_NATIVE",
            &format!("wrapping {} lamports into {}", lamports, from_account),
        );
        draft.push(system_instruction::transfer(swapper, &from_account, lamports));
        draft.push(
            spl_token::instruction::sync_native(&config.token_program, &from_account).map_err(
                |e| SwapError::TransactionError(format!("sync_native instruction: {}", e)),
            )?,
        );
    }

    let now = rpc.current_time().await?;
    let deadline = now.checked_add(timeout).ok_or_else(|| {
        SwapError::InvalidAmount(format!("deadline overflows u64: {} + {}", now, timeout))
    })?;

    // Destination safety check: a Solana destination must be a controlling
    // owner address. A token account would be corrupted by the receiving
    // program, which expects an owner it can mint and transfer to.
    if destination_chain == CHAIN_ID_SOLANA {
        let destination = Pubkey::from_str(destination_address).map_err(|e| {
            SwapError::InvalidAddress(format!(
                "invalid destination address {}: {}",
                destination_address, e
            ))
        })?;
        if let Some(summary) = rpc.account_summary(&destination).await? {
            if summary.owner == config.token_program {
                return Err(SwapError::InvalidDestinationAddress(format!(
                    "{} is a token account, the destination must be an owner address",
                    destination_address
                )));
            }
        }
    }

    let destination_bytes = normalize_address(destination_address, destination_chain)?;

    let data = SwapInstructionData {
        main_nonce,
        state_nonce,
        amount: to_base_units(&quote.effective_amount_in, quote.from_token.decimals)?,
        min_amount_out: to_base_units(&quote.min_amount_out, quote.to_token.decimals)?,
        deadline,
        fee_swap: to_base_units(&quote.swap_relayer_fee, quote.from_token.decimals)?,
        fee_return: to_base_units(&quote.redeem_relayer_fee, quote.to_token.decimals)?,
        fee_cancel: to_base_units(&quote.refund_relayer_fee, quote.from_token.decimals)?,
        destination_chain,
        destination_address: destination_bytes,
    };
    let accounts = SwapAccounts {
        swapper: *swapper,
        main,
        msg1,
        msg2,
        state,
        from_account,
        to_account,
        from_mint,
        to_mint,
    };
    draft.push(swap_instruction(config, &accounts, &data));

    Ok(draft)
}

/// Build, sign and broadcast one cross-chain swap transaction.
///
/// Returns the broadcaster's transaction signature. Preflight checks are
/// skipped on submission; broadcast failures are surfaced verbatim with no
/// retry.
pub async fn swap_from_solana<S, Fut>(
    config: &ProtocolConfig,
    rpc: &dyn SwapRpc,
    quote: &Quote,
    swapper_address: &str,
    destination_address: &str,
    timeout: u64,
    sign_transaction: S,
) -> Result<String, SwapError>
where
    S: FnOnce(Transaction) -> Fut,
    Fut: Future<Output = Result<Transaction, SwapError>>,
{
    let swapper = Pubkey::from_str(swapper_address).map_err(|e| {
        SwapError::InvalidAddress(format!("invalid swapper address {}: {}", swapper_address, e))
    })?;

    let ephemeral = RandomEphemeralMessages;
    let draft = build_swap_draft(
        config,
        rpc,
        quote,
        &swapper,
        destination_address,
        timeout,
        &ephemeral,
    )
    .await?;

    let recent_blockhash = rpc.latest_blockhash().await?;
    let unsigned = draft.seal(recent_blockhash);
    let signed = sign_transaction(unsigned).await?;

    let signature = rpc.send_transaction(&signed, true).await?;
    log(
        LogTag::Swap,
        "SUBMITTED",
        &format!(
            "{} -> {} swap submitted: {}",
            quote.from_chain, quote.to_chain, signature
        ),
    );
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TOKEN_PROGRAM_ID, WSOL_MINT};
    use crate::instruction::{OP_SWAP, SWAP_INSTRUCTION_LEN};
    use crate::rpc::AccountSummary;
    use async_trait::async_trait;
    use solana_sdk::{signature::Keypair, signer::Signer, system_program};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    const TEST_TIME: u64 = 1_700_000_000;

    /// In-memory query interface: fixed clock, preset accounts, recorded sends
    struct MockRpc {
        accounts: HashMap<Pubkey, AccountSummary>,
        sent: Mutex<Vec<(Transaction, bool)>>,
    }

    impl MockRpc {
        fn empty() -> Self {
            Self {
                accounts: HashMap::new(),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn with_accounts(accounts: Vec<(Pubkey, AccountSummary)>) -> Self {
            Self {
                accounts: accounts.into_iter().collect(),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SwapRpc for MockRpc {
        async fn account_summary(
            &self,
            address: &Pubkey,
        ) -> Result<Option<AccountSummary>, SwapError> {
            Ok(self.accounts.get(address).cloned())
        }

        async fn current_time(&self) -> Result<u64, SwapError> {
            Ok(TEST_TIME)
        }

        async fn latest_blockhash(&self) -> Result<Hash, SwapError> {
            Ok(Hash::new_unique())
        }

        async fn send_transaction(
            &self,
            transaction: &Transaction,
            skip_preflight: bool,
        ) -> Result<String, SwapError> {
            self.sent
                .lock()
                .unwrap()
                .push((transaction.clone(), skip_preflight));
            Ok("MockSignature1111111111111111111111111111111".to_string())
        }
    }

    struct FixedMessages(Pubkey, Pubkey);

    impl EphemeralMessageSource for FixedMessages {
        fn generate(&self) -> (Pubkey, Pubkey) {
            (self.0, self.1)
        }
    }

    fn native_quote() -> Quote {
        Quote {
            from_token: QuoteToken {
                mint: WSOL_MINT.to_string(),
                contract: NATIVE_CONTRACT_SENTINEL.to_string(),
                decimals: 9,
            },
            to_token: QuoteToken {
                mint: Pubkey::new_unique().to_string(),
                contract: "0x1111111254EEB25477B68fb85Ed929f73A960582".to_string(),
                decimals: 6,
            },
            from_chain: "solana".to_string(),
            to_chain: "ethereum".to_string(),
            effective_amount_in: "1.5".to_string(),
            min_amount_out: "2500.123456".to_string(),
            swap_relayer_fee: "0.001".to_string(),
            redeem_relayer_fee: "0.25".to_string(),
            refund_relayer_fee: "0.002".to_string(),
        }
    }

    fn token_quote() -> Quote {
        let mut quote = native_quote();
        quote.from_token.contract =
            "0x2222222254eeb25477b68fb85ed929f73a960582".to_string();
        quote
    }

    fn fixed_ephemeral() -> FixedMessages {
        FixedMessages(
            Keypair::new().pubkey(),
            Keypair::new().pubkey(),
        )
    }

    fn evm_destination() -> &'static str {
        "0x9702230A8Ea53601f5cD2dc00fDBc13d4dF4A8c7"
    }

    #[test]
    fn quote_parses_from_camel_case_json() {
        let data = format!(
            r#"{{
                "fromToken": {{"mint": "{}", "contract": "{}", "decimals": 9}},
                "toToken": {{"mint": "{}", "contract": "0x1111111254EEB25477B68fb85Ed929f73A960582", "decimals": 6}},
                "fromChain": "solana",
                "toChain": "ethereum",
                "effectiveAmountIn": "1.5",
                "minAmountOut": "2500.123456",
                "swapRelayerFee": "0.001",
                "redeemRelayerFee": "0.25",
                "refundRelayerFee": "0.002"
            }}"#,
            WSOL_MINT,
            NATIVE_CONTRACT_SENTINEL,
            Pubkey::new_unique(),
        );

        let quote = Quote::from_json(&data).unwrap();
        assert_eq!(quote.from_chain, "solana");
        assert_eq!(quote.to_chain, "ethereum");
        assert_eq!(quote.from_token.decimals, 9);
        assert_eq!(quote.effective_amount_in, "1.5");
        assert_eq!(quote.refund_relayer_fee, "0.002");
    }

    #[test]
    fn malformed_quote_json_is_an_invalid_response() {
        let result = Quote::from_json(r#"{"fromToken": "not an object"}"#);
        match result {
            Err(SwapError::InvalidResponse(_)) => {}
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn native_source_wraps_before_swapping() {
        let config = ProtocolConfig::mainnet();
        let rpc = MockRpc::empty();
        let swapper = Keypair::new().pubkey();

        let draft = build_swap_draft(
            &config,
            &rpc,
            &native_quote(),
            &swapper,
            evm_destination(),
            300,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();

        // Both token accounts are missing: create source, create custody,
        // transfer, sync-native, swap - in that exact order
        let instructions = draft.instructions();
        assert_eq!(instructions.len(), 5);
        assert_eq!(
            instructions[0].program_id,
            spl_associated_token_account::id()
        );
        assert_eq!(
            instructions[1].program_id,
            spl_associated_token_account::id()
        );
        assert_eq!(instructions[2].program_id, system_program::id());
        assert_eq!(instructions[3].program_id, TOKEN_PROGRAM_ID);
        assert_eq!(instructions[4].program_id, config.swap_program);

        // The wrap moves the full effective amount at 9 decimals
        let transfer_lamports =
            u64::from_le_bytes(instructions[2].data[4..12].try_into().unwrap());
        assert_eq!(transfer_lamports, 1_500_000_000);
    }

    #[tokio::test]
    async fn existing_accounts_skip_creation() {
        let config = ProtocolConfig::mainnet();
        let swapper = Keypair::new().pubkey();
        let quote = token_quote();

        let from_mint = Pubkey::from_str(&quote.from_token.mint).unwrap();
        let (main, _) = derive_main_account(&config.swap_program);
        let from_account =
            derive_associated_token_account(&swapper, &from_mint, false).unwrap();
        let to_account = derive_associated_token_account(&main, &from_mint, true).unwrap();
        let populated = AccountSummary {
            owner: TOKEN_PROGRAM_ID,
            data_len: 165,
        };
        let rpc = MockRpc::with_accounts(vec![
            (from_account, populated.clone()),
            (to_account, populated),
        ]);

        let draft = build_swap_draft(
            &config,
            &rpc,
            &quote,
            &swapper,
            evm_destination(),
            300,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();

        // No creation, no wrap - just the swap instruction
        assert_eq!(draft.instructions().len(), 1);
        assert_eq!(draft.instructions()[0].program_id, config.swap_program);
    }

    #[tokio::test]
    async fn zero_length_account_is_recreated() {
        let config = ProtocolConfig::mainnet();
        let swapper = Keypair::new().pubkey();
        let quote = token_quote();

        let from_mint = Pubkey::from_str(&quote.from_token.mint).unwrap();
        let from_account =
            derive_associated_token_account(&swapper, &from_mint, false).unwrap();
        let rpc = MockRpc::with_accounts(vec![(
            from_account,
            AccountSummary {
                owner: TOKEN_PROGRAM_ID,
                data_len: 0,
            },
        )]);

        let draft = build_swap_draft(
            &config,
            &rpc,
            &quote,
            &swapper,
            evm_destination(),
            300,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();

        // Source account exists but holds zero bytes: recreate it, plus the
        // missing custody account
        assert_eq!(draft.instructions().len(), 3);
    }

    #[tokio::test]
    async fn swap_payload_carries_converted_amounts() {
        let config = ProtocolConfig::mainnet();
        let rpc = MockRpc::empty();
        let swapper = Keypair::new().pubkey();
        let timeout = 600;

        let draft = build_swap_draft(
            &config,
            &rpc,
            &native_quote(),
            &swapper,
            evm_destination(),
            timeout,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();

        let data = &draft.instructions().last().unwrap().data;
        assert_eq!(data.len(), SWAP_INSTRUCTION_LEN);
        assert_eq!(data[0], OP_SWAP);

        let read_u64 =
            |at: usize| u64::from_le_bytes(data[at..at + 8].try_into().unwrap());
        assert_eq!(read_u64(3), 1_500_000_000); // 1.5 at 9 decimals
        assert_eq!(read_u64(11), 2_500_123_456); // 2500.123456 at 6 decimals
        assert_eq!(read_u64(19), TEST_TIME + timeout);
        assert_eq!(read_u64(27), 1_000_000); // 0.001 at 9 decimals
        assert_eq!(read_u64(35), 250_000); // 0.25 at 6 decimals
        assert_eq!(read_u64(43), 2_000_000); // 0.002 at 9 decimals
        assert_eq!(u16::from_le_bytes(data[51..53].try_into().unwrap()), 2);
        assert_eq!(
            &data[53..85],
            normalize_address(evm_destination(), 2).unwrap().as_slice()
        );
    }

    #[tokio::test]
    async fn state_account_differs_per_message_keys() {
        let config = ProtocolConfig::mainnet();
        let rpc = MockRpc::empty();
        let swapper = Keypair::new().pubkey();
        let quote = token_quote();

        let first = build_swap_draft(
            &config,
            &rpc,
            &quote,
            &swapper,
            evm_destination(),
            300,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();
        let second = build_swap_draft(
            &config,
            &rpc,
            &quote,
            &swapper,
            evm_destination(),
            300,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();

        // Account index 4 of the swap instruction is the state PDA
        let state_of = |draft: &TransactionDraft| {
            draft.instructions().last().unwrap().accounts[4].pubkey
        };
        assert_ne!(state_of(&first), state_of(&second));
    }

    #[tokio::test]
    async fn unknown_destination_chain_fails() {
        let config = ProtocolConfig::mainnet();
        let rpc = MockRpc::empty();
        let swapper = Keypair::new().pubkey();
        let mut quote = token_quote();
        quote.to_chain = "dogechain".to_string();

        let result = build_swap_draft(
            &config,
            &rpc,
            &quote,
            &swapper,
            evm_destination(),
            300,
            &fixed_ephemeral(),
        )
        .await;
        assert!(matches!(result, Err(SwapError::UnsupportedChain(_))));
    }

    #[tokio::test]
    async fn solana_destination_must_not_be_token_account() {
        let config = ProtocolConfig::mainnet();
        let swapper = Keypair::new().pubkey();
        let destination = Keypair::new().pubkey();
        let mut quote = token_quote();
        quote.to_chain = "solana".to_string();

        let rpc = MockRpc::with_accounts(vec![(
            destination,
            AccountSummary {
                owner: TOKEN_PROGRAM_ID,
                data_len: 165,
            },
        )]);

        let signed = Arc::new(AtomicBool::new(false));
        let signed_flag = signed.clone();
        let result = swap_from_solana(
            &config,
            &rpc,
            &quote,
            &swapper.to_string(),
            &destination.to_string(),
            300,
            move |tx| {
                signed_flag.store(true, Ordering::SeqCst);
                async move { Ok(tx) }
            },
        )
        .await;

        assert!(matches!(
            result,
            Err(SwapError::InvalidDestinationAddress(_))
        ));
        // The build aborted before any signature was solicited
        assert!(!signed.load(Ordering::SeqCst));
        assert!(rpc.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn solana_destination_owner_address_passes_check() {
        let config = ProtocolConfig::mainnet();
        let swapper = Keypair::new().pubkey();
        let destination = Keypair::new().pubkey();
        let mut quote = token_quote();
        quote.to_chain = "solana".to_string();

        // Destination owned by the system program is a wallet, not a token
        // account; an absent destination account also passes
        let rpc = MockRpc::with_accounts(vec![(
            destination,
            AccountSummary {
                owner: system_program::id(),
                data_len: 0,
            },
        )]);

        let draft = build_swap_draft(
            &config,
            &rpc,
            &quote,
            &swapper,
            &destination.to_string(),
            300,
            &fixed_ephemeral(),
        )
        .await
        .unwrap();
        assert_eq!(
            draft.instructions().last().unwrap().program_id,
            config.swap_program
        );
    }

    #[tokio::test]
    async fn signed_transaction_is_broadcast_without_preflight() {
        let config = ProtocolConfig::mainnet();
        let rpc = MockRpc::empty();
        let swapper = Keypair::new().pubkey();

        let signed = Arc::new(AtomicBool::new(false));
        let signed_flag = signed.clone();
        let signature = swap_from_solana(
            &config,
            &rpc,
            &native_quote(),
            &swapper.to_string(),
            evm_destination(),
            300,
            move |tx| {
                signed_flag.store(true, Ordering::SeqCst);
                async move { Ok(tx) }
            },
        )
        .await
        .unwrap();

        assert_eq!(signature, "MockSignature1111111111111111111111111111111");
        assert!(signed.load(Ordering::SeqCst));
        let sent = rpc.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (transaction, skip_preflight) = &sent[0];
        assert!(*skip_preflight);
        assert_eq!(transaction.message.account_keys[0], swapper);
    }

    #[tokio::test]
    async fn signer_failure_is_surfaced_and_nothing_is_sent() {
        let config = ProtocolConfig::mainnet();
        let rpc = MockRpc::empty();
        let swapper = Keypair::new().pubkey();

        let result = swap_from_solana(
            &config,
            &rpc,
            &native_quote(),
            &swapper.to_string(),
            evm_destination(),
            300,
            |_tx| async { Err(SwapError::SigningError("wallet locked".to_string())) },
        )
        .await;

        assert!(matches!(result, Err(SwapError::SigningError(_))));
        assert!(rpc.sent.lock().unwrap().is_empty());
    }
}
