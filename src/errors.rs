/// Error types for swap transaction assembly
/// Every failure aborts the whole build - there is no partial-success state.
/// Network and signer failures are surfaced unchanged, never retried here.

use solana_client::client_error::ClientError;

/// Error taxonomy for the swap builder
#[derive(Debug)]
pub enum SwapError {
    /// Chain name or chain id is not in the registry
    UnsupportedChain(String),
    /// Malformed address text for a chain family with a validity pattern
    InvalidAddress(String),
    /// Associated token account derivation received an off-curve owner
    /// without explicit permission
    OwnerOffCurve(String),
    /// A monetary field is negative or does not scale into a u64
    InvalidAmount(String),
    /// Destination safety check detected a token account where an owner
    /// address was required
    InvalidDestinationAddress(String),
    /// Underlying RPC query or broadcast failure, propagated unchanged
    NetworkError(ClientError),
    /// RPC answered but the payload could not be decoded
    InvalidResponse(String),
    /// Failure surfaced by the injected signing callback
    SigningError(String),
    /// Transaction or instruction could not be constructed
    TransactionError(String),
}

impl std::fmt::Display for SwapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapError::UnsupportedChain(msg) => write!(f, "Unsupported Chain: {}", msg),
            SwapError::InvalidAddress(msg) => write!(f, "Invalid Address: {}", msg),
            SwapError::OwnerOffCurve(msg) => write!(f, "Owner Off Curve: {}", msg),
            SwapError::InvalidAmount(msg) => write!(f, "Invalid Amount: {}", msg),
            SwapError::InvalidDestinationAddress(msg) => {
                write!(f, "Invalid Destination Address: {}", msg)
            }
            SwapError::NetworkError(err) => write!(f, "Network Error: {}", err),
            SwapError::InvalidResponse(msg) => write!(f, "Invalid Response: {}", msg),
            SwapError::SigningError(msg) => write!(f, "Signing Error: {}", msg),
            SwapError::TransactionError(msg) => write!(f, "Transaction Error: {}", msg),
        }
    }
}

impl std::error::Error for SwapError {}

impl From<ClientError> for SwapError {
    fn from(err: ClientError) -> Self {
        SwapError::NetworkError(err)
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        SwapError::InvalidResponse(format!("JSON parsing error: {}", err))
    }
}
