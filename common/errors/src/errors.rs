#![no_std]

// Authorization
pub static ERROR_INVALID_SIGNATURE: &[u8] = b"Invalid signature.";

pub static ERROR_EXPIRED_SIGNATURE: &[u8] = b"Signature expired.";

pub static ERROR_NONCE_ALREADY_USED: &[u8] = b"Nonce already used.";

// Accounting
pub static ERROR_NOT_ENOUGH_TO_DEPOSIT: &[u8] = b"Not enough tokens to deposit.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

pub static ERROR_NO_PROFIT: &[u8] = b"No profit to withdraw.";

pub static ERROR_WITHDRAW_PROFIT_DENIED: &[u8] =
    b"Profit withdrawal denied while borrowed principal is outstanding.";

pub static ERROR_INVALID_BORROW_TOKEN: &[u8] = b"Invalid borrow token.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment for this pool.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset identifier.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_ASSET_ALREADY_SUPPORTED: &[u8] = b"Asset already supported.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid asset decimals.";

pub static ERROR_CANNOT_REMOVE_PRINCIPAL_ASSET: &[u8] = b"Principal asset cannot be removed.";

// Execution
pub static ERROR_TARGET_CALL_FAILED: &[u8] = b"Target call failed.";

pub static ERROR_INSUFFICIENT_SWAP_RESULT: &[u8] = b"Insufficient swap result.";

pub static ERROR_INVALID_LENGTH: &[u8] = b"Invalid length.";

pub static ERROR_NATIVE_BORROW_DENIED: &[u8] = b"Native borrow denied.";

pub static ERROR_INVALID_SWAPPER: &[u8] = b"Caller cannot perform swaps.";

pub static ERROR_BORROW_ONGOING: &[u8] = b"Borrow ongoing.";

// Access
pub static ERROR_UNAUTHORIZED_ACCOUNT: &[u8] = b"Account is missing the required role.";

pub static ERROR_ENFORCED_PAUSE: &[u8] = b"Contract is paused.";

pub static ERROR_EXPECTED_PAUSE: &[u8] = b"Contract is not paused.";

pub static ERROR_BORROWING_IS_PAUSED: &[u8] = b"Borrowing is paused.";

pub static ERROR_ZERO_ADDRESS: &[u8] = b"Zero address.";
