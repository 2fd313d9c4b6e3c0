#![no_std]

/// Version bound into the signing domain; bump it to invalidate every outstanding signature.
pub const SIGNING_DOMAIN_VERSION: &[u8] = b"1";

pub const DOMAIN_TYPE_TAG: &[u8] = b"MpcBorrowDomain(name,version)";
pub const BORROW_TYPE_TAG: &[u8] =
    b"Borrow(pool,chainId,borrowToken,amount,target,targetCall,nonce,deadline,swapFill)";
pub const BORROW_MANY_TYPE_TAG: &[u8] =
    b"BorrowMany(pool,chainId,borrowTokens,amounts,target,targetCall,nonce,deadline,swapFill)";

/// ed25519 signatures are always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Endpoint the pool invokes on the caller during `borrowAndSwap`.
pub const SWAP_ENDPOINT: &[u8] = b"swap";

/// Upper bound for the number of assets in a single `borrowMany`.
pub const MAX_BORROW_ASSETS: usize = 10;

/// Largest decimals value accepted for a registered stablecoin.
pub const MAX_ASSET_DECIMALS: usize = 18;
