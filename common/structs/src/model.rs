#![no_std]

use common_constants::{BORROW_MANY_TYPE_TAG, BORROW_TYPE_TAG};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Roles recognised by the pool access controller.
///
/// Roles are independent: an account can hold none, one or all of them.
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum Role {
    /// Sets the MPC address and grants/revokes every role.
    Admin,
    /// Deposits and withdraws principal.
    LiquidityAdmin,
    /// Withdraws profit and toggles the borrow circuit breaker.
    WithdrawProfit,
    /// Toggles the global pause.
    Pauser,
}

/// Distinguishes single-asset from list authorizations so a signature for one
/// entry point family can never be replayed on the other.
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, TypeAbi, Clone, Copy, PartialEq, Eq, Debug,
)]
pub enum BorrowKind {
    Single,
    Many,
}

impl BorrowKind {
    pub fn type_tag(&self) -> &'static [u8] {
        match self {
            BorrowKind::Single => BORROW_TYPE_TAG,
            BorrowKind::Many => BORROW_MANY_TYPE_TAG,
        }
    }
}

/// Endpoint and raw arguments the pool invokes on the borrow target.
/// An empty endpoint means the borrowed funds are sent as a plain transfer.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct TargetCall<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedArgBuffer<M>,
}

impl<M: ManagedTypeApi> TargetCall<M> {
    pub fn new(endpoint: ManagedBuffer<M>, arguments: ManagedArgBuffer<M>) -> Self {
        TargetCall {
            endpoint,
            arguments,
        }
    }

    pub fn is_transfer_only(&self) -> bool {
        self.endpoint.is_empty()
    }
}

/// The message an MPC signature authorizes. Pool address and chain id are part of the
/// message so a signature cannot move to another pool or another chain. `swap` is set only
/// for the borrow-and-swap entry points, so a plain borrow signature cannot be used to hand
/// the funds to a swapper.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct BorrowAuthorization<M: ManagedTypeApi> {
    pub pool: ManagedAddress<M>,
    pub chain_id: ManagedBuffer<M>,
    pub borrows: ManagedVec<M, EgldOrEsdtTokenPayment<M>>,
    pub target: ManagedAddress<M>,
    pub target_call: TargetCall<M>,
    pub nonce: u64,
    pub deadline: u64,
    pub swap: Option<SwapFill<M>>,
}

/// Optional swap step attached to a borrow. `fill_amount` is the minimum the swapper
/// has to hand back; `swap_data` is forwarded to it untouched.
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, TypeAbi, Clone)]
pub struct SwapFill<M: ManagedTypeApi> {
    pub fill_token: EgldOrEsdtTokenIdentifier<M>,
    pub fill_amount: BigUint<M>,
    pub swap_data: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> SwapFill<M> {
    pub fn new(
        fill_token: EgldOrEsdtTokenIdentifier<M>,
        fill_amount: BigUint<M>,
        swap_data: ManagedBuffer<M>,
    ) -> Self {
        SwapFill {
            fill_token,
            fill_amount,
            swap_data,
        }
    }

    /// The payment forwarded to the borrow target once the swap settled.
    pub fn fill_payment(&self) -> EgldOrEsdtTokenPayment<M> {
        EgldOrEsdtTokenPayment::new(self.fill_token.clone(), 0, self.fill_amount.clone())
    }
}
