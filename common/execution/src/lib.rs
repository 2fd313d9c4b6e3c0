#![no_std]
#![allow(clippy::too_many_arguments)]

pub mod validation;

use common_constants::SWAP_ENDPOINT;
use common_errors::{ERROR_INSUFFICIENT_SWAP_RESULT, ERROR_TARGET_CALL_FAILED};
use common_structs::{BorrowKind, SwapFill, TargetCall};

multiversx_sc::imports!();

/// Moves borrowed funds out of the pool.
///
/// Every path raises `borrow_ongoing` for the duration of the external call, so the target
/// or the swapper cannot reenter a state-mutating endpoint. A reverting target fails the whole
/// transaction with `TargetCallFailed`, nonce consumption included.
#[multiversx_sc::module]
pub trait ExecutionModule:
    validation::ValidationModule
    + common_authorization::AuthorizationModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// Verifies the MPC authorization for `borrows` and the target it is bound to.
    fn authorize_borrow(
        &self,
        kind: BorrowKind,
        borrows: &ManagedVec<EgldOrEsdtTokenPayment>,
        target: &ManagedAddress,
        target_call: &TargetCall<Self::Api>,
        nonce: u64,
        deadline: u64,
        swap: Option<&SwapFill<Self::Api>>,
        signature: &ManagedBuffer,
    ) {
        let authorization = self.build_authorization(
            borrows.clone(),
            target,
            target_call,
            nonce,
            deadline,
            swap.cloned(),
        );
        self.verify_authorization(kind, &authorization, signature);
        self.validate_target(target, target_call);
    }

    fn execute_borrow(
        &self,
        kind: BorrowKind,
        borrows: &ManagedVec<EgldOrEsdtTokenPayment>,
        target: &ManagedAddress,
        target_call: &TargetCall<Self::Api>,
        nonce: u64,
        deadline: u64,
        signature: &ManagedBuffer,
    ) {
        self.authorize_borrow(
            kind,
            borrows,
            target,
            target_call,
            nonce,
            deadline,
            None,
            signature,
        );
        self.call_target(target, target_call, borrows, nonce);
    }

    /// Borrow, swap through the caller, then forward exactly the fill amount to the target.
    fn execute_borrow_and_swap(
        &self,
        kind: BorrowKind,
        borrows: &ManagedVec<EgldOrEsdtTokenPayment>,
        swap: &SwapFill<Self::Api>,
        target: &ManagedAddress,
        target_call: &TargetCall<Self::Api>,
        nonce: u64,
        deadline: u64,
        signature: &ManagedBuffer,
    ) {
        self.authorize_borrow(
            kind,
            borrows,
            target,
            target_call,
            nonce,
            deadline,
            Some(swap),
            signature,
        );

        let fill = self.swap_and_fill(borrows, swap);
        let mut payments = ManagedVec::new();
        payments.push(fill);
        self.call_target(target, target_call, &payments, nonce);
    }

    /// Sends `payments` to `target`, invoking `target_call` when it names an endpoint.
    fn call_target(
        &self,
        target: &ManagedAddress,
        target_call: &TargetCall<Self::Api>,
        payments: &ManagedVec<EgldOrEsdtTokenPayment>,
        nonce: u64,
    ) {
        self.borrow_ongoing().set(true);
        if target_call.is_transfer_only() {
            self.transfer_payments(target, payments);
        } else {
            let result = if payments.len() == 1 {
                let payment = payments.get(0);
                self.tx()
                    .to(target)
                    .raw_call(target_call.endpoint.clone())
                    .arguments_raw(target_call.arguments.clone())
                    .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
                    .returns(ReturnsHandledOrError::new())
                    .sync_call_fallible()
            } else {
                self.tx()
                    .to(target)
                    .raw_call(target_call.endpoint.clone())
                    .arguments_raw(target_call.arguments.clone())
                    .payment(payments.clone())
                    .returns(ReturnsHandledOrError::new())
                    .sync_call_fallible()
            };

            // Failing here reverts the transfers and the consumed nonce with it
            if result.is_err() {
                sc_panic!(ERROR_TARGET_CALL_FAILED);
            }
        }
        self.borrow_ongoing().set(false);

        self.borrow_event(&self.blockchain().get_caller(), target, nonce, payments);
    }

    /// Hands `borrows` to the calling contract's `swap` endpoint and checks what came back.
    ///
    /// At least `fill_amount` of `fill_token` has to be returned. Anything above it stays in
    /// the pool. Returns the payment to forward to the target.
    fn swap_and_fill(
        &self,
        borrows: &ManagedVec<EgldOrEsdtTokenPayment>,
        swap: &SwapFill<Self::Api>,
    ) -> EgldOrEsdtTokenPayment {
        let swapper = self.blockchain().get_caller();
        self.validate_swapper(&swapper);

        let mut arguments = ManagedArgBuffer::new();
        arguments.push_arg(&swap.fill_token);
        arguments.push_arg(&swap.fill_amount);
        arguments.push_arg(&swap.swap_data);

        self.borrow_ongoing().set(true);
        let back_transfers = if borrows.len() == 1 {
            let payment = borrows.get(0);
            self.tx()
                .to(&swapper)
                .raw_call(ManagedBuffer::new_from_bytes(SWAP_ENDPOINT))
                .arguments_raw(arguments)
                .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
                .returns(ReturnsBackTransfersReset)
                .sync_call()
        } else {
            self.tx()
                .to(&swapper)
                .raw_call(ManagedBuffer::new_from_bytes(SWAP_ENDPOINT))
                .arguments_raw(arguments)
                .payment(borrows.clone())
                .returns(ReturnsBackTransfersReset)
                .sync_call()
        };
        self.borrow_ongoing().set(false);

        let received = self.received_amount(&back_transfers, &swap.fill_token);
        require!(received >= swap.fill_amount, ERROR_INSUFFICIENT_SWAP_RESULT);

        swap.fill_payment()
    }

    /// Amount of `token` among the back-transfers of a call.
    fn received_amount(
        &self,
        back_transfers: &BackTransfers<Self::Api>,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let mut received = BigUint::zero();
        for payment in back_transfers.payments.iter() {
            if payment.token_identifier == *token {
                received += &payment.amount;
            }
        }

        received
    }

    fn transfer_payments(
        &self,
        to: &ManagedAddress,
        payments: &ManagedVec<EgldOrEsdtTokenPayment>,
    ) {
        for payment in payments.iter() {
            self.tx()
                .to(to)
                .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
                .transfer();
        }
    }
}
