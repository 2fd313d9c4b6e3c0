#![no_std]

multiversx_sc::imports!();

pub mod views;
pub mod wrapping;

use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_BORROW_TOKEN, ERROR_INVALID_PAYMENT,
    ERROR_NATIVE_BORROW_DENIED,
};
use common_structs::{BorrowKind, Role, SwapFill, TargetCall};

/// Native-wrapping pool.
///
/// The principal asset is WEGLD and EGLD is accepted wherever WEGLD is: deposits in EGLD are
/// wrapped, borrows and profit withdrawals are paid in whichever form was asked for.
#[multiversx_sc::contract]
pub trait NativePool:
    wrapping::WrappingModule
    + views::ViewsModule
    + common_ledger::LedgerModule
    + common_authorization::AuthorizationModule
    + common_execution::ExecutionModule
    + common_execution::validation::ValidationModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// # Arguments
    /// - `wegld_token`: Wrapped EGLD token, the principal asset.
    /// - `wrapper_address`: WEGLD wrapper contract.
    /// - `admin`: Receives the `Admin` role.
    /// - `mpc_address`: Public key of the MPC co-signer.
    /// - `chain_id`: Chain id bound into every authorization.
    /// - `domain_name`: Logical name of the pool in the signing domain.
    #[init]
    fn init(
        &self,
        wegld_token: TokenIdentifier,
        wrapper_address: ManagedAddress,
        admin: ManagedAddress,
        mpc_address: ManagedAddress,
        chain_id: ManagedBuffer,
        domain_name: ManagedBuffer,
    ) {
        self.init_ledger(&EgldOrEsdtTokenIdentifier::esdt(wegld_token));
        self.require_non_zero_address(&wrapper_address);
        self.wrapper_address().set(&wrapper_address);
        self.init_authorization(&mpc_address, &chain_id, &domain_name);
        self.grant_role_internal(Role::Admin, &admin);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Credits `amount` of principal. EGLD or WEGLD may be attached; EGLD is wrapped.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, amount: BigUint) {
        self.require_operational();
        self.require_role(Role::LiquidityAdmin);

        let payments = self.call_value().all_transfers();
        let mut egld_paid = BigUint::zero();
        for payment in payments.iter() {
            require!(
                self.is_native_form(&payment.token_identifier),
                ERROR_INVALID_PAYMENT
            );
            if payment.token_identifier.is_egld() {
                egld_paid += &payment.amount;
            }
        }
        self.wrap_egld(&egld_paid);

        self.credit_deposit(&amount, &self.native_custody());
    }

    /// Credits exactly the attached EGLD or WEGLD payment.
    #[payable]
    #[endpoint(depositWithPull)]
    fn deposit_with_pull(&self, amount: BigUint) {
        self.require_operational();
        self.require_role(Role::LiquidityAdmin);

        let payments = self.call_value().all_transfers();
        require!(payments.len() == 1, ERROR_INVALID_PAYMENT);
        let payment = payments.get(0);
        require!(
            self.is_native_form(&payment.token_identifier) && payment.amount == amount,
            ERROR_INVALID_PAYMENT
        );
        if payment.token_identifier.is_egld() {
            self.wrap_egld(&amount);
        }

        self.credit_deposit(&amount, &self.native_custody());
    }

    /// Pays principal out in WEGLD, wrapping idle EGLD when needed.
    #[endpoint(withdraw)]
    fn withdraw(&self, to: ManagedAddress, amount: BigUint) {
        self.require_operational();
        self.require_role(Role::LiquidityAdmin);

        self.debit_withdraw(&to, &amount, &self.native_custody());

        let asset = self.asset().get();
        self.ensure_native_form(&asset, &amount);
        self.send_asset(&to, &asset, &amount);
    }

    /// EGLD and WEGLD draw from one native profit, paid in the form that was requested.
    /// Any other token pays out its full balance.
    #[endpoint(withdrawProfit)]
    fn withdraw_profit(
        &self,
        to: ManagedAddress,
        tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        self.require_operational();
        self.require_role(Role::WithdrawProfit);
        self.require_non_zero_address(&to);

        let asset = self.asset().get();
        let mut native_profit = self.profit_of(&asset, &self.native_custody());
        let mut profits: ManagedVec<EgldOrEsdtTokenPayment> = ManagedVec::new();
        for token in tokens {
            if profits.iter().any(|profit| profit.token_identifier == token) {
                continue;
            }

            let profit = if self.is_native_form(&token) {
                let amount = native_profit.clone();
                native_profit = BigUint::zero();
                self.ensure_native_form(&token, &amount);
                amount
            } else {
                self.blockchain().get_sc_balance(&token, 0)
            };
            profits.push(EgldOrEsdtTokenPayment::new(token, 0, profit));
        }

        self.pay_profits(&to, &profits)
    }

    #[endpoint(borrow)]
    fn borrow(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
        nonce: u64,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.require_borrow_allowed();
        let borrows = self.single_borrow(token, amount);
        self.prepare_native_borrows(&borrows);

        self.execute_borrow(
            BorrowKind::Single,
            &borrows,
            &target,
            &TargetCall::new(endpoint, arguments),
            nonce,
            deadline,
            &signature,
        );
    }

    #[endpoint(borrowMany)]
    fn borrow_many(
        &self,
        tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
        nonce: u64,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.require_borrow_allowed();
        let borrows = self.zip_borrows(&tokens, &amounts);
        self.prepare_native_borrows(&borrows);

        self.execute_borrow(
            BorrowKind::Many,
            &borrows,
            &target,
            &TargetCall::new(endpoint, arguments),
            nonce,
            deadline,
            &signature,
        );
    }

    /// Swapping EGLD into EGLD is refused.
    #[endpoint(borrowAndSwap)]
    fn borrow_and_swap(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        swap: SwapFill<Self::Api>,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
        nonce: u64,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.require_borrow_allowed();
        let borrows = self.single_borrow(token, amount);
        self.require_real_swap(&borrows, &swap);
        self.prepare_native_borrows(&borrows);

        self.execute_borrow_and_swap(
            BorrowKind::Single,
            &borrows,
            &swap,
            &target,
            &TargetCall::new(endpoint, arguments),
            nonce,
            deadline,
            &signature,
        );
    }

    #[endpoint(borrowAndSwapMany)]
    fn borrow_and_swap_many(
        &self,
        tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        swap: SwapFill<Self::Api>,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
        nonce: u64,
        deadline: u64,
        signature: ManagedBuffer,
    ) {
        self.require_borrow_allowed();
        let borrows = self.zip_borrows(&tokens, &amounts);
        self.require_real_swap(&borrows, &swap);
        self.prepare_native_borrows(&borrows);

        self.execute_borrow_and_swap(
            BorrowKind::Many,
            &borrows,
            &swap,
            &target,
            &TargetCall::new(endpoint, arguments),
            nonce,
            deadline,
            &signature,
        );
    }

    /// Checks that only EGLD or WEGLD is borrowed and that the native custody covers it,
    /// then converts so each requested form is on hand.
    fn prepare_native_borrows(&self, borrows: &ManagedVec<EgldOrEsdtTokenPayment>) {
        let mut egld_needed = BigUint::zero();
        let mut wegld_needed = BigUint::zero();
        for borrow in borrows.iter() {
            require!(
                self.is_native_form(&borrow.token_identifier),
                ERROR_INVALID_BORROW_TOKEN
            );
            if borrow.token_identifier.is_egld() {
                egld_needed += &borrow.amount;
            } else {
                wegld_needed += &borrow.amount;
            }
        }

        require!(
            &egld_needed + &wegld_needed <= self.native_custody(),
            ERROR_INSUFFICIENT_LIQUIDITY
        );
        self.ensure_native_forms(&egld_needed, &wegld_needed);
    }

    fn require_real_swap(
        &self,
        borrows: &ManagedVec<EgldOrEsdtTokenPayment>,
        swap: &SwapFill<Self::Api>,
    ) {
        if !swap.fill_token.is_egld() {
            return;
        }

        for borrow in borrows.iter() {
            require!(!borrow.token_identifier.is_egld(), ERROR_NATIVE_BORROW_DENIED);
        }
    }
}
