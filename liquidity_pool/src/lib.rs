#![no_std]

multiversx_sc::imports!();

pub mod views;

use common_errors::{ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_BORROW_TOKEN};
use common_structs::{BorrowKind, Role, SwapFill, TargetCall};

/// Single-asset pool.
///
/// Holds one principal asset (any ESDT or EGLD). Everything the pool holds above the deposited
/// principal is profit, as is the full balance of any other token that ends up here.
#[multiversx_sc::contract]
pub trait LiquidityPool:
    common_ledger::LedgerModule
    + common_authorization::AuthorizationModule
    + common_execution::ExecutionModule
    + common_execution::validation::ValidationModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
    + views::ViewsModule
{
    /// # Arguments
    /// - `asset`: Principal asset of the pool.
    /// - `admin`: Receives the `Admin` role.
    /// - `mpc_address`: Public key of the MPC co-signer.
    /// - `chain_id`: Chain id bound into every authorization.
    /// - `domain_name`: Logical name of the pool in the signing domain.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        admin: ManagedAddress,
        mpc_address: ManagedAddress,
        chain_id: ManagedBuffer,
        domain_name: ManagedBuffer,
    ) {
        self.init_ledger(&asset);
        self.init_authorization(&mpc_address, &chain_id, &domain_name);
        self.grant_role_internal(Role::Admin, &admin);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Credits `amount` of principal. Payments of the principal asset may be attached; the
    /// pool must end up holding at least the new total principal.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, amount: BigUint) {
        self.require_operational();
        self.require_role(Role::LiquidityAdmin);

        let asset = self.asset().get();
        let payments = self.call_value().all_transfers();
        self.require_payments_of(&payments, &asset);

        self.credit_deposit(&amount, &self.custody(&asset));
    }

    /// Credits exactly the attached payment of the principal asset.
    #[payable]
    #[endpoint(depositWithPull)]
    fn deposit_with_pull(&self, amount: BigUint) {
        self.require_operational();
        self.require_role(Role::LiquidityAdmin);

        let asset = self.asset().get();
        let payments = self.call_value().all_transfers();
        self.require_pull_payment(&payments, &asset, &amount);

        self.credit_deposit(&amount, &self.custody(&asset));
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, to: ManagedAddress, amount: BigUint) {
        self.require_operational();
        self.require_role(Role::LiquidityAdmin);

        let asset = self.asset().get();
        self.debit_withdraw(&to, &amount, &self.custody(&asset));
        self.send_asset(&to, &asset, &amount);
    }

    /// Sends the profit of each listed token to `to` and returns what was sent.
    #[endpoint(withdrawProfit)]
    fn withdraw_profit(
        &self,
        to: ManagedAddress,
        tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        self.require_operational();
        self.require_role(Role::WithdrawProfit);
        self.require_non_zero_address(&to);

        let mut profits: ManagedVec<EgldOrEsdtTokenPayment> = ManagedVec::new();
        for token in tokens {
            if profits.iter().any(|profit| profit.token_identifier == token) {
                continue;
            }

            let profit = self.profit_of(&token, &self.custody(&token));
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
        self.require_borrowable(&borrows);

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
        self.require_borrowable(&borrows);

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

    /// Lends to the calling contract's `swap` endpoint and forwards `swap.fill_amount` of
    /// `swap.fill_token` to the target.
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
        self.require_borrowable(&borrows);

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
        self.require_borrowable(&borrows);

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

    /// Only the principal asset can be borrowed, and only out of what the pool holds.
    fn require_borrowable(&self, borrows: &ManagedVec<EgldOrEsdtTokenPayment>) {
        let asset = self.asset().get();
        let mut total = BigUint::zero();
        for borrow in borrows.iter() {
            require!(borrow.token_identifier == asset, ERROR_INVALID_BORROW_TOKEN);
            total += &borrow.amount;
        }

        require!(total <= self.custody(&asset), ERROR_INSUFFICIENT_LIQUIDITY);
    }
}
