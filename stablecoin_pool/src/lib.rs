#![no_std]

multiversx_sc::imports!();

pub mod assets;
pub mod views;

use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_BORROW_TOKEN, ERROR_WITHDRAW_PROFIT_DENIED,
};
use common_structs::{BorrowKind, Role, SwapFill, TargetCall};

/// Multi-stablecoin pool.
///
/// Principal is credited in one asset, but any registered stablecoin can be lent out. A loan
/// repaid in another stablecoin leaves principal outstanding in the principal asset; such
/// balances cover it at 1:1 and only their excess is profit.
#[multiversx_sc::contract]
pub trait StablecoinPool:
    assets::AssetsModule
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
    /// - `asset`: Principal asset of the pool, registered as a supported asset.
    /// - `asset_decimals`: Decimals of the principal asset.
    /// - `admin`: Receives the `Admin` role.
    /// - `mpc_address`: Public key of the MPC co-signer.
    /// - `chain_id`: Chain id bound into every authorization.
    /// - `domain_name`: Logical name of the pool in the signing domain.
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        admin: ManagedAddress,
        mpc_address: ManagedAddress,
        chain_id: ManagedBuffer,
        domain_name: ManagedBuffer,
    ) {
        self.init_ledger(&asset);
        self.register_asset(&asset, asset_decimals);
        self.init_authorization(&mpc_address, &chain_id, &domain_name);
        self.grant_role_internal(Role::Admin, &admin);
    }

    #[upgrade]
    fn upgrade(&self) {}

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

    /// Registered non-principal assets first cover the outstanding borrow; only the part
    /// above it is released, in request order. Asking for one while the borrow is not
    /// covered fails.
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
        let outstanding = self.shortfall_of(&self.custody(&asset));
        let mut releasable: Option<BigUint> = None;

        let mut profits: ManagedVec<EgldOrEsdtTokenPayment> = ManagedVec::new();
        for token in tokens {
            if profits.iter().any(|profit| profit.token_identifier == token) {
                continue;
            }

            let profit = if token == asset || !self.is_supported(&token) {
                self.profit_of(&token, &self.custody(&token))
            } else {
                let remaining = releasable.get_or_insert_with(|| {
                    let covering = self.non_principal_custody();
                    require!(covering >= outstanding, ERROR_WITHDRAW_PROFIT_DENIED);
                    covering - &outstanding
                });

                let balance = self.to_principal_units(&token, &self.custody(&token));
                let share = if balance < *remaining {
                    balance
                } else {
                    remaining.clone()
                };
                *remaining -= &share;
                self.from_principal_units(&token, &share)
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

    /// Every borrowed token must be registered and held in the requested amount. The same
    /// token may appear more than once in a list, so amounts are summed per token.
    fn require_borrowable(&self, borrows: &ManagedVec<EgldOrEsdtTokenPayment>) {
        for borrow in borrows.iter() {
            require!(
                self.is_supported(&borrow.token_identifier),
                ERROR_INVALID_BORROW_TOKEN
            );

            let mut requested = BigUint::zero();
            for other in borrows.iter() {
                if other.token_identifier == borrow.token_identifier {
                    requested += &other.amount;
                }
            }
            require!(
                requested <= self.custody(&borrow.token_identifier),
                ERROR_INSUFFICIENT_LIQUIDITY
            );
        }
    }
}
