#![no_std]

pub mod cache;

pub use cache::Cache;

use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_ASSET, ERROR_INVALID_PAYMENT,
    ERROR_NOT_ENOUGH_TO_DEPOSIT, ERROR_NO_PROFIT,
};

multiversx_sc::imports!();

/// Principal and profit accounting shared by the pool variants.
///
/// Principal (`total_deposited`) only moves through deposits and withdrawals. Everything the
/// pool holds above it is profit. Callers pass in the custody they measured, so each pool
/// decides what counts as holding its principal asset.
#[multiversx_sc::module]
pub trait LedgerModule:
    common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// Principal asset, fixed at deployment.
    #[view(getAsset)]
    #[storage_mapper("asset")]
    fn asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Principal credited to the pool. Borrows never change it.
    #[view(getTotalDeposited)]
    #[storage_mapper("total_deposited")]
    fn total_deposited(&self) -> SingleValueMapper<BigUint>;

    fn init_ledger(&self, asset: &EgldOrEsdtTokenIdentifier) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        self.asset().set(asset);
    }

    /// Credits `amount` of principal. The pool must already hold it on top of the
    /// principal credited so far.
    fn credit_deposit(&self, amount: &BigUint, custody: &BigUint) {
        let mut cache = Cache::new(self);
        require!(cache.covers(custody, amount), ERROR_NOT_ENOUGH_TO_DEPOSIT);

        cache.total_deposited += amount;
        self.deposit_event(
            &self.blockchain().get_caller(),
            amount,
            &cache.total_deposited,
        );
    }

    /// Debits `amount` of principal. The caller performs the transfer afterwards.
    fn debit_withdraw(&self, to: &ManagedAddress, amount: &BigUint, custody: &BigUint) {
        self.require_non_zero_address(to);

        let mut cache = Cache::new(self);
        require!(
            cache.can_release(custody, amount),
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        cache.total_deposited -= amount;
        self.withdraw_event(
            &self.blockchain().get_caller(),
            to,
            amount,
            &cache.total_deposited,
        );
    }

    /// Profit of `token` given the pool's custody of it. Only the principal asset has
    /// principal to subtract.
    fn profit_of(&self, token: &EgldOrEsdtTokenIdentifier, custody: &BigUint) -> BigUint {
        if *token != self.asset().get() {
            return custody.clone();
        }

        let total_deposited = self.total_deposited().get();
        if *custody > total_deposited {
            custody - &total_deposited
        } else {
            BigUint::zero()
        }
    }

    /// Principal currently out of the pool, given its custody of the principal asset.
    fn shortfall_of(&self, custody: &BigUint) -> BigUint {
        let total_deposited = self.total_deposited().get();
        if total_deposited > *custody {
            total_deposited - custody
        } else {
            BigUint::zero()
        }
    }

    /// Payments attached to a deposit are optional, but must all be of `token`.
    fn require_payments_of(
        &self,
        payments: &ManagedVec<EgldOrEsdtTokenPayment>,
        token: &EgldOrEsdtTokenIdentifier,
    ) {
        for payment in payments.iter() {
            require!(
                payment.token_identifier == *token && payment.token_nonce == 0,
                ERROR_INVALID_PAYMENT
            );
        }
    }

    /// Exactly one payment of `token`, worth exactly `amount`.
    fn require_pull_payment(
        &self,
        payments: &ManagedVec<EgldOrEsdtTokenPayment>,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        require!(payments.len() == 1, ERROR_INVALID_PAYMENT);
        let payment = payments.get(0);
        require!(
            payment.token_identifier == *token
                && payment.token_nonce == 0
                && payment.amount == *amount,
            ERROR_INVALID_PAYMENT
        );
    }

    /// Sends every non-zero profit to `to` and emits one event per transfer.
    fn pay_profits(
        &self,
        to: &ManagedAddress,
        profits: &ManagedVec<EgldOrEsdtTokenPayment>,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let caller = self.blockchain().get_caller();
        let mut paid = ManagedVec::new();
        for profit in profits.iter() {
            if profit.amount == 0 {
                continue;
            }

            self.send_asset(to, &profit.token_identifier, &profit.amount);
            self.profit_withdrawn_event(&caller, to, &profit.token_identifier, &profit.amount);
            paid.push(EgldOrEsdtTokenPayment::new(
                profit.token_identifier.clone(),
                0,
                profit.amount.clone(),
            ));
        }

        require!(!paid.is_empty(), ERROR_NO_PROFIT);
        paid
    }

    fn send_asset(&self, to: &ManagedAddress, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        self.tx().to(to).egld_or_single_esdt(token, 0, amount).transfer();
    }
}
