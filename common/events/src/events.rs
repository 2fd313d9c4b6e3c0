#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_deposited: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_deposited: &BigUint,
    );

    #[event("profit_withdrawn")]
    fn profit_withdrawn_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    // Emitted once per successful borrow, swap fills included. `payments` is what left the
    // pool for the target (the fill payment when a swap took place).
    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] target: &ManagedAddress,
        #[indexed] nonce: u64,
        #[indexed] payments: &ManagedVec<EgldOrEsdtTokenPayment>,
    );

    #[event("paused")]
    fn paused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("borrow_paused")]
    fn borrow_paused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("borrow_unpaused")]
    fn borrow_unpaused_event(&self, #[indexed] account: &ManagedAddress);

    #[event("mpc_address_set")]
    fn mpc_address_set_event(&self, #[indexed] mpc_address: &ManagedAddress);

    #[event("role_granted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("role_revoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("supported_asset_added")]
    fn supported_asset_added_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] decimals: usize,
    );

    #[event("supported_asset_removed")]
    fn supported_asset_removed_event(&self, #[indexed] token: &EgldOrEsdtTokenIdentifier);
}
