use common_constants::MAX_BORROW_ASSETS;
use common_errors::{ERROR_INVALID_LENGTH, ERROR_INVALID_SWAPPER, ERROR_TARGET_CALL_FAILED};
use common_structs::TargetCall;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ValidationModule:
    common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// Gate shared by every borrow entry point. Order matters: the global pause is reported
    /// before the borrow pause.
    fn require_borrow_allowed(&self) {
        self.require_not_paused();
        self.require_borrow_not_paused();
        self.reentrancy_guard();
    }

    fn single_borrow(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let mut borrows = ManagedVec::new();
        borrows.push(EgldOrEsdtTokenPayment::new(token, 0, amount));
        borrows
    }

    /// Pairs up parallel token/amount lists. Both must be non-empty, of equal length and
    /// no longer than `MAX_BORROW_ASSETS`.
    fn zip_borrows(
        &self,
        tokens: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: &ManagedVec<BigUint>,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        require!(
            !tokens.is_empty() && tokens.len() == amounts.len(),
            ERROR_INVALID_LENGTH
        );
        require!(tokens.len() <= MAX_BORROW_ASSETS, ERROR_INVALID_LENGTH);

        let mut borrows = ManagedVec::new();
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            borrows.push(EgldOrEsdtTokenPayment::new(
                (*token).clone(),
                0,
                (*amount).clone(),
            ));
        }
        borrows
    }

    /// A plain transfer only needs a non-zero receiver. A call additionally needs a contract
    /// in this shard and a user endpoint, since built-in functions would act on the pool's
    /// own tokens.
    fn validate_target(&self, target: &ManagedAddress, target_call: &TargetCall<Self::Api>) {
        self.require_non_zero_address(target);
        if target_call.is_transfer_only() {
            return;
        }

        require!(
            self.blockchain().is_smart_contract(target),
            ERROR_TARGET_CALL_FAILED
        );
        self.validate_same_shard(target);
        require!(
            !self.blockchain().is_builtin_function(&target_call.endpoint),
            ERROR_TARGET_CALL_FAILED
        );
    }

    fn validate_same_shard(&self, address: &ManagedAddress) {
        let destination_shard_id = self.blockchain().get_shard_of_address(address);
        let current_shard_id = self
            .blockchain()
            .get_shard_of_address(&self.blockchain().get_sc_address());

        require!(
            destination_shard_id == current_shard_id,
            ERROR_TARGET_CALL_FAILED
        );
    }

    fn validate_swapper(&self, swapper: &ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(swapper),
            ERROR_INVALID_SWAPPER
        );
        self.validate_same_shard(swapper);
    }
}
