use common_errors::{
    ERROR_BORROWING_IS_PAUSED, ERROR_BORROW_ONGOING, ERROR_ENFORCED_PAUSE, ERROR_EXPECTED_PAUSE,
};
use common_structs::Role;

multiversx_sc::imports!();

/// Two independent switches: the global pause stops every funds-moving endpoint, the
/// borrow pause only stops borrowing. The `borrow_ongoing` flag is raised while a
/// borrow hands control to external code.
#[multiversx_sc::module]
pub trait PauseModule: crate::roles::AccessControlModule + common_events::EventsModule {
    #[endpoint(pause)]
    fn pause(&self) {
        self.require_role(Role::Pauser);
        self.require_not_paused();
        self.paused().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_role(Role::Pauser);
        require!(self.paused().get(), ERROR_EXPECTED_PAUSE);
        self.paused().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    /// Circuit breaker for borrows, held by the profit withdrawer. Idempotent.
    #[endpoint(pauseBorrow)]
    fn pause_borrow(&self) {
        self.require_role(Role::WithdrawProfit);
        self.borrow_paused().set(true);
        self.borrow_paused_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpauseBorrow)]
    fn unpause_borrow(&self) {
        self.require_role(Role::WithdrawProfit);
        self.borrow_paused().set(false);
        self.borrow_unpaused_event(&self.blockchain().get_caller());
    }

    #[view(isPaused)]
    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[view(isBorrowPaused)]
    #[storage_mapper("borrow_paused")]
    fn borrow_paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("borrow_ongoing")]
    fn borrow_ongoing(&self) -> SingleValueMapper<bool>;

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERROR_ENFORCED_PAUSE);
    }

    fn require_borrow_not_paused(&self) {
        require!(!self.borrow_paused().get(), ERROR_BORROWING_IS_PAUSED);
    }

    fn reentrancy_guard(&self) {
        require!(!self.borrow_ongoing().get(), ERROR_BORROW_ONGOING);
    }

    /// Every endpoint that moves funds or principal starts here.
    fn require_operational(&self) {
        self.reentrancy_guard();
        self.require_not_paused();
    }
}
