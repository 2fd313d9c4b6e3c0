use common_proxies::wegld_proxy;

multiversx_sc::imports!();

/// Keeps EGLD and WEGLD interchangeable for the pool.
///
/// The pool accounts for both forms as one logical asset and converts through the WEGLD
/// wrapper contract only when a transfer needs a form it does not hold enough of.
#[multiversx_sc::module]
pub trait WrappingModule:
    common_ledger::LedgerModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    #[view(getWrapperAddress)]
    #[storage_mapper("wrapper_address")]
    fn wrapper_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// EGLD or the wrapped token.
    fn is_native_form(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        token.is_egld() || *token == self.asset().get()
    }

    /// Both forms together.
    fn native_custody(&self) -> BigUint {
        let wegld = self.blockchain().get_sc_balance(&self.asset().get(), 0);
        let egld = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        wegld + egld
    }

    fn wrap_egld(&self, amount: &BigUint) {
        if *amount == 0 {
            return;
        }

        self.tx()
            .to(self.wrapper_address().get())
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .wrap_egld()
            .egld(amount)
            .sync_call();
    }

    fn unwrap_wegld(&self, amount: &BigUint) {
        if *amount == 0 {
            return;
        }

        let wegld = self.asset().get().unwrap_esdt();
        self.tx()
            .to(self.wrapper_address().get())
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .unwrap_egld()
            .single_esdt(&wegld, 0, amount)
            .sync_call();
    }

    /// Converts between forms so the pool holds at least `egld_needed` EGLD and
    /// `wegld_needed` WEGLD. The caller checks that both fit in the native custody.
    fn ensure_native_forms(&self, egld_needed: &BigUint, wegld_needed: &BigUint) {
        let egld_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let wegld_balance = self.blockchain().get_sc_balance(&self.asset().get(), 0);

        if *egld_needed > egld_balance {
            self.unwrap_wegld(&(egld_needed - &egld_balance));
        } else if *wegld_needed > wegld_balance {
            self.wrap_egld(&(wegld_needed - &wegld_balance));
        }
    }

    /// Makes `amount` available in the form of `token`.
    fn ensure_native_form(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        if token.is_egld() {
            self.ensure_native_forms(amount, &BigUint::zero());
        } else {
            self.ensure_native_forms(&BigUint::zero(), amount);
        }
    }
}
