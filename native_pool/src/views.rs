multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::wrapping::WrappingModule
    + common_ledger::LedgerModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// EGLD and WEGLD both report the combined native custody. Other tokens report zero.
    #[view(getBalance)]
    fn get_balance(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        if self.is_native_form(&token) {
            self.native_custody()
        } else {
            BigUint::zero()
        }
    }

    #[view(getProfit)]
    fn get_profit(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        if self.is_native_form(&token) {
            self.profit_of(&self.asset().get(), &self.native_custody())
        } else {
            self.blockchain().get_sc_balance(&token, 0)
        }
    }
}
