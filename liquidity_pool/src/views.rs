multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    common_ledger::LedgerModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// Custody of the principal asset; zero for any other token.
    #[view(getBalance)]
    fn get_balance(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        if token == self.asset().get() {
            self.custody(&token)
        } else {
            BigUint::zero()
        }
    }

    #[view(getProfit)]
    fn get_profit(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.profit_of(&token, &self.custody(&token))
    }

    fn custody(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(token, 0)
    }
}
