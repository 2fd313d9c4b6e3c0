multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::assets::AssetsModule
    + common_ledger::LedgerModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    /// Custody of a registered asset; zero for anything else.
    #[view(getBalance)]
    fn get_balance(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        if self.is_supported(&token) {
            self.custody(&token)
        } else {
            BigUint::zero()
        }
    }

    /// What `withdrawProfit` would pay for `token` if it were requested on its own.
    /// Zero for a registered non-principal asset while the borrow is not covered.
    #[view(getProfit)]
    fn get_profit(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        let asset = self.asset().get();
        if token == asset || !self.is_supported(&token) {
            return self.profit_of(&token, &self.custody(&token));
        }

        let covering = self.non_principal_custody();
        let outstanding = self.get_outstanding_borrow();
        if covering <= outstanding {
            return BigUint::zero();
        }

        let releasable = covering - outstanding;
        let balance = self.to_principal_units(&token, &self.custody(&token));
        let share = if balance < releasable {
            balance
        } else {
            releasable
        };
        self.from_principal_units(&token, &share)
    }

    /// Principal that is out on loan and not back in the principal asset, in principal units.
    #[view(getOutstandingBorrow)]
    fn get_outstanding_borrow(&self) -> BigUint {
        self.shortfall_of(&self.custody(&self.asset().get()))
    }

    fn custody(&self, token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(token, 0)
    }

    /// Registered non-principal holdings, scaled to principal units.
    fn non_principal_custody(&self) -> BigUint {
        let asset = self.asset().get();
        let mut total = BigUint::zero();
        for token in self.supported_assets().iter() {
            if token == asset {
                continue;
            }
            total += self.to_principal_units(&token, &self.custody(&token));
        }
        total
    }
}
