use common_constants::MAX_ASSET_DECIMALS;
use common_errors::{
    ERROR_ASSET_ALREADY_SUPPORTED, ERROR_ASSET_NOT_SUPPORTED, ERROR_CANNOT_REMOVE_PRINCIPAL_ASSET,
    ERROR_INVALID_ASSET, ERROR_INVALID_DECIMALS,
};
use common_structs::Role;

multiversx_sc::imports!();

/// Registry of interchangeable stablecoins and their decimals.
///
/// Balances of registered assets are compared at 1:1 value after scaling to the decimals of
/// the principal asset.
#[multiversx_sc::module]
pub trait AssetsModule:
    common_ledger::LedgerModule
    + common_access::roles::AccessControlModule
    + common_access::pause::PauseModule
    + common_events::EventsModule
{
    #[endpoint(addSupportedAsset)]
    fn add_supported_asset(&self, token: EgldOrEsdtTokenIdentifier, decimals: usize) {
        self.require_role(Role::Admin);
        self.register_asset(&token, decimals);
    }

    #[endpoint(removeSupportedAsset)]
    fn remove_supported_asset(&self, token: EgldOrEsdtTokenIdentifier) {
        self.require_role(Role::Admin);
        require!(
            token != self.asset().get(),
            ERROR_CANNOT_REMOVE_PRINCIPAL_ASSET
        );
        require!(
            self.supported_assets().swap_remove(&token),
            ERROR_ASSET_NOT_SUPPORTED
        );

        self.asset_decimals(&token).clear();
        self.supported_asset_removed_event(&token);
    }

    #[view(getSupportedAssets)]
    #[storage_mapper("supported_assets")]
    fn supported_assets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getAssetDecimals)]
    #[storage_mapper("asset_decimals")]
    fn asset_decimals(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<usize>;

    fn register_asset(&self, token: &EgldOrEsdtTokenIdentifier, decimals: usize) {
        require!(token.is_valid(), ERROR_INVALID_ASSET);
        require!(decimals <= MAX_ASSET_DECIMALS, ERROR_INVALID_DECIMALS);
        require!(
            self.supported_assets().insert(token.clone()),
            ERROR_ASSET_ALREADY_SUPPORTED
        );

        self.asset_decimals(token).set(decimals);
        self.supported_asset_added_event(token, decimals);
    }

    fn is_supported(&self, token: &EgldOrEsdtTokenIdentifier) -> bool {
        self.supported_assets().contains(token)
    }

    /// Scales `amount` of `token` to the decimals of the principal asset.
    fn to_principal_units(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) -> BigUint {
        let principal_decimals = self.asset_decimals(&self.asset().get()).get();
        let value: ManagedDecimal<Self::Api, NumDecimals> =
            ManagedDecimal::from_raw_units(amount.clone(), self.asset_decimals(token).get());

        value.rescale(principal_decimals).into_raw_units().clone()
    }

    /// Inverse of `to_principal_units`, rounding down.
    fn from_principal_units(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let principal_decimals = self.asset_decimals(&self.asset().get()).get();
        let value: ManagedDecimal<Self::Api, NumDecimals> =
            ManagedDecimal::from_raw_units(amount.clone(), principal_decimals);

        value
            .rescale(self.asset_decimals(token).get())
            .into_raw_units()
            .clone()
    }
}
