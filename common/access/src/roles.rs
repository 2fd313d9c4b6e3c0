use common_errors::{ERROR_UNAUTHORIZED_ACCOUNT, ERROR_ZERO_ADDRESS};
use common_structs::Role;

multiversx_sc::imports!();

/// Role based access control shared by every pool.
///
/// `Admin` manages all roles, including its own. Any account can renounce a role it holds.
#[multiversx_sc::module]
pub trait AccessControlModule: common_events::EventsModule {
    /// Grants `role` to `account`. Granting an already held role is a no-op.
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin);
        self.grant_role_internal(role, &account);
    }

    /// Revokes `role` from `account`. Revoking a role that is not held is a no-op.
    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role(Role::Admin);
        self.revoke_role_internal(role, &account);
    }

    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        self.revoke_role_internal(role, &caller);
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: ManagedAddress) -> bool {
        self.role_members(role).contains(&account)
    }

    /// Accounts currently holding `role`.
    #[view(getRoleMembers)]
    #[storage_mapper("role_members")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(
            self.role_members(role).contains(&caller),
            ERROR_UNAUTHORIZED_ACCOUNT
        );
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ZERO_ADDRESS);
    }

    fn grant_role_internal(&self, role: Role, account: &ManagedAddress) {
        self.require_non_zero_address(account);
        if self.role_members(role).insert(account.clone()) {
            let sender = self.blockchain().get_caller();
            self.role_granted_event(role, account, &sender);
        }
    }

    fn revoke_role_internal(&self, role: Role, account: &ManagedAddress) {
        if self.role_members(role).swap_remove(account) {
            let sender = self.blockchain().get_caller();
            self.role_revoked_event(role, account, &sender);
        }
    }
}
