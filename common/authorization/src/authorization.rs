#![no_std]

use common_constants::{DOMAIN_TYPE_TAG, SIGNATURE_LENGTH, SIGNING_DOMAIN_VERSION};
use common_errors::{ERROR_EXPIRED_SIGNATURE, ERROR_INVALID_SIGNATURE, ERROR_NONCE_ALREADY_USED};
use common_structs::{BorrowAuthorization, BorrowKind, Role, SwapFill, TargetCall};

multiversx_sc::imports!();

use multiversx_sc::contract_base::ManagedSerializer;

pub type Digest<M> = ManagedByteArray<M, 32>;

/// Verifies borrow authorizations co-signed by the MPC signer.
///
/// The signed digest is `keccak256(domain_separator ++ keccak256(type_tag ++ message))`, where
/// `message` is the nested encoding of a [`BorrowAuthorization`]. The message carries the pool
/// address and the chain id, the domain separator carries the pool name and signing version.
#[multiversx_sc::module]
pub trait AuthorizationModule:
    common_access::roles::AccessControlModule + common_events::EventsModule
{
    /// Rotates the MPC signer. Nonces are tracked per signer, so a new signer starts with a
    /// fresh nonce space and the old signer's authorizations stop verifying.
    #[endpoint(setMPCAddress)]
    fn set_mpc_address(&self, mpc_address: ManagedAddress) {
        self.require_role(Role::Admin);
        self.set_mpc_address_internal(&mpc_address);
    }

    #[view(getMpcAddress)]
    #[storage_mapper("mpc_address")]
    fn mpc_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getChainId)]
    #[storage_mapper("chain_id")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getDomainName)]
    #[storage_mapper("domain_name")]
    fn domain_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("used_nonces")]
    fn used_nonces(&self, signer: &ManagedAddress) -> WhitelistMapper<u64>;

    #[view(isNonceUsed)]
    fn is_nonce_used(&self, signer: ManagedAddress, nonce: u64) -> bool {
        self.used_nonces(&signer).contains(&nonce)
    }

    /// Digest an MPC signer has to sign to authorize `borrow`, or `borrowAndSwap` when
    /// `opt_swap` is given.
    #[view(getBorrowDigest)]
    fn get_borrow_digest(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
        nonce: u64,
        deadline: u64,
        opt_swap: OptionalValue<SwapFill<Self::Api>>,
    ) -> ManagedBuffer {
        let mut borrows = ManagedVec::new();
        borrows.push(EgldOrEsdtTokenPayment::new(token, 0, amount));
        let authorization = self.build_authorization(
            borrows,
            &target,
            &TargetCall::new(endpoint, arguments),
            nonce,
            deadline,
            opt_swap.into_option(),
        );

        self.authorization_digest(BorrowKind::Single, &authorization)
            .as_managed_buffer()
            .clone()
    }

    /// Digest an MPC signer has to sign to authorize `borrowMany`, or `borrowAndSwapMany`
    /// when `opt_swap` is given.
    #[view(getBorrowManyDigest)]
    fn get_borrow_many_digest(
        &self,
        tokens: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
        target: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
        nonce: u64,
        deadline: u64,
        opt_swap: OptionalValue<SwapFill<Self::Api>>,
    ) -> ManagedBuffer {
        let mut borrows = ManagedVec::new();
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            borrows.push(EgldOrEsdtTokenPayment::new(
                (*token).clone(),
                0,
                (*amount).clone(),
            ));
        }
        let authorization = self.build_authorization(
            borrows,
            &target,
            &TargetCall::new(endpoint, arguments),
            nonce,
            deadline,
            opt_swap.into_option(),
        );

        self.authorization_digest(BorrowKind::Many, &authorization)
            .as_managed_buffer()
            .clone()
    }

    fn init_authorization(
        &self,
        mpc_address: &ManagedAddress,
        chain_id: &ManagedBuffer,
        domain_name: &ManagedBuffer,
    ) {
        self.set_mpc_address_internal(mpc_address);
        self.chain_id().set(chain_id);
        self.domain_name().set(domain_name);
    }

    fn set_mpc_address_internal(&self, mpc_address: &ManagedAddress) {
        self.require_non_zero_address(mpc_address);
        self.mpc_address().set(mpc_address);
        self.mpc_address_set_event(mpc_address);
    }

    fn build_authorization(
        &self,
        borrows: ManagedVec<EgldOrEsdtTokenPayment>,
        target: &ManagedAddress,
        target_call: &TargetCall<Self::Api>,
        nonce: u64,
        deadline: u64,
        swap: Option<SwapFill<Self::Api>>,
    ) -> BorrowAuthorization<Self::Api> {
        BorrowAuthorization {
            pool: self.blockchain().get_sc_address(),
            chain_id: self.chain_id().get(),
            borrows,
            target: target.clone(),
            target_call: target_call.clone(),
            nonce,
            deadline,
            swap,
        }
    }

    fn domain_separator(&self) -> Digest<Self::Api> {
        let serializer: ManagedSerializer<Self::Api> = ManagedSerializer::new();
        let version: ManagedBuffer<Self::Api> =
            ManagedBuffer::new_from_bytes(SIGNING_DOMAIN_VERSION);
        let fields = (self.domain_name().get(), version);

        let mut domain = ManagedBuffer::new_from_bytes(DOMAIN_TYPE_TAG);
        domain.append(&serializer.top_encode_to_managed_buffer(&fields));

        self.crypto().keccak256(&domain)
    }

    fn authorization_digest(
        &self,
        kind: BorrowKind,
        authorization: &BorrowAuthorization<Self::Api>,
    ) -> Digest<Self::Api> {
        let serializer: ManagedSerializer<Self::Api> = ManagedSerializer::new();
        let mut message = ManagedBuffer::new_from_bytes(kind.type_tag());
        message.append(&serializer.top_encode_to_managed_buffer(authorization));
        let message_hash = self.crypto().keccak256(&message);

        let mut payload = self.domain_separator().as_managed_buffer().clone();
        payload.append(message_hash.as_managed_buffer());

        self.crypto().keccak256(&payload)
    }

    /// Checks deadline, nonce freshness and signature, then consumes the nonce.
    ///
    /// A well formed signature that does not match the digest aborts inside the VM crypto
    /// hook, which reverts the transaction like any other failed check.
    fn verify_authorization(
        &self,
        kind: BorrowKind,
        authorization: &BorrowAuthorization<Self::Api>,
        signature: &ManagedBuffer,
    ) {
        require!(
            self.blockchain().get_block_timestamp() <= authorization.deadline,
            ERROR_EXPIRED_SIGNATURE
        );

        let signer = self.mpc_address().get();
        let used_nonces = self.used_nonces(&signer);
        require!(
            !used_nonces.contains(&authorization.nonce),
            ERROR_NONCE_ALREADY_USED
        );
        require!(signature.len() == SIGNATURE_LENGTH, ERROR_INVALID_SIGNATURE);

        let digest = self.authorization_digest(kind, authorization);
        self.crypto().verify_ed25519(
            signer.as_managed_buffer(),
            digest.as_managed_buffer(),
            signature,
        );

        used_nonces.add(&authorization.nonce);
    }
}
