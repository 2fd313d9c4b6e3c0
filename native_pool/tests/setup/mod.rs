use crate::constants::*;

use common_proxies::{native_pool_proxy, swap_mock_proxy, target_mock_proxy, wegld_proxy};
use common_structs::{Role, SwapFill};
use ed25519_dalek::{Signer, SigningKey};

use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, CodeMetadata, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, EsdtLocalRole,
        ManagedAddress, ManagedArgBuffer, ManagedBuffer, ManagedVec, MultiValueEncoded,
        ReturnsNewManagedAddress, ReturnsResult, TestAddress, TestEsdtTransfer,
    },
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun, ScenarioWorld};

pub static WRAPPER_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(NATIVE_POOL_PATH, native_pool::ContractBuilder);
    blockchain.register_contract(WEGLD_SWAP_PATH, multiversx_wegld_swap_sc::ContractBuilder);
    blockchain.register_contract(TARGET_MOCK_PATH, target_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);

    blockchain
}

pub fn egld() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::egld()
}

pub fn wegld() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(WEGLD_TOKEN.to_token_identifier())
}

pub fn usdc() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier())
}

/// A native borrow, optionally swapped, handed to `target`.
pub struct BorrowRequest {
    pub borrows: Vec<(EgldOrEsdtTokenIdentifier<StaticApi>, u64)>,
    pub many: bool,
    pub target: ManagedAddress<StaticApi>,
    pub endpoint: ManagedBuffer<StaticApi>,
    pub arguments: ManagedArgBuffer<StaticApi>,
    pub nonce: u64,
    pub swap: Option<SwapFill<StaticApi>>,
}

impl BorrowRequest {
    pub fn fill(
        token: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: u64,
        target: &ManagedAddress<StaticApi>,
        nonce: u64,
    ) -> Self {
        let mut arguments = ManagedArgBuffer::new();
        arguments.push_arg(ManagedBuffer::<StaticApi>::from("receipt"));

        BorrowRequest {
            borrows: vec![(token, amount)],
            many: false,
            target: target.clone(),
            endpoint: ManagedBuffer::from("fill"),
            arguments,
            nonce,
            swap: None,
        }
    }

    pub fn transfer(
        token: EgldOrEsdtTokenIdentifier<StaticApi>,
        amount: u64,
        to: TestAddress,
        nonce: u64,
    ) -> Self {
        BorrowRequest {
            borrows: vec![(token, amount)],
            many: false,
            target: to.to_managed_address(),
            endpoint: ManagedBuffer::new(),
            arguments: ManagedArgBuffer::new(),
            nonce,
            swap: None,
        }
    }

    pub fn with_borrows(mut self, borrows: Vec<(EgldOrEsdtTokenIdentifier<StaticApi>, u64)>) -> Self {
        self.borrows = borrows;
        self.many = true;
        self
    }

    pub fn with_swap(
        mut self,
        fill_token: EgldOrEsdtTokenIdentifier<StaticApi>,
        fill_amount: u64,
        returned: u64,
    ) -> Self {
        let swap_data = BigUint::<StaticApi>::from(returned).to_bytes_be_buffer();
        self.swap = Some(SwapFill::new(
            fill_token,
            BigUint::from(fill_amount),
            swap_data,
        ));
        self
    }

    pub fn tokens(&self) -> ManagedVec<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>> {
        let mut tokens = ManagedVec::new();
        for (token, _) in self.borrows.iter() {
            tokens.push(token.clone());
        }
        tokens
    }

    pub fn amounts(&self) -> ManagedVec<StaticApi, BigUint<StaticApi>> {
        let mut amounts = ManagedVec::new();
        for (_, amount) in self.borrows.iter() {
            amounts.push(BigUint::from(*amount));
        }
        amounts
    }

    fn opt_swap(&self) -> OptionalValue<SwapFill<StaticApi>> {
        match &self.swap {
            Some(swap) => OptionalValue::Some(swap.clone()),
            None => OptionalValue::None,
        }
    }
}

pub struct NativePoolTestState {
    pub world: ScenarioWorld,
    pub pool: ManagedAddress<StaticApi>,
    pub wrapper: ManagedAddress<StaticApi>,
    pub target: ManagedAddress<StaticApi>,
    pub swapper: ManagedAddress<StaticApi>,
    pub mpc_key: SigningKey,
}

impl NativePoolTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(NOW);

        let wrapper = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .init(WEGLD_TOKEN)
            .code(WEGLD_SWAP_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        world.set_esdt_local_roles(wrapper.clone(), WEGLD_TOKEN.as_bytes(), WRAPPER_ROLES);

        let mpc_key = SigningKey::from_bytes(&MPC_SEED);
        // Unwrapping pays EGLD back into the pool
        let pool = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(native_pool_proxy::NativePoolProxy)
            .init(
                WEGLD_TOKEN,
                wrapper.clone(),
                ADMIN_ADDRESS,
                ManagedAddress::<StaticApi>::new_from_bytes(&mpc_key.verifying_key().to_bytes()),
                ManagedBuffer::<StaticApi>::from(CHAIN_ID),
                ManagedBuffer::<StaticApi>::from(DOMAIN_NAME),
            )
            .code(NATIVE_POOL_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        for (role, account) in [
            (Role::LiquidityAdmin, LIQUIDITY_ADMIN_ADDRESS),
            (Role::WithdrawProfit, TREASURY_ADDRESS),
        ] {
            world
                .tx()
                .from(ADMIN_ADDRESS)
                .to(&pool)
                .typed(native_pool_proxy::NativePoolProxy)
                .grant_role(role, account)
                .run();
        }

        let target = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(target_mock_proxy::TargetMockProxy)
            .init()
            .code(TARGET_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let swapper = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(swap_mock_proxy::SwapMockProxy)
            .init()
            .code(SWAP_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();
        world.set_esdt_balance(
            swapper.clone(),
            USDC_TOKEN.as_bytes(),
            BigUint::<StaticApi>::from(SWAPPER_BALANCE),
        );
        world.set_egld_balance(swapper.clone(), BigUint::<StaticApi>::from(SWAPPER_BALANCE));

        Self {
            world,
            pool,
            wrapper,
            target,
            swapper,
            mpc_key,
        }
    }

    /// Pool with `amount` of principal deposited in EGLD.
    pub fn funded(amount: u64) -> Self {
        let mut state = Self::new();
        state.deposit_with_pull_egld(amount);
        state
    }

    pub fn deposit_with_pull_egld(&mut self, amount: u64) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .deposit_with_pull(amount)
            .egld(amount)
            .run();
    }

    pub fn deposit_with_pull_wegld(&mut self, amount: u64) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .deposit_with_pull(amount)
            .esdt(TestEsdtTransfer(WEGLD_TOKEN, 0, amount))
            .run();
    }

    /// Deposit of `amount` with `paid` EGLD attached.
    pub fn deposit_egld(&mut self, amount: u64, paid: u64) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .deposit(amount)
            .egld(paid)
            .run();
    }

    pub fn deposit_usdc_error(&mut self, amount: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .deposit_with_pull(amount)
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(&mut self, to: &TestAddress, amount: u64) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .withdraw(to.to_managed_address(), amount)
            .run();
    }

    pub fn withdraw_profit(
        &mut self,
        tokens: Vec<EgldOrEsdtTokenIdentifier<StaticApi>>,
    ) -> ManagedVec<StaticApi, EgldOrEsdtTokenPayment<StaticApi>> {
        self.world
            .tx()
            .from(TREASURY_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .withdraw_profit(
                TREASURY_ADDRESS.to_managed_address(),
                MultiValueEncoded::from_iter(tokens),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_profit_error(
        &mut self,
        tokens: Vec<EgldOrEsdtTokenIdentifier<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(TREASURY_ADDRESS)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .withdraw_profit(
                TREASURY_ADDRESS.to_managed_address(),
                MultiValueEncoded::from_iter(tokens),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Sets the pool's native holdings as if funds arrived outside of any endpoint.
    pub fn set_pool_balances(&mut self, wegld_amount: u64, egld_amount: u64) {
        self.world.set_esdt_balance(
            self.pool.clone(),
            WEGLD_TOKEN.as_bytes(),
            BigUint::<StaticApi>::from(wegld_amount),
        );
        self.world
            .set_egld_balance(self.pool.clone(), BigUint::<StaticApi>::from(egld_amount));
    }

    pub fn sign(&mut self, request: &BorrowRequest) -> ManagedBuffer<StaticApi> {
        let digest: ManagedBuffer<StaticApi> = if request.many {
            self.world
                .query()
                .to(&self.pool)
                .typed(native_pool_proxy::NativePoolProxy)
                .get_borrow_many_digest(
                    request.tokens(),
                    request.amounts(),
                    request.target.clone(),
                    request.endpoint.clone(),
                    request.arguments.clone(),
                    request.nonce,
                    DEADLINE,
                    request.opt_swap(),
                )
                .returns(ReturnsResult)
                .run()
        } else {
            self.world
                .query()
                .to(&self.pool)
                .typed(native_pool_proxy::NativePoolProxy)
                .get_borrow_digest(
                    request.borrows[0].0.clone(),
                    BigUint::from(request.borrows[0].1),
                    request.target.clone(),
                    request.endpoint.clone(),
                    request.arguments.clone(),
                    request.nonce,
                    DEADLINE,
                    request.opt_swap(),
                )
                .returns(ReturnsResult)
                .run()
        };

        let signature = self.mpc_key.sign(digest.to_boxed_bytes().as_slice());
        ManagedBuffer::new_from_bytes(&signature.to_bytes())
    }

    /// Signs and submits `request`. Swaps are submitted by the swapper, the rest by the relayer.
    pub fn borrow(&mut self, request: &BorrowRequest) {
        self.submit(request, None);
    }

    pub fn borrow_error(&mut self, request: &BorrowRequest, error_message: &[u8]) {
        self.submit(request, Some(error_message));
    }

    fn submit(&mut self, request: &BorrowRequest, error_message: Option<&[u8]>) {
        let signature = self.sign(request);
        let from = match request.swap {
            Some(_) => self.swapper.clone(),
            None => RELAYER_ADDRESS.to_managed_address(),
        };

        let tx = self
            .world
            .tx()
            .from(&from)
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy);
        let target = request.target.clone();
        let endpoint = request.endpoint.clone();
        let arguments = request.arguments.clone();

        let call = match (&request.swap, request.many) {
            (None, false) => tx.borrow(
                request.borrows[0].0.clone(),
                BigUint::from(request.borrows[0].1),
                target,
                endpoint,
                arguments,
                request.nonce,
                DEADLINE,
                signature,
            ),
            (None, true) => tx.borrow_many(
                request.tokens(),
                request.amounts(),
                target,
                endpoint,
                arguments,
                request.nonce,
                DEADLINE,
                signature,
            ),
            (Some(swap), false) => tx.borrow_and_swap(
                request.borrows[0].0.clone(),
                BigUint::from(request.borrows[0].1),
                swap.clone(),
                target,
                endpoint,
                arguments,
                request.nonce,
                DEADLINE,
                signature,
            ),
            (Some(swap), true) => tx.borrow_and_swap_many(
                request.tokens(),
                request.amounts(),
                swap.clone(),
                target,
                endpoint,
                arguments,
                request.nonce,
                DEADLINE,
                signature,
            ),
        };

        match error_message {
            None => {
                call.run();
            }
            Some(error_message) => {
                call.returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
                    .run();
            }
        }
    }

    pub fn total_deposited(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .total_deposited()
            .returns(ReturnsResult)
            .run()
    }

    pub fn balance(&mut self, token: EgldOrEsdtTokenIdentifier<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .get_balance(token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn profit(&mut self, token: EgldOrEsdtTokenIdentifier<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool)
            .typed(native_pool_proxy::NativePoolProxy)
            .get_profit(token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn locked_egld(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.wrapper)
            .typed(wegld_proxy::EgldEsdtSwapProxy)
            .get_locked_egld_balance()
            .returns(ReturnsResult)
            .run()
    }

    pub fn target_received(
        &mut self,
        token: EgldOrEsdtTokenIdentifier<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.target)
            .typed(target_mock_proxy::TargetMockProxy)
            .received(token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_pool_balances(&mut self, wegld_amount: u64, egld_amount: u64) {
        self.world
            .check_account(self.pool.clone())
            .esdt_balance(WEGLD_TOKEN, wegld_amount)
            .balance(egld_amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world
        .account(LIQUIDITY_ADMIN_ADDRESS)
        .nonce(1)
        .balance(ACCOUNT_BALANCE)
        .esdt_balance(WEGLD_TOKEN, ACCOUNT_BALANCE)
        .esdt_balance(USDC_TOKEN, ACCOUNT_BALANCE);
    world.account(ADMIN_ADDRESS).nonce(1);
    world.account(TREASURY_ADDRESS).nonce(1);
    world.account(RELAYER_ADDRESS).nonce(1);
    world.account(RECEIVER_ADDRESS).nonce(1);
}
