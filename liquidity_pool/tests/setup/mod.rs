use crate::constants::*;

use common_proxies::{liquidity_pool_proxy, target_mock_proxy};
use common_structs::{Role, SwapFill};
use ed25519_dalek::{Signer, SigningKey};

use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, ManagedAddress,
        ManagedArgBuffer, ManagedBuffer, ManagedVec, MultiValueEncoded, ReturnsNewManagedAddress,
        ReturnsResult, TestAddress, TestEsdtTransfer, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ExpectStatus},
    ScenarioTxRun, ScenarioWorld,
};

/// Status the VM reports when `verify_ed25519` rejects a signature.
pub const SIGNATURE_REJECTED: u64 = 10;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(LIQUIDITY_POOL_PATH, liquidity_pool::ContractBuilder);
    blockchain.register_contract(TARGET_MOCK_PATH, target_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);

    blockchain
}

pub fn usdc() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier())
}

pub fn usdt() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDT_TOKEN.to_token_identifier())
}

pub fn xoxno() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(XOXNO_TOKEN.to_token_identifier())
}

pub fn mpc_address(key: &SigningKey) -> ManagedAddress<StaticApi> {
    ManagedAddress::new_from_bytes(&key.verifying_key().to_bytes())
}

/// Everything an MPC authorization covers, plus the entry point it is submitted to.
#[derive(Clone)]
pub struct BorrowRequest {
    pub borrows: Vec<(EgldOrEsdtTokenIdentifier<StaticApi>, u64)>,
    pub many: bool,
    pub target: ManagedAddress<StaticApi>,
    pub endpoint: ManagedBuffer<StaticApi>,
    pub arguments: ManagedArgBuffer<StaticApi>,
    pub nonce: u64,
    pub deadline: u64,
    pub swap: Option<SwapFill<StaticApi>>,
    /// Appended to the amount list only, to submit lists of different lengths.
    pub extra_amounts: Vec<u64>,
}

impl BorrowRequest {
    /// A single borrow handed to the target's `fill` endpoint with a receipt argument.
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
            deadline: DEADLINE,
            swap: None,
            extra_amounts: Vec::new(),
        }
    }

    /// A single borrow sent as a plain transfer.
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
            deadline: DEADLINE,
            swap: None,
            extra_amounts: Vec::new(),
        }
    }

    pub fn with_borrows(mut self, borrows: Vec<(EgldOrEsdtTokenIdentifier<StaticApi>, u64)>) -> Self {
        self.borrows = borrows;
        self.many = true;
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str, arguments: ManagedArgBuffer<StaticApi>) -> Self {
        self.endpoint = ManagedBuffer::from(endpoint);
        self.arguments = arguments;
        self
    }

    /// `returned` is what the swap mock hands back; `fill_amount` is the signed minimum.
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
        for amount in self.extra_amounts.iter() {
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

enum Outcome<'a> {
    Success,
    Message(&'a [u8]),
    Status(u64),
}

pub struct PoolTestState {
    pub world: ScenarioWorld,
    pub pool: ManagedAddress<StaticApi>,
    pub target: ManagedAddress<StaticApi>,
    pub swapper: ManagedAddress<StaticApi>,
    pub mpc_key: SigningKey,
}

impl PoolTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(NOW);

        let mpc_key = SigningKey::from_bytes(&MPC_SEED);
        let pool = deploy_pool(&mut world, usdc(), &mpc_key);
        grant_operator_roles(&mut world, &pool);

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
            .typed(common_proxies::swap_mock_proxy::SwapMockProxy)
            .init()
            .code(SWAP_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        // The swapper pays fills out of its own stock of USDT
        world.set_esdt_balance(
            swapper.clone(),
            USDT_TOKEN.as_bytes(),
            BigUint::<StaticApi>::from(SWAPPER_BALANCE),
        );

        Self {
            world,
            pool,
            target,
            swapper,
            mpc_key,
        }
    }

    /// Pool with `amount` USDC deposited by the liquidity admin.
    pub fn funded(amount: u64) -> Self {
        let mut state = Self::new();
        state.deposit_with_pull(amount);
        state
    }

    pub fn deploy_second_pool(&mut self) -> ManagedAddress<StaticApi> {
        let pool = deploy_pool(&mut self.world, usdc(), &self.mpc_key);
        grant_operator_roles(&mut self.world, &pool);
        pool
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Liquidity

    pub fn deposit_with_pull(&mut self, amount: u64) {
        let pool = self.pool.clone();
        self.deposit_with_pull_to(&pool, amount);
    }

    pub fn deposit_with_pull_to(&mut self, pool: &ManagedAddress<StaticApi>, amount: u64) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .deposit_with_pull(amount)
            .esdt(TestEsdtTransfer(USDC_TOKEN, 0, amount))
            .run();
    }

    pub fn deposit_with_pull_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        paid: u64,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .deposit_with_pull(amount)
            .esdt(TestEsdtTransfer(token, 0, paid))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Deposit with an optional attached USDC payment.
    pub fn deposit(&mut self, amount: u64, paid: u64) {
        let call = self
            .world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .deposit(amount);
        if paid > 0 {
            call.esdt(TestEsdtTransfer(USDC_TOKEN, 0, paid)).run();
        } else {
            call.run();
        }
    }

    pub fn deposit_error(&mut self, from: &TestAddress, amount: u64, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .deposit(amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(&mut self, to: &TestAddress, amount: u64) {
        self.world
            .tx()
            .from(LIQUIDITY_ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .withdraw(to.to_managed_address(), amount)
            .run();
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        to: ManagedAddress<StaticApi>,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .withdraw(to, amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw_profit(
        &mut self,
        to: &TestAddress,
        tokens: Vec<EgldOrEsdtTokenIdentifier<StaticApi>>,
    ) -> ManagedVec<StaticApi, EgldOrEsdtTokenPayment<StaticApi>> {
        self.world
            .tx()
            .from(TREASURY_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .withdraw_profit(to.to_managed_address(), MultiValueEncoded::from_iter(tokens))
            .returns(ReturnsResult)
            .run()
    }

    pub fn withdraw_profit_error(
        &mut self,
        from: &TestAddress,
        to: ManagedAddress<StaticApi>,
        tokens: Vec<EgldOrEsdtTokenIdentifier<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .withdraw_profit(to, MultiValueEncoded::from_iter(tokens))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Sets the pool's holding of `token` as if funds arrived outside of any endpoint.
    pub fn set_pool_balance(&mut self, token: TestTokenIdentifier, amount: u64) {
        self.world.set_esdt_balance(
            self.pool.clone(),
            token.as_bytes(),
            BigUint::<StaticApi>::from(amount),
        );
    }

    // Access

    pub fn grant_role(&mut self, role: Role, account: &TestAddress) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .grant_role(role, account.to_managed_address())
            .run();
    }

    pub fn grant_role_error(
        &mut self,
        from: &TestAddress,
        role: Role,
        account: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .grant_role(role, account)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn revoke_role(&mut self, role: Role, account: &TestAddress) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .revoke_role(role, account.to_managed_address())
            .run();
    }

    pub fn renounce_role(&mut self, from: &TestAddress, role: Role) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .renounce_role(role)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(PAUSER_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .pause()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(PAUSER_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .unpause()
            .run();
    }

    pub fn pause_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .pause()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn unpause_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .unpause()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn pause_borrow(&mut self) {
        self.world
            .tx()
            .from(TREASURY_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .pause_borrow()
            .run();
    }

    pub fn unpause_borrow(&mut self) {
        self.world
            .tx()
            .from(TREASURY_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .unpause_borrow()
            .run();
    }

    pub fn pause_borrow_error(&mut self, from: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .pause_borrow()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_mpc_address(&mut self, mpc_address: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .set_mpc_address(mpc_address)
            .run();
    }

    pub fn set_mpc_address_error(
        &mut self,
        from: &TestAddress,
        mpc_address: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .set_mpc_address(mpc_address)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Borrowing

    pub fn sign(&mut self, key: &SigningKey, request: &BorrowRequest) -> ManagedBuffer<StaticApi> {
        let pool = self.pool.clone();
        self.sign_for(&pool, key, request)
    }

    /// Signs the digest `pool` computes for `request`.
    pub fn sign_for(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        key: &SigningKey,
        request: &BorrowRequest,
    ) -> ManagedBuffer<StaticApi> {
        let digest = self.borrow_digest(pool, request);
        let signature = key.sign(digest.to_boxed_bytes().as_slice());
        ManagedBuffer::new_from_bytes(&signature.to_bytes())
    }

    pub fn borrow_digest(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        request: &BorrowRequest,
    ) -> ManagedBuffer<StaticApi> {
        if request.many {
            self.world
                .query()
                .to(pool)
                .typed(liquidity_pool_proxy::LiquidityPoolProxy)
                .get_borrow_many_digest(
                    request.tokens(),
                    request.amounts(),
                    request.target.clone(),
                    request.endpoint.clone(),
                    request.arguments.clone(),
                    request.nonce,
                    request.deadline,
                    request.opt_swap(),
                )
                .returns(ReturnsResult)
                .run()
        } else {
            let (token, amount) = request.borrows[0].clone();
            self.world
                .query()
                .to(pool)
                .typed(liquidity_pool_proxy::LiquidityPoolProxy)
                .get_borrow_digest(
                    token,
                    BigUint::from(amount),
                    request.target.clone(),
                    request.endpoint.clone(),
                    request.arguments.clone(),
                    request.nonce,
                    request.deadline,
                    request.opt_swap(),
                )
                .returns(ReturnsResult)
                .run()
        }
    }

    pub fn sign_mpc(&mut self, request: &BorrowRequest) -> ManagedBuffer<StaticApi> {
        let key = self.mpc_key.clone();
        self.sign(&key, request)
    }

    /// Signs `request` with the MPC key and submits it from the relayer.
    pub fn borrow(&mut self, request: &BorrowRequest) {
        let signature = self.sign_mpc(request);
        self.submit(&RELAYER_ADDRESS.to_managed_address(), request, signature);
    }

    pub fn submit(
        &mut self,
        from: &ManagedAddress<StaticApi>,
        request: &BorrowRequest,
        signature: ManagedBuffer<StaticApi>,
    ) {
        let pool = self.pool.clone();
        self.submit_with(&pool, from, request, signature, Outcome::Success);
    }

    pub fn submit_error(
        &mut self,
        from: &ManagedAddress<StaticApi>,
        request: &BorrowRequest,
        signature: ManagedBuffer<StaticApi>,
        error_message: &[u8],
    ) {
        let pool = self.pool.clone();
        self.submit_with(&pool, from, request, signature, Outcome::Message(error_message));
    }

    /// Submits `request` to `pool` and expects the VM to reject the signature.
    pub fn submit_rejected_signature(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        request: &BorrowRequest,
        signature: ManagedBuffer<StaticApi>,
    ) {
        self.submit_with(
            pool,
            &RELAYER_ADDRESS.to_managed_address(),
            request,
            signature,
            Outcome::Status(SIGNATURE_REJECTED),
        );
    }

    fn submit_with(
        &mut self,
        pool: &ManagedAddress<StaticApi>,
        from: &ManagedAddress<StaticApi>,
        request: &BorrowRequest,
        signature: ManagedBuffer<StaticApi>,
        outcome: Outcome,
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy);
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
                request.deadline,
                signature,
            ),
            (None, true) => tx.borrow_many(
                request.tokens(),
                request.amounts(),
                target,
                endpoint,
                arguments,
                request.nonce,
                request.deadline,
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
                request.deadline,
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
                request.deadline,
                signature,
            ),
        };

        match outcome {
            Outcome::Success => {
                call.run();
            }
            Outcome::Message(error_message) => {
                call.returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
                    .run();
            }
            Outcome::Status(status) => {
                call.returns(ExpectStatus(status)).run();
            }
        }
    }

    // Views

    pub fn total_deposited(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .total_deposited()
            .returns(ReturnsResult)
            .run()
    }

    pub fn balance(&mut self, token: EgldOrEsdtTokenIdentifier<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .get_balance(token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn profit(&mut self, token: EgldOrEsdtTokenIdentifier<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .get_profit(token)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_nonce_used(&mut self, nonce: u64) -> bool {
        let signer = mpc_address(&self.mpc_key);
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .is_nonce_used(signer, nonce)
            .returns(ReturnsResult)
            .run()
    }

    pub fn has_role(&mut self, role: Role, account: &TestAddress) -> bool {
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .has_role(role, account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_paused(&mut self) -> bool {
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .paused()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_borrow_paused(&mut self) -> bool {
        self.world
            .query()
            .to(&self.pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .borrow_paused()
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

    pub fn target_receipt(&mut self) -> ManagedBuffer<StaticApi> {
        self.world
            .query()
            .to(&self.target)
            .typed(target_mock_proxy::TargetMockProxy)
            .last_receipt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn target_reentry_rejected(&mut self) -> bool {
        self.world
            .query()
            .to(&self.target)
            .typed(target_mock_proxy::TargetMockProxy)
            .reentry_rejected()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_pool_balance(&mut self, token: TestTokenIdentifier, amount: u64) {
        self.world
            .check_account(self.pool.clone())
            .esdt_balance(token, amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, ACCOUNT_BALANCE)
        .esdt_balance(USDT_TOKEN, ACCOUNT_BALANCE)
        .esdt_balance(XOXNO_TOKEN, ACCOUNT_BALANCE);
    world
        .account(LIQUIDITY_ADMIN_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, ACCOUNT_BALANCE)
        .esdt_balance(USDT_TOKEN, ACCOUNT_BALANCE);
    world.account(ADMIN_ADDRESS).nonce(1);
    world.account(TREASURY_ADDRESS).nonce(1);
    world.account(PAUSER_ADDRESS).nonce(1);
    world
        .account(RELAYER_ADDRESS)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, ACCOUNT_BALANCE);
    world.account(RECEIVER_ADDRESS).nonce(1);
}

pub fn deploy_pool(
    world: &mut ScenarioWorld,
    asset: EgldOrEsdtTokenIdentifier<StaticApi>,
    mpc_key: &SigningKey,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(liquidity_pool_proxy::LiquidityPoolProxy)
        .init(
            asset,
            ADMIN_ADDRESS,
            mpc_address(mpc_key),
            ManagedBuffer::<StaticApi>::from(CHAIN_ID),
            ManagedBuffer::<StaticApi>::from(DOMAIN_NAME),
        )
        .code(LIQUIDITY_POOL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_pool_error(
    world: &mut ScenarioWorld,
    admin: ManagedAddress<StaticApi>,
    mpc_address: ManagedAddress<StaticApi>,
    error_message: &[u8],
) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(liquidity_pool_proxy::LiquidityPoolProxy)
        .init(
            usdc(),
            admin,
            mpc_address,
            ManagedBuffer::<StaticApi>::from(CHAIN_ID),
            ManagedBuffer::<StaticApi>::from(DOMAIN_NAME),
        )
        .code(LIQUIDITY_POOL_PATH)
        .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
        .run();
}

pub fn grant_operator_roles(world: &mut ScenarioWorld, pool: &ManagedAddress<StaticApi>) {
    for (role, account) in [
        (Role::LiquidityAdmin, LIQUIDITY_ADMIN_ADDRESS),
        (Role::WithdrawProfit, TREASURY_ADDRESS),
        (Role::Pauser, PAUSER_ADDRESS),
    ] {
        world
            .tx()
            .from(ADMIN_ADDRESS)
            .to(pool)
            .typed(liquidity_pool_proxy::LiquidityPoolProxy)
            .grant_role(role, account)
            .run();
    }
}
