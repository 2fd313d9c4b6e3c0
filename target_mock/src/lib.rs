#![no_std]

multiversx_sc::imports!();

/// Stand-in for a borrow target: a solver or settlement contract receiving borrowed funds.
#[multiversx_sc::contract]
pub trait TargetMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Keeps the funds and records what arrived
    #[payable]
    #[endpoint(fill)]
    fn fill(&self, receipt: ManagedBuffer) {
        let payments = self.call_value().all_transfers();
        for payment in payments.iter() {
            sc_print!("Fill: received {}", payment.amount);
            self.received(&payment.token_identifier)
                .update(|received| *received += &payment.amount);
        }

        self.last_receipt().set(receipt);
    }

    // Fails after receiving the funds, the whole borrow has to roll back
    #[payable]
    #[endpoint(fillAndReject)]
    fn fill_and_reject(&self) {
        sc_panic!("Fill rejected");
    }

    // Calls back into the pool while the borrow is still running and records the outcome
    #[payable]
    #[endpoint(reenter)]
    fn reenter(
        &self,
        pool: ManagedAddress,
        endpoint: ManagedBuffer,
        arguments: ManagedArgBuffer<Self::Api>,
    ) {
        let result = self
            .tx()
            .to(&pool)
            .raw_call(endpoint)
            .arguments_raw(arguments)
            .returns(ReturnsHandledOrError::new())
            .sync_call_fallible();

        self.reentry_rejected().set(result.is_err());
    }

    #[view(isReentryRejected)]
    #[storage_mapper("reentry_rejected")]
    fn reentry_rejected(&self) -> SingleValueMapper<bool>;

    #[view(getReceived)]
    #[storage_mapper("received")]
    fn received(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getLastReceipt)]
    #[storage_mapper("last_receipt")]
    fn last_receipt(&self) -> SingleValueMapper<ManagedBuffer>;
}
