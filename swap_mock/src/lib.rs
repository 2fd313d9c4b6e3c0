#![no_std]

multiversx_sc::imports!();

/// Stand-in for a contract that borrows through `borrowAndSwap` and performs the swap.
#[multiversx_sc::contract]
pub trait SwapMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Keeps the borrowed funds and pays the fill token back from its own balance.
    // `swap_data` holds the big-endian amount to return; empty means exactly `fill_amount`.
    #[payable]
    #[endpoint(swap)]
    fn swap(
        &self,
        fill_token: EgldOrEsdtTokenIdentifier,
        fill_amount: BigUint,
        swap_data: ManagedBuffer,
    ) {
        let caller = self.blockchain().get_caller();
        let amount = if swap_data.is_empty() {
            fill_amount
        } else {
            BigUint::from_bytes_be_buffer(&swap_data)
        };
        sc_print!("Swap: returning {}", amount);

        if amount > 0 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&fill_token, 0, &amount)
                .transfer();
        }
    }
}
