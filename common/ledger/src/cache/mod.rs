multiversx_sc::imports!();

/// In-memory snapshot of the principal ledger.
///
/// Reads `total_deposited` once and writes it back when dropped. Drop it before handing
/// control to external code so that a reentrant call never observes a stale snapshot.
pub struct Cache<'a, C>
where
    C: crate::LedgerModule,
{
    sc_ref: &'a C,
    /// Principal credited through deposits, net of withdrawals.
    pub total_deposited: BigUint<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::LedgerModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            total_deposited: sc_ref.total_deposited().get(),
            sc_ref,
        }
    }

    /// Whether custody still covers the principal after adding `amount` to it.
    pub fn covers(&self, custody: &BigUint<C::Api>, amount: &BigUint<C::Api>) -> bool {
        *custody >= &self.total_deposited + amount
    }

    /// Whether `amount` of principal can leave the pool.
    pub fn can_release(&self, custody: &BigUint<C::Api>, amount: &BigUint<C::Api>) -> bool {
        *amount <= self.total_deposited && *custody >= *amount
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::LedgerModule,
{
    fn drop(&mut self) {
        self.sc_ref.total_deposited().set(&self.total_deposited);
    }
}
