multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_SETTLED, ERR_NO_CONTRIBUTION};
use crate::types::Contribution;

// ============================================================
// Contribution Ledger
// Sparse: an entry exists only for (pool, round, owner)
// triples that received at least one deposit.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: crate::storage::StorageModule {
    /// Creates the entry on first deposit, otherwise accumulates into it.
    fn record_deposit(
        &self,
        pool_id: u64,
        round_id: u64,
        owner: &ManagedAddress,
        amount: &BigUint,
    ) {
        let mapper = self.contributions(pool_id, round_id, owner);
        let mut entry = if mapper.is_empty() {
            self.round_contributors(pool_id, round_id)
                .insert(owner.clone());
            Contribution {
                owner: owner.clone(),
                round_id,
                amount: BigUint::zero(),
                settled: false,
            }
        } else {
            mapper.get()
        };

        entry.amount += amount;
        mapper.set(&entry);
    }

    fn require_unsettled(
        &self,
        pool_id: u64,
        round_id: u64,
        owner: &ManagedAddress,
    ) -> Contribution<Self::Api> {
        let mapper = self.contributions(pool_id, round_id, owner);
        require!(!mapper.is_empty(), ERR_NO_CONTRIBUTION);

        let entry = mapper.get();
        require!(!entry.settled, ERR_ALREADY_SETTLED);
        entry
    }

    /// Final step of a settlement, after the payout succeeded.
    fn mark_settled(&self, pool_id: u64, entry: &mut Contribution<Self::Api>) {
        entry.settled = true;
        self.contributions(pool_id, entry.round_id, &entry.owner)
            .set(&*entry);
    }
}
