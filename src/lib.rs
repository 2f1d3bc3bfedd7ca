#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod funding_pool_proxy;
pub mod ledger;
pub mod round;
pub mod settlement;
pub mod storage;
pub mod types;

use types::{Contribution, Pool};

// ============================================================
// Contract
// Threshold-gated funding rounds: deposits are escrowed while a
// round is open; once it closes every contributor is either
// refunded (target missed) or minted claim tokens (target met).
// ============================================================

#[multiversx_sc::contract]
pub trait FundingPool:
    storage::StorageModule
    + events::EventsModule
    + ledger::LedgerModule
    + round::RoundModule
    + settlement::SettlementModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the owner, the only identity allowed to open pools.
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPool)]
    fn get_pool(&self, pool_id: u64) -> Pool<Self::Api> {
        self.require_pool(pool_id)
    }

    #[view(getPoolCount)]
    fn get_pool_count(&self) -> u64 {
        self.pool_count().get()
    }

    #[view(isRoundClosed)]
    fn get_is_round_closed(&self, pool_id: u64) -> bool {
        let pool = self.require_pool(pool_id);
        self.is_round_closed(&pool)
    }

    #[view(getContribution)]
    fn get_contribution(
        &self,
        pool_id: u64,
        round_id: u64,
        owner: ManagedAddress,
    ) -> OptionalValue<Contribution<Self::Api>> {
        let mapper = self.contributions(pool_id, round_id, &owner);
        if mapper.is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(mapper.get())
    }

    /// Live total for the current round, archived total for earlier ones.
    #[view(getRoundRaised)]
    fn get_round_raised(&self, pool_id: u64, round_id: u64) -> BigUint {
        let pool = self.require_pool(pool_id);
        if round_id == pool.round_id {
            return pool.raised;
        }
        self.round_raised(pool_id, round_id).get()
    }

    #[view(getRoundContributors)]
    fn get_round_contributors(
        &self,
        pool_id: u64,
        round_id: u64,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for contributor in self.round_contributors(pool_id, round_id).iter() {
            result.push(contributor);
        }
        result
    }

    #[view(getEscrowed)]
    fn get_escrowed(&self, pool_id: u64) -> BigUint {
        self.require_pool(pool_id);
        self.escrowed(pool_id).get()
    }
}
