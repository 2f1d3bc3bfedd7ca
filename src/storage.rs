multiversx_sc::imports!();

use crate::errors::ERR_POOL_NOT_FOUND;
use crate::types::{Contribution, Pool};

#[multiversx_sc::module]
pub trait StorageModule {
    fn require_pool(&self, pool_id: u64) -> Pool<Self::Api> {
        let mapper = self.pools(pool_id);
        require!(!mapper.is_empty(), ERR_POOL_NOT_FOUND);
        mapper.get()
    }

    // ── Registry ──

    #[storage_mapper("poolCount")]
    fn pool_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pools")]
    fn pools(&self, pool_id: u64) -> SingleValueMapper<Pool<Self::Api>>;

    /// Reverse index so a claim token backs at most one pool
    #[storage_mapper("claimTokenPool")]
    fn claim_token_pool(&self, claim_token: &TokenIdentifier) -> SingleValueMapper<u64>;

    /// Base-asset units held in the contract account on behalf of a pool
    #[storage_mapper("escrowed")]
    fn escrowed(&self, pool_id: u64) -> SingleValueMapper<BigUint>;

    /// Final `raised` of every round that has been superseded by a reopen
    #[storage_mapper("roundRaised")]
    fn round_raised(&self, pool_id: u64, round_id: u64) -> SingleValueMapper<BigUint>;

    // ── Ledger ──

    #[storage_mapper("contributions")]
    fn contributions(
        &self,
        pool_id: u64,
        round_id: u64,
        owner: &ManagedAddress,
    ) -> SingleValueMapper<Contribution<Self::Api>>;

    #[storage_mapper("roundContributors")]
    fn round_contributors(&self, pool_id: u64, round_id: u64) -> UnorderedSetMapper<ManagedAddress>;
}
