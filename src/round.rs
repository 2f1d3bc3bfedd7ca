multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_CONFIG, ERR_ROUND_STILL_OPEN, ERR_UNAUTHORIZED};
use crate::types::Pool;

// ============================================================
// Round Controller
// Authority-gated lifecycle: open → closed → reopened.
// ============================================================

#[multiversx_sc::module]
pub trait RoundModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: openPool
    // Registers a pool and starts round 1. The contract must
    // already hold the local mint role for the claim token.
    // ========================================================

    #[endpoint(openPool)]
    fn open_pool(
        &self,
        base_token: TokenIdentifier,
        claim_token: TokenIdentifier,
        target_amount: BigUint,
        claim_supply: BigUint,
        duration: OptionalValue<u64>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );

        require!(target_amount > 0u64, ERR_INVALID_CONFIG);
        require!(claim_supply > 0u64, ERR_INVALID_CONFIG);
        require!(
            base_token.is_valid_esdt_identifier() && claim_token.is_valid_esdt_identifier(),
            ERR_INVALID_CONFIG
        );
        require!(base_token != claim_token, ERR_INVALID_CONFIG);
        require!(
            self.claim_token_pool(&claim_token).is_empty(),
            ERR_INVALID_CONFIG
        );

        let deadline = self.deadline_from_now(duration.into_option());
        let pool_id = self.pool_count().get() + 1;

        let pool = Pool {
            id: pool_id,
            authority: caller.clone(),
            base_token,
            claim_token,
            target_amount,
            claim_supply,
            round_id: 1,
            is_open: true,
            deadline,
            raised: BigUint::zero(),
        };

        self.pools(pool_id).set(&pool);
        self.pool_count().set(pool_id);
        self.claim_token_pool(&pool.claim_token).set(pool_id);

        self.pool_opened_event(
            pool_id,
            &caller,
            &pool.base_token,
            &pool.claim_token,
            &pool.target_amount,
        );

        pool_id
    }

    // ========================================================
    // ENDPOINT: closePool
    // Idempotent: closing a closed pool changes nothing.
    // ========================================================

    #[endpoint(closePool)]
    fn close_pool(&self, pool_id: u64) {
        let mut pool = self.require_pool(pool_id);
        self.require_authority(&pool);

        if !pool.is_open {
            return;
        }

        pool.is_open = false;
        self.pools(pool_id).set(&pool);

        self.pool_closed_event(pool_id, pool.round_id, &pool.raised);
    }

    // ========================================================
    // ENDPOINT: reopenPool
    // Archives the closing round and starts the next one.
    // Entries of the old round stay where they are.
    // ========================================================

    #[endpoint(reopenPool)]
    fn reopen_pool(&self, pool_id: u64, duration: OptionalValue<u64>) {
        let mut pool = self.require_pool(pool_id);
        self.require_authority(&pool);
        require!(self.is_round_closed(&pool), ERR_ROUND_STILL_OPEN);

        self.round_raised(pool_id, pool.round_id).set(&pool.raised);

        pool.round_id += 1;
        pool.raised = BigUint::zero();
        pool.is_open = true;
        pool.deadline = self.deadline_from_now(duration.into_option());
        self.pools(pool_id).set(&pool);

        self.pool_reopened_event(pool_id, pool.round_id, pool.deadline);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Closure predicate, evaluated lazily against the current block.
    fn is_round_closed(&self, pool: &Pool<Self::Api>) -> bool {
        pool.is_closed_at(self.blockchain().get_block_timestamp())
    }

    fn require_authority(&self, pool: &Pool<Self::Api>) {
        require!(
            self.blockchain().get_caller() == pool.authority,
            ERR_UNAUTHORIZED
        );
    }

    fn deadline_from_now(&self, duration: Option<u64>) -> Option<u64> {
        match duration {
            Some(seconds) => {
                require!(seconds > 0, ERR_INVALID_CONFIG);
                let deadline = self.blockchain().get_block_timestamp().checked_add(seconds);
                require!(deadline.is_some(), ERR_INVALID_CONFIG);
                deadline
            },
            None => None,
        }
    }
}
