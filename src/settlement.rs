multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_AMOUNT, ERR_MINT_FAILED, ERR_ROUND_CLOSED, ERR_ROUND_STILL_OPEN,
    ERR_TRANSFER_FAILED, ERR_UNKNOWN_ROUND, ERR_WRONG_TOKEN,
};
use crate::types::{claim_amount, Pool, SettlementKind, SettlementOutcome};

// ============================================================
// Settlement Engine
// Deposit path while a round is open, refund-or-convert once
// it has closed. Every check runs before any token leaves the
// vault; a failed payout reverts the whole transaction.
// ============================================================

#[multiversx_sc::module]
pub trait SettlementModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::round::RoundModule
    + crate::ledger::LedgerModule
{
    // ========================================================
    // ENDPOINT: deposit
    // The payment reaches the vault before this body runs, so
    // a rejected deposit is returned with the reverted tx.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self, pool_id: u64) {
        let (token, amount) = self.call_value().single_fungible_esdt();
        let mut pool = self.require_pool(pool_id);

        require!(!self.is_round_closed(&pool), ERR_ROUND_CLOSED);
        require!(token == pool.base_token, ERR_WRONG_TOKEN);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.record_deposit(pool_id, pool.round_id, &caller, &amount);

        pool.raised += &amount;
        self.pools(pool_id).set(&pool);
        self.escrowed(pool_id).update(|escrowed| *escrowed += &amount);

        self.deposit_event(pool_id, pool.round_id, &caller, &amount);
    }

    // ========================================================
    // ENDPOINT: settle
    // Resolves the caller's position in the current round.
    // ========================================================

    #[endpoint(settle)]
    fn settle(&self, pool_id: u64) -> SettlementOutcome<Self::Api> {
        let pool = self.require_pool(pool_id);
        require!(self.is_round_closed(&pool), ERR_ROUND_STILL_OPEN);

        let round_id = pool.round_id;
        let raised = pool.raised.clone();
        self.settle_entry(&pool, round_id, &raised)
    }

    // ========================================================
    // ENDPOINT: settleRound
    // Resolves a position left in a round that was superseded
    // by reopenPool, using that round's archived total.
    // ========================================================

    #[endpoint(settleRound)]
    fn settle_round(&self, pool_id: u64, round_id: u64) -> SettlementOutcome<Self::Api> {
        let pool = self.require_pool(pool_id);
        if round_id == pool.round_id {
            return self.settle(pool_id);
        }

        let archived = self.round_raised(pool_id, round_id);
        require!(
            round_id < pool.round_id && !archived.is_empty(),
            ERR_UNKNOWN_ROUND
        );

        self.settle_entry(&pool, round_id, &archived.get())
    }

    // ========================================================
    // INTERNAL: threshold rule and payout
    // ========================================================

    fn settle_entry(
        &self,
        pool: &Pool<Self::Api>,
        round_id: u64,
        raised: &BigUint,
    ) -> SettlementOutcome<Self::Api> {
        let caller = self.blockchain().get_caller();
        let mut entry = self.require_unsettled(pool.id, round_id, &caller);

        let outcome = if pool.target_met(raised) {
            let minted = claim_amount(&entry.amount, &pool.claim_supply, &pool.target_amount);
            self.mint_claim(pool, &caller, &minted);
            self.convert_event(pool.id, round_id, &caller, &minted);

            SettlementOutcome {
                pool_id: pool.id,
                round_id,
                kind: SettlementKind::Converted,
                refunded: BigUint::zero(),
                minted,
            }
        } else {
            self.refund(pool, &caller, &entry.amount);
            self.refund_event(pool.id, round_id, &caller, &entry.amount);

            SettlementOutcome {
                pool_id: pool.id,
                round_id,
                kind: SettlementKind::Refunded,
                refunded: entry.amount.clone(),
                minted: BigUint::zero(),
            }
        };

        self.mark_settled(pool.id, &mut entry);
        outcome
    }

    fn refund(&self, pool: &Pool<Self::Api>, to: &ManagedAddress, amount: &BigUint) {
        let escrowed_mapper = self.escrowed(pool.id);
        let escrowed = escrowed_mapper.get();
        let vault_balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(pool.base_token.clone()), 0);
        require!(
            &escrowed >= amount && &vault_balance >= amount,
            ERR_TRANSFER_FAILED
        );

        escrowed_mapper.set(&escrowed - amount);
        self.send().direct_esdt(to, &pool.base_token, 0, amount);
    }

    /// A share that floors to zero settles without minting.
    fn mint_claim(&self, pool: &Pool<Self::Api>, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }

        let roles = self.blockchain().get_esdt_local_roles(&pool.claim_token);
        require!(roles.has_role(&EsdtLocalRole::Mint), ERR_MINT_FAILED);

        self.send().esdt_local_mint(&pool.claim_token, 0, amount);
        self.send().direct_esdt(to, &pool.claim_token, 0, amount);
    }
}
