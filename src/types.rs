multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pool — the registry record, one per pool id
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Pool<M: ManagedTypeApi> {
    pub id: u64,
    /// Only identity allowed to close and reopen rounds
    pub authority: ManagedAddress<M>,
    pub base_token: TokenIdentifier<M>,
    pub claim_token: TokenIdentifier<M>,
    /// Minimum cumulative deposit for a round to succeed
    pub target_amount: BigUint<M>,
    /// Claim tokens owed to contributors who together supply exactly the target
    pub claim_supply: BigUint<M>,
    pub round_id: u64,
    /// Manual open flag. A round can still be closed while this is true.
    pub is_open: bool,
    /// Block timestamp at which the round stops accepting deposits
    pub deadline: Option<u64>,
    /// Cumulative deposits in the current round
    pub raised: BigUint<M>,
}

impl<M: ManagedTypeApi> Pool<M> {
    /// A round is closed once the manual flag is off or the deadline has been reached.
    pub fn is_closed_at(&self, now: u64) -> bool {
        if !self.is_open {
            return true;
        }
        match self.deadline {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }

    pub fn target_met(&self, raised: &BigUint<M>) -> bool {
        raised >= &self.target_amount
    }
}

// ============================================================
// Contribution — ledger entry, one per (pool, round, owner)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Contribution<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub round_id: u64,
    pub amount: BigUint<M>,
    /// Terminal once true
    pub settled: bool,
}

// ============================================================
// Settlement result
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum SettlementKind {
    /// Target missed, deposit returned in full.
    Refunded,
    /// Target met, deposit kept and claim tokens minted.
    Converted,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SettlementOutcome<M: ManagedTypeApi> {
    pub pool_id: u64,
    pub round_id: u64,
    pub kind: SettlementKind,
    pub refunded: BigUint<M>,
    pub minted: BigUint<M>,
}

/// floor(contribution * claim_supply / target).
///
/// Surplus raised above the target earns nothing extra per unit: every
/// contributor is paid relative to the target, not to the amount raised.
pub fn claim_amount<M: ManagedTypeApi>(
    contribution: &BigUint<M>,
    claim_supply: &BigUint<M>,
    target: &BigUint<M>,
) -> BigUint<M> {
    (contribution * claim_supply) / target
}
