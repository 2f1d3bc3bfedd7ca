multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("poolOpened")]
    fn pool_opened_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] authority: &ManagedAddress,
        #[indexed] base_token: &TokenIdentifier,
        #[indexed] claim_token: &TokenIdentifier,
        target_amount: &BigUint,
    );

    #[event("poolClosed")]
    fn pool_closed_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] round_id: u64,
        raised: &BigUint,
    );

    #[event("poolReopened")]
    fn pool_reopened_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] round_id: u64,
        deadline: Option<u64>,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] round_id: u64,
        #[indexed] owner: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("refund")]
    fn refund_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] round_id: u64,
        #[indexed] owner: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("convert")]
    fn convert_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] round_id: u64,
        #[indexed] owner: &ManagedAddress,
        minted: &BigUint,
    );
}
