//! # Lifecycle Flows
//!
//! Value moving through every subsystem: users stake, validators are funded,
//! reporters agree on windows, the rate moves, requests finalize behind the
//! oracle horizon and are paid out.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use ls_01_oracle::OracleApi;
    use ls_04_redemption_queue::{QueueError, RedemptionQueueApi};
    use ls_05_staking::{ShareToken, StakingApi, StakingError, StakingEvent};
    use shared_types::{Address, OracleRecord, ONE_ETHER};

    const ALICE: Address = [0xA1; 20];
    const BOB: Address = [0xB0; 20];
    const MILLI_ETHER: u128 = ONE_ETHER / 1_000;

    fn window(start: u64, end: u64, balance: u128, reward: u128) -> OracleRecord {
        OracleRecord {
            update_start_block: start,
            update_end_block: end,
            current_num_validators_not_withdrawable: 10,
            cumulative_num_validators_withdrawable: 0,
            window_withdrawn_principal_amount: 0,
            window_withdrawn_reward_amount: reward,
            current_total_validator_balance: balance,
            cumulative_processed_deposit_amount: 320 * ONE_ETHER,
        }
    }

    /// Ten validators for Alice, 10 ETH staked by Bob, first window committed
    fn running_protocol() -> ProtocolHarness {
        let h = ProtocolHarness::new().unwrap();
        h.fund_validators(&ALICE, 10).unwrap();
        assert_eq!(h.staking.stake(&BOB, 10 * ONE_ETHER, 0).unwrap(), 10 * ONE_ETHER);

        h.finalize_through(250);
        h.report(window(101, 250, 320 * ONE_ETHER, 5 * MILLI_ETHER), 2)
            .unwrap();
        assert_eq!(h.oracle.oracle().num_records(), 2);
        h
    }

    #[test]
    fn test_rewards_raise_share_value() {
        let h = running_protocol();
        let staking = h.staking.staking();
        assert_eq!(
            staking.total_controlled_value(),
            330 * ONE_ETHER + 5 * MILLI_ETHER
        );

        // shares minted after the reward buy slightly less than 1:1
        let shares = h.staking.stake(&ALICE, ONE_ETHER, 0).unwrap();
        assert!(shares < ONE_ETHER);
        assert!(staking.shares_to_value(10 * ONE_ETHER).unwrap() > 10 * ONE_ETHER);
    }

    #[test]
    fn test_unstake_finalize_claim() {
        let h = running_protocol();
        let staking = h.staking.staking();
        let expected = staking.shares_to_value(10 * ONE_ETHER).unwrap();

        let id = h.staking.unstake_request(&BOB, 10 * ONE_ETHER, expected).unwrap();
        assert_eq!(h.token.balance_of(&BOB), 0);
        assert_eq!(h.token.balance_of(&QUEUE_ESCROW), 10 * ONE_ETHER);
        let created_at = h.queue.queue().request_by_id(id).unwrap().unwrap().creation_block;

        h.staking.allocate(&ALLOCATOR, expected, 0).unwrap();
        assert!(matches!(
            h.staking.claim_unstake_request(&BOB, id),
            Err(StakingError::Queue(QueueError::NotFinalized { .. }))
        ));

        // the next window moves the horizon past the finalization delay
        let delay = h.queue.queue().finalize_delay_blocks();
        let end = created_at + delay;
        h.finalize_through(end);
        h.report(window(251, end, 320 * ONE_ETHER + MILLI_ETHER, 0), 2)
            .unwrap();
        assert_eq!(h.oracle.oracle().latest_record().update_end_block, end);
        assert!(h.queue.queue().request_info(id).unwrap().finalized);

        assert!(matches!(
            h.staking.claim_unstake_request(&ALICE, id),
            Err(StakingError::Queue(QueueError::NotRequester { .. }))
        ));
        let request = h.staking.claim_unstake_request(&BOB, id).unwrap();
        assert_eq!(request.requested_value, expected);
        assert_eq!(h.native.balance_of(&BOB), expected);
        assert_eq!(h.token.balance_of(&QUEUE_ESCROW), 0);
        assert_eq!(h.token.total_supply(), 320 * ONE_ETHER);

        assert!(matches!(
            h.staking.claim_unstake_request(&BOB, id),
            Err(StakingError::Queue(QueueError::AlreadyClaimed { .. }))
        ));
        // a claimed slot reads as finalized with nothing left to claim
        let info = h.queue.queue().request_info(id).unwrap();
        assert!(info.finalized);
        assert_eq!(info.claimable, 0);
    }

    #[test]
    fn test_unfunded_claim_waits_for_allocation() {
        let h = running_protocol();
        let id = h.staking.unstake_request(&BOB, 5 * ONE_ETHER, 0).unwrap();
        let created_at = h.queue.queue().request_by_id(id).unwrap().unwrap().creation_block;
        let end = created_at + h.queue.queue().finalize_delay_blocks();
        h.finalize_through(end);
        h.report(window(251, end, 320 * ONE_ETHER, 0), 2).unwrap();

        let err = h.staking.claim_unstake_request(&BOB, id).unwrap_err();
        match err {
            StakingError::Queue(e) => assert!(e.is_retryable()),
            other => panic!("unexpected error {other:?}"),
        }

        let value = h.queue.queue().request_by_id(id).unwrap().unwrap().requested_value;
        h.staking.allocate(&ALLOCATOR, value, 0).unwrap();
        assert!(h.staking.claim_unstake_request(&BOB, id).is_ok());
    }

    #[test]
    fn test_cancel_returns_escrowed_shares() {
        let h = running_protocol();
        let first = h.staking.unstake_request(&BOB, 4 * ONE_ETHER, 0).unwrap();
        h.staking.unstake_request(&BOB, 6 * ONE_ETHER, 0).unwrap();
        assert_eq!(h.token.balance_of(&BOB), 0);

        assert!(h.queue.cancel_unfinalized_requests(&BOB, 10).is_err());

        let has_more = h.queue.cancel_unfinalized_requests(&QUEUE_MANAGER, 1).unwrap();
        assert!(has_more);
        assert_eq!(h.token.balance_of(&BOB), 6 * ONE_ETHER);

        let has_more = h.queue.cancel_unfinalized_requests(&QUEUE_MANAGER, 10).unwrap();
        assert!(!has_more);
        assert_eq!(h.token.balance_of(&BOB), 10 * ONE_ETHER);
        assert_eq!(h.token.balance_of(&QUEUE_ESCROW), 0);
        assert_eq!(h.queue.queue().num_requests(), 0);
        assert!(h.queue.queue().request_by_id(first).is_err());
        assert_eq!(h.queue.queue().funding().latest_cumulative_requested, 0);
    }

    #[test]
    fn test_reclaim_surplus_after_cancel() {
        let h = running_protocol();
        let unallocated = h.ledger.balances().unallocated;
        h.staking.unstake_request(&BOB, 10 * ONE_ETHER, 0).unwrap();
        h.staking.allocate(&ALLOCATOR, 10 * ONE_ETHER, 0).unwrap();
        h.queue.cancel_unfinalized_requests(&QUEUE_MANAGER, 10).unwrap();

        assert!(h.staking.reclaim_allocated_surplus(&ALLOCATOR).is_err());
        let reclaimed = h.staking.reclaim_allocated_surplus(&STAKING_MANAGER).unwrap();
        assert_eq!(reclaimed, 10 * ONE_ETHER);
        assert_eq!(h.ledger.balances().unallocated, unallocated);
        assert!(h
            .staking
            .staking()
            .take_events()
            .contains(&StakingEvent::SurplusReceived {
                amount: 10 * ONE_ETHER
            }));
    }

    #[test]
    fn test_in_flight_deposits_count_once() {
        let h = running_protocol();
        let before = h.staking.staking().total_controlled_value();

        // ten more validators funded but not yet seen by the remote chain
        h.fund_validators(&ALICE, 10).unwrap();
        let staking = h.staking.staking();
        let breakdown = staking.controlled_value_breakdown();
        assert_eq!(breakdown.in_flight_deposits, 320 * ONE_ETHER);
        assert_eq!(staking.total_controlled_value(), before + 320 * ONE_ETHER);
        assert_eq!(h.ledger.balances().num_initiated_validators, 20);
    }

    #[test]
    fn test_buffer_balance_counts_net_of_drawdown() {
        let h = running_protocol();
        let before = h.staking.staking().total_controlled_value();
        h.buffer.update(5 * ONE_ETHER, 2 * ONE_ETHER);
        assert_eq!(
            h.staking.staking().total_controlled_value(),
            before + 3 * ONE_ETHER
        );
    }

    #[test]
    fn test_manager_setters_through_access_layer() {
        let h = ProtocolHarness::new().unwrap();
        assert!(h.staking.set_minimum_stake_bound(&ALICE, ONE_ETHER).is_err());
        h.staking
            .set_minimum_stake_bound(&STAKING_MANAGER, ONE_ETHER)
            .unwrap();
        assert!(matches!(
            h.staking.stake(&ALICE, ONE_ETHER / 2, 0),
            Err(StakingError::MinimumStakeBoundNotSatisfied { .. })
        ));

        h.staking
            .set_exchange_adjustment_bps(&STAKING_MANAGER, 500)
            .unwrap();
        h.staking.stake(&ALICE, 10 * ONE_ETHER, 0).unwrap();
        // the first stake is always 1:1
        assert_eq!(h.token.balance_of(&ALICE), 10 * ONE_ETHER);
        let shares = h.staking.stake(&BOB, 10 * ONE_ETHER, 0).unwrap();
        assert_eq!(shares, 95 * ONE_ETHER / 10);
    }
}
