//! # Reference Scenarios
//!
//! 1. **First window**: bootstrap `{0, 100}` followed by a 150-block window
//!    reporting 10 validators and 320 ETH. Committed when inside the sanity
//!    bounds, pending (and the protocol paused) otherwise.
//! 2. **Quorum**: with `absolute_threshold = 2` the second identical report
//!    forwards the record; a third is a no-op.
//! 3. **Partial funding**: a request of 10 behind 40 of earlier requests is
//!    claimable for 5 at 45 allocated and in full at 60.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use ls_01_oracle::{OracleApi, OracleError, OracleEvent, OracleState, ViolationKind};
    use ls_02_quorum::{QuorumApi, QuorumEvent, QuorumOutcome};
    use ls_04_redemption_queue::RedemptionQueueApi;
    use ls_05_staking::{StakingApi, StakingError};
    use shared_types::{OracleRecord, ONE_ETHER};

    const ALICE: [u8; 20] = [0xA1; 20];
    const MILLI_ETHER: u128 = ONE_ETHER / 1_000;

    fn first_window(reward: u128) -> OracleRecord {
        OracleRecord {
            update_start_block: 101,
            update_end_block: 250,
            current_num_validators_not_withdrawable: 10,
            cumulative_num_validators_withdrawable: 0,
            window_withdrawn_principal_amount: 0,
            window_withdrawn_reward_amount: reward,
            current_total_validator_balance: 320 * ONE_ETHER,
            cumulative_processed_deposit_amount: 320 * ONE_ETHER,
        }
    }

    /// Ten validators funded and the first window final
    fn funded_harness() -> ProtocolHarness {
        let h = ProtocolHarness::new().unwrap();
        h.fund_validators(&ALICE, 10).unwrap();
        h.finalize_through(250);
        h
    }

    // =========================================================================
    // SCENARIO 1: FIRST WINDOW
    // =========================================================================

    #[test]
    fn test_bootstrap_record() {
        let h = ProtocolHarness::new().unwrap();
        let oracle = h.oracle.oracle();
        assert_eq!(oracle.num_records(), 1);
        assert_eq!(oracle.latest_record(), OracleRecord::bootstrap(100));
    }

    #[test]
    fn test_plausible_first_window_commits() {
        let h = funded_harness();
        let outcomes = h.report(first_window(5 * MILLI_ETHER), 2).unwrap();
        assert_eq!(outcomes[1], QuorumOutcome::Forwarded);

        let oracle = h.oracle.oracle();
        assert_eq!(oracle.num_records(), 2);
        assert_eq!(oracle.latest_record(), first_window(5 * MILLI_ETHER));
        assert_eq!(oracle.state(), OracleState::Normal);
        assert!(!h.pause.is_paused());

        // the withdrawn reward lands in the staking ledger
        assert_eq!(h.ledger.balances().unallocated, 5 * MILLI_ETHER);
        assert_eq!(
            h.staking.staking().total_controlled_value(),
            320 * ONE_ETHER + 5 * MILLI_ETHER
        );
    }

    #[test]
    fn test_implausible_reward_pends_and_pauses() {
        let h = funded_harness();
        let outcomes = h.report(first_window(ONE_ETHER), 2).unwrap();
        assert_eq!(outcomes[1], QuorumOutcome::Forwarded);

        let oracle = h.oracle.oracle();
        assert_eq!(oracle.num_records(), 1);
        assert_eq!(oracle.state(), OracleState::AwaitingResolution);
        let pending = oracle.pending_detail().unwrap();
        assert_eq!(pending.violation.kind, ViolationKind::BalanceAboveUpperBound);
        assert!(matches!(
            oracle.take_events().as_slice(),
            [OracleEvent::RecordFailedSanityCheck { .. }]
        ));

        assert!(h.pause.is_paused());
        assert_eq!(
            h.staking.stake(&ALICE, ONE_ETHER, 0),
            Err(StakingError::Paused)
        );
        assert_eq!(h.ledger.balances().unallocated, 0);
    }

    #[test]
    fn test_balance_drop_below_bound_pends() {
        let h = funded_harness();
        let mut record = first_window(0);
        record.current_total_validator_balance = 310 * ONE_ETHER;
        h.report(record, 2).unwrap();

        let pending = h.oracle.oracle().pending_detail().unwrap();
        assert_eq!(pending.violation.kind, ViolationKind::BalanceBelowLowerBound);
    }

    #[test]
    fn test_accepting_pending_update_commits_and_forwards() {
        let h = funded_harness();
        h.report(first_window(ONE_ETHER), 2).unwrap();

        assert!(h.oracle.accept_pending_update(&ALICE).is_err());
        assert_eq!(h.oracle.accept_pending_update(&PENDING_RESOLVER).unwrap(), 1);
        assert_eq!(h.oracle.oracle().state(), OracleState::Normal);
        assert_eq!(h.ledger.balances().unallocated, ONE_ETHER);

        // resolving the record does not unpause; a staking manager does
        assert!(h.pause.is_paused());
        h.staking.unpause(&STAKING_MANAGER).unwrap();
        assert!(h.staking.stake(&ALICE, ONE_ETHER, 0).is_ok());
    }

    #[test]
    fn test_rejecting_pending_update_allows_resubmission() {
        let h = funded_harness();
        h.report(first_window(ONE_ETHER), 2).unwrap();
        assert_eq!(
            h.report(first_window(5 * MILLI_ETHER), 1).unwrap()[0],
            QuorumOutcome::NoQuorum {
                count: 1,
                total_reporters: 3
            }
        );

        let rejected = h.oracle.reject_pending_update(&PENDING_RESOLVER).unwrap();
        assert_eq!(rejected, first_window(ONE_ETHER));

        // the second reporter now agrees with the first on the corrected record
        let outcome = h
            .quorum
            .submit_report(&REPORTERS[1], first_window(5 * MILLI_ETHER))
            .unwrap();
        assert_eq!(outcome, QuorumOutcome::Forwarded);
        assert_eq!(h.oracle.oracle().num_records(), 2);
    }

    #[test]
    fn test_window_must_be_final() {
        let h = ProtocolHarness::new().unwrap();
        h.fund_validators(&ALICE, 10).unwrap();
        h.clock.set(250 + 63);

        let outcomes = h.report(first_window(0), 2).unwrap();
        assert!(matches!(
            &outcomes[1],
            QuorumOutcome::ForwardingFailed { reason } if reason.contains("not final")
        ));
        assert!(h
            .quorum
            .quorum()
            .take_events()
            .iter()
            .any(|e| matches!(e, QuorumEvent::ForwardingFailed { .. })));
    }

    #[test]
    fn test_more_validators_than_initiated_rejected() {
        let h = ProtocolHarness::new().unwrap();
        h.fund_validators(&ALICE, 9).unwrap();
        h.finalize_through(250);

        let mut record = first_window(0);
        record.current_total_validator_balance = 288 * ONE_ETHER;
        record.cumulative_processed_deposit_amount = 288 * ONE_ETHER;
        assert_eq!(
            h.oracle.receive_record(&QUORUM_ACCOUNT, record),
            Err(OracleError::MoreValidatorsThanInitiated {
                reported: 10,
                initiated: 9
            })
        );
    }

    #[test]
    fn test_correction_draws_only_increases() {
        let h = funded_harness();
        h.report(first_window(5 * MILLI_ETHER), 2).unwrap();
        assert_eq!(h.ledger.balances().unallocated, 5 * MILLI_ETHER);

        let mut corrected = first_window(7 * MILLI_ETHER);
        h.oracle
            .modify_existing_record(&ORACLE_MANAGER, 1, corrected)
            .unwrap();
        assert_eq!(h.ledger.balances().unallocated, 7 * MILLI_ETHER);

        corrected.window_withdrawn_reward_amount = MILLI_ETHER;
        h.oracle
            .modify_existing_record(&ORACLE_MANAGER, 1, corrected)
            .unwrap();
        assert_eq!(h.ledger.balances().unallocated, 7 * MILLI_ETHER);
        assert_eq!(h.oracle.oracle().record_at(1).unwrap(), corrected);

        assert_eq!(
            h.oracle
                .modify_existing_record(&ORACLE_MANAGER, 0, corrected),
            Err(OracleError::CannotModifyInitialRecord)
        );
    }

    // =========================================================================
    // SCENARIO 2: QUORUM
    // =========================================================================

    #[test]
    fn test_second_identical_report_forwards_once() {
        let h = funded_harness();
        let record = first_window(5 * MILLI_ETHER);
        let outcomes = h.report(record, 3).unwrap();

        assert_eq!(
            outcomes,
            vec![
                QuorumOutcome::NoQuorum {
                    count: 1,
                    total_reporters: 3
                },
                QuorumOutcome::Forwarded,
                QuorumOutcome::AlreadyReceived,
            ]
        );
        assert_eq!(h.oracle.oracle().num_records(), 2);

        let quorum = h.quorum.quorum();
        assert_eq!(quorum.record_hash_count(250, &record.content_hash()), 3);
        let reached = quorum
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, QuorumEvent::QuorumReached { .. }))
            .count();
        assert_eq!(reached, 1);
    }

    #[test]
    fn test_diverging_reports_do_not_forward() {
        let h = funded_harness();
        let a = first_window(5 * MILLI_ETHER);
        let b = first_window(6 * MILLI_ETHER);

        h.quorum.submit_report(&REPORTERS[0], a).unwrap();
        let outcome = h.quorum.submit_report(&REPORTERS[1], b).unwrap();
        assert_eq!(
            outcome,
            QuorumOutcome::NoQuorum {
                count: 1,
                total_reporters: 3
            }
        );
        assert_eq!(h.oracle.oracle().num_records(), 1);

        // a reporter changing its mind moves its vote
        let outcome = h.quorum.submit_report(&REPORTERS[1], a).unwrap();
        assert_eq!(outcome, QuorumOutcome::Forwarded);
        assert_eq!(h.quorum.quorum().record_hash_count(250, &b.content_hash()), 0);
    }

    #[test]
    fn test_non_reporter_cannot_submit() {
        let h = funded_harness();
        assert!(h
            .quorum
            .submit_report(&ALICE, first_window(0))
            .is_err());
    }

    // =========================================================================
    // SCENARIO 3: PARTIAL FUNDING
    // =========================================================================

    #[test]
    fn test_claimable_fills_in_order() {
        let h = ProtocolHarness::new().unwrap();
        let first = h.queue.create(&STAKING_CONTRACT, ALICE, 40, 40).unwrap();
        let second = h.queue.create(&STAKING_CONTRACT, ALICE, 10, 10).unwrap();
        let queue = h.queue.queue();
        assert_eq!(
            queue
                .request_by_id(second)
                .unwrap()
                .unwrap()
                .cumulative_requested_value,
            50
        );

        h.queue.allocate(&STAKING_CONTRACT, 45).unwrap();
        assert_eq!(queue.request_info(first).unwrap().claimable, 40);
        assert_eq!(queue.request_info(second).unwrap().claimable, 5);
        assert_eq!(queue.allocated_deficit(), 5);

        h.queue.allocate(&STAKING_CONTRACT, 15).unwrap();
        assert_eq!(queue.request_info(second).unwrap().claimable, 10);
        assert_eq!(queue.allocated_surplus(), 10);
        assert_eq!(queue.allocated_deficit(), 0);
    }

    #[test]
    fn test_only_staking_contract_drives_queue() {
        let h = ProtocolHarness::new().unwrap();
        assert!(h.queue.create(&ALICE, ALICE, 1, 1).is_err());
        assert!(h.queue.allocate(&ALLOCATOR, 1).is_err());
        assert_eq!(h.queue.queue().num_requests(), 0);
    }
}
