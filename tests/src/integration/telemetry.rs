//! # Telemetry
//!
//! Subsystem metrics exported through the shared Prometheus registry while
//! the wired protocol runs.

#[cfg(test)]
mod tests {
    use crate::harness::*;
    use shared_types::{OracleRecord, ONE_ETHER};
    use staking_telemetry::metrics::{
        ORACLE_RECORDS_COMMITTED, QUORUM_REPORTS_RECEIVED, STAKING_STAKED_ETH,
        STAKING_VALIDATORS_INITIATED, SUBSYSTEM_ERRORS,
    };
    use staking_telemetry::{encode_metrics, register_metrics, TelemetryConfig};

    const CAROL: [u8; 20] = [0xC0; 20];

    fn registered() {
        // registration is process-global; a second attempt errors harmlessly
        let _ = register_metrics();
    }

    #[test]
    fn test_staking_activity_is_exported() {
        registered();
        let staked_before = STAKING_STAKED_ETH.get();
        let validators_before = STAKING_VALIDATORS_INITIATED.get();

        let h = ProtocolHarness::new().unwrap();
        h.fund_validators(&CAROL, 2).unwrap();

        assert!(STAKING_STAKED_ETH.get() >= staked_before + 64.0);
        assert!(STAKING_VALIDATORS_INITIATED.get() >= validators_before + 2.0);

        let text = encode_metrics().unwrap();
        assert!(text.contains("ls_staking_staked_eth_total"));
        assert!(text.contains("ls_staking_validators_initiated_total"));
    }

    #[test]
    fn test_oracle_and_quorum_activity_is_exported() {
        registered();
        let committed_before = ORACLE_RECORDS_COMMITTED.get();
        let received_before = QUORUM_REPORTS_RECEIVED.get();

        let h = ProtocolHarness::new().unwrap();
        h.finalize_through(250);
        let record = OracleRecord {
            update_start_block: 101,
            update_end_block: 250,
            ..OracleRecord::default()
        };
        h.report(record, 2).unwrap();

        assert!(ORACLE_RECORDS_COMMITTED.get() >= committed_before + 1.0);
        assert!(QUORUM_REPORTS_RECEIVED.get() >= received_before + 2.0);
        let text = encode_metrics().unwrap();
        assert!(text.contains("ls_oracle_records_committed_total"));
        assert!(text.contains("ls_quorum_reached_total"));
    }

    #[test]
    fn test_failed_stake_counts_error() {
        registered();
        let h = ProtocolHarness::new().unwrap();
        let errors = SUBSYSTEM_ERRORS.with_label_values(&["ls-05", "minimum_stake"]);
        let before = errors.get();

        assert!(h.staking.stake(&CAROL, ONE_ETHER / 100, 0).is_err());
        assert!(errors.get() >= before + 1.0);
    }

    #[test]
    fn test_subsystem_telemetry_config() {
        let config = TelemetryConfig::for_subsystem("05", "staking");
        assert_eq!(config.service_name, "ls-05-staking");
        assert!(config.validate().is_ok());

        let mut blank = config;
        blank.service_name = "  ".to_string();
        assert!(blank.validate().is_err());
    }
}
