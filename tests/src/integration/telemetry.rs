//! # Telemetry
//!
//! Subscriber and registry installation with the engine emitting through
//! them.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use cc_03_composition::{CompositionApi, START_ATOMS_IDS};
    use cc_telemetry::{encode_metrics, init_telemetry, TelemetryConfig};
    use shared_types::U256;

    // The only test in this binary that installs global state
    #[test]
    fn test_init_and_export() {
        let config = TelemetryConfig::from_env()
            .with_log_level("warn")
            .with_json_logs(true);
        let _guard = init_telemetry(&config).unwrap();

        let world = World::new();
        let _ = world
            .engine
            .mint_atoms([0x05; 20], [0x05; 20], U256::from(START_ATOMS_IDS), U256::one());
        world
            .issuer
            .mint_energy(OWNER, [0x05; 20], U256::from(10))
            .unwrap();

        world.issuer.cancel_sign_hash(OWNER, [0x42; 32]).unwrap();

        let text = encode_metrics().unwrap();
        for name in [
            "cc_composition_operations_total",
            "cc_authorization_digests_consumed_total",
            "cc_authorization_digests_cancelled_total",
            "cc_ledger_transactions_total",
        ] {
            assert!(text.contains(name), "missing {name}");
        }
    }
}
