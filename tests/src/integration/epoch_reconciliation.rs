//! # Epoch Reconciliation
//!
//! What the consensus layer receives at epoch boundaries, and what happens
//! when the registry it reconciles is corrupt.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{init_tracing, operator, service, validator};
    use poa_governance::store::KeyPrefix;
    use poa_governance::{
        GovernanceApi, GovernanceError, GovernanceQueryApi, GovernanceService, KeyValueStore,
        LoggingEventSink, Params, ValidatorState,
    };
    use std::sync::Arc;

    #[test]
    fn test_updates_follow_operator_order() {
        let mut service = service(Params::new(15, 0), 5);
        service.leave_validator_set(operator(4)).unwrap();
        service.submit_application(validator(9)).unwrap();
        service.leave_validator_set(operator(2)).unwrap();
        service.submit_application(validator(6)).unwrap();

        let updates = service.end_epoch().unwrap();

        assert_eq!(
            updates,
            vec![
                validator(2).update_remove(),
                validator(4).update_remove(),
                validator(6).update_append(),
                validator(9).update_append(),
            ]
        );
    }

    #[test]
    fn test_quiet_epochs_emit_nothing() {
        let mut service = service(Params::default(), 3);

        for _ in 0..3 {
            assert!(service.end_epoch().unwrap().is_empty());
        }
        for seed in 1..=3 {
            assert_eq!(
                service.validator_state(&operator(seed)).unwrap(),
                Some(ValidatorState::Joined)
            );
        }
    }

    #[test]
    fn test_leaving_validator_counts_until_epoch() {
        // 3 seated, one leaving: pool is still 3 for applications
        let mut service = service(Params::new(15, 100), 3);
        service.leave_validator_set(operator(3)).unwrap();
        service.submit_application(validator(4)).unwrap();

        service
            .vote_application(operator(1), operator(4), true)
            .unwrap();
        service
            .vote_application(operator(2), operator(4), true)
            .unwrap();
        assert_eq!(service.applications().unwrap().len(), 1);

        // The leaving validator still holds a vote and settles the ballot
        service
            .vote_application(operator(3), operator(4), true)
            .unwrap();
        assert!(service.applications().unwrap().is_empty());

        let updates = service.end_epoch().unwrap();
        assert_eq!(
            updates,
            vec![validator(3).update_remove(), validator(4).update_append()]
        );
    }

    #[test]
    fn test_corrupt_registry_aborts_epoch() {
        let mut service = service(Params::new(15, 0), 3);
        service.leave_validator_set(operator(1)).unwrap();

        let mut kv = service.into_kv_store();
        kv.delete(&KeyPrefix::validator_state_key(&operator(3)))
            .unwrap();
        let snapshot = kv.clone();

        init_tracing();
        let mut service = GovernanceService::new(kv, Arc::new(LoggingEventSink));
        let err = service.end_epoch().unwrap_err();

        assert!(err.is_fatal());
        assert!(matches!(
            err,
            GovernanceError::InvariantViolation { operator: op, .. } if op == operator(3)
        ));
        assert_eq!(service.kv_store(), &snapshot);

        // The failure repeats rather than silently skipping the entry
        assert!(service.end_epoch().unwrap_err().is_fatal());
    }
}
