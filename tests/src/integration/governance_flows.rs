//! # Governance Flows
//!
//! Application and kick ballots driven end to end through `GovernanceApi`,
//! including the epoch boundary that makes each decision visible to
//! consensus.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{genesis, operator, service, validator};
    use poa_governance::domain::necessary_approvals;
    use poa_governance::{
        GenesisState, GovernanceApi, GovernanceCommand, GovernanceError, GovernanceEvent,
        GovernanceQueryApi, Params, QueryRequest, Validator, ValidatorState,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // =============================================================================
    // ADMISSION
    // =============================================================================

    #[test]
    fn test_admitted_candidate_votes_after_epoch() {
        // pool 4, quorum 66 => 3 approvals
        let mut service = service(Params::new(15, 66), 4);
        service.submit_application(validator(5)).unwrap();

        for voter in 1..=2 {
            service
                .vote_application(operator(voter), operator(5), true)
                .unwrap();
        }
        assert_eq!(service.applications().unwrap().len(), 1);

        let result = service
            .vote_application(operator(3), operator(5), true)
            .unwrap();
        assert!(result
            .events
            .contains(&GovernanceEvent::AppendValidator {
                candidate: operator(5)
            }));

        let updates = service.end_epoch().unwrap();
        assert_eq!(updates, vec![validator(5).update_append()]);
        assert_eq!(
            service.validator_state(&operator(5)).unwrap(),
            Some(ValidatorState::Joined)
        );

        // The new member takes part in the next ballot; pool is now 5
        service.submit_application(validator(6)).unwrap();
        service
            .vote_application(operator(5), operator(6), true)
            .unwrap();
        let applications = service.applications().unwrap();
        assert_eq!(applications[0].voters(), &[operator(5)]);
    }

    #[test]
    fn test_joining_validator_votes_before_epoch() {
        let mut service = service(Params::new(15, 0), 1);
        service.submit_application(validator(2)).unwrap();

        service.set_params(Params::new(15, 100)).unwrap();
        service.submit_application(validator(3)).unwrap();

        // Registry membership, not lifecycle state, grants the vote
        let result = service.vote_application(operator(2), operator(3), true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_random_ballots_respect_quorum() {
        let mut rng = StdRng::seed_from_u64(0x90a);

        for _ in 0..50 {
            let seated: u8 = rng.gen_range(1..=10);
            let quorum: u16 = rng.gen_range(1..=100);
            let mut service = service(Params::new(15, quorum), seated);
            let candidate = validator(100);
            service.submit_application(candidate.clone()).unwrap();

            let necessary = necessary_approvals(u64::from(seated), u64::from(quorum));
            let mut approvals = 0;
            let mut outcome = None;

            for voter in 1..=seated {
                let approve = rng.gen_bool(0.6);
                approvals += u64::from(approve);
                let result = service
                    .vote_application(operator(voter), candidate.operator(), approve)
                    .unwrap();

                if let Some(last) = result.events.last() {
                    match last {
                        GovernanceEvent::AppendValidator { .. } => outcome = Some(true),
                        GovernanceEvent::RejectValidator { .. } => outcome = Some(false),
                        _ => continue,
                    }
                    break;
                }
            }

            match outcome {
                Some(true) => assert!(approvals >= necessary),
                Some(false) => assert!(approvals < necessary),
                None => panic!("every ballot is decided once the whole pool voted"),
            }
            assert!(service.applications().unwrap().is_empty());
        }
    }

    // =============================================================================
    // EXPULSION
    // =============================================================================

    #[test]
    fn test_kick_flow_removes_validator_at_epoch() {
        // pool 4 - 1 = 3, quorum 66 => 2 approvals
        let mut service = service(Params::new(15, 66), 4);
        service.propose_kick(operator(4), operator(1)).unwrap();

        service
            .vote_kick_proposal(operator(1), operator(4), true)
            .unwrap();
        let result = service
            .vote_kick_proposal(operator(2), operator(4), true)
            .unwrap();
        assert_eq!(
            result.events.last(),
            Some(&GovernanceEvent::KickValidator {
                validator: operator(4)
            })
        );

        // Leaving validators stay seated until the epoch boundary
        assert_eq!(service.validators(1, 0).unwrap().len(), 4);
        let result = service.propose_kick(operator(4), operator(2));
        assert!(matches!(result, Err(GovernanceError::ValidatorLeaving)));

        let updates = service.end_epoch().unwrap();
        assert_eq!(updates, vec![validator(4).update_remove()]);
        assert_eq!(service.validators(1, 0).unwrap().len(), 3);
        assert!(service.validator_state(&operator(4)).unwrap().is_none());
    }

    #[test]
    fn test_leave_cancels_kick_ballot() {
        let mut service = service(Params::default(), 3);
        service.propose_kick(operator(2), operator(1)).unwrap();
        service
            .vote_kick_proposal(operator(1), operator(2), true)
            .unwrap();

        service.leave_validator_set(operator(2)).unwrap();

        assert!(service.kick_proposals().unwrap().is_empty());
        let result = service.vote_kick_proposal(operator(3), operator(2), true);
        assert!(matches!(
            result,
            Err(GovernanceError::NoKickProposalFound(_))
        ));
    }

    // =============================================================================
    // BOUNDARY: COMMANDS, GENESIS FILES, QUERIES
    // =============================================================================

    #[test]
    fn test_json_commands_dispatch() {
        let mut service = service(Params::new(15, 0), 2);
        let command = GovernanceCommand::SubmitApplication {
            candidate: validator(3),
        };
        let wire = serde_json::to_vec(&command).unwrap();

        let decoded: GovernanceCommand = serde_json::from_slice(&wire).unwrap();
        assert_eq!(decoded.signer(), operator(3));
        service.handle(decoded).unwrap();

        let leave = format!(
            r#"{{"LeaveValidatorSet":{{"validator":"{}"}}}}"#,
            operator(3)
        );
        let decoded: GovernanceCommand = serde_json::from_str(&leave).unwrap();
        let result = service.handle(decoded).unwrap();
        assert_eq!(
            result.events,
            vec![GovernanceEvent::LeaveValidatorSet {
                validator: operator(3)
            }]
        );
    }

    #[test]
    fn test_genesis_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genesis.json");
        let written = genesis(Params::new(7, 50), 3);
        std::fs::write(&path, written.to_json().unwrap()).unwrap();

        let loaded = GenesisState::load(&path).unwrap();
        assert_eq!(loaded, written);

        let mut service = service(Params::default(), 0);
        let updates = service.init_genesis(&loaded).unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(service.export_genesis().unwrap(), written);
    }

    #[test]
    fn test_query_endpoint_from_json_request() {
        let service = service(Params::new(5, 66), 5);

        let request: QueryRequest =
            serde_json::from_str(r#"{"path":"validators","page":2,"limit":2}"#).unwrap();
        let bytes = service.query(&request).unwrap();
        let page: Vec<Validator> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(page, vec![validator(3), validator(4)]);

        let request: QueryRequest = serde_json::from_str(r#"{"path":"validators"}"#).unwrap();
        let bytes = service.query(&request).unwrap();
        let page: Vec<Validator> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(page.len(), 5);

        let bytes = service.query(&QueryRequest::KickProposals).unwrap();
        assert_eq!(bytes, b"[]");
    }
}
