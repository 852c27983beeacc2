#[cfg(test)]
mod tests {
    use super::super::*;
    use async_trait::async_trait;
    use lead_intake_sdk::{ContactSubmission, ServedBy};
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use ports::{CrmLead, CrmLeadResult, CrmPort};
    use repo::{BackupOutcome, BackupRepository};
    use service::{Service, ServiceConfig};

    // Mock CRM recording every submission it receives
    struct MockCrm {
        result: CrmLeadResult,
        calls: AtomicUsize,
        received: Mutex<Vec<ContactSubmission>>,
    }

    impl MockCrm {
        fn returning(result: CrmLeadResult) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
            })
        }

        fn created(id: &str) -> Arc<Self> {
            Self::returning(CrmLeadResult::Created(CrmLead { id: id.to_owned() }))
        }

        fn failing() -> Arc<Self> {
            Self::returning(CrmLeadResult::failed("HTTP 503 Service Unavailable"))
        }
    }

    #[async_trait]
    impl CrmPort for MockCrm {
        async fn create_lead_from_contact_form(
            &self,
            submission: &ContactSubmission,
        ) -> CrmLeadResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(submission.clone());
            self.result.clone()
        }
    }

    // Mock backup store recording the CRM reference of every insert
    struct MockRepo {
        fail: bool,
        calls: AtomicUsize,
        lead_refs: Mutex<Vec<Option<String>>>,
    }

    impl MockRepo {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                calls: AtomicUsize::new(0),
                lead_refs: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl BackupRepository for MockRepo {
        async fn insert_contact(
            &self,
            _submission: &ContactSubmission,
            crm_lead_id: Option<&str>,
        ) -> anyhow::Result<Uuid> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.lead_refs
                .lock()
                .unwrap()
                .push(crm_lead_id.map(str::to_owned));
            if self.fail {
                anyhow::bail!("database is unreachable");
            }
            Ok(Uuid::new_v4())
        }
    }

    fn service(crm: &Arc<MockCrm>, repo: &Arc<MockRepo>) -> Service {
        Service::new(crm.clone(), repo.clone(), ServiceConfig::default())
    }

    fn valid_payload() -> Value {
        json!({
            "firstName": "Al",
            "lastName": "Smith",
            "email": "a@b.com",
            "phone": "330-555-0100",
            "serviceType": "Drain Cleaning",
            "message": "My kitchen sink is clogged badly"
        })
    }

    #[tokio::test]
    async fn test_crm_success_returns_lead_id() {
        let crm = MockCrm::created("lead_123");
        let repo = MockRepo::new(false);

        let report = service(&crm, &repo).submit(&valid_payload()).await.unwrap();

        assert_eq!(report.receipt.lead_id.as_deref(), Some("lead_123"));
        assert_eq!(report.receipt.served_by, ServedBy::Crm);
        assert!(report.backup.is_recorded());
        assert_eq!(crm.calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *repo.lead_refs.lock().unwrap(),
            vec![Some("lead_123".to_owned())]
        );
    }

    #[tokio::test]
    async fn test_crm_receives_normalized_submission() {
        let crm = MockCrm::created("lead_123");
        let repo = MockRepo::new(false);

        service(&crm, &repo).submit(&valid_payload()).await.unwrap();

        let received = crm.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].phone, "3305550100");
        assert_eq!(received[0].email, "a@b.com");
        assert_eq!(received[0].preferred_contact, "phone");
    }

    #[tokio::test]
    async fn test_crm_success_survives_backup_failure() {
        let crm = MockCrm::created("lead_456");
        let repo = MockRepo::new(true);

        let report = service(&crm, &repo).submit(&valid_payload()).await.unwrap();

        assert_eq!(report.receipt.lead_id.as_deref(), Some("lead_456"));
        assert_eq!(report.receipt.served_by, ServedBy::Crm);
        assert!(matches!(report.backup, BackupOutcome::Failed { ref error } if error.contains("unreachable")));
    }

    #[tokio::test]
    async fn test_crm_failure_is_served_by_backup() {
        let crm = MockCrm::failing();
        let repo = MockRepo::new(false);

        let report = service(&crm, &repo).submit(&valid_payload()).await.unwrap();

        assert_eq!(report.receipt.lead_id, None);
        assert_eq!(report.receipt.served_by, ServedBy::Backup);
        assert!(matches!(report.crm, CrmLeadResult::Failed { .. }));
        assert_eq!(*repo.lead_refs.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn test_both_failures_are_reported() {
        let crm = MockCrm::failing();
        let repo = MockRepo::new(true);

        let err = service(&crm, &repo)
            .submit(&valid_payload())
            .await
            .unwrap_err();

        match err {
            error::DomainError::AllWritesFailed {
                crm_error,
                backup_error,
            } => {
                assert!(crm_error.contains("503"));
                assert!(backup_error.contains("unreachable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(crm.calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_makes_no_downstream_calls() {
        let crm = MockCrm::created("lead_123");
        let repo = MockRepo::new(false);

        let mut payload = valid_payload();
        payload["serviceType"] = json!("Pest Control");

        let err = service(&crm, &repo).submit(&payload).await.unwrap_err();

        match err {
            error::DomainError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0], validation::SERVICE_TYPE_REQUIRED);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(crm.calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_every_missing_field_blocks_downstream_calls() {
        for key in [
            "firstName",
            "lastName",
            "email",
            "phone",
            "serviceType",
            "message",
        ] {
            let crm = MockCrm::created("lead_123");
            let repo = MockRepo::new(false);
            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(key);

            let result = service(&crm, &repo).submit(&payload).await;

            assert!(
                matches!(result, Err(error::DomainError::Validation { .. })),
                "{key} should be required"
            );
            assert_eq!(crm.calls.load(Ordering::SeqCst), 0, "{key}");
            assert_eq!(repo.calls.load(Ordering::SeqCst), 0, "{key}");
        }
    }

    #[tokio::test]
    async fn test_submit_raw_rejects_non_json_body() {
        let crm = MockCrm::created("lead_123");
        let repo = MockRepo::new(false);

        let err = service(&crm, &repo)
            .submit_raw(b"firstName=Al&lastName=Smith")
            .await
            .unwrap_err();

        assert!(matches!(err, error::DomainError::MalformedPayload(_)));
        assert_eq!(crm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_service_config_defaults_are_applied() {
        let crm = MockCrm::created("lead_123");
        let repo = MockRepo::new(false);
        let svc = Service::new(
            crm.clone(),
            repo.clone(),
            ServiceConfig {
                defaults: normalize::SubmissionDefaults {
                    source: "Landing Page".to_owned(),
                    source_page: "/emergency".to_owned(),
                },
            },
        );

        svc.submit(&valid_payload()).await.unwrap();

        let received = crm.received.lock().unwrap();
        assert_eq!(received[0].source, "Landing Page");
        assert_eq!(received[0].source_page, "/emergency");
    }
}
