use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{debug, error};

use crate::{
    controllers::{Controller, HttpRequest, HttpResponse, parse_body},
    dto::{
        matches::{UPDATE_MATCH_REQUIRED_FIELDS, UpdateMatchRequest},
        validation::FieldChain,
    },
    error::ServiceError,
    services::{
        match_service::UpdateMatch,
        scoring::{ResultSubmission, ScoreConsistencyRule},
    },
};

/// Result submission pipeline: required fields, then score consistency, then persistence.
///
/// Each step short-circuits. Validation failures answer 400 without reaching the use case;
/// any failure of the use case answers a generic 500.
pub struct UpdateMatchController {
    fields: FieldChain,
    count_score: Arc<dyn ScoreConsistencyRule>,
    update_match: Arc<dyn UpdateMatch>,
}

impl UpdateMatchController {
    /// Build the pipeline around the use case and the rule it must satisfy first.
    pub fn new(
        update_match: Arc<dyn UpdateMatch>,
        count_score: Arc<dyn ScoreConsistencyRule>,
    ) -> Self {
        Self {
            fields: FieldChain::required(&UPDATE_MATCH_REQUIRED_FIELDS),
            count_score,
            update_match,
        }
    }
}

impl Controller for UpdateMatchController {
    fn handle(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse> {
        Box::pin(async move {
            let update = match parse_body::<UpdateMatchRequest>(&self.fields, request.body) {
                Ok(update) => update,
                Err(err) => {
                    debug!(error = %err, "rejecting match update");
                    return err.into();
                }
            };

            let code = update.code;
            if !self
                .count_score
                .is_consistent(&ResultSubmission::from(&update))
            {
                debug!(code, winner = %update.winner, "declared winner disagrees with the scores");
                return ServiceError::InconsistentResult { code }.into();
            }

            match self.update_match.update(update).await {
                Ok(summary) => HttpResponse::ok(&summary),
                Err(err) => {
                    error!(code, error = ?err, "match update failed");
                    HttpResponse::server_error()
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::http::StatusCode;
    use futures::future;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        dao::storage::StorageError, dto::matches::MatchSummary, services::scoring::CountScore,
    };

    type Captured = (i64, u32, u32, String);

    /// Rule double answering a fixed verdict and recording what it was asked.
    struct CountScoreStub {
        verdict: bool,
        calls: Mutex<Vec<Captured>>,
    }

    impl CountScoreStub {
        fn answering(verdict: bool) -> Arc<Self> {
            Arc::new(Self {
                verdict,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl ScoreConsistencyRule for CountScoreStub {
        fn is_consistent(&self, submission: &ResultSubmission<'_>) -> bool {
            self.calls.lock().unwrap().push((
                submission.code,
                submission.score_team_a,
                submission.score_team_b,
                submission.winner.to_owned(),
            ));
            self.verdict
        }
    }

    /// Use case double recording its input.
    struct UpdateMatchSpy {
        fail: bool,
        requests: Mutex<Vec<UpdateMatchRequest>>,
    }

    impl UpdateMatchSpy {
        fn succeeding() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<UpdateMatchRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl UpdateMatch for UpdateMatchSpy {
        fn update(
            &self,
            request: UpdateMatchRequest,
        ) -> BoxFuture<'static, Result<MatchSummary, ServiceError>> {
            self.requests.lock().unwrap().push(request);
            let result = if self.fail {
                Err(ServiceError::Storage(StorageError::MatchNotFound { code: 2 }))
            } else {
                Ok(fake_match())
            };
            Box::pin(future::ready(result))
        }
    }

    fn fake_match() -> MatchSummary {
        MatchSummary {
            code: 2,
            team_a: "valid_teamA".into(),
            score_team_a: 1,
            team_b: "valid_teamB".into(),
            score_team_b: 2,
            winner: "valid_winner".into(),
            phase: "group".into(),
        }
    }

    fn fake_body() -> Value {
        json!({
            "code": 2,
            "teamA": "valid_teamA",
            "scoreTeamA": 1,
            "teamB": "valid_teamB",
            "scoreTeamB": 2,
            "winner": "valid_winner"
        })
    }

    fn without(fields: &[&str]) -> HttpRequest {
        let mut body = fake_body();
        for field in fields {
            body.as_object_mut().unwrap().remove(*field);
        }
        body.into()
    }

    fn message(response: &HttpResponse) -> &str {
        response.body["message"].as_str().unwrap()
    }

    #[tokio::test]
    async fn missing_fields_answer_400_naming_the_field() {
        for field in ["code", "scoreTeamA", "scoreTeamB", "winner", "teamA", "teamB"] {
            let spy = UpdateMatchSpy::succeeding();
            let sut = UpdateMatchController::new(spy.clone(), CountScoreStub::answering(true));

            let response = sut.handle(without(&[field])).await;

            assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
            assert_eq!(
                message(&response),
                format!("bad request: missing parameter: {field}")
            );
            assert!(spy.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn first_missing_field_in_check_order_is_reported() {
        let sut = UpdateMatchController::new(
            UpdateMatchSpy::succeeding(),
            CountScoreStub::answering(true),
        );

        let response = sut.handle(without(&["winner", "scoreTeamB"])).await;
        assert_eq!(
            message(&response),
            "bad request: missing parameter: scoreTeamB"
        );

        let response = sut.handle(without(&["teamA", "winner", "code"])).await;
        assert_eq!(message(&response), "bad request: missing parameter: code");
    }

    #[tokio::test]
    async fn missing_winner_never_reaches_the_rule_or_the_use_case() {
        let rule = CountScoreStub::answering(true);
        let spy = UpdateMatchSpy::succeeding();
        let sut = UpdateMatchController::new(spy.clone(), rule.clone());

        let response = sut.handle(without(&["winner"])).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(rule.calls.lock().unwrap().is_empty());
        assert!(spy.calls().is_empty());
    }

    #[tokio::test]
    async fn calls_count_score_with_correct_values() {
        let rule = CountScoreStub::answering(true);
        let sut = UpdateMatchController::new(UpdateMatchSpy::succeeding(), rule.clone());

        sut.handle(fake_body().into()).await;

        assert_eq!(
            *rule.calls.lock().unwrap(),
            vec![(2, 1, 2, "valid_winner".to_owned())]
        );
    }

    #[tokio::test]
    async fn inconsistent_result_answers_400_without_persisting() {
        let spy = UpdateMatchSpy::succeeding();
        let sut = UpdateMatchController::new(spy.clone(), CountScoreStub::answering(false));

        let response = sut.handle(fake_body().into()).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(
            message(&response),
            "bad request: invalid score/winner combination"
        );
        assert!(spy.calls().is_empty());
    }

    #[tokio::test]
    async fn wrong_team_declared_is_rejected_by_the_real_rule() {
        let spy = UpdateMatchSpy::succeeding();
        let sut = UpdateMatchController::new(spy.clone(), Arc::new(CountScore::new("draw")));

        let response = sut
            .handle(
                json!({
                    "code": 2, "teamA": "A", "scoreTeamA": 1,
                    "teamB": "B", "scoreTeamB": 2, "winner": "A"
                })
                .into(),
            )
            .await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(spy.calls().is_empty());
    }

    #[tokio::test]
    async fn calls_update_match_with_correct_values() {
        let spy = UpdateMatchSpy::succeeding();
        let sut = UpdateMatchController::new(spy.clone(), CountScoreStub::answering(true));

        sut.handle(fake_body().into()).await;

        assert_eq!(
            spy.calls(),
            vec![UpdateMatchRequest {
                code: 2,
                team_a: "valid_teamA".into(),
                score_team_a: 1,
                team_b: "valid_teamB".into(),
                score_team_b: 2,
                winner: "valid_winner".into(),
            }]
        );
    }

    #[tokio::test]
    async fn valid_request_answers_200_with_the_stored_record() {
        let sut = UpdateMatchController::new(
            UpdateMatchSpy::succeeding(),
            Arc::new(CountScore::new("draw")),
        );

        let response = sut
            .handle(
                json!({
                    "code": 2, "teamA": "A", "scoreTeamA": 1,
                    "teamB": "B", "scoreTeamB": 2, "winner": "B"
                })
                .into(),
            )
            .await;

        assert_eq!(response.status_code, StatusCode::OK);
        assert_eq!(response.body, serde_json::to_value(fake_match()).unwrap());
    }

    #[tokio::test]
    async fn use_case_failure_answers_a_generic_500() {
        let sut = UpdateMatchController::new(
            UpdateMatchSpy::failing(),
            CountScoreStub::answering(true),
        );

        let response = sut.handle(fake_body().into()).await;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, json!({"message": "internal server error"}));
        assert!(!response.body.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn mistyped_score_answers_400_before_the_rule_runs() {
        let rule = CountScoreStub::answering(true);
        let sut = UpdateMatchController::new(UpdateMatchSpy::succeeding(), rule.clone());
        let mut body = fake_body();
        body["scoreTeamA"] = json!("one");

        let response = sut.handle(body.into()).await;

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(message(&response).contains("invalid parameter"));
        assert!(rule.calls.lock().unwrap().is_empty());
    }
}
