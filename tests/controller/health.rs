mod health {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use phygital::{
        model::health::{HealthDto, ServiceStatus},
        server::controller::health::health,
    };
    use phygital_test_utils::prelude::*;

    use crate::util::{json_body, TestSetupExt};

    #[tokio::test]
    /// Expect both services connected when they answer
    async fn reports_connected_services() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_directus_ping(200, 1)
            .with_spotify_token(1)
            .build()
            .await?;

        let resp = health(State(test.app_state())).await.into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: HealthDto = json_body(resp).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.directus, ServiceStatus::Connected);
        assert_eq!(body.spotify, ServiceStatus::Connected);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Upstream failures are reported without failing the health check itself
    async fn reports_failures_with_ok_status() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_directus_ping(503, 1)
            .build()
            .await?;

        let resp = health(State(test.app_state_without_spotify()))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let body: HealthDto = json_body(resp).await;
        assert_eq!(body.directus, ServiceStatus::Error);
        assert_eq!(body.spotify, ServiceStatus::Unknown);

        test.assert_mocks();

        Ok(())
    }
}
