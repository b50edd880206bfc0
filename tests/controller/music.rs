mod spotify_search {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use phygital::{
        model::music::{SearchErrorDto, SearchResultsDto},
        server::controller::music::{spotify_search, SearchParams},
    };
    use phygital_test_utils::prelude::*;

    use crate::util::{json_body, TestSetupExt};

    fn params(q: &str, limit: Option<&str>) -> Query<SearchParams> {
        Query(SearchParams {
            q: q.to_string(),
            limit: limit.map(str::to_string),
        })
    }

    #[tokio::test]
    /// Expect 200 with the tracks in search order
    async fn returns_tracks() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_spotify_token(1)
            .with_spotify_search(
                vec![
                    spotify_factory::mock_track(
                        "4uLU6hMCjMI75M1A2tKUQC",
                        "Evidências",
                        "Chitãozinho & Xororó",
                    ),
                    spotify_factory::mock_track(
                        "1lCRw5FEZ1gPDNPzy1K4zW",
                        "Velha Infância",
                        "Tribalistas",
                    ),
                ],
                1,
            )
            .build()
            .await?;

        let result = spotify_search(
            State(test.app_state()),
            params(" evidencias ", Some("5")),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: SearchResultsDto = json_body(resp).await;
        assert_eq!(body.query, "evidencias");
        assert_eq!(body.count, 2);
        assert_eq!(body.results[0].id, "4uLU6hMCjMI75M1A2tKUQC");
        assert_eq!(
            body.results[1].embed_url,
            "https://open.spotify.com/embed/track/1lCRw5FEZ1gPDNPzy1K4zW"
        );

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// A non-numeric limit falls back to the default instead of failing
    async fn accepts_invalid_limit() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_spotify_token(1)
            .with_spotify_search(vec![], 1)
            .build()
            .await?;

        let result =
            spotify_search(State(test.app_state()), params("amor", Some("muitos"))).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: SearchResultsDto = json_body(resp).await;
        assert_eq!(body.count, 0);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 with an empty result list and no Spotify request
    async fn rejects_short_query() -> Result<(), TestError> {
        let test = TestBuilder::new().with_spotify_token(0).build().await?;

        let result = spotify_search(State(test.app_state()), params(" a ", None)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: SearchErrorDto = json_body(resp).await;
        assert!(body.results.is_empty());

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 503 when Spotify credentials are not configured
    async fn returns_unavailable_without_spotify() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = spotify_search(
            State(test.app_state_without_spotify()),
            params("evidencias", None),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 with an empty result list when Spotify rejects the search
    async fn returns_internal_error_on_search_failure() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_spotify_token(1).build().await?;
        let mock = test.spotify().create_search_error_endpoint(400, 1);

        let result =
            spotify_search(State(test.app_state()), params("evidencias", None)).await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: SearchErrorDto = json_body(resp).await;
        assert!(body.results.is_empty());

        mock.assert();
        test.assert_mocks();

        Ok(())
    }
}
