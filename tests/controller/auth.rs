mod login {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use phygital::{
        model::{
            api::ErrorDto,
            page::{LoginDto, LoginRequestDto},
        },
        server::{
            controller::auth::login,
            error::auth::INVALID_PASSWORD_MESSAGE,
            model::session::admin::SessionAdminSlug,
        },
    };
    use phygital_test_utils::prelude::*;

    use crate::util::{json_body, TestSetupExt};

    fn password(password: &str) -> Json<LoginRequestDto> {
        Json(LoginRequestDto {
            password: password.to_string(),
        })
    }

    #[tokio::test]
    /// Expect 200 and the slug stored in the session for the right password
    async fn logs_in_with_correct_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(
                directus_factory::mock_page_with_password("lucasegabi", "segredo"),
                1,
            )
            .build()
            .await?;

        let result = login(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            password("segredo"),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: LoginDto = json_body(resp).await;
        assert_eq!(body.slug, "lucasegabi");

        let slug = SessionAdminSlug::get(&test.session).await.unwrap();
        assert_eq!(slug.as_deref(), Some("lucasegabi"));

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 with the login form message and an untouched session
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(
                directus_factory::mock_page_with_password("lucasegabi", "segredo"),
                1,
            )
            .build()
            .await?;

        let result = login(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            password("errada"),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: ErrorDto = json_body(resp).await;
        assert_eq!(body.error, INVALID_PASSWORD_MESSAGE);

        let slug = SessionAdminSlug::get(&test.session).await.unwrap();
        assert!(slug.is_none());

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// A page without a password accepts any input
    async fn accepts_any_password_for_open_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 1)
            .build()
            .await?;

        let result = login(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            password(""),
        )
        .await;

        assert!(result.is_ok());

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when no page has the slug
    async fn returns_not_found_for_missing_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_missing_page("unknown", 1)
            .build()
            .await?;

        let result = login(
            State(test.app_state()),
            Path("unknown".to_string()),
            test.session.clone(),
            password("segredo"),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// A session already logged into the page skips the Directus lookup
    async fn skips_password_when_already_logged_in() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(
                directus_factory::mock_page_with_password("lucasegabi", "segredo"),
                0,
            )
            .build()
            .await?;
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let result = login(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            password("errada"),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        test.assert_mocks();

        Ok(())
    }
}

mod logout {
    use axum::{extract::Path, http::StatusCode, response::IntoResponse};
    use phygital::server::{controller::auth::logout, model::session::admin::SessionAdminSlug};
    use phygital_test_utils::prelude::*;

    use crate::util::location;

    #[tokio::test]
    /// Expect a redirect to the public page and a cleared session
    async fn logs_out_and_redirects_to_page() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let result = logout(Path("lucasegabi".to_string()), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), Some("/lucasegabi"));

        let slug = SessionAdminSlug::get(&test.session).await.unwrap();
        assert!(slug.is_none());

        Ok(())
    }

    #[tokio::test]
    /// Expect a redirect to the login form and the other page's login kept
    async fn redirects_to_login_when_not_logged_in() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAdminSlug::insert(&test.session, "outrapagina")
            .await
            .unwrap();

        let result = logout(Path("lucasegabi".to_string()), test.session.clone()).await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), Some("/lucasegabi/login"));

        let slug = SessionAdminSlug::get(&test.session).await.unwrap();
        assert_eq!(slug.as_deref(), Some("outrapagina"));

        Ok(())
    }
}
