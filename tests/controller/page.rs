mod get_page {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use phygital::{model::page::PageDto, server::controller::page::get_page};
    use phygital_test_utils::prelude::*;

    use crate::util::{json_body, TestSetupExt};

    #[tokio::test]
    /// Expect 200 with the formatted page
    async fn returns_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 1)
            .build()
            .await?;

        let result = get_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let page: PageDto = json_body(resp).await;
        assert_eq!(page.slug, "lucasegabi");
        assert_eq!(page.fotos.len(), 2);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a slug without a page
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_missing_page("unknown", 1)
            .build()
            .await?;

        let result = get_page(State(test.app_state()), Path("unknown".to_string())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 rather than 404 when Directus rejects the lookup
    async fn returns_internal_error_on_upstream_failure() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;
        let mock = test
            .directus()
            .create_page_error_endpoint("lucasegabi", 401, 1);

        let result = get_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        mock.assert();

        Ok(())
    }
}

mod get_admin_page {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use phygital::server::{
        controller::page::get_admin_page, model::session::admin::SessionAdminSlug,
    };
    use phygital_test_utils::prelude::*;

    use crate::util::TestSetupExt;

    #[tokio::test]
    async fn returns_page_when_logged_in() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 1)
            .build()
            .await?;
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let result = get_admin_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 without a Directus request for a session of another page
    async fn returns_unauthorized_for_other_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 0)
            .build()
            .await?;
        SessionAdminSlug::insert(&test.session, "outrapagina")
            .await
            .unwrap();

        let result = get_admin_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        test.assert_mocks();

        Ok(())
    }
}

mod update_page {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use phygital::{
        model::{
            api::ErrorDto,
            page::{PageDto, UpdatePageDto},
        },
        server::{
            controller::page::update_page, error::page::UPDATE_FAILED_MESSAGE,
            model::session::admin::SessionAdminSlug,
        },
    };
    use phygital_test_utils::prelude::*;
    use serde_json::json;

    use crate::util::{json_body, TestSetupExt};

    fn update() -> UpdatePageDto {
        UpdatePageDto {
            titulo: "Nosso amor".to_string(),
            mensagem: "Te amo".to_string(),
            cor_fundo: "#123456".to_string(),
            spotify_url: "spotify:track:abc123".to_string(),
        }
    }

    #[tokio::test]
    /// Expect 200 after patching with the existing photos and an embed URL
    async fn updates_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 2)
            .with_page_update(
                directus_factory::MOCK_PAGE_ID,
                Some(json!({
                    "titulo": "Nosso amor",
                    "mensagem": "Te amo",
                    "cor_fundo": "#123456",
                    "spotify_url": "https://open.spotify.com/embed/track/abc123",
                    "fotos": ["file-1", "file-2"]
                })),
                1,
            )
            .build()
            .await?;
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let result = update_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            Json(update()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let page: PageDto = json_body(resp).await;
        assert_eq!(page.slug, "lucasegabi");

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 and no update when not logged in
    async fn returns_unauthorized_without_login() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page_update(directus_factory::MOCK_PAGE_ID, None, 0)
            .build()
            .await?;

        let result = update_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            Json(update()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 with the dashboard message when Directus rejects the patch
    async fn returns_update_failed_message() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 1)
            .build()
            .await?;
        let mock = test.directus().create_page_update_endpoint(
            directus_factory::MOCK_PAGE_ID,
            500,
            None,
            1,
        );
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let result = update_page(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            Json(update()),
        )
        .await;

        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorDto = json_body(resp).await;
        assert_eq!(error.error, UPDATE_FAILED_MESSAGE);

        mock.assert();
        test.assert_mocks();

        Ok(())
    }
}

mod upload_photos {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use phygital::server::{
        controller::page::upload_photos, model::session::admin::SessionAdminSlug,
    };
    use phygital_test_utils::prelude::*;
    use serde_json::json;

    use crate::util::{location, multipart, TestSetupExt};

    const JPEG: &[u8] = b"\xFF\xD8\xFF";

    #[tokio::test]
    /// Expect 303 to the dashboard after uploading every `fotos` field
    async fn uploads_photos_and_redirects() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 1)
            .with_file_upload(directus_factory::mock_file("file-3"), 2)
            .with_page_update(
                directus_factory::MOCK_PAGE_ID,
                Some(json!({ "fotos": ["file-1", "file-2", "file-3", "file-3"] })),
                1,
            )
            .build()
            .await?;
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let form = multipart(&[
            ("fotos", "praia.jpg", JPEG),
            ("outro", "ignorado.jpg", JPEG),
            ("fotos", "jantar.jpg", JPEG),
        ])
        .await;

        let result = upload_photos(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            form,
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), Some("/lucasegabi/dashboard"));

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 303 back to the dashboard with the upload error when Directus rejects the patch
    async fn redirects_to_dashboard_with_error_on_failed_update() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_page(directus_factory::mock_page("lucasegabi"), 1)
            .with_file_upload(directus_factory::mock_file("file-3"), 1)
            .build()
            .await?;
        let mock = test.directus().create_page_update_endpoint(
            directus_factory::MOCK_PAGE_ID,
            500,
            None,
            1,
        );
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let form = multipart(&[("fotos", "praia.jpg", JPEG)]).await;

        let result = upload_photos(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            form,
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), Some("/lucasegabi/dashboard?erro=upload"));

        mock.assert();
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// A missing page also returns to the dashboard rather than a JSON error
    async fn redirects_to_dashboard_with_error_for_missing_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_missing_page("lucasegabi", 1)
            .with_file_upload(directus_factory::mock_file("file-3"), 0)
            .build()
            .await?;
        SessionAdminSlug::insert(&test.session, "lucasegabi")
            .await
            .unwrap();

        let form = multipart(&[("fotos", "praia.jpg", JPEG)]).await;

        let result = upload_photos(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            form,
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), Some("/lucasegabi/dashboard?erro=upload"));

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 303 to the login form without uploading when not logged in
    async fn redirects_to_login_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_file_upload(directus_factory::mock_file("file-3"), 0)
            .build()
            .await?;

        let form = multipart(&[("fotos", "praia.jpg", JPEG)]).await;

        let result = upload_photos(
            State(test.app_state()),
            Path("lucasegabi".to_string()),
            test.session.clone(),
            form,
        )
        .await;

        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), Some("/lucasegabi/login"));

        test.assert_mocks();

        Ok(())
    }
}
