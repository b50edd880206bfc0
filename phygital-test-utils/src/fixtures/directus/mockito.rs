//! Directus HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::TEST_DIRECTUS_TOKEN, fixtures::directus::DirectusFixtures};

impl<'a> DirectusFixtures<'a> {
    /// Create a mock endpoint answering the page lookup for `page["slug"]`.
    ///
    /// Matches `GET /items/paginas` with the slug filter and the static bearer token, and
    /// returns the page wrapped in a Directus `data` array.
    ///
    /// # Arguments
    /// - `page` - Page item JSON, must contain a string `slug`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_page_endpoint(&mut self, page: Value, expected_requests: usize) -> Mock {
        let slug = page["slug"].as_str().unwrap_or_default().to_string();

        self.page_lookup(&slug)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": [page] }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering the page lookup for `slug` with no results.
    pub fn create_missing_page_endpoint(&mut self, slug: &str, expected_requests: usize) -> Mock {
        self.page_lookup(slug)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": [] }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint failing the page lookup for `slug` with `status`.
    pub fn create_page_error_endpoint(
        &mut self,
        slug: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.page_lookup(slug)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "errors": [{ "message": "upstream failure" }] }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `PATCH /items/paginas/{page_id}` endpoint.
    ///
    /// When `body` is provided the request JSON must match it exactly.
    pub fn create_page_update_endpoint(
        &mut self,
        page_id: i64,
        status: usize,
        body: Option<Value>,
        expected_requests: usize,
    ) -> Mock {
        let mut mock = self
            .setup
            .server
            .mock("PATCH", format!("/items/paginas/{}", page_id).as_str())
            .match_header("authorization", format!("Bearer {}", TEST_DIRECTUS_TOKEN).as_str());

        if let Some(body) = body {
            mock = mock.match_body(Matcher::Json(body));
        }

        mock.with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": {} }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /files` endpoint returning `file`.
    pub fn create_file_upload_endpoint(&mut self, file: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/files")
            .match_header("authorization", format!("Bearer {}", TEST_DIRECTUS_TOKEN).as_str())
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "data": file }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /server/ping` endpoint answering with `status`.
    pub fn create_ping_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/server/ping")
            .with_status(status)
            .with_body("pong")
            .expect(expected_requests)
            .create()
    }

    fn page_lookup(&mut self, slug: &str) -> Mock {
        self.setup
            .server
            .mock("GET", "/items/paginas")
            .match_query(Matcher::UrlEncoded(
                "filter[slug][_eq]".to_string(),
                slug.to_string(),
            ))
            .match_header("authorization", format!("Bearer {}", TEST_DIRECTUS_TOKEN).as_str())
    }
}
