//! Page login.
//!
//! Pages are protected by an optional plain-text password stored in Directus. A
//! successful login stores the page slug in the session, which then grants access to the
//! dashboard of that page only.

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    client::directus::DirectusClient,
    error::{auth::AuthError, Error},
    model::{directus::PageRecord, session::admin::SessionAdminSlug},
    service::page::PageService,
};

/// Checks `input` against the page password.
///
/// A page without a password accepts any input. Comparison runs in constant time with
/// respect to the password contents.
pub fn verify_password(page: &PageRecord, input: &str) -> bool {
    match page.senha.as_deref() {
        None | Some("") => true,
        Some(password) => constant_time_eq(password.as_bytes(), input.as_bytes()),
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub struct AuthService<'a> {
    directus: &'a DirectusClient,
}

impl<'a> AuthService<'a> {
    pub fn new(directus: &'a DirectusClient) -> Self {
        Self { directus }
    }

    /// Logs the session into the page `slug`.
    ///
    /// # Returns
    /// - `Ok(())` - Password accepted, the slug is stored in the session
    /// - `Err(Error::AuthError(AuthError::PageNotFound))` - No page has this slug
    /// - `Err(Error::AuthError(AuthError::InvalidPassword))` - Wrong password
    /// - `Err(Error)` - Directus or session store failure
    pub async fn login(&self, session: &Session, slug: &str, password: &str) -> Result<(), Error> {
        let page = PageService::new(self.directus)
            .find_record(slug)
            .await?
            .ok_or_else(|| AuthError::PageNotFound(slug.to_string()))?;

        if !verify_password(&page, password) {
            tracing::warn!("Wrong password submitted for page {}", slug);

            return Err(AuthError::InvalidPassword(slug.to_string()).into());
        }

        // New session ID on login, a pre-login ID must not carry the admin slug
        session.cycle_id().await?;
        SessionAdminSlug::insert(session, slug).await?;

        tracing::info!("Session logged into page {}", slug);

        Ok(())
    }
}

/// Ensures the session is logged into the page `slug`.
pub async fn require_admin(session: &Session, slug: &str) -> Result<(), Error> {
    if SessionAdminSlug::is_admin_of(session, slug).await? {
        Ok(())
    } else {
        Err(AuthError::NotLoggedIn(slug.to_string()).into())
    }
}

/// Removes the page login from the session, returning the slug it was logged into.
pub async fn logout(session: &Session) -> Result<Option<String>, Error> {
    let slug = SessionAdminSlug::remove(session).await?;

    if let Some(slug) = &slug {
        tracing::info!("Session logged out of page {}", slug);
    }

    Ok(slug)
}
