//! Page administration session data.
//!
//! After a successful login the session remembers which page slug the visitor may edit.
//! A session administers at most one page, logging into another page replaces the slug.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the slug of the page the visitor is logged into.
pub const SESSION_ADMIN_SLUG_KEY: &str = "phygital:auth:admin_slug";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAdminSlug(pub String);

impl SessionAdminSlug {
    /// Inserts the administered page slug into the session, replacing any previous one.
    pub async fn insert(session: &Session, slug: &str) -> Result<(), Error> {
        session
            .insert(SESSION_ADMIN_SLUG_KEY, SessionAdminSlug(slug.to_string()))
            .await?;

        Ok(())
    }

    /// Gets the administered page slug from the session.
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let slug = session
            .get::<SessionAdminSlug>(SESSION_ADMIN_SLUG_KEY)
            .await?
            .map(|SessionAdminSlug(slug)| slug);

        Ok(slug)
    }

    /// Removes and returns the administered page slug.
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let slug = session
            .remove::<SessionAdminSlug>(SESSION_ADMIN_SLUG_KEY)
            .await?
            .map(|SessionAdminSlug(slug)| slug);

        Ok(slug)
    }

    /// Whether the session is logged into the page `slug`.
    pub async fn is_admin_of(session: &Session, slug: &str) -> Result<bool, Error> {
        Ok(Self::get(session).await?.as_deref() == Some(slug))
    }
}
