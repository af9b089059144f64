//! Implementation of report-core PagePublisher for Confluence

use report_core::{Credentials, PagePublisher, ReportError, Result};
use tracing::info;

use crate::client::ConfluenceClient;

/// Publishes pages with credentials supplied up front
pub struct ConfluencePublisher {
    client: ConfluenceClient,
    credentials: Credentials,
}

impl ConfluencePublisher {
    pub fn new(client: ConfluenceClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }
}

impl PagePublisher for ConfluencePublisher {
    fn publish_page(&self, space: &str, title: &str, content: &str) -> Result<()> {
        let session = self
            .client
            .login(&self.credentials)
            .map_err(ReportError::from)?;
        info!(username = session.username(), "Logged in to wiki");

        let mut page = self
            .client
            .get_page(&session, space, title)
            .map_err(ReportError::from)?;
        page.set_content(content);

        let stored = self
            .client
            .store_page(&session, &page)
            .map_err(ReportError::from)?;
        info!(page_id = %stored.id, version = stored.version, "Stored wiki page");
        Ok(())
    }
}
