use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct BookReportCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl BookReportCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookReportCommandRequest {}

impl BookReportCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct BookReportCommandResponse {
    pub html: String,
}

impl BookReportCommandResponse {
    pub fn new(html: String) -> Self {
        Self {
            html,
        }
    }
}

#[async_trait]
impl Command<BookReportCommandRequest, BookReportCommandResponse> for BookReportCommand {
    async fn execute(&self, _req: BookReportCommandRequest) -> Result<BookReportCommandResponse, CommandError> {
        self.catalog_service.book_report()
            .await.map_err(CommandError::from).map(BookReportCommandResponse::new)
    }
}
