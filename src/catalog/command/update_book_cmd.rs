use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// isbn always comes from the request path, never from the body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(skip_deserializing)]
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    pub category: String,
    pub year: i32,
    pub price: f64,
    pub cover: Option<String>,
}

impl UpdateBookCommandRequest {
    #[cfg(test)]
    pub fn new(isbn: &str, title: &str, authors: &[&str], category: &str, year: i32, price: f64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            category: category.to_string(),
            year,
            price,
            cover: None,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            isbn: self.isbn.to_string(),
            title: self.title.to_string(),
            authors: self.authors.clone(),
            category: self.category.to_string(),
            year: self.year,
            price: self.price,
            cover: self.cover.clone(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_update_book() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let add_cmd = AddBookCommand::new(factory::create_test_catalog_service(dir.path()).await);
        let update_cmd = UpdateBookCommand::new(factory::create_test_catalog_service(dir.path()).await);

        let book = BookDto::new("123", "test book", &["A", "B"], "C", 2020, 9.99);
        let _ = add_cmd.execute(AddBookCommandRequest::new(&book))
            .await.expect("should add book");
        let req = UpdateBookCommandRequest::new("123", "new title", &["Z"], "D", 2021, 1.5);
        let res = update_cmd.execute(req).await.expect("should update book");
        assert_eq!("new title", res.book.title.as_str());
        assert_eq!(vec!["Z".to_string()], res.book.authors);
    }

    #[tokio::test]
    async fn test_should_fail_update_of_missing_book() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let update_cmd = UpdateBookCommand::new(factory::create_test_catalog_service(dir.path()).await);
        let req = UpdateBookCommandRequest::new("404", "title", &["A"], "C", 2020, 1.0);
        let res = update_cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_ignore_isbn_in_body() {
        let req: UpdateBookCommandRequest = serde_json::from_str(r#"{"isbn": "body", "title": "T"}"#)
            .expect("should parse");
        assert_eq!("", req.isbn.as_str());
        assert_eq!("T", req.title.as_str());
    }
}
