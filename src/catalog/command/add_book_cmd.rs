use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) authors: Vec<String>,
    pub(crate) category: String,
    pub(crate) year: i32,
    pub(crate) price: f64,
    pub(crate) cover: Option<String>,
}

impl AddBookCommandRequest {
    #[cfg(test)]
    pub fn new(book: &BookDto) -> Self {
        Self {
            isbn: book.isbn.to_string(),
            title: book.title.to_string(),
            authors: book.authors.clone(),
            category: book.category.to_string(),
            year: book.year,
            price: book.price,
            cover: book.cover.clone(),
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
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
