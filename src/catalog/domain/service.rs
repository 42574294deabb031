use async_trait::async_trait;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::report::render_report;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::from(book);
        if self.book_repository.find_by_isbn(entity.isbn.as_str()).await?.is_some() {
            return Err(LibraryError::duplicate_key(
                format!("a book with isbn {} already exists", entity.isbn).as_str()));
        }
        validate_book(&entity)?;
        let _ = self.book_repository.create(&entity).await?;
        info!(isbn = entity.isbn.as_str(), "added book");
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let removed = self.book_repository.delete(isbn).await?;
        if removed == 0 {
            warn!(isbn, "no book to remove");
        } else {
            info!(isbn, "removed book");
        }
        Ok(())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let entity = BookEntity::from(book);
        if self.book_repository.find_by_isbn(entity.isbn.as_str()).await?.is_none() {
            return Err(LibraryError::not_found(
                format!("book with isbn {} does not exist", entity.isbn).as_str()));
        }
        validate_book(&entity)?;
        let _ = self.book_repository.update(&entity).await?;
        info!(isbn = entity.isbn.as_str(), "updated book");
        Ok(BookDto::from(&entity))
    }

    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn book_report(&self) -> LibraryResult<String> {
        let books = self.find_books().await?;
        info!(books = books.len(), "rendering book report");
        Ok(render_report(&books))
    }
}

fn validate_book<B: Book>(book: &B) -> LibraryResult<()> {
    let missing = if book.id().is_empty() {
        Some("isbn")
    } else if book.title().is_empty() {
        Some("title")
    } else if book.authors().is_empty() || book.authors().iter().any(|a| a.is_empty()) {
        Some("authors")
    } else if book.category().is_empty() {
        Some("category")
    } else if book.year() <= 0 {
        Some("year")
    } else if book.price().is_nan() || book.price() <= 0.0 {
        Some("price")
    } else {
        None
    };
    match missing {
        Some(field) => Err(LibraryError::validation(
            format!("all book fields are mandatory, {} is missing or not positive", field).as_str(),
            Some(field.to_string()))),
        None => Ok(()),
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        let authors: Vec<&str> = other.authors.iter().map(String::as_str).collect();
        let book = BookDto::new(other.isbn.as_str(), other.title.as_str(), &authors,
                                other.category.as_str(), other.year, other.price);
        match other.cover() {
            Some(cover) => book.with_cover(cover),
            None => book,
        }
    }
}

// Text is stored trimmed since the document reader trims element text on load.
impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        let authors: Vec<&str> = other.authors.iter().map(|a| a.trim()).collect();
        let entity = BookEntity::new(other.isbn.trim(), other.title.trim(), &authors,
                                     other.category.trim(), other.year, other.price);
        // an empty cover means no cover
        match other.cover().map(str::trim).filter(|c| !c.is_empty()) {
            Some(cover) => entity.with_cover(cover),
            None => entity,
        }
    }
}
