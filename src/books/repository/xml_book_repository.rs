use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{DocumentStore, Repository};
use crate::utils::xml::{load_document, parse_number_element, save_document};

// <bookstore><book category=".." cover=".."><isbn/><title/><author/>..<year/><price/></book></bookstore>
// Attributes have to be declared before child elements for the serializer.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "bookstore")]
struct BookstoreDocument {
    #[serde(rename = "book", default)]
    books: Vec<BookElement>,
}

/// One `<book>` element. Only the fields below are mapped: any other child element or
/// attribute found in the document is dropped the next time the document is saved,
/// including by a delete that matched nothing.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BookElement {
    #[serde(rename = "@category", default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(rename = "@cover", default, skip_serializing_if = "Option::is_none")]
    cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "author", default)]
    authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<String>,
}

impl BookElement {
    // element text is read back trimmed
    fn has_isbn(&self, isbn: &str) -> bool {
        self.isbn.as_deref().map(str::trim) == Some(isbn.trim())
    }
}

impl BookstoreDocument {
    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.has_isbn(isbn))
    }
}

#[derive(Debug)]
pub struct XmlBookRepository {
    store: DocumentStore,
}

impl XmlBookRepository {
    pub(crate) fn new(store: DocumentStore) -> Self {
        Self {
            store,
        }
    }

    async fn load(&self) -> LibraryResult<BookstoreDocument> {
        load_document(self.store.path()).await
    }

    async fn save(&self, doc: &BookstoreDocument) -> LibraryResult<()> {
        save_document(self.store.path(), doc).await
    }
}

#[async_trait]
impl Repository<BookEntity> for XmlBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let _guard = self.store.lock().await;
        let mut doc = self.load().await?;
        if doc.position(entity.isbn.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("a book with isbn {} already exists", entity.id()).as_str()));
        }
        doc.books.push(map_to_element(entity));
        self.save(&doc).await?;
        debug!(isbn = entity.isbn.as_str(), total = doc.books.len(), "appended book element");
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let _guard = self.store.lock().await;
        let mut doc = self.load().await?;
        let ndx = doc.position(entity.isbn.as_str()).ok_or_else(|| {
            LibraryError::not_found(format!("book with isbn {} does not exist", entity.id()).as_str())
        })?;
        doc.books[ndx] = map_to_element(entity);
        self.save(&doc).await?;
        debug!(isbn = entity.isbn.as_str(), position = ndx, "replaced book element");
        Ok(1)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let _guard = self.store.lock().await;
        let mut doc = self.load().await?;
        let removed = match doc.position(id) {
            Some(ndx) => {
                doc.books.remove(ndx);
                1
            }
            None => 0,
        };
        // the document is rewritten even when nothing matched
        self.save(&doc).await?;
        debug!(isbn = id, removed, "deleted book element");
        Ok(removed)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let _guard = self.store.lock().await;
        let doc = self.load().await?;
        doc.books.iter().map(map_to_book).collect()
    }
}

#[async_trait]
impl BookRepository for XmlBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let _guard = self.store.lock().await;
        let doc = self.load().await?;
        doc.books.iter()
            .find(|b| b.has_isbn(isbn))
            .map(map_to_book)
            .transpose()
    }
}

fn map_to_book(element: &BookElement) -> LibraryResult<BookEntity> {
    Ok(BookEntity {
        isbn: element.isbn.clone().unwrap_or_default(),
        title: element.title.clone().unwrap_or_default(),
        authors: element.authors.clone(),
        category: element.category.clone().unwrap_or_default(),
        year: parse_number_element("year", element.year.as_deref())?,
        price: parse_number_element("price", element.price.as_deref())?,
        cover: element.cover.clone(),
    })
}

fn map_to_element(entity: &BookEntity) -> BookElement {
    BookElement {
        category: Some(entity.category.to_string()),
        cover: entity.cover.clone().filter(|c| !c.is_empty()),
        isbn: Some(entity.isbn.to_string()),
        title: Some(entity.title.to_string()),
        authors: entity.authors.clone(),
        year: Some(entity.year.to_string()),
        price: Some(entity.price.to_string()),
    }
}
