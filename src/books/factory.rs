use crate::books::repository::BookRepository;
use crate::books::repository::xml_book_repository::XmlBookRepository;
use crate::core::repository::DocumentStore;

pub(crate) fn create_book_repository(store: DocumentStore) -> Box<dyn BookRepository> {
    Box::new(XmlBookRepository::new(store))
}
