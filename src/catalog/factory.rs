use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::repository::DocumentStore;

pub(crate) fn create_catalog_service(store: DocumentStore) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(store);
    Box::new(CatalogServiceImpl::new(book_repo))
}

// test catalog backed by a fresh document inside dir
#[cfg(test)]
pub(crate) async fn create_test_catalog_service(dir: &std::path::Path) -> Box<dyn CatalogService> {
    let path = dir.join("bookstore.xml");
    let config = crate::core::domain::Configuration::new(path.to_string_lossy().as_ref());
    crate::utils::xml::create_document_if_missing(&config.data_file, config.root_element.as_str())
        .await.expect("should create document");
    create_catalog_service(DocumentStore::new(&config.data_file))
}
