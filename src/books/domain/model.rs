use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity abstracts a catalog entry as it is kept in the backing document,
// isbn is the only key and every lookup scans the document in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    pub category: String,
    pub year: i32,
    pub price: f64,
    pub cover: Option<String>,
}

impl BookEntity {
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

    pub fn with_cover(mut self, cover: &str) -> Self {
        self.cover = Some(cover.to_string());
        self
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn authors(&self) -> &[String] {
        self.authors.as_slice()
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }
}
