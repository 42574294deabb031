use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service. Absent fields deserialize
// to empty values and are rejected by validation, not by the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BookDto {
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    pub category: String,
    pub year: i32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, authors: &[&str], category: &str, year: i32, price: f64) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            category: category.to_string(),
            year,
            price,
            cover: None,
        }
    }

    pub fn with_cover(mut self, cover: &str) -> BookDto {
        self.cover = Some(cover.to_string());
        self
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
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

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", &["author"], "web", 2020, 9.99);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(None, book.cover);
    }

    #[tokio::test]
    async fn test_should_default_missing_json_fields() {
        let book: BookDto = serde_json::from_str(r#"{"isbn": "123", "title": "T"}"#).expect("should parse");
        assert_eq!("123", book.isbn.as_str());
        assert!(book.authors.is_empty());
        assert_eq!(0, book.year);
        assert_eq!(0.0, book.price);
    }

    #[tokio::test]
    async fn test_should_omit_missing_cover() {
        let json = serde_json::to_value(BookDto::new("123", "T", &["A"], "C", 2020, 9.99)).expect("should serialize");
        assert!(json.get("cover").is_none());
        let json = serde_json::to_value(BookDto::new("123", "T", &["A"], "C", 2020, 9.99).with_cover("c.png"))
            .expect("should serialize");
        assert_eq!("c.png", json["cover"].as_str().expect("cover"));
    }
}
