use quick_xml::escape::escape;
use crate::books::domain::Book;

const REPORT_HEADER: &str = "<html><body><table border='1'>\
<tr><th>Title</th><th>Authors</th><th>Category</th><th>Year</th><th>Price</th></tr>";
const REPORT_FOOTER: &str = "</table></body></html>";

/// Renders one table row per book in the given order, authors joined with ", ".
pub(crate) fn render_report<B: Book>(books: &[B]) -> String {
    let mut html = String::from(REPORT_HEADER);
    for book in books {
        let authors = book.authors().join(", ");
        html.push_str(format!("<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                              escape(book.title()),
                              escape(authors.as_str()),
                              escape(book.category()),
                              book.year(),
                              book.price()).as_str());
    }
    html.push_str(REPORT_FOOTER);
    html
}
