use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use quick_xml::se::Serializer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use crate::core::library::{LibraryError, LibraryResult};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

// empty_document renders a document with nothing but its root element
pub(crate) fn empty_document(root_element: &str) -> String {
    format!("{}\n<{}/>\n", XML_DECLARATION, root_element)
}

/// Creates the backing document with an empty root element unless the file already exists.
/// Returns true when a new document was written.
pub async fn create_document_if_missing(path: &Path, root_element: &str) -> LibraryResult<bool> {
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;
    match file {
        Ok(mut file) => {
            file.write_all(empty_document(root_element).as_bytes()).await?;
            file.flush().await?;
            Ok(true)
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(LibraryError::from(err)),
    }
}

pub(crate) fn parse_document<T: DeserializeOwned>(xml: &str) -> LibraryResult<T> {
    Ok(quick_xml::de::from_str(xml)?)
}

pub(crate) fn write_document<T: Serialize>(doc: &T) -> LibraryResult<String> {
    let mut buffer = String::new();
    buffer.push_str(XML_DECLARATION);
    buffer.push('\n');
    let mut ser = Serializer::new(&mut buffer);
    ser.indent(' ', 2);
    doc.serialize(ser)?;
    buffer.push('\n');
    Ok(buffer)
}

pub(crate) async fn load_document<T: DeserializeOwned>(path: &Path) -> LibraryResult<T> {
    let xml = tokio::fs::read_to_string(path).await?;
    parse_document(xml.as_str())
}

pub(crate) async fn save_document<T: Serialize>(path: &Path, doc: &T) -> LibraryResult<()> {
    let xml = write_document(doc)?;
    tokio::fs::write(path, xml).await?;
    Ok(())
}

// Missing or blank numbers read as zero; anything else must parse.
pub(crate) fn parse_number_element<T: FromStr + Default>(name: &str, value: Option<&str>) -> LibraryResult<T> {
    match value.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => text.parse::<T>().map_err(|_| {
            LibraryError::serialization(format!("invalid number {:?} for <{}>", text, name).as_str())
        }),
    }
}
