use std::path::PathBuf;
use clap::Parser;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_DATA_FILE: &str = "bookstore.xml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Command line of the bookstore server
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about = "Serves a book catalog stored in an XML document")]
pub struct ServerArgs {
    /// XML document holding the catalog, created when missing
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

// Configuration abstracts config options for the bookstore service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub bind_addr: String,
    pub root_element: String,
}

impl Configuration {
    pub fn new(data_file: &str) -> Self {
        Configuration::with_data_file(PathBuf::from(data_file))
    }

    fn with_data_file(data_file: PathBuf) -> Self {
        Configuration {
            data_file,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            root_element: "bookstore".to_string(),
        }
    }
}

impl From<ServerArgs> for Configuration {
    fn from(args: ServerArgs) -> Self {
        Configuration::with_data_file(args.data_file)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use clap::Parser;
    use crate::core::domain::{Configuration, ServerArgs, DEFAULT_BIND_ADDR, DEFAULT_DATA_FILE};

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("books.xml");
        assert_eq!(PathBuf::from("books.xml"), config.data_file);
        assert_eq!(DEFAULT_BIND_ADDR, config.bind_addr.as_str());
        assert_eq!("bookstore", config.root_element.as_str());
    }

    #[tokio::test]
    async fn test_should_build_config_from_args() {
        let args = ServerArgs::try_parse_from(["bookstore", "/tmp/catalog.xml"]).expect("should parse args");
        let config = Configuration::from(args);
        assert_eq!(PathBuf::from("/tmp/catalog.xml"), config.data_file);
        assert_eq!(DEFAULT_BIND_ADDR, config.bind_addr.as_str());

        let args = ServerArgs::try_parse_from(["bookstore"]).expect("should parse args");
        assert_eq!(PathBuf::from(DEFAULT_DATA_FILE), Configuration::from(args).data_file);
    }

    #[tokio::test]
    async fn test_should_reject_extra_args() {
        assert!(ServerArgs::try_parse_from(["bookstore", "a.xml", "b.xml"]).is_err());
        assert!(ServerArgs::try_parse_from(["bookstore", "--unknown"]).is_err());
    }
}
