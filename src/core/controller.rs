use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::DocumentStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) store: DocumentStore,
}

impl AppState {
    pub fn new(config: &Configuration) -> AppState {
        AppState {
            store: DocumentStore::new(config.data_file.as_path()),
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            CommandError::NotFound { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            CommandError::Serialization { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_client_errors() {
        let (status, message) = ServerError::from(CommandError::DuplicateKey { message: "dup".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("dup", message.as_str());
        let (status, _) = ServerError::from(CommandError::NotFound { message: "missing".to_string() });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Validation { message: "bad".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
    }

    #[tokio::test]
    async fn test_should_map_server_errors() {
        let (status, _) = ServerError::from(CommandError::Runtime { message: "io".to_string(), reason_code: None });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        let (status, _) = ServerError::from(CommandError::Serialization { message: "xml".to_string() });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }
}
