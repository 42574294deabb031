use bookstore::catalog::controller::router;
use bookstore::core::controller::AppState;
use bookstore::core::domain::{Configuration, ServerArgs};
use bookstore::utils::logs::setup_tracing;
use bookstore::utils::xml::create_document_if_missing;
use clap::Parser;
use tracing::info;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from(ServerArgs::parse());
    setup_tracing();

    if create_document_if_missing(&config.data_file, config.root_element.as_str()).await? {
        info!(data_file = %config.data_file.display(), "created empty bookstore document");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str()).await?;
    info!(addr = config.bind_addr.as_str(), data_file = %config.data_file.display(), "bookstore listening");

    let app = router(AppState::new(&config));
    axum::serve(listener, app).await?;
    Ok(())
}
