use std::{env, sync::Arc};

use actix_web::HttpServer;

use common::{
    entities::{admin::Admin, document::Document, reset_token::ResetToken},
    repository::mongo_repository::MongoRepository,
};
use documents::create_app;
use documents::repositories::{admin::AdminRepo, document::DocumentRepo, token::TokenRepo};
use mail::{MailerObject, SmtpMailer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    env_logger::init();

    let mongo_uri = env::var("MONGOURI").unwrap();
    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5000);
    let files_dir = env::var("FILES_DIR").unwrap_or_else(|_| "files".to_string());

    let admin_repo = AdminRepo::new(
        MongoRepository::<Admin>::new(&mongo_uri, "system_documento", "admins").await,
    );
    let document_repo = DocumentRepo::new(
        MongoRepository::<Document>::new(&mongo_uri, "system_documento", "documents").await,
    );
    let token_repo = TokenRepo::new(
        MongoRepository::<ResetToken>::new(&mongo_uri, "system_documento", "reset_tokens").await,
    );
    let mailer: MailerObject = Arc::new(SmtpMailer::new());

    std::fs::create_dir_all(&files_dir)?;

    log::info!("Servidor iniciado en el puerto {}", port);

    HttpServer::new(move || {
        create_app(
            admin_repo.clone(),
            document_repo.clone(),
            token_repo.clone(),
            mailer.clone(),
            files_dir.clone(),
        )
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
