pub mod handlers;
pub mod repositories;
pub mod service;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware, web, App,
};

use mail::MailerObject;

use crate::{
    handlers::{
        admin::{check_email, get_admins, post_admin},
        auth::{login, new_password, reset_password, validate_reset},
        document::{get_documents, patch_document, register_document},
    },
    repositories::{admin::AdminRepo, document::DocumentRepo, token::TokenRepo},
    service::{auth::AuthService, document::DocumentService},
};

pub fn create_app(
    admin_repo: AdminRepo,
    document_repo: DocumentRepo,
    token_repo: TokenRepo,
    mailer: MailerObject,
    files_dir: String,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    let auth_service = AuthService::new(
        admin_repo.clone(),
        document_repo.clone(),
        token_repo,
        mailer,
    );
    let document_service = DocumentService::new(document_repo, files_dir.clone());

    let cors = Cors::permissive();
    App::new()
        .wrap(cors)
        .wrap(middleware::Logger::default())
        .app_data(web::Data::new(admin_repo))
        .app_data(web::Data::new(auth_service))
        .app_data(web::Data::new(document_service))
        .service(register_document)
        .service(get_documents)
        .service(patch_document)
        .service(get_admins)
        .service(post_admin)
        .service(check_email)
        .service(login)
        .service(reset_password)
        .service(validate_reset)
        .service(new_password)
        .service(actix_files::Files::new("/files", files_dir))
}

#[cfg(test)]
pub fn create_test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    use std::sync::Arc;

    use common::repository::test_repository::TestRepository;
    use mail::TestMailer;

    create_app(
        AdminRepo::new(TestRepository::new()),
        DocumentRepo::new(TestRepository::new()),
        TokenRepo::new(TestRepository::new()),
        Arc::new(TestMailer::new()),
        "target/test-files".to_string(),
    )
}
