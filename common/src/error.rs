use actix_web::{http::StatusCode, HttpResponse};

#[derive(Debug)]
pub struct ServiceError {
    code: Option<StatusCode>,
    err: anyhow::Error,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ServiceError: {}", self.err)
    }
}

impl actix_web::error::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.status_code();
        if code.is_server_error() {
            log::error!("{}", self.err);
            return HttpResponse::build(code)
                .json(serde_json::json!({"message": "Error interno del servidor"}));
        }
        HttpResponse::build(code).json(serde_json::json!({"message": self.err.to_string()}))
    }
}

impl<E: Into<anyhow::Error>> From<E> for ServiceError {
    fn from(err: E) -> ServiceError {
        ServiceError {
            code: None,
            err: err.into(),
        }
    }
}

pub trait AddCode {
    fn code(self, code: u16) -> ServiceError;
}

impl AddCode for anyhow::Error {
    fn code(self, code: u16) -> ServiceError {
        ServiceError {
            code: StatusCode::from_u16(code).ok(),
            err: self,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
