use anyhow::anyhow;
use mongodb::bson::oid::ObjectId;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use common::{
    entities::{
        admin::{Admin, PublicAdmin},
        document::Document,
        letter::Letter,
        reset_token::ResetToken,
    },
    error::{AddCode, Result},
};
use mail::MailerObject;

use crate::repositories::{admin::AdminRepo, document::DocumentRepo, token::TokenRepo};

lazy_static::lazy_static! {
    static ref EMAIL_RE: regex::Regex =
        regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref RESET_LINK_BASE: String = std::env::var("RESET_LINK_BASE")
        .unwrap_or_else(|_| "http://localhost:3000/reset-password".to_string());
}

const TOKEN_LENGTH: usize = 32;
const SALT_LENGTH: usize = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct Login {
    pub admin: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub carrera: String,
    #[serde(rename = "receivedDocuments")]
    pub received_documents: Vec<Document>,
    #[serde(rename = "sentDocuments")]
    pub sent_documents: Vec<Document>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterAdmin {
    pub carrera: String,
    pub admin: String,
    pub email: String,
    pub password: String,
}

pub struct AuthService {
    admins: AdminRepo,
    documents: DocumentRepo,
    tokens: TokenRepo,
    mailer: MailerObject,
}

impl AuthService {
    pub fn new(
        admins: AdminRepo,
        documents: DocumentRepo,
        tokens: TokenRepo,
        mailer: MailerObject,
    ) -> Self {
        Self {
            admins,
            documents,
            tokens,
            mailer,
        }
    }

    fn hash_password(password: &str, salt: &str) -> String {
        sha256::digest(format!("{}{}", password, salt))
    }

    fn request_access(auth_password: &str, admin: &Admin) -> bool {
        Self::hash_password(auth_password, &admin.salt) == admin.password
    }

    fn random_string(len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    /// No session is issued; the response itself is the proof of
    /// authentication for this request.
    pub async fn login(&self, login: &Login) -> Result<LoginResponse> {
        let Some(admin) = self.admins.find_by_login(&login.admin).await? else {
            return Err(anyhow!("Credenciales inválidas").code(401));
        };

        if !Self::request_access(&login.password, &admin) {
            return Err(anyhow!("Credenciales inválidas").code(401));
        }

        let received_documents = self.documents.find_by_receptor(&admin.carrera).await?;
        let sent_documents = self.documents.find_by_emisor(&admin.carrera).await?;

        Ok(LoginResponse {
            carrera: admin.carrera,
            received_documents,
            sent_documents,
        })
    }

    pub async fn register(&self, register: RegisterAdmin) -> Result<PublicAdmin> {
        if !EMAIL_RE.is_match(&register.email) {
            return Err(anyhow!("Email inválido").code(400));
        }

        let salt = Self::random_string(SALT_LENGTH);
        let admin = Admin {
            id: ObjectId::new(),
            carrera: register.carrera,
            admin: register.admin,
            email: register.email,
            password: Self::hash_password(&register.password, &salt),
            salt,
        };

        if !self.admins.create(&admin).await? {
            return Err(anyhow!("El email ya está registrado").code(409));
        }

        Ok(admin.into())
    }

    pub async fn is_email_available(&self, email: &str) -> Result<bool> {
        Ok(self.admins.find_by_email(email).await?.is_none())
    }

    pub async fn request_reset(&self, email: &str) -> Result<()> {
        let Some(admin) = self.admins.find_by_email(email).await? else {
            return Err(anyhow!("No existe un administrador con ese email").code(404));
        };

        self.tokens.delete_by_email(&admin.email).await?;

        let token = ResetToken {
            id: ObjectId::new(),
            token: Self::random_string(TOKEN_LENGTH),
            email: admin.email.clone(),
            created: chrono::Utc::now().timestamp(),
        };
        self.tokens.create(&token).await?;

        let letter = Letter {
            id: ObjectId::new(),
            email: admin.email,
            subject: "Restablecimiento de contraseña".to_string(),
            message: format!(
                "Para restablecer su contraseña ingrese al siguiente enlace: {}/{}\n\nEl enlace expira en una hora.",
                RESET_LINK_BASE.as_str(),
                token.token
            ),
        };
        self.mailer.send(&letter).await?;

        Ok(())
    }

    /// An absent token covers "never existed", "consumed" and "expired and
    /// deleted" alike; they are indistinguishable to the caller.
    pub async fn validate_token(&self, token: &str) -> Result<bool> {
        let Some(found) = self.tokens.find(token).await? else {
            return Ok(false);
        };

        if found.is_expired(chrono::Utc::now().timestamp()) {
            self.tokens.consume(token).await?;
            return Ok(false);
        }

        Ok(true)
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let Some(consumed) = self.tokens.consume(token).await? else {
            return Err(anyhow!("Token inválido o expirado").code(401));
        };

        if consumed.is_expired(chrono::Utc::now().timestamp()) {
            return Err(anyhow!("Token inválido o expirado").code(401));
        }

        let salt = Self::random_string(SALT_LENGTH);
        let password = Self::hash_password(new_password, &salt);

        if self
            .admins
            .set_password(&consumed.email, password, salt)
            .await?
            .is_none()
        {
            return Err(anyhow!("Token inválido o expirado").code(401));
        }

        Ok(())
    }
}
