use crate::auth::jwt::JwtConfig;
use crate::auth::oauth::OAuthConfig;
use crate::mail::SmtpConfig;
use crate::storage::UploadConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development, except
/// `JWT_SECRET` which must always be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT session token configuration.
    pub jwt: JwtConfig,
    /// Public URL of the frontend; OAuth logins redirect back here.
    pub frontend_url: String,
    /// Lowercased emails granted the admin role on login.
    pub admin_emails: Vec<String>,
    pub upload: UploadConfig,
    /// Where contact-form messages are delivered.
    pub contact_recipient: Option<String>,
    pub smtp: Option<SmtpConfig>,
    pub oauth: OAuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FRONTEND_URL`         | `http://localhost:3000`    |
    /// | `ADMIN_EMAILS`         | (empty)                    |
    /// | `CONTACT_RECIPIENT`    | (unset, mail is logged)    |
    ///
    /// Upload, SMTP, JWT and OAuth settings are read by their own
    /// `from_env` constructors.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let admin_emails = split_list(&std::env::var("ADMIN_EMAILS").unwrap_or_default())
            .into_iter()
            .map(|e| e.to_lowercase())
            .collect();

        let contact_recipient = std::env::var("CONTACT_RECIPIENT")
            .ok()
            .filter(|r| !r.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            frontend_url,
            admin_emails,
            upload: UploadConfig::from_env(),
            contact_recipient,
            smtp: SmtpConfig::from_env(),
            oauth: OAuthConfig::from_env(),
        }
    }

    /// Case-insensitive lookup in the admin whitelist.
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.admin_emails.iter().any(|admin| *admin == email)
    }

    /// Session cookies are only marked `Secure` when the site is served over TLS.
    pub fn secure_cookies(&self) -> bool {
        self.frontend_url.starts_with("https://")
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(split_list(" a@x.io, ,b@y.io,"), vec!["a@x.io", "b@y.io"]);
        assert!(split_list("").is_empty());
    }
}
