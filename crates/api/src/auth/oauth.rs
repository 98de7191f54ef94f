//! OAuth2 authorization-code login against GitHub and Google.
//!
//! The flow is:
//! 1. `/oauth2/authorization/{provider}` redirects to the provider with a
//!    random `state`; its SHA-256 hash is kept in a short-lived cookie.
//! 2. `/login/oauth2/code/{provider}` compares the returned `state` against
//!    the cookie, exchanges the code for an access token and fetches the
//!    profile.
//! 3. The profile is normalized into an [`OAuthProfile`] and handed to the
//!    user repository.

use rand::distr::Alphanumeric;
use rand::Rng;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Length of the random `state` parameter.
const STATE_LEN: usize = 32;

/// GitHub requires a `User-Agent` on API calls.
const CLIENT_USER_AGENT: &str = "folio-api";

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

/// A supported OAuth2 identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Github,
    Google,
}

impl Provider {
    /// Parse the `{provider}` path segment.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "github" => Some(Self::Github),
            "google" => Some(Self::Google),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Google => "google",
        }
    }

    fn authorize_endpoint(self) -> &'static str {
        match self {
            Self::Github => "https://github.com/login/oauth/authorize",
            Self::Google => "https://accounts.google.com/o/oauth2/v2/auth",
        }
    }

    fn token_endpoint(self) -> &'static str {
        match self {
            Self::Github => "https://github.com/login/oauth/access_token",
            Self::Google => "https://oauth2.googleapis.com/token",
        }
    }

    fn profile_endpoint(self) -> &'static str {
        match self {
            Self::Github => "https://api.github.com/user",
            Self::Google => "https://openidconnect.googleapis.com/v1/userinfo",
        }
    }

    fn scope(self) -> &'static str {
        match self {
            Self::Github => "read:user user:email",
            Self::Google => "openid email profile",
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Client credentials registered with one provider.
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderCredentials {
    fn from_env(id_var: &str, secret_var: &str) -> Option<Self> {
        let client_id = std::env::var(id_var).ok().filter(|v| !v.is_empty())?;
        let client_secret = std::env::var(secret_var).ok().filter(|v| !v.is_empty())?;
        Some(Self {
            client_id,
            client_secret,
        })
    }
}

/// OAuth2 client configuration. A provider without credentials is disabled.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub github: Option<ProviderCredentials>,
    pub google: Option<ProviderCredentials>,
    /// Public base URL of this API, used to build callback URLs.
    pub redirect_base: String,
}

impl OAuthConfig {
    /// Load OAuth2 configuration from environment variables.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `GITHUB_CLIENT_ID`     | -- (GitHub disabled)    |
    /// | `GITHUB_CLIENT_SECRET` | -- (GitHub disabled)    |
    /// | `GOOGLE_CLIENT_ID`     | -- (Google disabled)    |
    /// | `GOOGLE_CLIENT_SECRET` | -- (Google disabled)    |
    /// | `OAUTH_REDIRECT_BASE`  | `http://localhost:8080` |
    pub fn from_env() -> Self {
        Self {
            github: ProviderCredentials::from_env("GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET"),
            google: ProviderCredentials::from_env("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET"),
            redirect_base: std::env::var("OAUTH_REDIRECT_BASE")
                .unwrap_or_else(|_| "http://localhost:8080".into())
                .trim_end_matches('/')
                .to_string(),
        }
    }

    pub fn credentials(&self, provider: Provider) -> Option<&ProviderCredentials> {
        match provider {
            Provider::Github => self.github.as_ref(),
            Provider::Google => self.google.as_ref(),
        }
    }

    /// Callback URL registered with the provider.
    pub fn redirect_uri(&self, provider: Provider) -> String {
        format!(
            "{}/login/oauth2/code/{}",
            self.redirect_base,
            provider.as_str()
        )
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("OAuth2 HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid OAuth2 URL: {0}")]
    InvalidUrl(String),

    /// The provider answered without an access token.
    #[error("Token exchange rejected: {0}")]
    TokenRejected(String),

    /// The profile lacks a field required to identify the user.
    #[error("Provider profile is missing '{0}'")]
    MissingField(&'static str),
}

// ---------------------------------------------------------------------------
// State parameter
// ---------------------------------------------------------------------------

/// Random alphanumeric `state` for one authorization request.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LEN)
        .map(char::from)
        .collect()
}

/// SHA-256 hex digest of a `state` value, as stored in the cookie.
pub fn hash_state(state: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(state.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Flow
// ---------------------------------------------------------------------------

/// Provider URL the browser is redirected to.
pub fn authorization_url(
    provider: Provider,
    credentials: &ProviderCredentials,
    redirect_uri: &str,
    state: &str,
) -> Result<String, OAuthError> {
    let url = Url::parse_with_params(
        provider.authorize_endpoint(),
        &[
            ("client_id", credentials.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", provider.scope()),
            ("state", state),
        ],
    )
    .map_err(|e| OAuthError::InvalidUrl(e.to_string()))?;
    Ok(url.into())
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Exchange an authorization code for a provider access token.
pub async fn exchange_code(
    client: &reqwest::Client,
    provider: Provider,
    credentials: &ProviderCredentials,
    redirect_uri: &str,
    code: &str,
) -> Result<String, OAuthError> {
    let response: TokenResponse = client
        .post(provider.token_endpoint())
        .header(ACCEPT, "application/json")
        .form(&[
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?
        .json()
        .await?;

    match response.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(OAuthError::TokenRejected(
            response
                .error_description
                .or(response.error)
                .unwrap_or_else(|| "no access token returned".into()),
        )),
    }
}

/// Fetch the raw user profile with a provider access token.
pub async fn fetch_profile(
    client: &reqwest::Client,
    provider: Provider,
    access_token: &str,
) -> Result<Value, OAuthError> {
    let profile = client
        .get(provider.profile_endpoint())
        .bearer_auth(access_token)
        .header(USER_AGENT, CLIENT_USER_AGENT)
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(profile)
}

// ---------------------------------------------------------------------------
// Profile normalization
// ---------------------------------------------------------------------------

/// Provider-independent identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthProfile {
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub provider_id: Option<String>,
}

fn str_field(profile: &Value, key: &str) -> Option<String> {
    profile
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Map a raw provider profile onto [`OAuthProfile`].
///
/// GitHub may hide the email; the login then stands in as
/// `{login}@github.user`, and also replaces a missing display name.
pub fn normalize_profile(provider: Provider, profile: &Value) -> Result<OAuthProfile, OAuthError> {
    match provider {
        Provider::Github => {
            let login = str_field(profile, "login");
            let email = match str_field(profile, "email") {
                Some(email) => email,
                None => format!(
                    "{}@github.user",
                    login.as_deref().ok_or(OAuthError::MissingField("login"))?
                ),
            };
            Ok(OAuthProfile {
                email,
                name: str_field(profile, "name").or(login),
                avatar_url: str_field(profile, "avatar_url"),
                provider_id: profile.get("id").and_then(Value::as_i64).map(|id| id.to_string()),
            })
        }
        Provider::Google => Ok(OAuthProfile {
            email: str_field(profile, "email").ok_or(OAuthError::MissingField("email"))?,
            name: str_field(profile, "name"),
            avatar_url: str_field(profile, "picture"),
            provider_id: str_field(profile, "sub"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn creds() -> ProviderCredentials {
        ProviderCredentials {
            client_id: "client-123".into(),
            client_secret: "shh".into(),
        }
    }

    #[test]
    fn provider_round_trip() {
        assert_eq!(Provider::parse("github"), Some(Provider::Github));
        assert_eq!(Provider::parse("google"), Some(Provider::Google));
        assert_eq!(Provider::parse("gitlab"), None);
        assert_eq!(Provider::Google.as_str(), "google");
    }

    #[test]
    fn authorization_url_carries_client_and_state() {
        let url = authorization_url(
            Provider::Github,
            &creds(),
            "http://localhost:8080/login/oauth2/code/github",
            "abc123",
        )
        .unwrap();
        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("state=abc123"));
        assert!(url.contains("response_type=code"));
        assert!(!url.contains("shh"));
    }

    #[test]
    fn state_is_random_and_hash_is_stable() {
        let a = generate_state();
        let b = generate_state();
        assert_eq!(a.len(), STATE_LEN);
        assert_ne!(a, b);
        assert_eq!(hash_state(&a), hash_state(&a));
        assert_eq!(hash_state(&a).len(), 64);
    }

    #[test]
    fn github_without_email_falls_back_to_login() {
        let profile = json!({ "login": "octo", "id": 42, "email": null, "name": null });
        let normalized = normalize_profile(Provider::Github, &profile).unwrap();
        assert_eq!(normalized.email, "octo@github.user");
        assert_eq!(normalized.name.as_deref(), Some("octo"));
        assert_eq!(normalized.provider_id.as_deref(), Some("42"));
    }

    #[test]
    fn github_with_email_keeps_it() {
        let profile = json!({
            "login": "octo",
            "id": 7,
            "email": "octo@example.com",
            "name": "Octo Cat",
            "avatar_url": "https://avatars/7"
        });
        let normalized = normalize_profile(Provider::Github, &profile).unwrap();
        assert_eq!(normalized.email, "octo@example.com");
        assert_eq!(normalized.name.as_deref(), Some("Octo Cat"));
        assert_eq!(normalized.avatar_url.as_deref(), Some("https://avatars/7"));
    }

    #[test]
    fn google_maps_picture_and_sub() {
        let profile = json!({
            "sub": "1099",
            "email": "me@gmail.com",
            "name": "Me",
            "picture": "https://lh3/me"
        });
        let normalized = normalize_profile(Provider::Google, &profile).unwrap();
        assert_eq!(normalized.provider_id.as_deref(), Some("1099"));
        assert_eq!(normalized.avatar_url.as_deref(), Some("https://lh3/me"));
    }

    #[test]
    fn google_without_email_is_rejected() {
        let result = normalize_profile(Provider::Google, &json!({ "sub": "1" }));
        assert_matches!(result, Err(OAuthError::MissingField("email")));
    }

    #[test]
    fn redirect_uri_uses_base() {
        let config = OAuthConfig {
            github: None,
            google: Some(creds()),
            redirect_base: "https://api.example.com".into(),
        };
        assert_eq!(
            config.redirect_uri(Provider::Google),
            "https://api.example.com/login/oauth2/code/google"
        );
        assert!(config.credentials(Provider::Github).is_none());
    }
}
