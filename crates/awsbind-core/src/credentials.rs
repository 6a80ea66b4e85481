//! Credential sources.
//!
//! Every service client holds one [`ProvideCredentials`] implementation and
//! asks it for credentials on each call (unless the call carries its own
//! override, see [`crate::invoker::CallOptions`]). The default source is
//! [`DefaultCredentialsChain`]: environment, shared credentials file, then
//! the EC2 instance metadata service.

use crate::config::{env_non_empty, ClientConfig};
use crate::http::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};
use crate::profile::{FileKind, ProfileSet};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ── Credentials ─────────────────────────────────────────────────────────

/// AWS credentials used to sign requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Access key ID (AKIA… for long-term keys, ASIA… for temporary ones).
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Present for temporary credentials.
    pub session_token: Option<String>,
    /// None for long-term IAM credentials.
    pub expiration: Option<DateTime<Utc>>,
    /// Which source produced these credentials.
    pub provider_name: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .field("expiration", &self.expiration)
            .field("provider_name", &self.provider_name)
            .finish()
    }
}

impl Credentials {
    /// Long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
            expiration: None,
            provider_name: None,
        }
    }

    /// Temporary credentials with a session token.
    pub fn new_temporary(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
        expiration: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            session_token: Some(session_token.into()),
            expiration,
            ..Self::new(access_key_id, secret_access_key)
        }
    }

    pub fn with_provider_name(mut self, name: &str) -> Self {
        self.provider_name = Some(name.to_string());
        self
    }

    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::zero())
    }

    /// True when the credentials expire before `now + margin`.
    pub fn expires_within(&self, margin: Duration) -> bool {
        match self.expiration {
            Some(exp) => Utc::now() + margin >= exp,
            None => false,
        }
    }

    pub fn is_temporary(&self) -> bool {
        self.session_token.is_some()
    }
}

// ── Errors ──────────────────────────────────────────────────────────────

/// Why a credential source could not supply credentials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("{provider}: credentials not configured ({reason})")]
    NotLoaded {
        provider: &'static str,
        reason: String,
    },
    #[error("{provider}: invalid configuration ({reason})")]
    InvalidConfiguration {
        provider: &'static str,
        reason: String,
    },
    #[error("{provider}: credential source failed ({reason})")]
    ProviderError {
        provider: &'static str,
        reason: String,
    },
    #[error("credentials expired at {0}")]
    Expired(DateTime<Utc>),
    #[error("no credential source succeeded: {}", .0.join("; "))]
    ChainExhausted(Vec<String>),
}

impl CredentialsError {
    fn not_loaded(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::NotLoaded {
            provider,
            reason: reason.into(),
        }
    }
}

// ── Provider trait ──────────────────────────────────────────────────────

/// A source of credentials.
///
/// Called once per operation, from the caller's thread.
#[cfg_attr(test, mockall::automock)]
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

/// Fixed credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        if self.credentials.is_expired() {
            if let Some(exp) = self.credentials.expiration {
                return Err(CredentialsError::Expired(exp));
            }
        }
        let mut creds = self.credentials.clone();
        if creds.provider_name.is_none() {
            creds.provider_name = Some("static".to_string());
        }
        Ok(creds)
    }
}

// ── Environment ─────────────────────────────────────────────────────────

/// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` (or legacy `AWS_SECRET_KEY`)
/// and the optional `AWS_SESSION_TOKEN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentCredentialsProvider;

impl EnvironmentCredentialsProvider {
    const NAME: &'static str = "environment";

    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredentials for EnvironmentCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        let access_key = env_non_empty("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| CredentialsError::not_loaded(Self::NAME, "AWS_ACCESS_KEY_ID is not set"))?;
        let secret_key = env_non_empty("AWS_SECRET_ACCESS_KEY")
            .or_else(|| env_non_empty("AWS_SECRET_KEY"))
            .ok_or_else(|| {
                CredentialsError::InvalidConfiguration {
                    provider: Self::NAME,
                    reason: "AWS_ACCESS_KEY_ID is set but AWS_SECRET_ACCESS_KEY is not".to_string(),
                }
            })?;

        let creds = match env_non_empty("AWS_SESSION_TOKEN") {
            Some(token) => Credentials::new_temporary(access_key, secret_key, token, None),
            None => Credentials::new(access_key, secret_key),
        };
        Ok(creds.with_provider_name(Self::NAME))
    }
}

// ── Shared credentials file ─────────────────────────────────────────────

/// Static keys from a profile of the shared credentials file.
#[derive(Debug, Clone, Default)]
pub struct ProfileCredentialsProvider {
    profile: Option<String>,
    path: Option<PathBuf>,
}

impl ProfileCredentialsProvider {
    const NAME: &'static str = "profile";

    /// Use `AWS_PROFILE` (or `default`) from the default file location.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn load(&self) -> Result<ProfileSet, CredentialsError> {
        let set = match self.path {
            Some(ref path) => ProfileSet::load(path, FileKind::Credentials)
                .map_err(|e| CredentialsError::not_loaded(Self::NAME, format!("{}: {}", path.display(), e)))?,
            None => ProfileSet::load_credentials_file()
                .ok_or_else(|| CredentialsError::not_loaded(Self::NAME, "no shared credentials file"))?,
        };
        Ok(match self.profile {
            Some(ref name) => set.with_selected(name.clone()),
            None => set,
        })
    }
}

impl ProvideCredentials for ProfileCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        let set = self.load()?;
        let profile = set.active().ok_or_else(|| {
            CredentialsError::not_loaded(
                Self::NAME,
                format!("profile '{}' is not defined", set.selected_name()),
            )
        })?;

        let access_key = profile.get("aws_access_key_id").filter(|v| !v.is_empty());
        let secret_key = profile.get("aws_secret_access_key").filter(|v| !v.is_empty());
        let (access_key, secret_key) = match (access_key, secret_key) {
            (Some(a), Some(s)) => (a, s),
            (None, _) => {
                return Err(CredentialsError::not_loaded(
                    Self::NAME,
                    format!("profile '{}' has no aws_access_key_id", profile.name()),
                ))
            }
            (Some(_), None) => {
                return Err(CredentialsError::InvalidConfiguration {
                    provider: Self::NAME,
                    reason: format!("profile '{}' has no aws_secret_access_key", profile.name()),
                })
            }
        };

        let creds = match profile.get("aws_session_token").filter(|v| !v.is_empty()) {
            Some(token) => Credentials::new_temporary(access_key, secret_key, token, None),
            None => Credentials::new(access_key, secret_key),
        };
        Ok(creds.with_provider_name(Self::NAME))
    }
}

// ── EC2 instance metadata (IMDSv2) ──────────────────────────────────────

const IMDS_DEFAULT_ENDPOINT: &str = "http://169.254.169.254";
const IMDS_TOKEN_TTL_SECS: &str = "21600";
const IMDS_CREDENTIALS_PATH: &str = "/latest/meta-data/iam/security-credentials/";

/// Refresh cached credentials this long before they expire.
const REFRESH_MARGIN_MINUTES: i64 = 5;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ImdsCredentials {
    code: Option<String>,
    access_key_id: String,
    secret_access_key: String,
    token: String,
    expiration: String,
}

/// Role credentials served by the EC2 instance metadata service.
pub struct InstanceMetadataCredentialsProvider {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    cache: Mutex<Option<Credentials>>,
}

impl fmt::Debug for InstanceMetadataCredentialsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceMetadataCredentialsProvider")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl InstanceMetadataCredentialsProvider {
    const NAME: &'static str = "instance-metadata";

    /// Endpoint from `AWS_EC2_METADATA_SERVICE_ENDPOINT`, else the link-local address.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        let endpoint = env_non_empty("AWS_EC2_METADATA_SERVICE_ENDPOINT")
            .unwrap_or_else(|| IMDS_DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(transport, endpoint)
    }

    pub fn with_endpoint(transport: Arc<dyn HttpTransport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            cache: Mutex::new(None),
        }
    }

    fn call(
        &self,
        method: HttpMethod,
        path: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, CredentialsError> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.endpoint, path),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
            body: Vec::new(),
        };
        let response = self.transport.send(request).map_err(|e| {
            CredentialsError::not_loaded(Self::NAME, format!("metadata service unreachable: {}", e))
        })?;
        if !response.is_success() {
            return Err(CredentialsError::ProviderError {
                provider: Self::NAME,
                reason: format!("{} {} returned HTTP {}", method, path, response.status),
            });
        }
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    fn fetch(&self) -> Result<Credentials, CredentialsError> {
        let token = self.call(
            HttpMethod::Put,
            "/latest/api/token",
            &[("x-aws-ec2-metadata-token-ttl-seconds", IMDS_TOKEN_TTL_SECS)],
        )?;
        let auth = [("x-aws-ec2-metadata-token", token.trim())];

        let roles = self.call(HttpMethod::Get, IMDS_CREDENTIALS_PATH, &auth)?;
        let role = roles
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .ok_or_else(|| CredentialsError::not_loaded(Self::NAME, "no instance profile attached"))?
            .to_string();

        let body = self.call(
            HttpMethod::Get,
            &format!("{}{}", IMDS_CREDENTIALS_PATH, role),
            &auth,
        )?;
        let parsed: ImdsCredentials =
            serde_json::from_str(&body).map_err(|e| CredentialsError::ProviderError {
                provider: Self::NAME,
                reason: format!("malformed credentials document: {}", e),
            })?;
        if let Some(code) = parsed.code.as_deref().filter(|c| *c != "Success") {
            return Err(CredentialsError::ProviderError {
                provider: Self::NAME,
                reason: format!("metadata service reported {}", code),
            });
        }
        let expiration = DateTime::parse_from_rfc3339(&parsed.expiration)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| CredentialsError::ProviderError {
                provider: Self::NAME,
                reason: format!("bad expiration '{}': {}", parsed.expiration, e),
            })?;

        Ok(Credentials::new_temporary(
            parsed.access_key_id,
            parsed.secret_access_key,
            parsed.token,
            Some(expiration),
        )
        .with_provider_name(Self::NAME))
    }
}

impl ProvideCredentials for InstanceMetadataCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        if env_non_empty("AWS_EC2_METADATA_DISABLED").is_some_and(|v| v.eq_ignore_ascii_case("true")) {
            return Err(CredentialsError::not_loaded(Self::NAME, "disabled by AWS_EC2_METADATA_DISABLED"));
        }

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(ref creds) = *cache {
            if !creds.expires_within(Duration::minutes(REFRESH_MARGIN_MINUTES)) {
                return Ok(creds.clone());
            }
        }
        let fresh = self.fetch()?;
        log::debug!(
            "Refreshed instance-metadata credentials, expiring at {:?}",
            fresh.expiration
        );
        *cache = Some(fresh.clone());
        Ok(fresh)
    }
}

// ── Default chain ───────────────────────────────────────────────────────

/// Tries each source in order and returns the first success.
pub struct DefaultCredentialsChain {
    providers: Vec<Box<dyn ProvideCredentials>>,
}

impl fmt::Debug for DefaultCredentialsChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultCredentialsChain")
            .field("providers", &self.providers.len())
            .finish()
    }
}

impl DefaultCredentialsChain {
    /// Environment, shared credentials file, then instance metadata.
    pub fn new() -> Self {
        let mut providers: Vec<Box<dyn ProvideCredentials>> = vec![
            Box::new(EnvironmentCredentialsProvider::new()),
            Box::new(ProfileCredentialsProvider::new()),
        ];
        // The metadata service answers locally or not at all.
        let imds_config = ClientConfig::default().with_timeouts(2, 1);
        match ReqwestTransport::new(&imds_config) {
            Ok(transport) => providers.push(Box::new(InstanceMetadataCredentialsProvider::new(
                Arc::new(transport),
            ))),
            Err(e) => log::warn!("Instance metadata credentials unavailable: {}", e),
        }
        Self { providers }
    }

    pub fn from_providers(providers: Vec<Box<dyn ProvideCredentials>>) -> Self {
        Self { providers }
    }
}

impl Default for DefaultCredentialsChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvideCredentials for DefaultCredentialsChain {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        let mut reasons = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.provide_credentials() {
                Ok(creds) => return Ok(creds),
                Err(e) => {
                    log::debug!("Credential source skipped: {}", e);
                    reasons.push(e.to_string());
                }
            }
        }
        log::warn!("No credential source succeeded ({} tried)", reasons.len());
        Err(CredentialsError::ChainExhausted(reasons))
    }
}
