//! Authenticated web session

use std::time::Duration;

use crate::config::Config;
use crate::observability::Logger;

use super::errors::{WebError, WebResult};

/// Delay after a successful login so the server-side session propagates
/// before the first download is attempted
const SESSION_SETTLE: Duration = Duration::from_secs(3);

/// A cookie-bearing session against the Xtendis web application
///
/// The handshake sends the Windows account as `DOMAIN\user` credentials
/// on the portal root; the cookies the server hands back authenticate
/// every later page fetch.
pub struct WebSession {
    http: reqwest::Client,
}

impl WebSession {
    /// Authenticate against the portal and keep the session cookies
    pub async fn login(config: &Config) -> WebResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(WebError::Client)?;

        let account = format!("{}\\{}", config.windows_domain, config.windows_username);
        Logger::info(
            "WEB_LOGIN",
            &[("url", &config.base_url), ("account", &account)],
        );

        let response = http
            .get(&config.base_url)
            .basic_auth(&account, Some(&config.windows_password))
            .send()
            .await
            .map_err(|e| WebError::Authentication {
                url: config.base_url.clone(),
                source: e,
            })?;

        response
            .error_for_status()
            .map_err(|e| WebError::Authentication {
                url: config.base_url.clone(),
                source: e,
            })?;

        Logger::info("WEB_LOGIN_OK", &[("url", &config.base_url)]);
        tokio::time::sleep(SESSION_SETTLE).await;

        Ok(Self { http })
    }

    /// Fetch one URL through the authenticated session
    ///
    /// A non-2xx response is a [`WebError::Status`]; the caller decides
    /// whether to skip or abort.
    pub async fn fetch(&self, url: &str) -> WebResult<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WebError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| WebError::Request {
            url: url.to_string(),
            source: e,
        })?;

        Ok(bytes.to_vec())
    }
}
