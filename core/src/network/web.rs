use std::time::Duration;

use ctfprint_common::config::Timeouts;
use ctfprint_common::error::SurfaceError;
use ctfprint_common::network::target::Target;
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder};

use super::WebAuth;

pub const ADMIN_USER: &str = "admin";

const MAX_REDIRECTS: usize = 10;

/// One HTTP session for the whole run.
///
/// Printers ship self-signed certificates, so certificate validation is off.
pub struct WebClient {
    client: Client,
    base_url: String,
    admin_pin: Option<String>,
    request_timeout: Duration,
}

impl WebClient {
    pub fn new(target: &Target, timeouts: &Timeouts) -> Result<Self, SurfaceError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .connect_timeout(timeouts.web)
            .build()
            .map_err(|e| SurfaceError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: target.base_url(),
            admin_pin: target.admin_pin().map(str::to_string),
            request_timeout: timeouts.web,
        })
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get(&self, path: &str, auth: WebAuth) -> Result<u16, SurfaceError> {
        let request = self.client.get(self.url(path));
        self.send(request, auth).await
    }

    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        auth: WebAuth,
    ) -> Result<u16, SurfaceError> {
        let request = self.client.post(self.url(path)).form(form);
        self.send(request, auth).await
    }

    async fn send(&self, request: RequestBuilder, auth: WebAuth) -> Result<u16, SurfaceError> {
        let response = self
            .authorize(request, auth)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        Ok(response.status().as_u16())
    }

    fn authorize(&self, request: RequestBuilder, auth: WebAuth) -> RequestBuilder {
        match (auth, self.admin_pin.as_deref()) {
            (WebAuth::Admin, Some(pin)) => request.basic_auth(ADMIN_USER, Some(pin)),
            _ => request,
        }
    }

    fn classify(&self, error: reqwest::Error) -> SurfaceError {
        if error.is_timeout() {
            SurfaceError::Timeout(self.request_timeout)
        } else {
            SurfaceError::Http(error.to_string())
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
