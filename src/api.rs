use std::future::Future;

use tracing::debug;

/// Query payload sent on every echo request. Nothing else is ever sent.
pub const ECHO_DATA: &str = "testeroo";

/// Seam between views and the echo endpoint, so a component can be mounted
/// against a stub backend in tests.
pub trait EchoBackend: 'static {
    fn fetch_echo(&self) -> impl Future<Output = Result<String, String>>;
}

/// HTTP client for the echo endpoint.
#[derive(Clone, Debug, Default)]
pub struct EchoApi {
    base: String,
}

impl EchoApi {
    /// Client for the origin the page was served from.
    ///
    /// reqwest wants absolute URLs even in the browser, so the base is read
    /// from the window location.
    pub fn same_origin() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self { base }
    }

    /// Client for an explicit base URL, e.g. a mock server.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn request_url(&self) -> String {
        format!("{}/api/echo?data={}", self.base, ECHO_DATA)
    }
}

impl EchoBackend for EchoApi {
    async fn fetch_echo(&self) -> Result<String, String> {
        let resp = reqwest::Client::new()
            .get(self.request_url())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        // Status is deliberately not checked; any body counts as a result.
        let body = resp.text().await.map_err(|e| e.to_string())?;
        debug!("echo endpoint returned {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn request_url_carries_the_fixed_payload() {
        let api = EchoApi::with_base("http://10.0.0.1:3000");
        assert_eq!(
            api.request_url(),
            "http://10.0.0.1:3000/api/echo?data=testeroo"
        );
    }

    #[test]
    fn empty_base_yields_a_relative_url() {
        assert_eq!(EchoApi::default().request_url(), "/api/echo?data=testeroo");
    }
}
