//! Heroku Platform API client implementation using reqwest.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::ports::{CreatedApp, HostingPlatform, PipelineCoupling};

pub const HEROKU_API_URL: &str = "https://api.heroku.com";
const HEROKU_ACCEPT: &str = "application/vnd.heroku+json; version=3";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Heroku Platform API.
#[derive(Clone)]
pub struct HerokuHttpClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HerokuHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HerokuHttpClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HerokuHttpClient {
    /// Create a client for the given API base URL.
    pub fn new(api_key: String, api_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url, client })
    }

    /// Create a client for the public Heroku API.
    pub fn with_api_key(api_key: String) -> Result<Self, AppError> {
        let api_url = Url::parse(HEROKU_API_URL)
            .map_err(|e| AppError::Configuration(format!("Invalid Heroku API URL: {}", e)))?;
        Self::new(api_key, api_url)
    }

    /// API URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!("Invalid Heroku API URL: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(ACCEPT, HEROKU_ACCEPT)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = self
            .authorized(builder)
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "heroku response");
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::PlatformApi { status: status.as_u16(), body })
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateAppRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct AppResponse {
    id: String,
    name: String,
    #[serde(default)]
    web_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BuildpackInstallation {
    buildpack: InstalledBuildpack,
}

#[derive(Debug, Deserialize)]
struct InstalledBuildpack {
    url: String,
}

#[derive(Debug, Serialize)]
struct BuildpackUpdates {
    updates: Vec<BuildpackUpdate>,
}

#[derive(Debug, Serialize)]
struct BuildpackUpdate {
    buildpack: String,
}

#[derive(Debug, Serialize)]
struct AddonRequest<'a> {
    plan: &'a str,
}

#[derive(Debug, Serialize)]
struct CouplingRequest<'a> {
    app: &'a str,
    pipeline: &'a str,
    stage: &'a str,
}

impl HostingPlatform for HerokuHttpClient {
    fn create_app(&self, name: &str) -> Result<CreatedApp, AppError> {
        let url = self.endpoint(&["apps"])?;
        let response = self.send(self.client.post(url).json(&CreateAppRequest { name }))?;
        let app: AppResponse = response
            .json()
            .map_err(|e| AppError::Http(format!("Failed to parse app response: {}", e)))?;

        let web_url = app.web_url.unwrap_or_else(|| format!("https://{}.herokuapp.com/", app.name));
        Ok(CreatedApp { id: app.id, name: app.name, web_url })
    }

    fn add_buildpack(&self, app: &str, buildpack: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["apps", app, "buildpack-installations"])?;
        let installed: Vec<BuildpackInstallation> = self
            .send(self.client.get(url.clone()))?
            .json()
            .map_err(|e| AppError::Http(format!("Failed to parse buildpack list: {}", e)))?;

        let mut updates: Vec<BuildpackUpdate> = installed
            .into_iter()
            .map(|installation| BuildpackUpdate { buildpack: installation.buildpack.url })
            .collect();
        updates.push(BuildpackUpdate { buildpack: buildpack.to_string() });

        self.send(self.client.put(url).json(&BuildpackUpdates { updates }))?;
        Ok(())
    }

    fn add_addon(&self, app: &str, plan: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["apps", app, "addons"])?;
        self.send(self.client.post(url).json(&AddonRequest { plan }))?;
        Ok(())
    }

    fn update_config_vars(
        &self,
        app: &str,
        vars: &BTreeMap<String, String>,
    ) -> Result<(), AppError> {
        let url = self.endpoint(&["apps", app, "config-vars"])?;
        self.send(self.client.patch(url).json(vars))?;
        Ok(())
    }

    fn couple_to_pipeline(&self, coupling: &PipelineCoupling) -> Result<(), AppError> {
        let request = CouplingRequest {
            app: &coupling.app_id,
            pipeline: &coupling.pipeline_id,
            stage: &coupling.stage,
        };
        let response = self
            .authorized(self.client.post(self.endpoint(&["pipeline-couplings"])?))
            .json(&request)
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => {
                let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
                Err(AppError::PlatformApi { status, body })
            }
        }
    }
}
