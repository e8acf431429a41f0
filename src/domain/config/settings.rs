use std::collections::BTreeMap;

use ini::{Ini, Properties};

pub const HEROKU_SECTION: &str = "heroku";
pub const CLOUDFLARE_SECTION: &str = "cloudflare";
pub const ENV_VARS_SECTION: &str = "env_vars";

/// Full tool configuration, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewConfig {
    pub heroku: HerokuSettings,
    pub cloudflare: CloudflareSettings,
    /// Config vars pushed to every review app.
    pub env_vars: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HerokuSettings {
    pub api_key: Option<String>,
    pub pipeline_id: Option<String>,
    pub addons: Vec<String>,
    pub buildpacks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudflareSettings {
    pub api_key: Option<String>,
    pub email: Option<String>,
    pub zone_id: Option<String>,
    pub domain: Option<String>,
}

/// Cloudflare settings with every credential present.
#[derive(Clone, PartialEq, Eq)]
pub struct CloudflareZone {
    pub api_key: String,
    pub email: String,
    pub zone_id: String,
    pub domain: String,
}

impl std::fmt::Debug for CloudflareZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareZone")
            .field("email", &self.email)
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl CloudflareSettings {
    /// Complete credentials, or `None` when any of the four is missing.
    pub fn zone(&self) -> Option<CloudflareZone> {
        Some(CloudflareZone {
            api_key: self.api_key.clone()?,
            email: self.email.clone()?,
            zone_id: self.zone_id.clone()?,
            domain: self.domain.clone()?,
        })
    }
}

impl ReviewConfig {
    /// Build the configuration from a parsed document.
    ///
    /// `env` is consulted for credentials absent from the document.
    pub fn from_document<F>(doc: &Ini, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |section: &str, key: &str| {
            doc.get_from(Some(section), key).filter(|v| !v.is_empty()).map(str::to_string)
        };
        let with_env = |section: &str, key: &str, var: &str| {
            value(section, key).or_else(|| env(var).filter(|v| !v.is_empty()))
        };
        let list =
            |key: &str| split_list(doc.get_from(Some(HEROKU_SECTION), key).unwrap_or_default());

        Self {
            heroku: HerokuSettings {
                api_key: with_env(HEROKU_SECTION, "api_key", "HEROKU_API_KEY"),
                pipeline_id: value(HEROKU_SECTION, "pipeline_id"),
                addons: list("addons"),
                buildpacks: list("buildpacks"),
            },
            cloudflare: CloudflareSettings {
                api_key: with_env(CLOUDFLARE_SECTION, "api_key", "CLOUDFLARE_API_KEY"),
                email: with_env(CLOUDFLARE_SECTION, "email", "CLOUDFLARE_EMAIL"),
                zone_id: with_env(CLOUDFLARE_SECTION, "zone_id", "CLOUDFLARE_ZONE_ID"),
                domain: value(CLOUDFLARE_SECTION, "domain"),
            },
            env_vars: doc
                .section(Some(ENV_VARS_SECTION))
                .map(|props| props.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
                .unwrap_or_default(),
        }
    }

    /// Serialize every section, including empty ones.
    pub fn to_document(&self) -> Ini {
        let mut heroku = Properties::new();
        let mut cloudflare = Properties::new();
        let mut env_vars = Properties::new();

        let put = |props: &mut Properties, key: &str, value: &Option<String>| {
            if let Some(v) = value {
                props.insert(key, v.as_str());
            }
        };
        put(&mut heroku, "api_key", &self.heroku.api_key);
        put(&mut heroku, "pipeline_id", &self.heroku.pipeline_id);
        if !self.heroku.addons.is_empty() {
            heroku.insert("addons", self.heroku.addons.join(","));
        }
        if !self.heroku.buildpacks.is_empty() {
            heroku.insert("buildpacks", self.heroku.buildpacks.join(","));
        }
        put(&mut cloudflare, "api_key", &self.cloudflare.api_key);
        put(&mut cloudflare, "email", &self.cloudflare.email);
        put(&mut cloudflare, "zone_id", &self.cloudflare.zone_id);
        put(&mut cloudflare, "domain", &self.cloudflare.domain);
        for (key, value) in &self.env_vars {
            // Continuation lines must be indented to stay part of the value.
            env_vars.insert(key.as_str(), value.replace('\n', "\n    "));
        }

        let mut doc = Ini::new();
        for (name, props) in [
            (HEROKU_SECTION, heroku),
            (CLOUDFLARE_SECTION, cloudflare),
            (ENV_VARS_SECTION, env_vars),
        ] {
            doc.entry(Some(name.to_string())).or_insert(props);
        }
        doc
    }
}

/// Split a comma-separated list, trimming items and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}
