use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CreatedApp, HostingPlatform, PipelineCoupling};

/// Call recorded by [`FakePlatform`], in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    CreateApp(String),
    AddBuildpack(String, String),
    AddAddon(String, String),
    UpdateConfigVars(String, BTreeMap<String, String>),
    CoupleToPipeline(PipelineCoupling),
}

#[derive(Default)]
pub struct FakePlatform {
    pub calls: Mutex<Vec<PlatformCall>>,
    pub fail_create: Mutex<bool>,
    /// Name reported back by `create_app` instead of the requested one.
    pub assigned_name: Mutex<Option<String>>,
    pub fail_config_vars: Mutex<bool>,
    pub fail_pipeline: Mutex<bool>,
    pub failing_buildpacks: Mutex<HashSet<String>>,
    pub failing_addons: Mutex<HashSet<String>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create() -> Self {
        let platform = Self::new();
        *platform.fail_create.lock().unwrap() = true;
        platform
    }

    pub fn assigning_name(name: &str) -> Self {
        let platform = Self::new();
        *platform.assigned_name.lock().unwrap() = Some(name.to_string());
        platform
    }

    pub fn fail_buildpack(&self, buildpack: &str) {
        self.failing_buildpacks.lock().unwrap().insert(buildpack.to_string());
    }

    pub fn fail_addon(&self, plan: &str) {
        self.failing_addons.lock().unwrap().insert(plan.to_string());
    }

    pub fn recorded_calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn api_error(status: u16, body: &str) -> AppError {
    AppError::PlatformApi { status, body: body.to_string() }
}

impl HostingPlatform for FakePlatform {
    fn create_app(&self, name: &str) -> Result<CreatedApp, AppError> {
        self.record(PlatformCall::CreateApp(name.to_string()));
        if *self.fail_create.lock().unwrap() {
            return Err(api_error(422, "Name is already taken"));
        }
        let name = self.assigned_name.lock().unwrap().clone().unwrap_or_else(|| name.to_string());
        Ok(CreatedApp {
            id: format!("id-{}", name),
            web_url: format!("https://{}.herokuapp.com/", name),
            name,
        })
    }

    fn add_buildpack(&self, app: &str, buildpack: &str) -> Result<(), AppError> {
        self.record(PlatformCall::AddBuildpack(app.to_string(), buildpack.to_string()));
        if self.failing_buildpacks.lock().unwrap().contains(buildpack) {
            return Err(api_error(422, "Buildpack not found"));
        }
        Ok(())
    }

    fn add_addon(&self, app: &str, plan: &str) -> Result<(), AppError> {
        self.record(PlatformCall::AddAddon(app.to_string(), plan.to_string()));
        if self.failing_addons.lock().unwrap().contains(plan) {
            return Err(api_error(422, "Couldn't find that add-on"));
        }
        Ok(())
    }

    fn update_config_vars(&self, app: &str, vars: &BTreeMap<String, String>) -> Result<(), AppError> {
        self.record(PlatformCall::UpdateConfigVars(app.to_string(), vars.clone()));
        if *self.fail_config_vars.lock().unwrap() {
            return Err(api_error(500, "Internal server error"));
        }
        Ok(())
    }

    fn couple_to_pipeline(&self, coupling: &PipelineCoupling) -> Result<(), AppError> {
        self.record(PlatformCall::CoupleToPipeline(coupling.clone()));
        if *self.fail_pipeline.lock().unwrap() {
            return Err(api_error(404, "Couldn't find that pipeline"));
        }
        Ok(())
    }
}
