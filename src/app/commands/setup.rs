//! Interactive configuration.

use crate::domain::{AppError, ReviewConfig, split_list};
use crate::ports::{ConfigStore, Prompter};

/// Walk the user through every setting and persist the result.
///
/// Returns `None` when a prompt was cancelled; nothing is written then.
pub fn execute<P, S>(prompter: &mut P, store: &S) -> Result<Option<ReviewConfig>, AppError>
where
    P: Prompter,
    S: ConfigStore,
{
    let current = store.load()?;
    let Some(config) = collect(prompter, current)? else {
        return Ok(None);
    };
    store.save(&config)?;
    tracing::info!(path = %store.path().display(), "configuration saved");
    Ok(Some(config))
}

/// Ask for each setting, using the existing value as default.
pub fn collect<P: Prompter>(
    prompter: &mut P,
    mut config: ReviewConfig,
) -> Result<Option<ReviewConfig>, AppError> {
    macro_rules! ask {
        ($prompt:expr, $current:expr) => {
            match prompter.input($prompt, $current)? {
                Some(answer) => answer.trim().to_string(),
                None => return Ok(None),
            }
        };
    }

    let heroku = &mut config.heroku;
    let api_key = ask!("Heroku API Key", heroku.api_key.as_deref());
    replace_if_given(&mut heroku.api_key, api_key);
    let pipeline_id = ask!("Heroku Pipeline ID", heroku.pipeline_id.as_deref());
    replace_if_given(&mut heroku.pipeline_id, pipeline_id);

    let joined = heroku.addons.join(",");
    let addons = ask!("Heroku Addons (comma separated)", non_empty(&joined));
    if !addons.is_empty() {
        heroku.addons = split_list(&addons);
    }

    let joined = heroku.buildpacks.join(",");
    let buildpacks = ask!("Heroku Buildpacks (comma separated)", non_empty(&joined));
    if !buildpacks.is_empty() {
        heroku.buildpacks = split_list(&buildpacks);
    }

    loop {
        let key = ask!("Environment variable name (blank to finish)", None);
        if key.is_empty() {
            break;
        }
        let prompt = format!("Value for {}", key);
        let value = ask!(&prompt, config.env_vars.get(&key).map(String::as_str));
        if value.is_empty() && config.env_vars.contains_key(&key) {
            continue;
        }
        config.env_vars.insert(key, value);
    }

    let Some(use_cloudflare) = prompter.confirm("Configure Cloudflare?")? else {
        return Ok(None);
    };
    if use_cloudflare {
        let cf = &mut config.cloudflare;
        let api_key = ask!("Cloudflare API Key", cf.api_key.as_deref());
        replace_if_given(&mut cf.api_key, api_key);
        let email = ask!("Cloudflare Email", cf.email.as_deref());
        replace_if_given(&mut cf.email, email);
        let zone_id = ask!("Cloudflare Zone ID", cf.zone_id.as_deref());
        replace_if_given(&mut cf.zone_id, zone_id);
        let domain = ask!("Cloudflare Domain", cf.domain.as_deref());
        replace_if_given(&mut cf.domain, domain);
    }

    Ok(Some(config))
}

fn replace_if_given(slot: &mut Option<String>, answer: String) {
    if !answer.is_empty() {
        *slot = Some(answer);
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
