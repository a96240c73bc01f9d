//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("dir", &ctx.config.storage.dir);

    ctx.output.info("");
    ctx.output.info("[data]");
    ctx.output.kv(
        "base_url",
        ctx.config.data.base_url.as_deref().unwrap_or("(not set)"),
    );
    ctx.output.kv(
        "api_key",
        if ctx.config.data.api_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        },
    );

    ctx.output.info("");
    ctx.output.info("[proxy]");
    ctx.output
        .kv("allowed_hosts", &ctx.config.proxy.allowed_hosts.join(", "));
    ctx.output
        .kv("allowed_patterns", &ctx.config.proxy.allowed_patterns.join(", "));
    ctx.output
        .kv("max_age_secs", &ctx.config.proxy.max_age_secs.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Errors and warnings for a configuration.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.storage.dir.trim().is_empty() {
        errors.push("storage.dir must not be empty".to_string());
    }

    match &config.data.base_url {
        Some(url) => match url::Url::parse(url) {
            Ok(parsed) if parsed.scheme() != "https" => {
                warnings.push(format!("data.base_url '{}' does not use https", url))
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("data.base_url is not a valid URL: {}", e)),
        },
        None => warnings.push("data.base_url is not set; use --snapshot".to_string()),
    }

    if config.data.base_url.is_some() && config.data.api_key.is_none() {
        warnings.push("data.api_key is not set".to_string());
    }

    if config.proxy.allowed_hosts.is_empty() && config.proxy.allowed_patterns.is_empty() {
        errors.push("proxy allows no hosts".to_string());
    }

    for (i, pattern) in config.proxy.allowed_patterns.iter().enumerate() {
        if pattern.matches('*').count() > 1 {
            errors.push(format!(
                "proxy.allowed_patterns[{}] '{}' has more than one '*'",
                i, pattern
            ));
        }
    }

    if config.proxy.max_age_secs == 0 {
        warnings.push("proxy.max_age_secs is 0; images will not be cached".to_string());
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_only_warns() {
        let (errors, warnings) = check_config(&CliConfig::default());
        assert!(errors.is_empty());
        assert_eq!(warnings, vec!["data.base_url is not set; use --snapshot".to_string()]);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = CliConfig::default();
        config.storage.dir = " ".to_string();
        config.data.base_url = Some("not a url".to_string());
        config.proxy.allowed_patterns = vec!["*.*.co".to_string()];

        let (errors, _) = check_config(&config);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_http_base_url_warns() {
        let mut config = CliConfig::default();
        config.data.base_url = Some("http://localhost:54321/rest/v1".to_string());
        config.data.api_key = Some("anon".to_string());

        let (errors, warnings) = check_config(&config);
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
