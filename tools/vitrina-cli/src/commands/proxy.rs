//! Image proxy commands.

use anyhow::{bail, Context as _, Result};
use vitrina_proxy::{ImageProxy, ReqwestFetcher};

use super::{ProxyArgs, ProxyCommand};
use crate::context::Context;

/// Run the proxy command.
pub async fn run(args: ProxyArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProxyCommand::Check { url } => check_url(&url, ctx),
        ProxyCommand::Fetch { url, output } => fetch_image(&url, output.as_deref(), ctx).await,
    }
}

fn check_url(url: &str, ctx: &Context) -> Result<()> {
    let allowlist = ctx.config.proxy.allowlist();

    match allowlist.check_url(url) {
        Ok(parsed) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "url": parsed.as_str(), "allowed": true }));
            } else {
                ctx.output.success(&format!("Allowed: {}", parsed));
            }
            Ok(())
        }
        Err(e) => bail!("Rejected: {}", e),
    }
}

async fn fetch_image(url: &str, output: Option<&str>, ctx: &Context) -> Result<()> {
    let proxy = ImageProxy::new(ReqwestFetcher::new())
        .with_allowlist(ctx.config.proxy.allowlist())
        .with_max_age(ctx.config.proxy.max_age_secs);

    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", url)
        .finish();
    let response = proxy.handle(&query).await;

    let status = response.status();
    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "status": status.as_u16(),
            "headers": headers.iter().cloned().collect::<std::collections::BTreeMap<_, _>>(),
            "bytes": response.body().len(),
        }));
    } else {
        ctx.output.kv("status", status.as_str());
        for (name, value) in &headers {
            ctx.output.kv(name, value);
        }
        ctx.output.kv("bytes", &response.body().len().to_string());
    }

    if !status.is_success() {
        bail!("{}", String::from_utf8_lossy(response.body()));
    }

    if let Some(path) = output {
        let path = ctx.resolve_path(path);
        std::fs::write(&path, response.body())
            .with_context(|| format!("Failed to write image: {}", path.display()))?;
        ctx.output.success(&format!("Saved {}", path.display()));
    }

    Ok(())
}
