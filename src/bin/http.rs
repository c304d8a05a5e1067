#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;

    use anyhow::Context;
    use study_plan::{Locale, http_api};
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr: SocketAddr = std::env::var("STUDY_PLAN_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()
        .context("STUDY_PLAN_HTTP_ADDR must be a socket address")?;
    let locale: Locale = match std::env::var("STUDY_PLAN_LOCALE") {
        Ok(value) => value.parse().map_err(anyhow::Error::msg)?,
        Err(_) => Locale::default(),
    };

    http_api::serve(addr, locale).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
