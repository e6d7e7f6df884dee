use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    staffdir_observability::init();

    let token_secret = std::env::var("STAFFDIR_TOKEN").unwrap_or_else(|_| {
        tracing::warn!("STAFFDIR_TOKEN not set; using insecure dev default");
        "dev-token".to_string()
    });
    let addr = std::env::var("STAFFDIR_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = staffdir_api::app::build_app(token_secret);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
