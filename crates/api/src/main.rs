use tally_ledger::Ledger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tally_observability::init();

    let addr = std::env::var("TALLY_ADDR").unwrap_or_else(|_| {
        tracing::warn!("TALLY_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = tally_api::app::build_app(Ledger::new());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
