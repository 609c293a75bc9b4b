#[tokio::main]
async fn main() -> pricebot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("pricebot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting pricebot Discord bot");

    match pricebot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
