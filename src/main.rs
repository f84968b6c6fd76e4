use marketplace_messaging_service::api;
use marketplace_messaging_service::common::init;
use marketplace_messaging_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    api::serve(settings).await
}
