use std::sync::Arc;

use product_seo_optimizer::ai::Completer;
use product_seo_optimizer::config::Settings;
use product_seo_optimizer::routes::api::ProviderInfo;
use product_seo_optimizer::{boot, build};

#[rocket::launch]
fn rocket() -> _ {
    env_logger::init();

    let settings = Settings::from_env();

    // Exits before anything is bound when the provider credential is missing
    let client = boot::run(&settings);

    let info = ProviderInfo {
        provider: client.provider().name().to_string(),
        model: client.model(),
    };
    let completer: Arc<dyn Completer> = Arc::new(client);

    build(&settings, completer, info)
}
