use config::Config;
use dotenvy::dotenv;

use cityrent::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .set_default("address", "127.0.0.1")
        .map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?
        .set_default("port", 8080)
        .map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?
        .set_default("database_url", "cityrent.db")
        .map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {e}")))?;

    cityrent::run(server_config).await
}
