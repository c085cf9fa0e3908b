use actix_web::{App, HttpServer, middleware::Logger};

mod config;
mod server;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err.into());
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SiteConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        cfg.dist.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(server::configure(cfg.clone()))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
