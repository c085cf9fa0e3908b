use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::SiteConfig;

/// Mounts `/assets`, the bundle at `/`, and the SPA fallback: any path
/// that is not a file gets `index.html` so the client router can take it.
pub fn configure(cfg: SiteConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |svc| {
        let index = cfg.dist.join("index.html");

        svc.service(Files::new("/assets", cfg.assets.clone()))
            .service(
                Files::new("/", cfg.dist.clone())
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move { spa(req, &index).await }
                    })),
            );
    }
}

async fn spa(req: ServiceRequest, index: &Path) -> actix_web::Result<ServiceResponse> {
    let (req, _) = req.into_parts();
    let file = NamedFile::open_async(index).await.map_err(|err| {
        log::error!("app shell {} unavailable: {err}", index.display());
        actix_web::error::ErrorInternalServerError("app shell missing")
    })?;

    let res = file.into_response(&req);
    Ok(ServiceResponse::new(req, res))
}
