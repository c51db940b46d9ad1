// Route exports
pub mod suggestions;

use actix_web::web;

pub use suggestions::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(suggestions::configure)
        .default_service(web::route().to(suggestions::unsupported));
}
