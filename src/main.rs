mod auth;
mod doctor;
mod models;
mod otp;
mod protocol;
mod store;
mod user;
mod utils;
mod validators;
mod wizard;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::store::Store;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carebook=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Store::new();
    let bind = std::env::var("CAREBOOK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    tracing::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(store.clone())
            // login / OTP / session
            .service(
                web::scope("/auth")
                    .configure(auth::config),
            )
            // profile, searches, booking wizard
            .service(
                web::scope("/user")
                    .configure(user::config),
            )
            // practitioner applications
            .service(
                web::scope("/doctor")
                    .configure(doctor::config),
            )
    })
    .bind(bind)?
    .run()
    .await
}
