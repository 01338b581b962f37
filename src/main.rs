pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::topic;

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, DatabaseConfig, StorageConfig};
use crate::topic::adapter::outgoing::{
    InMemoryTopicStore, TopicQueryPostgres, TopicRepositoryPostgres,
};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub topic: TopicUseCases,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(config: &DatabaseConfig) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Applying pending migrations...");
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
    }

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Storage: one store per process, shared by every use case
    let (topic_use_cases, db) = match &config.storage {
        StorageConfig::Postgres(db_config) => {
            let db_arc = connect_database(db_config).await?;
            let query = TopicQueryPostgres::new(Arc::clone(&db_arc));
            let repository = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
            (TopicUseCases::wire(query, repository), Some(db_arc))
        }
        StorageConfig::Memory => {
            warn!("Using in-memory topic storage; data is lost on restart");
            let store = InMemoryTopicStore::new();
            (TopicUseCases::wire(store.clone(), store), None)
        }
    };

    let state = AppState {
        topic: topic_use_cases,
    };

    info!(
        environment = %config.environment,
        address = %server_url,
        "Server listening"
    );

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config());

        if let Some(db) = &db {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app.configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("HTTP server error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_single_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::update_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::delete_topic_handler);
    // Progress
    cfg.service(crate::topic::adapter::incoming::web::routes::get_progress_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
