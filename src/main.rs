pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::resume::adapter::outgoing::{
    ResumeRepositoryPostgres, SubEntityRepositoryPostgres,
};
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::SectionRepositories;
use crate::modules::resume::application::ports::incoming::use_cases::DraftSessionUseCase;
use crate::modules::resume::application::service::DEFAULT_DRAFT_IDLE_TTL;
use crate::modules::resume::application::ResumeUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::persistence::DocumentStore;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub resume: ResumeUseCases,
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

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }
    // Environment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let server_url = format!("{host}:{port}");

    // Database connection
    let store = DocumentStore::from_env();
    let db_arc = store
        .connect()
        .await
        .context("Failed to connect to the document store")?;

    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    let jwt_service = JwtTokenService::new(jwt_config);

    // Repositories and use cases
    let resume_repo = ResumeRepositoryPostgres::new(Arc::clone(&db_arc));
    let sections =
        SectionRepositories::from_store(SubEntityRepositoryPostgres::new(Arc::clone(&db_arc)));

    let draft_idle_ttl = match env::var("DRAFT_IDLE_TTL_SECS") {
        Ok(secs) => Duration::from_secs(
            secs.parse()
                .with_context(|| format!("Invalid DRAFT_IDLE_TTL_SECS: {}", secs))?,
        ),
        Err(_) => DEFAULT_DRAFT_IDLE_TTL,
    };

    let state = AppState {
        resume: ResumeUseCases::wire(resume_repo, sections, draft_idle_ttl),
    };

    // Abandoned drafts are swept even when nobody opens a new one.
    let drafts = Arc::clone(&state.resume.drafts);
    actix_web::rt::spawn(async move {
        let period = draft_idle_ttl.max(Duration::from_secs(60));
        let mut ticker = actix_web::rt::time::interval(period);
        loop {
            ticker.tick().await;
            drafts.evict_idle().await;
        }
    });

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::resume::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Resumes
    cfg.service(routes::list_resumes_handler);
    cfg.service(routes::create_resume_handler);
    cfg.service(routes::get_resume_handler);
    cfg.service(routes::get_resume_metadata_handler);
    cfg.service(routes::view_resume_handler);
    cfg.service(routes::check_ownership_handler);
    cfg.service(routes::patch_resume_handler);
    cfg.service(routes::delete_resume_handler);
    // Drafts
    cfg.service(routes::open_draft_handler);
    cfg.service(routes::set_draft_field_handler);
    cfg.service(routes::preview_draft_handler);
    cfg.service(routes::discard_draft_handler);
    // Sections
    cfg.service(routes::replace_section_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
