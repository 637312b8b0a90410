mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::LlmGenerate;
use crate::services::persona::{Persona, PersonaSource};

#[tokio::main]
async fn main() {
    // A missing .env is normal in production; real env vars still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Non-fatal: /api/chat answers with a configuration error until a key is set.
    let llm: Option<Arc<dyn LlmGenerate>> = match llm::GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            let client: Arc<dyn LlmGenerate> = Arc::new(client);
            Some(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, chat disabled");
            None
        }
    };

    let persona = Persona::from_env().expect("persona load failed");
    match &persona.source {
        PersonaSource::Builtin => tracing::info!(persona_len = persona.text.len(), "using built-in persona"),
        PersonaSource::File(path) => {
            tracing::info!(persona_len = persona.text.len(), path = %path.display(), "persona loaded from file");
        }
    }

    let state = state::AppState::new(llm, &persona);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio chat listening");
    axum::serve(listener, app).await.expect("server failed");
}
