use std::env;
use std::io;

use actix_web::{App, HttpResponse, HttpServer, web};
use serde::{Deserialize, Serialize};

use quiz_core::Catalog;
use services::{AiClient, build_prompt, keyed_answers};

/// Clients submit either a bare JSON array of answer values or the wrapped
/// `{"answers": [...]}` form; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummaryInput {
    Wrapped { answers: Vec<String> },
    Bare(Vec<String>),
}

impl SummaryInput {
    fn into_answers(self) -> Vec<String> {
        match self {
            Self::Wrapped { answers } => answers,
            Self::Bare(answers) => answers,
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryReply {
    summary: String,
}

#[derive(Debug, Serialize)]
struct HealthReply {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    detail: String,
}

struct ServerState {
    catalog: Catalog,
    ai: AiClient,
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthReply {
        status: "ok",
        message: "Backend is running",
    })
}

async fn generate_summary(
    state: web::Data<ServerState>,
    input: web::Json<SummaryInput>,
) -> HttpResponse {
    let answers = input.into_inner().into_answers();
    log::info!("received {} answers", answers.len());

    let keyed = keyed_answers(&state.catalog, &answers);
    let prompt = build_prompt(&state.catalog, &keyed);

    match state.ai.generate(&prompt).await {
        Ok(summary) => {
            log::info!("served summary ({} chars)", summary.len());
            HttpResponse::Ok().json(SummaryReply { summary })
        }
        Err(err) => {
            log::error!("summary generation failed: {err}");
            HttpResponse::InternalServerError().json(ErrorReply {
                detail: err.to_string(),
            })
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = Catalog::trading_path().map_err(io::Error::other)?;
    let ai = AiClient::from_env();
    if !ai.enabled() {
        log::warn!("PATHBUILDER_AI_API_KEY is not set; /generate-summary will answer 500");
    }

    let state = web::Data::new(ServerState { catalog, ai });
    let bind = env::var("PATHBUILDER_BIND").unwrap_or_else(|_| "127.0.0.1:8000".into());
    log::info!("listening on http://{bind}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(health))
            .route("/generate-summary", web::post().to(generate_summary))
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_payload_deserializes() {
        let input: SummaryInput = serde_json::from_str(r#"{"answers": ["a", "b"]}"#).unwrap();
        assert_eq!(input.into_answers(), ["a", "b"]);
    }

    #[test]
    fn bare_array_payload_deserializes() {
        let input: SummaryInput = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(input.into_answers(), ["a", "b"]);
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let input: Result<SummaryInput, _> = serde_json::from_str(r#"{"answers": "a"}"#);
        assert!(input.is_err());
    }
}
