mod transacao;

use crate::state::AppState;
use anyhow::Result;
use axum::{Json, Router, extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse};
use shared::{domain::responses::ApiResponse, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::transacao::transacao_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        transacao::buscar_por_numero_cartao,
        transacao::salvar,
    ),
    tags(
        (name = "Transacao", description = "Installment purchases recorded against a card"),
    )
)]
struct ApiDoc;

/// Oversized bodies fail inside the `Json` extractor, so they still reach the
/// `{dados, erros}` envelope.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

async fn rota_inexistente() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::falha("Recurso não encontrado.")),
    )
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(transacao_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .fallback(rota_inexistente)
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
