use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path, rejection::PathRejection},
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::transacao::DynTransacaoService,
    domain::{
        requests::TransacaoDto,
        responses::{ApiResponse, TransacaoResponse},
    },
    errors::AppErrorHttp,
    model::transacao::Transacao,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/transacao/cartao.numero/{numero}",
    tag = "Transacao",
    params(("numero" = String, Path, description = "Card number")),
    responses(
        (status = 200, description = "Transaction for the card", body = ApiResponse<TransacaoResponse>),
        (status = 400, description = "No transaction for the card", body = ApiResponse<TransacaoResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn buscar_por_numero_cartao(
    Extension(service): Extension<DynTransacaoService>,
    numero: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let Path(numero) = numero?;
    let transacao = service.buscar_por_numero_cartao(&numero).await?;
    Ok(Json(ApiResponse::sucesso(TransacaoResponse::from(
        transacao,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/transacao",
    tag = "Transacao",
    request_body = TransacaoDto,
    responses(
        (status = 200, description = "Transaction saved", body = ApiResponse<TransacaoResponse>),
        (status = 400, description = "Validation failed or business rule violated", body = ApiResponse<TransacaoResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn salvar(
    Extension(service): Extension<DynTransacaoService>,
    SimpleValidatedJson(body): SimpleValidatedJson<TransacaoDto>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    // POST only ever creates; a client-sent id never selects a stored record.
    let transacao = Transacao {
        id: 0,
        ..Transacao::try_from(body)?
    };
    let salva = service.salvar(&transacao).await?;
    Ok(Json(ApiResponse::sucesso(TransacaoResponse::from(salva))))
}

pub fn transacao_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/transacao/cartao.numero/{numero}",
            get(buscar_por_numero_cartao),
        )
        .route("/api/transacao", post(salvar))
        .layer(Extension(app_state.di_container.transacao_service.clone()))
}
