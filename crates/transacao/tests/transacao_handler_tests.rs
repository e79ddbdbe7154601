use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use shared::{
    abstract_trait::transacao::TransacaoServiceTrait, errors::ServiceError,
    model::transacao::Transacao, repository::transacao::InMemoryTransacaoRepository,
};
use std::sync::Arc;
use transacao::{
    di::DependenciesInject,
    handler::{AppRouter, MAX_BODY_BYTES},
    state::AppState,
};

/// Service double: either hands back the canned record or raises the given
/// inconsistency message.
struct StubService {
    falha: Option<&'static str>,
}

#[async_trait]
impl TransacaoServiceTrait for StubService {
    async fn buscar_por_numero_cartao(&self, _numero: &str) -> Result<Transacao, ServiceError> {
        match self.falha {
            Some(msg) => Err(ServiceError::Consistencia(msg.to_string())),
            None => Ok(transacao_teste()),
        }
    }

    async fn salvar(&self, transacao: &Transacao) -> Result<Transacao, ServiceError> {
        match self.falha {
            Some(msg) => Err(ServiceError::Consistencia(msg.to_string())),
            None => Ok(Transacao {
                id: 1,
                ..transacao.clone()
            }),
        }
    }
}

fn transacao_teste() -> Transacao {
    Transacao {
        id: 1,
        cnpj: "15203684000104".to_string(),
        valor: 500.00,
        qdt_parcelas: 5,
        juros: 0.2,
        numero_cartao: None,
    }
}

fn server_in_memory() -> TestServer {
    let container = DependenciesInject::new(Arc::new(InMemoryTransacaoRepository::new()));
    TestServer::new(AppRouter::build(AppState::from_container(container)))
}

fn server_with(falha: Option<&'static str>) -> TestServer {
    let container = DependenciesInject::with_service(Arc::new(StubService { falha }));
    TestServer::new(AppRouter::build(AppState::from_container(container)))
}

fn corpo_valido() -> Value {
    json!({
        "id": "1",
        "cnpj": "15203684000104",
        "valor": "500.0",
        "qdtParcelas": "5",
        "juros": "0.2"
    })
}

fn assert_envelope(body: &Value) {
    let dados = !body["dados"].is_null();
    let erros = !body["erros"].is_null();
    assert!(dados ^ erros, "exactly one of dados/erros must be set: {body}");
}

async fn assert_rejected(corpo: Value, mensagem: &str) {
    let server = server_with(None);

    let response = server.post("/api/transacao").json(&corpo).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["erros"], mensagem);
    assert_envelope(&body);
}

#[tokio::test]
async fn buscar_por_numero_cartao_sucesso() {
    let server = server_with(None);

    let response = server
        .get("/api/transacao/cartao.numero/5461109310353115")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["dados"]["id"], 1);
    assert_eq!(body["dados"]["cnpj"], "15203684000104");
    assert_eq!(body["dados"]["valor"], 500.0);
    assert_eq!(body["dados"]["qdtParcelas"], 5);
    assert_eq!(body["dados"]["juros"], 0.2);
    assert!(body["erros"].is_null());
}

#[tokio::test]
async fn buscar_por_numero_cartao_inconsistencia() {
    let server = server_with(Some("Teste inconsistência"));

    let response = server
        .get("/api/transacao/cartao.numero/5461109310353115")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["erros"], "Teste inconsistência");
    assert_envelope(&body);
}

#[tokio::test]
async fn salvar_sucesso() {
    let server = server_with(None);

    let response = server.post("/api/transacao").json(&corpo_valido()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["dados"]["id"], 1);
    assert_eq!(body["dados"]["cnpj"], "15203684000104");
    assert_eq!(body["dados"]["valor"], 500.0);
    assert_eq!(body["dados"]["qdtParcelas"], 5);
    assert_eq!(body["dados"]["juros"], 0.2);
    assert!(body["erros"].is_null());
}

#[tokio::test]
async fn salvar_inconsistencia() {
    let server = server_with(Some("Teste inconsistência."));

    let response = server.post("/api/transacao").json(&corpo_valido()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["erros"], "Teste inconsistência.");
    assert_envelope(&body);
}

#[tokio::test]
async fn salvar_cnpj_em_branco() {
    assert_rejected(
        json!({ "valor": "500.00", "qdtParcelas": "6", "juros": "0.2" }),
        "CNPJ não pode ser vazio.",
    )
    .await;
}

#[tokio::test]
async fn salvar_cnpj_invalido() {
    assert_rejected(
        json!({ "cnpj": "12312312312", "valor": "500.00", "qdtParcelas": "6", "juros": "0.2" }),
        "CNPJ inválido.",
    )
    .await;
}

#[tokio::test]
async fn salvar_valor_em_branco() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "qdtParcelas": "6", "juros": "0.2" }),
        "Valor não pode ser vazio.",
    )
    .await;
}

#[tokio::test]
async fn salvar_valor_excedente() {
    assert_rejected(
        json!({
            "cnpj": "05887098082",
            "valor": "12312312312312313123131321239999.99",
            "qdtParcelas": "6",
            "juros": "0.2"
        }),
        "Valor deve conter no máximo 10 caracteres.",
    )
    .await;
}

#[tokio::test]
async fn salvar_qdt_parcelas_em_branco() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "juros": "0.2" }),
        "Quantidade de Parcelas não pode ser vazio.",
    )
    .await;
}

#[tokio::test]
async fn salvar_qdt_parcelas_excedente() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "qdtParcelas": "1200", "juros": "0.2" }),
        "Quantidade de Parcelas deve conter no máximo 2 caracteres.",
    )
    .await;
}

#[tokio::test]
async fn salvar_juros_em_branco() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "qdtParcelas": "1200" }),
        "Juros não pode ser vazio.",
    )
    .await;
}

#[tokio::test]
async fn salvar_juros_excedente() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "qdtParcelas": "6", "juros": "5169900" }),
        "Juros deve conter no máximo 4 caracteres.",
    )
    .await;
}

#[tokio::test]
async fn salvar_valor_nao_numerico() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "abc", "qdtParcelas": "6", "juros": "0.2" }),
        "Valor inválido.",
    )
    .await;
}

#[tokio::test]
async fn salvar_valor_somente_espacos() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "   ", "qdtParcelas": "6", "juros": "0.2" }),
        "Valor não pode ser vazio.",
    )
    .await;
}

#[tokio::test]
async fn salvar_qdt_parcelas_fora_da_faixa() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "qdtParcelas": "0", "juros": "0.2" }),
        "Quantidade de Parcelas deve estar entre 1 e 99.",
    )
    .await;
}

#[tokio::test]
async fn salvar_juros_nao_numerico() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "qdtParcelas": "6", "juros": "x" }),
        "Juros inválido.",
    )
    .await;
}

#[tokio::test]
async fn salvar_valor_nao_positivo() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "-500", "qdtParcelas": "6", "juros": "0.2" }),
        "Valor deve ser maior que zero.",
    )
    .await;
}

#[tokio::test]
async fn salvar_juros_negativo() {
    assert_rejected(
        json!({ "cnpj": "05887098082", "valor": "500.00", "qdtParcelas": "6", "juros": "-1" }),
        "Juros não pode ser negativo.",
    )
    .await;
}

#[tokio::test]
async fn salvar_id_invalido() {
    assert_rejected(
        json!({
            "id": "abc",
            "cnpj": "05887098082",
            "valor": "500.00",
            "qdtParcelas": "6",
            "juros": "0.2"
        }),
        "Id inválido.",
    )
    .await;
}

#[tokio::test]
async fn oversized_body_uses_envelope() {
    let server = server_with(None);

    let response = server
        .post("/api/transacao")
        .content_type("application/json")
        .text("x".repeat(MAX_BODY_BYTES + 1))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["erros"]
            .as_str()
            .is_some_and(|m| m.starts_with("Requisição inválida"))
    );
    assert_envelope(&body);
}

#[tokio::test]
async fn invalid_path_param_uses_envelope() {
    let server = server_with(None);

    let response = server.get("/api/transacao/cartao.numero/%FF").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["erros"]
            .as_str()
            .is_some_and(|m| m.starts_with("Parâmetro inválido"))
    );
    assert_envelope(&body);
}

#[tokio::test]
async fn unknown_route_uses_envelope() {
    let server = server_with(None);

    let response = server.get("/api/nada").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["erros"], "Recurso não encontrado.");
    assert_envelope(&body);
}

#[tokio::test]
async fn malformed_json_uses_envelope() {
    let server = server_with(None);

    let response = server
        .post("/api/transacao")
        .content_type("application/json")
        .text("{ not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["erros"]
            .as_str()
            .is_some_and(|m| m.starts_with("Requisição inválida"))
    );
    assert_envelope(&body);
}

#[tokio::test]
async fn saved_transaction_is_found_by_card() {
    let server = server_in_memory();

    let missing = server
        .get("/api/transacao/cartao.numero/5461109310353115")
        .await;
    missing.assert_status(StatusCode::BAD_REQUEST);

    let created = server
        .post("/api/transacao")
        .json(&json!({
            "cnpj": "15.203.684/0001-04",
            "valor": "750.50",
            "qdtParcelas": "10",
            "juros": "1.5",
            "numeroCartao": "5461109310353115"
        }))
        .await;
    created.assert_status_ok();
    let created: Value = created.json();
    assert_eq!(created["dados"]["id"], 1);
    assert_eq!(created["dados"]["cnpj"], "15203684000104");

    let found = server
        .get("/api/transacao/cartao.numero/5461109310353115")
        .await;
    found.assert_status_ok();
    let found: Value = found.json();
    assert_eq!(found["dados"], created["dados"]);
    assert!(found["erros"].is_null());
}

#[tokio::test]
async fn post_with_existing_id_creates_new_record() {
    let server = server_in_memory();

    let original = server
        .post("/api/transacao")
        .json(&json!({
            "cnpj": "05887098082",
            "valor": "100.00",
            "qdtParcelas": "2",
            "juros": "0.5",
            "numeroCartao": "1111"
        }))
        .await;
    original.assert_status_ok();
    let original: Value = original.json();
    assert_eq!(original["dados"]["id"], 1);

    let segunda = server
        .post("/api/transacao")
        .json(&json!({
            "id": "1",
            "cnpj": "15203684000104",
            "valor": "9.00",
            "qdtParcelas": "1",
            "juros": "0",
            "numeroCartao": "2222"
        }))
        .await;
    segunda.assert_status_ok();
    let segunda: Value = segunda.json();
    assert_eq!(segunda["dados"]["id"], 2);

    let found = server.get("/api/transacao/cartao.numero/1111").await;
    found.assert_status_ok();
    let found: Value = found.json();
    assert_eq!(found["dados"], original["dados"]);
}
