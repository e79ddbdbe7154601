use crate::{
    errors::{ServiceError, ValidationOrder},
    model::transacao::Transacao,
    utils::{is_valid_cnpj, only_digits},
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Wire form of a transaction. Every field is text so that a missing value, a
/// blank one, a malformed one and an over-long one are told apart before parsing.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoDto {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "CNPJ não pode ser vazio."),
        custom(function = "validate_cnpj")
    )]
    pub cnpj: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Valor não pode ser vazio."),
        custom(
            function = "not_blank",
            code = "blank",
            message = "Valor não pode ser vazio."
        ),
        length(max = 10, message = "Valor deve conter no máximo 10 caracteres.")
    )]
    pub valor: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Quantidade de Parcelas não pode ser vazio."),
        custom(
            function = "not_blank",
            code = "blank",
            message = "Quantidade de Parcelas não pode ser vazio."
        ),
        length(
            max = 2,
            message = "Quantidade de Parcelas deve conter no máximo 2 caracteres."
        )
    )]
    pub qdt_parcelas: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Juros não pode ser vazio."),
        custom(
            function = "not_blank",
            code = "blank",
            message = "Juros não pode ser vazio."
        ),
        length(max = 4, message = "Juros deve conter no máximo 4 caracteres.")
    )]
    pub juros: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = 16,
        message = "Número do cartão deve conter no máximo 16 caracteres."
    ))]
    pub numero_cartao: Option<String>,
}

impl ValidationOrder for TransacaoDto {
    fn field_order() -> &'static [&'static str] {
        &["cnpj", "valor", "qdtParcelas", "juros"]
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("CNPJ não pode ser vazio.")));
    }

    if !is_valid_cnpj(value) {
        return Err(ValidationError::new("cnpj").with_message(Cow::Borrowed("CNPJ inválido.")));
    }

    Ok(())
}

fn parse_decimal(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

impl From<&Transacao> for TransacaoDto {
    fn from(transacao: &Transacao) -> Self {
        Self {
            id: Some(transacao.id.to_string()),
            cnpj: Some(transacao.cnpj.clone()),
            valor: Some(transacao.valor.to_string()),
            qdt_parcelas: Some(transacao.qdt_parcelas.to_string()),
            juros: Some(transacao.juros.to_string()),
            numero_cartao: transacao.numero_cartao.clone(),
        }
    }
}

impl TryFrom<TransacaoDto> for Transacao {
    type Error = ServiceError;

    fn try_from(dto: TransacaoDto) -> Result<Self, Self::Error> {
        let id = match dto.id.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v
                .parse::<i32>()
                .ok()
                .filter(|id| *id >= 0)
                .ok_or_else(|| ServiceError::Validation("Id inválido.".into()))?,
            None => 0,
        };

        let cnpj = dto
            .cnpj
            .as_deref()
            .map(only_digits)
            .ok_or_else(|| ServiceError::Validation("CNPJ não pode ser vazio.".into()))?;

        let valor = dto
            .valor
            .as_deref()
            .and_then(parse_decimal)
            .ok_or_else(|| ServiceError::Validation("Valor inválido.".into()))?;

        if valor <= 0.0 {
            return Err(ServiceError::Validation(
                "Valor deve ser maior que zero.".into(),
            ));
        }

        let qdt_parcelas = dto
            .qdt_parcelas
            .as_deref()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .ok_or_else(|| ServiceError::Validation("Quantidade de Parcelas inválida.".into()))?;

        if !(1..=99).contains(&qdt_parcelas) {
            return Err(ServiceError::Validation(
                "Quantidade de Parcelas deve estar entre 1 e 99.".into(),
            ));
        }

        let juros = dto
            .juros
            .as_deref()
            .and_then(parse_decimal)
            .ok_or_else(|| ServiceError::Validation("Juros inválido.".into()))?;

        if juros < 0.0 {
            return Err(ServiceError::Validation(
                "Juros não pode ser negativo.".into(),
            ));
        }

        let numero_cartao = dto
            .numero_cartao
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Transacao {
            id,
            cnpj,
            valor,
            qdt_parcelas,
            juros,
            numero_cartao,
        })
    }
}
