use crate::{
    abstract_trait::transacao::TransacaoRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::transacao::Transacao,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransacaoRepository {
    db: ConnectionPool,
}

impl TransacaoRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn insert(&self, transacao: &Transacao) -> Result<Transacao, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, Transacao>(
            r#"
            INSERT INTO transacoes (
                cnpj,
                valor,
                qdt_parcelas,
                juros,
                numero_cartao,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING id, cnpj, valor, qdt_parcelas, juros, numero_cartao
            "#,
        )
        .bind(&transacao.cnpj)
        .bind(transacao.valor)
        .bind(transacao.qdt_parcelas)
        .bind(transacao.juros)
        .bind(&transacao.numero_cartao)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during transacao insert: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(record)
    }

    async fn update(&self, transacao: &Transacao) -> Result<Transacao, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, Transacao>(
            r#"
            UPDATE transacoes
            SET
                cnpj = $2,
                valor = $3,
                qdt_parcelas = $4,
                juros = $5,
                numero_cartao = $6,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, cnpj, valor, qdt_parcelas, juros, numero_cartao
            "#,
        )
        .bind(transacao.id)
        .bind(&transacao.cnpj)
        .bind(transacao.valor)
        .bind(transacao.qdt_parcelas)
        .bind(transacao.juros)
        .bind(&transacao.numero_cartao)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during transacao update: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        record.ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl TransacaoRepositoryTrait for TransacaoRepository {
    async fn find_by_numero_cartao(
        &self,
        numero_cartao: &str,
    ) -> Result<Option<Transacao>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, Transacao>(
            r#"
            SELECT id, cnpj, valor, qdt_parcelas, juros, numero_cartao
            FROM transacoes
            WHERE numero_cartao = $1
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(numero_cartao)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error while fetching transacao by card: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(record)
    }

    async fn save(&self, transacao: &Transacao) -> Result<Transacao, RepositoryError> {
        let saved = if transacao.id == 0 {
            self.insert(transacao).await?
        } else {
            self.update(transacao).await?
        };

        info!("💾 Transacao {} persisted", saved.id);

        Ok(saved)
    }
}
