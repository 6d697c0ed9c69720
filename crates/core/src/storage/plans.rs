use crate::domain::quotation::PlanRecord;
use crate::engine::service::PlanRepository;
use crate::engine::tiers::Tier;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

const PLAN_COLUMNS: &str = "plano_id, operadora, plano, acomodacao, coparticipacao, \
     vidas, estado, quantidade_de_ativos, \
     faixa_0_18, faixa_19_23, faixa_24_28, faixa_29_33, faixa_34_38, \
     faixa_39_43, faixa_44_48, faixa_49_53, faixa_54_58, faixa_59_mais";

/// Postgres-backed plan repository. Clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct PgPlanRepository {
    pool: PgPool,
}

impl PgPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    async fn max_active_members(&self, tier: Tier) -> anyhow::Result<i64> {
        let max: Option<i64> =
            sqlx::query_scalar("SELECT MAX(quantidade_de_ativos) FROM planos WHERE vidas = $1")
                .bind(tier.as_str())
                .fetch_one(&self.pool)
                .await
                .context("select max quantidade_de_ativos failed")?;

        // Empty tier or all-zero membership still has to divide cleanly.
        Ok(max.unwrap_or(0).max(1))
    }

    async fn fetch_plans(&self, tier: Tier) -> anyhow::Result<Vec<PlanRecord>> {
        let query = format!(
            "SELECT {PLAN_COLUMNS} FROM planos WHERE vidas = $1 ORDER BY plano_id ASC"
        );
        let plans = sqlx::query_as::<_, PlanRecord>(&query)
            .bind(tier.as_str())
            .fetch_all(&self.pool)
            .await
            .context("select planos by vidas failed")?;

        Ok(plans)
    }
}

/// Replaces the whole `planos` table with a freshly ingested batch in one
/// transaction. Batched inserts keep round trips down on remote databases.
pub async fn replace_all(pool: &PgPool, plans: &[PlanRecord]) -> anyhow::Result<u64> {
    anyhow::ensure!(!plans.is_empty(), "plans must be non-empty");

    let mut tx = pool.begin().await.context("begin transaction failed")?;

    sqlx::query("DELETE FROM planos")
        .execute(&mut *tx)
        .await
        .context("clear planos failed")?;

    let mut inserted: u64 = 0;
    for chunk in plans.chunks(100) {
        let mut qb = sqlx::QueryBuilder::new(format!("INSERT INTO planos ({PLAN_COLUMNS}) "));
        qb.push_values(chunk, |mut b, plan| {
            b.push_bind(plan.plano_id)
                .push_bind(&plan.operadora)
                .push_bind(&plan.plano)
                .push_bind(&plan.acomodacao)
                .push_bind(&plan.coparticipacao)
                .push_bind(&plan.vidas)
                .push_bind(&plan.estado)
                .push_bind(plan.quantidade_de_ativos)
                .push_bind(plan.faixa_0_18)
                .push_bind(plan.faixa_19_23)
                .push_bind(plan.faixa_24_28)
                .push_bind(plan.faixa_29_33)
                .push_bind(plan.faixa_34_38)
                .push_bind(plan.faixa_39_43)
                .push_bind(plan.faixa_44_48)
                .push_bind(plan.faixa_49_53)
                .push_bind(plan.faixa_54_58)
                .push_bind(plan.faixa_59_mais);
        });

        let res = qb
            .build()
            .persistent(false)
            .execute(&mut *tx)
            .await
            .context("batch insert planos failed")?;
        inserted += res.rows_affected();
    }

    tx.commit().await.context("commit transaction failed")?;
    Ok(inserted)
}
