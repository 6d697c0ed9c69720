use crate::domain::quotation::{PlanRecord, ProcessedPlan, QuotationRequest, QuotationResult};
use crate::engine::scoring::ScoreWeights;
use crate::engine::tiers::Tier;
use crate::engine::{pricing, ranking, region, scoring, tiers};
use async_trait::async_trait;
use std::fmt;

/// Storage-side collaborator. The engine issues at most one call to each
/// method per quotation and never retries; failures propagate unchanged.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Maximum `quantidade_de_ativos` across the tier's plans, floored at 1.
    async fn max_active_members(&self, tier: Tier) -> anyhow::Result<i64>;

    /// All plan rows for the tier. Order is not guaranteed.
    async fn fetch_plans(&self, tier: Tier) -> anyhow::Result<Vec<PlanRecord>>;
}

/// The only two failures that cross the engine boundary. Everything else
/// (unknown bracket labels, missing prices) degrades to zero or omission.
#[derive(Debug)]
pub enum QuoteError {
    UnsupportedHeadcount { vidas: i64 },
    Repository(anyhow::Error),
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::UnsupportedHeadcount { vidas } => {
                write!(f, "quantidade de vidas não suportada: {vidas}")
            }
            QuoteError::Repository(err) => write!(f, "plan repository unavailable: {err:#}"),
        }
    }
}

impl std::error::Error for QuoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuoteError::UnsupportedHeadcount { .. } => None,
            QuoteError::Repository(err) => Some(err.as_ref()),
        }
    }
}

const RECOMMENDED_THRESHOLD: f64 = 0.6;
const TOP_PLANS: usize = 3;

pub struct QuotationService<R> {
    repo: R,
    weights: ScoreWeights,
}

impl<R: PlanRepository> QuotationService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(repo: R, weights: ScoreWeights) -> Self {
        Self { repo, weights }
    }

    /// Produces a ranked quotation for one request. Stateless across calls;
    /// every invocation recomputes from a fresh plan snapshot.
    pub async fn quote(&self, req: &QuotationRequest) -> Result<QuotationResult, QuoteError> {
        let Some(tier) = tiers::classify(req.vidas) else {
            return Err(QuoteError::UnsupportedHeadcount { vidas: req.vidas });
        };

        let max_ativos = self
            .repo
            .max_active_members(tier)
            .await
            .map_err(QuoteError::Repository)?;
        let fetched = self
            .repo
            .fetch_plans(tier)
            .await
            .map_err(QuoteError::Repository)?;
        let fetched_len = fetched.len();

        // Empty state means no filtering, same as an absent one. Whitespace
        // still counts as present; the filter and scorer trim it themselves.
        let estado = req.estado.as_deref().filter(|s| !s.is_empty());
        let mut planos: Vec<ProcessedPlan> = Vec::with_capacity(fetched_len);

        for plan in fetched {
            if !region::matches(estado, plan.estado.as_deref()) {
                continue;
            }

            let (valor_total, valores_por_vida) = pricing::aggregate(&plan, &req.faixas_etarias);
            let score = scoring::score(&plan, estado, max_ativos, &self.weights);

            planos.push(ProcessedPlan {
                plan,
                valor_total,
                valores_por_vida,
                score_recomendacao: score,
                recomendado: score > RECOMMENDED_THRESHOLD,
            });
        }

        ranking::rank(&mut planos);

        tracing::debug!(
            tier = tier.as_str(),
            fetched = fetched_len,
            surviving = planos.len(),
            "quotation computed"
        );

        let planos_recomendados = planos.iter().take(TOP_PLANS).cloned().collect();

        Ok(QuotationResult {
            success: true,
            total: planos.len(),
            planos,
            planos_recomendados,
        })
    }
}
