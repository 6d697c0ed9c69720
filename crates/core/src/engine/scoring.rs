use crate::domain::quotation::PlanRecord;
use crate::engine::{region, round2};

/// Named scoring constants. Profile fit and price competitiveness are flat
/// placeholder contributions today; keeping them here lets a real signal
/// replace them without touching call sites.
///
/// NOTE: the price axis is labeled "peso 20%" in the source heuristic but the
/// applied contribution has always been a flat 0.1. That mismatch is kept
/// as-is: correcting it would shift every observable score.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub popularity: f64,
    pub profile_fit: f64,
    pub price_competitiveness: f64,
    pub regional_match: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            popularity: 0.4,
            profile_fit: 0.3,
            price_competitiveness: 0.1,
            regional_match: 0.1,
        }
    }
}

/// Recommendation score for one plan, rounded to two decimals.
///
/// Popularity is the plan's share of the tier's maximum active membership;
/// `max_ativos` is floored at 1 by the repository so the division is safe.
pub fn score(
    plan: &PlanRecord,
    request_state: Option<&str>,
    max_ativos: i64,
    weights: &ScoreWeights,
) -> f64 {
    let mut score = 0.0;

    if max_ativos > 0 {
        score += (plan.quantidade_de_ativos as f64 / max_ativos as f64) * weights.popularity;
    }

    score += weights.profile_fit;
    score += weights.price_competitiveness;

    if request_state.is_some()
        && plan.estado.is_some()
        && region::matches(request_state, plan.estado.as_deref())
    {
        score += weights.regional_match;
    }

    round2(score)
}
