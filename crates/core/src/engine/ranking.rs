use crate::domain::quotation::ProcessedPlan;
use std::cmp::Ordering;

/// Orders plans best-first: score descending, then total price ascending.
/// `sort_by` is stable, so plans tied on both keys keep their fetch order.
pub fn rank(plans: &mut [ProcessedPlan]) {
    plans.sort_by(|a, b| {
        b.score_recomendacao
            .partial_cmp(&a.score_recomendacao)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                a.valor_total
                    .partial_cmp(&b.valor_total)
                    .unwrap_or(Ordering::Equal)
            })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quotation::PlanRecord;

    fn processed(plano_id: i64, score: f64, valor_total: f64) -> ProcessedPlan {
        ProcessedPlan {
            plan: PlanRecord {
                plano_id,
                operadora: "Op".to_string(),
                plano: format!("Plano {plano_id}"),
                acomodacao: None,
                coparticipacao: None,
                vidas: "2".to_string(),
                estado: None,
                quantidade_de_ativos: 0,
                faixa_0_18: None,
                faixa_19_23: None,
                faixa_24_28: None,
                faixa_29_33: None,
                faixa_34_38: None,
                faixa_39_43: None,
                faixa_44_48: None,
                faixa_49_53: None,
                faixa_54_58: None,
                faixa_59_mais: None,
            },
            valor_total,
            valores_por_vida: Vec::new(),
            score_recomendacao: score,
            recomendado: score > 0.6,
        }
    }

    fn ids(plans: &[ProcessedPlan]) -> Vec<i64> {
        plans.iter().map(|p| p.plan.plano_id).collect()
    }

    #[test]
    fn higher_score_wins_then_lower_price() {
        let mut plans = vec![
            processed(1, 0.5, 100.0),
            processed(2, 0.8, 300.0),
            processed(3, 0.8, 200.0),
            processed(4, 0.9, 900.0),
        ];
        rank(&mut plans);
        assert_eq!(ids(&plans), vec![4, 3, 2, 1]);
    }

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let mut plans = vec![
            processed(1, 0.7, 50.0),
            processed(2, 0.4, 10.0),
            processed(3, 0.9, 80.0),
        ];
        rank(&mut plans);
        let mut sorted_ids = ids(&plans);
        sorted_ids.sort_unstable();
        assert_eq!(sorted_ids, vec![1, 2, 3]);
        assert_eq!(plans.len(), 3);
    }

    #[test]
    fn ranking_is_idempotent() {
        let mut plans = vec![
            processed(1, 0.5, 100.0),
            processed(2, 0.8, 300.0),
            processed(3, 0.8, 200.0),
        ];
        rank(&mut plans);
        let first = ids(&plans);
        rank(&mut plans);
        assert_eq!(ids(&plans), first);
    }

    #[test]
    fn full_ties_keep_fetch_order() {
        let mut plans = vec![
            processed(10, 0.6, 100.0),
            processed(11, 0.6, 100.0),
            processed(12, 0.6, 100.0),
        ];
        rank(&mut plans);
        assert_eq!(ids(&plans), vec![10, 11, 12]);
    }
}
