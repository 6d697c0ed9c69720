use crate::domain::quotation::{PlanRecord, PriceLineItem};
use crate::engine::{brackets, round2};

/// Sums a plan's price over the requested brackets. The breakdown mirrors
/// request order; labels that resolve to no known bracket are omitted and
/// contribute nothing.
pub fn aggregate(plan: &PlanRecord, faixas: &[String]) -> (f64, Vec<PriceLineItem>) {
    let mut total = 0.0;
    let mut breakdown = Vec::with_capacity(faixas.len());

    for faixa in faixas {
        let Some(bracket) = brackets::resolve(faixa) else {
            continue;
        };
        let valor = bracket.price_in(plan);
        total += valor;
        breakdown.push(PriceLineItem {
            faixa: faixa.clone(),
            valor,
        });
    }

    (round2(total), breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> PlanRecord {
        PlanRecord {
            plano_id: 1,
            operadora: "Vida Plena".to_string(),
            plano: "Essencial".to_string(),
            acomodacao: Some("Enfermaria".to_string()),
            coparticipacao: Some("Sim".to_string()),
            vidas: "2".to_string(),
            estado: Some("SP".to_string()),
            quantidade_de_ativos: 100,
            faixa_0_18: Some(150.10),
            faixa_19_23: Some(210.55),
            faixa_24_28: None,
            faixa_29_33: Some(280.0),
            faixa_34_38: Some(310.0),
            faixa_39_43: Some(350.0),
            faixa_44_48: Some(420.0),
            faixa_49_53: Some(510.0),
            faixa_54_58: Some(640.0),
            faixa_59_mais: Some(890.99),
        }
    }

    fn labels(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sums_in_request_order() {
        let (total, breakdown) = aggregate(&plan(), &labels(&["59+", "0-18"]));
        assert_eq!(total, 1041.09);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].faixa, "59+");
        assert_eq!(breakdown[0].valor, 890.99);
        assert_eq!(breakdown[1].faixa, "0-18");
        assert_eq!(breakdown[1].valor, 150.10);
    }

    #[test]
    fn unknown_labels_are_omitted() {
        let (total, breakdown) = aggregate(&plan(), &labels(&["99-120", "0-18"]));
        assert_eq!(total, 150.10);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].faixa, "0-18");
    }

    #[test]
    fn missing_price_counts_as_zero() {
        let (total, breakdown) = aggregate(&plan(), &labels(&["24-28"]));
        assert_eq!(total, 0.0);
        assert_eq!(breakdown, vec![PriceLineItem { faixa: "24-28".to_string(), valor: 0.0 }]);
    }

    #[test]
    fn empty_request_prices_to_zero() {
        let (total, breakdown) = aggregate(&plan(), &[]);
        assert_eq!(total, 0.0);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn breakdown_sum_matches_total() {
        let faixas = labels(&["0-18", "19-23", "59+", "49-53"]);
        let (total, breakdown) = aggregate(&plan(), &faixas);
        let sum: f64 = breakdown.iter().map(|item| item.valor).sum();
        assert!((sum - total).abs() < 0.005);
    }
}
