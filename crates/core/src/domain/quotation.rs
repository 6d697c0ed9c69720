use serde::{Deserialize, Serialize};

/// One quotation request: group size, the age bracket of each member, and an
/// optional state filter. Wire names match the public API contract.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationRequest {
    pub vidas: i64,
    pub faixas_etarias: Vec<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// A plan row as stored in the `planos` table. Bracket prices are nullable in
/// the database; a missing price reads as 0 at aggregation time rather than
/// failing the whole quotation.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanRecord {
    pub plano_id: i64,
    pub operadora: String,
    pub plano: String,
    pub acomodacao: Option<String>,
    pub coparticipacao: Option<String>,
    pub vidas: String,
    pub estado: Option<String>,
    pub quantidade_de_ativos: i64,
    pub faixa_0_18: Option<f64>,
    pub faixa_19_23: Option<f64>,
    pub faixa_24_28: Option<f64>,
    pub faixa_29_33: Option<f64>,
    pub faixa_34_38: Option<f64>,
    pub faixa_39_43: Option<f64>,
    pub faixa_44_48: Option<f64>,
    pub faixa_49_53: Option<f64>,
    pub faixa_54_58: Option<f64>,
    pub faixa_59_mais: Option<f64>,
}

/// Per-bracket line of a plan's price breakdown, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceLineItem {
    pub faixa: String,
    pub valor: f64,
}

/// A plan after one pass of the engine: priced for the requested brackets,
/// scored, and flagged. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedPlan {
    #[serde(flatten)]
    pub plan: PlanRecord,
    pub valor_total: f64,
    pub valores_por_vida: Vec<PriceLineItem>,
    pub score_recomendacao: f64,
    pub recomendado: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuotationResult {
    pub success: bool,
    pub total: usize,
    pub planos: Vec<ProcessedPlan>,
    pub planos_recomendados: Vec<ProcessedPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_from_api_payload() {
        let req: QuotationRequest = serde_json::from_str(
            r#"{"vidas": 5, "faixas_etarias": ["19-23", "59+"], "estado": "SP"}"#,
        )
        .unwrap();
        assert_eq!(req.vidas, 5);
        assert_eq!(req.faixas_etarias, vec!["19-23", "59+"]);
        assert_eq!(req.estado.as_deref(), Some("SP"));
    }

    #[test]
    fn request_estado_defaults_to_none() {
        let req: QuotationRequest =
            serde_json::from_str(r#"{"vidas": 2, "faixas_etarias": []}"#).unwrap();
        assert!(req.estado.is_none());
    }
}
