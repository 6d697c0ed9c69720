use crate::domain::quotation::PlanRecord;

/// Canonical age brackets. Each variant is one price column on a plan row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketField {
    Faixa0_18,
    Faixa19_23,
    Faixa24_28,
    Faixa29_33,
    Faixa34_38,
    Faixa39_43,
    Faixa44_48,
    Faixa49_53,
    Faixa54_58,
    Faixa59Mais,
}

pub const ALL: [BracketField; 10] = [
    BracketField::Faixa0_18,
    BracketField::Faixa19_23,
    BracketField::Faixa24_28,
    BracketField::Faixa29_33,
    BracketField::Faixa34_38,
    BracketField::Faixa39_43,
    BracketField::Faixa44_48,
    BracketField::Faixa49_53,
    BracketField::Faixa54_58,
    BracketField::Faixa59Mais,
];

impl BracketField {
    /// The request-side label for this bracket.
    pub fn label(self) -> &'static str {
        match self {
            BracketField::Faixa0_18 => "0-18",
            BracketField::Faixa19_23 => "19-23",
            BracketField::Faixa24_28 => "24-28",
            BracketField::Faixa29_33 => "29-33",
            BracketField::Faixa34_38 => "34-38",
            BracketField::Faixa39_43 => "39-43",
            BracketField::Faixa44_48 => "44-48",
            BracketField::Faixa49_53 => "49-53",
            BracketField::Faixa54_58 => "54-58",
            BracketField::Faixa59Mais => "59+",
        }
    }

    /// The `planos` column name for this bracket.
    pub fn column(self) -> &'static str {
        match self {
            BracketField::Faixa0_18 => "faixa_0_18",
            BracketField::Faixa19_23 => "faixa_19_23",
            BracketField::Faixa24_28 => "faixa_24_28",
            BracketField::Faixa29_33 => "faixa_29_33",
            BracketField::Faixa34_38 => "faixa_34_38",
            BracketField::Faixa39_43 => "faixa_39_43",
            BracketField::Faixa44_48 => "faixa_44_48",
            BracketField::Faixa49_53 => "faixa_49_53",
            BracketField::Faixa54_58 => "faixa_54_58",
            BracketField::Faixa59Mais => "faixa_59_mais",
        }
    }

    /// A plan's price for this bracket; a missing price counts as zero.
    pub fn price_in(self, plan: &PlanRecord) -> f64 {
        let value = match self {
            BracketField::Faixa0_18 => plan.faixa_0_18,
            BracketField::Faixa19_23 => plan.faixa_19_23,
            BracketField::Faixa24_28 => plan.faixa_24_28,
            BracketField::Faixa29_33 => plan.faixa_29_33,
            BracketField::Faixa34_38 => plan.faixa_34_38,
            BracketField::Faixa39_43 => plan.faixa_39_43,
            BracketField::Faixa44_48 => plan.faixa_44_48,
            BracketField::Faixa49_53 => plan.faixa_49_53,
            BracketField::Faixa54_58 => plan.faixa_54_58,
            BracketField::Faixa59Mais => plan.faixa_59_mais,
        };
        value.unwrap_or(0.0)
    }
}

/// Unknown labels resolve to `None` and are skipped by the aggregator. The
/// request may carry typos or future bracket labels without aborting the
/// whole quotation.
pub fn resolve(label: &str) -> Option<BracketField> {
    ALL.iter().copied().find(|b| b.label() == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_round_trips() {
        for bracket in ALL {
            assert_eq!(resolve(bracket.label()), Some(bracket));
        }
    }

    #[test]
    fn unknown_labels_resolve_to_none() {
        assert_eq!(resolve("99-120"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("0-18 "), None);
    }

    #[test]
    fn columns_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.column(), b.column());
            }
        }
    }
}
