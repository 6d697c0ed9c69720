use std::fmt;

/// Headcount tier used to select comparable plans. The label doubles as the
/// `planos.vidas` column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    UpTo2,
    From3To29,
    From30To99,
    From100To199,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::UpTo2 => "2",
            Tier::From3To29 => "3 a 29",
            Tier::From30To99 => "30 a 99",
            Tier::From100To199 => "100 a 199",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First matching tier wins; anything outside 1..=199 has no tier and the
/// quotation must fail before touching the repository.
pub fn classify(vidas: i64) -> Option<Tier> {
    match vidas {
        1..=2 => Some(Tier::UpTo2),
        3..=29 => Some(Tier::From3To29),
        30..=99 => Some(Tier::From30To99),
        100..=199 => Some(Tier::From100To199),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(classify(1), Some(Tier::UpTo2));
        assert_eq!(classify(2), Some(Tier::UpTo2));
        assert_eq!(classify(3), Some(Tier::From3To29));
        assert_eq!(classify(29), Some(Tier::From3To29));
        assert_eq!(classify(30), Some(Tier::From30To99));
        assert_eq!(classify(99), Some(Tier::From30To99));
        assert_eq!(classify(100), Some(Tier::From100To199));
        assert_eq!(classify(199), Some(Tier::From100To199));
    }

    #[test]
    fn out_of_range_headcounts_have_no_tier() {
        assert_eq!(classify(200), None);
        assert_eq!(classify(250), None);
        assert_eq!(classify(0), None);
        assert_eq!(classify(-1), None);
        assert_eq!(classify(i64::MAX), None);
    }

    #[test]
    fn labels_match_the_planos_column_values() {
        assert_eq!(Tier::UpTo2.as_str(), "2");
        assert_eq!(Tier::From3To29.as_str(), "3 a 29");
        assert_eq!(Tier::From30To99.as_str(), "30 a 99");
        assert_eq!(Tier::From100To199.as_str(), "100 a 199");
    }
}
