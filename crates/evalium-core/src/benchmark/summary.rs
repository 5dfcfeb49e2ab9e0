use serde::{Deserialize, Serialize};

use super::comparison::{BenchmarkComparison, BenchmarkMetric, BenchmarkPosition};

const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallPosition {
    Leader,
    Competitive,
    Average,
    Lagging,
}

impl OverallPosition {
    /// Above-counts are checked before below-counts.
    pub fn from_counts(above: usize, below: usize) -> Self {
        if above >= 4 {
            Self::Leader
        } else if above >= 3 {
            Self::Competitive
        } else if below >= 3 {
            Self::Lagging
        } else {
            Self::Average
        }
    }
}

impl std::fmt::Display for OverallPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Leader => "leader",
            Self::Competitive => "competitive",
            Self::Average => "average",
            Self::Lagging => "lagging",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub overall_position: OverallPosition,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

fn is_below(comparisons: &[BenchmarkComparison], metric: BenchmarkMetric) -> bool {
    comparisons
        .iter()
        .any(|c| c.metric == metric && c.position == BenchmarkPosition::Below)
}

/// Rule order is fixed; the list is cut at four entries.
pub fn recommendations(
    comparisons: &[BenchmarkComparison],
    overall: OverallPosition,
) -> Vec<String> {
    let mut out = Vec::new();

    if is_below(comparisons, BenchmarkMetric::EbitdaMargin) {
        out.push("Valuta una revisione della struttura dei costi per migliorare i margini".to_string());
    }
    if is_below(comparisons, BenchmarkMetric::Revenue) {
        out.push("Potresti investire in strategie di crescita per aumentare i ricavi".to_string());
    }
    if is_below(comparisons, BenchmarkMetric::NetIncome) {
        out.push(
            "Analizza le voci che impattano l'utile finale: interessi, tasse, ammortamenti".to_string(),
        );
    }

    match overall {
        OverallPosition::Leader => {
            out.push("Mantieni il vantaggio competitivo investendo in innovazione".to_string())
        }
        OverallPosition::Lagging => out.push(
            "Considera una consulenza strategica per identificare le aree prioritarie di intervento"
                .to_string(),
        ),
        OverallPosition::Competitive | OverallPosition::Average => {}
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

pub fn summarize(comparisons: &[BenchmarkComparison]) -> BenchmarkSummary {
    let above = comparisons
        .iter()
        .filter(|c| c.position == BenchmarkPosition::Above)
        .count();
    let below = comparisons
        .iter()
        .filter(|c| c.position == BenchmarkPosition::Below)
        .count();
    let overall_position = OverallPosition::from_counts(above, below);

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for c in comparisons {
        match c.position {
            BenchmarkPosition::Above => strengths.push(format!("{} superiore alla media", c.metric_label)),
            BenchmarkPosition::Below => weaknesses.push(format!("{} inferiore alla media", c.metric_label)),
            BenchmarkPosition::Average => {}
        }
    }

    BenchmarkSummary {
        overall_position,
        strengths,
        weaknesses,
        recommendations: recommendations(comparisons, overall_position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn comparison(metric: BenchmarkMetric, position: BenchmarkPosition) -> BenchmarkComparison {
        BenchmarkComparison {
            metric,
            metric_label: metric.label().to_string(),
            company_value: Decimal::ONE,
            competitor_average: Decimal::ONE,
            position,
            percentile: 50,
            narrative: String::new(),
        }
    }

    fn all(position: BenchmarkPosition) -> Vec<BenchmarkComparison> {
        BenchmarkMetric::ALL
            .iter()
            .map(|m| comparison(*m, position))
            .collect()
    }

    #[test]
    fn test_overall_position_table() {
        assert_eq!(OverallPosition::from_counts(5, 0), OverallPosition::Leader);
        assert_eq!(OverallPosition::from_counts(4, 1), OverallPosition::Leader);
        assert_eq!(OverallPosition::from_counts(3, 2), OverallPosition::Competitive);
        assert_eq!(OverallPosition::from_counts(2, 3), OverallPosition::Lagging);
        assert_eq!(OverallPosition::from_counts(2, 2), OverallPosition::Average);
        assert_eq!(OverallPosition::from_counts(0, 0), OverallPosition::Average);
    }

    #[test]
    fn test_lagging_gets_all_four_recommendations() {
        let summary = summarize(&all(BenchmarkPosition::Below));
        assert_eq!(summary.overall_position, OverallPosition::Lagging);
        assert_eq!(summary.recommendations.len(), 4);
        assert!(summary.recommendations[0].contains("struttura dei costi"));
        assert!(summary.recommendations[1].contains("strategie di crescita"));
        assert!(summary.recommendations[2].contains("utile finale"));
        assert!(summary.recommendations[3].contains("consulenza strategica"));
        assert_eq!(summary.weaknesses.len(), 5);
        assert_eq!(summary.weaknesses[0], "Ricavi inferiore alla media");
    }

    #[test]
    fn test_leader_recommendation() {
        let summary = summarize(&all(BenchmarkPosition::Above));
        assert_eq!(summary.overall_position, OverallPosition::Leader);
        assert_eq!(
            summary.recommendations,
            vec!["Mantieni il vantaggio competitivo investendo in innovazione"]
        );
        assert_eq!(summary.strengths[2], "Margine EBITDA superiore alla media");
    }

    #[test]
    fn test_average_company_has_no_recommendations() {
        let summary = summarize(&all(BenchmarkPosition::Average));
        assert_eq!(summary.overall_position, OverallPosition::Average);
        assert!(summary.recommendations.is_empty());
        assert!(summary.strengths.is_empty());
        assert!(summary.weaknesses.is_empty());
    }

    #[test]
    fn test_equity_below_adds_no_specific_recommendation() {
        let mut comparisons = all(BenchmarkPosition::Average);
        comparisons[4].position = BenchmarkPosition::Below;
        assert!(summarize(&comparisons).recommendations.is_empty());
    }
}
