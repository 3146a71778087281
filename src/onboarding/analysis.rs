use crate::onboarding::repo_types::Questionnaire;

/// Risk tier a tolerance label classifies into. The stored label is open
/// text; only "high" and "medium" are distinguished, everything else lands
/// in the conservative band. That silent fallback matches what advisors
/// expect for blank or free-form answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    High,
    Medium,
    LowOrOther,
}

impl RiskBand {
    pub fn classify(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::LowOrOther,
        }
    }

    pub fn score(self) -> i32 {
        match self {
            Self::High => 80,
            Self::Medium => 50,
            Self::LowOrOther => 20,
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::High => "We recommend an aggressive strategy focused on high-growth equities.",
            Self::Medium => {
                "A balanced portfolio with a mix of equities and bonds is suitable for you."
            }
            Self::LowOrOther => {
                "A conservative strategy focusing on fixed income and blue-chip stocks is advised."
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiskAssessment {
    pub risk_score: i32,
    pub recommendation: &'static str,
    pub summary: String,
}

/// Pure function of the questionnaire; total over any string input.
pub fn assess(questionnaire: &Questionnaire) -> RiskAssessment {
    let band = RiskBand::classify(&questionnaire.risk_tolerance);
    let recommendation = band.recommendation();
    let summary = format!(
        "Based on your goal of '{}', your savings habit is '{}', and your risk tolerance is '{}'. {}",
        questionnaire.investment_goal,
        questionnaire.savings_habit,
        questionnaire.risk_tolerance,
        recommendation
    );
    RiskAssessment {
        risk_score: band.score(),
        recommendation,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn questionnaire(goal: &str, habit: &str, tolerance: &str) -> Questionnaire {
        Questionnaire {
            id: 1,
            user_id: 1,
            investment_goal: goal.into(),
            savings_habit: habit.into(),
            risk_tolerance: tolerance.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn high_tolerance_scores_80_in_any_casing() {
        for label in ["high", "High", "HIGH", "hIgH"] {
            let result = assess(&questionnaire("growth", "weekly", label));
            assert_eq!(result.risk_score, 80);
            assert_eq!(
                result.recommendation,
                "We recommend an aggressive strategy focused on high-growth equities."
            );
        }
    }

    #[test]
    fn medium_tolerance_scores_50_in_any_casing() {
        for label in ["medium", "Medium", "MEDIUM"] {
            let result = assess(&questionnaire("growth", "weekly", label));
            assert_eq!(result.risk_score, 50);
            assert_eq!(
                result.recommendation,
                "A balanced portfolio with a mix of equities and bonds is suitable for you."
            );
        }
    }

    #[test]
    fn everything_else_scores_20() {
        for label in ["low", "Low", "unspecified", "", "Hihg", "aggressive"] {
            let result = assess(&questionnaire("growth", "weekly", label));
            assert_eq!(result.risk_score, 20, "label {label:?}");
            assert_eq!(
                result.recommendation,
                "A conservative strategy focusing on fixed income and blue-chip stocks is advised."
            );
        }
    }

    #[test]
    fn summary_interpolates_fields_in_order_then_recommendation() {
        let result = assess(&questionnaire("a house", "sporadic", "Medium"));
        let goal_at = result.summary.find("a house").unwrap();
        let habit_at = result.summary.find("sporadic").unwrap();
        let tolerance_at = result.summary.find("Medium").unwrap();
        let rec_at = result.summary.find(result.recommendation).unwrap();
        assert!(goal_at < habit_at && habit_at < tolerance_at && tolerance_at < rec_at);
    }

    #[test]
    fn retirement_scenario_produces_exact_summary() {
        let result = assess(&questionnaire("retirement", "monthly", "High"));
        assert_eq!(result.risk_score, 80);
        assert_eq!(
            result.recommendation,
            "We recommend an aggressive strategy focused on high-growth equities."
        );
        assert_eq!(
            result.summary,
            "Based on your goal of 'retirement', your savings habit is 'monthly', and your \
             risk tolerance is 'High'. We recommend an aggressive strategy focused on \
             high-growth equities."
        );
    }
}
