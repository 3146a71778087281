use crate::advisor::dto::FinancialPlanResponse;

const SECTION_LABELS: [&str; 4] = [
    "Budget Plan:",
    "Investment Strategy:",
    "Retirement Plan:",
    "Tax Plan:",
];

/// Split generated plan text into the four response sections by their
/// labels. Sections the model skipped come back empty; text with no labels
/// at all lands in `budget_plan` so nothing generated is dropped.
pub fn split_plan_sections(text: &str) -> FinancialPlanResponse {
    let mut found: Vec<(usize, usize, usize)> = Vec::new();
    for (slot, label) in SECTION_LABELS.iter().enumerate() {
        if let Some(start) = text.find(label) {
            found.push((start, start + label.len(), slot));
        }
    }

    if found.is_empty() {
        return FinancialPlanResponse {
            budget_plan: text.trim().to_string(),
            investment_strategy: String::new(),
            retirement_plan: String::new(),
            tax_plan: String::new(),
        };
    }

    found.sort_by_key(|&(start, _, _)| start);

    let mut sections: [String; 4] = Default::default();
    for (i, &(_, body_start, slot)) in found.iter().enumerate() {
        let body_end = found.get(i + 1).map_or(text.len(), |&(next_start, _, _)| next_start);
        sections[slot] = text[body_start..body_end].trim().to_string();
    }

    let [budget_plan, investment_strategy, retirement_plan, tax_plan] = sections;
    FinancialPlanResponse {
        budget_plan,
        investment_strategy,
        retirement_plan,
        tax_plan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_text_splits_into_all_sections() {
        let text = "Budget Plan: spend less.\nInvestment Strategy: index funds.\n\
                    Retirement Plan: max the 401k.\nTax Plan: harvest losses.";
        let plan = split_plan_sections(text);
        assert_eq!(plan.budget_plan, "spend less.");
        assert_eq!(plan.investment_strategy, "index funds.");
        assert_eq!(plan.retirement_plan, "max the 401k.");
        assert_eq!(plan.tax_plan, "harvest losses.");
    }

    #[test]
    fn missing_labels_leave_sections_empty() {
        let text = "Budget Plan: spend less.\nTax Plan: harvest losses.";
        let plan = split_plan_sections(text);
        assert_eq!(plan.budget_plan, "spend less.");
        assert_eq!(plan.investment_strategy, "");
        assert_eq!(plan.retirement_plan, "");
        assert_eq!(plan.tax_plan, "harvest losses.");
    }

    #[test]
    fn unlabeled_text_falls_back_to_budget_plan() {
        let plan = split_plan_sections("  just one blob of advice  ");
        assert_eq!(plan.budget_plan, "just one blob of advice");
        assert_eq!(plan.investment_strategy, "");
        assert_eq!(plan.retirement_plan, "");
        assert_eq!(plan.tax_plan, "");
    }

    #[test]
    fn out_of_order_labels_still_map_to_their_fields() {
        let text = "Tax Plan: harvest losses. Budget Plan: spend less.";
        let plan = split_plan_sections(text);
        assert_eq!(plan.tax_plan, "harvest losses.");
        assert_eq!(plan.budget_plan, "spend less.");
    }
}
