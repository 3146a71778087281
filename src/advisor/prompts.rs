use crate::advisor::dto::ProfileRequest;

pub fn onboarding_questions(profile: &ProfileRequest) -> String {
    format!(
        "You are a financial advisor onboarding a new client. Client profile: \
         name {}, age {}, sex {}, tax status {}, located in {}, {}. \
         Generate 5 to 8 onboarding questions to understand their financial \
         situation and goals. Do not ask for sensitive personal identifiers \
         such as social security, document, or account numbers.",
        profile.full_name, profile.age, profile.sex, profile.tax_status, profile.city, profile.state
    )
}

pub fn analysis_report(answers: &str) -> String {
    format!(
        "A client answered their financial onboarding questions as follows:\n\
         {answers}\n\n\
         Provide a detailed financial analysis of their situation, with \
         concrete recommendations."
    )
}

pub fn financial_plan(report: &str) -> String {
    format!(
        "Given the following financial analysis of a client:\n\
         {report}\n\n\
         Draft a personalized financial plan covering budgeting, investments, \
         retirement and tax strategy. Answer in four labeled sections: \
         'Budget Plan:', 'Investment Strategy:', 'Retirement Plan:' and 'Tax Plan:'."
    )
}

pub fn progress_insights(progress: &str) -> String {
    format!(
        "A client's progress on their financial recommendations so far:\n\
         {progress}\n\n\
         Provide insights on this progress and recommendations for their next steps."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_prompt_carries_profile_slots() {
        let profile = ProfileRequest {
            full_name: "Ada Lovelace".into(),
            age: 36,
            sex: "F".into(),
            tax_status: "single".into(),
            state: "NY".into(),
            city: "Albany".into(),
        };
        let prompt = onboarding_questions(&profile);
        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("36"));
        assert!(prompt.contains("single"));
        assert!(prompt.contains("Albany"));
        assert!(prompt.contains("5 to 8"));
        assert!(prompt.contains("sensitive personal identifiers"));
    }

    #[test]
    fn analysis_prompt_carries_answers() {
        let prompt = analysis_report("I save 10% monthly");
        assert!(prompt.contains("I save 10% monthly"));
        assert!(prompt.contains("financial analysis"));
    }

    #[test]
    fn plan_prompt_carries_report_and_section_labels() {
        let prompt = financial_plan("risk score 80");
        assert!(prompt.contains("risk score 80"));
        for label in ["Budget Plan:", "Investment Strategy:", "Retirement Plan:", "Tax Plan:"] {
            assert!(prompt.contains(label));
        }
    }

    #[test]
    fn progress_prompt_carries_progress_data() {
        let prompt = progress_insights("2 of 3 complete");
        assert!(prompt.contains("2 of 3 complete"));
        assert!(prompt.contains("next steps"));
    }
}
