#[cfg(test)]
mod tests {
    use crate::budgets::{evaluate_budget, BudgetCheck, BudgetStatus};
    use crate::test_fixtures::budget;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn evaluate(spent: Decimal) -> crate::budgets::BudgetEvaluation {
        let b = budget("user-1", dec!(1000), 75, 90);
        match evaluate_budget(Some(&b), spent) {
            BudgetCheck::Evaluated(evaluation) => evaluation,
            BudgetCheck::NoBudget => panic!("expected an evaluation"),
        }
    }

    #[test]
    fn test_no_budget_is_a_sentinel() {
        assert_eq!(evaluate_budget(None, dec!(50)), BudgetCheck::NoBudget);
        assert!(BudgetCheck::NoBudget.evaluation().is_none());
    }

    #[test]
    fn test_warning_band() {
        let evaluation = evaluate(dec!(800));
        assert_eq!(evaluation.status, BudgetStatus::Warning);
        assert_eq!(evaluation.percentage_used, dec!(80.00));
        assert_eq!(evaluation.remaining_amount, dec!(200));
        assert_eq!(evaluation.overshoot, None);
    }

    #[test]
    fn test_exceeded_caps_percentage_and_reports_overshoot() {
        let evaluation = evaluate(dec!(1200));
        assert_eq!(evaluation.status, BudgetStatus::Exceeded);
        assert_eq!(evaluation.percentage_used, dec!(100));
        assert_eq!(evaluation.remaining_amount, Decimal::ZERO);
        assert_eq!(evaluation.overshoot, Some(dec!(200)));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(evaluate(dec!(749.99)).status, BudgetStatus::Safe);
        assert_eq!(evaluate(dec!(750)).status, BudgetStatus::Warning);
        assert_eq!(evaluate(dec!(900)).status, BudgetStatus::Critical);
        assert_eq!(evaluate(dec!(999.99)).status, BudgetStatus::Critical);
        assert_eq!(evaluate(dec!(1000)).status, BudgetStatus::Exceeded);
        assert_eq!(evaluate(dec!(1000)).overshoot, Some(Decimal::ZERO));
    }

    #[test]
    fn test_zero_spent_is_safe() {
        let evaluation = evaluate(Decimal::ZERO);
        assert_eq!(evaluation.status, BudgetStatus::Safe);
        assert_eq!(evaluation.percentage_used, Decimal::ZERO);
        assert_eq!(evaluation.remaining_amount, dec!(1000));
    }

    #[test]
    fn test_alerting_statuses() {
        assert!(!BudgetStatus::Safe.is_alerting());
        assert!(!BudgetStatus::Warning.is_alerting());
        assert!(BudgetStatus::Critical.is_alerting());
        assert!(BudgetStatus::Exceeded.is_alerting());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&BudgetStatus::Exceeded).unwrap();
        assert_eq!(json, "\"exceeded\"");
        let json = serde_json::to_value(BudgetCheck::NoBudget).unwrap();
        assert_eq!(json["kind"], "noBudget");
    }
}
