#[cfg(test)]
mod tests {
    use crate::alerts::{build_budget_alert, AlertType};
    use crate::budgets::{evaluate_budget, BudgetEvaluation};
    use crate::test_fixtures::{budget, user};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn evaluation(spent: Decimal) -> BudgetEvaluation {
        let b = budget("u-1", dec!(500), 75, 90);
        evaluate_budget(Some(&b), spent).evaluation().cloned().unwrap()
    }

    #[test]
    fn test_critical_alert_payload() {
        let mut u = user("u-1", "ana", Some("ana@example.com"));
        u.first_name = Some("Ana".to_string());
        let b = budget("u-1", dec!(500), 75, 90);
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();

        let alert = build_budget_alert(&u, &b, &evaluation(dec!(465.50)), ts).unwrap();

        assert_eq!(alert.alert_type, AlertType::BudgetCritical);
        assert_eq!(alert.user_name, "Ana");
        assert_eq!(alert.percentage, dec!(93.10));
        assert_eq!(alert.message, "You have reached 93.1% of your monthly budget");

        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["alert_type"], "budget_critical");
        assert_eq!(json["user_email"], "ana@example.com");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2024-03-15T10:00:00"));
    }

    #[test]
    fn test_exceeded_alert_message() {
        let u = user("u-1", "ana", Some("ana@example.com"));
        let b = budget("u-1", dec!(500), 75, 90);

        let alert = build_budget_alert(&u, &b, &evaluation(dec!(620)), Utc::now()).unwrap();

        assert_eq!(alert.alert_type, AlertType::BudgetExceeded);
        assert_eq!(
            alert.message,
            "You have exceeded your monthly budget of 500.00 by 120.00"
        );
    }

    #[test]
    fn test_no_alert_below_critical_or_without_email() {
        let b = budget("u-1", dec!(500), 75, 90);
        let with_email = user("u-1", "ana", Some("ana@example.com"));
        assert!(build_budget_alert(&with_email, &b, &evaluation(dec!(400)), Utc::now()).is_none());

        let without_email = user("u-1", "ana", None);
        assert!(
            build_budget_alert(&without_email, &b, &evaluation(dec!(480)), Utc::now()).is_none()
        );
    }
}
