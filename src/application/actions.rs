use crate::domain::funds::{FundsChecker, TransferRequest};
use crate::domain::ports::Action;
use crate::domain::tracker::{Event, Tracker};
use crate::error::Result;
use async_trait::async_trait;

pub const CHECK_SUFFICIENT_FUNDS: &str = "action_check_sufficient_funds";
pub const AMOUNT_SLOT: &str = "amount";
pub const HAS_SUFFICIENT_FUNDS_SLOT: &str = "has_sufficient_funds";

/// Sets `has_sufficient_funds` based on the `amount` slot.
///
/// Only string slot values are read as amounts. A missing slot, `null`, or a
/// value of any other JSON type is checked as an absent amount and so comes
/// back insufficient.
#[derive(Debug, Clone, Default)]
pub struct CheckSufficientFundsAction {
    checker: FundsChecker,
}

impl CheckSufficientFundsAction {
    pub fn new(checker: FundsChecker) -> Self {
        Self { checker }
    }

    pub fn transfer_request(tracker: &Tracker) -> TransferRequest {
        TransferRequest {
            amount: tracker
                .get_slot(AMOUNT_SLOT)
                .and_then(|value| value.as_str())
                .map(str::to_owned),
        }
    }
}

#[async_trait]
impl Action for CheckSufficientFundsAction {
    fn name(&self) -> &str {
        CHECK_SUFFICIENT_FUNDS
    }

    async fn run(&self, tracker: &Tracker) -> Result<Vec<Event>> {
        let request = Self::transfer_request(tracker);
        let result = self.checker.check(&request);

        if request.amount.is_some() && request.requested_amount().is_none() {
            tracing::debug!(
                amount = ?request.amount,
                "amount could not be parsed, treating as insufficient"
            );
        }
        tracing::debug!(
            balance = %self.checker.balance(),
            has_sufficient_funds = result.has_sufficient_funds,
            "funds checked"
        );

        Ok(vec![Event::slot_set(
            HAS_SUFFICIENT_FUNDS_SLOT,
            result.has_sufficient_funds,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::funds::Balance;
    use rust_decimal_macros::dec;
    use serde_json::json;

    async fn run_with_amount(amount: serde_json::Value) -> Vec<Event> {
        let tracker = Tracker::new("user-1").with_slot(AMOUNT_SLOT, amount);
        CheckSufficientFundsAction::default()
            .run(&tracker)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_sets_slot_true_within_balance() {
        let events = run_with_amount(json!("$250")).await;
        assert_eq!(
            events,
            vec![Event::slot_set(HAS_SUFFICIENT_FUNDS_SLOT, true)]
        );
    }

    #[tokio::test]
    async fn test_sets_slot_false_over_balance() {
        let events = run_with_amount(json!("$1,200.50")).await;
        assert_eq!(
            events,
            vec![Event::slot_set(HAS_SUFFICIENT_FUNDS_SLOT, false)]
        );
    }

    #[tokio::test]
    async fn test_missing_slot_is_insufficient() {
        let events = CheckSufficientFundsAction::default()
            .run(&Tracker::new("user-1"))
            .await
            .unwrap();
        assert_eq!(
            events,
            vec![Event::slot_set(HAS_SUFFICIENT_FUNDS_SLOT, false)]
        );
    }

    #[tokio::test]
    async fn test_non_string_slot_is_insufficient() {
        for value in [json!(null), json!(500), json!(true), json!(["100"])] {
            let events = run_with_amount(value).await;
            assert_eq!(
                events,
                vec![Event::slot_set(HAS_SUFFICIENT_FUNDS_SLOT, false)]
            );
        }
    }

    #[tokio::test]
    async fn test_custom_balance() {
        let action = CheckSufficientFundsAction::new(FundsChecker::new(Balance::new(dec!(5000))));
        let tracker = Tracker::new("user-1").with_slot(AMOUNT_SLOT, "$1,200.50");
        let events = action.run(&tracker).await.unwrap();
        assert_eq!(
            events,
            vec![Event::slot_set(HAS_SUFFICIENT_FUNDS_SLOT, true)]
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(
            CheckSufficientFundsAction::default().name(),
            "action_check_sufficient_funds"
        );
    }
}
