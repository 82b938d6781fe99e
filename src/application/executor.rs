use crate::application::actions::CheckSufficientFundsAction;
use crate::domain::funds::FundsChecker;
use crate::domain::ports::ActionBox;
use crate::domain::tracker::{ActionCall, ActionResponse};
use crate::error::{ActionError, Result};
use std::collections::HashMap;

/// Runs registered actions by name.
///
/// `ActionExecutor` owns every action it can dispatch to. Calls are
/// independent of each other: no state is carried from one call to the next.
#[derive(Default)]
pub struct ActionExecutor {
    actions: HashMap<String, ActionBox>,
}

impl ActionExecutor {
    /// Creates an executor with no registered actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor with the funds check registered against `checker`.
    pub fn with_funds_checker(checker: FundsChecker) -> Self {
        let mut executor = Self::new();
        executor.register(Box::new(CheckSufficientFundsAction::new(checker)));
        executor
    }

    /// Registers an action under its own name, replacing any previous action
    /// with the same name.
    pub fn register(&mut self, action: ActionBox) {
        let name = action.name().to_string();
        if self.actions.insert(name.clone(), action).is_some() {
            tracing::warn!(action = %name, "replaced previously registered action");
        }
    }

    pub fn action_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.actions.keys().cloned().collect();
        names.sort();
        names
    }

    /// Runs the action named by `call.next_action` against the call's tracker.
    pub async fn run(&self, call: &ActionCall) -> Result<ActionResponse> {
        let action = self
            .actions
            .get(&call.next_action)
            .ok_or_else(|| ActionError::UnknownActionError(call.next_action.clone()))?;

        tracing::debug!(
            action = %call.next_action,
            sender_id = ?call.sender_id,
            "running action"
        );

        let events = action.run(&call.tracker).await?;
        Ok(ActionResponse::from_events(events))
    }
}
