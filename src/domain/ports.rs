use super::tracker::{Event, Tracker};
use crate::error::Result;
use async_trait::async_trait;

/// A custom action the host can ask us to run by name.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, tracker: &Tracker) -> Result<Vec<Event>>;
}

pub type ActionBox = Box<dyn Action>;
