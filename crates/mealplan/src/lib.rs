//! Weekly plan generation over the personalized recipe pool.

mod generate;
mod week;

pub use generate::{MIN_AI_RECIPES, ScaledRecipe, scale_to_target};
pub use week::{current_week_start, week_start};

use menowell_shared::plan::{Plan, WEEKLY_PLAN_TYPE};
use menowell_store::{DocumentStore, EntityKind, fields, filter_one_as};
use serde_json::json;

pub struct PlanService<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> PlanService<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &'a dyn DocumentStore {
        self.store
    }

    /// The user's plan for the week containing today, if any.
    pub async fn current_week(&self, user_id: &str) -> menowell_shared::Result<Option<Plan>> {
        self.for_week(user_id, &current_week_start()).await
    }

    pub async fn for_week(
        &self,
        user_id: &str,
        week_start: &str,
    ) -> menowell_shared::Result<Option<Plan>> {
        Ok(filter_one_as(
            self.store(),
            EntityKind::Plan,
            &fields(&[
                ("user_id", json!(user_id)),
                ("type", json!(WEEKLY_PLAN_TYPE)),
                ("date", json!(week_start)),
            ]),
        )
        .await?)
    }
}
