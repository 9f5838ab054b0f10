use serde::Deserialize;

use crate::action::Action;
use crate::envelope::Keyed;
use crate::types::Plan;
use crate::{AtlanticClient, Result};

#[derive(Deserialize)]
struct DescribePlanResult {
    #[serde(rename = "describe-planresponse")]
    response: DescribePlanResponse,
}

#[derive(Deserialize)]
struct DescribePlanResponse {
    #[serde(default)]
    plans: Keyed<Plan>,
}

// `planName` is camel case on the wire, unlike every other parameter.
fn describe_action(plan_name: Option<&str>, platform: Option<&str>) -> Action {
    Action::new("describe-plan")
        .optional("planName", plan_name)
        .optional("platform", platform)
}

impl AtlanticClient {
    /// Describe server plans, optionally filtered by name and platform.
    pub async fn describe_plan(
        &self,
        plan_name: Option<&str>,
        platform: Option<&str>,
    ) -> Result<Vec<Plan>> {
        let res: DescribePlanResult = self.call(&describe_action(plan_name, platform)).await?;
        Ok(res.response.plans.into_vec())
    }
}
