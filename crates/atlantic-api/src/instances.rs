use serde::Deserialize;
use tracing::info;

use crate::action::{Action, require, require_all};
use crate::envelope::Keyed;
use crate::types::{
    Instance, InstanceDetails, LaunchedInstance, PowerResult, RebootResult, ReprovisionedInstance,
    ResizedInstance, RunInstanceRequest, TerminatedInstance,
};
use crate::{AtlanticClient, Result};

impl RunInstanceRequest {
    pub fn to_action(&self) -> Result<Action> {
        require(&self.server_name, "Server name")?;
        require(&self.image_id, "Image ID")?;
        require(&self.plan_name, "Plan name")?;
        require(&self.location, "Location")?;

        Ok(Action::new("run-instance")
            .param("servername", &self.server_name)
            .param("imageid", &self.image_id)
            .param("planname", &self.plan_name)
            .param("vm_location", &self.location)
            .flag("enablebackup", self.enable_backup)
            .quantity("serverqty", self.quantity)
            .optional("cloneimage", self.clone_image.as_deref())
            .optional("term", self.term.as_deref())
            .optional("key_id", self.key_id.as_deref()))
    }
}

fn describe_action(instance_id: &str) -> Result<Action> {
    require(instance_id, "Instance ID")?;
    Ok(Action::new("describe-instance").param("instanceid", instance_id))
}

fn reboot_action(instance_id: &str, reboot_type: Option<&str>) -> Result<Action> {
    require(instance_id, "Instance ID")?;
    Ok(Action::new("reboot-instance")
        .param("instanceid", instance_id)
        .optional("reboottype", reboot_type))
}

fn shutdown_action(instance_ids: &[String], shutdown_type: Option<&str>) -> Result<Action> {
    require_all(instance_ids, "Instance ID")?;
    Ok(Action::new("shutdown-instance")
        .indexed("instanceid", instance_ids)
        .optional("shutdowntype", shutdown_type))
}

fn power_on_action(instance_ids: &[String]) -> Result<Action> {
    require_all(instance_ids, "Instance ID")?;
    Ok(Action::new("power-on-instance").indexed("instanceid", instance_ids))
}

fn resize_action(instance_id: &str, plan_name: &str) -> Result<Action> {
    require(instance_id, "Instance ID")?;
    require(plan_name, "Plan name")?;
    Ok(Action::new("resize-instance")
        .param("instanceid", instance_id)
        .param("planname", plan_name))
}

fn reprovision_action(instance_id: &str, plan_name: &str, image_id: &str) -> Result<Action> {
    require(instance_id, "Instance ID")?;
    require(plan_name, "Plan name")?;
    require(image_id, "Image ID")?;
    Ok(Action::new("reprovision-instance")
        .param("instanceid", instance_id)
        .param("planname", plan_name)
        .param("imageid", image_id))
}

fn terminate_action(instance_ids: &[String]) -> Result<Action> {
    require_all(instance_ids, "Instance ID")?;
    Ok(Action::new("terminate-instance").indexed("instanceid", instance_ids))
}

// ── Envelopes ───────────────────────────────────────────────────────

#[derive(Deserialize)]
struct InstancesSet<T> {
    #[serde(rename = "instancesSet", default = "Keyed::default")]
    instances: Keyed<T>,
}

#[derive(Deserialize)]
struct ListInstancesResult {
    #[serde(rename = "list-instancesresponse")]
    response: InstancesSet<Instance>,
}

#[derive(Deserialize)]
struct RunInstanceResult {
    #[serde(rename = "run-instanceresponse")]
    response: InstancesSet<LaunchedInstance>,
}

#[derive(Deserialize)]
struct DescribeInstanceResult {
    #[serde(rename = "describe-instanceresponse")]
    response: DescribeInstanceResponse,
}

#[derive(Deserialize)]
struct DescribeInstanceResponse {
    #[serde(rename = "instanceSet")]
    set: DescribedItem,
}

#[derive(Deserialize)]
struct DescribedItem {
    item: InstanceDetails,
}

#[derive(Deserialize)]
struct RebootInstanceResult {
    #[serde(rename = "reboot-instanceresponse")]
    response: Returned<RebootResult>,
}

#[derive(Deserialize)]
struct Returned<T> {
    #[serde(rename = "return")]
    value: T,
}

#[derive(Deserialize)]
struct ShutdownInstanceResult {
    #[serde(rename = "shutdown-instanceresponse")]
    response: InstancesSet<PowerResult>,
}

#[derive(Deserialize)]
struct PowerOnInstanceResult {
    #[serde(rename = "power-on-instanceresponse")]
    response: InstancesSet<PowerResult>,
}

#[derive(Deserialize)]
struct ResizeInstanceResult {
    #[serde(rename = "resize-instanceresponse")]
    response: Returned<FirstInstance>,
}

#[derive(Deserialize)]
struct FirstInstance {
    #[serde(rename = "1instance")]
    instance: ResizedInstance,
}

#[derive(Deserialize)]
struct ReprovisionInstanceResult {
    #[serde(rename = "reprovision-instanceresponse")]
    response: Returned<Returned<ReprovisionedInstance>>,
}

#[derive(Deserialize)]
struct TerminateInstanceResult {
    #[serde(rename = "terminate-instanceresponse")]
    response: InstancesSet<TerminatedInstance>,
}

// ── Operations ──────────────────────────────────────────────────────

impl AtlanticClient {
    /// Create one or more instances.
    pub async fn run_instance(&self, req: &RunInstanceRequest) -> Result<Vec<LaunchedInstance>> {
        let res: RunInstanceResult = self.call(&req.to_action()?).await?;
        let launched = res.response.instances.into_vec();
        info!(
            server_name = %req.server_name,
            count = launched.len(),
            "atlantic: instances launched"
        );
        Ok(launched)
    }

    /// All active instances on the account.
    pub async fn list_instances(&self) -> Result<Vec<Instance>> {
        let res: ListInstancesResult = self.call(&Action::new("list-instances")).await?;
        Ok(res.response.instances.into_vec())
    }

    pub async fn describe_instance(&self, instance_id: &str) -> Result<InstanceDetails> {
        let res: DescribeInstanceResult = self.call(&describe_action(instance_id)?).await?;
        Ok(res.response.set.item)
    }

    pub async fn reboot_instance(
        &self,
        instance_id: &str,
        reboot_type: Option<&str>,
    ) -> Result<RebootResult> {
        let res: RebootInstanceResult =
            self.call(&reboot_action(instance_id, reboot_type)?).await?;
        info!(instance_id, "atlantic: instance rebooted");
        Ok(res.response.value)
    }

    /// Shut down one or more instances.
    pub async fn shutdown_instance(
        &self,
        instance_ids: &[String],
        shutdown_type: Option<&str>,
    ) -> Result<Vec<PowerResult>> {
        let res: ShutdownInstanceResult = self
            .call(&shutdown_action(instance_ids, shutdown_type)?)
            .await?;
        info!(count = instance_ids.len(), "atlantic: instances shut down");
        Ok(res.response.instances.into_vec())
    }

    /// Power on one or more instances.
    pub async fn power_on_instance(&self, instance_ids: &[String]) -> Result<Vec<PowerResult>> {
        let res: PowerOnInstanceResult = self.call(&power_on_action(instance_ids)?).await?;
        info!(count = instance_ids.len(), "atlantic: instances powered on");
        Ok(res.response.instances.into_vec())
    }

    /// Move an instance to a larger plan.
    pub async fn resize_instance(
        &self,
        instance_id: &str,
        plan_name: &str,
    ) -> Result<ResizedInstance> {
        let res: ResizeInstanceResult = self.call(&resize_action(instance_id, plan_name)?).await?;
        info!(instance_id, plan_name, "atlantic: instance resized");
        Ok(res.response.value.instance)
    }

    /// Rebuild an instance with the same or a different plan and image.
    pub async fn reprovision_instance(
        &self,
        instance_id: &str,
        plan_name: &str,
        image_id: &str,
    ) -> Result<ReprovisionedInstance> {
        let res: ReprovisionInstanceResult = self
            .call(&reprovision_action(instance_id, plan_name, image_id)?)
            .await?;
        info!(instance_id, image_id, "atlantic: instance reprovisioned");
        Ok(res.response.value.value)
    }

    /// Remove one or more instances.
    pub async fn terminate_instance(
        &self,
        instance_ids: &[String],
    ) -> Result<Vec<TerminatedInstance>> {
        let res: TerminateInstanceResult = self.call(&terminate_action(instance_ids)?).await?;
        info!(count = instance_ids.len(), "atlantic: instances terminated");
        Ok(res.response.instances.into_vec())
    }
}
