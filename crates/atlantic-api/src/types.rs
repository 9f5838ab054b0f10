use serde::{Deserialize, Serialize};

// ── Instances ───────────────────────────────────────────────────

/// An instance as returned by `list-instances`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde(rename = "InstanceId")]
    pub id: String,
    pub cu_id: String,
    #[serde(rename = "rate_per_hr")]
    pub rate_per_hour: String,
    #[serde(rename = "vm_cpu_req")]
    pub cpu_count: String,
    #[serde(rename = "vm_created_date")]
    pub created_date: String,
    #[serde(rename = "vm_description")]
    pub description: String,
    #[serde(rename = "vm_disk_req")]
    pub disk_size: String,
    #[serde(rename = "vm_image")]
    pub image: String,
    #[serde(rename = "vm_image_display_name")]
    pub image_display_name: String,
    #[serde(rename = "vm_ip_address")]
    pub ip_address: String,
    #[serde(rename = "vm_name")]
    pub name: String,
    #[serde(rename = "vm_network_req")]
    pub network_count: String,
    #[serde(rename = "vm_os_architecture")]
    pub os_architecture: String,
    #[serde(rename = "vm_plan_name")]
    pub plan_name: String,
    #[serde(rename = "vm_ram_req")]
    pub ram_size: String,
    #[serde(rename = "vm_status")]
    pub status: String,
}

/// Full detail of one instance, from `describe-instance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceDetails {
    #[serde(rename = "InstanceId")]
    pub id: String,
    pub cloned_from: String,
    pub cu_id: String,
    pub disallow_deletion: String,
    #[serde(rename = "rate_per_hr")]
    pub rate_per_hour: String,
    pub removed: String,
    pub reprovisioning_processed_date: String,
    pub resetpwd_processed_date: String,
    #[serde(rename = "vm_cpu_req")]
    pub cpu_count: String,
    #[serde(rename = "vm_created_date")]
    pub created_date: String,
    #[serde(rename = "vm_description")]
    pub description: String,
    #[serde(rename = "vm_disk_req")]
    pub disk_size: String,
    pub vm_id: String,
    #[serde(rename = "vm_image")]
    pub image: String,
    #[serde(rename = "vm_image_display_name")]
    pub image_display_name: String,
    #[serde(rename = "vm_ip_address")]
    pub ip_address: String,
    #[serde(rename = "vm_ip_gateway")]
    pub ip_gateway: String,
    #[serde(rename = "vm_ip_subnet")]
    pub ip_subnet: String,
    #[serde(rename = "vm_network_req")]
    pub network_count: String,
    #[serde(rename = "vm_os_architecture")]
    pub os_architecture: String,
    #[serde(rename = "vm_plan_name")]
    pub plan_name: String,
    #[serde(rename = "vm_ram_req")]
    pub ram_size: String,
    #[serde(rename = "vm_removed_date")]
    pub removed_date: String,
    #[serde(rename = "vm_status")]
    pub status: String,
    #[serde(rename = "vm_username")]
    pub username: String,
}

/// A freshly launched instance and its initial credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchedInstance {
    #[serde(rename = "instanceid")]
    pub id: String,
    pub ip_address: String,
    pub password: String,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminatedInstance {
    #[serde(rename = "InstanceId")]
    pub id: String,
    pub message: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebootResult {
    pub message: String,
    pub value: String,
}

/// Per-instance outcome of a shutdown or power-on request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerResult {
    #[serde(rename = "InstanceID")]
    pub id: String,
    #[serde(rename = "Message")]
    pub message: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizedInstance {
    #[serde(rename = "instanceid")]
    pub id: String,
    #[serde(rename = "Message")]
    pub message: String,
    pub value: String,
    #[serde(rename = "vm_status")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReprovisionedInstance {
    #[serde(rename = "1instance")]
    pub instance: ResizedInstance,
    #[serde(rename = "1item")]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// ── Requests ────────────────────────────────────────────────────

/// Parameters for `run-instance`.
#[derive(Debug, Clone, Default)]
pub struct RunInstanceRequest {
    pub server_name: String,
    pub image_id: String,
    pub plan_name: String,
    pub location: String,
    pub enable_backup: bool,
    /// Number of servers to create. Values below 1 are sent as 1.
    pub quantity: u32,
    pub clone_image: Option<String>,
    pub term: Option<String>,
    pub key_id: Option<String>,
}

// ── Images ──────────────────────────────────────────────────────

/// A cloud image available for new instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(rename = "imageid")]
    pub id: String,
    pub architecture: String,
    #[serde(rename = "displayname")]
    pub display_name: String,
    pub image_type: String,
    #[serde(rename = "ostype")]
    pub os_type: String,
    pub owner: String,
    pub platform: String,
    pub version: String,
}

// ── Plans ───────────────────────────────────────────────────────

/// A server plan: sizing and pricing for an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(rename = "plan_name")]
    pub name: String,
    pub centos_capable: String,
    pub cpanel_capable: String,
    pub display_disk: String,
    pub display_ram: String,
    pub free_transfer: String,
    pub num_cpu: String,
    #[serde(rename = "ostype")]
    pub os_type: String,
    #[serde(rename = "plan_locked")]
    pub locked: String,
    pub plan_type: String,
    pub platform: String,
    #[serde(rename = "rate_per_hr")]
    pub rate_per_hour: String,
    #[serde(rename = "rate_per_hr_1y")]
    pub rate_per_hour_1_year: String,
    #[serde(rename = "rate_per_hr_3y")]
    pub rate_per_hour_3_year: String,
    pub windows_capable: String,
}

// ── Locations ───────────────────────────────────────────────────

/// A data center location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(rename = "location_code")]
    pub code: String,
    #[serde(rename = "location_name")]
    pub name: String,
    pub description: String,
    pub info_message: String,
    #[serde(rename = "is_active")]
    pub active: String,
}

// ── Private networks ────────────────────────────────────────────

/// A private network range assigned to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateNetwork {
    pub ip_range: String,
    pub network: String,
    pub prefix: String,
}

// ── Public IPs ──────────────────────────────────────────────────

/// An additional public IP reserved on the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicIp {
    #[serde(rename = "ip_address")]
    pub address: String,
    #[serde(rename = "instanceid")]
    pub instance_id: String,
    #[serde(rename = "ip_gateway")]
    pub gateway: String,
    #[serde(rename = "ip_location")]
    pub location: String,
    #[serde(rename = "ip_subnet")]
    pub subnet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedIp {
    #[serde(rename = "ip_address")]
    pub address: String,
    #[serde(rename = "ip_dns1")]
    pub dns1: String,
    #[serde(rename = "ip_dns2")]
    pub dns2: String,
    #[serde(rename = "ip_gateway")]
    pub gateway: String,
    #[serde(rename = "ip_location")]
    pub location: String,
    #[serde(rename = "ip_subnet")]
    pub subnet: String,
    pub message: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignedIp {
    #[serde(rename = "instanceid")]
    pub instance_id: i64,
    #[serde(rename = "ip_address")]
    pub address: String,
    pub message: String,
    pub result: String,
}

/// Outcome for one address of a release or unassign request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpResult {
    #[serde(rename = "ip_address")]
    pub address: String,
    pub message: String,
    pub result: String,
}

// ── SSH keys ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKey {
    #[serde(rename = "key_id")]
    pub id: String,
    #[serde(rename = "key_name")]
    pub name: String,
    pub public_key: String,
}

/// Outcome of adding or deleting a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKeyResult {
    #[serde(rename = "key_id")]
    pub id: String,
    pub message: String,
    pub result: String,
}
