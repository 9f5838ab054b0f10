use serde::Deserialize;
use tracing::info;

use crate::action::{Action, require, require_all};
use crate::envelope::Keyed;
use crate::types::{AssignedIp, IpResult, PublicIp, ReservedIp};
use crate::{AtlanticClient, Result};

// ── Actions ─────────────────────────────────────────────────────────

fn list_action(location: Option<&str>, address: Option<&str>) -> Action {
    Action::new("list-public-ips")
        .optional("location", location)
        .optional("ip_address", address)
}

fn reserve_action(location: &str, quantity: u32) -> Result<Action> {
    require(location, "Location")?;
    Ok(Action::new("reserve-public-ip")
        .param("location", location)
        .quantity("qty", quantity))
}

fn release_action(addresses: &[String]) -> Result<Action> {
    require_all(addresses, "IP address")?;
    Ok(Action::new("release-public-ip").joined("ip_address", addresses))
}

fn assign_action(instance_id: &str, addresses: &[String]) -> Result<Action> {
    require(instance_id, "Instance ID")?;
    require_all(addresses, "IP address")?;
    Ok(Action::new("assign-public-ip")
        .param("instanceid", instance_id)
        .joined("ip_address", addresses))
}

fn unassign_action(addresses: &[String]) -> Result<Action> {
    require_all(addresses, "IP address")?;
    Ok(Action::new("unassign-public-ip").joined("ip_address", addresses))
}

// ── Envelopes ───────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ListPublicIpsResult {
    #[serde(rename = "list-public-ipsresponse")]
    response: ListPublicIpsResponse,
}

#[derive(Deserialize)]
struct ListPublicIpsResponse {
    #[serde(rename = "KeysSet", default)]
    ips: Keyed<PublicIp>,
}

#[derive(Deserialize)]
struct ReservePublicIpResult {
    #[serde(rename = "reserve-public-ipresponse")]
    response: ReservePublicIpResponse,
}

#[derive(Deserialize)]
struct ReservePublicIpResponse {
    #[serde(rename = "reserve-ip", default)]
    ips: Keyed<ReservedIp>,
}

#[derive(Deserialize)]
struct ReleasePublicIpResult {
    #[serde(rename = "release-public-ipresponse")]
    response: ReleasePublicIpResponse,
}

#[derive(Deserialize)]
struct ReleasePublicIpResponse {
    #[serde(rename = "release-ip", default)]
    ips: Keyed<IpResult>,
}

#[derive(Deserialize)]
struct AssignPublicIpResult {
    #[serde(rename = "assign-public-ipresponse")]
    response: AssignPublicIpResponse,
}

#[derive(Deserialize)]
struct AssignPublicIpResponse {
    #[serde(rename = "assign-ip", default)]
    ips: Keyed<AssignedIp>,
}

#[derive(Deserialize)]
struct UnassignPublicIpResult {
    #[serde(rename = "unassign-public-ipresponse")]
    response: UnassignPublicIpResponse,
}

#[derive(Deserialize)]
struct UnassignPublicIpResponse {
    #[serde(rename = "unassign-ip", default)]
    ips: Keyed<IpResult>,
}

// ── Operations ──────────────────────────────────────────────────────

impl AtlanticClient {
    /// Additional public IPs on the account, optionally filtered by location
    /// or address.
    pub async fn list_public_ips(
        &self,
        location: Option<&str>,
        address: Option<&str>,
    ) -> Result<Vec<PublicIp>> {
        let res: ListPublicIpsResult = self.call(&list_action(location, address)).await?;
        Ok(res.response.ips.into_vec())
    }

    /// Reserve `quantity` public IPs in a location. Values below 1 reserve one.
    pub async fn reserve_public_ip(
        &self,
        location: &str,
        quantity: u32,
    ) -> Result<Vec<ReservedIp>> {
        let res: ReservePublicIpResult = self.call(&reserve_action(location, quantity)?).await?;
        let ips = res.response.ips.into_vec();
        info!(location, count = ips.len(), "atlantic: public ips reserved");
        Ok(ips)
    }

    pub async fn release_public_ip(&self, addresses: &[String]) -> Result<Vec<IpResult>> {
        let res: ReleasePublicIpResult = self.call(&release_action(addresses)?).await?;
        info!(count = addresses.len(), "atlantic: public ips released");
        Ok(res.response.ips.into_vec())
    }

    /// Assign one or more public IPs to an instance.
    pub async fn assign_public_ip(
        &self,
        instance_id: &str,
        addresses: &[String],
    ) -> Result<Vec<AssignedIp>> {
        let res: AssignPublicIpResult = self.call(&assign_action(instance_id, addresses)?).await?;
        info!(instance_id, count = addresses.len(), "atlantic: public ips assigned");
        Ok(res.response.ips.into_vec())
    }

    pub async fn unassign_public_ip(&self, addresses: &[String]) -> Result<Vec<IpResult>> {
        let res: UnassignPublicIpResult = self.call(&unassign_action(addresses)?).await?;
        info!(count = addresses.len(), "atlantic: public ips unassigned");
        Ok(res.response.ips.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Error;

    fn ips(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn list_filters_are_optional() {
        assert_eq!(list_action(None, None).as_str(), "list-public-ips");
        assert_eq!(
            list_action(Some("USEAST2"), Some("203.0.113.7")).as_str(),
            "list-public-ips&location=USEAST2&ip_address=203.0.113.7"
        );
    }

    #[test]
    fn reserve_always_sends_a_quantity_of_at_least_one() {
        assert_eq!(
            reserve_action("USEAST2", 0).unwrap().as_str(),
            "reserve-public-ip&location=USEAST2&qty=1"
        );
        assert_eq!(
            reserve_action("USEAST2", 4).unwrap().as_str(),
            "reserve-public-ip&location=USEAST2&qty=4"
        );
        assert!(matches!(reserve_action("", 1), Err(Error::Validation("Location"))));
    }

    #[test]
    fn addresses_are_comma_joined() {
        assert_eq!(
            release_action(&ips(&["203.0.113.7"])).unwrap().as_str(),
            "release-public-ip&ip_address=203.0.113.7"
        );
        assert_eq!(
            release_action(&ips(&["203.0.113.7", "203.0.113.8"])).unwrap().as_str(),
            "release-public-ip&ip_address=203.0.113.7,203.0.113.8"
        );
        assert_eq!(
            assign_action("42", &ips(&["203.0.113.7", "203.0.113.8"])).unwrap().as_str(),
            "assign-public-ip&instanceid=42&ip_address=203.0.113.7,203.0.113.8"
        );
        assert_eq!(
            unassign_action(&ips(&["203.0.113.7", "203.0.113.8"])).unwrap().as_str(),
            "unassign-public-ip&ip_address=203.0.113.7,203.0.113.8"
        );
    }

    #[test]
    fn empty_address_lists_fail_validation() {
        assert!(matches!(release_action(&[]), Err(Error::Validation("IP address"))));
        assert!(matches!(unassign_action(&[]), Err(Error::Validation("IP address"))));
        assert!(matches!(assign_action("42", &[]), Err(Error::Validation("IP address"))));
        assert!(matches!(
            assign_action("", &ips(&["203.0.113.7"])),
            Err(Error::Validation("Instance ID"))
        ));
    }

    #[test]
    fn decodes_assign_results() {
        let res: AssignPublicIpResult = serde_json::from_str(
            r#"{"assign-public-ipresponse": {"assign-ip": {
                "203.0.113.7": {"instanceid": 42, "ip_address": "203.0.113.7", "result": "true"}
            }}}"#,
        )
        .unwrap();
        assert_eq!(
            res.response.ips.into_vec(),
            vec![AssignedIp {
                instance_id: 42,
                address: "203.0.113.7".into(),
                message: String::new(),
                result: "true".into(),
            }]
        );
    }
}
