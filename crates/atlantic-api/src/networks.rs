use serde::Deserialize;

use crate::action::Action;
use crate::envelope::Keyed;
use crate::types::PrivateNetwork;
use crate::{AtlanticClient, Result};

#[derive(Deserialize)]
struct ListPrivateNetworksResult {
    #[serde(rename = "list-private-networksresponse")]
    response: ListPrivateNetworksResponse,
}

#[derive(Deserialize)]
struct ListPrivateNetworksResponse {
    #[serde(rename = "KeysSet", default)]
    networks: Keyed<PrivateNetwork>,
}

impl AtlanticClient {
    pub async fn list_private_networks(&self) -> Result<Vec<PrivateNetwork>> {
        let res: ListPrivateNetworksResult =
            self.call(&Action::new("list-private-networks")).await?;
        Ok(res.response.networks.into_vec())
    }
}
