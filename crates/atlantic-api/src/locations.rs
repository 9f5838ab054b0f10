use serde::Deserialize;

use crate::action::Action;
use crate::envelope::Keyed;
use crate::types::Location;
use crate::{AtlanticClient, Result};

#[derive(Deserialize)]
struct ListLocationsResult {
    #[serde(rename = "list-locationsresponse")]
    response: ListLocationsResponse,
}

#[derive(Deserialize)]
struct ListLocationsResponse {
    #[serde(rename = "KeysSet", default)]
    locations: Keyed<Location>,
}

impl AtlanticClient {
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        let res: ListLocationsResult = self.call(&Action::new("list-locations")).await?;
        Ok(res.response.locations.into_vec())
    }
}
