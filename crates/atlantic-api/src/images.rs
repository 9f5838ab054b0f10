use serde::Deserialize;

use crate::action::Action;
use crate::envelope::Keyed;
use crate::types::Image;
use crate::{AtlanticClient, Result};

#[derive(Deserialize)]
struct DescribeImageResult {
    #[serde(rename = "describe-imageresponse")]
    response: DescribeImageResponse,
}

#[derive(Deserialize)]
struct DescribeImageResponse {
    #[serde(rename = "imagesset", default)]
    images: Keyed<Image>,
}

fn describe_action(image_id: Option<&str>) -> Action {
    Action::new("describe-image").optional("imageid", image_id)
}

impl AtlanticClient {
    /// Describe one image, or every image when `image_id` is `None`.
    pub async fn describe_image(&self, image_id: Option<&str>) -> Result<Vec<Image>> {
        let res: DescribeImageResult = self.call(&describe_action(image_id)).await?;
        Ok(res.response.images.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_filter_is_optional() {
        assert_eq!(describe_action(None).as_str(), "describe-image");
        assert_eq!(
            describe_action(Some("ubuntu-22.04_64bit")).as_str(),
            "describe-image&imageid=ubuntu-22.04_64bit"
        );
    }

    #[test]
    fn decodes_image_set() {
        let res: DescribeImageResult = serde_json::from_str(
            r#"{"describe-imageresponse": {"requestid": "r", "imagesset": {
                "item": {"imageid": "ubuntu-22.04_64bit", "displayname": "Ubuntu 22.04", "ostype": "linux"}
            }}}"#,
        )
        .unwrap();
        let images = res.response.images.into_vec();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].display_name, "Ubuntu 22.04");
        assert_eq!(images[0].os_type, "linux");
    }
}
