use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum ImageResolution {
    #[default]
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    OneK,
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    #[strum(serialize = "4K")]
    FourK,
}

pub const NEWS_IMAGE_ASPECT_RATIO: &str = "16:9";
