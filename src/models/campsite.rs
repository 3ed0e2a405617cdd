use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Campsite {
    pub id: u32,
    pub name: String,
    pub image: String,       // Path relative to the image base URL
    #[serde(default)]
    pub elevation: Option<u32>,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}
