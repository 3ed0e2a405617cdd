/// Bundled campsite and comment records.
/// Loaded at startup in place of a remote data layer.
use serde::{Deserialize, Serialize};
use leptos::logging::log;

use crate::error::DataError;
use crate::models::{campsite::Campsite, comment::Comment};

const SEED_JSON: &str = include_str!("../data/db.json");

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub campsites: Vec<Campsite>,
    pub comments: Vec<Comment>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: SeedData = serde_json::from_str(json)?;
        data.check_references()?;
        Ok(data)
    }

    // Every comment must point at a campsite we know about.
    fn check_references(&self) -> Result<(), DataError> {
        if let Some(comment) = self
            .comments
            .iter()
            .find(|comment| !self.campsites.iter().any(|c| c.id == comment.campsite_id))
        {
            return Err(DataError::DanglingComment {
                comment_id: comment.id,
                campsite_id: comment.campsite_id,
            });
        }
        Ok(())
    }
}

pub fn load_seed() -> Result<SeedData, DataError> {
    let data = SeedData::from_json(SEED_JSON)?;
    log!(
        "[SEED] Loaded {} campsites and {} comments",
        data.campsites.len(),
        data.comments.len()
    );
    Ok(data)
}
