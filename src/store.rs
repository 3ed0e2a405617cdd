/// Reactive application state: campsites, comments and their load status.
/// Views receive slices of this through props; `add_comment` is the only mutation.
use chrono::{DateTime, SecondsFormat, Utc};
use leptos::logging::{error, log};
use leptos::*;

use crate::data::SeedData;
use crate::error::DataError;
use crate::models::campsite::Campsite;
use crate::models::comment::{Comment, NewComment};

#[derive(Debug, Clone, Copy)]
pub struct CampsiteStore {
    pub campsites: RwSignal<Vec<Campsite>>,
    pub comments: RwSignal<Vec<Comment>>,
    pub is_loading: RwSignal<bool>,
    pub err_mess: RwSignal<Option<String>>,
}

impl CampsiteStore {
    /// An empty store waiting for its first load.
    pub fn new() -> Self {
        Self {
            campsites: create_rw_signal(Vec::new()),
            comments: create_rw_signal(Vec::new()),
            is_loading: create_rw_signal(true),
            err_mess: create_rw_signal(None),
        }
    }

    pub fn load(&self, result: Result<SeedData, DataError>) {
        match result {
            Ok(data) => {
                log!(
                    "[STORE] Loaded {} campsites, {} comments",
                    data.campsites.len(),
                    data.comments.len()
                );
                self.campsites.set(data.campsites);
                self.comments.set(data.comments);
                self.err_mess.set(None);
            }
            Err(err) => {
                error!("[STORE] Failed to load campsite data: {}", err);
                self.err_mess.set(Some(err.to_string()));
            }
        }
        self.is_loading.set(false);
    }

    pub fn campsite(&self, id: u32) -> Option<Campsite> {
        self.campsites
            .with(|campsites| campsites.iter().find(|c| c.id == id).cloned())
    }

    /// Comments for one campsite, in stored order.
    pub fn comments_for(&self, campsite_id: u32) -> Vec<Comment> {
        self.comments.with(|comments| {
            comments
                .iter()
                .filter(|c| c.campsite_id == campsite_id)
                .cloned()
                .collect()
        })
    }

    pub fn add_comment(&self, new_comment: NewComment) {
        self.add_comment_at(new_comment, Utc::now());
    }

    pub fn add_comment_at(&self, new_comment: NewComment, now: DateTime<Utc>) {
        self.comments.update(|comments| {
            let comment = Comment {
                id: comments.len() as u32,
                campsite_id: new_comment.campsite_id,
                rating: new_comment.rating,
                text: new_comment.text,
                author: new_comment.author,
                date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            };
            log!(
                "[STORE] Adding comment {} for campsite {}",
                comment.id,
                comment.campsite_id
            );
            comments.push(comment);
        });
    }
}

impl Default for CampsiteStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_campsite_store(store: CampsiteStore) {
    provide_context(store);
}

/// The store in context. Outside of `App` this yields an empty, loading store.
pub fn use_campsite_store() -> CampsiteStore {
    use_context::<CampsiteStore>().unwrap_or_else(|| {
        logging::warn!("[STORE] No CampsiteStore in context");
        CampsiteStore::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_seed;
    use crate::models::comment::Rating;
    use chrono::TimeZone;

    fn with_store(test: impl FnOnce(CampsiteStore)) {
        let runtime = create_runtime();
        test(CampsiteStore::new());
        runtime.dispose();
    }

    #[test]
    fn starts_loading_without_error() {
        with_store(|store| {
            assert!(store.is_loading.get_untracked());
            assert_eq!(store.err_mess.get_untracked(), None);
            assert_eq!(store.campsite(0), None);
        });
    }

    #[test]
    fn successful_load_fills_data() {
        with_store(|store| {
            store.load(load_seed());
            assert!(!store.is_loading.get_untracked());
            assert_eq!(store.err_mess.get_untracked(), None);
            assert_eq!(
                store.campsite(1).map(|c| c.name),
                Some("Chrome River Campground".to_string())
            );
        });
    }

    #[test]
    fn failed_load_records_message() {
        with_store(|store| {
            store.load(SeedData::from_json("not json"));
            assert!(!store.is_loading.get_untracked());
            let message = store.err_mess.get_untracked().unwrap();
            assert!(message.starts_with("malformed seed data"));
        });
    }

    #[test]
    fn comments_for_keeps_stored_order() {
        with_store(|store| {
            store.load(load_seed());
            let ids: Vec<u32> = store.comments_for(0).iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![0, 1]);
            assert!(store.comments_for(42).is_empty());
        });
    }

    #[test]
    fn add_comment_appends_with_next_id_and_timestamp() {
        with_store(|store| {
            store.load(load_seed());
            let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 15, 0).unwrap();
            store.add_comment_at(
                NewComment {
                    campsite_id: 0,
                    rating: Rating::try_from(2).ok(),
                    author: "Jenny".into(),
                    text: "Too many mosquitoes".into(),
                },
                now,
            );

            let comments = store.comments_for(0);
            let added = comments.last().unwrap();
            assert_eq!(added.id, 4);
            assert_eq!(added.author, "Jenny");
            assert_eq!(added.rating.map(Rating::value), Some(2));
            assert_eq!(added.date, "2026-10-16T08:15:00.000Z");
            assert_eq!(added.display_date(), "Oct 16, 2026");
            assert_eq!(comments.len(), 3);
        });
    }
}
