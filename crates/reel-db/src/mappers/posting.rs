//! Posting entity <-> model mapper

use reel_core::entities::{CreatorSummary, Posting, PostingWithCreator};
use reel_core::value_objects::Snowflake;

use crate::models::{PostingModel, PostingWithCreatorModel};

/// Convert PostingModel to Posting entity
impl From<PostingModel> for Posting {
    fn from(model: PostingModel) -> Self {
        Posting {
            id: Snowflake::new(model.id),
            creator_id: Snowflake::new(model.creator_id),
            caption: model.caption,
            media_url: model.media_url,
            thumbnail_url: model.thumbnail_url,
            duration_sec: model.duration_sec,
            tags: model.tags,
            created_at: model.created_at,
        }
    }
}

/// Convert a joined feed row to PostingWithCreator
impl From<PostingWithCreatorModel> for PostingWithCreator {
    fn from(model: PostingWithCreatorModel) -> Self {
        let creator = CreatorSummary {
            id: Snowflake::new(model.posting.creator_id),
            name: model.creator_name,
            photo: model.creator_photo,
        };

        PostingWithCreator {
            posting: Posting::from(model.posting),
            creator,
        }
    }
}
