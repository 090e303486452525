//! Profile entity <-> model mapper

use reel_core::entities::Profile;
use reel_core::value_objects::Snowflake;

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity
impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: Snowflake::new(model.id),
            account_id: Snowflake::new(model.account_id),
            name: model.name,
            photo: model.photo,
            created_at: model.created_at,
        }
    }
}
