//! Value objects - immutable types that represent domain concepts

mod cursor;
mod snowflake;

pub use cursor::{FeedCursor, FeedPosition};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
