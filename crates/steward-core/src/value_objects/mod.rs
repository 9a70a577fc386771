//! Value objects for the domain layer

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeParseError};
