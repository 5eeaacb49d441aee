//! Auto-mapped API response entities
//!
//! Every entity is a tolerant reader over the decoded JSON object: unknown
//! fields are preserved, missing fields read as `None`, and declared fields
//! are coerced to their declared type when the entity is built.

mod entity;
pub(crate) mod macros;
pub mod model;
pub mod naming;
mod property;

mod friendships;
mod reels;
mod search;

pub use entity::{ApiResponse, MappedEntity};
pub use friendships::FriendshipsShowManyResponse;
pub use naming::{accessor_name, Accessor, AccessorKind};
pub use property::{Property, PropertyDef, PropertyMap, PropertyType, PropertyValue};
pub use reels::ActiveReelAdsResponse;
pub use search::{FbSearchResponse, SearchTagResponse};

/// Response status, `ok` or `fail`
pub const STATUS: Property<String> = Property::new("status");
/// Error or informational message of a response
pub const MESSAGE: Property<serde_json::Value> = Property::new("message");
/// Server notices attached to a response
pub const MESSAGES: Property<Vec<model::Message>> = Property::new("_messages");
