//! Entities nested inside API responses

mod android_links;
mod caption;
mod direct;
mod message;
mod reel;
mod subscription;
mod tag;
mod user;

pub use android_links::AndroidLinks;
pub use caption::Caption;
pub use direct::{ActionBadge, DirectThread, DirectThreadItem, DirectThreadLastSeenAt, PermanentItem};
pub use message::Message;
pub use reel::Reel;
pub use subscription::Subscription;
pub use tag::{ExploreItemInfo, Tag, TagLayoutContent, TagMedia};
pub use user::{FriendshipStatus, SuggestedUsers, Suggestion, User};
