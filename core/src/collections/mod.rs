//! One collection per API resource. Each is a `CollectionMeta` record plus
//! the verbs that resource supports.

mod files;
mod keys;
mod projects;
mod team_users;
mod teams;
mod translation_providers;
mod translations;
mod user_groups;

pub use files::Files;
pub use keys::Keys;
pub use projects::Projects;
pub use team_users::TeamUsers;
pub use teams::Teams;
pub use translation_providers::TranslationProviders;
pub use translations::Translations;
pub use user_groups::UserGroups;
