//! # Content Model
//!
//! Plain records for everything the Triglav Online site stores: the editable site copy,
//! the news feed, and user accounts with their characters. This crate holds data shapes,
//! compiled-in defaults, and the registration rules. It knows nothing about storage.
//!
//! All records serialize with camelCase field names, which is the layout the site has
//! always written to its local storage profile.

pub mod accounts;
pub mod defaults;
pub mod game;
pub mod news;
pub mod rules;

pub use accounts::*;
pub use defaults::*;
pub use game::*;
pub use news::*;
pub use rules::*;
