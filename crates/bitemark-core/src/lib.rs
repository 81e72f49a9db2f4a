//! Bitemark Core Library
//!
//! This crate provides the logic behind Bitemark's restaurant cards: an
//! in-memory bookmark store and the view model that renders a restaurant
//! together with its bookmark status.
//!
//! # Quick Start
//!
//! ```
//! use bitemark_core::{BookmarkStore, CardViewModel, Restaurant};
//!
//! let mut store = BookmarkStore::new();
//! let card = CardViewModel::new(
//!     Restaurant::new("r1", "Luigi's", "luigi").with_tags(["Italian", "Pizza"]),
//! );
//!
//! card.toggle_bookmark(&mut store);
//!
//! let model = card.display_model(&store, &|key: &str| format!("https://img.test/{}", key));
//! assert!(model.is_bookmarked);
//! assert_eq!(model.tag_line, "Italian • Pizza");
//! ```
//!
//! # Modules
//!
//! - `store`: Bookmark membership, mutation and change notification
//! - `card`: Card view model and the resolver/navigator capabilities
//! - `models`: Data structures for restaurants, bookmarks and cards
//! - `catalog`: Restaurant catalog loading
//! - `images`: Static poster URL resolution
//! - `config`: Application configuration

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod models;
pub mod store;

pub use card::{format_tags, CardViewModel, Navigator, PosterResolver, TAG_SEPARATOR};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use images::{ImageQuality, StaticImageResolver};
pub use models::{BookmarkRecord, CardDisplayModel, Restaurant, RestaurantId, RestaurantImages};
pub use store::{BookmarkChange, BookmarkStore, SubscriptionId};
