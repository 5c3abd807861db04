//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier for card definitions
//! - `CardKind`: Attack / Move / Heal / Special
//! - `Rarity`: Tier selecting the shared upgrade curve
//! - `CardDefinition`: Static card data (base stats, rarity)
//! - `CardInstance`: A player's owned, leveled copy
//! - `CardCatalog`: Definition and per-card-curve lookup

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardKind, Rarity};
pub use instance::CardInstance;
