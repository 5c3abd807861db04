//! Player-owned progression state: card collection and wallet.
//!
//! ## Key Types
//!
//! - `PlayerCardCollection`: Owned card instances keyed by card id
//! - `Wallet`: Gold/shard balances with atomic debit
//! - `PlayerData`: The bundle the upgrade service mutates

pub mod collection;
pub mod wallet;

pub use collection::{PlayerCardCollection, PlayerData};
pub use wallet::Wallet;
