//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let giveaway = factory::giveaway::create_giveaway(&db).await?;
//!
//!     // Or customize through the builder
//!     let giveaway = factory::giveaway::GiveawayFactory::new(&db)
//!         .prize("Gift Card")
//!         .winners(3)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod giveaway;

// Re-export commonly used factory functions for concise usage
pub use giveaway::create_giveaway;

use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns the next unique id for generating non-colliding test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
