//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
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
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a pod together with its host edge
//!     let (pod, host) = factory::pod::create_pod_with_host(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .display_name("CustomUser")
//!     .alert_enabled(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod pod;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use pod::{add_participant, create_pod_with_host};
pub use user::create_user;
