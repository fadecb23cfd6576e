//! Declarative test harness for the Freyr workspace.
//!
//! Tests configure their environment through [`TestBuilder`] and receive a
//! [`TestContext`] holding an in-memory SQLite database, a mockito server for
//! ESI endpoints, an ESI client pointed at that server, and a session store.
//! Fixture helpers on the context insert the common row combinations the
//! buyback domain needs (enrolled corporations, programs, offices).

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
