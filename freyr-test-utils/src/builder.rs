//! Declarative test builder.
//!
//! Configuration methods queue tables and mock endpoints; `build()` executes
//! everything and returns a ready [`TestContext`].

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_buyback_tables: bool,
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_buyback_tables: false,
            mock_builders: Vec::new(),
        }
    }

    /// Create every table of the Freyr schema in the test database.
    pub fn with_buyback_tables(mut self) -> Self {
        self.include_buyback_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    ///
    /// The mock is retained on the context and verified by `assert_mocks`.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context: create tables, then register mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_buyback_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::FreyrUser),
                schema.create_table_from_entity(entity::prelude::FreyrUserCharacter),
                schema.create_table_from_entity(entity::prelude::BuybackCorporation),
                schema.create_table_from_entity(entity::prelude::Location),
                schema.create_table_from_entity(entity::prelude::Office),
                schema.create_table_from_entity(entity::prelude::ItemType),
                schema.create_table_from_entity(entity::prelude::ItemTypeMaterial),
                schema.create_table_from_entity(entity::prelude::MarketPrice),
                schema.create_table_from_entity(entity::prelude::Program),
                schema.create_table_from_entity(entity::prelude::ProgramItem),
                schema.create_table_from_entity(entity::prelude::ProgramLocation),
                schema.create_table_from_entity(entity::prelude::Notification),
                schema.create_table_from_entity(entity::prelude::Contract),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        let mut mocks = Vec::new();
        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_with_buyback_tables() {
        let result = TestBuilder::new().with_buyback_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn builds_without_tables() {
        let result = TestBuilder::new().build().await;
        assert!(result.is_ok());
    }
}
