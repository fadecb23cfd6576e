//! Completed-trade statistics.

use sea_orm::DatabaseConnection;

use crate::{
    data::{buyback::contract::ContractRepository, user::UserCharacterRepository},
    error::Error,
    model::api::ContractDto,
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Contracts issued by any character of the requesting user.
    pub async fn my_stats(&self, user_id: i32) -> Result<Vec<ContractDto>, Error> {
        let user_character_repo = UserCharacterRepository::new(self.db);
        let contract_repo = ContractRepository::new(self.db);

        let character_ids: Vec<i32> = user_character_repo
            .get_many_by_user_id(user_id)
            .await?
            .into_iter()
            .map(|ownership| ownership.character_id)
            .collect();

        let contracts = contract_repo.get_many_by_characters(&character_ids).await?;

        Ok(contracts.into_iter().map(to_dto).collect())
    }

    /// Contracts attributed to a program.
    pub async fn program_stats(&self, program_id: i32) -> Result<Vec<ContractDto>, Error> {
        let contracts = ContractRepository::new(self.db)
            .get_many_by_program(program_id)
            .await?;

        Ok(contracts.into_iter().map(to_dto).collect())
    }
}

fn to_dto(
    (contract, maybe_character): (
        entity::contract::Model,
        Option<entity::eve_character::Model>,
    ),
) -> ContractDto {
    ContractDto {
        contract_id: contract.contract_id,
        price: contract.price,
        status: contract.status,
        date_issued: contract.date_issued,
        character_name: maybe_character
            .map(|character| character.name)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::service::buyback::stats::StatsService;

    /// My stats only cover contracts of the requesting user's characters.
    #[tokio::test]
    async fn my_stats_are_scoped_to_own_characters() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let me = test.insert_user_with_character(95_000_001).await?;
        let other = test.insert_user_with_character(95_000_002).await?;
        test.insert_contract(40_000_001, &me.character, None, 1_000_000.0).await?;
        test.insert_contract(40_000_002, &other.character, None, 2_000_000.0).await?;
        let service = StatsService::new(&test.db);

        let contracts = service.my_stats(me.user.id).await.unwrap();

        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0].contract_id, 40_000_001);
        assert_eq!(contracts[0].character_name, me.character.name);

        Ok(())
    }

    /// Program stats only cover contracts attributed to the program.
    #[tokio::test]
    async fn program_stats_are_scoped_to_program() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        let outsider = test.insert_user_with_character(95_000_002).await?;
        test.insert_contract(
            40_000_001,
            &fixture.enrolled.character,
            Some(fixture.program.id),
            1_000_000.0,
        )
        .await?;
        test.insert_contract(40_000_002, &outsider.character, None, 2_000_000.0).await?;
        let service = StatsService::new(&test.db);

        let contracts = service.program_stats(fixture.program.id).await.unwrap();

        assert_eq!(contracts.len(), 1);
        assert_eq!(contracts[0].contract_id, 40_000_001);

        Ok(())
    }
}
