use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct ContractRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Contracts issued by any of the provided character entries, newest first.
    pub async fn get_many_by_characters(
        &self,
        character_ids: &[i32],
    ) -> Result<
        Vec<(
            entity::contract::Model,
            Option<entity::eve_character::Model>,
        )>,
        DbErr,
    > {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Contract::find()
            .filter(entity::contract::Column::CharacterId.is_in(character_ids.iter().copied()))
            .order_by_desc(entity::contract::Column::DateIssued)
            .find_also_related(entity::eve_character::Entity)
            .all(self.db)
            .await
    }

    /// Contracts attributed to a program, newest first.
    pub async fn get_many_by_program(
        &self,
        program_id: i32,
    ) -> Result<
        Vec<(
            entity::contract::Model,
            Option<entity::eve_character::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::Contract::find()
            .filter(entity::contract::Column::ProgramId.eq(program_id))
            .order_by_desc(entity::contract::Column::DateIssued)
            .find_also_related(entity::eve_character::Entity)
            .all(self.db)
            .await
    }
}
