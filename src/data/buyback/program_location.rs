use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct ProgramLocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgramLocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Enables an office for a program; a second call for the same pair returns
    /// the existing entry.
    pub async fn get_or_create(
        &self,
        program_id: i32,
        office_id: i32,
    ) -> Result<entity::program_location::Model, DbErr> {
        let existing = entity::prelude::ProgramLocation::find()
            .filter(entity::program_location::Column::ProgramId.eq(program_id))
            .filter(entity::program_location::Column::OfficeId.eq(office_id))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok(existing);
        }

        let program_location = entity::program_location::ActiveModel {
            program_id: ActiveValue::Set(program_id),
            office_id: ActiveValue::Set(office_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        program_location.insert(self.db).await
    }

    pub async fn get(
        &self,
        id: i32,
    ) -> Result<Option<entity::program_location::Model>, DbErr> {
        entity::prelude::ProgramLocation::find_by_id(id).one(self.db).await
    }

    /// Finds an entry only if it belongs to the provided program.
    pub async fn get_by_program_and_id(
        &self,
        program_id: i32,
        id: i32,
    ) -> Result<Option<entity::program_location::Model>, DbErr> {
        entity::prelude::ProgramLocation::find()
            .filter(entity::program_location::Column::ProgramId.eq(program_id))
            .filter(entity::program_location::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    pub async fn get_by_program(
        &self,
        program_id: i32,
    ) -> Result<Vec<entity::program_location::Model>, DbErr> {
        entity::prelude::ProgramLocation::find()
            .filter(entity::program_location::Column::ProgramId.eq(program_id))
            .all(self.db)
            .await
    }

    pub async fn get_ids_by_program(&self, program_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::ProgramLocation::find()
            .select_only()
            .column(entity::program_location::Column::Id)
            .filter(entity::program_location::Column::ProgramId.eq(program_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn delete(&self, program_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ProgramLocation::delete_many()
            .filter(entity::program_location::Column::ProgramId.eq(program_id))
            .filter(entity::program_location::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
