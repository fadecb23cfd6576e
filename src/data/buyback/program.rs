use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct ProgramRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgramRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        corporation_id: i32,
        name: String,
    ) -> Result<entity::program::Model, DbErr> {
        let program = entity::program::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        program.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::program::Model>, DbErr> {
        entity::prelude::Program::find_by_id(id).one(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::program::Model>, DbErr> {
        entity::prelude::Program::find().all(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Program::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
