use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct ProgramItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProgramItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an item to a program, or updates the brokerage and refined-value flag
    /// of the existing entry. One entry per (program, item type).
    pub async fn upsert(
        &self,
        program_id: i32,
        item_type_id: i32,
        brokerage: i32,
        use_refined_value: bool,
    ) -> Result<entity::program_item::Model, DbErr> {
        let existing = self.get_by_program_and_item(program_id, item_type_id).await?;

        if let Some(existing) = existing {
            let mut program_item_am = existing.into_active_model();
            program_item_am.brokerage = ActiveValue::Set(brokerage);
            program_item_am.use_refined_value = ActiveValue::Set(use_refined_value);
            program_item_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

            return program_item_am.update(self.db).await;
        }

        let program_item = entity::program_item::ActiveModel {
            program_id: ActiveValue::Set(program_id),
            item_type_id: ActiveValue::Set(item_type_id),
            brokerage: ActiveValue::Set(brokerage),
            use_refined_value: ActiveValue::Set(use_refined_value),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        program_item.insert(self.db).await
    }

    pub async fn get_by_program(
        &self,
        program_id: i32,
    ) -> Result<Vec<entity::program_item::Model>, DbErr> {
        entity::prelude::ProgramItem::find()
            .filter(entity::program_item::Column::ProgramId.eq(program_id))
            .all(self.db)
            .await
    }

    pub async fn get_by_program_and_item(
        &self,
        program_id: i32,
        item_type_id: i32,
    ) -> Result<Option<entity::program_item::Model>, DbErr> {
        entity::prelude::ProgramItem::find()
            .filter(entity::program_item::Column::ProgramId.eq(program_id))
            .filter(entity::program_item::Column::ItemTypeId.eq(item_type_id))
            .one(self.db)
            .await
    }

    pub async fn delete(&self, program_id: i32, item_type_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ProgramItem::delete_many()
            .filter(entity::program_item::Column::ProgramId.eq(program_id))
            .filter(entity::program_item::Column::ItemTypeId.eq(item_type_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
