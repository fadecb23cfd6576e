use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::{constant::EVE_CATEGORY_ID_BLUEPRINT, esi::model::TypeInfo};

pub struct ItemTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts item types fetched from ESI, keyed by their EVE type ID.
    pub async fn upsert_many(
        &self,
        types: Vec<(TypeInfo, i64)>, // (type info, category_id)
    ) -> Result<Vec<entity::item_type::Model>, DbErr> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let types = types.into_iter().map(|(info, category_id)| {
            entity::item_type::ActiveModel {
                type_id: ActiveValue::Set(info.type_id),
                name: ActiveValue::Set(info.name),
                published: ActiveValue::Set(info.published),
                group_id: ActiveValue::Set(info.group_id),
                category_id: ActiveValue::Set(category_id),
                portion_size: ActiveValue::Set(info.portion_size.unwrap_or(1)),
                volume: ActiveValue::Set(info.volume.unwrap_or(0.0)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            }
        });

        entity::prelude::ItemType::insert_many(types)
            .on_conflict(
                OnConflict::column(entity::item_type::Column::TypeId)
                    .update_columns([
                        entity::item_type::Column::Name,
                        entity::item_type::Column::Published,
                        entity::item_type::Column::GroupId,
                        entity::item_type::Column::CategoryId,
                        entity::item_type::Column::PortionSize,
                        entity::item_type::Column::Volume,
                        entity::item_type::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::item_type::Model>, DbErr> {
        entity::prelude::ItemType::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_type_id(
        &self,
        type_id: i64,
    ) -> Result<Option<entity::item_type::Model>, DbErr> {
        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::TypeId.eq(type_id))
            .one(self.db)
            .await
    }

    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<entity::item_type::Model>, DbErr> {
        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_many_by_type_ids(
        &self,
        type_ids: &[i64],
    ) -> Result<Vec<entity::item_type::Model>, DbErr> {
        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::TypeId.is_in(type_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Resolves published item types by their exact in-game names.
    pub async fn get_many_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<entity::item_type::Model>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::Published.eq(true))
            .filter(entity::item_type::Column::Name.is_in(names.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Substring search over published, non-blueprint item types for the
    /// autocomplete endpoint.
    pub async fn search(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<entity::item_type::Model>, DbErr> {
        entity::prelude::ItemType::find()
            .filter(entity::item_type::Column::Published.eq(true))
            .filter(entity::item_type::Column::CategoryId.ne(EVE_CATEGORY_ID_BLUEPRINT))
            .filter(entity::item_type::Column::Name.contains(query))
            .limit(limit)
            .all(self.db)
            .await
    }

    /// All type IDs currently known, used by the market price refresh.
    pub async fn get_all_type_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::ItemType::find()
            .select_only()
            .column(entity::item_type::Column::TypeId)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Record IDs and type IDs of every stored type in a category.
    pub async fn get_ids_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::ItemType::find()
            .select_only()
            .column(entity::item_type::Column::Id)
            .column(entity::item_type::Column::TypeId)
            .filter(entity::item_type::Column::CategoryId.eq(category_id))
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Replaces the stored refining yields of an item.
    pub async fn replace_materials(
        &self,
        item_type_id: i32,
        materials: Vec<(i64, i64)>, // (material_type_id, quantity)
    ) -> Result<(), DbErr> {
        entity::prelude::ItemTypeMaterial::delete_many()
            .filter(entity::item_type_material::Column::ItemTypeId.eq(item_type_id))
            .exec(self.db)
            .await?;

        if materials.is_empty() {
            return Ok(());
        }

        let materials =
            materials
                .into_iter()
                .map(|(material_type_id, quantity)| {
                    entity::item_type_material::ActiveModel {
                        item_type_id: ActiveValue::Set(item_type_id),
                        material_type_id: ActiveValue::Set(material_type_id),
                        quantity: ActiveValue::Set(quantity),
                        ..Default::default()
                    }
                });

        entity::prelude::ItemTypeMaterial::insert_many(materials)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_materials(
        &self,
        item_type_id: i32,
    ) -> Result<Vec<entity::item_type_material::Model>, DbErr> {
        entity::prelude::ItemTypeMaterial::find()
            .filter(entity::item_type_material::Column::ItemTypeId.eq(item_type_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        constant::{EVE_CATEGORY_ID_ASTEROID, EVE_CATEGORY_ID_BLUEPRINT},
        data::buyback::item_type::ItemTypeRepository,
        esi::model::TypeInfo,
    };

    fn type_info(type_id: i64, name: &str, published: bool) -> TypeInfo {
        TypeInfo {
            type_id,
            name: name.to_string(),
            published,
            group_id: 450,
            portion_size: Some(100),
            volume: Some(0.1),
        }
    }

    /// Upserting the same type ID twice keeps a single row with fresh data.
    #[tokio::test]
    async fn upsert_many_is_keyed_by_type_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = ItemTypeRepository::new(&test.db);

        repo.upsert_many(vec![(
            type_info(1230, "Veldspar", true),
            EVE_CATEGORY_ID_ASTEROID,
        )])
        .await?;
        repo.upsert_many(vec![(
            type_info(1230, "Veldspar", false),
            EVE_CATEGORY_ID_ASTEROID,
        )])
        .await?;

        let stored = repo.get_by_type_id(1230).await?.unwrap();

        assert!(!stored.published);
        assert_eq!(repo.get_all_type_ids().await?.len(), 1);

        Ok(())
    }

    /// Name resolution only returns published types.
    #[tokio::test]
    async fn name_lookup_skips_unpublished() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = ItemTypeRepository::new(&test.db);

        repo.upsert_many(vec![
            (type_info(1230, "Veldspar", true), EVE_CATEGORY_ID_ASTEROID),
            (type_info(1231, "Old Veldspar", false), EVE_CATEGORY_ID_ASTEROID),
        ])
        .await?;

        let found = repo
            .get_many_by_names(&["Veldspar".to_string(), "Old Veldspar".to_string()])
            .await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].type_id, 1230);

        Ok(())
    }

    /// Autocomplete search excludes blueprints.
    #[tokio::test]
    async fn search_excludes_blueprints() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let repo = ItemTypeRepository::new(&test.db);

        repo.upsert_many(vec![
            (type_info(587, "Rifter", true), 6),
            (type_info(689, "Rifter Blueprint", true), EVE_CATEGORY_ID_BLUEPRINT),
        ])
        .await?;

        let found = repo.search("Rifter", 10).await?;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].type_id, 587);

        Ok(())
    }
}
