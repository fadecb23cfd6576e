//! Item type reference-data import.
//!
//! Walks the ESI category tree for the categories buyback programs commonly
//! accept, upserting one `item_type` row per type, and loads refining yields
//! for ore from the configured SDE mirror dump.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    constant::{EVE_CATEGORY_ID_ASTEROID, EVE_GROUP_ID_HARVESTABLE_CLOUD, IMPORT_CATEGORY_IDS},
    data::buyback::item_type::ItemTypeRepository,
    error::Error,
    esi::EsiFetcher,
};

pub struct ItemImportService<'a> {
    db: &'a DatabaseConnection,
    esi_fetcher: &'a EsiFetcher,
    sde_type_materials_url: &'a str,
}

impl<'a> ItemImportService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        esi_fetcher: &'a EsiFetcher,
        sde_type_materials_url: &'a str,
    ) -> Self {
        Self {
            db,
            esi_fetcher,
            sde_type_materials_url,
        }
    }

    /// Imports item types for all configured categories, then refining
    /// materials for the stored ore types.
    pub async fn run(&self) -> Result<(), Error> {
        let imported = self.import_item_types().await?;
        let refined = self.import_refining_materials().await?;

        info!(
            "Imported {} item type(s), refining yields for {} ore type(s)",
            imported, refined
        );

        Ok(())
    }

    /// Walks category → groups → types for every import category plus the
    /// harvestable-cloud group, upserting one row per type. Returns the
    /// number of types imported.
    pub async fn import_item_types(&self) -> Result<usize, Error> {
        let mut total = 0;

        for category_id in IMPORT_CATEGORY_IDS {
            let category = self.esi_fetcher.get_category(category_id).await?;

            for group_id in category.groups {
                total += self.import_group(group_id).await?;
            }
        }

        // Harvestable gas clouds sit in a category that is otherwise not
        // imported, so their group is walked on its own.
        total += self.import_group(EVE_GROUP_ID_HARVESTABLE_CLOUD).await?;

        Ok(total)
    }

    async fn import_group(&self, group_id: i64) -> Result<usize, Error> {
        let item_type_repo = ItemTypeRepository::new(self.db);

        let group = self.esi_fetcher.get_group(group_id).await?;

        let mut batch = Vec::with_capacity(group.types.len());
        for type_id in &group.types {
            let info = self.esi_fetcher.get_type(*type_id).await?;
            batch.push((info, group.category_id));
        }

        let count = batch.len();
        item_type_repo.upsert_many(batch).await?;

        Ok(count)
    }

    /// Replaces the stored refining yields of every known ore type from the
    /// SDE mirror dump. Returns the number of ore types updated.
    pub async fn import_refining_materials(&self) -> Result<usize, Error> {
        let item_type_repo = ItemTypeRepository::new(self.db);

        let dump = self
            .esi_fetcher
            .get_type_materials(self.sde_type_materials_url)
            .await?;
        let asteroids = item_type_repo
            .get_ids_by_category(EVE_CATEGORY_ID_ASTEROID)
            .await?;

        let mut updated = 0;
        for (id, type_id) in asteroids {
            let Some(entry) = dump.get(&type_id.to_string()) else {
                continue;
            };

            let materials = entry
                .materials
                .iter()
                .map(|material| (material.material_type_id, material.quantity))
                .collect();

            item_type_repo.replace_materials(id, materials).await?;
            updated += 1;
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use freyr_test_utils::prelude::*;

    use crate::{
        data::buyback::item_type::ItemTypeRepository,
        esi::model::{Group, TypeInfo, TypeMaterial, TypeMaterials},
        service::buyback::item_import::ItemImportService,
        util::test::esi_fetcher,
    };

    /// A category walk stores every type of every group with its category.
    #[tokio::test]
    async fn group_walk_upserts_types() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_buyback_tables().build().await?;

        let group = Group {
            group_id: 450,
            category_id: 25,
            name: "Veldspar".to_string(),
            published: true,
            types: vec![1230],
        };
        let veldspar = TypeInfo {
            type_id: 1230,
            name: "Veldspar".to_string(),
            published: true,
            group_id: 450,
            portion_size: Some(100),
            volume: Some(0.1),
        };

        let _group = test
            .server
            .mock("GET", "/universe/groups/450/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&group).unwrap())
            .create();
        let _veldspar = test
            .server
            .mock("GET", "/universe/types/1230/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&veldspar).unwrap())
            .create();

        let fetcher = esi_fetcher(&test.server);
        let service = ItemImportService::new(&test.db, &fetcher, "unused");

        let imported = service.import_group(450).await.unwrap();

        assert_eq!(imported, 1);
        let stored = ItemTypeRepository::new(&test.db)
            .get_by_type_id(1230)
            .await?
            .unwrap();
        assert_eq!(stored.category_id, 25);
        assert_eq!(stored.portion_size, 100);

        Ok(())
    }

    /// Refining yields are replaced from the SDE dump for stored ore types.
    #[tokio::test]
    async fn sde_dump_fills_refining_materials() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_buyback_tables().build().await?;
        let veldspar = test.insert_item_type(1230, "Veldspar", 25).await?;

        let dump: HashMap<String, TypeMaterials> = HashMap::from([(
            "1230".to_string(),
            TypeMaterials {
                materials: vec![TypeMaterial {
                    material_type_id: 34,
                    quantity: 415,
                }],
            },
        )]);

        let _dump = test
            .server
            .mock("GET", "/tq/typematerials.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&dump).unwrap())
            .create();

        let fetcher = esi_fetcher(&test.server);
        let url = format!("{}/tq/typematerials.json", test.server.url());
        let service = ItemImportService::new(&test.db, &fetcher, &url);

        let updated = service.import_refining_materials().await.unwrap();

        assert_eq!(updated, 1);
        let materials = ItemTypeRepository::new(&test.db)
            .get_materials(veldspar.id)
            .await?;
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].material_type_id, 34);
        assert_eq!(materials[0].quantity, 415);

        Ok(())
    }
}
