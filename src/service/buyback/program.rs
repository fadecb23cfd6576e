//! Buyback program management.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        buyback::{
            corporation::BuybackCorporationRepository, item_type::ItemTypeRepository,
            location::LocationRepository, office::OfficeRepository,
            program::ProgramRepository, program_item::ProgramItemRepository,
            program_location::ProgramLocationRepository,
        },
        eve::corporation::CorporationRepository,
    },
    error::{validate::ValidateError, Error},
    model::api::{
        AddProgramItemDto, AddProgramLocationDto, CreateProgramDto, ItemSuggestionDto,
        ProgramDetailDto, ProgramDto, ProgramItemDto, ProgramLocationDto,
    },
    util::validate::{validate_brokerage, validate_program_name},
};

const ITEM_SEARCH_LIMIT: u64 = 50;

pub struct ProgramService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgramService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All programs with the name of their owning corporation.
    pub async fn get_programs(&self) -> Result<Vec<ProgramDto>, Error> {
        let program_repo = ProgramRepository::new(self.db);
        let corporation_repo = BuybackCorporationRepository::new(self.db);

        let corporation_names: HashMap<i32, String> = corporation_repo
            .get_all_with_corporation()
            .await?
            .into_iter()
            .filter_map(|(enrollment, maybe_corporation)| {
                maybe_corporation.map(|corporation| (enrollment.id, corporation.name))
            })
            .collect();

        let programs = program_repo.get_all().await?;

        Ok(programs
            .into_iter()
            .map(|program| ProgramDto {
                id: program.id,
                name: program.name,
                corporation_name: corporation_names
                    .get(&program.corporation_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect())
    }

    /// One program with its accepted items and enabled locations.
    pub async fn get_program(&self, id: i32) -> Result<ProgramDetailDto, Error> {
        let program_repo = ProgramRepository::new(self.db);
        let program_item_repo = ProgramItemRepository::new(self.db);
        let program_location_repo = ProgramLocationRepository::new(self.db);
        let item_type_repo = ItemTypeRepository::new(self.db);
        let office_repo = OfficeRepository::new(self.db);
        let location_repo = LocationRepository::new(self.db);

        let program = program_repo.get(id).await?.ok_or(Error::NotFound("Program"))?;

        let corporation_name = match BuybackCorporationRepository::new(self.db)
            .get(program.corporation_id)
            .await?
        {
            Some(enrollment) => CorporationRepository::new(self.db)
                .get(enrollment.corporation_id)
                .await?
                .map(|corporation| corporation.name)
                .unwrap_or_default(),
            None => String::new(),
        };

        let program_items = program_item_repo.get_by_program(program.id).await?;
        let item_type_ids: Vec<i32> = program_items.iter().map(|item| item.item_type_id).collect();
        let item_types: HashMap<i32, entity::item_type::Model> = item_type_repo
            .get_many(&item_type_ids)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let items = program_items
            .into_iter()
            .filter_map(|program_item| {
                item_types.get(&program_item.item_type_id).map(|item| ProgramItemDto {
                    type_id: item.type_id,
                    name: item.name.clone(),
                    brokerage: program_item.brokerage,
                    use_refined_value: program_item.use_refined_value,
                })
            })
            .collect();

        let program_locations = program_location_repo.get_by_program(program.id).await?;
        let mut locations = Vec::with_capacity(program_locations.len());

        for program_location in program_locations {
            let Some(office) = office_repo.get(program_location.office_id).await? else {
                continue;
            };
            let location_name = location_repo
                .get_many(&[office.location_id])
                .await?
                .into_iter()
                .next()
                .map(|location| location.name)
                .unwrap_or_default();

            locations.push(ProgramLocationDto {
                id: program_location.id,
                office_id: office.id,
                location_name,
            });
        }

        Ok(ProgramDetailDto {
            id: program.id,
            name: program.name,
            corporation_name,
            items,
            locations,
        })
    }

    pub async fn create_program(
        &self,
        dto: CreateProgramDto,
    ) -> Result<entity::program::Model, Error> {
        let corporation_repo = BuybackCorporationRepository::new(self.db);
        let program_repo = ProgramRepository::new(self.db);

        validate_program_name(&dto.name)?;

        corporation_repo
            .get(dto.corporation_id)
            .await?
            .ok_or(Error::NotFound("Corporation"))?;

        let program = program_repo.create(dto.corporation_id, dto.name).await?;

        Ok(program)
    }

    pub async fn delete_program(&self, id: i32) -> Result<(), Error> {
        let removed = ProgramRepository::new(self.db).delete(id).await?;

        if removed == 0 {
            return Err(Error::NotFound("Program"));
        }

        Ok(())
    }

    /// Adds an item to a program, or updates the existing entry's brokerage
    /// and refined-value flag.
    pub async fn add_item(
        &self,
        program_id: i32,
        dto: AddProgramItemDto,
    ) -> Result<entity::program_item::Model, Error> {
        let program_repo = ProgramRepository::new(self.db);
        let item_type_repo = ItemTypeRepository::new(self.db);
        let program_item_repo = ProgramItemRepository::new(self.db);

        validate_brokerage(dto.brokerage)?;

        program_repo
            .get(program_id)
            .await?
            .ok_or(Error::NotFound("Program"))?;
        let item_type = item_type_repo
            .get_by_type_id(dto.type_id)
            .await?
            .ok_or(Error::NotFound("Item type"))?;

        let program_item = program_item_repo
            .upsert(program_id, item_type.id, dto.brokerage, dto.use_refined_value)
            .await?;

        Ok(program_item)
    }

    pub async fn remove_item(&self, program_id: i32, type_id: i64) -> Result<(), Error> {
        let item_type = ItemTypeRepository::new(self.db)
            .get_by_type_id(type_id)
            .await?
            .ok_or(Error::NotFound("Item type"))?;

        let removed = ProgramItemRepository::new(self.db)
            .delete(program_id, item_type.id)
            .await?;

        if removed == 0 {
            return Err(Error::NotFound("Program item"));
        }

        Ok(())
    }

    /// Enables an office for a program. The office must belong to the
    /// program's corporation.
    pub async fn add_location(
        &self,
        program_id: i32,
        dto: AddProgramLocationDto,
    ) -> Result<entity::program_location::Model, Error> {
        let program_repo = ProgramRepository::new(self.db);
        let office_repo = OfficeRepository::new(self.db);
        let program_location_repo = ProgramLocationRepository::new(self.db);

        let program = program_repo
            .get(program_id)
            .await?
            .ok_or(Error::NotFound("Program"))?;
        let office = office_repo
            .get(dto.office_id)
            .await?
            .ok_or(Error::NotFound("Office"))?;

        if office.corporation_id != program.corporation_id {
            return Err(ValidateError::OfficeOutsideCorporation.into());
        }

        let program_location = program_location_repo
            .get_or_create(program.id, office.id)
            .await?;

        Ok(program_location)
    }

    pub async fn remove_location(
        &self,
        program_id: i32,
        program_location_id: i32,
    ) -> Result<(), Error> {
        let removed = ProgramLocationRepository::new(self.db)
            .delete(program_id, program_location_id)
            .await?;

        if removed == 0 {
            return Err(Error::NotFound("Program location"));
        }

        Ok(())
    }

    /// Substring autocomplete over published, non-blueprint item types.
    pub async fn search_items(&self, query: &str) -> Result<Vec<ItemSuggestionDto>, Error> {
        let items = ItemTypeRepository::new(self.db)
            .search(query, ITEM_SEARCH_LIMIT)
            .await?;

        Ok(items
            .into_iter()
            .map(|item| ItemSuggestionDto {
                value: item.type_id,
                text: item.name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        error::{validate::ValidateError, Error},
        model::api::{AddProgramItemDto, AddProgramLocationDto, CreateProgramDto},
        service::buyback::program::ProgramService,
    };

    /// Blank program names are rejected at the form layer.
    #[tokio::test]
    async fn create_program_rejects_blank_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let service = ProgramService::new(&test.db);

        let result = service
            .create_program(CreateProgramDto {
                corporation_id: enrolled.buyback_corporation.id,
                name: "  ".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidateError(ValidateError::EmptyProgramName))
        ));

        Ok(())
    }

    /// Out-of-range brokerage never reaches persistence.
    #[tokio::test]
    async fn add_item_validates_brokerage() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let program = test.insert_program(&enrolled.buyback_corporation, "Ore Buyback").await?;
        test.insert_item_type(1230, "Veldspar", 25).await?;
        let service = ProgramService::new(&test.db);

        for brokerage in [0, 101] {
            let result = service
                .add_item(
                    program.id,
                    AddProgramItemDto {
                        type_id: 1230,
                        brokerage,
                        use_refined_value: false,
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidateError(ValidateError::BrokerageOutOfRange { .. }))
            ));
        }

        let accepted = service
            .add_item(
                program.id,
                AddProgramItemDto {
                    type_id: 1230,
                    brokerage: 1,
                    use_refined_value: false,
                },
            )
            .await;
        assert!(accepted.is_ok());

        Ok(())
    }

    /// Re-adding an accepted item updates the stored entry.
    #[tokio::test]
    async fn add_item_upserts_existing_entry() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let program = test.insert_program(&enrolled.buyback_corporation, "Ore Buyback").await?;
        test.insert_item_type(1230, "Veldspar", 25).await?;
        let service = ProgramService::new(&test.db);

        let created = service
            .add_item(
                program.id,
                AddProgramItemDto {
                    type_id: 1230,
                    brokerage: 10,
                    use_refined_value: false,
                },
            )
            .await
            .unwrap();
        let updated = service
            .add_item(
                program.id,
                AddProgramItemDto {
                    type_id: 1230,
                    brokerage: 25,
                    use_refined_value: true,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.id, updated.id);
        assert_eq!(updated.brokerage, 25);

        Ok(())
    }

    /// Offices of another corporation cannot be enabled for a program.
    #[tokio::test]
    async fn add_location_rejects_foreign_office() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let first = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let second = test.insert_enrolled_corporation(98_000_002, 95_000_002).await?;
        let program = test.insert_program(&first.buyback_corporation, "Ore Buyback").await?;
        let location = test.insert_location(60_000_004, "Jita IV - Moon 4", 3).await?;
        let foreign_office = test
            .insert_office(5_002, &second.buyback_corporation, &location)
            .await?;
        let service = ProgramService::new(&test.db);

        let result = service
            .add_location(
                program.id,
                AddProgramLocationDto {
                    office_id: foreign_office.id,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidateError(ValidateError::OfficeOutsideCorporation))
        ));

        Ok(())
    }

    /// The detail view resolves item and location names.
    #[tokio::test]
    async fn program_detail_resolves_names() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
        test.insert_item_type(1230, "Veldspar", 25).await?;
        let service = ProgramService::new(&test.db);

        service
            .add_item(
                fixture.program.id,
                AddProgramItemDto {
                    type_id: 1230,
                    brokerage: 10,
                    use_refined_value: true,
                },
            )
            .await
            .unwrap();

        let detail = service.get_program(fixture.program.id).await.unwrap();

        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.items[0].name, "Veldspar");
        assert_eq!(detail.locations.len(), 1);
        assert_eq!(detail.locations[0].location_name, fixture.location.name);

        Ok(())
    }

    /// Autocomplete returns (value, text) suggestion pairs.
    #[tokio::test]
    async fn item_search_returns_suggestions() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        test.insert_item_type(587, "Rifter", 6).await?;
        let service = ProgramService::new(&test.db);

        let suggestions = service.search_items("Rift").await.unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, 587);
        assert_eq!(suggestions[0].text, "Rifter");

        Ok(())
    }
}
