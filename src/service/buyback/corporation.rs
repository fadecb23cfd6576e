use sea_orm::DatabaseConnection;

use crate::{
    data::{
        buyback::{corporation::BuybackCorporationRepository, office::OfficeRepository},
        eve::corporation::CorporationRepository,
    },
    error::Error,
    model::api::{CorporationDto, OfficeDto},
    model::sync::SyncStatus,
};

pub struct BuybackCorporationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BuybackCorporationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All enrolled corporations with their most recent sync status message.
    pub async fn get_corporations(&self) -> Result<Vec<CorporationDto>, Error> {
        let corporation_repo = BuybackCorporationRepository::new(self.db);

        let corporations = corporation_repo.get_all_with_corporation().await?;

        Ok(corporations
            .into_iter()
            .filter_map(|(enrollment, maybe_corporation)| {
                maybe_corporation.map(|corporation| to_dto(enrollment, corporation))
            })
            .collect())
    }

    pub async fn get_corporation(&self, id: i32) -> Result<Option<CorporationDto>, Error> {
        let corporation_repo = BuybackCorporationRepository::new(self.db);
        let eve_corporation_repo = CorporationRepository::new(self.db);

        let Some(enrollment) = corporation_repo.get(id).await? else {
            return Ok(None);
        };

        let Some(corporation) = eve_corporation_repo.get(enrollment.corporation_id).await? else {
            return Ok(None);
        };

        Ok(Some(to_dto(enrollment, corporation)))
    }

    /// The synced offices of an enrolled corporation, with resolved location
    /// names. These are the candidates for program drop-off locations.
    pub async fn get_offices(&self, id: i32) -> Result<Vec<OfficeDto>, Error> {
        let corporation_repo = BuybackCorporationRepository::new(self.db);
        let office_repo = OfficeRepository::new(self.db);

        corporation_repo
            .get(id)
            .await?
            .ok_or(Error::NotFound("Corporation"))?;

        let offices = office_repo.get_many_by_corporation(id).await?;

        Ok(offices
            .into_iter()
            .map(|(office, maybe_location)| OfficeDto {
                id: office.id,
                office_id: office.office_id,
                location_name: maybe_location
                    .as_ref()
                    .map(|location| location.name.clone())
                    .unwrap_or_default(),
                solar_system_id: maybe_location.and_then(|location| location.solar_system_id),
            })
            .collect())
    }
}

fn to_dto(
    enrollment: entity::buyback_corporation::Model,
    corporation: entity::eve_corporation::Model,
) -> CorporationDto {
    CorporationDto {
        id: enrollment.id,
        corporation_id: corporation.corporation_id,
        name: corporation.name,
        ticker: corporation.ticker,
        sync_status: SyncStatus::from_code(enrollment.sync_error)
            .message()
            .to_string(),
        last_synced_at: enrollment.last_synced_at,
    }
}

#[cfg(test)]
mod tests {
    use freyr_test_utils::prelude::*;

    use crate::{
        data::buyback::corporation::BuybackCorporationRepository, model::sync::SyncStatus,
        service::buyback::corporation::BuybackCorporationService,
    };

    /// The listing carries the identity and the sync status message.
    #[tokio::test]
    async fn listing_surfaces_sync_status_message() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;

        BuybackCorporationRepository::new(&test.db)
            .set_sync_result(
                enrolled.buyback_corporation.id,
                SyncStatus::TokenExpired,
                None,
            )
            .await?;

        let service = BuybackCorporationService::new(&test.db);
        let corporations = service.get_corporations().await.unwrap();

        assert_eq!(corporations.len(), 1);
        assert_eq!(corporations[0].name, enrolled.corporation.name);
        assert_eq!(corporations[0].sync_status, "Expired token");

        Ok(())
    }

    /// The office listing resolves location names for the program forms.
    #[tokio::test]
    async fn office_listing_resolves_location_names() -> Result<(), TestError> {
        let test = TestBuilder::new().with_buyback_tables().build().await?;
        let enrolled = test.insert_enrolled_corporation(98_000_001, 95_000_001).await?;
        let location = test.insert_location(60_000_004, "Jita IV - Moon 4", 3).await?;
        test.insert_office(5_001, &enrolled.buyback_corporation, &location).await?;

        let service = BuybackCorporationService::new(&test.db);
        let offices = service
            .get_offices(enrolled.buyback_corporation.id)
            .await
            .unwrap();

        assert_eq!(offices.len(), 1);
        assert_eq!(offices[0].office_id, 5_001);
        assert_eq!(offices[0].location_name, "Jita IV - Moon 4");

        Ok(())
    }
}
