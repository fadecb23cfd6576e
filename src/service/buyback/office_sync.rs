//! Office synchronization.
//!
//! Reconciles a corporation's locally stored offices against its current ESI
//! asset list. A run either completes in full or is abandoned; failures are
//! recorded as a status code on the corporation row and surfaced to managers
//! on their next view.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::{
    constant::{
        LOCATION_CATEGORY_STATION, LOCATION_CATEGORY_STRUCTURE, LOCATION_CATEGORY_UNKNOWN,
        OFFICE_TYPE_ID, STATION_ID_MAX, STATION_ID_MIN, STRUCTURE_ID_MIN,
    },
    data::{
        buyback::{
            corporation::BuybackCorporationRepository, location::LocationRepository,
            office::OfficeRepository,
        },
        eve::corporation::CorporationRepository,
    },
    error::{sync::SyncError, Error},
    esi::{EsiFetcher, FetchError},
    model::sync::SyncStatus,
};

pub struct OfficeSyncService<'a> {
    db: &'a DatabaseConnection,
    esi_fetcher: &'a EsiFetcher,
}

impl<'a> OfficeSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection, esi_fetcher: &'a EsiFetcher) -> Self {
        Self { db, esi_fetcher }
    }

    /// Synchronizes the offices of an enrolled corporation.
    ///
    /// On success the corporation's error status is cleared and its sync
    /// timestamp updated. On a token or transport failure the whole run is
    /// abandoned, the matching status code is recorded, and local offices are
    /// left untouched.
    pub async fn sync_corporation(&self, id: i32) -> Result<(), Error> {
        let corporation_repo = BuybackCorporationRepository::new(self.db);
        let eve_corporation_repo = CorporationRepository::new(self.db);

        let corporation = corporation_repo
            .get(id)
            .await?
            .ok_or(Error::NotFound("Corporation"))?;
        let eve_corporation = eve_corporation_repo
            .get(corporation.corporation_id)
            .await?
            .ok_or(Error::NotFound("Corporation"))?;

        match self
            .replace_offices(&corporation, eve_corporation.corporation_id)
            .await
        {
            Ok(count) => {
                corporation_repo
                    .set_sync_result(
                        corporation.id,
                        SyncStatus::None,
                        Some(Utc::now().naive_utc()),
                    )
                    .await?;

                info!(
                    "Synced {} office(s) for corporation {}",
                    count, eve_corporation.name
                );

                Ok(())
            }
            Err(Error::FetchError(err)) => {
                let sync_error = SyncError::from_fetch(err);

                warn!(
                    "Office sync abandoned for corporation {}: {}",
                    eve_corporation.name, sync_error
                );

                corporation_repo
                    .set_sync_result(corporation.id, sync_error.status(), None)
                    .await?;

                Err(sync_error.into())
            }
            Err(err) => Err(err),
        }
    }

    /// Fetches the corporation's assets and replaces the stored office set:
    /// every office in the fetch is upserted, every office absent from it is
    /// deleted as vacated.
    async fn replace_offices(
        &self,
        corporation: &entity::buyback_corporation::Model,
        corporation_id: i64,
    ) -> Result<usize, Error> {
        let office_repo = OfficeRepository::new(self.db);

        let token = self
            .esi_fetcher
            .refresh_access_token(&corporation.refresh_token)
            .await?;
        let assets = self
            .esi_fetcher
            .get_corporation_assets(&token.access_token, corporation_id)
            .await?;

        let mut seen: HashSet<i64> = HashSet::new();

        for asset in assets {
            if asset.type_id != OFFICE_TYPE_ID {
                continue;
            }

            let location = self
                .resolve_location(&token.access_token, asset.location_id)
                .await?;

            office_repo
                .upsert(asset.item_id, corporation.id, location.id)
                .await?;
            seen.insert(asset.item_id);
        }

        let stored = office_repo
            .get_office_ids_by_corporation(corporation.id)
            .await?;
        let vacated: Vec<i64> = stored
            .into_iter()
            .filter(|(_, office_id)| !seen.contains(office_id))
            .map(|(_, office_id)| office_id)
            .collect();

        office_repo
            .delete_by_office_ids(corporation.id, &vacated)
            .await?;

        Ok(seen.len())
    }

    /// Resolves a location by its EVE Online ID, querying ESI on a cache miss.
    ///
    /// NPC stations resolve from public data, Upwell structures need the sync
    /// token. A structure the sync character cannot dock at answers 404 and is
    /// stored as an unknown-category placeholder instead of failing the run.
    async fn resolve_location(
        &self,
        access_token: &str,
        location_id: i64,
    ) -> Result<entity::location::Model, Error> {
        let location_repo = LocationRepository::new(self.db);

        if let Some(location) = location_repo.get_by_location_id(location_id).await? {
            return Ok(location);
        }

        if (STATION_ID_MIN..=STATION_ID_MAX).contains(&location_id) {
            let station = self.esi_fetcher.get_station(location_id).await?;

            let location = location_repo
                .create(
                    location_id,
                    station.name,
                    Some(station.system_id),
                    LOCATION_CATEGORY_STATION,
                )
                .await?;

            return Ok(location);
        }

        if location_id >= STRUCTURE_ID_MIN {
            match self.esi_fetcher.get_structure(access_token, location_id).await {
                Ok(structure) => {
                    let location = location_repo
                        .create(
                            location_id,
                            structure.name,
                            Some(structure.solar_system_id),
                            LOCATION_CATEGORY_STRUCTURE,
                        )
                        .await?;

                    return Ok(location);
                }
                Err(FetchError::UnexpectedStatus { .. }) => {}
                Err(err) => return Err(err.into()),
            }
        }

        let location = location_repo
            .create(
                location_id,
                location_id.to_string(),
                None,
                LOCATION_CATEGORY_UNKNOWN,
            )
            .await?;

        Ok(location)
    }
}
