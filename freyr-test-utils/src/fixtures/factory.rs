//! Factory functions for ESI payloads used as fixtures and mock bodies.

use chrono::{DateTime, Utc};
use eve_esi::model::{character::Character, corporation::Corporation};

/// A corporation payload with default test values.
pub fn corporation() -> Corporation {
    Corporation {
        alliance_id: None,
        ceo_id: 95_000_001,
        creator_id: 95_000_001,
        date_founded: Some(
            DateTime::parse_from_rfc3339("2020-03-15T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        ),
        description: None,
        home_station_id: Some(60_003_760),
        member_count: 42,
        name: "Test Corporation".to_string(),
        shares: Some(1000),
        tax_rate: 0.1,
        ticker: "TESTC".to_string(),
        url: None,
        war_eligible: Some(false),
        faction_id: None,
    }
}

/// A character payload with default test values, placed in `corporation_id`.
pub fn character(corporation_id: i64) -> Character {
    Character {
        alliance_id: None,
        birthday: DateTime::parse_from_rfc3339("2016-06-01T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc),
        bloodline_id: 1,
        corporation_id,
        description: None,
        faction_id: None,
        gender: "female".to_string(),
        name: "Test Character".to_string(),
        race_id: 1,
        security_status: Some(0.5),
        title: None,
    }
}
