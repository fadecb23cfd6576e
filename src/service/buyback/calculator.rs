//! Buyback value calculator.
//!
//! Turns pasted inventory text into a priced quote: parse lines into item
//! quantities, resolve names against known item types, price each configured
//! item from reference market data, and apply the program's brokerage.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    constant::EVE_CATEGORY_ID_ASTEROID,
    data::buyback::{
        item_type::ItemTypeRepository, market_price::MarketPriceRepository,
        program_item::ProgramItemRepository, program_location::ProgramLocationRepository,
    },
    error::{validate::ValidateError, Error},
    model::api::{CalculationDto, CalculationLineDto},
};

/// Parses pasted inventory text into (item name, quantity) pairs.
///
/// Per line: tab-separated game-export columns put the name first and the
/// quantity second; without a tab, a trailing integer token is the quantity;
/// otherwise the whole line is a name with quantity 1. Quantity tokens
/// tolerate digit-grouping separators. Repeated names accumulate, keeping
/// first-seen order.
pub fn parse_inventory(text: &str) -> Vec<(String, i64)> {
    let mut lines: Vec<(String, i64)> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let (name, quantity) = if let Some((name, rest)) = line.split_once('\t') {
            let quantity = rest
                .split('\t')
                .next()
                .and_then(parse_quantity)
                .unwrap_or(1);
            (name.trim().to_string(), quantity)
        } else if let Some((head, tail)) = line.rsplit_once(' ') {
            match parse_quantity(tail) {
                Some(quantity) => (head.trim().to_string(), quantity),
                None => (line.to_string(), 1),
            }
        } else {
            (line.to_string(), 1)
        };

        if name.is_empty() {
            continue;
        }

        match lines.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, total)) => *total += quantity,
            None => lines.push((name, quantity)),
        }
    }

    lines
}

fn parse_quantity(token: &str) -> Option<i64> {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | ' ' | '\u{a0}'))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}

pub struct CalculatorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalculatorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes a quote for pasted inventory against a program.
    ///
    /// Unrecognized item names are skipped silently. Recognized items that are
    /// not configured in the program are excluded from the total but reported
    /// back as unmatched. Empty input yields a zero total.
    pub async fn calculate(
        &self,
        program_id: i32,
        program_location_id: i32,
        text: &str,
    ) -> Result<CalculationDto, Error> {
        let program_location_repo = ProgramLocationRepository::new(self.db);
        let item_type_repo = ItemTypeRepository::new(self.db);
        let program_item_repo = ProgramItemRepository::new(self.db);

        program_location_repo
            .get_by_program_and_id(program_id, program_location_id)
            .await?
            .ok_or(ValidateError::LocationOutsideProgram)?;

        let parsed = parse_inventory(text);

        let names: Vec<String> = parsed.iter().map(|(name, _)| name.clone()).collect();
        let types = item_type_repo.get_many_by_names(&names).await?;

        let program_items = program_item_repo.get_by_program(program_id).await?;
        let configured: HashMap<i32, &entity::program_item::Model> = program_items
            .iter()
            .map(|item| (item.item_type_id, item))
            .collect();

        let mut lines = Vec::new();
        let mut unmatched = Vec::new();
        let mut total = 0.0;

        for (name, quantity) in &parsed {
            let Some(item) = types.iter().find(|item| &item.name == name) else {
                continue;
            };

            let Some(program_item) = configured.get(&item.id) else {
                unmatched.push(name.clone());
                continue;
            };

            let unit_price = self.unit_price(item, program_item).await?;
            let line_total =
                unit_price * (*quantity as f64) * (1.0 - program_item.brokerage as f64 / 100.0);

            total += line_total;
            lines.push(CalculationLineDto {
                type_id: item.type_id,
                name: item.name.clone(),
                quantity: *quantity,
                unit_price,
                total: line_total,
            });
        }

        Ok(CalculationDto {
            lines,
            total,
            unmatched,
        })
    }

    /// Reference price of one unit.
    ///
    /// Ore configured with the refined-value flag is priced by its refining
    /// yield per portion; everything else uses the item's own average price.
    /// Types without a stored price count as zero.
    async fn unit_price(
        &self,
        item: &entity::item_type::Model,
        program_item: &entity::program_item::Model,
    ) -> Result<f64, Error> {
        let item_type_repo = ItemTypeRepository::new(self.db);
        let market_price_repo = MarketPriceRepository::new(self.db);

        if program_item.use_refined_value && item.category_id == EVE_CATEGORY_ID_ASTEROID {
            let materials = item_type_repo.get_materials(item.id).await?;

            if !materials.is_empty() {
                let material_type_ids: Vec<i64> = materials
                    .iter()
                    .map(|material| material.material_type_id)
                    .collect();
                let prices = market_price_repo
                    .get_average_prices(&material_type_ids)
                    .await?;

                let per_portion: f64 = materials
                    .iter()
                    .map(|material| {
                        material.quantity as f64
                            * prices
                                .get(&material.material_type_id)
                                .copied()
                                .unwrap_or(0.0)
                    })
                    .sum();

                return Ok(per_portion / i64::from(item.portion_size.max(1)) as f64);
            }
        }

        let prices = market_price_repo.get_average_prices(&[item.type_id]).await?;

        Ok(prices.get(&item.type_id).copied().unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    mod parse_inventory {
        use crate::service::buyback::calculator::parse_inventory;

        #[test]
        fn parses_tab_separated_game_export() {
            let text = "Veldspar\t1,000\tVeldspar\t\t10 m3\nScordite\t250\tScordite\t\t37.5 m3";

            let parsed = parse_inventory(text);

            assert_eq!(
                parsed,
                vec![
                    ("Veldspar".to_string(), 1_000),
                    ("Scordite".to_string(), 250),
                ]
            );
        }

        #[test]
        fn parses_trailing_quantity_token() {
            let parsed = parse_inventory("Veldspar 5000");

            assert_eq!(parsed, vec![("Veldspar".to_string(), 5_000)]);
        }

        #[test]
        fn name_only_lines_default_to_one() {
            let parsed = parse_inventory("Hammerhead II");

            assert_eq!(parsed, vec![("Hammerhead II".to_string(), 1)]);
        }

        #[test]
        fn repeated_lines_accumulate() {
            let parsed = parse_inventory("Veldspar\t100\nVeldspar\t200");

            assert_eq!(parsed, vec![("Veldspar".to_string(), 300)]);
        }

        #[test]
        fn empty_input_yields_no_lines() {
            assert!(parse_inventory("").is_empty());
            assert!(parse_inventory("\n  \n").is_empty());
        }
    }

    mod calculate {
        use freyr_test_utils::prelude::*;

        use crate::{
            data::buyback::{
                item_type::ItemTypeRepository, program_item::ProgramItemRepository,
            },
            error::{validate::ValidateError, Error},
            service::buyback::calculator::CalculatorService,
        };

        /// Empty input produces a zero total and no lines.
        #[tokio::test]
        async fn empty_input_yields_zero_total() -> Result<(), TestError> {
            let test = TestBuilder::new().with_buyback_tables().build().await?;
            let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
            let service = CalculatorService::new(&test.db);

            let result = service
                .calculate(fixture.program.id, fixture.program_location.id, "")
                .await
                .unwrap();

            assert_eq!(result.total, 0.0);
            assert!(result.lines.is_empty());
            assert!(result.unmatched.is_empty());

            Ok(())
        }

        /// Unrecognized names are skipped; recognized lines still sum.
        #[tokio::test]
        async fn unrecognized_names_are_excluded() -> Result<(), TestError> {
            let test = TestBuilder::new().with_buyback_tables().build().await?;
            let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
            let tritanium = test.insert_item_type(34, "Tritanium", 4).await?;
            test.insert_market_price(34, 5.0).await?;

            ProgramItemRepository::new(&test.db)
                .upsert(fixture.program.id, tritanium.id, 10, false)
                .await?;

            let service = CalculatorService::new(&test.db);
            let result = service
                .calculate(
                    fixture.program.id,
                    fixture.program_location.id,
                    "Tritanium\t1000\nNot An Item\t50",
                )
                .await
                .unwrap();

            assert_eq!(result.lines.len(), 1);
            // 5.0 * 1000 * (1 - 10/100)
            assert_eq!(result.total, 4_500.0);
            assert!(result.unmatched.is_empty());

            Ok(())
        }

        /// Recognized items outside the program are excluded but reported.
        #[tokio::test]
        async fn unconfigured_items_are_reported_unmatched() -> Result<(), TestError> {
            let test = TestBuilder::new().with_buyback_tables().build().await?;
            let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
            test.insert_item_type(35, "Pyerite", 4).await?;
            test.insert_market_price(35, 10.0).await?;

            let service = CalculatorService::new(&test.db);
            let result = service
                .calculate(
                    fixture.program.id,
                    fixture.program_location.id,
                    "Pyerite\t100",
                )
                .await
                .unwrap();

            assert_eq!(result.total, 0.0);
            assert!(result.lines.is_empty());
            assert_eq!(result.unmatched, vec!["Pyerite".to_string()]);

            Ok(())
        }

        /// Ore with the refined-value flag is priced by its refining yield
        /// divided by portion size.
        #[tokio::test]
        async fn refined_value_prices_ore_by_materials() -> Result<(), TestError> {
            let test = TestBuilder::new().with_buyback_tables().build().await?;
            let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
            // Asteroid category: portion size 100.
            let veldspar = test.insert_item_type(1230, "Veldspar", 25).await?;
            test.insert_market_price(1230, 12.0).await?;
            test.insert_market_price(34, 5.0).await?;

            let item_type_repo = ItemTypeRepository::new(&test.db);
            item_type_repo
                .replace_materials(veldspar.id, vec![(34, 415)])
                .await?;

            ProgramItemRepository::new(&test.db)
                .upsert(fixture.program.id, veldspar.id, 10, true)
                .await?;

            let service = CalculatorService::new(&test.db);
            let result = service
                .calculate(
                    fixture.program.id,
                    fixture.program_location.id,
                    "Veldspar\t200",
                )
                .await
                .unwrap();

            // Unit: 415 * 5.0 / 100 = 20.75; line: 20.75 * 200 * 0.9
            assert_eq!(result.lines.len(), 1);
            assert_eq!(result.lines[0].unit_price, 20.75);
            assert_eq!(result.total, 3_735.0);

            Ok(())
        }

        /// The refined-value flag is ignored for items that are not ore.
        #[tokio::test]
        async fn refined_value_flag_is_ignored_for_non_ore() -> Result<(), TestError> {
            let test = TestBuilder::new().with_buyback_tables().build().await?;
            let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
            let tritanium = test.insert_item_type(34, "Tritanium", 4).await?;
            test.insert_market_price(34, 5.0).await?;

            ProgramItemRepository::new(&test.db)
                .upsert(fixture.program.id, tritanium.id, 10, true)
                .await?;

            let service = CalculatorService::new(&test.db);
            let result = service
                .calculate(
                    fixture.program.id,
                    fixture.program_location.id,
                    "Tritanium\t100",
                )
                .await
                .unwrap();

            assert_eq!(result.lines[0].unit_price, 5.0);

            Ok(())
        }

        /// A location of another program is rejected before any pricing.
        #[tokio::test]
        async fn foreign_program_location_is_rejected() -> Result<(), TestError> {
            let test = TestBuilder::new().with_buyback_tables().build().await?;
            let fixture = test.insert_program_with_location(98_000_001, 95_000_001).await?;
            let other_program = test
                .insert_program(&fixture.enrolled.buyback_corporation, "Other")
                .await?;

            let service = CalculatorService::new(&test.db);
            let result = service
                .calculate(other_program.id, fixture.program_location.id, "")
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidateError(ValidateError::LocationOutsideProgram))
            ));

            Ok(())
        }
    }
}
