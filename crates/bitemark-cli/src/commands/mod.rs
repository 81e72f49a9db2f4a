//! Command handlers

pub mod cards;
pub mod config;
pub mod session;

use anyhow::{anyhow, Result};

use bitemark_core::{CardViewModel, Catalog, RestaurantId};

/// Look up a card by restaurant ID
pub fn find_card(catalog: &Catalog, id: &str) -> Result<CardViewModel> {
    catalog
        .card(&RestaurantId::from(id))
        .ok_or_else(|| anyhow!("Restaurant not found: {}", id))
}
