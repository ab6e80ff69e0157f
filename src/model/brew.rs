//! Brew request parameters and their defaults.

use super::recipe::{Drink, Size};
use serde::{Deserialize, Serialize};

/// Drink substituted when a request omits `drinkId`.
pub const DEFAULT_DRINK: Drink = Drink::Americano;
/// Size substituted when a request omits `size`.
pub const DEFAULT_SIZE: Size = Size::M;
/// Quantity substituted when a request omits `quantity`.
pub const DEFAULT_QUANTITY: u8 = 1;

/// Bounds on the number of drinks per request.
pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 5;

/// Raw `makeDrink` parameters as parsed by the transport layer.
///
/// Every field is optional; absent fields fall back to americano / m / 1.
/// Identifier validation happens when the appliance resolves the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrewParams {
    pub drink_id: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<u8>,
}

/// A fully-resolved brew request. Lives only for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrewRequest {
    pub drink: Drink,
    pub size: Size,
    pub quantity: u8,
}
