//! Stock drink recipes and size scaling.

use super::resource::{Consumption, ResourceId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drinks the machine knows how to brew. Recipes are fixed for the lifetime
/// of the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drink {
    #[serde(rename = "espresso")]
    Espresso,
    #[serde(rename = "americano")]
    Americano,
    #[serde(rename = "cappuccino")]
    Cappuccino,
    #[serde(rename = "latte")]
    Latte,
    #[serde(rename = "hotChocolate")]
    HotChocolate,
    #[serde(rename = "hotWater")]
    HotWater,
}

impl Drink {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drink::Espresso => "espresso",
            Drink::Americano => "americano",
            Drink::Cappuccino => "cappuccino",
            Drink::Latte => "latte",
            Drink::HotChocolate => "hotChocolate",
            Drink::HotWater => "hotWater",
        }
    }

    /// Units of `resource` consumed per base unit of this drink.
    fn units(&self, resource: ResourceId) -> u32 {
        use ResourceId::{Chocolate, CoffeeBeans, Milk, Water};
        match self {
            Drink::Espresso => match resource {
                Water => 1,
                Milk => 0,
                Chocolate => 0,
                CoffeeBeans => 2,
            },
            Drink::Americano => match resource {
                Water => 2,
                Milk => 0,
                Chocolate => 0,
                CoffeeBeans => 2,
            },
            Drink::Cappuccino => match resource {
                Water => 1,
                Milk => 1,
                Chocolate => 0,
                CoffeeBeans => 2,
            },
            Drink::Latte => match resource {
                Water => 1,
                Milk => 2,
                Chocolate => 0,
                CoffeeBeans => 2,
            },
            Drink::HotChocolate => match resource {
                Water => 0,
                Milk => 0,
                Chocolate => 1,
                CoffeeBeans => 0,
            },
            Drink::HotWater => match resource {
                Water => 1,
                Milk => 0,
                Chocolate => 0,
                CoffeeBeans => 0,
            },
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Drink {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "espresso" => Ok(Drink::Espresso),
            "americano" => Ok(Drink::Americano),
            "cappuccino" => Ok(Drink::Cappuccino),
            "latte" => Ok(Drink::Latte),
            "hotChocolate" => Ok(Drink::HotChocolate),
            "hotWater" => Ok(Drink::HotWater),
            _ => Err(()),
        }
    }
}

/// Cup sizes and their consumption multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "s")]
    S,
    #[serde(rename = "m")]
    M,
    #[serde(rename = "l")]
    L,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "s",
            Size::M => "m",
            Size::L => "l",
        }
    }

    /// Fractional scaling factor applied to recipe consumption.
    pub fn multiplier(&self) -> f64 {
        match self {
            Size::S => 0.1,
            Size::M => 0.2,
            Size::L => 0.3,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Size::S),
            "m" => Ok(Size::M),
            "l" => Ok(Size::L),
            _ => Err(()),
        }
    }
}

/// Resources consumed by `quantity` drinks at `size`.
///
/// Rounded up per resource so a fractional size never under-charges
/// consumption.
pub fn consumption_for(drink: Drink, size: Size, quantity: u8) -> Consumption {
    ResourceId::ALL
        .iter()
        .map(|&resource| {
            let units = f64::from(quantity) * size.multiplier() * f64::from(drink.units(resource));
            (resource, units.ceil() as u32)
        })
        .collect()
}
