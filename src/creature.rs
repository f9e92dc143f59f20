//! Unicorn tables and generation

use serde::Serialize;

use crate::error::Result;
use crate::random::Selector;

/// Possible colours for a unicorn.
pub const UNICORN_COLORS: [&str; 13] = [
    "cream",
    "alabaster",
    "frost",
    "hazelwood",
    "sepia",
    "oyster",
    "butterscotch",
    "cantaloupe",
    "apricot",
    "amber",
    "watermelon",
    "strawberry",
    "rosewood",
];

/// Possible unicorn names.
pub const UNICORN_NAMES: [&str; 10] = [
    "Nightwind",
    "Hesperos",
    "Argus",
    "Samantha",
    "Fae",
    "Langaria",
    "Sterling",
    "Snowflake",
    "Starburst",
    "Unity",
];

/// Exclusive upper bound for a unicorn's age.
pub const UNICORN_MAX_AGE: u32 = 30;

/// A freshly generated unicorn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    pub name: String,
    pub age: u32,
    pub color: String,
}

impl Creature {
    /// Draw a new unicorn from the shared selector.
    pub fn generate(selector: &Selector) -> Result<Self> {
        let color = selector.pick(&UNICORN_COLORS)?;
        let name = selector.pick(&UNICORN_NAMES)?;
        let age = selector.below(UNICORN_MAX_AGE)?;

        Ok(Self {
            name: name.to_string(),
            age,
            color: color.to_string(),
        })
    }
}
