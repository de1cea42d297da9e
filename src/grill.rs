//! Parrilla: cocina medallones crudos y, si nadie los saca, los quema.
use std::time::Duration;

use crate::{
    color::ColorRamp,
    constants::*,
    errors::KitchenError,
    food::Food,
    ingredient::IngredientKind,
    station::{CookingTimings, Overcooking, Phase, Recipe, Station, StationCore, StationState},
};

pub struct Grill {
    core: StationCore,
    recipe: Recipe,
}

fn cook(_: Food) -> Food {
    Food::Ingredient(IngredientKind::CookedPatty)
}

fn burn(_: Food) -> Food {
    Food::Ingredient(IngredientKind::BurntPatty)
}

impl CookingTimings {
    pub fn grill() -> CookingTimings {
        CookingTimings {
            processing: Duration::from_millis(GRILL_COOKING_TICK) * GRILL_COOKING_STEPS,
            processing_steps: GRILL_COOKING_STEPS,
            overcooking_delay: Duration::from_millis(OVERCOOKING_DELAY),
            overcooking: Duration::from_millis(OVERCOOKING_TICK) * OVERCOOKING_STEPS,
            overcooking_steps: OVERCOOKING_STEPS,
        }
    }
}

impl Grill {
    pub fn new(id: usize, timings: CookingTimings) -> Result<Grill, KitchenError> {
        let cooking = ColorRamp::new(RAW_PATTY_COLOR, COOKED_PATTY_COLOR, timings.processing_steps)?;
        let burning = ColorRamp::new(COOKED_PATTY_COLOR, BURNT_PATTY_COLOR, timings.overcooking_steps)?;
        let recipe = Recipe {
            processing: Phase::ramped(timings.processing, cooking),
            finish: cook,
            overcooking: Some(Overcooking {
                delay: timings.overcooking_delay,
                phase: Phase::ramped(timings.overcooking, burning),
                spoil: burn,
            }),
        };
        Ok(Grill {
            core: StationCore::new(format!("GRILL {}", id)),
            recipe,
        })
    }

    /// Pone un medallon crudo a cocinar. Cualquier otra cosa se devuelve.
    pub fn start(&self, item: Food) -> Result<(), Food> {
        if !item.is_ingredient(IngredientKind::RawPatty) {
            return Err(item);
        }
        self.core.begin(item, self.recipe)
    }

    pub fn has_cooked_item(&self) -> bool {
        self.state() == StationState::Ready
    }

    pub fn has_overcooked_or_burnt_item(&self) -> bool {
        matches!(self.state(), StationState::Degrading | StationState::Spoiled)
    }
}

impl Station for Grill {
    fn core(&self) -> &StationCore {
        &self.core
    }
}
