//! Freidora: convierte papas cortadas en papas fritas.
use std::time::Duration;

use crate::{
    color::ColorRamp,
    constants::*,
    errors::KitchenError,
    food::{Food, Fries},
    station::{CookingTimings, Overcooking, Phase, Recipe, Station, StationCore, StationState},
};

pub struct Fryer {
    core: StationCore,
    recipe: Recipe,
}

fn fry(_: Food) -> Food {
    Food::Fries(Fries { burnt: false })
}

fn burn(_: Food) -> Food {
    Food::Fries(Fries { burnt: true })
}

impl CookingTimings {
    pub fn fryer() -> CookingTimings {
        CookingTimings {
            processing: Duration::from_millis(FRYING_TIME),
            processing_steps: 1,
            overcooking_delay: Duration::from_millis(OVERCOOKING_DELAY),
            overcooking: Duration::from_millis(OVERCOOKING_TICK) * OVERCOOKING_STEPS,
            overcooking_steps: OVERCOOKING_STEPS,
        }
    }
}

impl Fryer {
    pub fn new(id: usize, timings: CookingTimings) -> Result<Fryer, KitchenError> {
        let burning = ColorRamp::new(FRIES_COLOR, BURNT_FRIES_COLOR, timings.overcooking_steps)?;
        let processing = Phase {
            tick: timings.processing / timings.processing_steps.max(1),
            steps: timings.processing_steps.max(1),
            ramp: None,
        };
        let recipe = Recipe {
            processing,
            finish: fry,
            overcooking: Some(Overcooking {
                delay: timings.overcooking_delay,
                phase: Phase::ramped(timings.overcooking, burning),
                spoil: burn,
            }),
        };
        Ok(Fryer {
            core: StationCore::new(format!("FRYER {}", id)),
            recipe,
        })
    }

    /// Empieza a freir papas cortadas. Cualquier otra cosa se devuelve.
    pub fn start(&self, item: Food) -> Result<(), Food> {
        if !item.ingredient_kind().map_or(false, |kind| kind.is_fryable()) {
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

impl Station for Fryer {
    fn core(&self) -> &StationCore {
        &self.core
    }
}
