//! Tabla de cortar: corta verduras y papas.
use std::time::Duration;

use crate::{
    constants::CUTTING_TIME,
    food::Food,
    station::{Phase, Recipe, Station, StationCore},
};

pub struct CuttingStation {
    core: StationCore,
    recipe: Recipe,
}

fn slice(item: Food) -> Food {
    match item.ingredient_kind().and_then(|kind| kind.cut()) {
        Some(sliced) => Food::Ingredient(sliced),
        None => item,
    }
}

impl CuttingStation {
    pub fn new(id: usize) -> CuttingStation {
        CuttingStation::with_cutting_time(id, Duration::from_millis(CUTTING_TIME))
    }

    pub fn with_cutting_time(id: usize, cutting_time: Duration) -> CuttingStation {
        CuttingStation {
            core: StationCore::new(format!("CUTTING STATION {}", id)),
            recipe: Recipe {
                processing: Phase::single(cutting_time),
                finish: slice,
                overcooking: None,
            },
        }
    }

    pub fn start(&self, item: Food) -> Result<(), Food> {
        if !item.ingredient_kind().map_or(false, |kind| kind.is_cuttable()) {
            return Err(item);
        }
        self.core.begin(item, self.recipe)
    }
}

impl Station for CuttingStation {
    fn core(&self) -> &StationCore {
        &self.core
    }
}
