//! Expendedora: llena vasos de una sola bebida.
use std::time::Duration;

use crate::{
    constants::FILLING_TIME,
    food::Food,
    ingredient::BeverageKind,
    station::{Phase, Recipe, Station, StationCore},
};

pub struct FillingStation {
    core: StationCore,
    beverage: BeverageKind,
    recipe: Recipe,
}

fn filled(item: Food) -> Food {
    item
}

impl FillingStation {
    pub fn new(id: usize, beverage: BeverageKind) -> FillingStation {
        FillingStation::with_filling_time(id, beverage, Duration::from_millis(FILLING_TIME))
    }

    pub fn with_filling_time(id: usize, beverage: BeverageKind, filling_time: Duration) -> FillingStation {
        FillingStation {
            core: StationCore::new(format!("FILLING STATION {} ({:?})", id, beverage)),
            beverage,
            recipe: Recipe {
                processing: Phase::single(filling_time),
                finish: filled,
                overcooking: None,
            },
        }
    }

    pub fn beverage(&self) -> BeverageKind {
        self.beverage
    }

    /// Empieza a llenar un vaso. Devuelve false si ya hay uno en la estacion.
    pub fn start(&self) -> bool {
        self.core
            .begin(Food::Beverage(self.beverage), self.recipe)
            .is_ok()
    }
}

impl Station for FillingStation {
    fn core(&self) -> &StationCore {
        &self.core
    }
}
