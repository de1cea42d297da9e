//! Ingredientes y bebidas, crudos o ya transformados.
use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

use crate::color::Rgb;
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IngredientKind {
    Potato,
    PotatoSlices,
    RawPatty,
    CookedPatty,
    BurntPatty,
    UnpreparedOnion,
    UnpreparedLettuce,
    UnpreparedTomato,
    UnpreparedPickle,
    BottomBun,
    TopBun,
    CheeseSlice,
    OnionSlices,
    LettuceSlices,
    TomatoSlices,
    PickleSlice,
}

/// Ingredientes opcionales de una hamburguesa, en el orden en que se apilan.
pub const BURGER_TOPPINGS: [IngredientKind; 5] = [
    IngredientKind::CheeseSlice,
    IngredientKind::OnionSlices,
    IngredientKind::LettuceSlices,
    IngredientKind::TomatoSlices,
    IngredientKind::PickleSlice,
];

impl IngredientKind {
    pub fn is_burger_eligible(&self) -> bool {
        matches!(
            self,
            IngredientKind::TopBun | IngredientKind::BottomBun | IngredientKind::CookedPatty
        ) || BURGER_TOPPINGS.contains(self)
    }

    pub fn is_cuttable(&self) -> bool {
        self.cut().is_some()
    }

    pub fn is_fryable(&self) -> bool {
        *self == IngredientKind::PotatoSlices
    }

    /// Version cortada del ingrediente, si se puede cortar.
    pub fn cut(&self) -> Option<IngredientKind> {
        match self {
            IngredientKind::Potato => Some(IngredientKind::PotatoSlices),
            IngredientKind::UnpreparedOnion => Some(IngredientKind::OnionSlices),
            IngredientKind::UnpreparedLettuce => Some(IngredientKind::LettuceSlices),
            IngredientKind::UnpreparedTomato => Some(IngredientKind::TomatoSlices),
            IngredientKind::UnpreparedPickle => Some(IngredientKind::PickleSlice),
            _ => None,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            IngredientKind::Potato | IngredientKind::PotatoSlices => POTATO_COLOR,
            IngredientKind::RawPatty => RAW_PATTY_COLOR,
            IngredientKind::CookedPatty => COOKED_PATTY_COLOR,
            IngredientKind::BurntPatty => BURNT_PATTY_COLOR,
            IngredientKind::UnpreparedOnion | IngredientKind::OnionSlices => ONIONS_COLOR,
            IngredientKind::UnpreparedLettuce | IngredientKind::LettuceSlices => LETTUCE_COLOR,
            IngredientKind::UnpreparedTomato | IngredientKind::TomatoSlices => TOMATO_COLOR,
            IngredientKind::UnpreparedPickle | IngredientKind::PickleSlice => PICKLE_COLOR,
            IngredientKind::BottomBun | IngredientKind::TopBun => BUN_COLOR,
            IngredientKind::CheeseSlice => CHEESE_COLOR,
        }
    }

    /// Ancho y alto en pixeles, solo se usa para dibujar.
    pub fn size(&self) -> (u32, u32) {
        match self {
            IngredientKind::Potato => (16, 16),
            IngredientKind::PotatoSlices => (16, 8),
            IngredientKind::TopBun => (32, 8),
            IngredientKind::CheeseSlice => (32, 1),
            IngredientKind::OnionSlices
            | IngredientKind::LettuceSlices
            | IngredientKind::TomatoSlices => (32, 3),
            IngredientKind::PickleSlice => (36, 3),
            _ => (32, 6),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BeverageKind {
    Cola,
    OrangeSoda,
    LemonSoda,
    Lemonade,
    PinkLemonade,
}

pub const BEVERAGES: [BeverageKind; 5] = [
    BeverageKind::Cola,
    BeverageKind::OrangeSoda,
    BeverageKind::LemonSoda,
    BeverageKind::Lemonade,
    BeverageKind::PinkLemonade,
];

impl BeverageKind {
    pub fn color(&self) -> Rgb {
        match self {
            BeverageKind::Cola => COLA_COLOR,
            BeverageKind::OrangeSoda => ORANGE_SODA_COLOR,
            BeverageKind::LemonSoda => LEMON_SODA_COLOR,
            BeverageKind::Lemonade => LEMONADE_COLOR,
            BeverageKind::PinkLemonade => PINK_LEMONADE_COLOR,
        }
    }

    /// Elige (o no) una bebida segun la probabilidad de que un pedido incluya una.
    pub fn random<R: Rng>(rng: &mut R) -> Option<BeverageKind> {
        if rng.gen_range(0, 101) <= PROBABILITY_FOR_BEVERAGE {
            return BEVERAGES.choose(rng).copied();
        }
        None
    }
}
