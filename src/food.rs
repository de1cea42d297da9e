//! Todo lo que un cocinero puede llevar en las manos.
use crate::burger::Burger;
use crate::color::Rgb;
use crate::constants::{BURNT_FRIES_COLOR, FRIES_COLOR};
use crate::ingredient::{BeverageKind, IngredientKind};
use crate::meal::Meal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fries {
    pub burnt: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Food {
    Ingredient(IngredientKind),
    Burger(Burger),
    Fries(Fries),
    Beverage(BeverageKind),
    Meal(Meal),
}

impl Food {
    /// Ancho y alto en pixeles, solo se usa para dibujar.
    pub fn size(&self) -> (u32, u32) {
        match self {
            Food::Ingredient(kind) => kind.size(),
            Food::Burger(burger) => burger.size(),
            Food::Fries(_) => (26, 36),
            Food::Beverage(_) => (24, 40),
            Food::Meal(_) => (30, 30),
        }
    }

    pub fn ingredient_kind(&self) -> Option<IngredientKind> {
        match self {
            Food::Ingredient(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_ingredient(&self, kind: IngredientKind) -> bool {
        self.ingredient_kind() == Some(kind)
    }

    /// Color con el que se dibuja. Las hamburguesas y los combos se dibujan
    /// por partes.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Food::Ingredient(kind) => Some(kind.color()),
            Food::Fries(fries) if fries.burnt => Some(BURNT_FRIES_COLOR),
            Food::Fries(_) => Some(FRIES_COLOR),
            Food::Beverage(kind) => Some(kind.color()),
            Food::Burger(_) | Food::Meal(_) => None,
        }
    }

    /// Indica que la comida solo sirve para tirarla.
    pub fn is_spoiled(&self) -> bool {
        match self {
            Food::Ingredient(kind) => *kind == IngredientKind::BurntPatty,
            Food::Fries(fries) => fries.burnt,
            _ => false,
        }
    }
}
