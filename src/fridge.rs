use crate::{food::Food, ingredient::IngredientKind};

/// Heladera con una cantidad infinita de un solo ingrediente.
pub struct Fridge {
    ingredient: IngredientKind,
}

impl Fridge {
    pub fn new(ingredient: IngredientKind) -> Fridge {
        Fridge { ingredient }
    }

    pub fn ingredient(&self) -> IngredientKind {
        self.ingredient
    }

    pub fn take(&self) -> Food {
        Food::Ingredient(self.ingredient)
    }
}
