//! Mesa de armado de hamburguesas.
use log::debug;

use crate::{burger::Burger, food::Food};

pub struct AssemblyStation {
    id: usize,
    burger: Option<Burger>,
}

impl AssemblyStation {
    pub fn new(id: usize) -> AssemblyStation {
        AssemblyStation { id, burger: None }
    }

    /// Apila un ingrediente sobre la hamburguesa en armado. Lo que no se
    /// puede apilar se devuelve.
    pub fn add(&mut self, food: Food) -> Result<(), Food> {
        let kind = match food.ingredient_kind() {
            Some(kind) if kind.is_burger_eligible() => kind,
            _ => return Err(food),
        };
        let burger = self.burger.get_or_insert_with(Burger::new);
        if !burger.add(kind) {
            if burger.ingredients().is_empty() {
                self.burger = None;
            }
            return Err(food);
        }
        debug!("[ASSEMBLY {}] Adds {:?}", self.id, kind);
        Ok(())
    }

    /// Entrega la hamburguesa solo si ya tiene el pan de arriba.
    pub fn take_burger(&mut self) -> Option<Burger> {
        if self.burger.as_ref().map_or(false, Burger::is_complete) {
            return self.burger.take();
        }
        None
    }

    pub fn burger(&self) -> Option<&Burger> {
        self.burger.as_ref()
    }

    pub fn reset(&mut self) {
        self.burger = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::IngredientKind::*;

    #[test]
    fn should_assemble_and_hand_over_a_closed_burger() {
        let mut station = AssemblyStation::new(1);
        assert!(station.add(Food::Ingredient(BottomBun)).is_ok());
        assert!(station.add(Food::Ingredient(CookedPatty)).is_ok());
        assert_eq!(None, station.take_burger());
        assert!(station.add(Food::Ingredient(TopBun)).is_ok());
        let burger = station.take_burger().unwrap();
        assert_eq!(&[BottomBun, CookedPatty, TopBun], burger.ingredients());
        assert_eq!(None, station.burger());
    }

    #[test]
    fn should_hand_back_what_can_not_be_stacked() {
        let mut station = AssemblyStation::new(1);
        assert_eq!(
            Err(Food::Ingredient(RawPatty)),
            station.add(Food::Ingredient(RawPatty))
        );
        assert_eq!(
            Err(Food::Ingredient(CookedPatty)),
            station.add(Food::Ingredient(CookedPatty))
        );
        assert_eq!(None, station.burger());
        let fries = Food::Fries(Default::default());
        assert_eq!(Err(fries.clone()), station.add(fries));
    }
}
