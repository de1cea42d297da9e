//! Bandeja donde se junta un combo antes de entregarlo.
use crate::{
    burger::Burger,
    food::{Food, Fries},
    ingredient::BeverageKind,
    meal::Meal,
};

#[derive(Default)]
pub struct Platter {
    burger: Option<Burger>,
    beverage: Option<BeverageKind>,
    fries: Option<Fries>,
}

impl Platter {
    pub fn new() -> Platter {
        Platter::default()
    }

    pub fn add(&mut self, food: Food) -> Result<(), Food> {
        match food {
            Food::Burger(burger) if self.burger.is_none() && burger.is_complete() => {
                self.burger = Some(burger);
            }
            Food::Beverage(beverage) if self.beverage.is_none() => {
                self.beverage = Some(beverage);
            }
            Food::Fries(fries) if self.fries.is_none() && !fries.burnt => {
                self.fries = Some(fries);
            }
            other => return Err(other),
        }
        Ok(())
    }

    /// Arma el combo con lo que haya. Sin hamburguesa no hay combo.
    pub fn take_meal(&mut self) -> Option<Meal> {
        let burger = self.burger.take()?;
        let mut meal = Meal::new();
        meal.add_burger(burger).ok()?;
        if let Some(beverage) = self.beverage.take() {
            meal.add_beverage(beverage).ok()?;
        }
        if let Some(fries) = self.fries.take() {
            meal.add_fries(fries).ok()?;
        }
        Some(meal)
    }

    pub fn is_empty(&self) -> bool {
        self.burger.is_none() && self.beverage.is_none() && self.fries.is_none()
    }

    pub fn reset(&mut self) {
        *self = Platter::default();
    }
}
