//! Combos: lo que se entrega y lo que pide cada pedido.
use rand::Rng;

use crate::burger::Burger;
use crate::constants::PROBABILITY_FOR_FRIES;
use crate::food::Fries;
use crate::ingredient::BeverageKind;

/// A lo sumo una hamburguesa, una bebida y unas papas. Cada parte se puede
/// poner una sola vez; para vaciarla hay que armar un combo nuevo.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Meal {
    burger: Option<Burger>,
    beverage: Option<BeverageKind>,
    fries: Option<Fries>,
}

impl Meal {
    pub fn new() -> Meal {
        Meal::default()
    }

    /// Pedido al azar: siempre hamburguesa, tal vez bebida, tal vez papas.
    pub fn random<R: Rng>(rng: &mut R) -> Meal {
        let mut meal = Meal::new();
        meal.burger = Some(Burger::random(rng));
        meal.beverage = BeverageKind::random(rng);
        if rng.gen_range(0, 101) <= PROBABILITY_FOR_FRIES {
            meal.fries = Some(Fries::default());
        }
        meal
    }

    pub fn add_burger(&mut self, burger: Burger) -> Result<(), Burger> {
        if self.burger.is_some() {
            return Err(burger);
        }
        self.burger = Some(burger);
        Ok(())
    }

    pub fn add_beverage(&mut self, beverage: BeverageKind) -> Result<(), BeverageKind> {
        if self.beverage.is_some() {
            return Err(beverage);
        }
        self.beverage = Some(beverage);
        Ok(())
    }

    pub fn add_fries(&mut self, fries: Fries) -> Result<(), Fries> {
        if self.fries.is_some() {
            return Err(fries);
        }
        self.fries = Some(fries);
        Ok(())
    }

    pub fn burger(&self) -> Option<&Burger> {
        self.burger.as_ref()
    }

    pub fn beverage(&self) -> Option<BeverageKind> {
        self.beverage
    }

    pub fn fries(&self) -> Option<Fries> {
        self.fries
    }

    /// Cantidad de partes presentes (hamburguesa, bebida, papas).
    pub fn item_count(&self) -> usize {
        [
            self.burger.is_some(),
            self.beverage.is_some(),
            self.fries.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
