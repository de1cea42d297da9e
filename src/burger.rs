//! Hamburguesa y las reglas de armado.
use std::collections::BTreeSet;

use rand::{seq::index::sample, Rng};
use serde::Serialize;

use crate::constants::PROBABILITY_FOR_TWO_PATTIES;
use crate::ingredient::{IngredientKind, BURGER_TOPPINGS};

/// Capas de la hamburguesa, de abajo hacia arriba.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Burger {
    ingredients: Vec<IngredientKind>,
}

impl Burger {
    pub fn new() -> Burger {
        Burger {
            ingredients: Vec::new(),
        }
    }

    /// Arma una hamburguesa completa al azar: pan de abajo, uno o dos medallones,
    /// un subconjunto de los agregados (en el orden en que se apilan) y pan de arriba.
    pub fn random<R: Rng>(rng: &mut R) -> Burger {
        let mut burger = Burger::new();
        burger.add(IngredientKind::BottomBun);
        burger.add(IngredientKind::CookedPatty);
        if rng.gen_range(0, 101) <= PROBABILITY_FOR_TWO_PATTIES {
            burger.add(IngredientKind::CookedPatty);
        }

        let amount = rng.gen_range(0, BURGER_TOPPINGS.len() + 1);
        let mut chosen = sample(rng, BURGER_TOPPINGS.len(), amount).into_vec();
        chosen.sort_unstable();
        for index in chosen {
            burger.add(BURGER_TOPPINGS[index]);
        }

        burger.add(IngredientKind::TopBun);
        burger
    }

    pub fn can_add(&self, kind: IngredientKind) -> bool {
        if !kind.is_burger_eligible() || self.is_complete() {
            return false;
        }

        let layers = self.ingredients.len();
        match (layers, kind) {
            (0, IngredientKind::BottomBun) => true,
            (0, _) | (_, IngredientKind::BottomBun) => false,
            (1, IngredientKind::CookedPatty) => true,
            (1, _) => false,
            (2, IngredientKind::CookedPatty) => true,
            (_, IngredientKind::CookedPatty) => false,
            (_, IngredientKind::CheeseSlice) => self.top() == Some(IngredientKind::CookedPatty),
            _ => true,
        }
    }

    /// Agrega el ingrediente si las reglas de armado lo permiten.
    pub fn add(&mut self, kind: IngredientKind) -> bool {
        if !self.can_add(kind) {
            return false;
        }
        self.ingredients.push(kind);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.top() == Some(IngredientKind::TopBun)
    }

    pub fn ingredients(&self) -> &[IngredientKind] {
        &self.ingredients
    }

    /// Tipos de ingrediente presentes, sin orden ni repeticiones.
    pub fn kinds(&self) -> BTreeSet<IngredientKind> {
        self.ingredients.iter().copied().collect()
    }

    pub fn size(&self) -> (u32, u32) {
        self.ingredients.iter().fold((0, 0), |(width, height), kind| {
            let (w, h) = kind.size();
            (width.max(w), height + h)
        })
    }

    fn top(&self) -> Option<IngredientKind> {
        self.ingredients.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    use IngredientKind::*;

    fn classic() -> Burger {
        let mut burger = Burger::new();
        burger.add(BottomBun);
        burger.add(CookedPatty);
        burger
    }

    #[test]
    fn should_start_with_a_bottom_bun() {
        let mut burger = Burger::new();
        assert!(!burger.add(CookedPatty));
        assert!(!burger.add(TopBun));
        assert!(burger.add(BottomBun));
        assert!(!burger.add(BottomBun));
        assert_eq!(&[BottomBun], burger.ingredients());
    }

    #[test]
    fn should_require_a_cooked_patty_as_second_layer() {
        let mut burger = Burger::new();
        burger.add(BottomBun);
        assert!(!burger.add(RawPatty));
        assert!(!burger.add(CheeseSlice));
        assert!(!burger.add(TopBun));
        assert!(burger.add(CookedPatty));
    }

    #[test]
    fn should_allow_a_second_patty_only_as_third_layer() {
        let mut burger = classic();
        assert!(burger.add(CookedPatty));
        assert!(!burger.add(CookedPatty));

        let mut burger = classic();
        burger.add(LettuceSlices);
        assert!(!burger.add(CookedPatty));
    }

    #[test]
    fn should_only_add_cheese_right_after_a_patty() {
        let mut burger = classic();
        burger.add(OnionSlices);
        assert!(!burger.add(CheeseSlice));

        let mut burger = classic();
        assert!(burger.add(CheeseSlice));
        assert!(!burger.add(CheeseSlice));
    }

    #[test]
    fn should_close_the_burger_with_the_top_bun() {
        let mut burger = classic();
        assert!(!burger.is_complete());
        assert!(burger.add(TopBun));
        assert!(burger.is_complete());
        assert!(!burger.add(TopBun));
        assert!(!burger.add(TomatoSlices));
        assert_eq!(3, burger.ingredients().len());
    }

    #[test]
    fn should_reject_ingredients_that_are_not_for_burgers() {
        let mut burger = classic();
        assert!(!burger.add(UnpreparedTomato));
        assert!(!burger.add(BurntPatty));
        assert!(!burger.add(PotatoSlices));
    }

    #[test]
    fn should_keep_invariants_for_any_sequence_of_additions() {
        let mut rng = StdRng::seed_from_u64(7);
        let all = [
            BottomBun, TopBun, RawPatty, CookedPatty, BurntPatty, CheeseSlice, OnionSlices,
            LettuceSlices, TomatoSlices, PickleSlice, Potato,
        ];
        for _ in 0..500 {
            let mut burger = Burger::new();
            for _ in 0..12 {
                burger.add(all[rng.gen_range(0, all.len())]);
            }
            let layers = burger.ingredients();
            let patties = layers.iter().filter(|kind| **kind == CookedPatty).count();
            assert!(patties <= 2);
            assert!(layers
                .iter()
                .enumerate()
                .all(|(index, kind)| *kind != CookedPatty || index < 3));
            if let Some(position) = layers.iter().position(|kind| *kind == TopBun) {
                assert_eq!(layers.len() - 1, position);
            }
        }
    }

    #[test]
    fn should_generate_complete_random_burgers() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let burger = Burger::random(&mut rng);
            let layers = burger.ingredients();
            assert_eq!(Some(&BottomBun), layers.first());
            assert_eq!(Some(&CookedPatty), layers.get(1));
            assert!(burger.is_complete());
            let toppings: Vec<_> = layers
                .iter()
                .filter(|kind| BURGER_TOPPINGS.contains(*kind))
                .collect();
            let mut sorted = toppings.clone();
            sorted.sort_by_key(|kind| BURGER_TOPPINGS.iter().position(|t| t == *kind));
            assert_eq!(sorted, toppings);
        }
    }

    #[test]
    fn should_ignore_order_and_repetitions_in_kinds() {
        let mut double = classic();
        double.add(CookedPatty);
        double.add(TopBun);
        let mut single = classic();
        single.add(TopBun);
        assert_eq!(single.kinds(), double.kinds());
    }
}
