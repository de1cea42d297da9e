//! Cocinero controlado por un jugador.
use serde::Serialize;

use crate::{
    color::Rgb,
    constants::{CHEF_SIZE, CHEF_SPEED},
    food::Food,
    geometry::Rect,
    ingredient::IngredientKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChefView {
    pub id: usize,
    pub position: (f32, f32),
    pub facing: Facing,
    pub carrying: Option<String>,
    pub carrying_color: Option<Rgb>,
}

pub struct Chef {
    id: usize,
    x: f32,
    y: f32,
    facing: Facing,
    walking: (i8, i8),
    bounds: (f32, f32),
    food: Option<Food>,
}

impl Chef {
    /// Crea un cocinero centrado en `center`, que no puede salir de
    /// (0, 0)..`bounds`.
    pub fn new(id: usize, center: (f32, f32), bounds: (f32, f32)) -> Chef {
        let mut chef = Chef {
            id,
            x: center.0 - CHEF_SIZE / 2.0,
            y: center.1 - CHEF_SIZE / 2.0,
            facing: Facing::Down,
            walking: (0, 0),
            bounds,
            food: None,
        };
        chef.clamp();
        chef
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Agarra la comida si tiene las manos libres; si no, la devuelve.
    pub fn grab(&mut self, food: Food) -> Result<(), Food> {
        if self.food.is_some() {
            return Err(food);
        }
        self.food = Some(food);
        Ok(())
    }

    pub fn drop(&mut self) -> Option<Food> {
        self.food.take()
    }

    pub fn carried_item(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn carries_meal(&self) -> bool {
        matches!(self.food, Some(Food::Meal(_)))
    }

    pub fn has_ingredient(&self, kinds: &[IngredientKind]) -> bool {
        self.food
            .as_ref()
            .and_then(Food::ingredient_kind)
            .map_or(false, |kind| kinds.contains(&kind))
    }

    /// Direccion en la que camina. Cada componente se recorta a -1, 0 o 1.
    pub fn move_intent(&mut self, dx: i8, dy: i8) {
        self.walking = (dx.signum(), dy.signum());
        self.facing = match self.walking {
            (_, -1) => Facing::Up,
            (_, 1) => Facing::Down,
            (1, _) => Facing::Right,
            (-1, _) => Facing::Left,
            _ => self.facing,
        };
    }

    /// Avanza un cuadro.
    pub fn tick(&mut self) {
        self.x += f32::from(self.walking.0) * CHEF_SPEED;
        self.y += f32::from(self.walking.1) * CHEF_SPEED;
        self.clamp();
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, CHEF_SIZE, CHEF_SIZE)
    }

    pub fn view(&self) -> ChefView {
        ChefView {
            id: self.id,
            position: self.position(),
            facing: self.facing,
            carrying: self.food.as_ref().map(|food| format!("{:?}", food)),
            carrying_color: self.food.as_ref().and_then(Food::color),
        }
    }

    fn clamp(&mut self) {
        self.x = self.x.max(0.0).min((self.bounds.0 - CHEF_SIZE).max(0.0));
        self.y = self.y.max(0.0).min((self.bounds.1 - CHEF_SIZE).max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::LEMONADE_COLOR, ingredient::BeverageKind};

    fn chef() -> Chef {
        Chef::new(1, (100.0, 100.0), (200.0, 200.0))
    }

    #[test]
    fn should_keep_the_first_item_when_grabbing_twice() {
        let mut chef = chef();
        assert!(chef.grab(Food::Ingredient(IngredientKind::Potato)).is_ok());
        assert_eq!(
            Err(Food::Ingredient(IngredientKind::TopBun)),
            chef.grab(Food::Ingredient(IngredientKind::TopBun))
        );
        assert!(chef.has_ingredient(&[IngredientKind::Potato]));
        assert_eq!(Some(&Food::Ingredient(IngredientKind::Potato)), chef.carried_item());
    }

    #[test]
    fn should_always_drop_what_it_carries() {
        let mut chef = chef();
        assert_eq!(None, chef.drop());
        chef.grab(Food::Ingredient(IngredientKind::RawPatty)).unwrap();
        assert_eq!(Some(Food::Ingredient(IngredientKind::RawPatty)), chef.drop());
        assert_eq!(None, chef.carried_item());
        assert!(!chef.has_ingredient(&[IngredientKind::RawPatty]));
    }

    #[test]
    fn should_walk_and_stay_inside_the_bounds() {
        let mut chef = chef();
        assert_eq!((80.0, 80.0), chef.position());
        chef.move_intent(1, 0);
        chef.tick();
        assert_eq!((82.0, 80.0), chef.position());
        assert_eq!(Facing::Right, chef.facing());
        for _ in 0..500 {
            chef.tick();
        }
        assert_eq!((160.0, 80.0), chef.position());
        chef.move_intent(-5, -1);
        assert_eq!(Facing::Up, chef.facing());
        for _ in 0..500 {
            chef.tick();
        }
        assert_eq!((0.0, 0.0), chef.position());
    }

    #[test]
    fn should_show_what_it_carries() {
        let mut chef = chef();
        assert_eq!(None, chef.view().carrying_color);
        chef.grab(Food::Beverage(BeverageKind::Lemonade)).unwrap();
        let view = chef.view();
        assert_eq!(Some(LEMONADE_COLOR), view.carrying_color);
        assert!(view.carrying.is_some());
    }

    #[test]
    fn should_keep_facing_when_stopping() {
        let mut chef = chef();
        chef.move_intent(-1, 0);
        chef.move_intent(0, 0);
        assert_eq!(Facing::Left, chef.facing());
        chef.tick();
        assert_eq!((80.0, 80.0), chef.position());
    }
}
