//! Juez de entregas: compara el combo entregado con lo pedido y calcula la propina.
use log::info;

use crate::{
    constants::{DELIVERY_ACCELERATION, TIP_BASE, TIP_PER_ITEM},
    meal::Meal,
    order::Order,
    order_board::OrderBoard,
    order_spawner::OrderSpawner,
};

pub struct Delivery {
    pub order: Order,
    pub tip: f64,
}

/// Compara por contenido: los tipos de ingrediente de la hamburguesa (sin
/// orden ni repeticiones), la presencia de papas y el tipo de bebida.
pub fn matches(meal: &Meal, requirement: &Meal) -> bool {
    let burgers_match = match (meal.burger(), requirement.burger()) {
        (Some(delivered), Some(requested)) => delivered.kinds() == requested.kinds(),
        (None, None) => true,
        _ => false,
    };
    burgers_match
        && meal.fries().is_some() == requirement.fries().is_some()
        && meal.beverage() == requirement.beverage()
}

/// `base + partes * bono + porcentaje / (10 * partes)`, redondeado a centavos.
pub fn tip(meal: &Meal, remaining_percentage: f64) -> f64 {
    let items = meal.item_count();
    if items == 0 {
        return TIP_BASE;
    }
    let items = items as f64;
    let tip = TIP_BASE + items * TIP_PER_ITEM + remaining_percentage / (10.0 * items);
    (tip * 100.0).round() / 100.0
}

pub struct DeliveryJudge {
    acceleration: f64,
}

impl DeliveryJudge {
    pub fn new() -> DeliveryJudge {
        DeliveryJudge::with_acceleration(DELIVERY_ACCELERATION)
    }

    pub fn with_acceleration(acceleration: f64) -> DeliveryJudge {
        DeliveryJudge { acceleration }
    }

    /// Entrega el combo al pedido. Si coincide, saca el pedido del tablero,
    /// calcula la propina y acelera la llegada de pedidos.
    pub fn deliver(
        &self,
        meal: &Meal,
        order_id: u64,
        board: &mut OrderBoard,
        spawner: &OrderSpawner,
    ) -> Option<Delivery> {
        let order = board.get(order_id)?;
        if !matches(meal, order.requirement()) {
            info!("[JUDGE] Meal does not match order {}", order_id);
            return None;
        }
        let tip = tip(meal, order.remaining_percentage());
        let order = board.remove_order(order_id)?;
        spawner.increase_acceleration(self.acceleration);
        info!("[JUDGE] Order {} delivered, tip {:.2}", order_id, tip);
        Some(Delivery { order, tip })
    }
}

impl Default for DeliveryJudge {
    fn default() -> Self {
        DeliveryJudge::new()
    }
}
