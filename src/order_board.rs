//! Tablero de pedidos en espera.
use log::info;

use crate::{
    constants::*,
    geometry::Rect,
    order::{Order, OrderView},
};

struct BoardEntry {
    order: Order,
    /// Posicion horizontal dibujada
    x: f32,
    /// Lugar asignado en el tablero
    slot: f32,
}

impl BoardEntry {
    fn rect(&self) -> Rect {
        Rect::new(self.x, BOARD_TOP, ORDER_WIDTH, ORDER_HEIGHT)
    }
}

/// Pedidos vivos en el orden en que llegaron. Solo el bucle principal lo modifica.
#[derive(Default)]
pub struct OrderBoard {
    entries: Vec<BoardEntry>,
}

impl OrderBoard {
    pub fn new() -> OrderBoard {
        OrderBoard::default()
    }

    /// Agrega los pedidos al final del tablero y arranca su cuenta regresiva.
    /// Entran desde el borde derecho de la pantalla y se deslizan a su lugar.
    pub fn add_orders(&mut self, orders: Vec<Order>) {
        for mut order in orders {
            order.start();
            info!("[BOARD] Order {} is waiting", order.id);
            self.entries.push(BoardEntry {
                order,
                x: SCREEN_WIDTH,
                slot: SCREEN_WIDTH,
            });
        }
        self.pack();
    }

    /// Saca un pedido (entregado o expirado) y cierra el hueco que deja.
    pub fn remove_order(&mut self, order_id: u64) -> Option<Order> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.order.id == order_id)?;
        let mut entry = self.entries.remove(index);
        entry.order.stop();
        self.pack();
        Some(entry.order)
    }

    /// Se llama una vez por cuadro: retira los pedidos expirados y desliza los
    /// demas hacia su lugar. Devuelve los identificadores de los expirados.
    pub fn update(&mut self) -> Vec<u64> {
        let expired: Vec<u64> = self
            .entries
            .iter()
            .filter(|entry| entry.order.has_expired())
            .map(|entry| entry.order.id)
            .collect();
        for order_id in &expired {
            info!("[BOARD] Order {} expired", order_id);
            self.remove_order(*order_id);
        }

        for entry in self.entries.iter_mut() {
            if entry.x > entry.slot {
                entry.x = (entry.x - ORDER_SLIDE_SPEED).max(entry.slot);
            }
        }
        expired
    }

    /// Pedido cuyo recuadro toca el del cocinero.
    pub fn collides_with(&self, area: &Rect) -> Option<&Order> {
        self.entries
            .iter()
            .find(|entry| entry.rect().overlaps(area))
            .map(|entry| &entry.order)
    }

    pub fn get(&self, order_id: u64) -> Option<&Order> {
        self.entries
            .iter()
            .find(|entry| entry.order.id == order_id)
            .map(|entry| &entry.order)
    }

    pub fn live_orders(&self) -> impl Iterator<Item = &Order> {
        self.entries.iter().map(|entry| &entry.order)
    }

    pub fn views(&self) -> Vec<OrderView> {
        self.entries
            .iter()
            .map(|entry| entry.order.view(entry.x))
            .collect()
    }

    pub fn slot_of(&self, order_id: u64) -> Option<f32> {
        self.entries
            .iter()
            .find(|entry| entry.order.id == order_id)
            .map(|entry| entry.slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detiene y descarta todos los pedidos.
    pub fn reset(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.order.stop();
        }
        self.entries.clear();
    }

    fn pack(&mut self) {
        let mut left = BOARD_LEFT_OFFSET;
        for entry in self.entries.iter_mut() {
            entry.slot = left;
            left += BOARD_SPACING;
        }
    }
}
