//! Representacion de la cola de pedidos generados
use std::collections::VecDeque;

use crate::order::Order;

/// Cola de pedidos que todavia no llegaron al tablero. El campo `finished`
/// indica que el generador se detuvo: no se aceptan ni se entregan mas pedidos.
pub struct OrdersQueue {
    orders: VecDeque<Order>,
    pub finished: bool,
}

impl OrdersQueue {
    pub fn new() -> OrdersQueue {
        OrdersQueue {
            orders: VecDeque::new(),
            finished: false,
        }
    }

    pub fn push(&mut self, order: Order) {
        if self.finished {
            return;
        }
        self.orders.push_back(order);
    }

    pub fn pop(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Saca todos los pedidos en el orden en que llegaron.
    pub fn drain(&mut self) -> Vec<Order> {
        if self.finished {
            return Vec::new();
        }
        self.orders.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrdersQueue {
    fn default() -> Self {
        OrdersQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::Meal;
    use std::time::Duration;

    fn order(id: u64) -> Order {
        Order::with_requirement(id, Meal::new(), Duration::from_secs(60))
    }

    #[test]
    fn should_create_an_empty_order_queue() {
        let queue = OrdersQueue::new();
        assert_eq!(false, queue.finished);
        assert_eq!(true, queue.is_empty());
    }

    #[test]
    fn should_add_an_order_to_the_queue() {
        let mut queue = OrdersQueue::new();
        queue.push(order(1));
        assert_eq!(false, queue.finished);
        assert_eq!(false, queue.is_empty());
    }

    #[test]
    fn should_pop_an_order_from_the_queue() {
        let mut queue = OrdersQueue::new();
        queue.push(order(1));
        let order = queue.pop();
        assert_eq!(true, order.is_some());
        assert_eq!(true, queue.is_empty());
    }

    #[test]
    fn should_pop_and_return_none_from_the_queue() {
        let mut queue = OrdersQueue::new();
        let order = queue.pop();
        assert_eq!(true, order.is_none());
        assert_eq!(true, queue.is_empty());
    }

    #[test]
    fn should_drain_every_order_in_arrival_order() {
        let mut queue = OrdersQueue::new();
        queue.push(order(1));
        queue.push(order(2));
        let ids: Vec<u64> = queue.drain().iter().map(|order| order.id).collect();
        assert_eq!(vec![1, 2], ids);
        assert_eq!(true, queue.is_empty());
    }

    #[test]
    fn should_ignore_orders_once_finished() {
        let mut queue = OrdersQueue::new();
        queue.push(order(1));
        queue.finished = true;
        queue.push(order(2));
        assert_eq!(1, queue.len());
        assert_eq!(true, queue.drain().is_empty());
    }
}
