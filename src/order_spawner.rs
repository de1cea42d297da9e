//! Generador de pedidos. Corre en su propio hilo y deja los pedidos en una
//! cola compartida que el bucle principal vacia con `get`.
use std::{
    sync::{Arc, Condvar, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, error, info};
use rand::{thread_rng, Rng};

use crate::{
    constants::*,
    errors::KitchenError,
    order::Order,
    orders_queue::OrdersQueue,
};

/// Intervalos (minimo, maximo) entre pedidos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnerTimings {
    pub first_order: (Duration, Duration),
    pub between_orders: (Duration, Duration),
}

impl Default for SpawnerTimings {
    fn default() -> Self {
        SpawnerTimings {
            first_order: (
                Duration::from_millis(TIME_BEFORE_FIRST_ORDER),
                Duration::from_millis(TIME_BEFORE_FIRST_ORDER + FIRST_ORDER_JITTER),
            ),
            between_orders: (
                Duration::from_millis(MIN_TIME_BETWEEN_ORDERS),
                Duration::from_millis(MAX_TIME_BETWEEN_ORDERS),
            ),
        }
    }
}

struct SpawnerControl {
    paused: bool,
    stopped: bool,
    acceleration: f64,
    next_id: u64,
    /// Cambia en cada `reset` para descartar la espera en curso
    resets: u64,
}

struct SpawnerShared {
    queue: Mutex<OrdersQueue>,
    control: Mutex<SpawnerControl>,
    wakeup: Condvar,
}

pub struct OrderSpawner {
    shared: Arc<SpawnerShared>,
    timings: SpawnerTimings,
    producer: Option<JoinHandle<()>>,
}

impl OrderSpawner {
    pub fn new(timings: SpawnerTimings) -> OrderSpawner {
        OrderSpawner {
            shared: Arc::new(SpawnerShared {
                queue: Mutex::new(OrdersQueue::new()),
                control: Mutex::new(SpawnerControl {
                    paused: false,
                    stopped: true,
                    acceleration: 1.0,
                    next_id: 1,
                    resets: 0,
                }),
                wakeup: Condvar::new(),
            }),
            timings,
            producer: None,
        }
    }

    pub fn start(&mut self) {
        if self.producer.is_some() {
            return;
        }
        if let Err(err) = self.set_stopped(false) {
            error!("[SPAWNER] Could not start: {:?}", err);
            return;
        }
        let producer = OrderProducer {
            shared: self.shared.clone(),
            timings: self.timings,
        };
        self.producer = Some(thread::spawn(move || {
            if let Err(err) = producer.run() {
                error!("[SPAWNER] Stopped creating orders: {:?}", err);
            }
        }));
        info!("[SPAWNER] Started");
    }

    /// Detiene el hilo generador. Los pedidos que quedaron en la cola se descartan.
    pub fn stop(&mut self) {
        if let Err(err) = self.set_stopped(true) {
            error!("[SPAWNER] Error setting spawner to finish: {:?}", err);
        }
        self.shared.wakeup.notify_all();
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                error!("[SPAWNER] Producer thread panicked");
            }
            info!("[SPAWNER] Stopped");
        }
    }

    /// Vacia la cola de pedidos generados de una sola vez.
    pub fn get(&self) -> Vec<Order> {
        match self.shared.queue.lock() {
            Ok(mut queue) => queue.drain(),
            Err(_) => {
                error!("[SPAWNER] Error while taking the queue lock");
                Vec::new()
            }
        }
    }

    pub fn pause(&self) {
        self.update_control(|control| control.paused = true);
    }

    pub fn unpause(&self) {
        self.update_control(|control| control.paused = false);
    }

    pub fn is_paused(&self) -> bool {
        self.read_control(|control| control.paused).unwrap_or(false)
    }

    /// Multiplica el factor de aceleracion. El factor nunca baja.
    pub fn increase_acceleration(&self, factor: f64) {
        if factor < 1.0 {
            return;
        }
        self.update_control(|control| {
            control.acceleration *= factor;
            debug!("[SPAWNER] Acceleration is now {:.2}", control.acceleration);
        });
    }

    pub fn acceleration(&self) -> f64 {
        self.read_control(|control| control.acceleration).unwrap_or(1.0)
    }

    /// Vuelve el factor de aceleracion a 1 y descarta los pedidos sin entregar al
    /// tablero. La espera en curso vuelve a empezar como la del primer pedido.
    pub fn reset(&self) {
        self.update_control(|control| {
            control.acceleration = 1.0;
            control.resets += 1;
        });
        match self.shared.queue.lock() {
            Ok(mut queue) => queue.clear(),
            Err(_) => error!("[SPAWNER] Error while taking the queue lock"),
        }
        self.shared.wakeup.notify_all();
    }

    fn set_stopped(&self, stopped: bool) -> Result<(), KitchenError> {
        self.shared.control.lock()?.stopped = stopped;
        self.shared.queue.lock()?.finished = stopped;
        Ok(())
    }

    fn update_control<F: FnOnce(&mut SpawnerControl)>(&self, update: F) {
        match self.shared.control.lock() {
            Ok(mut control) => update(&mut *control),
            Err(_) => error!("[SPAWNER] Error while taking the control lock"),
        }
    }

    fn read_control<T, F: FnOnce(&SpawnerControl) -> T>(&self, read: F) -> Option<T> {
        self.shared.control.lock().ok().map(|control| read(&*control))
    }
}

impl Drop for OrderSpawner {
    fn drop(&mut self) {
        self.stop();
    }
}

enum Wait {
    Sent,
    Reset,
    Stopped,
}

struct OrderProducer {
    shared: Arc<SpawnerShared>,
    timings: SpawnerTimings,
}

impl OrderProducer {
    fn run(&self) -> Result<(), KitchenError> {
        let mut rng = thread_rng();
        let mut bounds = self.timings.first_order;
        loop {
            bounds = match self.wait_and_send(bounds, &mut rng)? {
                Wait::Sent => self.timings.between_orders,
                Wait::Reset => self.timings.first_order,
                Wait::Stopped => return Ok(()),
            };
        }
    }

    /// Espera un intervalo al azar y encola un pedido nuevo, salvo que el
    /// generador este en pausa. Un `reset` durante la espera la descarta.
    fn wait_and_send<R: Rng>(&self, bounds: (Duration, Duration), rng: &mut R) -> Result<Wait, KitchenError> {
        let control = self.shared.control.lock()?;
        let resets = control.resets;
        let delay = random_delay(bounds, control.acceleration, rng);
        let (mut control, _) = self
            .shared
            .wakeup
            .wait_timeout_while(control, delay, |control| {
                !control.stopped && control.resets == resets
            })?;
        if control.stopped {
            return Ok(Wait::Stopped);
        }
        if control.resets != resets {
            debug!("[SPAWNER] Wait discarded by a reset");
            return Ok(Wait::Reset);
        }
        if control.paused {
            return Ok(Wait::Sent);
        }
        let id = control.next_id;
        control.next_id += 1;

        // La cola se llena con el control tomado para que un reset no la
        // vacie entre medio.
        self.shared.queue.lock()?.push(Order::new(id, rng));
        info!("[SPAWNER] New order {}", id);
        Ok(Wait::Sent)
    }
}

fn random_delay<R: Rng>(bounds: (Duration, Duration), acceleration: f64, rng: &mut R) -> Duration {
    let (min, max) = bounds;
    let min_ms = min.as_millis() as u64;
    let max_ms = (max.as_millis() as u64).max(min_ms);
    let delay_ms = rng.gen_range(min_ms, max_ms + 1) as f64;
    Duration::from_secs_f64(delay_ms / acceleration.max(1.0) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn fast_timings() -> SpawnerTimings {
        SpawnerTimings {
            first_order: (Duration::from_millis(20), Duration::from_millis(30)),
            between_orders: (Duration::from_millis(40), Duration::from_millis(50)),
        }
    }

    #[test]
    fn should_scale_the_delay_with_the_acceleration() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = (Duration::from_millis(1_000), Duration::from_millis(1_000));
        assert_eq!(Duration::from_millis(1_000), random_delay(bounds, 1.0, &mut rng));
        assert_eq!(Duration::from_millis(500), random_delay(bounds, 2.0, &mut rng));
    }

    #[test]
    fn should_keep_the_delay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = (Duration::from_millis(20_000), Duration::from_millis(45_000));
        for _ in 0..100 {
            let delay = random_delay(bounds, 1.0, &mut rng);
            assert!(delay >= bounds.0 && delay <= bounds.1);
        }
    }

    #[test]
    fn should_produce_orders_with_increasing_ids() {
        let mut spawner = OrderSpawner::new(fast_timings());
        spawner.start();
        thread::sleep(Duration::from_millis(300));
        let orders = spawner.get();
        spawner.stop();

        assert!(orders.len() >= 2);
        let ids: Vec<u64> = orders.iter().map(|order| order.id).collect();
        assert_eq!(1, ids[0]);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(spawner.get().is_empty());
    }

    #[test]
    fn should_not_produce_orders_while_paused() {
        let mut spawner = OrderSpawner::new(fast_timings());
        spawner.pause();
        assert!(spawner.is_paused());
        spawner.start();
        thread::sleep(Duration::from_millis(200));
        assert!(spawner.get().is_empty());
        spawner.unpause();
        thread::sleep(Duration::from_millis(200));
        assert!(!spawner.get().is_empty());
        spawner.stop();
    }

    #[test]
    fn should_only_increase_the_acceleration_until_reset() {
        let spawner = OrderSpawner::new(SpawnerTimings::default());
        spawner.increase_acceleration(1.2);
        spawner.increase_acceleration(0.5);
        assert!((spawner.acceleration() - 1.2).abs() < 1e-9);
        spawner.increase_acceleration(2.0);
        assert!((spawner.acceleration() - 2.4).abs() < 1e-9);
        spawner.reset();
        assert_eq!(1.0, spawner.acceleration());
    }

    #[test]
    fn should_discard_queued_orders_on_reset_and_keep_counting_ids() {
        let mut spawner = OrderSpawner::new(fast_timings());
        spawner.start();
        thread::sleep(Duration::from_millis(200));
        spawner.pause();
        spawner.reset();
        assert!(spawner.get().is_empty());

        spawner.unpause();
        thread::sleep(Duration::from_millis(200));
        let orders = spawner.get();
        spawner.stop();
        assert!(!orders.is_empty());
        assert!(orders[0].id > 1);
    }

    #[test]
    fn should_restart_the_wait_at_the_normal_pace_after_reset() {
        let interval = (Duration::from_millis(400), Duration::from_millis(400));
        let mut spawner = OrderSpawner::new(SpawnerTimings {
            first_order: interval,
            between_orders: interval,
        });
        spawner.increase_acceleration(4.0);
        spawner.start();
        thread::sleep(Duration::from_millis(20));
        spawner.reset();

        thread::sleep(Duration::from_millis(150));
        assert!(spawner.get().is_empty());

        thread::sleep(Duration::from_millis(450));
        assert_eq!(1, spawner.get().len());
        spawner.stop();
    }

    #[test]
    fn should_stop_promptly_even_with_long_intervals() {
        let mut spawner = OrderSpawner::new(SpawnerTimings::default());
        spawner.start();
        let started = std::time::Instant::now();
        spawner.stop();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
