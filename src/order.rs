//! Pedido: un combo a entregar antes de que se acabe su tiempo.
use std::{
    sync::{Arc, Condvar, Mutex},
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, error};
use rand::Rng;
use serde::Serialize;

use crate::{
    color::Rgb,
    constants::{MAX_EXPIRATION_TIME, MIN_EXPIRATION_TIME, ORDER_TICK},
    errors::KitchenError,
    ingredient::{BeverageKind, IngredientKind},
    meal::Meal,
};

struct Countdown {
    remaining: Duration,
    stopped: bool,
}

type SharedCountdown = Arc<(Mutex<Countdown>, Condvar)>;

#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: u64,
    pub burger: Vec<IngredientKind>,
    pub beverage: Option<BeverageKind>,
    pub fries: bool,
    pub remaining_percentage: f64,
    pub countdown_color: Rgb,
    pub x: f32,
}

/// Cada pedido descuenta su tiempo restante en un hilo propio, midiendo el
/// tiempo real transcurrido, asi expira a tiempo sin importar los cuadros
/// por segundo.
pub struct Order {
    pub id: u64,
    requirement: Meal,
    expiration: Duration,
    countdown: SharedCountdown,
    ticker: Option<JoinHandle<()>>,
}

impl Order {
    /// Pedido al azar con una expiracion entre el minimo y el maximo configurados.
    pub fn new<R: Rng>(id: u64, rng: &mut R) -> Order {
        let requirement = Meal::random(rng);
        let expiration_ms = rng.gen_range(MIN_EXPIRATION_TIME as f64, MAX_EXPIRATION_TIME as f64);
        Order::with_requirement(id, requirement, Duration::from_secs_f64(expiration_ms / 1000.0))
    }

    pub fn with_requirement(id: u64, requirement: Meal, expiration: Duration) -> Order {
        let countdown = Countdown {
            remaining: expiration,
            stopped: false,
        };
        Order {
            id,
            requirement,
            expiration,
            countdown: Arc::new((Mutex::new(countdown), Condvar::new())),
            ticker: None,
        }
    }

    pub fn requirement(&self) -> &Meal {
        &self.requirement
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Arranca la cuenta regresiva. Llamarlo de nuevo no hace nada.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let countdown = self.countdown.clone();
        let id = self.id;
        self.ticker = Some(thread::spawn(move || {
            if let Err(err) = tick_countdown(&countdown, Duration::from_millis(ORDER_TICK)) {
                error!("[ORDER {}] Countdown stopped: {:?}", id, err);
            }
        }));
        debug!("[ORDER {}] Countdown started ({:?})", self.id, self.expiration);
    }

    /// Detiene la cuenta regresiva y espera a que termine su hilo.
    pub fn stop(&mut self) {
        self.signal_stop();
        if let Some(ticker) = self.ticker.take() {
            if ticker.join().is_err() {
                error!("[ORDER {}] Countdown thread panicked", self.id);
            }
        }
    }

    pub fn remaining(&self) -> Duration {
        match self.countdown.0.lock() {
            Ok(countdown) => countdown.remaining,
            Err(_) => Duration::from_secs(0),
        }
    }

    /// Porcentaje de tiempo restante, de 0.0 a 100.0
    pub fn remaining_percentage(&self) -> f64 {
        if self.expiration.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        (self.remaining().as_secs_f64() / self.expiration.as_secs_f64() * 100.0)
            .max(0.0)
            .min(100.0)
    }

    pub fn has_expired(&self) -> bool {
        self.remaining() == Duration::from_secs(0)
    }

    /// Verde con todo el tiempo, amarillo a la mitad, rojo al expirar.
    pub fn countdown_color(&self) -> Rgb {
        countdown_color(self.remaining_percentage())
    }

    pub fn view(&self, x: f32) -> OrderView {
        let remaining_percentage = self.remaining_percentage();
        OrderView {
            id: self.id,
            burger: self
                .requirement
                .burger()
                .map(|burger| burger.ingredients().to_vec())
                .unwrap_or_default(),
            beverage: self.requirement.beverage(),
            fries: self.requirement.fries().is_some(),
            remaining_percentage,
            countdown_color: countdown_color(remaining_percentage),
            x,
        }
    }

    fn signal_stop(&self) {
        let (lock, cond) = &*self.countdown;
        if let Ok(mut countdown) = lock.lock() {
            countdown.stopped = true;
            cond.notify_all();
            return;
        }
        error!("[ORDER {}] Error setting countdown to finish", self.id);
    }
}

impl Drop for Order {
    fn drop(&mut self) {
        self.signal_stop();
    }
}

fn tick_countdown(countdown: &SharedCountdown, tick: Duration) -> Result<(), KitchenError> {
    let (lock, cond) = &**countdown;
    let mut previous = Instant::now();
    loop {
        let (mut countdown, _) = cond.wait_timeout_while(lock.lock()?, tick, |countdown| !countdown.stopped)?;
        if countdown.stopped {
            return Ok(());
        }
        let now = Instant::now();
        countdown.remaining = countdown.remaining.saturating_sub(now - previous);
        previous = now;
        if countdown.remaining == Duration::from_secs(0) {
            return Ok(());
        }
    }
}

fn countdown_color(percentage: f64) -> Rgb {
    let percentage = percentage.max(0.0).min(100.0);
    if percentage >= 50.0 {
        let red = 255.0 * (100.0 - percentage) / 50.0;
        Rgb(red.round() as u8, 255, 0)
    } else {
        let green = 255.0 * percentage / 50.0;
        Rgb(255, green.round() as u8, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn order(expiration_ms: u64) -> Order {
        let mut rng = StdRng::seed_from_u64(1);
        Order::with_requirement(1, Meal::random(&mut rng), Duration::from_millis(expiration_ms))
    }

    #[test]
    fn should_sample_the_expiration_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for id in 0..50 {
            let order = Order::new(id, &mut rng);
            assert!(order.expiration() >= Duration::from_millis(MIN_EXPIRATION_TIME));
            assert!(order.expiration() <= Duration::from_millis(MAX_EXPIRATION_TIME));
            assert_eq!(100.0, order.remaining_percentage());
        }
    }

    #[test]
    fn should_not_age_before_starting() {
        let order = order(300);
        thread::sleep(Duration::from_millis(250));
        assert_eq!(100.0, order.remaining_percentage());
        assert!(!order.has_expired());
    }

    #[test]
    fn should_count_down_monotonically_until_expired() {
        let mut order = order(1_000);
        order.start();
        let mut previous = order.remaining_percentage();
        for _ in 0..10 {
            thread::sleep(Duration::from_millis(50));
            let current = order.remaining_percentage();
            assert!(current <= previous);
            previous = current;
        }
        assert!(!order.has_expired());
        thread::sleep(Duration::from_millis(900));
        assert!(order.has_expired());
        assert_eq!(0.0, order.remaining_percentage());
    }

    #[test]
    fn should_freeze_the_countdown_when_stopped() {
        let mut order = order(10_000);
        order.start();
        thread::sleep(Duration::from_millis(450));
        order.stop();
        let frozen = order.remaining();
        assert!(frozen < Duration::from_millis(10_000));
        thread::sleep(Duration::from_millis(450));
        assert_eq!(frozen, order.remaining());
    }

    #[test]
    fn should_go_from_green_to_red() {
        assert_eq!(Rgb(0, 255, 0), countdown_color(100.0));
        assert_eq!(Rgb(255, 255, 0), countdown_color(50.0));
        assert_eq!(Rgb(255, 0, 0), countdown_color(0.0));
    }
}
