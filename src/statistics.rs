use std::{
    sync::{Arc, Condvar, Mutex, RwLock},
    time::Duration,
};

use log::{error, info};
use serde::Serialize;

use crate::{constants::STATISTICS_WAIT_IN_MS, errors::KitchenError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KitchenStats {
    pub delivered: u64,
    pub expired: u64,
    pub tips: f64,
    pub live_orders: usize,
}

/// Hilo que cada cierto tiempo reporta como viene la partida.
pub struct StatisticsPrinter {
    stats: Arc<RwLock<KitchenStats>>,
    finish: Arc<(Mutex<bool>, Condvar)>,
    interval: Duration,
}

impl StatisticsPrinter {
    pub fn new(stats: Arc<RwLock<KitchenStats>>) -> StatisticsPrinter {
        StatisticsPrinter::with_interval(stats, Duration::from_millis(STATISTICS_WAIT_IN_MS))
    }

    pub fn with_interval(stats: Arc<RwLock<KitchenStats>>, interval: Duration) -> StatisticsPrinter {
        StatisticsPrinter {
            stats,
            finish: Arc::new((Mutex::new(false), Condvar::new())),
            interval,
        }
    }

    pub fn finish(&self) {
        let (lock, cond) = &*self.finish;
        if let Ok(mut finish) = lock.lock() {
            *finish = true;
            cond.notify_all();
            return;
        }
        error!("Error setting statistics thread to finish");
    }

    pub fn process_statistics(&self) -> Result<(), KitchenError> {
        let (lock, cond) = &*self.finish;
        loop {
            let (finish, _) = cond.wait_timeout_while(lock.lock()?, self.interval, |finish| !*finish)?;
            if *finish {
                self.print_statistics()?;
                return Ok(());
            }
            drop(finish);
            self.print_statistics()?;
        }
    }

    pub fn report(&self) -> Result<String, KitchenError> {
        let stats = self.stats.read()?;
        Ok(format!(
            "[STATISTICS] Delivered={} | Expired={} | Tips={:.2} | Live orders={}",
            stats.delivered, stats.expired, stats.tips, stats.live_orders
        ))
    }

    fn print_statistics(&self) -> Result<(), KitchenError> {
        info!("{}", self.report()?);
        Ok(())
    }
}
