pub mod assembly_station;
pub mod burger;
pub mod chef;
pub mod color;
pub mod constants;
pub mod cutting_station;
pub mod delivery;
pub mod errors;
pub mod filling_station;
pub mod food;
pub mod fridge;
pub mod fryer;
pub mod geometry;
pub mod grill;
pub mod ingredient;
pub mod kitchen;
pub mod meal;
pub mod order;
pub mod order_board;
pub mod order_spawner;
pub mod orders_queue;
pub mod platter;
pub mod station;
pub mod statistics;

use std::{
    process, thread,
    time::{Duration, Instant},
};

use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use constants::{DEMO_DURATION, MAX_FPS};
use ingredient::IngredientKind;
use kitchen::{Kitchen, Target};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let mut kitchen = match Kitchen::new() {
        Ok(kitchen) => kitchen,
        Err(err) => {
            error!("[KITCHEN] Invalid configuration: {:?}", err);
            process::exit(1);
        }
    };
    kitchen.start();

    // Sin jugadores, el primer cocinero pone una hamburguesa en la parrilla
    if let Some(fridge) = kitchen.fridge_for(IngredientKind::RawPatty) {
        kitchen.interact(0, Target::Fridge(fridge));
        kitchen.interact(0, Target::Grill(0));
    }

    let frame = Duration::from_secs(1) / MAX_FPS;
    let started = Instant::now();
    while started.elapsed() < Duration::from_millis(DEMO_DURATION) {
        let frame_start = Instant::now();
        kitchen.update();
        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    match serde_json::to_string(&kitchen.snapshot()) {
        Ok(snapshot) => info!("[KITCHEN] {}", snapshot),
        Err(err) => error!("[KITCHEN] Could not render the snapshot: {}", err),
    }
    kitchen.stop();
}
