//! Cocina completa: estaciones, cocineros, pedidos y estadisticas.
use std::{
    sync::{Arc, RwLock},
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, error, info};
use serde::Serialize;

use crate::{
    assembly_station::AssemblyStation,
    chef::{Chef, ChefView},
    constants::*,
    cutting_station::CuttingStation,
    delivery::DeliveryJudge,
    errors::KitchenError,
    filling_station::FillingStation,
    food::Food,
    fridge::Fridge,
    fryer::Fryer,
    grill::Grill,
    ingredient::{BeverageKind, IngredientKind, BEVERAGES},
    order::OrderView,
    order_board::OrderBoard,
    order_spawner::{OrderSpawner, SpawnerTimings},
    platter::Platter,
    station::{CookingTimings, Station, StationView},
    statistics::{KitchenStats, StatisticsPrinter},
};

const N_GRILLS: usize = 3;
const N_FRYERS: usize = 2;
const N_CUTTING_STATIONS: usize = 2;
const N_ASSEMBLY_STATIONS: usize = 5;
const N_PLATTERS: usize = 3;

const FRIDGES: [IngredientKind; 9] = [
    IngredientKind::BottomBun,
    IngredientKind::TopBun,
    IngredientKind::RawPatty,
    IngredientKind::CheeseSlice,
    IngredientKind::UnpreparedOnion,
    IngredientKind::UnpreparedLettuce,
    IngredientKind::UnpreparedTomato,
    IngredientKind::UnpreparedPickle,
    IngredientKind::Potato,
];

/// Lugar de la cocina con el que un cocinero puede interactuar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Grill(usize),
    Fryer(usize),
    CuttingStation(usize),
    FillingStation(usize),
    Fridge(usize),
    AssemblyStation(usize),
    Platter(usize),
    Trash,
    OrderBoard,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KitchenTimings {
    pub grill: CookingTimings,
    pub fryer: CookingTimings,
    pub cutting: Duration,
    pub filling: Duration,
    pub spawner: SpawnerTimings,
    pub statistics: Duration,
}

impl Default for KitchenTimings {
    fn default() -> Self {
        KitchenTimings {
            grill: CookingTimings::grill(),
            fryer: CookingTimings::fryer(),
            cutting: Duration::from_millis(CUTTING_TIME),
            filling: Duration::from_millis(FILLING_TIME),
            spawner: SpawnerTimings::default(),
            statistics: Duration::from_millis(STATISTICS_WAIT_IN_MS),
        }
    }
}

/// Todo lo que hace falta para dibujar un cuadro.
#[derive(Debug, Clone, Serialize)]
pub struct KitchenSnapshot {
    pub chefs: Vec<ChefView>,
    pub stations: Vec<StationView>,
    pub assembly: Vec<Vec<IngredientKind>>,
    pub orders: Vec<OrderView>,
    pub stats: KitchenStats,
}

pub struct Kitchen {
    chefs: Vec<Chef>,
    grills: Vec<Grill>,
    fryers: Vec<Fryer>,
    cutting_stations: Vec<CuttingStation>,
    filling_stations: Vec<FillingStation>,
    fridges: Vec<Fridge>,
    assembly_stations: Vec<AssemblyStation>,
    platters: Vec<Platter>,
    board: OrderBoard,
    spawner: OrderSpawner,
    judge: DeliveryJudge,
    stats: Arc<RwLock<KitchenStats>>,
    statistics_interval: Duration,
    statistics: Option<(Arc<StatisticsPrinter>, JoinHandle<()>)>,
}

fn chef_spawns() -> Vec<(f32, f32)> {
    (0..N_CHEFS)
        .map(|id| {
            let offset = (id as f32 - (N_CHEFS as f32 - 1.0) / 2.0) * CHEF_SIZE * 3.0;
            (SCREEN_WIDTH / 2.0 + offset, SCREEN_HEIGHT / 2.0)
        })
        .collect()
}

/// Le pasa a una estacion lo que tiene el cocinero en la mano. Si la
/// estacion lo rechaza vuelve a la mano.
fn hand_over<F>(chef: &mut Chef, put: F) -> bool
where
    F: FnOnce(Food) -> Result<(), Food>,
{
    let food = match chef.drop() {
        Some(food) => food,
        None => return false,
    };
    match put(food) {
        Ok(()) => true,
        Err(food) => {
            if chef.grab(food).is_err() {
                error!("[CHEF {}] Lost an item while handing it over", chef.id());
            }
            false
        }
    }
}

/// Toma lo que devuelve una estacion, solo si el cocinero tiene las manos libres.
fn take_from<F>(chef: &mut Chef, take: F) -> bool
where
    F: FnOnce() -> Option<Food>,
{
    if chef.carried_item().is_some() {
        return false;
    }
    match take() {
        Some(food) => chef.grab(food).is_ok(),
        None => false,
    }
}

impl Kitchen {
    pub fn new() -> Result<Kitchen, KitchenError> {
        Kitchen::with_timings(KitchenTimings::default())
    }

    pub fn with_timings(timings: KitchenTimings) -> Result<Kitchen, KitchenError> {
        let bounds = (SCREEN_WIDTH, SCREEN_HEIGHT);
        let chefs = chef_spawns()
            .into_iter()
            .enumerate()
            .map(|(id, center)| Chef::new(id, center, bounds))
            .collect();
        let grills = (0..N_GRILLS)
            .map(|id| Grill::new(id, timings.grill))
            .collect::<Result<Vec<Grill>, KitchenError>>()?;
        let fryers = (0..N_FRYERS)
            .map(|id| Fryer::new(id, timings.fryer))
            .collect::<Result<Vec<Fryer>, KitchenError>>()?;

        Ok(Kitchen {
            chefs,
            grills,
            fryers,
            cutting_stations: (0..N_CUTTING_STATIONS)
                .map(|id| CuttingStation::with_cutting_time(id, timings.cutting))
                .collect(),
            filling_stations: BEVERAGES
                .iter()
                .enumerate()
                .map(|(id, beverage)| FillingStation::with_filling_time(id, *beverage, timings.filling))
                .collect(),
            fridges: FRIDGES.iter().map(|kind| Fridge::new(*kind)).collect(),
            assembly_stations: (0..N_ASSEMBLY_STATIONS).map(AssemblyStation::new).collect(),
            platters: (0..N_PLATTERS).map(|_| Platter::new()).collect(),
            board: OrderBoard::new(),
            spawner: OrderSpawner::new(timings.spawner),
            judge: DeliveryJudge::new(),
            stats: Arc::new(RwLock::new(KitchenStats::default())),
            statistics_interval: timings.statistics,
            statistics: None,
        })
    }

    /// Arranca el generador de pedidos y el hilo de estadisticas.
    pub fn start(&mut self) {
        self.spawner.start();
        if self.statistics.is_none() {
            let printer = Arc::new(StatisticsPrinter::with_interval(
                self.stats.clone(),
                self.statistics_interval,
            ));
            let printer_clone = printer.clone();
            let handle = thread::spawn(move || {
                if let Err(err) = printer_clone.process_statistics() {
                    error!("[STATISTICS] Stopped reporting: {:?}", err);
                }
            });
            self.statistics = Some((printer, handle));
        }
        info!("[KITCHEN] Open");
    }

    pub fn stop(&mut self) {
        self.spawner.stop();
        if let Some((printer, handle)) = self.statistics.take() {
            printer.finish();
            if handle.join().is_err() {
                error!("[KITCHEN] Statistics thread panicked");
            }
        }
        info!("[KITCHEN] Closed");
    }

    /// Un cuadro del juego.
    pub fn update(&mut self) {
        let new_orders = self.spawner.get();
        if !new_orders.is_empty() {
            self.board.add_orders(new_orders);
        }
        let expired = self.board.update();
        for chef in self.chefs.iter_mut() {
            chef.tick();
        }
        let live_orders = self.board.len();
        update_stats(&self.stats, |stats| {
            stats.expired += expired.len() as u64;
            stats.live_orders = live_orders;
        });
    }

    pub fn move_chef(&mut self, chef: usize, dx: i8, dy: i8) {
        if let Some(chef) = self.chefs.get_mut(chef) {
            chef.move_intent(dx, dy);
        }
    }

    /// Uso de una estacion por parte de un cocinero. Devuelve si paso algo.
    pub fn interact(&mut self, chef_id: usize, target: Target) -> bool {
        let chef = match self.chefs.get_mut(chef_id) {
            Some(chef) => chef,
            None => return false,
        };
        let done = match target {
            Target::Grill(id) => match self.grills.get(id) {
                Some(grill) if grill.is_available() && chef.has_ingredient(&[IngredientKind::RawPatty]) => {
                    hand_over(chef, |food| grill.start(food))
                }
                Some(grill) if grill.has_cooked_item() || grill.has_overcooked_or_burnt_item() => {
                    take_from(chef, || grill.retrieve())
                }
                _ => false,
            },
            Target::Fryer(id) => match self.fryers.get(id) {
                Some(fryer) if fryer.is_available() => hand_over(chef, |food| fryer.start(food)),
                Some(fryer) => take_from(chef, || fryer.retrieve()),
                None => false,
            },
            Target::CuttingStation(id) => match self.cutting_stations.get(id) {
                Some(station) if station.is_available() => hand_over(chef, |food| station.start(food)),
                Some(station) => take_from(chef, || station.retrieve()),
                None => false,
            },
            Target::FillingStation(id) => match self.filling_stations.get(id) {
                Some(station) if chef.carried_item().is_none() => {
                    station.start() || take_from(chef, || station.retrieve())
                }
                _ => false,
            },
            Target::Fridge(id) => match self.fridges.get(id) {
                Some(fridge) => take_from(chef, || Some(fridge.take())),
                None => false,
            },
            Target::AssemblyStation(id) => match self.assembly_stations.get_mut(id) {
                Some(station) if chef.carried_item().is_some() => hand_over(chef, |food| station.add(food)),
                Some(station) => take_from(chef, || station.take_burger().map(Food::Burger)),
                None => false,
            },
            Target::Platter(id) => match self.platters.get_mut(id) {
                Some(platter) if chef.carried_item().is_some() => hand_over(chef, |food| platter.add(food)),
                Some(platter) => take_from(chef, || platter.take_meal().map(Food::Meal)),
                None => false,
            },
            Target::Trash => chef.drop().is_some(),
            Target::OrderBoard => {
                let order_id = match self.board.collides_with(&chef.rect()) {
                    Some(order) => order.id,
                    None => return false,
                };
                let delivery = match chef.carried_item() {
                    Some(Food::Meal(meal)) => {
                        self.judge.deliver(meal, order_id, &mut self.board, &self.spawner)
                    }
                    _ => None,
                };
                match delivery {
                    Some(delivery) => {
                        chef.drop();
                        let live_orders = self.board.len();
                        update_stats(&self.stats, |stats| {
                            stats.delivered += 1;
                            stats.tips += delivery.tip;
                            stats.live_orders = live_orders;
                        });
                        true
                    }
                    None => false,
                }
            }
        };
        if done {
            debug!("[KITCHEN] Chef {} used {:?}", chef_id, target);
        }
        done
    }

    /// Vuelve la cocina al estado inicial sin cerrarla.
    pub fn restart(&mut self) {
        for station in self.stations() {
            station.reset();
        }
        for station in self.assembly_stations.iter_mut() {
            station.reset();
        }
        for platter in self.platters.iter_mut() {
            platter.reset();
        }
        self.board.reset();
        self.spawner.reset();
        let bounds = (SCREEN_WIDTH, SCREEN_HEIGHT);
        self.chefs = chef_spawns()
            .into_iter()
            .enumerate()
            .map(|(id, center)| Chef::new(id, center, bounds))
            .collect();
        update_stats(&self.stats, |stats| *stats = KitchenStats::default());
        info!("[KITCHEN] Restarted");
    }

    pub fn snapshot(&self) -> KitchenSnapshot {
        KitchenSnapshot {
            chefs: self.chefs.iter().map(Chef::view).collect(),
            stations: self.stations().iter().map(|station| station.view()).collect(),
            assembly: self
                .assembly_stations
                .iter()
                .map(|station| station.burger().map_or_else(Vec::new, |burger| burger.ingredients().to_vec()))
                .collect(),
            orders: self.board.views(),
            stats: self.stats(),
        }
    }

    pub fn stats(&self) -> KitchenStats {
        match self.stats.read() {
            Ok(stats) => stats.clone(),
            Err(_) => {
                error!("[KITCHEN] Error while reading the stats");
                KitchenStats::default()
            }
        }
    }

    pub fn chef(&self, chef: usize) -> Option<&Chef> {
        self.chefs.get(chef)
    }

    pub fn board(&self) -> &OrderBoard {
        &self.board
    }

    pub fn spawner(&self) -> &OrderSpawner {
        &self.spawner
    }

    pub fn filling_station_for(&self, beverage: BeverageKind) -> Option<usize> {
        self.filling_stations
            .iter()
            .position(|station| station.beverage() == beverage)
    }

    pub fn fridge_for(&self, ingredient: IngredientKind) -> Option<usize> {
        self.fridges
            .iter()
            .position(|fridge| fridge.ingredient() == ingredient)
    }

    fn stations(&self) -> Vec<&dyn Station> {
        let mut stations: Vec<&dyn Station> = Vec::new();
        stations.extend(self.grills.iter().map(|s| s as &dyn Station));
        stations.extend(self.fryers.iter().map(|s| s as &dyn Station));
        stations.extend(self.cutting_stations.iter().map(|s| s as &dyn Station));
        stations.extend(self.filling_stations.iter().map(|s| s as &dyn Station));
        stations
    }
}

fn update_stats<F: FnOnce(&mut KitchenStats)>(stats: &RwLock<KitchenStats>, update: F) {
    match stats.write() {
        Ok(mut stats) => update(&mut *stats),
        Err(_) => error!("[KITCHEN] Error while writing the stats"),
    }
}

impl Drop for Kitchen {
    fn drop(&mut self) {
        if self.statistics.is_some() {
            self.stop();
        }
    }
}
