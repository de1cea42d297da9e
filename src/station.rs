//! Maquina de estados comun a las estaciones de la cocina (parrilla, freidora,
//! tabla de cortar, expendedora de bebidas).
//!
//! Cada estacion guarda a lo sumo un item. Al empezar, un hilo propio avanza la
//! transformacion paso a paso; el bucle principal solo consulta el estado. Sacar
//! el item o reiniciar la estacion incrementa la generacion del slot, y el hilo
//! que la vea cambiada termina sin escribir nada mas.
use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard},
    thread,
    time::{Duration, Instant},
};

use log::{debug, error};
use serde::Serialize;

use crate::{color::ColorRamp, color::Rgb, errors::KitchenError, food::Food};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StationState {
    Idle,
    Processing,
    Ready,
    Degrading,
    Spoiled,
}

/// Lo que necesita la capa de presentacion para dibujar una estacion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationView {
    pub name: String,
    pub state: StationState,
    /// Avance de la etapa actual, de 0.0 a 1.0
    pub progress: f32,
    pub color: Option<Rgb>,
}

/// Etapa temporizada de `steps` pasos de `tick` cada uno.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub tick: Duration,
    pub steps: u32,
    pub ramp: Option<ColorRamp>,
}

impl Phase {
    pub fn single(duration: Duration) -> Phase {
        Phase {
            tick: duration,
            steps: 1,
            ramp: None,
        }
    }

    pub fn ramped(total: Duration, ramp: ColorRamp) -> Phase {
        Phase {
            tick: total / ramp.steps(),
            steps: ramp.steps(),
            ramp: Some(ramp),
        }
    }

    pub fn duration(&self) -> Duration {
        self.tick * self.steps
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Overcooking {
    /// Tiempo que el item listo aguanta antes de empezar a arruinarse
    pub delay: Duration,
    pub phase: Phase,
    pub spoil: fn(Food) -> Food,
}

/// Como transforma una estacion el item que recibe.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub processing: Phase,
    pub finish: fn(Food) -> Food,
    pub overcooking: Option<Overcooking>,
}

/// Tiempos de una estacion que cocina y despues quema lo que tiene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookingTimings {
    pub processing: Duration,
    pub processing_steps: u32,
    pub overcooking_delay: Duration,
    pub overcooking: Duration,
    pub overcooking_steps: u32,
}

struct Slot {
    state: StationState,
    item: Option<Food>,
    color: Option<Rgb>,
    generation: u64,
    phase_started: Instant,
    phase_length: Duration,
}

impl Slot {
    fn enter(&mut self, state: StationState, length: Duration, color: Option<Rgb>) {
        self.state = state;
        self.phase_started = Instant::now();
        self.phase_length = length;
        self.color = color;
    }

    fn clear(&mut self) -> Option<Food> {
        self.generation += 1;
        self.enter(StationState::Idle, Duration::from_secs(0), None);
        self.item.take()
    }

    fn progress(&self) -> f32 {
        match self.state {
            StationState::Idle => 0.0,
            StationState::Ready | StationState::Spoiled => 1.0,
            StationState::Processing | StationState::Degrading => {
                if self.phase_length.as_secs_f32() <= 0.0 {
                    return 1.0;
                }
                (self.phase_started.elapsed().as_secs_f32() / self.phase_length.as_secs_f32())
                    .min(1.0)
            }
        }
    }

    fn transform(&mut self, transformation: fn(Food) -> Food) {
        self.item = self.item.take().map(transformation);
    }
}

type SharedSlot = Arc<(Mutex<Slot>, Condvar)>;

/// Estado compartido entre una estacion y su hilo de coccion.
pub struct StationCore {
    name: String,
    shared: SharedSlot,
}

impl StationCore {
    pub fn new(name: String) -> StationCore {
        let slot = Slot {
            state: StationState::Idle,
            item: None,
            color: None,
            generation: 0,
            phase_started: Instant::now(),
            phase_length: Duration::from_secs(0),
        };
        StationCore {
            name,
            shared: Arc::new((Mutex::new(slot), Condvar::new())),
        }
    }

    /// Deja el item en la estacion y lanza el hilo que lo transforma.
    /// Solo funciona si la estacion esta vacia; si no, devuelve el item.
    pub fn begin(&self, item: Food, recipe: Recipe) -> Result<(), Food> {
        let generation = {
            let mut slot = match self.lock() {
                Ok(slot) => slot,
                Err(_) => return Err(item),
            };
            if slot.state != StationState::Idle {
                return Err(item);
            }
            debug!("[{}] Starts processing {:?}", self.name, item);
            let color = recipe
                .processing
                .ramp
                .map(|ramp| ramp.start())
                .or_else(|| item.color());
            slot.item = Some(item);
            slot.generation += 1;
            slot.enter(
                StationState::Processing,
                recipe.processing.duration(),
                color,
            );
            slot.generation
        };

        let worker = CookingWorker {
            name: self.name.clone(),
            shared: self.shared.clone(),
            generation,
            recipe,
        };
        thread::spawn(move || {
            if let Err(err) = worker.run() {
                error!("[{}] Cooking cycle aborted: {:?}", worker.name, err);
            }
        });
        Ok(())
    }

    pub fn retrieve(&self) -> Option<Food> {
        let mut slot = self.lock().ok()?;
        match slot.state {
            StationState::Ready | StationState::Degrading | StationState::Spoiled => {
                let item = slot.clear();
                self.shared.1.notify_all();
                debug!("[{}] Item retrieved: {:?}", self.name, item);
                item
            }
            StationState::Idle | StationState::Processing => None,
        }
    }

    pub fn state(&self) -> StationState {
        match self.lock() {
            Ok(slot) => slot.state,
            Err(_) => StationState::Idle,
        }
    }

    pub fn is_available(&self) -> bool {
        match self.lock() {
            Ok(slot) => slot.state == StationState::Idle,
            Err(_) => false,
        }
    }

    pub fn view(&self) -> StationView {
        let (state, progress, color) = match self.lock() {
            Ok(slot) => (slot.state, slot.progress(), slot.color),
            Err(_) => (StationState::Idle, 0.0, None),
        };
        StationView {
            name: self.name.clone(),
            state,
            progress,
            color,
        }
    }

    /// Vacia la estacion sin importar en que estado este.
    pub fn reset(&self) {
        if let Ok(mut slot) = self.lock() {
            slot.clear();
            self.shared.1.notify_all();
            return;
        }
        error!("[{}] Error resetting station", self.name);
    }

    fn lock(&self) -> Result<MutexGuard<'_, Slot>, KitchenError> {
        self.shared.0.lock().map_err(|_| {
            error!("[{}] Error while taking the station lock", self.name);
            KitchenError::LockError
        })
    }
}

impl Drop for StationCore {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Hilo que lleva adelante un ciclo de coccion de una estacion.
struct CookingWorker {
    name: String,
    shared: SharedSlot,
    generation: u64,
    recipe: Recipe,
}

impl CookingWorker {
    fn run(&self) -> Result<(), KitchenError> {
        let processing = self.recipe.processing;
        if !self.run_phase(&processing, |slot| {
            slot.transform(self.recipe.finish);
            let delay = self
                .recipe
                .overcooking
                .map(|overcooking| overcooking.delay)
                .unwrap_or_default();
            let color = processing
                .ramp
                .map(|ramp| ramp.end())
                .or_else(|| slot.item.as_ref().and_then(Food::color));
            slot.enter(StationState::Ready, delay, color);
            debug!("[{}] Ready: {:?}", self.name, slot.item);
        })? {
            return Ok(());
        }

        let overcooking = match self.recipe.overcooking {
            Some(overcooking) => overcooking,
            None => return Ok(()),
        };

        let overcooking_phase = overcooking.phase;
        let started = self.step(overcooking.delay, |slot| {
            let color = overcooking_phase.ramp.map(|ramp| ramp.start()).or(slot.color);
            slot.enter(
                StationState::Degrading,
                overcooking_phase.duration(),
                color,
            );
            debug!("[{}] Starts overcooking", self.name);
        })?;
        if !started {
            return Ok(());
        }

        self.run_phase(&overcooking_phase, |slot| {
            slot.transform(overcooking.spoil);
            let color = overcooking_phase.ramp.map(|ramp| ramp.end()).or(slot.color);
            slot.enter(StationState::Spoiled, Duration::from_secs(0), color);
            debug!("[{}] Spoiled: {:?}", self.name, slot.item);
        })?;
        Ok(())
    }

    /// Avanza los pasos de la etapa pintando el degradado y aplica `last` al
    /// terminar. Devuelve false si el item dejo de ser el de este ciclo.
    fn run_phase<F: FnOnce(&mut Slot)>(&self, phase: &Phase, last: F) -> Result<bool, KitchenError> {
        let mut last = Some(last);
        for step in 1..=phase.steps {
            let still_ours = self.step(phase.tick, |slot| {
                if let Some(ramp) = phase.ramp {
                    slot.color = Some(ramp.color_at(step));
                }
                if step == phase.steps {
                    if let Some(last) = last.take() {
                        last(slot);
                    }
                }
            })?;
            if !still_ours {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Espera `duration` y aplica `apply` bajo el mismo lock, salvo que el
    /// item haya sido retirado o la estacion reiniciada mientras tanto.
    fn step<F: FnOnce(&mut Slot)>(&self, duration: Duration, apply: F) -> Result<bool, KitchenError> {
        let (lock, cond) = &*self.shared;
        let (mut slot, _) = cond.wait_timeout_while(lock.lock()?, duration, |slot| {
            slot.generation == self.generation
        })?;
        if slot.generation != self.generation {
            debug!("[{}] Cycle cancelled", self.name);
            return Ok(false);
        }
        apply(&mut *slot);
        Ok(true)
    }
}

/// Operaciones que la capa de presentacion usa sobre cualquier estacion.
pub trait Station {
    fn core(&self) -> &StationCore;

    fn retrieve(&self) -> Option<Food> {
        self.core().retrieve()
    }

    fn is_available(&self) -> bool {
        self.core().is_available()
    }

    fn state(&self) -> StationState {
        self.core().state()
    }

    fn view(&self) -> StationView {
        self.core().view()
    }

    fn reset(&self) {
        self.core().reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::IngredientKind;

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn to_cheese(_: Food) -> Food {
        Food::Ingredient(IngredientKind::CheeseSlice)
    }

    fn to_burnt(_: Food) -> Food {
        Food::Ingredient(IngredientKind::BurntPatty)
    }

    fn recipe() -> Recipe {
        Recipe {
            processing: Phase::single(millis(100)),
            finish: to_cheese,
            overcooking: Some(Overcooking {
                delay: millis(200),
                phase: Phase {
                    tick: millis(50),
                    steps: 4,
                    ramp: None,
                },
                spoil: to_burnt,
            }),
        }
    }

    fn potato() -> Food {
        Food::Ingredient(IngredientKind::Potato)
    }

    #[test]
    fn should_create_an_idle_station() {
        let core = StationCore::new("TEST".to_string());
        assert_eq!(StationState::Idle, core.state());
        assert!(core.is_available());
        assert_eq!(None, core.retrieve());
        assert_eq!(0.0, core.view().progress);
    }

    #[test]
    fn should_reject_a_second_item_while_processing() {
        let core = StationCore::new("TEST".to_string());
        assert!(core.begin(potato(), recipe()).is_ok());
        assert_eq!(
            Err(Food::Ingredient(IngredientKind::RawPatty)),
            core.begin(Food::Ingredient(IngredientKind::RawPatty), recipe())
        );
        assert_eq!(StationState::Processing, core.state());
        assert_eq!(None, core.retrieve());
        assert_eq!(StationState::Processing, core.state());
    }

    #[test]
    fn should_go_through_every_state_until_spoiled() {
        let core = StationCore::new("TEST".to_string());
        core.begin(potato(), recipe()).unwrap();
        thread::sleep(millis(200));
        assert_eq!(StationState::Ready, core.state());
        thread::sleep(millis(200));
        assert_eq!(StationState::Degrading, core.state());
        thread::sleep(millis(250));
        assert_eq!(StationState::Spoiled, core.state());
        assert_eq!(Some(to_burnt(potato())), core.retrieve());
        assert_eq!(StationState::Idle, core.state());
    }

    #[test]
    fn should_stop_degrading_once_the_item_is_retrieved() {
        let core = StationCore::new("TEST".to_string());
        core.begin(potato(), recipe()).unwrap();
        thread::sleep(millis(400));
        assert_eq!(StationState::Degrading, core.state());
        assert_eq!(Some(to_cheese(potato())), core.retrieve());
        thread::sleep(millis(300));
        assert_eq!(StationState::Idle, core.state());
        assert_eq!(None, core.retrieve());
    }

    #[test]
    fn should_discard_the_running_cycle_on_reset() {
        let core = StationCore::new("TEST".to_string());
        core.begin(potato(), recipe()).unwrap();
        core.reset();
        assert!(core.is_available());
        core.begin(Food::Ingredient(IngredientKind::TopBun), recipe()).unwrap();
        thread::sleep(millis(60));
        // el ciclo anterior no tiene que adelantar al nuevo
        assert_eq!(StationState::Processing, core.state());
    }

    #[test]
    fn should_report_partial_progress_while_processing() {
        let core = StationCore::new("TEST".to_string());
        core.begin(potato(), recipe()).unwrap();
        thread::sleep(millis(50));
        let view = core.view();
        assert_eq!(StationState::Processing, view.state);
        assert!(view.progress > 0.0 && view.progress < 1.0);
    }
}
