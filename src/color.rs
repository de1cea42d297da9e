//! Colores y degradados usados para mostrar el progreso de la coccion.
use serde::Serialize;

use crate::errors::KitchenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn channels(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// Degradado lineal de `from` hacia `to` en `steps` pasos discretos.
/// Cada canal de `to` tiene que ser menor o igual al de `from`, asi el
/// degradado nunca sube ni se sale de [0, 255].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    from: Rgb,
    to: Rgb,
    steps: u32,
}

impl ColorRamp {
    pub fn new(from: Rgb, to: Rgb, steps: u32) -> Result<ColorRamp, KitchenError> {
        let darkens = from
            .channels()
            .iter()
            .zip(to.channels().iter())
            .all(|(source, target)| target <= source);
        if !darkens {
            return Err(KitchenError::InvalidColorRamp { from, to });
        }
        Ok(ColorRamp {
            from,
            to,
            steps: steps.max(1),
        })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn start(&self) -> Rgb {
        self.from
    }

    pub fn end(&self) -> Rgb {
        self.to
    }

    /// Color luego de `step` pasos. Pasado el ultimo paso se queda en `to`.
    pub fn color_at(&self, step: u32) -> Rgb {
        let step = step.min(self.steps);
        let channel = |source: u8, target: u8| -> u8 {
            let delta = f64::from(source - target) * f64::from(step) / f64::from(self.steps);
            let value = (f64::from(source) - delta).round();
            value.max(f64::from(target)).min(f64::from(source)) as u8
        };
        Rgb(
            channel(self.from.0, self.to.0),
            channel(self.from.1, self.to.1),
            channel(self.from.2, self.to.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_a_ramp_that_gets_brighter() {
        let result = ColorRamp::new(Rgb(100, 100, 100), Rgb(100, 101, 0), 10);
        assert_eq!(
            Err(KitchenError::InvalidColorRamp {
                from: Rgb(100, 100, 100),
                to: Rgb(100, 101, 0)
            }),
            result
        );
    }

    #[test]
    fn should_start_and_end_at_the_given_colors() {
        let ramp = ColorRamp::new(Rgb(105, 65, 45), Rgb(45, 25, 15), 100).unwrap();
        assert_eq!(Rgb(105, 65, 45), ramp.color_at(0));
        assert_eq!(Rgb(45, 25, 15), ramp.color_at(100));
        assert_eq!(Rgb(45, 25, 15), ramp.color_at(250));
    }

    #[test]
    fn should_never_increase_a_channel() {
        let ramp = ColorRamp::new(Rgb(205, 105, 90), Rgb(105, 65, 45), 20).unwrap();
        let mut previous = ramp.color_at(0);
        for step in 1..=20 {
            let current = ramp.color_at(step);
            assert!(current.0 <= previous.0);
            assert!(current.1 <= previous.1);
            assert!(current.2 <= previous.2);
            previous = current;
        }
    }

    #[test]
    fn should_accept_a_flat_ramp() {
        let ramp = ColorRamp::new(Rgb(255, 0, 7), Rgb(255, 0, 7), 3).unwrap();
        assert_eq!(Rgb(255, 0, 7), ramp.color_at(2));
    }
}
