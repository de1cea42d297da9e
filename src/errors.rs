use crate::color::Rgb;

#[derive(Debug, PartialEq)]
pub enum KitchenError {
    LockError,
    InvalidColorRamp { from: Rgb, to: Rgb },
}

impl<T> From<std::sync::PoisonError<T>> for KitchenError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        KitchenError::LockError
    }
}
