/// Источник текущей позиции воспроизведения.
///
/// Позиция запрашивается при каждом обращении и нигде не сохраняется.
/// `None` означает, что плеер еще не подключен.
pub trait PlaybackClock {
    /// Текущая позиция воспроизведения в секундах
    fn position(&self) -> Option<f64>;
}

impl PlaybackClock for f64 {
    fn position(&self) -> Option<f64> {
        Some(*self)
    }
}

impl PlaybackClock for Option<f64> {
    fn position(&self) -> Option<f64> {
        *self
    }
}

impl<C: PlaybackClock + ?Sized> PlaybackClock for &C {
    fn position(&self) -> Option<f64> {
        (**self).position()
    }
}
