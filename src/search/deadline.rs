// Monitor de prazo: consultado à entrada de cada chamada recursiva da busca.

use crate::error::SearchTimeout;
use std::time::{Duration, Instant};

/// Consulta de tempo restante com limiar de aborto.
///
/// Construído uma vez por `choose_move` a partir do relógio do chamador;
/// o núcleo de busca nunca o reconstrói.
pub struct Deadline<'a> {
    time_left: &'a dyn Fn() -> Duration,
    threshold: Duration,
}

impl<'a> Deadline<'a> {
    pub fn new(time_left: &'a dyn Fn() -> Duration, threshold: Duration) -> Self {
        Deadline { time_left, threshold }
    }

    /// `Err(SearchTimeout)` quando resta menos tempo que o limiar ou o relógio
    /// já chegou a zero (o tempo restante satura, nunca fica negativo).
    #[inline]
    pub fn check(&self) -> Result<(), SearchTimeout> {
        let remaining = (self.time_left)();
        if remaining < self.threshold || remaining.is_zero() {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    pub fn remaining(&self) -> Duration {
        (self.time_left)()
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

/// Relógio de um lance: tempo restante até `limit` a partir da criação.
#[derive(Debug, Clone, Copy)]
pub struct MoveClock {
    start: Instant,
    limit: Duration,
}

impl MoveClock {
    pub fn start(limit: Duration) -> Self {
        MoveClock {
            start: Instant::now(),
            limit,
        }
    }

    /// Tempo restante, saturado em zero.
    pub fn time_left(&self) -> Duration {
        self.limit.saturating_sub(self.start.elapsed())
    }

    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_check_against_threshold() {
        let plenty = || Duration::from_millis(100);
        let deadline = Deadline::new(&plenty, Duration::from_millis(10));
        assert_eq!(deadline.check(), Ok(()));

        let short = || Duration::from_millis(9);
        let deadline = Deadline::new(&short, Duration::from_millis(10));
        assert_eq!(deadline.check(), Err(SearchTimeout));
    }

    #[test]
    fn test_exactly_at_threshold_is_not_expired() {
        let exact = || Duration::from_millis(10);
        let deadline = Deadline::new(&exact, Duration::from_millis(10));
        assert!(deadline.check().is_ok());
    }

    #[test]
    fn test_exhausted_clock_expires_even_with_zero_threshold() {
        let spent = MoveClock::start(Duration::ZERO);
        let time_left = || spent.time_left();
        let deadline = Deadline::new(&time_left, Duration::ZERO);
        assert_eq!(deadline.check(), Err(SearchTimeout));

        let plenty = || Duration::from_millis(1);
        let deadline = Deadline::new(&plenty, Duration::ZERO);
        assert!(deadline.check().is_ok());
    }

    #[test]
    fn test_monitor_is_queried_on_every_check() {
        let calls = Cell::new(0u32);
        let counting = || {
            calls.set(calls.get() + 1);
            Duration::from_secs(1)
        };
        let deadline = Deadline::new(&counting, Duration::ZERO);
        for _ in 0..5 {
            deadline.check().unwrap();
        }
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_move_clock_counts_down() {
        let clock = MoveClock::start(Duration::from_secs(60));
        assert!(clock.time_left() <= Duration::from_secs(60));
        assert!(!clock.expired());

        let spent = MoveClock::start(Duration::ZERO);
        assert_eq!(spent.time_left(), Duration::ZERO);
        assert!(spent.expired());
    }
}
