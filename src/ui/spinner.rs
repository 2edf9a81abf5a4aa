use std::time::{Duration, Instant};

use crate::menu::{FULL_TURN, SelectionState};

/// Linear, endlessly repeating rotation driven by wall-clock time.
///
/// Each [`Spinner::tick`] converts the time since the previous tick into
/// degrees and feeds it to the selection state.
#[derive(Debug, Clone)]
pub struct Spinner {
    period: Duration,
    last_tick: Option<Instant>,
    paused: bool,
}

impl Spinner {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
            paused: false,
        }
    }

    /// Degrees covered in `elapsed` at this spinner's speed.
    pub fn degrees_for(&self, elapsed: Duration) -> f64 {
        if self.paused || self.period.is_zero() {
            return 0.0;
        }
        FULL_TURN * elapsed.as_secs_f64() / self.period.as_secs_f64()
    }

    /// Advance `state` by the time elapsed since the last tick.
    ///
    /// The first tick only records the start time.
    pub fn tick(&mut self, now: Instant, state: &mut SelectionState) {
        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last);
            state.advance_rotation(self.degrees_for(elapsed));
        }
        self.last_tick = Some(now);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume. Time spent paused is not replayed on resume.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::menu::MenuCatalog;

    fn state() -> SelectionState {
        SelectionState::new(Rc::new(MenuCatalog::seed()))
    }

    #[test]
    fn test_degrees_for_half_period() {
        let spinner = Spinner::new(Duration::from_secs(10));
        assert!((spinner.degrees_for(Duration::from_secs(5)) - 180.0).abs() < 1e-9);
        assert!((spinner.degrees_for(Duration::from_millis(50)) - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_period_does_not_spin() {
        let spinner = Spinner::new(Duration::ZERO);
        assert_eq!(spinner.degrees_for(Duration::from_secs(1)), 0.0);
    }

    #[test]
    fn test_first_tick_only_starts_clock() {
        let mut spinner = Spinner::new(Duration::from_secs(10));
        let mut state = state();
        spinner.tick(Instant::now(), &mut state);
        assert_eq!(state.rotation_phase(), 0.0);
    }

    #[test]
    fn test_tick_advances_state() {
        let mut spinner = Spinner::new(Duration::from_secs(10));
        let mut state = state();
        let start = Instant::now();

        spinner.tick(start, &mut state);
        spinner.tick(start + Duration::from_millis(2500), &mut state);
        assert!((state.rotation_phase() - 90.0).abs() < 1e-6);

        spinner.tick(start + Duration::from_millis(12_500), &mut state);
        assert!((state.rotation_phase() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_paused_spinner_holds_phase() {
        let mut spinner = Spinner::new(Duration::from_secs(10));
        let mut state = state();
        let start = Instant::now();
        spinner.tick(start, &mut state);

        assert!(spinner.toggle_pause());
        spinner.tick(start + Duration::from_secs(3), &mut state);
        assert_eq!(state.rotation_phase(), 0.0);

        assert!(!spinner.toggle_pause());
        spinner.tick(start + Duration::from_secs(4), &mut state);
        assert!((state.rotation_phase() - 36.0).abs() < 1e-6);
    }
}
