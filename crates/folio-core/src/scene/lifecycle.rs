/// Lifecycle of the background renderer.
///
/// A failed initialization drops back to `Uninitialized` so the page keeps
/// working with a blank canvas; stopping the loop does the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererPhase {
    #[default]
    Uninitialized,
    Initializing,
    Running,
}

impl RendererPhase {
    /// Returns `false` (and stays put) unless currently `Uninitialized`.
    pub fn begin_init(&mut self) -> bool {
        if *self != RendererPhase::Uninitialized {
            return false;
        }
        *self = RendererPhase::Initializing;
        true
    }

    pub fn finish_init(&mut self, ok: bool) {
        if *self == RendererPhase::Initializing {
            *self = if ok {
                RendererPhase::Running
            } else {
                RendererPhase::Uninitialized
            };
        }
    }

    pub fn stop(&mut self) {
        *self = RendererPhase::Uninitialized;
    }

    pub fn is_running(self) -> bool {
        matches!(self, RendererPhase::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_init_returns_to_uninitialized() {
        let mut phase = RendererPhase::default();
        assert!(phase.begin_init());
        assert!(!phase.begin_init());
        phase.finish_init(false);
        assert_eq!(phase, RendererPhase::Uninitialized);
    }

    #[test]
    fn stop_during_init_discards_late_success() {
        let mut phase = RendererPhase::default();
        phase.begin_init();
        phase.stop();
        phase.finish_init(true);
        assert!(!phase.is_running());
    }
}
