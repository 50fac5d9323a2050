//! State machine definition
//!
//! What a scan does with each clock pulse is a function of the current
//! state only.

/// Scan phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CameraState {
    /// Scan clocks out stale pixels, starts the exposure, then waits
    #[default]
    AwaitingExposure,
    /// Scan digitises the exposed pixels into the frame buffer
    Capturing,
}

impl CameraState {
    /// Check if this scan records the exposure start tick
    pub fn starts_exposure(&self) -> bool {
        matches!(self, CameraState::AwaitingExposure)
    }

    /// Check if this scan samples pixels
    pub fn samples_pixels(&self) -> bool {
        matches!(self, CameraState::Capturing)
    }

    /// State for the next scan
    ///
    /// Phases strictly alternate; there are no other transitions.
    pub fn transition(self) -> Self {
        match self {
            CameraState::AwaitingExposure => CameraState::Capturing,
            CameraState::Capturing => CameraState::AwaitingExposure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(CameraState::default(), CameraState::AwaitingExposure);
    }

    #[test]
    fn test_alternates() {
        let mut state = CameraState::default();
        for i in 0..10 {
            let expected = if i % 2 == 0 {
                CameraState::AwaitingExposure
            } else {
                CameraState::Capturing
            };
            assert_eq!(state, expected);
            state = state.transition();
        }
    }

    #[test]
    fn test_phase_roles() {
        assert!(CameraState::AwaitingExposure.starts_exposure());
        assert!(!CameraState::AwaitingExposure.samples_pixels());
        assert!(CameraState::Capturing.samples_pixels());
        assert!(!CameraState::Capturing.starts_exposure());
    }
}
