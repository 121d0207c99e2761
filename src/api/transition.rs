use super::{BarElement, BarGeometry};

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarTrack {
    from: BarGeometry,
    to: BarGeometry,
}

/// Timed interpolation from the displayed bars to the bars of a new view.
///
/// Bars present in both keep their slot and move; new slots enter from
/// zero length at their target band; surplus slots shrink to zero length
/// and are dropped when the transition ends.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarTransition {
    duration_ms: f64,
    elapsed_ms: f64,
    tracks: Vec<BarTrack>,
    axis_from: f64,
    axis_to: f64,
    /// Bars as they stand when the transition ends.
    targets: Vec<BarElement>,
    /// Bars interpolated for display, including exiting ones.
    animated: Vec<BarElement>,
}

impl BarTransition {
    pub(crate) fn new(
        displayed: &[BarElement],
        targets: Vec<BarElement>,
        axis_from: f64,
        axis_to: f64,
        duration_ms: f64,
    ) -> Self {
        let slots = displayed.len().max(targets.len());
        let mut tracks = Vec::with_capacity(slots);
        let mut animated = Vec::with_capacity(slots);

        for slot in 0..slots {
            let (track, element) = match (displayed.get(slot), targets.get(slot)) {
                (Some(current), Some(target)) => (
                    BarTrack {
                        from: current.geometry,
                        to: target.geometry,
                    },
                    BarElement {
                        geometry: current.geometry,
                        ..target.clone()
                    },
                ),
                (None, Some(target)) => {
                    let from = target.geometry.collapsed();
                    (
                        BarTrack {
                            from,
                            to: target.geometry,
                        },
                        BarElement {
                            geometry: from,
                            ..target.clone()
                        },
                    )
                }
                (Some(current), None) => (
                    BarTrack {
                        from: current.geometry,
                        to: current.geometry.collapsed(),
                    },
                    current.clone(),
                ),
                (None, None) => continue,
            };
            tracks.push(track);
            animated.push(element);
        }

        Self {
            duration_ms,
            elapsed_ms: 0.0,
            tracks,
            axis_from,
            axis_to,
            targets,
            animated,
        }
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    #[must_use]
    pub(crate) fn remaining_ms(&self) -> f64 {
        (self.duration_ms - self.elapsed_ms).max(0.0)
    }

    /// Advances the clock and recomputes displayed geometry.
    pub(crate) fn step(&mut self, elapsed_ms: f64) {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.elapsed_ms += elapsed_ms;
        }
        let eased = ease_cubic_in_out(self.progress());
        for (element, track) in self.animated.iter_mut().zip(&self.tracks) {
            element.geometry = track.from.lerp(track.to, eased);
        }
    }

    pub(crate) fn complete(&mut self) {
        self.elapsed_ms = self.duration_ms;
        self.step(0.0);
    }

    #[must_use]
    pub(crate) fn displayed(&self) -> &[BarElement] {
        &self.animated
    }

    #[must_use]
    pub(crate) fn axis_max(&self) -> f64 {
        let eased = ease_cubic_in_out(self.progress());
        self.axis_from + (self.axis_to - self.axis_from) * eased
    }

    /// Final bars, exact target geometry, exiting slots removed.
    #[must_use]
    pub(crate) fn into_targets(self) -> Vec<BarElement> {
        self.targets
    }
}
