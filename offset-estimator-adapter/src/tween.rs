use crate::ScrollMotion;

/// An animated scroll from one offset to another, driven by the host's frame clock.
///
/// A tween is created *pending*: its clock starts on the first frame that samples it (see
/// [`Tween::start`]), not when the scroll was requested. Requests issued while the frame loop is
/// idle therefore still animate over their full duration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    /// `None` until the first frame.
    pub start_ms: Option<u64>,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Builds the tween for `motion`, or `None` when the motion is a jump.
    pub fn for_motion(from: f64, to: f64, motion: ScrollMotion) -> Option<Self> {
        match motion {
            ScrollMotion::Jump => None,
            ScrollMotion::Animate {
                duration_ms,
                easing,
            } => Some(Self::new(from, to, duration_ms, easing)),
        }
    }

    /// Starts the clock at `now_ms`. Later calls keep the first start time.
    pub fn start(&mut self, now_ms: u64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
    }

    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.start_ms
            .is_some_and(|start| now_ms.saturating_sub(start) >= self.duration_ms)
    }

    /// Offset at `now_ms`, floored at 0. A pending tween sits at `from`.
    pub fn sample(&self, now_ms: u64) -> f64 {
        let Some(start) = self.start_ms else {
            return self.from.max(0.0);
        };
        let elapsed = now_ms.saturating_sub(start);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        (self.from + (self.to - self.from) * eased).max(0.0)
    }
}

/// Animation curve for animated scroll motions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
