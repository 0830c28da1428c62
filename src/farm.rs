//! Farm execution engine.
//!
//! A [`Farm`] owns the strip handle and the pod geometry, and turns
//! protocol steps into per-pod writes followed by a blocking hold.

use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::color::{COLOR_BLUE, scale_channels};
use crate::pods::pod_range;
use crate::protocol::LightProtocol;
use crate::timebase::minutes_to_duration;

/// Errors from farm-level range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmError {
    /// Pod index is outside the farm's pod count
    PodOutOfRange,
    /// Step index is outside the protocol's length
    StepOutOfRange,
}

/// Configuration for a farm
#[derive(Debug, Clone, Copy)]
pub struct FarmConfig {
    /// Number of pods on the strip
    pub pods: u16,
    /// Emitters per pod
    pub emitters_per_pod: u16,
    /// Packed color applied during pulse steps.
    ///
    /// Every pulse uses this one reference color. Per-step colour
    /// markers are recorded in the protocol but not consulted during
    /// execution.
    pub pulse_color: u32,
}

impl FarmConfig {
    /// Create a config with the default blue pulse color.
    pub const fn new(pods: u16, emitters_per_pod: u16) -> Self {
        Self {
            pods,
            emitters_per_pod,
            pulse_color: COLOR_BLUE,
        }
    }
}

/// Farm - the execution engine
///
/// Drives `pods * emitters_per_pod` emitters at the head of the
/// strip. The strip must be at least that long; the farm does not
/// check the strip's real length.
pub struct Farm<D: StripDriver> {
    strip: D,
    pods: u16,
    emitters_per_pod: u16,
    pulse_color: u32,
}

impl<D: StripDriver> Farm<D> {
    /// Create a farm over a strip handle.
    ///
    /// The strip starts all-off: creation clears and flushes it.
    pub fn new(strip: D, config: &FarmConfig) -> Self {
        let mut farm = Self {
            strip,
            pods: config.pods,
            emitters_per_pod: config.emitters_per_pod,
            pulse_color: config.pulse_color,
        };
        farm.reset();
        farm
    }

    /// Number of pods
    pub const fn pod_count(&self) -> u16 {
        self.pods
    }

    /// Emitters per pod
    pub const fn emitters_per_pod(&self) -> u16 {
        self.emitters_per_pod
    }

    /// Get a reference to the strip handle.
    pub const fn strip(&self) -> &D {
        &self.strip
    }

    /// Write one color across a pod's emitter block and flush.
    ///
    /// `brightness` scales each channel of `color` as a percentage
    /// before the write. Values above 100 wrap through the codec's
    /// 8-bit mask.
    pub fn set_pod(&mut self, pod: u16, brightness: u8, color: u32) -> Result<(), FarmError> {
        if pod >= self.pods {
            return Err(FarmError::PodOutOfRange);
        }

        let scaled = scale_channels(color, brightness);
        let block = pod_range(pod, self.emitters_per_pod);
        for index in block.start..block.end {
            self.strip.set_pixel(index, scaled);
        }
        self.strip.show();

        #[cfg(feature = "esp32-log")]
        println!(
            "[Farm.set_pod] pod {} brightness {} -> {:#08x}",
            pod, brightness, scaled
        );

        Ok(())
    }

    /// Write one protocol step and return its hold time.
    ///
    /// Writes the step's brightness-scaled pulse color to every
    /// target pod in sequence order, flushing once per pod. The
    /// returned `Duration` is how long the step holds: callers that
    /// pace themselves wait it out, [`execute_step`] blocks for it.
    ///
    /// [`execute_step`]: Farm::execute_step
    pub fn write_step<const MAX_STEPS: usize, const MAX_PODS: usize>(
        &mut self,
        protocol: &LightProtocol<MAX_STEPS, MAX_PODS>,
        step: usize,
    ) -> Result<Duration, FarmError> {
        let current = protocol.step(step).ok_or(FarmError::StepOutOfRange)?;

        for &pod in protocol.target_pods() {
            self.set_pod(pod, current.brightness, self.pulse_color)?;
        }

        Ok(minutes_to_duration(current.time_min))
    }

    /// Execute one protocol step, blocking for its full hold time.
    ///
    /// The blocking wait is the only suspension point, and there is
    /// no cancellation once the hold begins. The farm keeps no
    /// current-step state: callers drive a protocol by calling this
    /// once per index in ascending order.
    pub fn execute_step<const MAX_STEPS: usize, const MAX_PODS: usize>(
        &mut self,
        protocol: &LightProtocol<MAX_STEPS, MAX_PODS>,
        step: usize,
    ) -> Result<(), FarmError> {
        let hold = self.write_step(protocol, step)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[Farm.execute_step] step {} holding {}ms",
            step,
            hold.as_millis()
        );

        block_for(hold);
        Ok(())
    }

    /// Turn every emitter off and flush.
    ///
    /// Idempotent; also runs at creation.
    pub fn reset(&mut self) {
        self.strip.clear();
        self.strip.show();
    }
}
