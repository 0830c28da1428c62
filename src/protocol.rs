use heapless::Vec;

use crate::color::PulseColour;

/// Error returned when a pulse group does not fit the protocol's
/// remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError;

/// Read-only view of one protocol step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Hold time in minutes
    pub time_min: f32,
    /// Brightness on the 0-100 scale
    pub brightness: u8,
    /// Emitter channel of the pulse, `None` while dark
    pub colour: Option<PulseColour>,
}

/// Time-stepped illumination protocol.
///
/// Three parallel sequences (time, brightness, colour) describe the
/// steps; a single pod set addresses the whole protocol. The parallel
/// sequences always have equal length: only [`add_pulse_group`] grows
/// them, two entries at a time.
///
/// `MAX_STEPS` bounds the step sequences, `MAX_PODS` the target set.
///
/// [`add_pulse_group`]: LightProtocol::add_pulse_group
#[derive(Debug, Default)]
pub struct LightProtocol<const MAX_STEPS: usize, const MAX_PODS: usize> {
    time_min: Vec<f32, MAX_STEPS>,
    brightness: Vec<u8, MAX_STEPS>,
    colour: Vec<Option<PulseColour>, MAX_STEPS>,
    target_pods: Vec<u16, MAX_PODS>,
}

impl<const MAX_STEPS: usize, const MAX_PODS: usize> LightProtocol<MAX_STEPS, MAX_PODS> {
    /// Create an empty protocol.
    pub const fn new() -> Self {
        Self {
            time_min: Vec::new(),
            brightness: Vec::new(),
            colour: Vec::new(),
            target_pods: Vec::new(),
        }
    }

    /// Number of steps in the protocol.
    pub fn len(&self) -> usize {
        self.time_min.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_min.is_empty()
    }

    /// Append a pulse group and retarget the protocol.
    ///
    /// Each of the `repeat` iterations appends a dark delay step of
    /// `delay_min` minutes followed by a pulse step of `pulse_min`
    /// minutes at `brightness` on the given emitter channel. A zero
    /// `repeat` appends nothing.
    ///
    /// Afterwards the target pod set is replaced with `pods`, never
    /// merged, so the whole protocol addresses the pods of the most
    /// recent call. Timelines for several pod subsets need one
    /// protocol per subset.
    ///
    /// Capacity is checked up front; on `Err` the protocol is
    /// unchanged.
    pub fn add_pulse_group(
        &mut self,
        delay_min: f32,
        pulse_min: f32,
        brightness: u8,
        colour: PulseColour,
        repeat: usize,
        pods: &[u16],
    ) -> Result<(), CapacityError> {
        let free_steps = MAX_STEPS - self.time_min.len();
        if repeat > free_steps / 2 || pods.len() > MAX_PODS {
            return Err(CapacityError);
        }

        for _ in 0..repeat {
            self.push_step(delay_min, 0, None);
            self.push_step(pulse_min, brightness, Some(colour));
        }

        self.target_pods.clear();
        let _ = self.target_pods.extend_from_slice(pods);

        Ok(())
    }

    /// Read one step, if `index` is in range.
    pub fn step(&self, index: usize) -> Option<Step> {
        Some(Step {
            time_min: *self.time_min.get(index)?,
            brightness: *self.brightness.get(index)?,
            colour: *self.colour.get(index)?,
        })
    }

    /// Hold times in minutes, one per step.
    pub fn time_minutes(&self) -> &[f32] {
        &self.time_min
    }

    /// Brightness levels (0-100), one per step.
    pub fn brightness_levels(&self) -> &[u8] {
        &self.brightness
    }

    /// Emitter channels, one per step (`None` for dark steps).
    pub fn colours(&self) -> &[Option<PulseColour>] {
        &self.colour
    }

    /// Pods the whole protocol applies to.
    pub fn target_pods(&self) -> &[u16] {
        &self.target_pods
    }

    fn push_step(&mut self, time_min: f32, brightness: u8, colour: Option<PulseColour>) {
        // Capacity was verified by the caller; these pushes cannot fail.
        let _ = self.time_min.push(time_min);
        let _ = self.brightness.push(brightness);
        let _ = self.colour.push(colour);
    }
}
