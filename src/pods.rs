/// Contiguous block of emitter indices belonging to one pod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterRange {
    pub start: usize,
    pub end: usize,
}

impl EmitterRange {
    /// Get the number of emitters in the block
    pub const fn count(self) -> usize {
        self.end - self.start
    }
}

/// First physical emitter index of a pod's block.
///
/// Pods sit on the strip back to back, so the mapping is linear.
/// There is no bounds check against the strip length here; the farm
/// keeps pod indices inside its geometry.
#[allow(clippy::cast_lossless)]
pub const fn pod_to_emitter_index(pod: u16, emitters_per_pod: u16) -> usize {
    pod as usize * emitters_per_pod as usize
}

/// Full emitter block for a pod.
#[allow(clippy::cast_lossless)]
pub const fn pod_range(pod: u16, emitters_per_pod: u16) -> EmitterRange {
    let start = pod_to_emitter_index(pod, emitters_per_pod);
    EmitterRange {
        start,
        end: start + emitters_per_pod as usize,
    }
}
