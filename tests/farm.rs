mod tests {
    use embassy_time::Duration;
    use optofarm::StripDriver;
    use optofarm::color::{COLOR_BLUE, PulseColour, scale_channels};
    use optofarm::farm::{Farm, FarmConfig, FarmError};
    use optofarm::protocol::LightProtocol;

    /// Strip double that keeps a pixel buffer and records every
    /// buffered write and flush.
    struct RecordingStrip {
        buffer: Vec<u32>,
        shown: Vec<u32>,
        writes: Vec<(usize, u32)>,
        shows: usize,
    }

    impl RecordingStrip {
        fn new(len: usize) -> Self {
            Self {
                buffer: vec![0; len],
                shown: vec![0; len],
                writes: Vec::new(),
                shows: 0,
            }
        }
    }

    impl StripDriver for RecordingStrip {
        fn set_pixel(&mut self, index: usize, color: u32) {
            self.buffer[index] = color;
            self.writes.push((index, color));
        }

        fn show(&mut self) {
            self.shown = self.buffer.clone();
            self.shows += 1;
        }

        fn clear(&mut self) {
            self.buffer.fill(0);
        }
    }

    fn farm_4x3() -> Farm<RecordingStrip> {
        Farm::new(RecordingStrip::new(12), &FarmConfig::new(4, 3))
    }

    #[test]
    fn test_new_clears_and_flushes() {
        let farm = farm_4x3();
        assert_eq!(farm.pod_count(), 4);
        assert_eq!(farm.emitters_per_pod(), 3);
        assert_eq!(farm.strip().shows, 1);
        assert_eq!(farm.strip().shown, vec![0; 12]);
        assert!(farm.strip().writes.is_empty());
    }

    #[test]
    fn test_set_pod_writes_scaled_block() {
        let mut farm = farm_4x3();
        farm.set_pod(2, 80, COLOR_BLUE).unwrap();

        let scaled = scale_channels(COLOR_BLUE, 80);
        assert_eq!(
            farm.strip().writes,
            vec![(6, scaled), (7, scaled), (8, scaled)]
        );
        assert_eq!(farm.strip().shows, 2);
        assert_eq!(farm.strip().shown[5], 0);
        assert_eq!(farm.strip().shown[6], scaled);
        assert_eq!(farm.strip().shown[8], scaled);
        assert_eq!(farm.strip().shown[9], 0);
    }

    #[test]
    fn test_set_pod_out_of_range() {
        let mut farm = farm_4x3();
        assert_eq!(
            farm.set_pod(4, 50, COLOR_BLUE),
            Err(FarmError::PodOutOfRange)
        );
        assert!(farm.strip().writes.is_empty());
        assert_eq!(farm.strip().shows, 1);
    }

    #[test]
    fn test_write_step_side_effects() {
        let mut farm = farm_4x3();
        let mut protocol: LightProtocol<8, 4> = LightProtocol::new();
        protocol
            .add_pulse_group(1.0, 2.0, 80, PulseColour::Blue, 1, &[0, 1])
            .unwrap();

        // Pulse step: two pods, three emitters each, one flush per pod
        let hold = farm.write_step(&protocol, 1).unwrap();
        assert_eq!(hold, Duration::from_millis(120_000));
        assert_eq!(farm.strip().writes.len(), 6);
        assert_eq!(farm.strip().shows, 3);

        let scaled = scale_channels(COLOR_BLUE, 80);
        assert_eq!(farm.strip().writes[0], (0, scaled));
        assert_eq!(farm.strip().writes[5], (5, scaled));
    }

    #[test]
    fn test_write_delay_step_goes_dark() {
        let mut farm = farm_4x3();
        let mut protocol: LightProtocol<8, 4> = LightProtocol::new();
        protocol
            .add_pulse_group(1.0, 2.0, 80, PulseColour::Blue, 1, &[0, 1])
            .unwrap();

        let hold = farm.write_step(&protocol, 0).unwrap();
        assert_eq!(hold, Duration::from_millis(60_000));
        for &(_, color) in &farm.strip().writes {
            assert_eq!(color, 0);
        }
    }

    #[test]
    fn test_pulse_color_comes_from_config() {
        // The protocol asked for red, but execution applies the
        // configured pulse color
        let mut farm = farm_4x3();
        let mut protocol: LightProtocol<8, 4> = LightProtocol::new();
        protocol
            .add_pulse_group(1.0, 1.0, 100, PulseColour::Red, 1, &[0])
            .unwrap();

        farm.write_step(&protocol, 1).unwrap();
        assert_eq!(farm.strip().writes[0], (0, COLOR_BLUE));
    }

    #[test]
    fn test_write_step_out_of_range() {
        let mut farm = farm_4x3();
        let mut protocol: LightProtocol<8, 4> = LightProtocol::new();
        protocol
            .add_pulse_group(1.0, 2.0, 80, PulseColour::Blue, 1, &[0])
            .unwrap();

        assert_eq!(
            farm.write_step(&protocol, 2),
            Err(FarmError::StepOutOfRange)
        );
        assert!(farm.strip().writes.is_empty());
    }

    #[test]
    fn test_execute_step_returns_after_hold() {
        let mut farm = farm_4x3();
        let mut protocol: LightProtocol<8, 4> = LightProtocol::new();
        // Zero-length steps keep the blocking hold instantaneous
        protocol
            .add_pulse_group(0.0, 0.0, 60, PulseColour::Blue, 1, &[0, 2])
            .unwrap();

        farm.execute_step(&protocol, 0).unwrap();
        farm.execute_step(&protocol, 1).unwrap();
        assert_eq!(farm.strip().writes.len(), 12);
        assert_eq!(farm.strip().shows, 5);
    }

    #[test]
    fn test_reset_idempotent() {
        let mut farm = farm_4x3();
        farm.set_pod(0, 100, COLOR_BLUE).unwrap();
        farm.set_pod(3, 100, COLOR_BLUE).unwrap();

        farm.reset();
        let after_one = farm.strip().shown.clone();
        assert_eq!(after_one, vec![0; 12]);

        farm.reset();
        assert_eq!(farm.strip().shown, after_one);
    }
}
