mod tests {
    use embassy_time::Duration;
    use ws2812_matrix_clock::animation::{
        AnimationEngine, AnimationError, AnimationId,
    };
    use ws2812_matrix_clock::Rgb;

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_connect_wifi_round_trip() {
        let expected: [u64; 5] = [
            0x0,
            0x800_0000_0000,
            0x801_8000_0000,
            0x801_8038_0000,
            0x801_8038_0780,
        ];

        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine
            .select_animation(AnimationId::ConnectWifi, &[WHITE])
            .unwrap();

        for cycle in 0..2 {
            for (index, mask) in expected.iter().enumerate() {
                let (_, frame, _) = engine.get_frame_and_color().unwrap();
                assert_eq!(frame, *mask, "cycle {cycle}, frame {index}");
            }
        }
    }

    #[test]
    fn test_one_shot_remaining_sequence() {
        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine
            .select_animation(AnimationId::Blink, &[WHITE])
            .unwrap();
        assert_eq!(engine.loops(), Some(false));

        // The engine itself always wraps; remaining == 0 is advisory and
        // stopping a one-shot is the caller's job.
        for _ in 0..2 {
            for expected in [4, 3, 2, 1, 0] {
                let (remaining, _, _) = engine.get_frame_and_color().unwrap();
                assert_eq!(remaining, expected);
            }
        }
    }

    #[test]
    fn test_gradient_interpolation() {
        let stops = [BLACK, Rgb { r: 100, g: 0, b: 0 }];

        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine
            .select_animation(AnimationId::ConnectBreathe, &stops)
            .unwrap();
        engine.set_steps(10);

        let mut colors = Vec::new();
        for _ in 0..20 {
            let (_, _, color) = engine.get_frame_and_color().unwrap();
            colors.push(color);
        }

        // 5th interpolated color: 0 + (100 - 0) * 5 / 10.
        assert_eq!(colors[4].r, 50);
        // End of the first segment lands exactly on the second stop.
        assert_eq!(colors[9].r, 100);
        // Second segment interpolates back toward the first stop.
        assert_eq!(colors[10].r, 90);
        assert_eq!(colors[19].r, 0);
    }

    #[test]
    fn test_single_stop_is_constant() {
        let teal = Rgb { r: 10, g: 20, b: 30 };

        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine
            .select_animation(AnimationId::Heartbeat, &[teal])
            .unwrap();

        for _ in 0..7 {
            let (_, _, color) = engine.get_frame_and_color().unwrap();
            assert_eq!(color, teal);
        }
    }

    #[test]
    fn test_color_and_frame_cycles_drift() {
        // Heartbeat has 3 frames; two stops at 2 steps give a 4-color
        // cycle. After 12 calls both cursors are back at their origin.
        let stops = [BLACK, Rgb { r: 40, g: 0, b: 0 }];

        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine
            .select_animation(AnimationId::Heartbeat, &stops)
            .unwrap();
        engine.set_steps(2);

        let first: Vec<_> = (0..12)
            .map(|_| engine.get_frame_and_color().unwrap())
            .collect();
        let second: Vec<_> = (0..12)
            .map(|_| engine.get_frame_and_color().unwrap())
            .collect();
        assert_eq!(first, second);

        // Within one pass the same frame appears with different colors.
        assert_eq!(first[0].1, first[3].1);
        assert_ne!(first[0].2, first[3].2);
    }

    #[test]
    fn test_failed_select_leaves_previous_animation_playing() {
        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine
            .select_animation(AnimationId::Heartbeat, &[WHITE])
            .unwrap();

        let (remaining, _, _) = engine.get_frame_and_color().unwrap();
        assert_eq!(remaining, 2);

        assert_eq!(
            engine.select_animation(AnimationId::Heartbeat, &[]),
            Err(AnimationError::EmptyColors)
        );

        // The old playback continues where it left off.
        let (remaining, _, _) = engine.get_frame_and_color().unwrap();
        assert_eq!(remaining, 1);
        assert_eq!(engine.period(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn test_select_raw_unknown_id() {
        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        assert_eq!(
            engine.select_animation_raw(200, &[WHITE]),
            Err(AnimationError::UnknownAnimation)
        );
        assert!(engine.get_frame_and_color().is_none());

        assert!(engine.select_animation_raw(0, &[WHITE]).is_ok());
        assert_eq!(engine.period(), Some(Duration::from_millis(400)));
    }

    #[test]
    fn test_too_many_color_stops() {
        let mut engine: AnimationEngine<2> = AnimationEngine::new();
        assert_eq!(
            engine.select_animation(AnimationId::Heartbeat, &[WHITE, BLACK, WHITE]),
            Err(AnimationError::TooManyColors)
        );
    }

    #[test]
    fn test_id_names() {
        assert_eq!(AnimationId::ConnectWifi.as_str(), "connect_wifi");
        assert_eq!(
            AnimationId::parse_from_str("heartbeat"),
            Some(AnimationId::Heartbeat)
        );
        assert_eq!(AnimationId::parse_from_str("nope"), None);
        assert_eq!(AnimationId::from_raw(3), Some(AnimationId::Blink));
    }
}
