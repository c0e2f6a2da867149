#[cfg(test)]
mod tests {
    use crate::video::decoder::testing::FakeFrameSource;
    use crate::video::{TickOutcome, VideoPlayer};

    // 100 frames at 10 FPS with a 2 second seek step, so one seek is 20 frames
    fn create_test_player() -> VideoPlayer {
        VideoPlayer::new(Box::new(FakeFrameSource::new(100, 10.0)), 2.0)
    }

    fn advance(player: &mut VideoPlayer, frames: usize) {
        for _ in 0..frames {
            assert_eq!(player.tick(), TickOutcome::Frame);
        }
    }

    #[test]
    fn test_starts_paused() {
        let mut player = create_test_player();
        assert!(!player.is_playing());
        assert_eq!(player.play_button_label(), "Play");
        assert_eq!(player.progress(), 0.0);
        assert_eq!(player.tick(), TickOutcome::Idle);
        assert!(player.current_frame().is_none());
    }

    #[test]
    fn test_toggle_play_pause() {
        let mut player = create_test_player();

        player.toggle_play_pause();
        assert!(player.is_playing());
        assert_eq!(player.play_button_label(), "Pause");

        player.toggle_play_pause();
        assert!(!player.is_playing());
        assert_eq!(player.play_button_label(), "Play");

        // Pausing twice is harmless
        player.pause();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_tick_decodes_sequentially() {
        let mut player = create_test_player();
        player.play();

        advance(&mut player, 3);
        assert_eq!(player.current_frame().map(|f| f.index), Some(2));
        assert_eq!(player.progress(), 3.0);
        assert!((player.position_secs() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_new_frame_is_handed_out_once() {
        let mut player = create_test_player();
        player.play();
        player.tick();

        assert_eq!(player.take_new_frame().map(|f| f.index), Some(0));
        assert!(player.take_new_frame().is_none());
        // Still available for redraws
        assert!(player.current_frame().is_some());
    }

    #[test]
    fn test_paused_player_does_not_decode() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 5);
        player.pause();

        assert_eq!(player.tick(), TickOutcome::Idle);
        assert_eq!(player.current_frame().map(|f| f.index), Some(4));
    }

    #[test]
    fn test_end_of_stream_stops_playback() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 100);
        assert_eq!(player.progress(), 100.0);

        assert_eq!(player.tick(), TickOutcome::EndOfStream);
        assert!(!player.is_playing());
        assert_eq!(player.play_button_label(), "Play");
    }

    #[test]
    fn test_play_after_end_restarts() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 100);
        player.tick();

        player.play();
        assert!(player.is_playing());
        assert_eq!(player.progress(), 0.0);
        assert_eq!(player.tick(), TickOutcome::Frame);
        assert_eq!(player.current_frame().map(|f| f.index), Some(0));
    }

    #[test]
    fn test_seek_ignored_after_release() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 100);
        player.tick();

        player.seek_backward();
        assert_eq!(player.progress(), 100.0);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_seek_forward_while_playing() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 1);
        player.take_new_frame();

        player.seek_forward();
        assert_eq!(player.progress(), 21.0);
        // Playing seeks wait for the next tick instead of previewing
        assert!(player.take_new_frame().is_none());

        player.tick();
        assert_eq!(player.current_frame().map(|f| f.index), Some(21));
    }

    #[test]
    fn test_seek_forward_past_end_is_ignored() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 80);

        // 80 + 20 lands exactly on the frame count
        player.seek_forward();
        assert_eq!(player.progress(), 80.0);

        player.tick();
        assert_eq!(player.current_frame().map(|f| f.index), Some(80));
    }

    #[test]
    fn test_seek_backward_clamps_to_start() {
        let mut player = create_test_player();
        player.play();
        advance(&mut player, 30);

        player.seek_backward();
        assert_eq!(player.progress(), 10.0);

        player.seek_backward();
        assert_eq!(player.progress(), 0.0);
        player.tick();
        assert_eq!(player.current_frame().map(|f| f.index), Some(0));
    }

    #[test]
    fn test_paused_seek_shows_preview() {
        let mut player = create_test_player();

        player.seek_forward();
        assert!(!player.is_playing());
        assert_eq!(player.take_new_frame().map(|f| f.index), Some(20));

        // The preview does not consume the frame
        player.play();
        player.tick();
        assert_eq!(player.current_frame().map(|f| f.index), Some(20));
    }

    #[test]
    fn test_unknown_frame_count() {
        let mut player = VideoPlayer::new(Box::new(FakeFrameSource::new(0, 25.0)), 10.0);
        assert_eq!(player.frame_count(), 0);

        player.seek_forward();
        assert_eq!(player.progress(), 0.0);
        assert!(player.current_frame().is_none());
    }

    #[test]
    fn test_decode_failure_stops_playback() {
        let mut source = FakeFrameSource::new(100, 10.0);
        source.fail_at = Some(3);
        let mut player = VideoPlayer::new(Box::new(source), 2.0);
        player.play();
        advance(&mut player, 3);

        match player.tick() {
            TickOutcome::Failed(reason) => assert!(reason.contains("frame 3")),
            other => panic!("Unexpected outcome: {:?}", other),
        }
        assert!(!player.is_playing());
    }

    #[test]
    fn test_info_accessors() {
        let player = create_test_player();
        assert_eq!(player.frame_count(), 100);
        assert_eq!(player.duration_secs(), 10.0);
        assert_eq!(player.seek_amount(), 2.0);
        assert_eq!(player.info().fps, 10.0);
    }
}
