//! Screensaver session: palette re-rolls, cross-fades, and per-frame draw lists.
//!
//! The host owns the clock and calls [`Screensaver::frame`] from its animation
//! callback with the current time in seconds. The re-roll timer is polled from
//! that same call, so a re-roll and the frame that observes it can never
//! interleave. All session state, timer included, lives in a `Session` that
//! exists only while running; [`Screensaver::exit`] drops it, so nothing can
//! fire after teardown.

use crate::canvas::CanvasSize;
use crate::compositor::{Compositor, DrawList};
use crate::config::ScreensaverConfig;
use crate::palette::{ColorSequence, PaletteId};
use crate::prng::RandomSource;
use crate::selector::PaletteSelector;
use crate::transition::ColorTransition;
use tracing::debug;

/// Lifecycle state of a [`Screensaver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreensaverState {
    Idle,
    Running,
}

/// Fixed-period timer polled with the host's clock.
#[derive(Debug, Clone, Copy)]
struct RerollTimer {
    period: f64,
    next_fire: f64,
}

impl RerollTimer {
    fn armed(now: f64, period: f64) -> Self {
        Self {
            period,
            next_fire: now + period,
        }
    }

    /// Returns the deadline that fired, at most once per call.
    ///
    /// Missed periods collapse into a single firing at the latest boundary
    /// not after `now`; the next deadline is the first boundary after `now`.
    /// A non-positive period never fires.
    fn poll(&mut self, now: f64) -> Option<f64> {
        if self.period.is_nan() || self.period <= 0.0 || now < self.next_fire {
            return None;
        }
        let missed = ((now - self.next_fire) / self.period).floor();
        let fired_at = self.next_fire + missed * self.period;
        self.next_fire = fired_at + self.period;
        Some(fired_at)
    }
}

#[derive(Debug)]
struct Session {
    started_at: f64,
    transition: ColorTransition,
    fade_started_at: f64,
    timer: RerollTimer,
    history: Vec<PaletteId>,
}

/// Drives one gradient screensaver: `Idle -> Running -> Idle`.
#[derive(Debug)]
pub struct Screensaver<R> {
    palette: PaletteId,
    config: ScreensaverConfig,
    compositor: Compositor,
    selector: PaletteSelector<R>,
    session: Option<Session>,
}

impl<R: RandomSource> Screensaver<R> {
    /// A screensaver for `palette` with default settings.
    pub fn new(palette: PaletteId, rng: R) -> Self {
        Self::with_config(palette, ScreensaverConfig::default(), rng)
    }

    /// A screensaver with custom timings, jitter, and drift.
    pub fn with_config(palette: PaletteId, config: ScreensaverConfig, rng: R) -> Self {
        let compositor = Compositor::new(
            crate::blob::BlobSet::screensaver().with_amplitude(config.amplitude),
            crate::compositor::FrameStyle::Screensaver,
        );
        Self {
            palette,
            config,
            compositor,
            selector: PaletteSelector::new(rng).with_jitter(config.jitter),
            session: None,
        }
    }

    /// Replaces the palette selector, e.g. with an exact one for tests.
    pub fn with_selector(mut self, selector: PaletteSelector<R>) -> Self {
        self.selector = selector;
        self
    }

    pub fn palette(&self) -> PaletteId {
        self.palette
    }

    pub fn config(&self) -> &ScreensaverConfig {
        &self.config
    }

    pub fn state(&self) -> ScreensaverState {
        if self.session.is_some() {
            ScreensaverState::Running
        } else {
            ScreensaverState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Enters `Running` at time `now`: rolls the first palette, shows it
    /// steady, and arms the re-roll timer. Restarts if already running.
    pub fn start(&mut self, now: f64) {
        let picked = self.selector.pick(self.palette);
        let initial = self.selector.resolve(picked);
        debug!(palette = %picked, at = now, "screensaver started");
        self.session = Some(Session {
            started_at: now,
            transition: ColorTransition::new(initial),
            fade_started_at: now,
            timer: RerollTimer::armed(now, self.config.reroll_secs),
            history: vec![picked],
        });
    }

    /// Leaves `Running` and discards all session state.
    pub fn exit(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(rolls = session.history.len(), "screensaver exited");
        }
    }

    /// Produces the draw list for time `now`, or `None` when idle.
    ///
    /// Fires a due re-roll first, then advances any cross-fade, then
    /// renders with the time elapsed since [`start`](Self::start).
    pub fn frame(&mut self, now: f64, size: CanvasSize) -> Option<DrawList> {
        let colors = self.update(now)?;
        let elapsed = self.elapsed(now).unwrap_or(0.0);
        Some(self.compositor.render_frame(elapsed, size, colors.as_slice()))
    }

    /// Advances timers and transitions to `now` and returns the colors on
    /// screen, or `None` when idle.
    pub fn update(&mut self, now: f64) -> Option<ColorSequence> {
        let session = self.session.as_mut()?;

        if let Some(fired_at) = session.timer.poll(now) {
            // settle the running fade as it stood at the deadline, so the
            // snapshot taken by begin_transition doesn't depend on frame timing
            if !session.transition.is_steady() {
                let raw = (fired_at - session.fade_started_at) / self.config.transition_secs;
                session.transition.advance(raw.clamp(0.0, 1.0));
            }
            let picked = self.selector.pick(self.palette);
            let next = self.selector.resolve(picked);
            session.history.push(picked);
            session.transition.begin_transition(next);
            session.fade_started_at = fired_at;
            debug!(palette = %picked, at = fired_at, "palette re-rolled");
        }

        if !session.transition.is_steady() {
            let raw = (now - session.fade_started_at) / self.config.transition_secs;
            session.transition.advance(raw.clamp(0.0, 1.0));
        }

        Some(session.transition.current_colors())
    }

    /// Seconds since the session started (never negative), or `None` when idle.
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        self.session
            .as_ref()
            .map(|s| (now - s.started_at).max(0.0))
    }

    /// The transition engine of the running session.
    pub fn transition(&self) -> Option<&ColorTransition> {
        self.session.as_ref().map(|s| &s.transition)
    }

    /// Concrete palettes rolled this session, oldest first.
    pub fn history(&self) -> &[PaletteId] {
        self.session
            .as_ref()
            .map(|s| s.history.as_slice())
            .unwrap_or(&[])
    }

    /// When the re-roll timer fires next, or `None` when idle.
    pub fn next_reroll_at(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.timer.next_fire)
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::DrawCommand;
    use crate::palette::base_colors;
    use crate::prng::{ScriptedSource, Xorshift64};
    use crate::transition::TransitionPhase;
    use glam::DVec2;

    const SIZE: CanvasSize = CanvasSize::new(1920.0, 1080.0);

    fn ocean_saver() -> Screensaver<ScriptedSource> {
        Screensaver::new(PaletteId::OceanBlue, ScriptedSource::constant(0.5))
            .with_selector(PaletteSelector::exact(ScriptedSource::constant(0.5)))
    }

    #[test]
    fn starts_idle_and_renders_nothing() {
        let mut saver = ocean_saver();
        assert_eq!(saver.state(), ScreensaverState::Idle);
        assert!(saver.frame(0.0, SIZE).is_none());
        assert!(saver.transition().is_none());
        assert!(saver.history().is_empty());
    }

    #[test]
    fn start_seeds_current_and_next_with_the_same_sequence() {
        let mut saver = ocean_saver();
        saver.start(10.0);
        assert!(saver.is_running());
        let t = saver.transition().unwrap();
        assert_eq!(t.current(), t.next());
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.phase(), TransitionPhase::Steady);
        assert_eq!(saver.next_reroll_at(), Some(70.0));
    }

    #[test]
    fn ocean_blue_first_frame_end_to_end() {
        let mut saver = ocean_saver();
        saver.start(0.0);
        let list = saver.frame(0.0, SIZE).unwrap();
        assert_eq!(list.len(), 9);

        let base = base_colors(PaletteId::OceanBlue).unwrap();
        for (stop, color) in list[0].stops().iter().zip(base) {
            assert_eq!(stop.color.rgb(), color);
        }

        let DrawCommand::RadialGradient { center, .. } = &list[1] else {
            panic!("blob 0 must follow the background");
        };
        assert_eq!(*center, DVec2::new(0.0, 0.15 * SIZE.height));
    }

    #[test]
    fn one_reroll_after_sixty_seconds_then_steady_after_eight_more() {
        let mut saver = Screensaver::new(PaletteId::Random, Xorshift64::new(11));
        saver.start(0.0);

        for frame in 0..=3600 {
            saver.frame(frame as f64 / 60.0, SIZE);
        }
        let t = saver.transition().unwrap();
        assert_eq!(t.generation(), 1, "exactly one re-roll by t=60");
        assert_eq!(t.phase(), TransitionPhase::Transitioning);
        let passed = t.next().clone();

        for frame in 3601..=4080 {
            saver.frame(frame as f64 / 60.0, SIZE);
        }
        let t = saver.transition().unwrap();
        assert_eq!(t.generation(), 1);
        assert!(t.is_steady(), "fade finishes 8 s after the re-roll");
        assert_eq!(t.current(), &passed);
        assert_eq!(saver.history().len(), 2);
    }

    #[test]
    fn no_reroll_before_the_period() {
        let mut saver = ocean_saver();
        saver.start(0.0);
        saver.frame(59.999, SIZE);
        assert_eq!(saver.transition().unwrap().generation(), 0);
    }

    #[test]
    fn overdue_timer_fires_once_and_realigns() {
        let mut saver = ocean_saver();
        saver.start(0.0);
        saver.frame(185.0, SIZE);
        assert_eq!(saver.transition().unwrap().generation(), 1);
        assert_eq!(saver.next_reroll_at(), Some(240.0));
    }

    #[test]
    fn colors_move_halfway_at_mid_fade() {
        let mut saver = Screensaver::new(PaletteId::Random, Xorshift64::new(5));
        saver.start(0.0);
        let before = saver.update(59.0).unwrap();
        saver.update(60.0);
        let t = saver.transition().unwrap();
        let after = t.next().clone();
        let mid = saver.update(64.0).unwrap();
        // raw 0.5 eases to exactly 0.5
        assert_eq!(mid, before.lerp(&after, 0.5));
    }

    #[test]
    fn exit_releases_session_and_stops_timer() {
        let mut saver = ocean_saver();
        saver.start(0.0);
        saver.frame(61.0, SIZE);
        saver.exit();
        assert_eq!(saver.state(), ScreensaverState::Idle);
        assert!(saver.frame(121.0, SIZE).is_none());
        assert!(saver.next_reroll_at().is_none());
        assert!(saver.history().is_empty());
    }

    #[test]
    fn restart_begins_a_fresh_session() {
        let mut saver = ocean_saver();
        saver.start(0.0);
        saver.frame(60.0, SIZE);
        saver.exit();
        saver.start(500.0);
        let t = saver.transition().unwrap();
        assert_eq!(t.generation(), 0);
        assert_eq!(saver.history(), &[PaletteId::OceanBlue]);
        assert_eq!(saver.elapsed(530.0), Some(30.0));
        assert_eq!(saver.next_reroll_at(), Some(560.0));
    }

    #[test]
    fn time_before_start_counts_as_zero() {
        let mut saver = ocean_saver();
        saver.start(100.0);
        assert_eq!(saver.elapsed(90.0), Some(0.0));
        let early = saver.frame(90.0, SIZE).unwrap();
        let at_start = saver.frame(100.0, SIZE).unwrap();
        assert_eq!(early, at_start);
    }

    #[test]
    fn custom_config_changes_cadence() {
        let config = ScreensaverConfig {
            reroll_secs: 10.0,
            transition_secs: 2.0,
            ..ScreensaverConfig::default()
        };
        let mut saver = Screensaver::with_config(PaletteId::Aurora, config, Xorshift64::new(9));
        saver.start(0.0);
        saver.update(10.0);
        saver.update(12.0);
        saver.update(20.0);
        let t = saver.transition().unwrap();
        assert_eq!(t.generation(), 2);
        assert!(!t.is_steady());
    }

    #[test]
    fn overdue_reroll_fades_from_the_deadline() {
        let mut saver = ocean_saver();
        saver.start(0.0);
        saver.update(184.0);
        let t = saver.transition().unwrap();
        // fired for the 180 s boundary, so 4 s into an 8 s fade
        assert_eq!(t.progress(), 0.5);
    }

    #[test]
    fn skipping_past_a_reroll_mid_fade_keeps_the_previous_target() {
        let mut saver = Screensaver::new(PaletteId::Random, Xorshift64::new(3));
        saver.start(0.0);
        saver.update(60.0);
        let second = saver.transition().unwrap().next().clone();

        // from inside the first fade straight past the next deadline
        saver.update(63.0);
        saver.update(125.0);
        let t = saver.transition().unwrap();
        assert_eq!(t.generation(), 2);
        assert_eq!(t.current(), &second, "first fade settled before the snapshot");
    }

    #[test]
    fn sparse_updates_match_a_sixty_hertz_session() {
        let mut live = Screensaver::new(PaletteId::Random, Xorshift64::new(7));
        live.start(0.0);
        let live_frame = (0..=124 * 60)
            .map(|i| live.frame(i as f64 / 60.0, SIZE))
            .last()
            .flatten();

        let mut sparse = Screensaver::new(PaletteId::Random, Xorshift64::new(7));
        sparse.start(0.0);
        sparse.update(61.0);
        let sparse_frame = sparse.frame(124.0, SIZE);

        assert_eq!(live.history(), sparse.history());
        assert_eq!(live_frame, sparse_frame);
    }

    #[test]
    fn random_palette_history_holds_concrete_ids() {
        let mut saver = Screensaver::new(PaletteId::Random, Xorshift64::new(77));
        saver.start(0.0);
        for minute in 1..=5 {
            saver.update(minute as f64 * 60.0);
        }
        assert_eq!(saver.history().len(), 6);
        assert!(saver.history().iter().all(|id| !id.is_random()));
    }
}
