use std::time::Duration;

use crossbeam_channel::{select, Receiver};

use crate::pipeline::frame_loop::{FrameLoop, TickOutcome};

/// Tally of tick outcomes over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: usize,
    pub displayed: usize,
    pub frozen: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunReport {
    fn record(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Displayed => self.displayed += 1,
            TickOutcome::Frozen => self.frozen += 1,
            TickOutcome::NoFrame => self.skipped += 1,
        }
    }
}

/// Drives a [`FrameLoop`] from a fixed-rate timer.
///
/// The timer channel holds at most one pending tick, so ticks that fall due
/// while a frame is still being processed are dropped rather than queued.
/// The run ends when `shutdown` receives a message or disconnects, or after
/// `max_ticks` ticks.
pub struct FrameLoopRunner {
    interval: Duration,
    max_ticks: Option<usize>,
}

impl FrameLoopRunner {
    pub fn new(interval: Duration, max_ticks: Option<usize>) -> Self {
        Self {
            interval,
            max_ticks,
        }
    }

    pub fn run(&self, frame_loop: &mut FrameLoop, shutdown: &Receiver<()>) -> RunReport {
        let ticker = crossbeam_channel::tick(self.interval);
        let mut report = RunReport::default();
        log::info!(
            "Frame loop started: every {}ms, {}",
            self.interval.as_millis(),
            self.max_ticks
                .map_or("until stopped".to_string(), |n| format!("{n} ticks"))
        );

        while self.max_ticks.map_or(true, |max| report.ticks < max) {
            select! {
                recv(shutdown) -> _ => {
                    log::info!("Shutdown requested after {} ticks", report.ticks);
                    break;
                }
                recv(ticker) -> _ => {
                    report.ticks += 1;
                    match frame_loop.tick() {
                        Ok(outcome) => report.record(outcome),
                        Err(e) => {
                            log::error!("Tick {} abandoned: {e}", report.ticks);
                            report.failed += 1;
                        }
                    }
                }
            }
        }

        frame_loop.finish();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::class_parameters::DetectionClass;
    use crate::pipeline::frame_loop::tests::{build_loop, RecordingSink, StubDetector, StubSource};
    use crate::settings::domain::configuration::Configuration;
    use crate::shared::frame::Frame;

    const FAST: Duration = Duration::from_millis(1);

    fn config() -> Configuration {
        Configuration {
            mirror_input: false,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_runs_requested_number_of_ticks() {
        let sink = RecordingSink::default();
        let (mut frame_loop, _) = build_loop(
            StubSource::endless(),
            StubDetector::default(),
            sink.clone(),
            config(),
        );
        let (_tx, rx) = crossbeam_channel::unbounded();

        let report = FrameLoopRunner::new(FAST, Some(3)).run(&mut frame_loop, &rx);

        assert_eq!(report.ticks, 3);
        assert_eq!(report.displayed, 3);
        assert_eq!(sink.presented.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_outcomes_tallied() {
        let frame = Frame::filled(8, 8, &[1, 2, 3], 0);
        let source = StubSource::new(vec![Some(frame), None]);
        let (mut frame_loop, _) = build_loop(
            source,
            StubDetector::default(),
            RecordingSink::default(),
            config(),
        );
        let (_tx, rx) = crossbeam_channel::unbounded();

        let report = FrameLoopRunner::new(FAST, Some(2)).run(&mut frame_loop, &rx);

        assert_eq!(
            report,
            RunReport {
                ticks: 2,
                displayed: 1,
                skipped: 1,
                ..RunReport::default()
            }
        );
    }

    #[test]
    fn test_errors_do_not_stop_loop() {
        let detector = StubDetector {
            fail_on: Some(DetectionClass::Face),
            ..Default::default()
        };
        let (mut frame_loop, _) = build_loop(
            StubSource::endless(),
            detector,
            RecordingSink::default(),
            config(),
        );
        let (_tx, rx) = crossbeam_channel::unbounded();

        let report = FrameLoopRunner::new(FAST, Some(4)).run(&mut frame_loop, &rx);

        assert_eq!(report.ticks, 4);
        assert_eq!(report.failed, 4);
    }

    #[test]
    fn test_shutdown_message_stops_before_first_tick() {
        let (mut frame_loop, _) = build_loop(
            StubSource::endless(),
            StubDetector::default(),
            RecordingSink::default(),
            config(),
        );
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(()).unwrap();

        let report =
            FrameLoopRunner::new(Duration::from_secs(3600), None).run(&mut frame_loop, &rx);

        assert_eq!(report.ticks, 0);
    }

    #[test]
    fn test_disconnected_shutdown_stops() {
        let (mut frame_loop, _) = build_loop(
            StubSource::endless(),
            StubDetector::default(),
            RecordingSink::default(),
            config(),
        );
        let (tx, rx) = crossbeam_channel::unbounded::<()>();
        drop(tx);

        let report =
            FrameLoopRunner::new(Duration::from_secs(3600), None).run(&mut frame_loop, &rx);

        assert_eq!(report, RunReport::default());
    }

    #[test]
    fn test_shutdown_from_another_thread() {
        let (mut frame_loop, _) = build_loop(
            StubSource::endless(),
            StubDetector::default(),
            RecordingSink::default(),
            config(),
        );
        let (tx, rx) = crossbeam_channel::unbounded();
        let stopper = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            tx.send(()).unwrap();
        });

        let report = FrameLoopRunner::new(FAST, None).run(&mut frame_loop, &rx);
        stopper.join().unwrap();

        assert!(report.ticks > 0);
        assert_eq!(report.ticks, frame_loop.ticks());
    }
}
