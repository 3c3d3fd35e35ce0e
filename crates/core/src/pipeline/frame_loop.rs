use std::time::Instant;

use thiserror::Error;

use crate::capture::domain::frame_source::FrameSource;
use crate::detection::domain::class_parameters::DetectionClass;
use crate::detection::domain::detection_set::DetectionSet;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::display::domain::display_sink::DisplaySink;
use crate::display::domain::viewport::Viewport;
use crate::overlay::domain::overlay_renderer::OverlayRenderer;
use crate::overlay::domain::overlay_stage::OverlayError;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::settings::domain::configuration::Configuration;
use crate::settings::infrastructure::configuration_store::ConfigurationStore;
use crate::shared::frame::Frame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Processing,
    Displaying,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The source had nothing ready; the display is unchanged.
    NoFrame,
    /// A frame was processed but not published because the display is frozen.
    Frozen,
    Displayed,
}

#[derive(Error, Debug)]
pub enum TickError {
    #[error("{class} detection failed: {source}")]
    Detection {
        class: DetectionClass,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("overlay rendering failed: {0}")]
    Render(#[from] OverlayError),
    #[error("display failed: {source}")]
    Display {
        #[source]
        source: Box<dyn std::error::Error>,
    },
}

/// One capture → detect → render → display pass per [`FrameLoop::tick`].
///
/// Each tick works from a single configuration snapshot taken at its start,
/// so toggles arriving mid-tick apply from the next tick on. A failed tick
/// leaves the previous output on screen.
pub struct FrameLoop {
    source: Box<dyn FrameSource>,
    detector: Box<dyn ObjectDetector>,
    renderer: OverlayRenderer,
    sink: Box<dyn DisplaySink>,
    store: ConfigurationStore,
    logger: Box<dyn PipelineLogger>,
    state: LoopState,
    fullscreen_shown: Option<bool>,
    ticks: usize,
    displayed: usize,
}

impl FrameLoop {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn ObjectDetector>,
        renderer: OverlayRenderer,
        sink: Box<dyn DisplaySink>,
        store: ConfigurationStore,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            source,
            detector,
            renderer,
            sink,
            store,
            logger,
            state: LoopState::Idle,
            fullscreen_shown: None,
            ticks: 0,
            displayed: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn tick(&mut self) -> Result<TickOutcome, TickError> {
        let previous = self.state;
        self.state = LoopState::Processing;
        self.ticks += 1;

        let result = self.process();
        self.state = match result {
            Ok(TickOutcome::Displayed) => {
                self.displayed += 1;
                LoopState::Displaying
            }
            _ => previous,
        };
        self.logger.progress(self.ticks, self.displayed);
        result
    }

    /// Emits the logger's end-of-run summary.
    pub fn finish(&self) {
        self.logger.summary();
    }

    fn process(&mut self) -> Result<TickOutcome, TickError> {
        let config = self.store.snapshot();

        let started = Instant::now();
        let Some(mut frame) = self.source.try_read_frame() else {
            return Ok(TickOutcome::NoFrame);
        };
        if config.mirror_input {
            frame.mirror_horizontal();
        }
        self.logger.timing("capture", elapsed_ms(started));

        let started = Instant::now();
        let detections = self.detect(&frame, &config)?;
        self.logger.timing("detect", elapsed_ms(started));
        for &class in DetectionClass::ALL {
            let count = detections.of_class(class).len() as f64;
            self.logger.metric(&format!("{class}s"), count);
        }

        let started = Instant::now();
        let logger = &mut self.logger;
        self.renderer
            .render_observed(&mut frame, &detections, &config, |stage, took| {
                logger.timing(&format!("render.{stage}"), took.as_secs_f64() * 1000.0);
            })?;
        self.logger.timing("render", elapsed_ms(started));

        let (surface_w, surface_h) = self.sink.surface_size();
        let viewport = Viewport::fit_width(frame.width(), frame.height(), surface_w, surface_h);

        if config.freeze_display {
            return Ok(TickOutcome::Frozen);
        }

        let started = Instant::now();
        if self.fullscreen_shown != Some(config.fullscreen) {
            self.sink.set_fullscreen(config.fullscreen);
            self.fullscreen_shown = Some(config.fullscreen);
        }
        self.sink
            .present(&frame, &viewport)
            .map_err(|source| TickError::Display { source })?;
        self.logger.timing("display", elapsed_ms(started));

        Ok(TickOutcome::Displayed)
    }

    fn detect(
        &mut self,
        frame: &Frame,
        config: &Configuration,
    ) -> Result<DetectionSet, TickError> {
        let mut detections = DetectionSet::default();
        for &class in DetectionClass::ALL {
            if class == DetectionClass::Mouth && !config.detect_mouths {
                continue;
            }
            let params = config.detection.for_class(class);
            let boxes = self
                .detector
                .detect(frame, class, params)
                .map_err(|source| TickError::Detection { class, source })?;
            detections.set_class(class, boxes);
        }
        Ok(detections)
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
