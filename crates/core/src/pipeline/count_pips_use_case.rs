use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::annotation::domain::annotation_renderer::AnnotationRenderer;
use crate::annotation::domain::annotations::Annotations;
use crate::detection::domain::die_locator::DieLocator;
use crate::detection::domain::grayscale::to_grayscale;
use crate::detection::domain::pip_counter::PipCounter;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_viewer::ImageViewer;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::pipeline_logger::{Metric, NullPipelineLogger, PipelineLogger, Stage};
use crate::shared::constants::OUTPUT_PREFIX;
use crate::shared::error::PipelineError;

/// Result of a successful annotated run.
#[derive(Clone, Debug, PartialEq)]
pub struct CountReport {
    pub output_path: PathBuf,
    /// Pip counts in the order the dice were processed (largest die first).
    pub die_counts: Vec<usize>,
    pub total: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CountOutcome {
    /// The input file does not exist; nothing was read or written.
    MissingInput { path: PathBuf },
    Counted(CountReport),
}

/// Single-image pip counting pipeline:
/// read → localize → count → annotate → write → (show).
pub struct CountPipsUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    locator: Box<dyn DieLocator>,
    counter: Box<dyn PipCounter>,
    renderer: Box<dyn AnnotationRenderer>,
    viewer: Option<Box<dyn ImageViewer>>,
    logger: Box<dyn PipelineLogger>,
}

impl CountPipsUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        locator: Box<dyn DieLocator>,
        counter: Box<dyn PipCounter>,
        renderer: Box<dyn AnnotationRenderer>,
    ) -> Self {
        Self {
            reader,
            writer,
            locator,
            counter,
            renderer,
            viewer: None,
            logger: Box::new(NullPipelineLogger),
        }
    }

    /// Opens the written image once the run succeeds.
    pub fn with_viewer(mut self, viewer: Box<dyn ImageViewer>) -> Self {
        self.viewer = Some(viewer);
        self
    }

    pub fn with_logger(mut self, logger: Box<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Counts the pips in `input_dir/file_name` and writes the annotated
    /// image to `output_dir/output_<file_name>`.
    pub fn execute(
        &mut self,
        input_dir: &Path,
        output_dir: &Path,
        file_name: &str,
    ) -> Result<CountOutcome, PipelineError> {
        let input_path = input_dir.join(file_name);
        if !input_path.is_file() {
            log::warn!("No image file found at {}", input_path.display());
            return Ok(CountOutcome::MissingInput { path: input_path });
        }

        let start = Instant::now();
        let image = self.reader.read(&input_path)?;
        self.logger.timing(Stage::Load, start.elapsed());

        let start = Instant::now();
        let gray = to_grayscale(&image);
        let dice = self.locator.locate(&gray)?;
        self.logger.timing(Stage::Localize, start.elapsed());
        self.logger.metric(Metric::Dice, dice.len());

        let start = Instant::now();
        let mut counts = Vec::with_capacity(dice.len());
        for (i, die) in dice.iter().enumerate() {
            let pips = self.counter.count(&gray, die);
            log::debug!("Die at {:?}: {pips} pips", die.center);
            counts.push(pips);
            self.logger.progress(i + 1, dice.len());
        }
        self.logger.timing(Stage::Count, start.elapsed());

        let annotations = Annotations::tally(dice.iter().zip(counts));
        self.logger.metric(Metric::Pips, annotations.total());

        let start = Instant::now();
        let annotated = self.renderer.render(&image, &annotations.draw_commands());
        self.logger.timing(Stage::Render, start.elapsed());

        let output_path = output_dir.join(format!("{OUTPUT_PREFIX}{file_name}"));
        let start = Instant::now();
        self.writer.write(&output_path, &annotated)?;
        self.logger.timing(Stage::Write, start.elapsed());

        if let Some(viewer) = &self.viewer {
            if let Err(e) = viewer.show(&output_path) {
                log::warn!("Could not open {}: {e}", output_path.display());
            }
        }

        self.logger.info(&format!("Total pips: {}", annotations.total()));
        self.logger.summary();

        Ok(CountOutcome::Counted(CountReport {
            output_path,
            die_counts: annotations.counts().to_vec(),
            total: annotations.total(),
        }))
    }
}
