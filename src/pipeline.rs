//! Hand-off point to the image-processing pipeline

use crate::{config::display_config_summary, models::Configuration};
use anyhow::Context;
use std::io::Write;

/// Consumer of a resolved [`Configuration`].
///
/// The decoding, resizing and recompression work lives behind this trait;
/// argument resolution only ever hands over a fully validated configuration.
pub trait ImagePipeline {
    fn run(&mut self, config: &Configuration) -> anyhow::Result<()>;
}

/// Writes the resolved configuration summary to a sink
pub struct SummaryPipeline<W: Write> {
    out: W,
}

impl SummaryPipeline<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SummaryPipeline<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ImagePipeline for SummaryPipeline<W> {
    fn run(&mut self, config: &Configuration) -> anyhow::Result<()> {
        writeln!(self.out, "{}", display_config_summary(config))
            .context("Failed to write configuration summary")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }
}
