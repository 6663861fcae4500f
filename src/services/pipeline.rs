use std::io::{Read, Write};

use pixel_grid::{Grid, Transform};

use crate::codec::ImageCodec;
use crate::error::PipelineError;
use crate::models::PipelineConfig;

/// Transform pipeline that runs configured steps: decode → steps → encode
pub struct TransformPipeline {
    steps: Vec<Transform>,
    /// Second grid for merge steps
    operand: Option<Grid>,
}

impl TransformPipeline {
    pub fn new(steps: Vec<Transform>) -> Self {
        Self {
            steps,
            operand: None,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.steps.clone())
    }

    /// Set the grid merged in by every merge step
    pub fn with_operand(mut self, operand: Grid) -> Self {
        self.operand = Some(operand);
        self
    }

    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    /// Run every step over `grid`, in order
    pub fn run(&self, grid: Grid) -> Result<Grid, PipelineError> {
        let mut grid = grid;
        for (index, &step) in self.steps.iter().enumerate() {
            tracing::debug!(
                index,
                step = %step,
                rows = grid.height(),
                width = grid.width(),
                "Running step"
            );
            grid = step
                .apply(grid, self.operand.as_ref())
                .map_err(|source| PipelineError::Step {
                    index,
                    step,
                    source,
                })?;
        }

        tracing::debug!(
            steps = self.steps.len(),
            rows = grid.height(),
            width = grid.width(),
            "Pipeline finished"
        );
        Ok(grid)
    }

    /// Decode `source`, run every step, and encode the result into `destination`
    pub fn process<C, R, W>(&self, codec: &C, source: R, destination: W) -> Result<(), PipelineError>
    where
        C: ImageCodec,
        R: Read,
        W: Write,
    {
        let grid = codec.decode(source)?;
        let grid = self.run(grid)?;
        codec.encode(&grid, destination)?;
        Ok(())
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}
