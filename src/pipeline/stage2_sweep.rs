use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::perf::PerformanceSweep;
use crate::pipeline::Stage;

pub struct Stage2Sweep;

impl Stage2Sweep {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Sweep {
    fn name(&self) -> &'static str {
        "stage2_sweep"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = ctx
            .dataset
            .as_ref()
            .context("dataset not loaded before Stage 2")?;
        let sweep = PerformanceSweep::from_dataset(dataset);
        info!(thresholds = sweep.len(), "sweep_ready");
        ctx.sweep = Some(sweep);
        Ok(())
    }
}
