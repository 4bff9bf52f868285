use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, render};
use crate::pipeline::Stage;

pub struct Stage4Output;

impl Stage4Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Output {
    fn name(&self) -> &'static str {
        "stage4_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.report = json_writer::build_report(ctx)?;

        let stdout = std::io::stdout();
        let mut w = std::io::BufWriter::new(stdout.lock());
        render::render(ctx, &mut w)?;
        w.flush()?;

        info!("stage4_output_ready");
        Ok(())
    }
}
