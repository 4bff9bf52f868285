use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::table;
use crate::pipeline::Stage;

pub struct Stage1Input;

impl Stage1Input {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Input {
    fn name(&self) -> &'static str {
        "stage1_input"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.dataset.is_none() {
            info!(source = %ctx.source_name(), "reading predictions");
            ctx.dataset = Some(table::read_predictions(ctx.input.as_deref())?);
        }
        let Some(dataset) = ctx.dataset.as_ref() else {
            anyhow::bail!("dataset missing after input stage");
        };

        let n_pos = dataset.n_pos();
        let n_neg = dataset.n_neg();
        info!(
            samples = dataset.len(),
            positives = n_pos,
            negatives = n_neg,
            "predictions loaded"
        );
        if n_pos == 0 || n_neg == 0 {
            let warning = format!(
                "single-class dataset ({} positives, {} negatives): rates will contain NaN/inf",
                n_pos, n_neg
            );
            warn!("{}", warning);
            ctx.warnings.push(warning);
        }
        Ok(())
    }
}
