use crate::config::{AppConfig, Precision};
use crate::error::Result;
use crate::ui;
use atomaker::core::numeric::Scalar;
use atomaker::engine::config::ConstantsSource;
use std::io::{self, Write};
use tracing::warn;

pub fn run(config: &AppConfig) -> Result<()> {
    match config.precision {
        Precision::F32 => execute::<f32>(&config.constants),
        Precision::F64 => execute::<f64>(&config.constants),
    }
}

fn execute<T: Scalar>(source: &ConstantsSource) -> Result<()> {
    let (constants, report) = source.resolve::<T>()?;
    if let Some(report) = report.filter(|r| !r.is_complete()) {
        warn!(
            "Only {} of 7 constants were read; the rest keep their default values.",
            report.fields_loaded
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ui::render_constants(&mut out, &constants)?;
    out.flush()?;
    Ok(())
}
