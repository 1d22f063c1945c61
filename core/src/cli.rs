use std::io::Write;

use crate::config::OutputFormat;
use crate::dispatch::read_sample;
use crate::error::Result;
use crate::types::WorkoutSample;

/// Dispatch + beregning + formatering av én pakke.
pub fn render_package(sample: &WorkoutSample, format: OutputFormat) -> Result<String> {
    let info = read_sample(sample)?.show_training_info();
    let line = match format {
        OutputFormat::Text => info.get_message(),
        OutputFormat::Json => info.to_json()?,
    };
    Ok(line)
}

/// Skriver én linje per pakke, i rekkefølge. Stopper ved første feil;
/// linjer som allerede er skrevet blir stående.
pub fn print_training_report<W: Write>(
    packages: &[WorkoutSample],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let mut written = 0usize;
    for sample in packages {
        let line = render_package(sample, format)?;
        writeln!(out, "{line}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
