//! Sample and validate command handlers.

use crate::{OutputFormat, SampleArgs, SpaceArgs};
use anyhow::Context;
use sample_core::SearchSpace;
use sample_generator::{build_composite, AnySampler, RandomComposite, Trial, TrialGenerator};
use std::io::Write;

/// Run the sample command, writing trials to `out`.
pub fn run_sample<W: Write>(args: &SampleArgs, out: &mut W) -> anyhow::Result<()> {
    let path = &args.space.space;
    let generator = TrialGenerator::from_file(path, args.seed)
        .with_context(|| format!("Failed to load search space from {path:?}"))?;
    let mut generator = generator.with_start_index(args.start_index);

    tracing::info!(
        "Sampling {} trial(s) starting at index {}",
        args.count,
        args.start_index
    );
    tracing::info!("Seed: {} (pass --seed to reproduce)", generator.seed());

    let trials = generator.trials(args.count);
    match args.format {
        OutputFormat::Json => {
            for trial in trials {
                serde_json::to_writer(&mut *out, &trial)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Yaml => {
            let trials: Vec<Trial> = trials.collect();
            serde_yaml::to_writer(&mut *out, &trials)?;
        }
    }
    out.flush()?;

    tracing::info!("Sampling completed successfully");
    Ok(())
}

/// Run the validate command, listing every parameter and its sampler kind.
pub fn run_validate<W: Write>(args: &SpaceArgs, out: &mut W) -> anyhow::Result<()> {
    let path = &args.space;
    let space = SearchSpace::from_file(path)
        .with_context(|| format!("Failed to load search space from {path:?}"))?;
    let composite = build_composite(&space.parameters)
        .with_context(|| format!("Invalid search space {path:?}"))?;

    let mut count = 0;
    write_parameters(&composite, "", out, &mut count)?;
    out.flush()?;

    tracing::info!("Search space is valid: {} parameter(s)", count);
    Ok(())
}

fn write_parameters<W: Write>(
    composite: &RandomComposite,
    prefix: &str,
    out: &mut W,
    count: &mut usize,
) -> anyhow::Result<()> {
    for name in composite.names() {
        let path = format!("{prefix}{name}");
        match composite.get(name) {
            Some(AnySampler::Composite(inner)) => {
                write_parameters(inner, &format!("{path}."), out, count)?;
            }
            Some(sampler) => {
                writeln!(out, "{path}\t{}", sampler.kind())?;
                *count += 1;
            }
            None => {}
        }
    }
    Ok(())
}
