use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use contnum::core::model::{self, ContainerNumber, GenerateConfig};
use contnum::core::{calc_check_digit, check_transposition, GeneratorBuilder};
use contnum::util::fs;

use crate::cli::{Cli, Command, Format};

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            mut owners,
            owners_file,
            count,
            start,
            end,
            category,
            exclude_check_digit_10,
            exclude_transposition,
            seed,
            format,
            output,
        } => {
            if let Some(path) = &owners_file {
                owners.extend(fs::read_owner_codes(path)?);
            }
            let config = GenerateConfig {
                owners,
                count,
                start,
                end,
                category,
                exclude_check_digit_10,
                exclude_transposition,
                seed,
            };
            cmd_generate(&config, format, output.as_deref())
        }
        Command::Check { number } => cmd_check(&number),
    }
}

// ─── generate ───────────────────────────────────────────────────────────────

fn cmd_generate(config: &GenerateConfig, format: Format, output: Option<&Path>) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut builder = GeneratorBuilder::new(config.owners.iter().copied())
        .count(config.count)
        .category(config.category)
        .exclude_check_digit_10(config.exclude_check_digit_10)
        .exclude_transposition(config.exclude_transposition);
    if let Some(start) = config.start {
        builder = builder.start(start);
    }
    if let Some(end) = config.end {
        builder = builder.end(end);
    }

    let mut generator = builder
        .build(&mut rng)
        .context("invalid generator configuration")?;
    let requested = generator.target_count();

    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(fs::create_file(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(sink);

    match format {
        Format::Text => {
            for number in generator.by_ref() {
                writeln!(out, "{number}").context("failed to write output")?;
            }
        }
        Format::Json => {
            let numbers: Vec<ContainerNumber> = generator.by_ref().collect();
            serde_json::to_writer_pretty(&mut out, &numbers)
                .context("failed to serialize numbers")?;
            writeln!(out).context("failed to write output")?;
        }
    }
    out.flush().context("failed to write output")?;

    let produced = generator.generated();
    if produced < requested {
        tracing::warn!(produced, requested, "fewer numbers than requested");
    }
    tracing::info!(count = produced, "generated container numbers");
    Ok(())
}

// ─── check ──────────────────────────────────────────────────────────────────

fn cmd_check(input: &str) -> Result<()> {
    let parts =
        model::parse_parts(input).with_context(|| format!("'{input}' is not a container number"))?;
    let expected = calc_check_digit(parts.owner, parts.category, parts.serial) % 10;
    let number = ContainerNumber::new(parts.owner, parts.category, parts.serial, expected);

    let Some(given) = parts.check_digit else {
        println!("{number}");
        return Ok(());
    };

    if given != expected {
        bail!("check digit mismatch for {input}: got {given}, expected {expected} ({number})");
    }
    println!("{number}: valid");

    let lookalikes = check_transposition(parts.owner, parts.category, parts.serial, expected);
    if !lookalikes.is_empty() {
        println!("one adjacent swap away from other valid numbers:");
        for other in &lookalikes {
            println!("  {other}");
        }
    }
    Ok(())
}
