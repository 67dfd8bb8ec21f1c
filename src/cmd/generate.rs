//! Generate command CLI handler.

use super::GenerateArgs;
use crate::generator::{GenerateStats, Generator};
use crate::names::NamePool;
use crate::progress::ProgressWriter;
use anyhow::Context;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// JSON output for the generate command
#[derive(Serialize)]
struct GenerateJsonOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_file: Option<String>,
    seed: u64,
    items: usize,
    edits: usize,
    statistics: GenerateStatistics,
}

#[derive(Serialize)]
struct GenerateStatistics {
    #[serde(flatten)]
    stats: GenerateStats,
    elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    throughput_kb_per_sec: Option<f64>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    // Generate random seed if not provided
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    if args.verbose {
        eprintln!("Seed: {}", seed);
        eprintln!(
            "Generating {} passes × {} rows ({} statements)",
            args.edits,
            args.items,
            args.edits as u64 * args.items as u64
        );
    }

    let pb = if args.progress {
        let pb = ProgressBar::new(args.edits as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} passes ({percent}%) {msg}",
            )?
            .progress_chars("█▓▒░  "),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let mut generator = Generator::new(NamePool::presidential())
        .with_items(args.items)
        .with_edits(args.edits);

    if let Some(ref pb) = pb {
        let pb = pb.clone();
        generator = generator.with_pass_callback(move |passes| pb.set_position(passes as u64));
    }

    let sink: Box<dyn Write> = match args.output {
        Some(ref path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create directory: {}", parent.display())
                    })?;
                }
            }
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(io::stdout().lock()),
    };

    let sink: Box<dyn Write> = match pb {
        Some(ref pb) => {
            let pb = pb.clone();
            Box::new(ProgressWriter::new(sink, move |bytes| {
                pb.set_message(HumanBytes(bytes).to_string())
            }))
        }
        None => sink,
    };

    let start_time = Instant::now();
    let stats = generator
        .generate(&mut rng, sink)
        .context("failed to write SQL output")?;
    let elapsed = start_time.elapsed();

    if let Some(pb) = pb {
        pb.finish_with_message(HumanBytes(stats.bytes_written).to_string());
    }

    let throughput = if elapsed.as_secs_f64() > 0.0 {
        Some(stats.bytes_written as f64 / 1024.0 / elapsed.as_secs_f64())
    } else {
        None
    };

    if args.json {
        let output_json = GenerateJsonOutput {
            output_file: args.output.as_ref().map(|p| p.display().to_string()),
            seed,
            items: args.items,
            edits: args.edits,
            statistics: GenerateStatistics {
                stats,
                elapsed_secs: elapsed.as_secs_f64(),
                throughput_kb_per_sec: throughput,
            },
        };
        // SQL goes to stdout unless --output is set
        if args.output.is_some() {
            println!("{}", serde_json::to_string_pretty(&output_json)?);
        } else {
            eprintln!("{}", serde_json::to_string_pretty(&output_json)?);
        }
    } else if args.verbose || args.output.is_some() {
        if let Some(ref path) = args.output {
            eprintln!("\n✓ Wrote {}", path.display());
        }
        eprintln!("\nStatistics:");
        eprintln!("  Passes: {}", stats.passes);
        eprintln!("  Statements: {}", stats.statements);
        eprintln!(
            "  Bytes written: {:.2} KB",
            stats.bytes_written as f64 / 1024.0
        );
        eprintln!("  Elapsed time: {:.3?}", elapsed);
        if let Some(throughput) = throughput {
            eprintln!("  Throughput: {:.2} KB/s", throughput);
        }
    }

    Ok(())
}
