//! LVQ CLI - Learning Vector Quantization
//!
//! Trains a codebook on a synthetic dataset and reports how it did.

use clap::{Parser, Subcommand};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use log::error;
use lvq::synthetic::{clustered_dataset, random_dataset};
use lvq::{Classifier, Codebook, LvqConfig, LvqTrainer, MetricKind, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::ControlFlow;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lvq")]
#[command(version)]
#[command(about = "Learning Vector Quantization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a codebook on randomly generated labeled vectors
    Train {
        /// Vector count
        #[arg(short = 'n', long = "samples", default_value = "10")]
        samples: usize,

        /// Vector length
        #[arg(short = 'm', long, default_value = "4")]
        dimension: usize,

        /// Number of classes
        #[arg(short = 'c', long, default_value = "4")]
        classes: usize,

        /// Number of codebook vectors
        #[arg(short = 'v', long = "codebook-size", default_value = "4")]
        codebook_size: usize,

        /// Learning rate
        #[arg(short = 'a', long, allow_negative_numbers = true)]
        alpha: f32,

        /// Convergence tolerance (disabled when omitted)
        #[arg(short = 'e', long)]
        epsilon: Option<f32>,

        /// Maximum number of epochs
        #[arg(short = 'i', long = "max-iter", default_value = "100")]
        max_iter: usize,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Distance metric (euclidean, raw-difference)
        #[arg(long, default_value = "euclidean")]
        metric: MetricKind,

        /// Draw one cluster per class instead of uniform noise, with this spread
        #[arg(long)]
        clustered: Option<f32>,

        /// Run distance computations on all cores
        #[arg(short, long)]
        parallel: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Train {
            samples,
            dimension,
            classes,
            codebook_size,
            alpha,
            epsilon,
            max_iter,
            seed,
            metric,
            clustered,
            parallel,
        } => {
            let config = LvqConfig {
                dimension,
                classes,
                codebook_size,
                epsilon,
                max_iter,
                seed,
                metric,
                parallel,
                ..LvqConfig::new(samples, alpha)
            };
            train_codebook(config, clustered)
        }
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn train_codebook(config: LvqConfig, clustered: Option<f32>) -> Result<()> {
    let start_time = Instant::now();
    config.validate()?;

    println!("LVQ codebook training");
    println!(
        "   {} samples, {} dim, {} classes, {} codebook vectors, alpha={}, metric={}",
        config.samples,
        config.dimension,
        config.classes,
        config.codebook_size,
        config.learning_rate,
        config.metric
    );
    println!();

    let mut trainer = LvqTrainer::new(config.clone());

    // Step 1: Initialize codebook
    let codebook = trainer.initialize()?;
    println!("✓ Initialized {} codebook vectors", codebook.len());

    // Step 2: Generate data from a stream independent of the codebook's
    let mut data_rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        None => ChaCha8Rng::from_entropy(),
    };
    let dataset = match clustered {
        Some(spread) => clustered_dataset(
            config.samples,
            config.dimension,
            config.classes,
            spread,
            &mut data_rng,
        )?,
        None => random_dataset(config.samples, config.dimension, config.classes, &mut data_rng)?,
    };
    println!("✓ Generated {} labeled vectors", dataset.len());

    // Step 3: Train
    let bar_style = ProgressStyle::default_bar()
        .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} epochs")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ");
    let pb = ProgressBar::new(config.max_iter as u64);
    pb.set_style(bar_style);
    pb.set_message("Training...");

    let (codebook, report) = trainer.train_with_progress(codebook, &dataset, |stats| {
        pb.set_position(stats.epoch as u64);
        pb.set_message(format!("Training... update magnitude {:.6}", stats.update_magnitude));
        ControlFlow::Continue(())
    })?;
    pb.finish_and_clear();
    println!("✓ Training {} after {} epochs", report.reason, report.epochs);

    // Step 4: Evaluate
    let classifier = Classifier::new(config.metric).with_parallel(config.parallel);
    let accuracy = classifier.accuracy(&dataset, &codebook)?;
    let quantization_error = classifier.quantization_error(&dataset, &codebook)?;

    println!();
    println!("Training complete in {}", HumanDuration(start_time.elapsed()));
    println!("   Termination: {}", report.reason);
    if let Some(last) = report.last_epoch() {
        println!("   Last update magnitude: {:.6}", last.update_magnitude);
    }
    println!("   Accuracy: {:.2}%", accuracy * 100.0);
    println!("   Quantization error: {:.6}", quantization_error);
    print_codebook(&codebook);

    Ok(())
}

fn print_codebook(codebook: &Codebook) {
    println!("   Codebook:");
    for (i, weights) in codebook.iter().enumerate() {
        let coords: Vec<String> = weights.iter().map(|w| format!("{:.4}", w)).collect();
        println!("     [{}] {}", i, coords.join(", "));
    }
}
