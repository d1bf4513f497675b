// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::sync::Arc;
use std::time::Instant;
use the_logsmith::config::load_and_validate_config;
use the_logsmith::engine::{run_concurrently, BatchReport, Session};
use tracing_subscriber::EnvFilter;

const DESCRIPTORS_FLAG: &str = "--descriptors";

fn usage(program: &str) {
    eprintln!("Usage: {} [{}] <declarations.yaml> [more.yaml ...]", program, DESCRIPTORS_FLAG);
    eprintln!("Example: {} configs/train-logging.yaml", program);
    eprintln!("Example: {} {} configs/train-logging.yaml configs/overloads.yaml", program, DESCRIPTORS_FLAG);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("the-logsmith");
    let print_descriptors = args.iter().skip(1).any(|a| a == DESCRIPTORS_FLAG);
    let files: Vec<&String> = args.iter().skip(1).filter(|a| *a != DESCRIPTORS_FLAG).collect();

    if files.is_empty() {
        usage(program);
        std::process::exit(2);
    }

    let mut failed = false;
    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(80));
        }

        match process_file(file, print_descriptors).await {
            Ok(report) => failed |= report.has_errors(),
            Err(e) => {
                eprintln!("❌ {:#}", e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

async fn process_file(file: &str, print_descriptors: bool) -> anyhow::Result<BatchReport> {
    let start_time = Instant::now();

    let config = load_and_validate_config(file).with_context(|| format!("Failed to load {}", file))?;
    let max_concurrency = config.engine.get_max_concurrency();
    let session = Arc::new(Session::new(config));

    println!("📋 Declarations: {}", file);
    println!("⚙️  Max Concurrency: {}", max_concurrency);

    let report = run_concurrently(session, max_concurrency)
        .await
        .with_context(|| format!("Failed to process {}", file))?;

    println!("\n📊 Results:");
    for interface in &report.interfaces {
        let marker = if interface.generation_allowed { "✅" } else { "❌" };
        println!(
            "  {} {} ({}, {} method(s), {} delegated)",
            marker,
            interface.interface,
            interface.kind,
            interface.descriptors.len(),
            interface.delegated.len()
        );
        for diagnostic in &interface.diagnostics {
            println!("     • {}", diagnostic);
        }
    }
    println!(
        "\n🔢 {} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );

    if print_descriptors {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize descriptors")?;
        println!("{}", json);
    }

    println!("⏱️  Total Time: {:?}", start_time.elapsed());
    Ok(report)
}
