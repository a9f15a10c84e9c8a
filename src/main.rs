use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use handbook_etl::pipeline;

#[derive(Parser, Debug)]
#[command(name = "handbook-etl", about = "Extracts handbook tables into a facts relation")]
struct Args {
    /// Part I workbook (insurer-level tables)
    #[arg(long, default_value = "input/Part I.xlsx")]
    part1: PathBuf,

    /// Part V workbook (distribution channel tables)
    #[arg(long, default_value = "input/Part V.xlsx")]
    part5: PathBuf,

    /// Output directory for the run artifacts
    #[arg(long, default_value = "output")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let started = chrono::Local::now();
    println!("📊 Insurance Handbook ETL");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Part I:  {}", args.part1.display());
    println!("Part V:  {}", args.part5.display());
    println!("Started: {}", started.format("%Y-%m-%d %H:%M:%S"));

    println!("\n📂 Extracting tables...");
    let result = pipeline::run_and_write(&args.part1, &args.part5, &args.out)?;

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Facts table:      {} records", result.facts.len());
    println!("✓ State breakdown:  {} records", result.state_breakdown.len());
    println!(
        "✓ Fund/solvency:    {} records",
        result.fund_detail.len() + result.solvency_detail.len()
    );
    println!("✓ Name crosswalk:   {} mappings", result.crosswalk.len());
    println!("✓ QA log:           {} entries", result.qa_log.len());
    println!("\nAll outputs saved to {}", args.out.display());

    Ok(())
}
