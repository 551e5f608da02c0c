//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstats::cli::Args;
use chatstats::report::{Report, render, write_records, write_report};
use chatstats::{ChatParser, ChatstatsError};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("📄 Format:  {}", args.format);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {}", output);
    }
    if let Some(ref records_path) = args.records {
        println!("💾 Records: {}", records_path);
    }
    println!();

    // Step 1: Parse and assemble records
    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let records = ChatParser::new().parse(Path::new(&args.input))?;
    println!(
        "   Found {} messages ({:.2}s)",
        records.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Optional records export
    if let Some(ref records_path) = args.records {
        println!("💾 Exporting records...");
        write_records(&records, Path::new(records_path), args.format)?;
        println!("   Saved to {}", records_path);
    }

    // Step 3: Aggregate
    println!("⏳ Computing statistics...");
    let stats_start = Instant::now();
    let report = Report::build(&records, &args.report_config())?;
    println!("   Computed in {:.2}s", stats_start.elapsed().as_secs_f64());

    // Step 4: Emit the report
    match args.output {
        Some(ref output_path) => {
            write_report(&report, Path::new(output_path), args.format)?;
            println!();
            println!("✅ Done! Report saved to {}", output_path);
        }
        None => {
            let rendered = render(&report, args.format)?;
            println!();
            println!("{}", rendered.trim_end());
            println!();
        }
    }

    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
