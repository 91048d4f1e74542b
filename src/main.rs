use std::time::Instant;

use u_linebalance::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("u-linebalance error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    let start = Instant::now();
    let output = run(&args)?;
    print!("{output}");
    if args.format == cli::OutputFormat::Text {
        println!("Elapsed: {:.4} s", start.elapsed().as_secs_f64());
    }
    Ok(())
}
