use clap::Parser;
use meanshift_rs::{Result, SeededGenerator};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Print normal vectors shifted along one axis")]
struct Args {
    /// Vector dimension
    #[arg(short, long, default_value_t = 2)]
    dimension: usize,

    /// Axis that receives the mean shift
    #[arg(short = 'a', long, default_value_t = 0)]
    shift_axis: usize,

    /// Mean shift added on the shift axis
    #[arg(short, long, default_value_t = 1.0)]
    mean_shift: f64,

    /// Number of vectors to print
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Seed for the uniform source
    #[arg(short, long, default_value_t = 17)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut generator = SeededGenerator::from_seed(args.seed);
    generator.set_shift_model(args.mean_shift, args.dimension, args.shift_axis)?;
    info!(count = args.count, seed = args.seed, "generating");

    for _ in 0..args.count {
        let v = generator.produce_next()?;
        let line: Vec<String> = v.iter().map(|x| x.to_string()).collect();
        println!("{}", line.join(" "));
        generator.release();
    }
    Ok(())
}
