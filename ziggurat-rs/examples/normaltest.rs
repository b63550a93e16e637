use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::f64::consts::PI;
use ziggurat_rs::{RngSource, ZigguratSampler};

#[derive(Parser, Debug)]
#[command(version, about = "Histogram of Ziggurat normal draws against the expected counts")]
struct Args {
    /// Number of variates to draw
    #[arg(short, long, default_value_t = 10_000_000)]
    nvariates: usize,

    /// Number of histogram bins
    #[arg(short, long, default_value_t = 100)]
    bins: usize,

    /// Standard deviation
    #[arg(short, long, default_value_t = 1.0)]
    stddev: f64,

    /// Seed for the uniform source
    #[arg(long, default_value_t = 17)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    let z = ZigguratSampler::new(0.0, args.stddev);
    let mut rng = RngSource(StdRng::seed_from_u64(args.seed));

    let mut variate = vec![0.0f64; args.nvariates];
    z.fill(&mut variate, &mut rng);

    let minv = variate.iter().cloned().fold(f64::INFINITY, f64::min);
    let maxv = variate.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let binwidth = (maxv - minv) / args.bins as f64;

    let mut bin = vec![0usize; args.bins];
    for &v in &variate {
        let mut j = ((v - minv) / binwidth).floor() as usize;
        if j >= args.bins {
            j = args.bins - 1;
        }
        bin[j] += 1;
    }

    // Expected count per bin: n * width * pdf(midpoint)
    let a = args.nvariates as f64 * binwidth / (args.stddev * (2.0 * PI).sqrt());
    let b = -0.5 / (args.stddev * args.stddev);

    for (i, count) in bin.iter().enumerate() {
        let x = binwidth * (i as f64 + 0.5) + minv;
        println!("{} {} {}", x, count, a * (x * x * b).exp());
    }
}
