//! K-Means Binary
//!
//! Clusters the observations given on the command line and prints
//! the members of each cluster, or the whole result as JSON.
//!
//! Options: -k, --max-error, --max-iters, --init, --seed, --smooth, --vacancy, --json

use clap::Parser;
use kmeans1d::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Cluster scalar observations with 1-D k-means", long_about = None)]
struct Args {
    #[arg(short, default_value_t = 3, help = "Number of clusters")]
    k: usize,
    #[arg(long, default_value_t = KMEANS_MAX_ERROR, help = "Stop once the mean error falls to this")]
    max_error: Energy,
    #[arg(long, default_value_t = KMEANS_MAX_ITERATIONS, help = "Maximum update cycles")]
    max_iters: usize,
    #[arg(long, value_enum, default_value_t = Initialization::Spaced, help = "Centroid initialization")]
    init: Initialization,
    #[arg(long, default_value_t = KMEANS_SEED, help = "Seed for random initialization")]
    seed: u64,
    #[arg(long, help = "Moving-average window applied before clustering")]
    smooth: Option<usize>,
    #[arg(long, value_enum, default_value_t = Vacancy::Retain, help = "Empty cluster policy")]
    vacancy: Vacancy,
    #[arg(long, help = "Print the full result as JSON")]
    json: bool,
    #[arg(short, long, help = "Log each iteration")]
    verbose: bool,
    #[arg(required = true, allow_negative_numbers = true)]
    observations: Vec<Scalar>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let data = match args.smooth {
        Some(window) => signals::smooth(&args.observations, window),
        None => args.observations,
    };
    let ref mut rng = SmallRng::seed_from_u64(args.seed);
    let centroids = args.init.centroids(&data, args.k, rng)?;
    let termination = Termination::new(args.max_error, args.max_iters);
    let clustering = Lloyd::with(&data, centroids, termination, args.vacancy, Euclidean)?.run();
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&clustering)?),
        false => {
            print!("{}", clustering);
            for j in 0..clustering.k() {
                let members = clustering
                    .members(j)
                    .into_iter()
                    .map(|i| format!("{:.6}", data[i]))
                    .collect::<Vec<_>>();
                println!("{:>4} [{}]", j, members.join(", "));
            }
        }
    }
    Ok(())
}
