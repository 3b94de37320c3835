//! Fixed-step gradient ascent on a paraboloid from random starting points.
//!
//! Climbs f(x, y) = -((x - 2)² + (y - 3)²), whose maximum is at (2, 3), from
//! a batch of random starts in [-10, 10]², printing the trace of every run
//! and the time the batch took. Finishes with a short 5-step run from the
//! origin to show a run that stops before converging.
//!
//! # Usage
//!
//! ```text
//! cargo run -p ascent-observers --example fixed_step_ascent
//! cargo run -p ascent-observers --example fixed_step_ascent -- 10
//! ```

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use ascent_core::{MaximizationProblem, Model, Point};
use ascent_observers::TraceObserver;
use ascent_solvers::optimization::gradient_ascent::{self, Config, Solution};
use rand::Rng;

const LEARNING_RATE: f64 = 0.1;
const TOTAL_STEPS: usize = 100;
const FEWER_STEPS: usize = 5;
const DEFAULT_POINTS: usize = 50;
const RULE: &str =
    "==================================================================================";

fn main() {
    let points = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<usize>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid point count, expected a whole number, e.g. 10");
            std::process::exit(1);
        })
        .unwrap_or(DEFAULT_POINTS);

    if let Err(err) = run(points) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(points: usize) -> Result<(), Box<dyn Error>> {
    println!("--- Gradient Ascent with Fixed Steps ---");
    println!("Optimizing f(x,y) = -( (x-2)^2 + (y-3)^2 ), max at (2,3)");
    println!("Testing with {points} random starting points");
    println!("Fixed LR: {LEARNING_RATE}, Total Steps: {TOTAL_STEPS}");
    println!("{RULE}");

    let model = Paraboloid;
    let config = Config::with_defaults(TOTAL_STEPS, LEARNING_RATE)?;
    let mut rng = rand::thread_rng();

    let batch_start = Instant::now();
    let mut per_point = Duration::ZERO;

    for i in 1..=points {
        let start = Point::from([rng.gen_range(-10.0..10.0_f64), rng.gen_range(-10.0..10.0_f64)]);
        println!("\nTest Point {i}:");
        println!("Initial Point: {start}");

        let (solution, elapsed) = traced_run(&model, start, &config)?;
        per_point += elapsed;

        println!("{RULE}");
        report(&solution);
        println!("Analytical maximum is at [2.000000, 3.000000] with f(p): 0.000000");
    }

    let total = batch_start.elapsed().as_secs_f64();
    println!(
        "\nExecution time for {points} test points ({TOTAL_STEPS} steps each): {total:.3} seconds"
    );

    let average = if points == 0 {
        0.0
    } else {
        per_point.as_secs_f64() / points as f64
    };
    println!("Average execution time per test point: {average:.3} seconds");

    let config = Config::with_defaults(FEWER_STEPS, LEARNING_RATE)?;
    let start = Point::from([0.0, 0.0]);
    println!("\n--- Example with {FEWER_STEPS} steps ---");
    println!("Initial Point: {start}");

    let (solution, elapsed) = traced_run(&model, start, &config)?;

    println!("{RULE}");
    report(&solution);
    println!(
        "Execution time for {FEWER_STEPS} steps: {:.3} seconds",
        elapsed.as_secs_f64()
    );

    Ok(())
}

/// Runs one traced ascent to stdout and times it.
fn traced_run(
    model: &Paraboloid,
    start: Point,
    config: &Config,
) -> Result<(Solution<Vec<f64>, f64>, Duration), Box<dyn Error>> {
    let mut trace = TraceObserver::new(io::stdout());

    let timer = Instant::now();
    let solution = gradient_ascent::maximize(model, &AllVariables, start, config, &mut trace)?;
    let elapsed = timer.elapsed();

    trace.finish()?;
    Ok((solution, elapsed))
}

fn report(solution: &Solution<Vec<f64>, f64>) {
    println!(
        "Final Point after {} steps: {}, f(p): {:.6}",
        solution.steps, solution.point, solution.objective
    );
}

/// f(x, y) = -((x - 2)² + (y - 3)²).
struct Paraboloid;

#[derive(Debug, thiserror::Error)]
#[error("function expects 2 variables (x, y), got {0}")]
struct ArityError(usize);

impl Model for Paraboloid {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = ArityError;

    fn call(&self, input: &Vec<f64>) -> Result<f64, Self::Error> {
        let &[x, y] = input.as_slice() else {
            return Err(ArityError(input.len()));
        };
        Ok(-((x - 2.0).powi(2) + (y - 3.0).powi(2)))
    }
}

/// Feeds every coordinate to the model and maximizes its output.
struct AllVariables;

impl MaximizationProblem for AllVariables {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = std::convert::Infallible;

    fn input(&self, x: &Point) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
