use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};

use euleris::problems::{self, Problem};

/// Run the registered puzzle solvers and print their answers.
#[derive(Debug, Parser)]
#[command(name = "euleris", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the registered puzzles.
    List,
    /// Run one or more solvers by puzzle number (all when none given).
    Run {
        /// Puzzle numbers to run.
        ids: Vec<u32>,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            for p in problems::PROBLEMS {
                println!("{:>4}  {}", p.id, p.title);
            }
        }
        Command::Run { ids } => {
            let selected: Vec<&Problem> = if ids.is_empty() {
                problems::PROBLEMS.iter().collect()
            } else {
                let mut out = Vec::with_capacity(ids.len());
                for id in &ids {
                    match problems::find(*id) {
                        Some(p) => out.push(p),
                        None => {
                            eprintln!("no solver registered for problem {id}");
                            process::exit(2);
                        }
                    }
                }
                out
            };
            for p in selected {
                let start = Instant::now();
                let answer = (p.solve)();
                let elapsed = start.elapsed();
                println!("{:>4}  {answer:<22}  {elapsed:>10.2?}  {}", p.id, p.title);
            }
        }
    }
}
