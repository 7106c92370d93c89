use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use forksat::cnf::cnf::Lit;
use forksat::cnf::dimacs::{parse_dimacs, parse_witness, to_dimacs, write_witness};
use forksat::cnf::gen::{generate_planted_3sat, generate_random_3sat};
use forksat::sat::dpll::{solve_with_stats, SatResult};

#[derive(Parser, Debug)]
#[command(name = "forksat")]
#[command(about = "DPLL SAT solver with clone-on-branch backtracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide a DIMACS CNF file and print the verdict.
    Solve {
        #[arg(long)]
        cnf: String,
        #[arg(long)]
        witness_out: Option<String>,
        #[arg(long)]
        stats: bool,
    },
    /// Check a witness file against a DIMACS CNF file.
    Verify {
        #[arg(long)]
        cnf: String,
        #[arg(long)]
        witness: String,
    },
    /// Generate a seeded random 3-SAT instance.
    GenRandom {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        cnf_out: String,
        #[arg(long)]
        witness_out: Option<String>,
        /// Skip planting a witness; the instance may be unsatisfiable.
        #[arg(long)]
        unplanted: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Solve {
            cnf,
            witness_out,
            stats,
        } => cmd_solve(&cnf, witness_out.as_deref(), stats),
        Commands::Verify { cnf, witness } => cmd_verify(&cnf, &witness),
        Commands::GenRandom {
            vars,
            clauses,
            seed,
            cnf_out,
            witness_out,
            unplanted,
        } => cmd_gen_random(vars, clauses, seed, &cnf_out, witness_out.as_deref(), unplanted),
    }
}

fn cmd_solve(cnf_path: &str, witness_out: Option<&str>, stats: bool) -> Result<()> {
    let input = std::fs::read_to_string(cnf_path)
        .with_context(|| format!("reading {}", cnf_path))?;
    let formula = parse_dimacs(&input).with_context(|| format!("parsing {}", cnf_path))?;
    let (result, solve_stats) = solve_with_stats(&formula)?;
    match result {
        SatResult::Sat(model) => {
            println!("s SATISFIABLE");
            let mut line = String::from("v");
            for (i, &v) in model.iter().enumerate() {
                line.push_str(&format!(" {}", Lit::new(i as u32 + 1, v).to_dimacs()));
            }
            line.push_str(" 0");
            println!("{}", line);
            if let Some(path) = witness_out {
                std::fs::write(path, write_witness(&model))
                    .with_context(|| format!("writing {}", path))?;
            }
        }
        SatResult::Unsat => {
            println!("s UNSATISFIABLE");
        }
    }
    if stats {
        println!(
            "c decisions {} propagations {} conflicts {}",
            solve_stats.decisions, solve_stats.propagations, solve_stats.conflicts
        );
    }
    Ok(())
}

fn cmd_verify(cnf_path: &str, witness_path: &str) -> Result<()> {
    let input = std::fs::read_to_string(cnf_path)
        .with_context(|| format!("reading {}", cnf_path))?;
    let formula = parse_dimacs(&input).with_context(|| format!("parsing {}", cnf_path))?;
    let witness_input = std::fs::read_to_string(witness_path)
        .with_context(|| format!("reading {}", witness_path))?;
    let model = parse_witness(&witness_input, formula.num_vars)
        .with_context(|| format!("parsing {}", witness_path))?;
    if formula.eval(&model) {
        println!("witness satisfies the formula");
        Ok(())
    } else {
        bail!("witness does not satisfy the formula");
    }
}

fn cmd_gen_random(
    vars: u32,
    clauses: usize,
    seed: u64,
    cnf_out: &str,
    witness_out: Option<&str>,
    unplanted: bool,
) -> Result<()> {
    if unplanted {
        if witness_out.is_some() {
            bail!("--witness-out requires a planted instance");
        }
        let cnf = generate_random_3sat(vars, clauses, seed)?;
        std::fs::write(cnf_out, to_dimacs(&cnf)).with_context(|| format!("writing {}", cnf_out))?;
    } else {
        let (cnf, witness) = generate_planted_3sat(vars, clauses, seed)?;
        std::fs::write(cnf_out, to_dimacs(&cnf)).with_context(|| format!("writing {}", cnf_out))?;
        if let Some(path) = witness_out {
            std::fs::write(path, write_witness(&witness))
                .with_context(|| format!("writing {}", path))?;
        }
    }
    Ok(())
}
