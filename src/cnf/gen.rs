use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cnf::{Cnf, Lit};

/// Draws a hidden assignment and emits only clauses it satisfies, so the
/// formula is satisfiable by construction. Returns the formula and the
/// planted witness.
pub fn generate_planted_3sat(
    num_vars: u32,
    num_clauses: usize,
    seed: u64,
) -> Result<(Cnf, Vec<bool>)> {
    if num_vars == 0 {
        bail!("planted formula needs at least one variable");
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let witness: Vec<bool> = (0..num_vars).map(|_| rng.random_bool(0.5)).collect();
    let mut cnf = Cnf::new(num_vars);
    for _ in 0..num_clauses {
        loop {
            let clause = random_clause(&mut rng, num_vars);
            if Cnf::eval_clause(&clause, &witness) {
                cnf.add_clause(clause);
                break;
            }
        }
    }
    Ok((cnf, witness))
}

/// Unconstrained random 3-SAT; may or may not be satisfiable.
pub fn generate_random_3sat(num_vars: u32, num_clauses: usize, seed: u64) -> Result<Cnf> {
    if num_vars == 0 {
        bail!("random formula needs at least one variable");
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cnf = Cnf::new(num_vars);
    for _ in 0..num_clauses {
        let clause = random_clause(&mut rng, num_vars);
        cnf.add_clause(clause);
    }
    Ok(cnf)
}

fn random_clause(rng: &mut ChaCha8Rng, num_vars: u32) -> Vec<Lit> {
    (0..3)
        .map(|_| Lit::new(rng.random_range(1..=num_vars), rng.random_bool(0.5)))
        .collect()
}
