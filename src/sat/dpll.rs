use log::debug;

use crate::cnf::cnf::{Cnf, CnfError, Lit};
use crate::sat::db::ClauseDb;
use crate::sat::SolverStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    Sat(Vec<bool>),
    Unsat,
}

pub fn solve(cnf: &Cnf) -> Result<SatResult, CnfError> {
    solve_with_stats(cnf).map(|(result, _)| result)
}

pub fn is_sat(cnf: &Cnf) -> Result<bool, CnfError> {
    Ok(matches!(solve(cnf)?, SatResult::Sat(_)))
}

pub fn solve_model(cnf: &Cnf) -> Result<Option<Vec<bool>>, CnfError> {
    match solve(cnf)? {
        SatResult::Sat(model) => Ok(Some(model)),
        SatResult::Unsat => Ok(None),
    }
}

pub fn solve_with_stats(cnf: &Cnf) -> Result<(SatResult, SolverStats), CnfError> {
    cnf.validate()?;
    let mut stats = SolverStats::default();
    let Some((mut db, forced)) = ClauseDb::build(cnf) else {
        return Ok((SatResult::Unsat, stats));
    };
    let result = if search(&mut db, forced, &mut stats) {
        SatResult::Sat(db.model())
    } else {
        SatResult::Unsat
    };
    Ok((result, stats))
}

/// Propagate to fixpoint, then branch. The first branch attempt (negation of
/// the heuristic literal) runs on a clone of the database; if it succeeds the
/// clone is adopted wholesale. Only once that attempt is known dead does the
/// complementary literal get asserted on the original, so no undo bookkeeping
/// is ever needed.
fn search(db: &mut ClauseDb, mut forced: Vec<Lit>, stats: &mut SolverStats) -> bool {
    while let Some(lit) = forced.pop() {
        stats.propagations += 1;
        if !db.assert_literal(lit, &mut forced) {
            stats.conflicts += 1;
            return false;
        }
    }
    if db.no_clauses() {
        return true;
    }

    let Some(lit) = db.branch_literal() else {
        return false;
    };
    stats.decisions += 1;
    debug!("branching on {}", lit.to_dimacs());

    let mut trial = db.clone();
    if search(&mut trial, vec![lit.neg()], stats) {
        *db = trial;
        return true;
    }
    search(db, vec![lit], stats)
}
