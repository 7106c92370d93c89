use log::trace;

use crate::cnf::cnf::{Cnf, Lit};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarState {
    pub assigned: bool,
    pub value: bool,
    pub pos_count: u32,
    pub neg_count: u32,
}

/// Live clauses plus the variable table, as one cloneable value. The clone is
/// the whole backtracking mechanism: the search copies the database before its
/// first branch attempt and mutates the pristine original for the second.
///
/// Counter invariant: `pos_count`/`neg_count` equal the number of live clauses
/// containing the variable with that polarity. Only the methods below touch
/// the counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseDb {
    vars: Vec<VarState>,
    clauses: Vec<Vec<Lit>>,
}

/// Sorts by variable, drops duplicate literals, and rejects tautologies.
/// Returns `None` when the clause contains a variable with both signs and so
/// constrains nothing. Stable sort keeps equal-variable literals adjacent, so
/// one linear pass catches both cases.
pub fn normalize(clause: &[Lit]) -> Option<Vec<Lit>> {
    let mut lits = clause.to_vec();
    lits.sort_by_key(|l| l.var);
    let mut out: Vec<Lit> = Vec::with_capacity(lits.len());
    for lit in lits {
        match out.last() {
            Some(&prev) if prev.var == lit.var => {
                if prev.sign != lit.sign {
                    return None;
                }
                // same literal twice, keep one
            }
            _ => out.push(lit),
        }
    }
    Some(out)
}

impl ClauseDb {
    /// Normalizes the formula into a fresh database and seeds the forced
    /// stack: unit clauses in input order, then pure literals in variable
    /// order. Returns `None` when an input clause is empty, which makes the
    /// whole formula unsatisfiable before any search.
    pub fn build(cnf: &Cnf) -> Option<(Self, Vec<Lit>)> {
        let mut db = Self {
            vars: vec![VarState::default(); cnf.num_vars as usize],
            clauses: Vec::with_capacity(cnf.clauses.len()),
        };
        let mut forced = Vec::new();

        for clause in &cnf.clauses {
            if clause.is_empty() {
                return None;
            }
            let Some(canonical) = normalize(clause) else {
                continue;
            };
            for &lit in &canonical {
                let state = &mut db.vars[lit.index()];
                if lit.sign {
                    state.pos_count += 1;
                } else {
                    state.neg_count += 1;
                }
            }
            if canonical.len() == 1 {
                forced.push(canonical[0]);
            }
            db.clauses.push(canonical);
        }

        for (i, state) in db.vars.iter().enumerate() {
            if state.pos_count > 0 && state.neg_count == 0 {
                forced.push(Lit::new(i as u32 + 1, true));
            } else if state.neg_count > 0 && state.pos_count == 0 {
                forced.push(Lit::new(i as u32 + 1, false));
            }
        }

        Some((db, forced))
    }

    pub fn no_clauses(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Vec<Lit>] {
        &self.clauses
    }

    pub fn var(&self, index: usize) -> &VarState {
        &self.vars[index]
    }

    /// Makes `lit` true and updates every live clause containing its
    /// variable. Clauses the literal satisfies are removed; occurrences of the
    /// complement are deleted in place. New forced literals (freshly created
    /// units, and polarities left pure by a removed clause) are pushed onto
    /// `forced`. Returns `false` on contradiction; the database is then
    /// inconsistent and the caller must abandon this branch.
    pub fn assert_literal(&mut self, lit: Lit, forced: &mut Vec<Lit>) -> bool {
        let v = lit.index();
        if self.vars[v].assigned {
            return self.vars[v].value == lit.sign;
        }
        self.vars[v].value = lit.sign;
        self.vars[v].assigned = true;

        let mut i = 0;
        while i < self.clauses.len() {
            let pos = match self.clauses[i].binary_search_by_key(&lit.var, |l| l.var) {
                Ok(pos) => pos,
                Err(_) => {
                    i += 1;
                    continue;
                }
            };
            if self.clauses[i][pos].sign == lit.sign {
                // satisfied: drop the clause, its occurrences die with it
                let satisfied = self.clauses.remove(i);
                trace!("clause satisfied by {}", lit.to_dimacs());
                for x in satisfied {
                    let xv = x.index();
                    let state = &mut self.vars[xv];
                    let (own, other) = if x.sign {
                        state.pos_count -= 1;
                        (state.pos_count, state.neg_count)
                    } else {
                        state.neg_count -= 1;
                        (state.neg_count, state.pos_count)
                    };
                    if own == 0 && other > 0 && !state.assigned && xv != v {
                        // x's polarity just died out, the complement is pure
                        forced.push(x.neg());
                    }
                }
            } else {
                // falsified: shrink the clause
                self.clauses[i].remove(pos);
                if lit.sign {
                    self.vars[v].neg_count -= 1;
                } else {
                    self.vars[v].pos_count -= 1;
                }
                if self.clauses[i].is_empty() {
                    trace!("empty clause under {}", lit.to_dimacs());
                    return false;
                }
                if self.clauses[i].len() == 1 {
                    forced.push(self.clauses[i][0]);
                }
                i += 1;
            }
        }
        true
    }

    /// Branch literal: among literals of the shortest live clauses, the one
    /// with the highest occurrence count over all live clauses. Candidates
    /// come from minimum-length clauses only while the count is global; that
    /// asymmetry is deliberate. Ties keep the first literal found scanning
    /// clauses in database order, literals in clause order.
    pub fn branch_literal(&self) -> Option<Lit> {
        let min_len = self.clauses.iter().map(|c| c.len()).min()?;
        let mut best: Option<Lit> = None;
        let mut best_count = 0;
        for clause in &self.clauses {
            if clause.len() != min_len {
                continue;
            }
            for &lit in clause {
                let state = &self.vars[lit.index()];
                let count = if lit.sign {
                    state.pos_count
                } else {
                    state.neg_count
                };
                if count > best_count {
                    best_count = count;
                    best = Some(lit);
                }
            }
        }
        best
    }

    /// Final assignment; variables no clause ever constrained come out false.
    pub fn model(&self) -> Vec<bool> {
        self.vars
            .iter()
            .map(|state| state.assigned && state.value)
            .collect()
    }
}
