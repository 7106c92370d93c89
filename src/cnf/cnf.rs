use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    /// Zero-based index of the owning variable.
    pub fn index(self) -> usize {
        self.var as usize - 1
    }

    pub fn from_dimacs(x: i32) -> Result<Self, CnfError> {
        if x == 0 {
            return Err(CnfError::ZeroVariable);
        }
        Ok(Self {
            var: x.unsigned_abs(),
            sign: x > 0,
        })
    }

    pub fn to_dimacs(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CnfError {
    #[error("literal references variable 0")]
    ZeroVariable,
    #[error("literal references variable {var} but the formula declares {num_vars} variables")]
    LiteralOutOfRange { var: u32, num_vars: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    pub num_vars: u32,
    pub clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    pub fn add_clause(&mut self, clause: Vec<Lit>) {
        self.clauses.push(clause);
    }

    pub fn fresh_var(&mut self) -> u32 {
        self.num_vars = self.num_vars.saturating_add(1);
        self.num_vars
    }

    /// Checks the literal-magnitude contract before any solving starts.
    pub fn validate(&self) -> Result<(), CnfError> {
        for clause in &self.clauses {
            for &lit in clause {
                if lit.var == 0 {
                    return Err(CnfError::ZeroVariable);
                }
                if lit.var > self.num_vars {
                    return Err(CnfError::LiteralOutOfRange {
                        var: lit.var,
                        num_vars: self.num_vars,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn eval_lit(lit: Lit, model: &[bool]) -> bool {
        (lit.var as usize)
            .checked_sub(1)
            .and_then(|i| model.get(i))
            .map(|&v| v == lit.sign)
            .unwrap_or(false)
    }

    pub fn eval_clause(clause: &[Lit], model: &[bool]) -> bool {
        clause.iter().any(|&lit| Self::eval_lit(lit, model))
    }

    pub fn eval(&self, model: &[bool]) -> bool {
        self.clauses
            .iter()
            .all(|clause| Self::eval_clause(clause, model))
    }
}
