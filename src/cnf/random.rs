use anyhow::{Result, bail};
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::assignment::Assignment;
use super::cnf::{ClauseSet, Lit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomCnfConfig {
    pub vars: u32,
    pub clauses: usize,
    pub k: usize,
    pub seed: u64,
    /// Keep every clause satisfied by a hidden assignment.
    pub planted: bool,
}

impl Default for RandomCnfConfig {
    fn default() -> Self {
        Self {
            vars: 20,
            clauses: 80,
            k: 3,
            seed: 1,
            planted: false,
        }
    }
}

/// Uniform random k-CNF: `k` distinct variables per clause, random signs.
///
/// With `planted` set, the returned assignment satisfies every clause; a
/// clause that misses it gets one literal flipped to agree.
pub fn random_kcnf(cfg: &RandomCnfConfig) -> Result<(ClauseSet, Option<Assignment>)> {
    if cfg.k == 0 {
        bail!("clause width k must be >= 1");
    }
    if cfg.k > cfg.vars as usize {
        bail!("clause width {} exceeds variable count {}", cfg.k, cfg.vars);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let hidden = if cfg.planted {
        let lits = (1..=cfg.vars)
            .map(|v| Lit::new(v, rng.random::<bool>()))
            .collect::<Vec<_>>();
        Some(Assignment::from(lits))
    } else {
        None
    };

    let mut out = ClauseSet::new();
    for _ in 0..cfg.clauses {
        let mut clause = sample(&mut rng, cfg.vars as usize, cfg.k)
            .into_iter()
            .map(|i| Lit::new(i as u32 + 1, rng.random::<bool>()))
            .collect::<Vec<_>>();

        if let Some(h) = &hidden {
            let agrees = clause.iter().any(|l| h[l.var as usize - 1].sign == l.sign);
            if !agrees {
                let idx = rng.random_range(0..clause.len());
                clause[idx] = clause[idx].neg();
            }
        }
        out.add_clause(clause);
    }
    Ok((out, hidden))
}
