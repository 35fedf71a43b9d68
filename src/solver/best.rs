use crate::data::Agent;

#[derive(Debug, Clone, PartialEq)]
pub struct BestSolution {
    pub score: f64,
    pub choices: Vec<Agent>,
}

/// Keeps the best complete solution found so far.
///
/// Only strictly better solutions replace the current one
/// so the first one found wins ties.
#[derive(Debug, Clone)]
pub struct BestSolutionTracker {
    best: BestSolution,
}

impl BestSolutionTracker {
    pub fn new() -> Self {
        BestSolutionTracker {
            best: BestSolution {
                score: f64::INFINITY,
                choices: Vec::new(),
            },
        }
    }

    pub fn improves(&self, score: f64) -> bool {
        score < self.best.score
    }

    /// Returns whether `choices` became the new best.
    pub fn consider(&mut self, score: f64, choices: &[Agent]) -> bool {
        if !self.improves(score) {
            return false;
        }
        self.best.score = score;
        self.best.choices.clear();
        self.best.choices.extend_from_slice(choices);
        true
    }

    pub fn current(&self) -> &BestSolution {
        &self.best
    }

    pub fn into_best(self) -> BestSolution {
        self.best
    }
}

impl Default for BestSolutionTracker {
    fn default() -> Self {
        Self::new()
    }
}
