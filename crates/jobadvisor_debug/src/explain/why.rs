//! Multi-hop "why" queries over fact provenance.
//!
//! Answers "which rule declared this fact, and what did that rule match?",
//! following premises back until the seed profile or the depth limit.
//!
//! # Example
//!
//! ```text
//! f-2 Recommendation(ADMIN: Indoor + stable + modest salary) <- indoor_admin [f-1 f-0]
//!   f-1 Branch(indoor) <- prefer_indoor [f-0]
//!     f-0 Profile (given)
//! ```

use std::collections::HashSet;
use std::fmt::Write;

use jobadvisor_engine::{Advice, ProvenanceTracker};
use jobadvisor_storage::{FactId, FactStore};

// =============================================================================
// Why Step
// =============================================================================

/// One fact in a derivation chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhyStep {
    /// The fact explained by this step.
    pub fact: FactId,
    /// One-line rendering of the fact.
    pub summary: String,
    /// The rule that declared it, or `None` for a caller-supplied fact.
    pub rule: Option<&'static str>,
    /// The facts the rule matched.
    pub premises: Vec<FactId>,
    /// Hops from the fact the query started at.
    pub depth: usize,
}

impl WhyStep {
    /// Returns true if the fact was supplied by the caller.
    #[must_use]
    pub fn is_given(&self) -> bool {
        self.rule.is_none()
    }
}

// =============================================================================
// Why Chain
// =============================================================================

/// Derivation steps, starting fact first, premises depth-first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WhyChain {
    /// The steps, in depth-first order.
    pub steps: Vec<WhyStep>,
    /// True if some derived premise was cut off by the depth limit.
    pub truncated: bool,
}

impl WhyChain {
    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if nothing was explained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The rule that declared the starting fact.
    #[must_use]
    pub fn immediate_cause(&self) -> Option<&'static str> {
        self.steps.first().and_then(|step| step.rule)
    }

    /// Rules involved, in chain order, without repeats.
    #[must_use]
    pub fn rules(&self) -> Vec<&'static str> {
        let mut rules = Vec::new();
        for rule in self.steps.iter().filter_map(|step| step.rule) {
            if !rules.contains(&rule) {
                rules.push(rule);
            }
        }
        rules
    }

    /// Returns true if the chain reaches a caller-supplied fact.
    #[must_use]
    pub fn reaches_given(&self) -> bool {
        self.steps.iter().any(WhyStep::is_given)
    }
}

// =============================================================================
// Why Query
// =============================================================================

/// Performs "why" queries against a run's facts and provenance.
pub struct WhyQuery<'a> {
    store: &'a FactStore,
    provenance: &'a ProvenanceTracker,
}

impl<'a> WhyQuery<'a> {
    /// Creates a query over a fact store and its provenance.
    #[must_use]
    pub fn new(store: &'a FactStore, provenance: &'a ProvenanceTracker) -> Self {
        Self { store, provenance }
    }

    /// Explains `fact`, following at most `depth` levels (1 = the fact only).
    ///
    /// Facts shared by several premises are listed once.
    #[must_use]
    pub fn explain(&self, fact: FactId, depth: usize) -> WhyChain {
        let mut chain = WhyChain::default();
        if depth > 0 && self.store.get(fact).is_some() {
            let mut visited = HashSet::new();
            self.walk(fact, 0, depth, &mut visited, &mut chain);
        }
        chain
    }

    fn walk(
        &self,
        fact: FactId,
        level: usize,
        depth: usize,
        visited: &mut HashSet<FactId>,
        chain: &mut WhyChain,
    ) {
        if !visited.insert(fact) {
            return;
        }

        let summary = self
            .store
            .get(fact)
            .map_or_else(|| "?".to_string(), ToString::to_string);
        let derivation = self.provenance.derivation(fact);
        let premises = derivation.map(|d| d.premises.clone()).unwrap_or_default();

        chain.steps.push(WhyStep {
            fact,
            summary,
            rule: derivation.map(|d| d.rule),
            premises: premises.clone(),
            depth: level,
        });

        for premise in premises {
            if level + 1 < depth {
                self.walk(premise, level + 1, depth, visited, chain);
            } else if !visited.contains(&premise) {
                chain.truncated = true;
            }
        }
    }
}

/// Explains a fact from a finished run.
#[must_use]
pub fn why(advice: &Advice, fact: FactId, depth: usize) -> WhyChain {
    WhyQuery::new(advice.store(), advice.provenance()).explain(fact, depth)
}

/// Renders a chain one step per line, indented by depth.
#[must_use]
pub fn format_why(chain: &WhyChain) -> String {
    let mut out = String::new();
    for step in &chain.steps {
        let indent = "  ".repeat(step.depth);
        let _ = write!(out, "{indent}{} {}", step.fact, step.summary);
        match step.rule {
            Some(rule) => {
                let premises: Vec<_> = step.premises.iter().map(ToString::to_string).collect();
                let _ = writeln!(out, " <- {rule} [{}]", premises.join(" "));
            }
            None => {
                let _ = writeln!(out, " (given)");
            }
        }
    }
    if chain.truncated {
        out.push_str("...\n");
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
