//! Pattern matching for the rule engine.
//!
//! A rule's condition is a conjunction of positive fact patterns (there
//! exists a fact of this kind satisfying these constraints) and negated
//! fact patterns (there exists no such fact). Matching is recomputed
//! against the whole [`FactStore`]; at this scale the naive join is fine.

use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use jobadvisor_foundation::{Error, Result, Type, Value};
use jobadvisor_storage::{Attr, Fact, FactId, FactKind, FactStore};

// =============================================================================
// Pattern Types
// =============================================================================

/// A constraint on one attribute of a fact.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    /// The attribute must equal a literal: `Profile(prefers_indoor=true)`
    Literal {
        /// Attribute to test.
        attr: Attr,
        /// Required value.
        value: Value,
    },
    /// Bind the attribute to a variable: `Profile(salary_expectation=?s)`
    ///
    /// If the variable is already bound, the attribute must equal it.
    Bind {
        /// Attribute to capture.
        attr: Attr,
        /// Variable name.
        var: &'static str,
    },
}

impl Constraint {
    /// The attribute this constraint reads.
    #[must_use]
    pub const fn attr(&self) -> Attr {
        match self {
            Self::Literal { attr, .. } | Self::Bind { attr, .. } => *attr,
        }
    }
}

/// A pattern over facts of a single kind.
#[derive(Clone, Debug, PartialEq)]
pub struct FactPattern {
    /// Kind of fact to match.
    pub kind: FactKind,
    /// Attribute constraints, all of which must hold.
    pub constraints: Vec<Constraint>,
}

impl FactPattern {
    /// Creates a pattern matching any fact of `kind`.
    #[must_use]
    pub fn new(kind: FactKind) -> Self {
        Self {
            kind,
            constraints: Vec::new(),
        }
    }

    /// Adds a literal equality constraint.
    #[must_use]
    pub fn eq(mut self, attr: Attr, value: impl Into<Value>) -> Self {
        debug_assert_eq!(attr.kind(), self.kind, "{attr} on a {} pattern", self.kind);
        self.constraints.push(Constraint::Literal {
            attr,
            value: value.into(),
        });
        self
    }

    /// Adds a variable binding.
    #[must_use]
    pub fn bind(mut self, attr: Attr, var: &'static str) -> Self {
        debug_assert_eq!(attr.kind(), self.kind, "{attr} on a {} pattern", self.kind);
        self.constraints.push(Constraint::Bind { attr, var });
        self
    }
}

/// A compiled pattern (positive clauses + negations).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledPattern {
    /// Positive clauses that must match
    pub clauses: Vec<FactPattern>,
    /// Negated clauses (no fact may satisfy these)
    pub negations: Vec<FactPattern>,
}

impl CompiledPattern {
    /// Create a new empty pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a positive clause.
    #[must_use]
    pub fn with(mut self, clause: FactPattern) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds a negated clause.
    #[must_use]
    pub fn without(mut self, clause: FactPattern) -> Self {
        self.negations.push(clause);
        self
    }

    /// Returns true if any clause, positive or negated, reads facts of `kind`.
    #[must_use]
    pub fn references(&self, kind: FactKind) -> bool {
        self.clauses
            .iter()
            .chain(&self.negations)
            .any(|clause| clause.kind == kind)
    }

    /// Returns the variables bound by positive clauses, in first-bound order.
    #[must_use]
    pub fn variables(&self) -> Vec<&'static str> {
        let mut vars = Vec::new();
        for constraint in self.clauses.iter().flat_map(|c| &c.constraints) {
            if let Constraint::Bind { var, .. } = constraint {
                if !vars.contains(var) {
                    vars.push(*var);
                }
            }
        }
        vars
    }
}

// =============================================================================
// Bindings
// =============================================================================

/// A set of variable bindings from pattern matching.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bindings {
    values: BTreeMap<&'static str, Value>,
}

impl Bindings {
    /// Create empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a binding by variable name.
    #[must_use]
    pub fn get(&self, var: &str) -> Option<&Value> {
        self.values.get(var)
    }

    /// Set a binding.
    pub fn set(&mut self, var: &'static str, value: Value) {
        self.values.insert(var, value);
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate all bindings in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Reads a bound value, failing if the variable is unbound.
    ///
    /// # Errors
    /// Returns an unbound variable error.
    pub fn require(&self, var: &str) -> Result<&Value> {
        self.get(var).ok_or_else(|| Error::unbound_variable(var))
    }

    /// Reads a bound number (int or float).
    ///
    /// # Errors
    /// Returns an error if the variable is unbound or not numeric.
    pub fn number(&self, var: &str) -> Result<f64> {
        let value = self.require(var)?;
        value
            .as_number()
            .ok_or_else(|| Error::type_mismatch(format!("?{var}"), Type::Float, value.value_type()))
    }

    /// Reads a bound integer.
    ///
    /// # Errors
    /// Returns an error if the variable is unbound or not an integer.
    pub fn int(&self, var: &str) -> Result<i64> {
        let value = self.require(var)?;
        value
            .as_int()
            .ok_or_else(|| Error::type_mismatch(format!("?{var}"), Type::Int, value.value_type()))
    }

    /// Reads a bound boolean.
    ///
    /// # Errors
    /// Returns an error if the variable is unbound or not a boolean.
    pub fn flag(&self, var: &str) -> Result<bool> {
        let value = self.require(var)?;
        value
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(format!("?{var}"), Type::Bool, value.value_type()))
    }

    /// Compute a hash for refraction identity.
    ///
    /// Two binding sets with the same variables bound to the same values
    /// produce the same key, whichever facts supplied them.
    #[must_use]
    pub fn refraction_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

// =============================================================================
// Pattern Matching
// =============================================================================

/// One way a pattern is satisfied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Match {
    /// Variable bindings.
    pub bindings: Bindings,
    /// Facts matched by the positive clauses, in clause order.
    pub facts: Vec<FactId>,
}

/// Pattern matcher that executes patterns against a fact store.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Find every combination of facts that satisfies a pattern.
    ///
    /// A pattern with no positive clauses matches once, with empty
    /// bindings, provided its negations hold.
    #[must_use]
    pub fn match_pattern(pattern: &CompiledPattern, store: &FactStore) -> Vec<Match> {
        let mut results = Vec::new();
        Self::join(
            &pattern.clauses,
            &pattern.negations,
            store,
            Match::default(),
            &mut results,
        );
        results
    }

    /// Returns true if some fact in the store satisfies the clause under `bindings`.
    #[must_use]
    pub fn exists(clause: &FactPattern, store: &FactStore, bindings: &Bindings) -> bool {
        store
            .all_of_kind(clause.kind)
            .any(|stored| Self::try_bind_clause(clause, &stored.fact, bindings).is_some())
    }

    fn join(
        clauses: &[FactPattern],
        negations: &[FactPattern],
        store: &FactStore,
        partial: Match,
        results: &mut Vec<Match>,
    ) {
        let Some((clause, rest)) = clauses.split_first() else {
            if Self::check_negations(negations, store, &partial.bindings) {
                results.push(partial);
            }
            return;
        };

        for stored in store.all_of_kind(clause.kind) {
            if let Some(bindings) = Self::try_bind_clause(clause, &stored.fact, &partial.bindings) {
                let mut facts = partial.facts.clone();
                facts.push(stored.id);
                Self::join(rest, negations, store, Match { bindings, facts }, results);
            }
        }
    }

    fn try_bind_clause(clause: &FactPattern, fact: &Fact, bindings: &Bindings) -> Option<Bindings> {
        if fact.kind() != clause.kind {
            return None;
        }

        let mut new_bindings = bindings.clone();
        for constraint in &clause.constraints {
            let value = fact.get(constraint.attr())?;
            match constraint {
                Constraint::Literal { value: lit, .. } => {
                    if &value != lit {
                        return None;
                    }
                }
                Constraint::Bind { var, .. } => {
                    // Already bound: must unify
                    if let Some(existing) = new_bindings.get(var) {
                        if existing != &value {
                            return None;
                        }
                    } else {
                        new_bindings.set(*var, value);
                    }
                }
            }
        }

        Some(new_bindings)
    }

    /// Check that no fact satisfies any negated clause.
    ///
    /// Variables bound by positive clauses constrain the negation; variables
    /// that are still unbound act as wildcards.
    fn check_negations(negations: &[FactPattern], store: &FactStore, bindings: &Bindings) -> bool {
        negations
            .iter()
            .all(|clause| !Self::exists(clause, store, bindings))
    }
}

// =============================================================================
// Tests
// =============================================================================
