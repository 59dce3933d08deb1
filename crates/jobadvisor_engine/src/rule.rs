//! Production rule engine.
//!
//! This module provides rules, activations, refraction, and the
//! match-select-fire loop that runs a fact store to quiescence.

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use jobadvisor_foundation::{Error, ErrorContext, ErrorKind, Result, SemanticLimit};
use jobadvisor_storage::{Fact, FactId, FactKind, FactStore};

use crate::agenda::{Agenda, firing_order};
use crate::config::{AdvisorConfig, DEFAULT_MAX_ACTIVATIONS};
use crate::memory::WorkingMemory;
use crate::observer::EngineObserver;
use crate::pattern::{Bindings, CompiledPattern, PatternMatcher};
use crate::provenance::Derivation;

// =============================================================================
// Rule
// =============================================================================

/// Action run when a rule fires.
pub type RuleAction = fn(&mut RuleContext<'_>) -> Result<()>;

/// A rule: a pattern, a priority, and an action.
#[derive(Clone)]
pub struct Rule {
    /// Rule name, used in traces and provenance
    pub name: &'static str,
    /// Priority (higher fires first)
    pub salience: i32,
    /// Pattern for matching
    pub pattern: CompiledPattern,
    /// What to do when fired
    pub action: RuleAction,
}

impl Rule {
    /// Creates a rule with salience 0.
    #[must_use]
    pub fn new(name: &'static str, pattern: CompiledPattern, action: RuleAction) -> Self {
        Self {
            name,
            salience: 0,
            pattern,
            action,
        }
    }

    /// Sets the salience (priority).
    #[must_use]
    pub fn with_salience(mut self, salience: i32) -> Self {
        self.salience = salience;
        self
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("salience", &self.salience)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Rule Context
// =============================================================================

/// What a rule action can see and do while it fires.
///
/// Actions read bindings and configuration, and queue facts and trace
/// reasons; the engine declares the queued facts once the action returns.
pub struct RuleContext<'a> {
    rule: &'static str,
    bindings: &'a Bindings,
    config: &'a AdvisorConfig,
    store: &'a FactStore,
    declared: Vec<Fact>,
    notes: Vec<String>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context for one firing.
    #[must_use]
    pub fn new(
        rule: &'static str,
        bindings: &'a Bindings,
        config: &'a AdvisorConfig,
        store: &'a FactStore,
    ) -> Self {
        Self {
            rule,
            bindings,
            config,
            store,
            declared: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Name of the firing rule.
    #[must_use]
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    /// Variable bindings of the firing activation.
    #[must_use]
    pub fn bindings(&self) -> &Bindings {
        self.bindings
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        self.config
    }

    /// Facts declared before this firing.
    #[must_use]
    pub fn store(&self) -> &FactStore {
        self.store
    }

    /// Reads a bound number.
    ///
    /// # Errors
    /// Returns an error if the variable is unbound or not numeric.
    pub fn number(&self, var: &str) -> Result<f64> {
        self.bindings.number(var)
    }

    /// Reads a bound integer.
    ///
    /// # Errors
    /// Returns an error if the variable is unbound or not an integer.
    pub fn int(&self, var: &str) -> Result<i64> {
        self.bindings.int(var)
    }

    /// Reads a bound boolean.
    ///
    /// # Errors
    /// Returns an error if the variable is unbound or not a boolean.
    pub fn flag(&self, var: &str) -> Result<bool> {
        self.bindings.flag(var)
    }

    /// Queues a fact for declaration.
    pub fn declare(&mut self, fact: Fact) {
        self.declared.push(fact);
    }

    /// Appends a reason to the run's trace.
    pub fn note(&mut self, reason: impl Into<String>) {
        self.notes.push(reason.into());
    }

    fn into_parts(self) -> (Vec<Fact>, Vec<String>) {
        (self.declared, self.notes)
    }
}

// =============================================================================
// Activation
// =============================================================================

/// A rule activation ready to fire.
#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    /// Position of the rule in the rule list
    pub rule: usize,
    /// Which rule
    pub rule_name: &'static str,
    /// Rule salience
    pub salience: i32,
    /// Variable bindings from pattern match
    pub bindings: Bindings,
    /// Facts matched by the positive clauses, in clause order
    pub facts: Vec<FactId>,
    /// Matched fact ids, most recent first (conflict resolution key)
    pub recency: Vec<FactId>,
    key: u64,
}

impl Activation {
    /// Creates an activation.
    #[must_use]
    pub fn new(
        rule: usize,
        rule_name: &'static str,
        salience: i32,
        bindings: Bindings,
        facts: Vec<FactId>,
    ) -> Self {
        let mut recency = facts.clone();
        recency.sort_unstable_by(|a, b| b.cmp(a));

        let mut hasher = DefaultHasher::new();
        rule_name.hash(&mut hasher);
        bindings.refraction_key().hash(&mut hasher);

        Self {
            rule,
            rule_name,
            salience,
            bindings,
            facts,
            recency,
            key: hasher.finish(),
        }
    }

    /// Refraction key (rule + variable bindings).
    ///
    /// Matched fact identities are not part of the key: a rule
    /// fires at most once for a given set of bound values.
    #[must_use]
    pub fn refraction_key(&self) -> u64 {
        self.key
    }
}

// =============================================================================
// Rule Engine
// =============================================================================

/// Manages rule execution within one run.
#[derive(Clone, Debug)]
pub struct ProductionRuleEngine {
    /// Pending activations
    agenda: Agenda,
    /// Refracted activations (already fired)
    refracted: HashSet<u64>,
    /// Activations already reported to observers
    seen: HashSet<u64>,
    /// Number of activations fired (for kill switch)
    activation_count: usize,
    /// Maximum activations per run
    max_activations: usize,
}

impl Default for ProductionRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductionRuleEngine {
    /// Creates a new rule engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agenda: Agenda::new(),
            refracted: HashSet::new(),
            seen: HashSet::new(),
            activation_count: 0,
            max_activations: DEFAULT_MAX_ACTIVATIONS,
        }
    }

    /// Creates an engine using the configured kill-switch threshold.
    #[must_use]
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new().with_max_activations(config.max_activations)
    }

    /// Sets the maximum activations (kill switch threshold).
    #[must_use]
    pub fn with_max_activations(mut self, max: usize) -> Self {
        self.max_activations = max;
        self
    }

    /// Find all current activations, respecting refraction, in firing order.
    ///
    /// This recomputes every rule from scratch and does not touch the agenda.
    #[must_use]
    pub fn find_activations(&self, rules: &[Rule], store: &FactStore) -> Vec<Activation> {
        let mut activations: Vec<_> = rules
            .iter()
            .enumerate()
            .flat_map(|(index, rule)| self.activations_for(index, rule, store))
            .collect();
        activations.sort_by(firing_order);
        activations
    }

    /// One activation per distinct binding of a rule, skipping refracted ones.
    ///
    /// When several fact combinations give the same binding, the most
    /// recent combination represents it.
    fn activations_for(&self, index: usize, rule: &Rule, store: &FactStore) -> Vec<Activation> {
        let mut activations: Vec<Activation> = Vec::new();

        for m in PatternMatcher::match_pattern(&rule.pattern, store) {
            let activation = Activation::new(index, rule.name, rule.salience, m.bindings, m.facts);
            let key = activation.refraction_key();

            if self.refracted.contains(&key) {
                continue;
            }

            match activations.iter_mut().find(|a| a.refraction_key() == key) {
                Some(existing) if activation.recency > existing.recency => *existing = activation,
                Some(_) => {}
                None => activations.push(activation),
            }
        }

        activations
    }

    /// Re-matches rules and refreshes their agenda slots.
    ///
    /// With `changed` set, only rules reading one of those kinds are re-matched.
    fn refresh(
        &mut self,
        rules: &[Rule],
        store: &FactStore,
        changed: Option<&[FactKind]>,
        observer: &mut dyn EngineObserver,
    ) {
        for (index, rule) in rules.iter().enumerate() {
            if let Some(kinds) = changed {
                if !kinds.iter().any(|kind| rule.pattern.references(*kind)) {
                    continue;
                }
            }

            let activations = self.activations_for(index, rule, store);
            for activation in &activations {
                if self.seen.insert(activation.refraction_key()) {
                    observer.rule_activated(activation);
                }
            }
            self.agenda.replace(index, activations);
        }
    }

    /// Fire an activation: run its action, declare what it queued, and
    /// record provenance and trace reasons.
    ///
    /// Returns the ids of the declared facts.
    ///
    /// # Errors
    /// Returns an error if max activations is exceeded or the action fails.
    pub fn fire(
        &mut self,
        activation: &Activation,
        rules: &[Rule],
        memory: &mut WorkingMemory,
        config: &AdvisorConfig,
        observer: &mut dyn EngineObserver,
    ) -> Result<Vec<FactId>> {
        // Check kill switch
        self.activation_count += 1;
        if self.activation_count > self.max_activations {
            return Err(Error::limit_exceeded(SemanticLimit::MaxActivations {
                limit: self.max_activations,
                context: Some(format!("in rule {}", activation.rule_name)),
            })
            .with_context(
                ErrorContext::new()
                    .with_source(activation.rule_name)
                    .with_trace(memory.trace.entries().to_vec()),
            ));
        }

        // Record refraction
        self.refracted.insert(activation.refraction_key());

        let rule = rules.get(activation.rule).ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "activation for missing rule {}",
                activation.rule_name
            )))
        })?;

        observer.rule_firing(activation);

        let mut ctx = RuleContext::new(rule.name, &activation.bindings, config, &memory.store);
        (rule.action)(&mut ctx).map_err(|e| {
            let context = e.context.clone().unwrap_or_default().with_source(rule.name);
            e.with_context(context)
        })?;
        let (facts, notes) = ctx.into_parts();

        let mut declared = Vec::with_capacity(facts.len());
        for fact in facts {
            let id = memory.store.declare(fact.clone());
            memory
                .provenance
                .record(Derivation::new(id, rule.name, activation.facts.clone()));
            observer.fact_declared(id, &fact, Some(rule.name));
            declared.push(id);
        }
        for note in notes {
            memory.trace.push(note);
        }

        observer.rule_fired(activation, &declared);
        Ok(declared)
    }

    /// Run rules to quiescence.
    ///
    /// Repeatedly fires the top activation of the agenda, re-matching the
    /// rules affected by whatever it declared, until the agenda is empty or
    /// the kill switch triggers. Returns the number of activations fired.
    ///
    /// # Errors
    /// Returns an error if max activations is exceeded or a rule action fails.
    pub fn run_to_quiescence(
        &mut self,
        rules: &[Rule],
        memory: &mut WorkingMemory,
        config: &AdvisorConfig,
        observer: &mut dyn EngineObserver,
    ) -> Result<usize> {
        self.refresh(rules, &memory.store, None, observer);

        while let Some(activation) = self.agenda.pop() {
            let declared = self.fire(&activation, rules, memory, config, observer)?;

            let mut changed: Vec<FactKind> = Vec::new();
            for kind in declared
                .iter()
                .filter_map(|id| memory.store.get(*id).map(Fact::kind))
            {
                if !changed.contains(&kind) {
                    changed.push(kind);
                }
            }
            if !changed.is_empty() {
                self.refresh(rules, &memory.store, Some(&changed), observer);
            }
        }

        observer.run_complete(self.activation_count);
        Ok(self.activation_count)
    }

    /// Returns the pending activations.
    #[must_use]
    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    /// Returns the number of activations fired.
    #[must_use]
    pub fn activation_count(&self) -> usize {
        self.activation_count
    }

    /// Returns true if an activation with this refraction key already fired.
    #[must_use]
    pub fn is_refracted(&self, activation: &Activation) -> bool {
        self.refracted.contains(&activation.refraction_key())
    }
}

// =============================================================================
// Tests
// =============================================================================
