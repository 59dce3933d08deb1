//! Fact types.
//!
//! Facts are a closed, typed union. Patterns address attributes through
//! [`Attr`] rather than by string name, so a misspelt attribute is a
//! compile error instead of a silent non-match.

use std::fmt;
use std::sync::Arc;

use jobadvisor_foundation::{Type, Value};

use crate::profile::Profile;

// =============================================================================
// Fact Identity
// =============================================================================

/// Sequential identity assigned to a fact when it is declared.
///
/// Ids increase monotonically in declaration order, so comparing two ids
/// compares how recently the facts were declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactId(pub u64);

impl FactId {
    /// Returns the position of this fact in declaration order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f-{}", self.0)
    }
}

// =============================================================================
// Fact Kinds
// =============================================================================

/// Kind tag of a fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FactKind {
    /// The candidate profile (exactly one per run).
    Profile,
    /// The selected branch of the rule tree.
    Branch,
    /// A job recommendation.
    Recommendation,
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Profile => "Profile",
            Self::Branch => "Branch",
            Self::Recommendation => "Recommendation",
        })
    }
}

/// Work-setting branch selected from the profile's preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Office or other indoor work.
    Indoor,
    /// Field or outdoor work.
    Outdoor,
    /// Mixed indoor and remote work.
    Hybrid,
}

impl Branch {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Branch> for Value {
    fn from(branch: Branch) -> Self {
        Value::Keyword(branch.as_str())
    }
}

/// Job category a recommendation can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Job {
    /// Administrative work.
    Admin,
    /// Information technology.
    It,
    /// Delivery and logistics.
    Delivery,
    /// Field sales.
    Sales,
    /// Remote or freelance work.
    RemoteFreelance,
}

impl Job {
    /// Every job category, in a fixed order.
    pub const ALL: [Job; 5] = [
        Job::Admin,
        Job::It,
        Job::Delivery,
        Job::Sales,
        Job::RemoteFreelance,
    ];

    /// Canonical upper-case code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::It => "IT",
            Self::Delivery => "DELIVERY",
            Self::Sales => "SALES",
            Self::RemoteFreelance => "REMOTE/FREELANCE",
        }
    }

    /// Looks a job up by its canonical code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|job| job.as_str() == code)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Job> for Value {
    fn from(job: Job) -> Self {
        Value::Keyword(job.as_str())
    }
}

/// A recommended job category with its justification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    /// The recommended job.
    pub job: Job,
    /// Why the job was recommended.
    pub reason: Arc<str>,
}

impl Recommendation {
    /// Creates a recommendation.
    #[must_use]
    pub fn new(job: Job, reason: impl Into<Arc<str>>) -> Self {
        Self {
            job,
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

/// A named, typed attribute of some fact kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    /// `Profile.prefers_indoor`
    PrefersIndoor,
    /// `Profile.prefers_outdoor`
    PrefersOutdoor,
    /// `Profile.prefers_hybrid`
    PrefersHybrid,
    /// `Profile.stable_schedule`
    StableSchedule,
    /// `Profile.remote_ok`
    RemoteOk,
    /// `Profile.education`
    Education,
    /// `Profile.skill_match`
    SkillMatch,
    /// `Profile.years_experience`
    YearsExperience,
    /// `Profile.high_physical`
    HighPhysical,
    /// `Profile.willing_shifts`
    WillingShifts,
    /// `Profile.has_driving_license`
    HasDrivingLicense,
    /// `Profile.salary_expectation`
    SalaryExpectation,
    /// `Branch.branch`
    Branch,
    /// `Recommendation.job`
    Job,
    /// `Recommendation.reason`
    Reason,
}

impl Attr {
    /// The profile attributes, in record field order.
    pub const PROFILE: [Attr; 12] = [
        Attr::PrefersIndoor,
        Attr::PrefersOutdoor,
        Attr::PrefersHybrid,
        Attr::StableSchedule,
        Attr::RemoteOk,
        Attr::Education,
        Attr::SkillMatch,
        Attr::YearsExperience,
        Attr::HighPhysical,
        Attr::WillingShifts,
        Attr::HasDrivingLicense,
        Attr::SalaryExpectation,
    ];

    /// The fact kind this attribute belongs to.
    #[must_use]
    pub const fn kind(self) -> FactKind {
        match self {
            Self::Branch => FactKind::Branch,
            Self::Job | Self::Reason => FactKind::Recommendation,
            _ => FactKind::Profile,
        }
    }

    /// Field name as it appears in records and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrefersIndoor => "prefers_indoor",
            Self::PrefersOutdoor => "prefers_outdoor",
            Self::PrefersHybrid => "prefers_hybrid",
            Self::StableSchedule => "stable_schedule",
            Self::RemoteOk => "remote_ok",
            Self::Education => "education",
            Self::SkillMatch => "skill_match",
            Self::YearsExperience => "years_experience",
            Self::HighPhysical => "high_physical",
            Self::WillingShifts => "willing_shifts",
            Self::HasDrivingLicense => "has_driving_license",
            Self::SalaryExpectation => "salary_expectation",
            Self::Branch => "branch",
            Self::Job => "job",
            Self::Reason => "reason",
        }
    }

    /// Declared type of the attribute.
    #[must_use]
    pub const fn value_type(self) -> Type {
        match self {
            Self::Education | Self::Reason => Type::String,
            Self::SkillMatch | Self::SalaryExpectation => Type::Float,
            Self::YearsExperience => Type::Int,
            Self::Branch | Self::Job => Type::Keyword,
            _ => Type::Bool,
        }
    }

    /// Finds a profile attribute by its record field name.
    #[must_use]
    pub fn profile_field(name: &str) -> Option<Self> {
        Self::PROFILE.into_iter().find(|attr| attr.name() == name)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind(), self.name())
    }
}

// =============================================================================
// Fact
// =============================================================================

/// An immutable fact.
#[derive(Clone, Debug, PartialEq)]
pub enum Fact {
    /// The candidate profile.
    Profile(Profile),
    /// The selected branch.
    Branch(Branch),
    /// A job recommendation.
    Recommendation(Recommendation),
}

impl Fact {
    /// Returns the kind tag of this fact.
    #[must_use]
    pub const fn kind(&self) -> FactKind {
        match self {
            Self::Profile(_) => FactKind::Profile,
            Self::Branch(_) => FactKind::Branch,
            Self::Recommendation(_) => FactKind::Recommendation,
        }
    }

    /// Reads an attribute. Returns `None` if the attribute belongs to another kind.
    #[must_use]
    pub fn get(&self, attr: Attr) -> Option<Value> {
        match (self, attr) {
            (Self::Profile(profile), _) => profile.get(attr),
            (Self::Branch(branch), Attr::Branch) => Some((*branch).into()),
            (Self::Recommendation(rec), Attr::Job) => Some(rec.job.into()),
            (Self::Recommendation(rec), Attr::Reason) => Some(Value::String(rec.reason.clone())),
            _ => None,
        }
    }

    /// Returns the recommendation, if this is one.
    #[must_use]
    pub fn as_recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Recommendation(rec) => Some(rec),
            _ => None,
        }
    }

    /// Returns the branch, if this is one.
    #[must_use]
    pub fn as_branch(&self) -> Option<Branch> {
        match self {
            Self::Branch(branch) => Some(*branch),
            _ => None,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(_) => write!(f, "Profile"),
            Self::Branch(branch) => write!(f, "Branch({branch})"),
            Self::Recommendation(rec) => write!(f, "Recommendation({}: {})", rec.job, rec.reason),
        }
    }
}
