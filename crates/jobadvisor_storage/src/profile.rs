//! Candidate profile and its validation from untyped records.

use std::sync::Arc;

use jobadvisor_foundation::{Error, Record, Result, Type, Value};

use crate::fact::Attr;

/// The candidate profile a run reasons about.
///
/// Every field has a default, so a profile can be built from a partial
/// record. `skill_match` is conceptually in `[0, 1]` but is not clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// Prefers indoor work.
    pub prefers_indoor: bool,
    /// Prefers outdoor work.
    pub prefers_outdoor: bool,
    /// Prefers hybrid work.
    pub prefers_hybrid: bool,
    /// Wants a stable schedule.
    pub stable_schedule: bool,
    /// Accepts remote work.
    pub remote_ok: bool,
    /// Highest education, free text.
    pub education: Arc<str>,
    /// How well skills match the target job.
    pub skill_match: f64,
    /// Years of relevant experience.
    pub years_experience: i64,
    /// Comfortable with physically demanding work.
    pub high_physical: bool,
    /// Willing to work shifts.
    pub willing_shifts: bool,
    /// Holds a driving license.
    pub has_driving_license: bool,
    /// Expected monthly salary.
    pub salary_expectation: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            prefers_indoor: false,
            prefers_outdoor: false,
            prefers_hybrid: false,
            stable_schedule: false,
            remote_ok: false,
            education: "None".into(),
            skill_match: 0.0,
            years_experience: 0,
            high_physical: false,
            willing_shifts: false,
            has_driving_license: false,
            salary_expectation: 0.0,
        }
    }
}

macro_rules! builder {
    ($($field:ident: $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Builder method to set `", stringify!($field), "`.")]
            #[must_use]
            pub fn $field(mut self, $field: $ty) -> Self {
                self.$field = $field;
                self
            }
        )*
    };
}

impl Profile {
    /// Creates a profile with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        prefers_indoor: bool,
        prefers_outdoor: bool,
        prefers_hybrid: bool,
        stable_schedule: bool,
        remote_ok: bool,
        skill_match: f64,
        years_experience: i64,
        high_physical: bool,
        willing_shifts: bool,
        has_driving_license: bool,
        salary_expectation: f64,
    }

    /// Builder method to set `education`.
    #[must_use]
    pub fn education(mut self, education: impl Into<Arc<str>>) -> Self {
        self.education = education.into();
        self
    }

    /// Validates a record and builds a profile from it.
    ///
    /// Absent or nil fields take their defaults. Integers are accepted for
    /// float fields.
    ///
    /// # Errors
    /// Returns a validation error if a field is unknown, has the wrong type,
    /// or holds a non-finite number.
    pub fn from_record(record: &Record) -> Result<Self> {
        let mut profile = Self::default();
        for (name, value) in record.iter() {
            let attr = Attr::profile_field(name).ok_or_else(|| Error::unknown_field(name))?;
            if value.is_nil() {
                continue;
            }
            profile.assign(attr, value)?;
        }
        Ok(profile)
    }

    /// Converts the profile into a record holding every field.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Attr::PROFILE
            .into_iter()
            .filter_map(|attr| self.get(attr).map(|value| (attr.name(), value)))
            .collect()
    }

    /// Reads a profile attribute. Returns `None` for attributes of other kinds.
    #[must_use]
    pub fn get(&self, attr: Attr) -> Option<Value> {
        let value = match attr {
            Attr::PrefersIndoor => self.prefers_indoor.into(),
            Attr::PrefersOutdoor => self.prefers_outdoor.into(),
            Attr::PrefersHybrid => self.prefers_hybrid.into(),
            Attr::StableSchedule => self.stable_schedule.into(),
            Attr::RemoteOk => self.remote_ok.into(),
            Attr::Education => Value::String(self.education.clone()),
            Attr::SkillMatch => self.skill_match.into(),
            Attr::YearsExperience => self.years_experience.into(),
            Attr::HighPhysical => self.high_physical.into(),
            Attr::WillingShifts => self.willing_shifts.into(),
            Attr::HasDrivingLicense => self.has_driving_license.into(),
            Attr::SalaryExpectation => self.salary_expectation.into(),
            Attr::Branch | Attr::Job | Attr::Reason => return None,
        };
        Some(value)
    }

    fn assign(&mut self, attr: Attr, value: &Value) -> Result<()> {
        let name = attr.name();
        match attr {
            Attr::PrefersIndoor => self.prefers_indoor = bool_field(name, value)?,
            Attr::PrefersOutdoor => self.prefers_outdoor = bool_field(name, value)?,
            Attr::PrefersHybrid => self.prefers_hybrid = bool_field(name, value)?,
            Attr::StableSchedule => self.stable_schedule = bool_field(name, value)?,
            Attr::RemoteOk => self.remote_ok = bool_field(name, value)?,
            Attr::Education => {
                let text = value
                    .as_str()
                    .ok_or_else(|| Error::type_mismatch(name, Type::String, value.value_type()))?;
                self.education = text.into();
            }
            Attr::SkillMatch => self.skill_match = float_field(name, value)?,
            Attr::YearsExperience => {
                self.years_experience = value
                    .as_int()
                    .ok_or_else(|| Error::type_mismatch(name, Type::Int, value.value_type()))?;
            }
            Attr::HighPhysical => self.high_physical = bool_field(name, value)?,
            Attr::WillingShifts => self.willing_shifts = bool_field(name, value)?,
            Attr::HasDrivingLicense => self.has_driving_license = bool_field(name, value)?,
            Attr::SalaryExpectation => self.salary_expectation = float_field(name, value)?,
            Attr::Branch | Attr::Job | Attr::Reason => {
                return Err(Error::unknown_field(name));
            }
        }
        Ok(())
    }
}

fn bool_field(name: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::type_mismatch(name, Type::Bool, value.value_type()))
}

fn float_field(name: &str, value: &Value) -> Result<f64> {
    let n = value
        .as_number()
        .ok_or_else(|| Error::type_mismatch(name, Type::Float, value.value_type()))?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(Error::invalid_value(name, "must be a finite number"))
    }
}
