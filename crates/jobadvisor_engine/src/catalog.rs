//! The job recommendation rules.
//!
//! Three branch-selection rules pick at most one of indoor, outdoor or
//! hybrid. Branch rules then propose a recommendation, and two adjustment
//! rules may supersede it with a newer one.

use std::sync::LazyLock;

use jobadvisor_foundation::Result;
use jobadvisor_storage::{Attr, Branch, Fact, FactKind, Job, Recommendation};

use crate::pattern::{CompiledPattern, FactPattern};
use crate::rule::{Rule, RuleContext};

static JOB_RULES: LazyLock<Vec<Rule>> = LazyLock::new(build);

/// The job rules, in catalog order.
///
/// Built once; catalog order is the final conflict-resolution tie-break.
#[must_use]
pub fn job_rules() -> &'static [Rule] {
    &JOB_RULES
}

fn build() -> Vec<Rule> {
    vec![
        // Branch selection
        Rule::new(
            "prefer_hybrid",
            CompiledPattern::new().with(profile().eq(Attr::PrefersHybrid, true)),
            prefer_hybrid,
        )
        .with_salience(90),
        Rule::new(
            "prefer_indoor",
            CompiledPattern::new()
                .with(profile().eq(Attr::PrefersIndoor, true))
                .without(FactPattern::new(FactKind::Branch)),
            prefer_indoor,
        )
        .with_salience(80),
        Rule::new(
            "prefer_outdoor",
            CompiledPattern::new()
                .with(profile().eq(Attr::PrefersOutdoor, true))
                .without(FactPattern::new(FactKind::Branch)),
            prefer_outdoor,
        )
        .with_salience(70),
        // Indoor
        Rule::new(
            "indoor_admin",
            CompiledPattern::new().with(branch(Branch::Indoor)).with(
                profile()
                    .eq(Attr::StableSchedule, true)
                    .bind(Attr::SalaryExpectation, "s"),
            ),
            indoor_admin,
        ),
        Rule::new(
            "indoor_remote_it",
            CompiledPattern::new().with(branch(Branch::Indoor)).with(
                profile()
                    .eq(Attr::RemoteOk, true)
                    .bind(Attr::SkillMatch, "sm")
                    .bind(Attr::SalaryExpectation, "s"),
            ),
            indoor_remote_it,
        ),
        Rule::new(
            "indoor_fallback_it",
            CompiledPattern::new()
                .with(branch(Branch::Indoor))
                .without(FactPattern::new(FactKind::Recommendation)),
            indoor_fallback_it,
        ),
        // Hybrid
        Rule::new(
            "hybrid_rules",
            CompiledPattern::new().with(branch(Branch::Hybrid)).with(
                profile()
                    .bind(Attr::SkillMatch, "sm")
                    .bind(Attr::YearsExperience, "y")
                    .bind(Attr::RemoteOk, "r"),
            ),
            hybrid_rules,
        ),
        // Outdoor
        Rule::new(
            "outdoor_delivery_full",
            CompiledPattern::new().with(branch(Branch::Outdoor)).with(
                profile()
                    .eq(Attr::HighPhysical, true)
                    .eq(Attr::HasDrivingLicense, true)
                    .eq(Attr::WillingShifts, true),
            ),
            outdoor_delivery_full,
        ),
        Rule::new(
            "outdoor_delivery_shifts",
            CompiledPattern::new()
                .with(branch(Branch::Outdoor))
                .with(profile().eq(Attr::WillingShifts, true)),
            outdoor_delivery_shifts,
        )
        .with_salience(10),
        Rule::new(
            "outdoor_sales",
            CompiledPattern::new()
                .with(branch(Branch::Outdoor))
                .without(FactPattern::new(FactKind::Recommendation)),
            outdoor_sales,
        ),
        // Adjustments
        Rule::new(
            "admin_salary_adjust",
            CompiledPattern::new()
                .with(recommendation(Job::Admin))
                .with(profile().bind(Attr::SalaryExpectation, "s")),
            admin_salary_adjust,
        ),
        Rule::new(
            "it_skill_check",
            CompiledPattern::new()
                .with(recommendation(Job::It))
                .with(profile().bind(Attr::SkillMatch, "sm")),
            it_skill_check,
        ),
    ]
}

fn profile() -> FactPattern {
    FactPattern::new(FactKind::Profile)
}

fn branch(branch: Branch) -> FactPattern {
    FactPattern::new(FactKind::Branch).eq(Attr::Branch, branch)
}

fn recommendation(job: Job) -> FactPattern {
    FactPattern::new(FactKind::Recommendation).eq(Attr::Job, job)
}

fn choose_branch(ctx: &mut RuleContext<'_>, branch: Branch) {
    ctx.declare(Fact::Branch(branch));
    ctx.note(format!("Branch: {branch}"));
}

fn recommend(ctx: &mut RuleContext<'_>, job: Job, reason: &'static str, note: &'static str) {
    ctx.declare(Fact::Recommendation(Recommendation::new(job, reason)));
    ctx.note(note);
}

// =============================================================================
// Actions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn prefer_hybrid(ctx: &mut RuleContext<'_>) -> Result<()> {
    choose_branch(ctx, Branch::Hybrid);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn prefer_indoor(ctx: &mut RuleContext<'_>) -> Result<()> {
    choose_branch(ctx, Branch::Indoor);
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn prefer_outdoor(ctx: &mut RuleContext<'_>) -> Result<()> {
    choose_branch(ctx, Branch::Outdoor);
    Ok(())
}

fn indoor_admin(ctx: &mut RuleContext<'_>) -> Result<()> {
    let s = ctx.number("s")?;
    if s < ctx.config().salary_med {
        recommend(
            ctx,
            Job::Admin,
            "Indoor + stable + modest salary",
            "Rule: indoor_admin",
        );
    }
    Ok(())
}

fn indoor_remote_it(ctx: &mut RuleContext<'_>) -> Result<()> {
    let sm = ctx.number("sm")?;
    let s = ctx.number("s")?;
    if sm >= 0.6 {
        if s >= ctx.config().salary_med {
            recommend(
                ctx,
                Job::It,
                "Remote+skilled+med/high salary -> IT",
                "Rule: indoor_remote_it -> IT",
            );
        } else {
            recommend(
                ctx,
                Job::RemoteFreelance,
                "Remote+skilled+lower salary -> FREELANCE",
                "Rule: indoor_remote_it -> REMOTE/FREELANCE",
            );
        }
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn indoor_fallback_it(ctx: &mut RuleContext<'_>) -> Result<()> {
    recommend(ctx, Job::It, "Indoor fallback -> IT", "Rule: indoor_fallback_it");
    Ok(())
}

fn hybrid_rules(ctx: &mut RuleContext<'_>) -> Result<()> {
    let sm = ctx.number("sm")?;
    let y = ctx.int("y")?;
    let r = ctx.flag("r")?;

    if sm > 0.6 && y > 2 {
        if r {
            recommend(
                ctx,
                Job::RemoteFreelance,
                "Hybrid+skill+exp+remote -> FREELANCE",
                "Rule: hybrid -> FREELANCE",
            );
        } else {
            recommend(ctx, Job::It, "Hybrid+skill -> IT", "Rule: hybrid -> IT");
        }
    } else if y >= 1 {
        recommend(
            ctx,
            Job::It,
            "Hybrid some experience -> IT",
            "Rule: hybrid fallback -> IT",
        );
    } else {
        recommend(
            ctx,
            Job::Admin,
            "Hybrid low experience -> ADMIN",
            "Rule: hybrid fallback -> ADMIN",
        );
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn outdoor_delivery_full(ctx: &mut RuleContext<'_>) -> Result<()> {
    recommend(
        ctx,
        Job::Delivery,
        "Outdoor+physical+driving+shifts -> DELIVERY",
        "Rule: outdoor_delivery_full",
    );
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn outdoor_delivery_shifts(ctx: &mut RuleContext<'_>) -> Result<()> {
    recommend(
        ctx,
        Job::Delivery,
        "Willing for shifts -> DELIVERY",
        "Rule: outdoor_delivery_shifts",
    );
    Ok(())
}

#[allow(clippy::unnecessary_wraps)]
fn outdoor_sales(ctx: &mut RuleContext<'_>) -> Result<()> {
    recommend(ctx, Job::Sales, "Outdoor -> SALES", "Rule: outdoor_sales");
    Ok(())
}

fn admin_salary_adjust(ctx: &mut RuleContext<'_>) -> Result<()> {
    let s = ctx.number("s")?;
    if s > ctx.config().salary_med {
        recommend(
            ctx,
            Job::It,
            "Admin salary high -> IT",
            "Rule: admin_salary_adjust -> IT",
        );
    }
    Ok(())
}

fn it_skill_check(ctx: &mut RuleContext<'_>) -> Result<()> {
    let sm = ctx.number("sm")?;
    if sm < 0.4 {
        recommend(
            ctx,
            Job::Admin,
            "Low skill match -> ADMIN",
            "Rule: it_skill_check -> ADMIN",
        );
    }
    Ok(())
}
