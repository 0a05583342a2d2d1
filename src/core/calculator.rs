use crate::domain::model::{InputRecord, OutputRecord};

const MONTHS_PER_YEAR: f64 = 12.0;

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Second-layer defense behind the validator: NaN becomes 0, every field is
/// floored at 0, and the reduction percentage is capped at 100. Idempotent.
pub fn sanitize(input: &InputRecord) -> InputRecord {
    InputRecord {
        wage_eur_per_hour: clamp_non_negative(input.wage_eur_per_hour),
        hours_saved_per_unit: clamp_non_negative(input.hours_saved_per_unit),
        units_per_month: clamp_non_negative(input.units_per_month),
        baseline_errors_per_month: clamp_non_negative(input.baseline_errors_per_month),
        error_reduction_pct: clamp_non_negative(input.error_reduction_pct).min(100.0),
        cost_per_error_eur: clamp_non_negative(input.cost_per_error_eur),
        one_time_cost_eur: clamp_non_negative(input.one_time_cost_eur),
        monthly_recurring_cost_eur: clamp_non_negative(input.monthly_recurring_cost_eur),
    }
}

/// Pure mapping from inputs to the derived metrics. Never fails: malformed
/// values are clamped by [`sanitize`] first, and the zero-cost and
/// no-payback cases produce positive infinity as a defined output.
pub fn compute(input: &InputRecord) -> OutputRecord {
    let input = sanitize(input);

    let labor_savings_monthly =
        input.units_per_month * input.hours_saved_per_unit * input.wage_eur_per_hour;
    let error_savings_monthly = input.baseline_errors_per_month
        * (input.error_reduction_pct / 100.0)
        * input.cost_per_error_eur;
    let gross_benefit_monthly = labor_savings_monthly + error_savings_monthly;
    let net_benefit_monthly = gross_benefit_monthly - input.monthly_recurring_cost_eur;

    let annual_gross_benefit = gross_benefit_monthly * MONTHS_PER_YEAR;
    let annual_total_cost =
        input.one_time_cost_eur + input.monthly_recurring_cost_eur * MONTHS_PER_YEAR;
    let annual_net_benefit = annual_gross_benefit - annual_total_cost;

    // 0/0 would be NaN; free automation is infinite return by convention.
    let roi = if annual_total_cost == 0.0 {
        f64::INFINITY
    } else {
        annual_net_benefit / annual_total_cost
    };
    let payback_months = if net_benefit_monthly > 0.0 {
        input.one_time_cost_eur / net_benefit_monthly
    } else {
        f64::INFINITY
    };

    OutputRecord {
        labor_savings_monthly,
        error_savings_monthly,
        gross_benefit_monthly,
        net_benefit_monthly,
        annual_gross_benefit,
        annual_total_cost,
        annual_net_benefit,
        roi,
        payback_months,
        annualized_benefit_eur: annual_net_benefit,
    }
}
