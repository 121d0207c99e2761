//! Nice tick generation for the count axis.
//!
//! Steps are powers of ten multiplied by 1, 2 or 5, picked so roughly
//! `count` ticks cover the domain. Values are computed from integer
//! multiples of the step to avoid accumulated float drift.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick bounds plus signed increment.
///
/// A negative increment means "divide by `-increment`", used for sub-unit
/// steps so that e.g. `0.1` is represented exactly as `1 / 10`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickPlan {
    first: i64,
    last: i64,
    increment: f64,
}

fn tick_plan(start: f64, stop: f64, count: f64) -> Option<TickPlan> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment) = if power < 0.0 {
        let increment = 10f64.powf(-power) / factor;
        let mut first = (start * increment).round();
        let mut last = (stop * increment).round();
        if first / increment < start {
            first += 1.0;
        }
        if last / increment > stop {
            last -= 1.0;
        }
        (first, last, -increment)
    } else {
        let increment = 10f64.powf(power) * factor;
        let mut first = (start / increment).round();
        let mut last = (stop / increment).round();
        if first * increment < start {
            first += 1.0;
        }
        if last * increment > stop {
            last -= 1.0;
        }
        (first, last, increment)
    };

    // Subnormal steps overflow the scale factor.
    if !increment.is_finite() || !first.is_finite() || !last.is_finite() {
        return None;
    }
    if last - first > (count * 10.0).max(10.0) {
        return None;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_plan(start, stop, count * 2.0);
    }
    if last < first {
        first = 0.0;
        last = -1.0;
    }

    Some(TickPlan {
        first: first as i64,
        last: last as i64,
        increment,
    })
}

/// Returns nice tick values covering `[start, stop]` (inclusive when the
/// bounds land on a step). Reversed or degenerate domains yield a single
/// tick at `start` when it is finite.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (low, high, reversed) = if stop < start {
        (stop, start, true)
    } else {
        (start, stop, false)
    };

    let Some(plan) = tick_plan(low, high, count as f64) else {
        return Vec::new();
    };
    if plan.last < plan.first {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (plan.first..=plan.last)
        .map(|i| {
            let i = i as f64;
            if plan.increment < 0.0 {
                i / -plan.increment
            } else {
                i * plan.increment
            }
        })
        .collect();
    if reversed {
        ticks.reverse();
    }
    ticks
}

/// Step between consecutive ticks produced by [`linear_ticks`].
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (low, high) = if stop < start { (stop, start) } else { (start, stop) };
    let plan = tick_plan(low, high, count as f64)?;
    Some(if plan.increment < 0.0 {
        1.0 / -plan.increment
    } else {
        plan.increment
    })
}

/// Formats a tick value with thousands separators and just enough
/// decimals for the step (`12000` -> `12,000`, `0.25` with step 0.05 -> `0.25`).
#[must_use]
pub fn format_tick_label(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 2);
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
