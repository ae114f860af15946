//! Cosmetic loading timeline: a fixed four-stage animation with no relation
//! to real backend progress.

/// Minimum wall-clock time between submission and result reveal, in
/// milliseconds. Responses that arrive earlier are held back; responses that
/// arrive later are revealed immediately.
pub const PROGRESS_FLOOR_MS: u64 = 10_000;

/// One stage of the simulated loading timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub label: &'static str,
    pub duration_ms: u64,
}

/// The fixed stage sequence. Durations sum to [`PROGRESS_FLOOR_MS`], so the
/// bar lands on 100% exactly when the reveal floor opens.
pub const PROGRESS_STEPS: [ProgressStep; 4] = [
    ProgressStep {
        label: "Reading PDF file and extracting content...",
        duration_ms: 2500,
    },
    ProgressStep {
        label: "Analyzing text structure and keywords...",
        duration_ms: 2000,
    },
    ProgressStep {
        label: "Processing with advanced AI model...",
        duration_ms: 3500,
    },
    ProgressStep {
        label: "Matching skills and generating results...",
        duration_ms: 2000,
    },
];

/// Visual state of one step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Active,
    Completed,
}

/// A point-in-time sample of the timeline, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Eased bar position, 0.0–100.0.
    pub percent: f64,
    /// Label of the stage the bar is currently moving through.
    pub label: &'static str,
    /// Indicator state per step, in timeline order.
    pub steps: [StepState; 4],
}

/// Cubic ease-out: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Eased value between `start` and `end` after `elapsed_ms` of a
/// `duration_ms` long segment. Clamped to `end` once the duration is spent.
pub fn interpolate(start: f64, end: f64, duration_ms: u64, elapsed_ms: u64) -> f64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return end;
    }
    let t = elapsed_ms as f64 / duration_ms as f64;
    start + (end - start) * ease_out_cubic(t)
}

/// Samples the timeline `elapsed_ms` after submission.
///
/// Each stage moves the bar from its predecessor's cumulative target to its
/// own (25/50/75/100). Past the end of the timeline the sample saturates at
/// 100% with every step completed, however long the real request takes.
pub fn sample(elapsed_ms: u64) -> ProgressSnapshot {
    let step_count = PROGRESS_STEPS.len();
    let mut steps = [StepState::Pending; 4];
    let mut stage_start = 0u64;

    for (index, step) in PROGRESS_STEPS.iter().enumerate() {
        let stage_end = stage_start + step.duration_ms;
        if elapsed_ms < stage_end {
            let from = cumulative_target(index, step_count, -1);
            let to = cumulative_target(index, step_count, 0);
            for state in steps.iter_mut().take(index) {
                *state = StepState::Completed;
            }
            steps[index] = StepState::Active;
            return ProgressSnapshot {
                percent: interpolate(from, to, step.duration_ms, elapsed_ms - stage_start),
                label: step.label,
                steps,
            };
        }
        stage_start = stage_end;
    }

    ProgressSnapshot {
        percent: 100.0,
        label: PROGRESS_STEPS[step_count - 1].label,
        steps: [StepState::Completed; 4],
    }
}

fn cumulative_target(index: usize, step_count: usize, offset: i32) -> f64 {
    let position = index as i32 + 1 + offset;
    if position <= 0 {
        return 0.0;
    }
    (position as f64 / step_count as f64) * 100.0
}
