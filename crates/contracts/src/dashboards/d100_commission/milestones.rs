//! Growth-by-volume progress bar: visible scale, marker layout and reward schedule.
//!
//! The bar maps a growth percentage onto `0..=100` horizontal units. The
//! visible range always contains 0, the activation point (target growth) and
//! the current growth with some margin on both sides.

use serde::{Deserialize, Serialize};

/// Bonus unlocked when growth reaches the activation point
pub const ACTIVATION_BONUS: f64 = 1000.0;
/// Bonus for every whole percentage point beyond the activation point
pub const STEP_BONUS: f64 = 250.0;
/// Negative reference markers, shown only while growth is negative
pub const NEGATIVE_MARKERS: [f64; 5] = [-50.0, -40.0, -30.0, -20.0, -10.0];
/// Forward markers generated after the activation point
pub const FORWARD_CANDIDATES: usize = 5;
/// Forward markers actually drawn
pub const MAX_FORWARD_MARKERS: usize = 4;

/// Absorbs subtraction noise only (`1.4 - 0.4 == 0.9999999999999999`).
/// Inputs carry at most a few decimals, so anything this close to a whole point is one.
const WHOLE_POINT_EPSILON: f64 = 1e-9;

/// Visible numeric range of the bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthScale {
    pub lowest: f64,
    pub highest: f64,
}

impl GrowthScale {
    pub fn new(growth: f64, target: f64) -> Self {
        Self {
            lowest: (-50.0_f64).min(growth - 10.0),
            highest: (target + 5.0).max(growth + 2.0),
        }
    }

    /// Width of the visible range; at least 12 points by construction
    pub fn range(&self) -> f64 {
        self.highest - self.lowest
    }

    /// Horizontal position of `value` in percent of the bar width
    pub fn position(&self, value: f64) -> f64 {
        (value - self.lowest) / self.range() * 100.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lowest && value <= self.highest
    }
}

pub fn has_reached_target(growth: f64, target: f64) -> bool {
    growth >= target
}

/// Whole percentage points achieved beyond the activation point
pub fn whole_points_beyond(growth: f64, target: f64) -> u32 {
    if growth < target {
        return 0;
    }
    (growth - target + WHOLE_POINT_EPSILON).floor() as u32
}

/// Total bonus unlocked by `growth`: 1000 at the target plus 250 per whole point beyond
pub fn unlocked_bonus(growth: f64, target: f64) -> f64 {
    if !has_reached_target(growth, target) {
        return 0.0;
    }
    ACTIVATION_BONUS + STEP_BONUS * whole_points_beyond(growth, target) as f64
}

/// Reward attached to the forward marker `steps` points after the target
pub fn step_reward(steps: u32) -> f64 {
    STEP_BONUS * steps as f64
}

/// Percent label as the bar prints it ("13%", "15.5%", "-10%")
pub fn percent_label(value: f64) -> String {
    // -0.0 would print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}%", value)
}

/// Growth label with at most one decimal ("18%", "12.3%")
pub fn growth_label(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    if trimmed == "-0" {
        "0%".to_string()
    } else {
        format!("{}%", trimmed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    Zero,
    Negative,
    Target,
    Forward,
}

/// Colouring of a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStyle {
    /// The activation point itself
    Target,
    /// Any value below the activation point
    BelowTarget,
    Unlocked,
    Locked,
}

impl MilestoneStyle {
    pub fn resolve(value: f64, is_target: bool, is_unlocked: bool, target: f64) -> Self {
        if is_target {
            MilestoneStyle::Target
        } else if value < target {
            MilestoneStyle::BelowTarget
        } else if is_unlocked {
            MilestoneStyle::Unlocked
        } else {
            MilestoneStyle::Locked
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            MilestoneStyle::Target => "milestone--target",
            MilestoneStyle::BelowTarget => "milestone--below",
            MilestoneStyle::Unlocked => "milestone--unlocked",
            MilestoneStyle::Locked => "milestone--locked",
        }
    }
}

/// A labelled point on the growth bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub value: f64,
    pub position: f64,
    pub label: String,
    pub kind: MilestoneKind,
    /// Bonus shown under the marker
    pub reward: Option<f64>,
    pub unlocked: bool,
    pub style: MilestoneStyle,
}

impl Milestone {
    fn new(
        scale: &GrowthScale,
        value: f64,
        kind: MilestoneKind,
        reward: Option<f64>,
        growth: f64,
        target: f64,
    ) -> Self {
        let unlocked = growth >= value;
        let is_target = kind == MilestoneKind::Target;
        Self {
            value,
            position: scale.position(value),
            label: percent_label(value),
            kind,
            reward,
            unlocked,
            style: MilestoneStyle::resolve(value, is_target, unlocked, target),
        }
    }
}

/// Colour of the bar fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillTone {
    Success,
    Danger,
}

impl FillTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillTone::Success => "success",
            FillTone::Danger => "danger",
        }
    }
}

/// Everything needed to draw the growth progress bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBarLayout {
    pub growth: f64,
    pub target: f64,
    pub scale: GrowthScale,
    pub reached: bool,
    pub current_position: f64,
    /// `max(0, current_position)`
    pub fill_width: f64,
    pub fill_tone: FillTone,
    pub zero: Milestone,
    /// Visible negative markers, only while growth is negative
    pub negative: Vec<Milestone>,
    pub activation: Milestone,
    /// Markers after the activation point, at most [`MAX_FORWARD_MARKERS`]
    pub forward: Vec<Milestone>,
    /// Bonus currently unlocked
    pub unlocked_bonus: f64,
}

impl ProgressBarLayout {
    pub fn new(growth: f64, target: f64) -> Self {
        let scale = GrowthScale::new(growth, target);
        let reached = has_reached_target(growth, target);
        let current_position = scale.position(growth);

        let fill_tone = if growth >= 0.0 && reached {
            FillTone::Success
        } else {
            FillTone::Danger
        };

        let zero = Milestone::new(&scale, 0.0, MilestoneKind::Zero, None, growth, target);

        let negative = if growth < 0.0 {
            NEGATIVE_MARKERS
                .iter()
                .copied()
                .filter(|v| scale.contains(*v))
                .map(|v| Milestone::new(&scale, v, MilestoneKind::Negative, None, growth, target))
                .collect()
        } else {
            Vec::new()
        };

        let activation = Milestone::new(
            &scale,
            target,
            MilestoneKind::Target,
            Some(ACTIVATION_BONUS),
            growth,
            target,
        );

        let forward = (1..=FORWARD_CANDIDATES as u32)
            .map(|steps| (steps, target + steps as f64))
            .filter(|(_, value)| *value <= scale.highest)
            .take(MAX_FORWARD_MARKERS)
            .map(|(steps, value)| {
                Milestone::new(
                    &scale,
                    value,
                    MilestoneKind::Forward,
                    Some(step_reward(steps)),
                    growth,
                    target,
                )
            })
            .collect();

        Self {
            growth,
            target,
            scale,
            reached,
            current_position,
            fill_width: current_position.max(0.0),
            fill_tone,
            zero,
            negative,
            activation,
            forward,
            unlocked_bonus: unlocked_bonus(growth, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scale_contains_zero_target_and_growth() {
        for (growth, target) in [(18.0, 13.0), (10.0, 13.0), (-5.0, 13.0), (-70.0, 13.0), (40.0, 13.0)] {
            let scale = GrowthScale::new(growth, target);
            assert!(scale.contains(0.0));
            assert!(scale.contains(target));
            assert!(scale.contains(growth));
            assert!(scale.range() >= 12.0);
        }
    }

    #[test]
    fn test_scale_bounds() {
        let scale = GrowthScale::new(18.0, 13.0);
        assert_eq!(scale.lowest, -50.0);
        assert_eq!(scale.highest, 20.0);

        let scale = GrowthScale::new(-45.0, 13.0);
        assert_eq!(scale.lowest, -55.0);
        assert_eq!(scale.highest, 18.0);
    }

    #[test]
    fn test_position_is_linear() {
        let scale = GrowthScale::new(18.0, 13.0);
        assert!(approx(scale.position(-50.0), 0.0));
        assert!(approx(scale.position(20.0), 100.0));
        assert!(approx(scale.position(-15.0), 50.0));
        assert!(approx(scale.position(0.0), 50.0 / 70.0 * 100.0));
    }

    #[test]
    fn test_reward_schedule() {
        assert_eq!(unlocked_bonus(13.0, 13.0), 1000.0);
        assert_eq!(unlocked_bonus(13.0 + 2.4, 13.0), 1500.0);
        assert_eq!(unlocked_bonus(16.0, 13.0), 1750.0);
        assert_eq!(unlocked_bonus(12.9, 13.0), 0.0);
        assert_eq!(unlocked_bonus(-5.0, 13.0), 0.0);
        assert_eq!(whole_points_beyond(13.99, 13.0), 0);
    }

    #[test]
    fn test_whole_points_ignore_float_noise() {
        assert_eq!(whole_points_beyond(1.4, 0.4), 1);
        assert_eq!(whole_points_beyond(2.3, 0.3), 2);
        assert_eq!(unlocked_bonus(1.4, 0.4), 1250.0);
        // A genuinely partial point still does not count
        assert_eq!(whole_points_beyond(13.99, 13.0), 0);
        assert_eq!(whole_points_beyond(14.999, 13.0), 1);
    }

    #[test]
    fn test_layout_for_reached_target() {
        let layout = ProgressBarLayout::new(18.0, 13.0);
        assert!(layout.reached);
        assert_eq!(layout.fill_tone, FillTone::Success);
        assert!(layout.negative.is_empty());
        assert_eq!(layout.activation.reward, Some(1000.0));
        assert_eq!(layout.activation.style, MilestoneStyle::Target);

        // highest = 20: 14..=18 all visible, capped at four
        let values: Vec<f64> = layout.forward.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![14.0, 15.0, 16.0, 17.0]);
        let rewards: Vec<f64> = layout.forward.iter().filter_map(|m| m.reward).collect();
        assert_eq!(rewards, vec![250.0, 500.0, 750.0, 1000.0]);
        assert!(layout.forward.iter().all(|m| m.unlocked));
        assert_eq!(layout.unlocked_bonus, 2250.0);
    }

    #[test]
    fn test_layout_below_target() {
        let layout = ProgressBarLayout::new(10.0, 13.0);
        assert!(!layout.reached);
        assert_eq!(layout.fill_tone, FillTone::Danger);
        let values: Vec<f64> = layout.forward.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![14.0, 15.0, 16.0, 17.0]);
        assert!(layout.forward.iter().all(|m| m.style == MilestoneStyle::Locked));
        assert_eq!(layout.zero.style, MilestoneStyle::BelowTarget);
        assert_eq!(layout.unlocked_bonus, 0.0);
    }

    #[test]
    fn test_layout_negative_growth_shows_visible_negative_markers() {
        let layout = ProgressBarLayout::new(-5.0, 13.0);
        assert_eq!(layout.scale.lowest, -50.0);
        let values: Vec<f64> = layout.negative.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![-50.0, -40.0, -30.0, -20.0, -10.0]);
        assert_eq!(layout.fill_tone, FillTone::Danger);
        assert!(layout.fill_width >= 0.0);
        assert!(layout.negative.iter().all(|m| m.kind == MilestoneKind::Negative));
    }

    #[test]
    fn test_fill_width_never_negative() {
        let layout = ProgressBarLayout::new(-80.0, 13.0);
        assert!(layout.current_position >= 0.0);
        assert!(layout.fill_width >= 0.0);
        assert!(layout.negative.iter().all(|m| layout.scale.contains(m.value)));
    }

    #[test]
    fn test_milestone_style_resolution() {
        assert_eq!(MilestoneStyle::resolve(13.0, true, true, 13.0), MilestoneStyle::Target);
        assert_eq!(MilestoneStyle::resolve(-10.0, false, false, 13.0), MilestoneStyle::BelowTarget);
        assert_eq!(MilestoneStyle::resolve(15.0, false, true, 13.0), MilestoneStyle::Unlocked);
        assert_eq!(MilestoneStyle::resolve(15.0, false, false, 13.0), MilestoneStyle::Locked);
    }

    #[test]
    fn test_labels() {
        assert_eq!(percent_label(13.0), "13%");
        assert_eq!(percent_label(-10.0), "-10%");
        assert_eq!(percent_label(-0.0), "0%");
        assert_eq!(percent_label(15.5), "15.5%");
        assert_eq!(growth_label(18.0), "18%");
        assert_eq!(growth_label(12.34), "12.3%");
    }
}
