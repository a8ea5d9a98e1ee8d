//! Circle Layout
//!
//! Places the twelve pitch classes around a circle, stepping a fixed number
//! of semitones per slot (7 for the circle of fifths, 1 for the chromatic
//! circle), and turns rotations of that circle into transpositions.
//!
//! Points are `Complex<f64>` values: `re` is x, `im` is y.

use crate::pitch_space::{PitchClass, SEMITONES};
use crate::verticality::Verticality;
use num_complex::Complex;
use std::f64::consts::PI;
use thiserror::Error;

/// Angular width of one slot.
pub const SLOT_ANGLE: f64 = 2.0 * PI / SEMITONES as f64;

/// Errors returned when configuring a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The step would place several pitches on the same slot.
    #[error("step interval {step} shares a factor with 12; pitches would overlap")]
    StepNotCoprime {
        /// The rejected step interval.
        step: i32,
    },

    /// The radius is zero, negative or not finite.
    #[error("invalid radius {radius}")]
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
}

/// Plain layout parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Semitones advanced per slot.
    pub step_interval: i32,
    /// Center x.
    pub center_x: f64,
    /// Center y.
    pub center_y: f64,
    /// Circle radius.
    pub radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            step_interval: 7,
            center_x: 0.0,
            center_y: 0.0,
            radius: 1.0,
        }
    }
}

/// Builder for a `CircleLayout`.
#[derive(Debug, Clone, Default)]
pub struct CircleLayoutBuilder {
    config: LayoutConfig,
}

impl CircleLayoutBuilder {
    /// Start with a unit circle of fifths centered on the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing parameters.
    pub fn from_config(config: LayoutConfig) -> Self {
        CircleLayoutBuilder { config }
    }

    /// Semitones advanced per slot.
    pub fn step_interval(mut self, step: i32) -> Self {
        self.config.step_interval = step;
        self
    }

    /// Center of the circle.
    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.config.center_x = x;
        self.config.center_y = y;
        self
    }

    /// Radius of the circle.
    pub fn radius(mut self, radius: f64) -> Self {
        self.config.radius = radius;
        self
    }

    /// Finalize and create the layout.
    pub fn build(self) -> Result<CircleLayout, LayoutError> {
        let LayoutConfig {
            step_interval,
            radius,
            ..
        } = self.config;

        if gcd(step_interval.rem_euclid(SEMITONES as i32), SEMITONES as i32) != 1 {
            return Err(LayoutError::StepNotCoprime {
                step: step_interval,
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(LayoutError::InvalidRadius { radius });
        }

        Ok(CircleLayout::assemble(self.config))
    }
}

/// Geometry of one circular arrangement. Holds no pitch state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleLayout {
    step_interval: i32,
    center: Complex<f64>,
    radius: f64,
    slots: [PitchClass; SEMITONES],
}

impl CircleLayout {
    /// Start customizing with a builder.
    pub fn builder() -> CircleLayoutBuilder {
        CircleLayoutBuilder::new()
    }

    /// Unit circle of fifths on the origin.
    pub fn circle_of_fifths() -> Self {
        Self::preset(7)
    }

    /// Unit chromatic circle on the origin.
    pub fn chromatic() -> Self {
        Self::preset(1)
    }

    fn preset(step_interval: i32) -> Self {
        Self::assemble(LayoutConfig {
            step_interval,
            ..LayoutConfig::default()
        })
    }

    /// Lay out an already validated config.
    fn assemble(config: LayoutConfig) -> Self {
        let mut slots = [PitchClass::C; SEMITONES];
        for p in PitchClass::ALL {
            slots[slot_of(p, config.step_interval)] = p;
        }
        CircleLayout {
            step_interval: config.step_interval,
            center: Complex::new(config.center_x, config.center_y),
            radius: config.radius,
            slots,
        }
    }

    /// Current parameters.
    pub fn config(&self) -> LayoutConfig {
        LayoutConfig {
            step_interval: self.step_interval,
            center_x: self.center.re,
            center_y: self.center.im,
            radius: self.radius,
        }
    }

    /// Semitones advanced per slot.
    pub fn step_interval(&self) -> i32 {
        self.step_interval
    }

    /// Center point.
    pub fn center(&self) -> Complex<f64> {
        self.center
    }

    /// Circle radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius of the clickable dot drawn for each pitch.
    pub fn dot_radius(&self) -> f64 {
        self.radius / 20.0
    }

    /// Slot (`0..12`, increasing with angle) that `pitch` occupies.
    pub fn slot(&self, pitch: PitchClass) -> usize {
        slot_of(pitch, self.step_interval)
    }

    /// Pitch occupying `slot` (taken mod 12).
    pub fn pitch_at_slot(&self, slot: usize) -> PitchClass {
        self.slots[slot % SEMITONES]
    }

    /// Pitches in slot order.
    pub fn pitches(&self) -> [PitchClass; SEMITONES] {
        self.slots
    }

    /// Angle of `pitch`: `index * step * 2π / 12`, unreduced.
    pub fn angle(&self, pitch: PitchClass) -> f64 {
        (pitch.index() as i64 * i64::from(self.step_interval)) as f64 * SLOT_ANGLE
    }

    /// Point on the circle where `pitch` sits.
    pub fn position(&self, pitch: PitchClass) -> Complex<f64> {
        self.center + Complex::from_polar(self.radius, self.angle(pitch))
    }

    /// Pitch whose dot contains `point`, if any.
    pub fn pitch_at(&self, point: Complex<f64>) -> Option<PitchClass> {
        let dot = self.dot_radius();
        PitchClass::ALL
            .into_iter()
            .find(|&p| (self.position(p) - point).norm() < dot)
    }

    /// Polar angle of `point` around the center, in `(-π, π]`.
    pub fn angle_of(&self, point: Complex<f64>) -> f64 {
        (point - self.center).arg()
    }

    /// Rotate the circle by `steps` slots: transposes by `steps * step_interval`.
    pub fn rotate(&self, verticality: &mut Verticality, steps: i32) {
        let semitones = (i64::from(self.step_interval) * i64::from(steps))
            .rem_euclid(SEMITONES as i64) as i32;
        verticality.transpose(semitones);
    }

    /// Toggle the pitch under `point`. Returns the pitch, if one was hit.
    pub fn toggle_at(
        &self,
        verticality: &mut Verticality,
        point: Complex<f64>,
    ) -> Option<PitchClass> {
        let pitch = self.pitch_at(point)?;
        verticality.toggle_pitch(pitch);
        Some(pitch)
    }
}

impl Default for CircleLayout {
    fn default() -> Self {
        CircleLayout::circle_of_fifths()
    }
}

/// Turns a continuous drag around a layout into whole-slot rotations.
#[derive(Debug, Clone, Default)]
pub struct DragRotation {
    last_angle: Option<f64>,
    accumulated: f64,
}

impl DragRotation {
    /// Idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.last_angle.is_some()
    }

    /// Angle accumulated but not yet turned into a rotation.
    pub fn pending_angle(&self) -> f64 {
        self.accumulated
    }

    /// Start a drag at `point`.
    pub fn begin(&mut self, layout: &CircleLayout, point: Complex<f64>) {
        self.last_angle = Some(layout.angle_of(point));
        self.accumulated = 0.0;
    }

    /// Move the pointer to `point`, rotating `verticality` once a full slot
    /// has been swept. Returns the slots rotated (0 if none, or if no drag is
    /// in progress).
    pub fn drag_to(
        &mut self,
        layout: &CircleLayout,
        verticality: &mut Verticality,
        point: Complex<f64>,
    ) -> i32 {
        let Some(last) = self.last_angle else {
            return 0;
        };
        let angle = layout.angle_of(point);
        self.accumulated += wrap_angle(angle - last);
        self.last_angle = Some(angle);

        let steps = (self.accumulated / SLOT_ANGLE).trunc();
        if steps == 0.0 {
            return 0;
        }
        self.accumulated -= steps * SLOT_ANGLE;
        let steps = steps as i32;
        layout.rotate(verticality, steps);
        steps
    }

    /// Finish the drag, dropping any partial slot.
    pub fn end(&mut self) {
        self.last_angle = None;
        self.accumulated = 0.0;
    }
}

fn slot_of(pitch: PitchClass, step_interval: i32) -> usize {
    (pitch.index() as i64 * i64::from(step_interval)).rem_euclid(SEMITONES as i64) as usize
}

/// Shortest signed angle equivalent to `delta`, in `(-π, π]`.
fn wrap_angle(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(2.0 * PI);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}
