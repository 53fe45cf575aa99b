//! Per-frame scene animation.
//!
//! The animator owns the objects of the active subject and mutates their
//! transforms once per display frame. Switching subject swaps the whole
//! collection at once; nothing inside `update` changes the subject.

use crate::constants::*;
use crate::organs::{self, OrganModel};
use crate::subject::{AnimationRule, Subject};
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;

/// Position, XYZ Euler rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatableObject {
    pub transform: Transform,
    /// Index into the active model's meshes.
    pub mesh: usize,
    /// Index into the active model's materials.
    pub material: usize,
}

pub type ObjectList = SmallVec<[AnimatableObject; 16]>;

#[derive(Clone, Debug)]
pub struct AnimatorParams {
    pub spin_per_frame: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency_per_ms: f64,
    pub cluster_phase_per_ms: f64,
    pub cluster_bob_step: f32,
    pub cluster_spin_per_frame: f32,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            spin_per_frame: GROUP_SPIN_PER_FRAME,
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_frequency_per_ms: PULSE_FREQUENCY_PER_MS,
            cluster_phase_per_ms: CLUSTER_PHASE_PER_MS,
            cluster_bob_step: CLUSTER_BOB_STEP,
            cluster_spin_per_frame: CLUSTER_SPIN_PER_FRAME,
        }
    }
}

pub struct SceneAnimator {
    pub params: AnimatorParams,
    subject: Subject,
    group: Transform,
    model: OrganModel,
    rng: StdRng,
}

impl SceneAnimator {
    pub fn new(subject: Subject, seed: u64) -> Self {
        Self::with_params(subject, AnimatorParams::default(), seed)
    }

    pub fn with_params(subject: Subject, params: AnimatorParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let model = organs::build(subject, &mut rng);
        log::info!("[scene] built {} ({} objects)", subject, model.objects.len());
        Self {
            params,
            subject,
            group: Transform::default(),
            model,
            rng,
        }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    /// Transform applied to the whole subject group.
    pub fn group(&self) -> &Transform {
        &self.group
    }

    pub fn objects(&self) -> &[AnimatableObject] {
        &self.model.objects
    }

    /// Geometry and materials of the active subject.
    pub fn model(&self) -> &OrganModel {
        &self.model
    }

    /// Replace the displayed subject. Always rebuilds, even for the same tag.
    pub fn switch_subject(&mut self, subject: Subject) {
        self.model = organs::build(subject, &mut self.rng);
        self.subject = subject;
        self.group = Transform::default();
        log::info!(
            "[scene] switched to {} ({} objects)",
            subject,
            self.model.objects.len()
        );
    }

    /// Uniform pulse scale at a wall-clock time.
    pub fn pulse_scale(&self, now_ms: f64) -> f32 {
        let phase = now_ms * self.params.pulse_frequency_per_ms;
        1.0 + phase.sin() as f32 * self.params.pulse_amplitude
    }

    /// Advance one display frame.
    pub fn update(&mut self, now_ms: f64) {
        self.group.rotation.y += self.params.spin_per_frame;

        match self.subject.rule() {
            AnimationRule::Rotate => {}
            AnimationRule::Pulse => {
                self.group.scale = Vec3::splat(self.pulse_scale(now_ms));
            }
            AnimationRule::Cluster => {
                let t = now_ms * self.params.cluster_phase_per_ms;
                let step = self.params.cluster_bob_step;
                let spin = self.params.cluster_spin_per_frame;
                for (i, obj) in self.model.objects.iter_mut().enumerate() {
                    obj.transform.position.y += (t + i as f64).sin() as f32 * step;
                    obj.transform.rotation.x += spin;
                }
            }
        }
    }

    /// World matrices of every object, group transform applied.
    pub fn world_matrices(&self) -> impl Iterator<Item = Mat4> + '_ {
        let group = self.group.matrix();
        self.model
            .objects
            .iter()
            .map(move |o| group * o.transform.matrix())
    }
}
