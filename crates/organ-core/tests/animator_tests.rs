// Host-side tests for per-frame scene animation.

use glam::Vec3;
use organ_core::constants::{CELL_COUNT, CELL_SPREAD};
use organ_core::{SceneAnimator, Subject};
use std::f64::consts::FRAC_PI_2;

#[test]
fn every_subject_spins_the_group() {
    for subject in Subject::ALL {
        let mut anim = SceneAnimator::new(subject, 1);
        anim.update(0.0);
        anim.update(16.0);
        assert!(
            (anim.group().rotation.y - 0.004).abs() < 1e-6,
            "{subject} spin {}",
            anim.group().rotation.y
        );
    }
}

#[test]
fn pulse_peak_is_one_plus_amplitude() {
    let mut anim = SceneAnimator::new(Subject::Heart, 1);
    let t = FRAC_PI_2 / anim.params.pulse_frequency_per_ms;
    anim.update(t);
    let s = anim.group().scale;
    assert!((s.x - 1.06).abs() < 1e-5, "scale {s:?}");
    assert_eq!(s.x, s.y);
    assert_eq!(s.y, s.z);
}

#[test]
fn pulse_stays_within_amplitude_band() {
    let mut anim = SceneAnimator::new(Subject::Heart, 1);
    for k in 0..400 {
        anim.update(k as f64 * 16.7);
        let s = anim.group().scale.x;
        assert!((0.94 - 1e-5..=1.06 + 1e-5).contains(&s));
    }
}

#[test]
fn non_pulsing_subjects_keep_unit_scale() {
    for subject in [Subject::Brain, Subject::Liver, Subject::Cells] {
        let mut anim = SceneAnimator::new(subject, 1);
        anim.update(1234.0);
        assert_eq!(anim.group().scale, Vec3::ONE);
    }
}

#[test]
fn cluster_objects_bob_with_index_phase_and_spin() {
    let mut anim = SceneAnimator::new(Subject::Cells, 9);
    let before: Vec<_> = anim.objects().iter().map(|o| o.transform).collect();
    let now = 5_000.0;
    anim.update(now);
    let t = now * 0.002;
    for (i, (obj, prev)) in anim.objects().iter().zip(&before).enumerate() {
        let dy = obj.transform.position.y - prev.position.y;
        let expected = (t + i as f64).sin() as f32 * 0.002;
        assert!((dy - expected).abs() < 1e-6, "object {i}: {dy} vs {expected}");
        assert!((obj.transform.rotation.x - prev.rotation.x - 0.01).abs() < 1e-6);
        assert_eq!(obj.transform.position.x, prev.position.x);
        assert_eq!(obj.transform.rotation.y, prev.rotation.y);
    }
}

#[test]
fn heart_objects_are_not_moved_by_frames() {
    let mut anim = SceneAnimator::new(Subject::Heart, 1);
    let before = anim.objects().to_vec();
    for k in 0..10 {
        anim.update(k as f64 * 16.0);
    }
    assert_eq!(anim.objects(), &before[..]);
}

#[test]
fn switching_to_cells_builds_fresh_cluster() {
    let mut anim = SceneAnimator::new(Subject::Heart, 3);
    anim.update(100.0);
    assert_eq!(anim.objects().len(), 5);

    anim.switch_subject(Subject::Cells);
    assert_eq!(anim.subject(), Subject::Cells);
    assert_eq!(anim.objects().len(), CELL_COUNT);
    // Group transform restarts with the new subject.
    assert_eq!(anim.group().rotation, Vec3::ZERO);
    assert_eq!(anim.group().scale, Vec3::ONE);

    let half = Vec3::from(CELL_SPREAD) * 0.5;
    for obj in anim.objects() {
        let p = obj.transform.position;
        assert!(p.abs().cmple(half).all(), "out of box: {p:?}");
        let r = obj.transform.rotation;
        assert!(r.cmpge(Vec3::ZERO).all() && r.cmplt(Vec3::splat(3.0)).all());
    }
}

#[test]
fn reswitching_cells_rerandomizes_layout() {
    let mut anim = SceneAnimator::new(Subject::Cells, 42);
    let first: Vec<_> = anim.objects().iter().map(|o| o.transform.position).collect();
    anim.switch_subject(Subject::Cells);
    let second: Vec<_> = anim.objects().iter().map(|o| o.transform.position).collect();
    assert_ne!(first, second);
}

#[test]
fn rebuilt_subjects_reuse_identical_geometry() {
    // Renderers cache uploads per subject, so a rebuild must not change meshes.
    let mut anim = SceneAnimator::new(Subject::Cells, 9);
    let meshes = anim.model().meshes.clone();
    let layout: Vec<_> = anim.objects().iter().map(|o| o.transform).collect();
    anim.switch_subject(Subject::Brain);
    anim.switch_subject(Subject::Cells);
    let rebuilt = &anim.model().meshes;
    assert_eq!(rebuilt.len(), meshes.len());
    for (a, b) in meshes.iter().zip(rebuilt) {
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.indices, b.indices);
        assert_eq!(a.topology, b.topology);
    }
    let relaid: Vec<_> = anim.objects().iter().map(|o| o.transform).collect();
    assert_ne!(layout, relaid);

    // Noise-displaced brain geometry does not depend on the animator seed.
    anim.switch_subject(Subject::Brain);
    let other = SceneAnimator::new(Subject::Brain, 1234);
    assert_eq!(anim.model().meshes.len(), other.model().meshes.len());
    for (a, b) in anim.model().meshes.iter().zip(&other.model().meshes) {
        assert_eq!(a.vertices, b.vertices);
    }
}

#[test]
fn same_seed_gives_same_layout() {
    let a = SceneAnimator::new(Subject::Cells, 77);
    let b = SceneAnimator::new(Subject::Cells, 77);
    assert_eq!(a.objects(), b.objects());
}

#[test]
fn world_matrices_follow_group_transform() {
    let mut anim = SceneAnimator::new(Subject::Liver, 1);
    let n = anim.objects().len();
    assert_eq!(anim.world_matrices().count(), n);
    anim.update(0.0);
    let group = anim.group().matrix();
    for (m, obj) in anim.world_matrices().zip(anim.objects()) {
        let expected = group * obj.transform.matrix();
        assert!(m.abs_diff_eq(expected, 1e-6));
    }
}
