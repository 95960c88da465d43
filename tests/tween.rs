#![cfg(not(target_arch = "wasm32"))]

use folio_wasm::easing::Easing;
use folio_wasm::tween::{sample_keyframes, stagger, Pose, Property, Track, Tween};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn easings_pin_their_endpoints() {
    for e in [Easing::Linear, Easing::OutQuad, Easing::OutCubic, Easing::OutExpo] {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        assert_eq!(e.apply(-3.0), 0.0, "{e:?}");
        assert_eq!(e.apply(7.0), 1.0, "{e:?}");
    }
    assert!(approx_eq(Easing::OutQuad.apply(0.5), 0.75));
    assert!(approx_eq(Easing::OutCubic.apply(0.5), 0.875));
    assert!(Easing::OutExpo.apply(0.5) > Easing::OutCubic.apply(0.5));
}

#[test]
fn keyframes_are_evenly_spaced() {
    let keys = [0.0, 0.3, 0.0];
    assert_eq!(sample_keyframes(&keys, 0.0, Easing::Linear), 0.0);
    assert!(approx_eq(sample_keyframes(&keys, 0.25, Easing::Linear), 0.15));
    assert!(approx_eq(sample_keyframes(&keys, 0.5, Easing::Linear), 0.3));
    assert!(approx_eq(sample_keyframes(&keys, 0.75, Easing::Linear), 0.15));
    assert_eq!(sample_keyframes(&keys, 1.0, Easing::Linear), 0.0);
    assert_eq!(sample_keyframes(&[4.0], 0.6, Easing::OutQuad), 4.0);
}

#[test]
fn card_entrance_holds_start_pose_through_its_stagger() {
    let tween = Tween::new(800.0)
        .easing(Easing::OutExpo)
        .delay(stagger(2, 200.0))
        .track(Track::values(Property::TranslateY, &[50.0, 0.0]))
        .track(Track::values(Property::Opacity, &[0.0, 1.0]));
    let motion = tween.resolve(&Pose::default());
    let mut pose = Pose::default();

    assert!(!motion.sample_into(399.0, &mut pose));
    assert_eq!(pose.translate_y, 50.0);
    assert_eq!(pose.opacity, 0.0);

    assert!(!motion.sample_into(800.0, &mut pose));
    assert!(pose.translate_y < 50.0 && pose.translate_y > 0.0);

    assert!(motion.sample_into(1200.0, &mut pose));
    assert_eq!(pose.translate_y, 0.0);
    assert_eq!(pose.opacity, 1.0);
}

#[test]
fn scalar_target_starts_from_the_current_pose() {
    let grow = Tween::new(300.0)
        .easing(Easing::OutQuad)
        .track(Track::to(Property::Scale, 1.02));
    let mut pose = Pose::default();
    grow.resolve(&pose).sample_into(150.0, &mut pose);
    let mid = pose.scale;
    assert!(mid > 1.0 && mid < 1.02);

    // A leave mid-flight reverses from where the grow left off.
    let shrink = Tween::new(300.0)
        .easing(Easing::OutQuad)
        .track(Track::to(Property::Scale, 1.0));
    let motion = shrink.resolve(&pose);
    motion.sample_into(0.0, &mut pose);
    assert_eq!(pose.scale, mid);
    assert!(motion.sample_into(300.0, &mut pose));
    assert_eq!(pose.scale, 1.0);
    assert!(!motion.touches(Property::Opacity));
}

#[test]
fn stagger_is_index_times_step() {
    let delays: Vec<f64> = (0..4).map(|i| stagger(i, 500.0)).collect();
    assert_eq!(delays, vec![0.0, 500.0, 1000.0, 1500.0]);
}

#[test]
fn pose_renders_a_css_transform() {
    let mut pose = Pose::default();
    pose.set(Property::TranslateY, 12.5);
    pose.set(Property::Scale, 1.2);
    assert_eq!(pose.transform(), "translateY(12.5px) scale(1.2)");
    assert_eq!(pose.get(Property::Opacity), 1.0);
}
