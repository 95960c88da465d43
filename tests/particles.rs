#![cfg(not(target_arch = "wasm32"))]

use folio_wasm::config::ParticleConfig;
use folio_wasm::particles::{link_alpha, Particle, ParticleField};

fn field(seed: u64) -> ParticleField {
    let mut rng = fastrand::Rng::with_seed(seed);
    ParticleField::new(ParticleConfig::default(), 800.0, 600.0, &mut rng)
}

fn still(x: f64, y: f64) -> Particle {
    Particle {
        x,
        y,
        vx: 0.0,
        vy: 0.0,
        size: 4.0,
        opacity: 0.2,
    }
}

#[test]
fn setup_draws_within_configured_ranges() {
    let f = field(7);
    assert_eq!(f.particles().len(), 50);
    for p in f.particles() {
        assert!((0.0..800.0).contains(&p.x), "x={}", p.x);
        assert!((0.0..600.0).contains(&p.y), "y={}", p.y);
        assert!((-0.5..=0.5).contains(&p.vx) && (-0.5..=0.5).contains(&p.vy));
        assert!((2.0..=6.0).contains(&p.size));
        assert!((0.1..=0.3).contains(&p.opacity));
        assert!((25.5..=76.5).contains(&p.fill_alpha()));
    }
}

#[test]
fn one_frame_moves_by_velocity_and_flips_on_bounce() {
    let mut f = field(11);
    let before = f.particles().to_vec();
    f.step();
    for (old, new) in before.iter().zip(f.particles()) {
        assert_eq!(new.x, old.x + old.vx);
        assert_eq!(new.y, old.y + old.vy);
        let out_x = new.x < 0.0 || new.x > 800.0;
        let out_y = new.y < 0.0 || new.y > 600.0;
        assert_eq!(new.vx, if out_x { -old.vx } else { old.vx });
        assert_eq!(new.vy, if out_y { -old.vy } else { old.vy });
    }
}

#[test]
fn edge_contact_reverses_only_that_axis() {
    let config = ParticleConfig::default();
    let p = Particle {
        x: 799.8,
        y: 300.0,
        vx: 0.4,
        vy: -0.3,
        size: 3.0,
        opacity: 0.2,
    };
    let mut f = ParticleField::from_particles(config, 800.0, 600.0, vec![p]);
    f.step();
    let q = f.particles()[0];
    assert!(q.x > 800.0, "not clamped to the edge");
    assert_eq!(q.vx, -0.4);
    assert_eq!(q.vy, -0.3);

    f.step();
    let r = f.particles()[0];
    assert!(r.x <= 800.0);
    assert_eq!(r.vx, -0.4);
}

#[test]
fn particles_stay_within_one_step_of_the_field() {
    let mut f = field(3);
    let speeds: Vec<(f64, f64)> = f
        .particles()
        .iter()
        .map(|p| (p.vx.abs(), p.vy.abs()))
        .collect();
    for _ in 0..20_000 {
        f.step();
        for (p, &(sx, sy)) in f.particles().iter().zip(&speeds) {
            assert!(p.x >= -sx && p.x <= 800.0 + sx, "x={} escaped", p.x);
            assert!(p.y >= -sy && p.y <= 600.0 + sy, "y={} escaped", p.y);
            assert_eq!(p.vx.abs(), sx);
            assert_eq!(p.vy.abs(), sy);
        }
    }
}

#[test]
fn resize_changes_bounds_but_not_positions() {
    let mut f = field(5);
    let before = f.particles().to_vec();
    f.resize(320.0, 240.0);
    assert_eq!(f.size(), (320.0, 240.0));
    assert_eq!(f.particles(), &before[..]);
}

#[test]
fn link_alpha_fades_linearly_to_the_cutoff() {
    let config = ParticleConfig::default();
    assert_eq!(link_alpha(0.0, &config), Some(50.0));
    assert_eq!(link_alpha(50.0, &config), Some(25.0));
    assert_eq!(link_alpha(100.0, &config), None);
    assert_eq!(link_alpha(250.0, &config), None);
}

#[test]
fn link_scan_covers_every_ordered_pair_including_self() {
    let config = ParticleConfig::default();

    let far = ParticleField::from_particles(
        config.clone(),
        800.0,
        600.0,
        vec![still(0.0, 0.0), still(100.0, 0.0)],
    );
    let links: Vec<_> = far.links().collect();
    assert_eq!(links.len(), 2, "only the two degenerate self links");
    for l in &links {
        assert_eq!(l.from, l.to);
        assert_eq!(l.alpha, 50.0);
    }

    let near = ParticleField::from_particles(
        config,
        800.0,
        600.0,
        vec![still(10.0, 10.0), still(40.0, 50.0)],
    );
    let links: Vec<_> = near.links().collect();
    assert_eq!(links.len(), 4);
    let cross = links.iter().find(|l| l.from != l.to).unwrap();
    assert!((cross.alpha - 25.0).abs() < 1e-12, "alpha={}", cross.alpha);
}
