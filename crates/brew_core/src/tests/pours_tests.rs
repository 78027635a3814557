use super::*;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn standard_medium_splits_evenly() {
    let plan = plan_pours(236.0, Flavor::Standard, Concentration::Medium);
    assert_close(&plan.flavor_pours, &[47.2, 47.2]);
    assert_close(&plan.concentration_pours, &[70.8, 70.8]);
}

#[test]
fn bright_strong_front_loads_flavor_and_pours_thirds() {
    let plan = plan_pours(236.0, Flavor::Bright, Concentration::Strong);
    assert_close(&plan.flavor_pours, &[94.4 * 0.5834, 94.4 * 0.4166]);
    assert_close(&plan.concentration_pours, &[47.2, 47.2, 47.2]);
    assert!((plan.flavor_pours[0] - 55.07).abs() < 0.01);
}

#[test]
fn sweet_light_back_loads_flavor_in_one_strength_pour() {
    let plan = plan_pours(472.0, Flavor::Sweet, Concentration::Light);
    assert_close(&plan.flavor_pours, &[188.8 * 0.4166, 188.8 * 0.5834]);
    assert_close(&plan.concentration_pours, &[283.2]);
}

#[test]
fn pour_counts_follow_concentration() {
    for (concentration, count) in [
        (Concentration::Light, 1),
        (Concentration::Medium, 2),
        (Concentration::Strong, 3),
    ] {
        for &flavor in Flavor::ALL {
            let plan = plan_pours(500.0, flavor, concentration);
            assert_eq!(plan.flavor_pours.len(), 2);
            assert_eq!(plan.concentration_pours.len(), count);
        }
    }
}

#[test]
fn phases_take_forty_and_sixty_percent() {
    for &flavor in Flavor::ALL {
        for &concentration in Concentration::ALL {
            let plan = plan_pours(1000.0, flavor, concentration);
            let flavor_total: f64 = plan.flavor_pours.iter().sum();
            let concentration_total: f64 = plan.concentration_pours.iter().sum();
            assert!((flavor_total - 400.0).abs() < 1e-6, "{flavor}/{concentration}");
            assert!((concentration_total - 600.0).abs() < 1e-6, "{flavor}/{concentration}");
        }
    }
}

#[test]
fn split_tables_cover_whole_phase() {
    for &flavor in Flavor::ALL {
        assert!((flavor_split(flavor).iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }
    for &concentration in Concentration::ALL {
        assert!((concentration_split(concentration).iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }
}
