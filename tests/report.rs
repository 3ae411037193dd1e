use solar_travel_estimator::PhysicalConstants;
use solar_travel_estimator::config::{Catalog, DriveManifest, OrbitingBody};
use solar_travel_estimator::transfer::{
    Acceleration, NO_ROUTE, ROUTE_HEADERS, SortKey, TravelMatrix, build_route_table,
    compare_drive_scenarios, sorted_by, sorted_by_key,
};

#[test]
fn route_table_covers_each_pair_once_in_catalog_order() {
    let catalog = Catalog::builtin();
    let rows = build_route_table(&catalog, &PhysicalConstants::default()).unwrap();
    assert_eq!(rows.len(), 36);

    let names = catalog.names();
    let mut expected = Vec::new();
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            expected.push((a.to_string(), b.to_string()));
        }
    }
    let actual: Vec<_> = rows
        .iter()
        .map(|r| (r.origin.name().to_string(), r.destination.name().to_string()))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(rows[0].route_label(), "Mercury -> Venus");
}

#[test]
fn route_fields_follow_header_order() {
    let catalog = Catalog::builtin();
    let constants = PhysicalConstants::default();
    let rows = build_route_table(&catalog, &constants).unwrap();
    let earth_mars = rows
        .iter()
        .find(|r| r.origin.name() == "Earth" && r.destination.name() == "Mars")
        .unwrap();
    let fields = earth_mars.fields();
    assert_eq!(fields.len(), ROUTE_HEADERS.len());

    let column = |name: &str| {
        let idx = ROUTE_HEADERS.iter().position(|h| *h == name).unwrap();
        fields[idx].to_string()
    };
    assert_eq!(column("origin_planet"), "Earth");
    assert_eq!(column("destination_planet"), "Mars");
    assert_eq!(
        column("min_time_days_1g"),
        earth_mars.one_g.min_time_days.to_string()
    );
    assert_eq!(
        column("max_deltav_kms_1_3g"),
        earth_mars.third_g.max_delta_v_km_s.to_string()
    );
    assert_eq!(column("destination_aphelion_au"), "1.666");
    assert_eq!(
        column("min_distance_km"),
        (earth_mars.one_g.min_distance_au * constants.au_km).to_string()
    );
}

#[test]
fn matrix_is_symmetric_with_empty_diagonal() {
    let catalog = Catalog::builtin();
    let rows = build_route_table(&catalog, &PhysicalConstants::default()).unwrap();
    let matrix = TravelMatrix::from_rows(catalog.names().as_slice(), &rows, Acceleration::ThirdG);

    for a in catalog.names() {
        assert_eq!(matrix.cell(a, a), NO_ROUTE);
        for b in catalog.names() {
            assert_eq!(matrix.cell(a, b), matrix.cell(b, a));
            if a != b {
                assert!(matrix.get(a, b).is_some(), "{a} -> {b}");
            }
        }
    }

    let layout = matrix.rows();
    assert_eq!(layout.len(), 9);
    assert_eq!(layout[0].0, "Mercury");
    assert_eq!(layout[8].0, "Neptune");
    assert!(layout.iter().all(|(_, cells)| cells.len() == 9));
}

#[test]
fn matrix_uses_selected_acceleration_and_marks_missing_pairs() {
    let catalog = Catalog::builtin();
    let rows = build_route_table(&catalog, &PhysicalConstants::default()).unwrap();
    let earth_mars: Vec<_> = rows
        .iter()
        .filter(|r| r.origin.name() == "Earth" && r.destination.name() == "Mars")
        .cloned()
        .collect();
    let order = ["Earth", "Mars", "Pluto"];
    let matrix = TravelMatrix::from_rows(&order[..], &earth_mars, Acceleration::OneG);

    let range = matrix.get("Mars", "Earth").unwrap();
    assert_eq!(range.min_days, earth_mars[0].one_g.min_time_days);
    assert_eq!(range.max_days, earth_mars[0].one_g.max_time_days);
    assert_eq!(matrix.cell("Earth", "Mars"), "1d 17h-4d 16h");
    assert_eq!(matrix.cell("Earth", "Pluto"), NO_ROUTE);
}

#[test]
fn matrix_lookup_ignores_name_case() {
    let catalog = Catalog::builtin();
    let rows = build_route_table(&catalog, &PhysicalConstants::default()).unwrap();
    let matrix = TravelMatrix::from_rows(catalog.names().as_slice(), &rows, Acceleration::ThirdG);

    assert!(matrix.get("mars", "EARTH").is_some());
    assert_eq!(matrix.get("mars", "EARTH"), matrix.get("Earth", "Mars"));
    assert_eq!(matrix.cell("earth", "Earth"), NO_ROUTE);
}

#[test]
fn sort_keys_parse_from_their_names() {
    for key in SortKey::ALL {
        assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
    }
    assert_eq!("Median-Time".parse::<SortKey>(), Ok(SortKey::MedianTime));
    assert!("fastest".parse::<SortKey>().is_err());
}

#[test]
fn sorting_is_stable_and_ascending() {
    let catalog = Catalog::builtin();
    let rows = build_route_table(&catalog, &PhysicalConstants::default()).unwrap();

    let by_dv = sorted_by_key(&rows, SortKey::MinDeltaV, Acceleration::ThirdG);
    assert_eq!(by_dv.len(), rows.len());
    for pair in by_dv.windows(2) {
        assert!(pair[0].third_g.min_delta_v_km_s <= pair[1].third_g.min_delta_v_km_s);
    }

    // A constant key leaves the input order untouched.
    let unchanged = sorted_by(&rows, |_| 1.0);
    assert!(unchanged.iter().zip(&rows).all(|(a, b)| std::ptr::eq(*a, b)));

    // Ties on a coarse key keep their relative input order.
    let coarse = sorted_by(&rows, |r| r.one_g.max_distance_au.floor());
    for pair in coarse.windows(2) {
        let a = pair[0].one_g.max_distance_au.floor();
        let b = pair[1].one_g.max_distance_au.floor();
        assert!(a <= b);
        if a == b {
            let ia = rows.iter().position(|r| std::ptr::eq(r, pair[0])).unwrap();
            let ib = rows.iter().position(|r| std::ptr::eq(r, pair[1])).unwrap();
            assert!(ia < ib);
        }
    }
}

#[test]
fn overlapping_orbits_sort_first_on_min_delta_v() {
    let catalog = Catalog::from_bodies(vec![
        OrbitingBody::new("Far", 10.0, 11.0).unwrap(),
        OrbitingBody::new("A", 0.9, 1.2).unwrap(),
        OrbitingBody::new("B", 1.1, 1.5).unwrap(),
    ])
    .unwrap();
    let rows = build_route_table(&catalog, &PhysicalConstants::default()).unwrap();
    let sorted = sorted_by_key(&rows, SortKey::MinDeltaV, Acceleration::ThirdG);
    assert_eq!(sorted[0].route_label(), "A -> B");
    assert_eq!(sorted[0].third_g.min_delta_v_km_s, 0.0);
}

#[test]
fn drive_comparison_keeps_manifest_order() {
    let manifest = DriveManifest::nauvoo();
    let comparison = compare_drive_scenarios(&manifest, &PhysicalConstants::default()).unwrap();
    let headings: Vec<_> = comparison.scenarios.iter().map(|s| s.heading()).collect();
    assert_eq!(
        headings,
        ["0.65% (Current)", "0.8% (Improved)", "20% (Theoretical)"]
    );
    assert_eq!(comparison.target_name, "Tau Ceti");
    assert!((comparison.exhaust_velocity_fraction_c - 0.08).abs() < 1e-12);
    for outcome in &comparison.scenarios {
        assert!(outcome.journey.ship_years() < outcome.journey.total_years());
    }
}

#[test]
fn drive_comparison_surfaces_invalid_manifests() {
    let mut manifest = DriveManifest::nauvoo();
    manifest.dry_mass_kg = 0.0;
    assert!(compare_drive_scenarios(&manifest, &PhysicalConstants::default()).is_err());

    let mut manifest = DriveManifest::nauvoo();
    manifest.cruise_fraction_c = 1.5;
    assert!(compare_drive_scenarios(&manifest, &PhysicalConstants::default()).is_err());
}
