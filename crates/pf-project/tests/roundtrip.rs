use pf_catalog::builtin_catalog;
use pf_hydraulics::calculate;
use pf_model::Orientation;
use pf_project::{
    FittingRefDef, ProjectError, SegmentDef, SuctionDef, SystemDef, build_system, load,
    load_json, load_yaml, save_json, save_yaml, suction_line,
};

fn sample() -> SystemDef {
    SystemDef {
        name: "Cooling water transfer".to_string(),
        fluid: "water_20c".to_string(),
        flow_rate_m3_s: 0.012,
        pump_efficiency: 0.72,
        elevation_point1_m: 0.0,
        elevation_point2_m: 14.0,
        pressure_point1_pa: Some(101_325.0),
        pressure_point2_pa: Some(150_000.0),
        segments: vec![
            SegmentDef {
                length_m: 4.0,
                orientation: Orientation::Horizontal,
                diameter_m: 0.1,
                material: "steel".to_string(),
            },
            SegmentDef {
                length_m: 14.0,
                orientation: Orientation::Vertical,
                diameter_m: 0.1,
                material: "steel".to_string(),
            },
        ],
        fittings: vec![
            FittingRefDef {
                kind: "tank_inlet".to_string(),
                quantity: 1,
            },
            FittingRefDef {
                kind: "elbow_90_long_radius".to_string(),
                quantity: 2,
            },
            FittingRefDef {
                kind: "swing_check_valve".to_string(),
                quantity: 1,
            },
        ],
        suction: Some(SuctionDef {
            length_m: 3.0,
            fluid_elevation_m: 2.0,
        }),
    }
}

#[test]
fn roundtrip_yaml() {
    let path = std::env::temp_dir().join("pf_project_roundtrip.yaml");
    save_yaml(&path, &sample()).unwrap();
    assert_eq!(load_yaml(&path).unwrap(), sample());
    assert_eq!(load(&path).unwrap(), sample());
}

#[test]
fn roundtrip_json() {
    let path = std::env::temp_dir().join("pf_project_roundtrip.json");
    save_json(&path, &sample()).unwrap();
    assert_eq!(load_json(&path).unwrap(), sample());
    assert_eq!(load(&path).unwrap(), sample());
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("pf_project_roundtrip.toml");
    assert!(matches!(
        load(&path),
        Err(ProjectError::UnsupportedFormat { .. })
    ));
}

#[test]
fn invalid_definition_is_not_saved() {
    let mut def = sample();
    def.flow_rate_m3_s = 0.0;
    let path = std::env::temp_dir().join("pf_project_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &def),
        Err(ProjectError::Validation(_))
    ));
}

#[test]
fn file_to_results() {
    let catalog = builtin_catalog().unwrap();
    let def = sample();
    let system = build_system(&def, &catalog).unwrap();
    let suction = suction_line(&def).unwrap();
    let results = calculate(&system, catalog.constants(), &suction);

    assert_eq!(results.elevation_head_m, 14.0);
    assert!(results.pressure_head_m > 0.0);
    assert!(results.suction_losses_m > 0.0);
    assert!(results.suction_losses_m < results.total_losses_m);
    assert_eq!(results.suction_fluid_elevation_m, 2.0);
    assert!(results.pump_power_kw > results.hydraulic_power_kw);
}
