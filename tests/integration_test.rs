//! End-to-end build over synthetic source layers
//!
//! Writes a miniature world to GeoJSON files, loads it through the layer
//! loader, runs the two-pass build against a small catalog and checks the
//! written FeatureCollection.

use std::fs;
use std::path::PathBuf;

use tccmap::boundary::{BoundarySplitter, Side};
use tccmap::build::build_features;
use tccmap::catalog::{Destination, DestinationClass, Strategy};
use tccmap::{layers, TccMap};

fn dest(tcc_index: u16, name: &'static str, strategy: Strategy) -> Destination {
    Destination {
        tcc_index,
        name,
        region: "Test Region",
        iso_a2: None,
        iso_a3: None,
        iso_n3: None,
        sovereign: "Testland",
        class: DestinationClass::Country,
        strategy,
    }
}

/// Write the synthetic source files and return the data directory
fn write_data_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("tccmap_integration_data");
    fs::create_dir_all(&dir).unwrap();

    // One country: a 20 x 10 box from lon 0 to 20
    let units = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"ADM0_A3":"AAA","NAME":"Testland"},
         "geometry":{"type":"Polygon","coordinates":[[[0,0],[20,0],[20,10],[0,10],[0,0]]]}}
    ]}"#;
    let subunits = r#"{"type":"FeatureCollection","features":[]}"#;

    // Its eastern quarter as a province
    let admin1 = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"adm0_a3":"AAA","name":"East End"},
         "geometry":{"type":"Polygon","coordinates":[[[15,0],[20,0],[20,10],[15,10],[15,0]]]}}
    ]}"#;
    let disputed = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"NAME":"Contested Strip"},
         "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[0,0]]]}}
    ]}"#;

    // A vertical boundary at lon 5, split into two touching segments
    let boundary = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{},
         "geometry":{"type":"LineString","coordinates":[[5,-5],[5,6]]}},
        {"type":"Feature","properties":{},
         "geometry":{"type":"LineString","coordinates":[[5,6],[5,15]]}}
    ]}"#;

    fs::write(dir.join(layers::loader::UNITS_FILE), units).unwrap();
    fs::write(dir.join(layers::loader::SUBUNITS_FILE), subunits).unwrap();
    fs::write(dir.join(layers::loader::ADMIN1_FILE), admin1).unwrap();
    fs::write(dir.join(layers::loader::DISPUTED_FILE), disputed).unwrap();
    fs::write(dir.join(layers::loader::BOUNDARY_FILE), boundary).unwrap();

    dir
}

#[test]
fn test_complete_build_workflow() {
    let dir = write_data_dir();
    let layer_set = layers::load_dir(&dir).unwrap();
    assert_eq!(layer_set.units.len(), 1);
    assert_eq!(layer_set.boundary.len(), 2);

    let splitter = BoundarySplitter::new(layer_set.boundary.clone());

    let catalog = vec![
        dest(
            1,
            "East End",
            Strategy::Admin1 { country: "AAA", provinces: &["East End"] },
        ),
        dest(
            2,
            "Mainland",
            Strategy::GroupRemainder { country: "AAA", subtract: &[1] },
        ),
        dest(
            3,
            "Western Zone",
            Strategy::Clip {
                country: "AAA",
                side: Side::West,
                absorb: None,
                subtract: &[],
                subtract_codes: &[],
            },
        ),
        dest(
            4,
            "Eastern Zone",
            Strategy::Clip {
                country: "AAA",
                side: Side::East,
                absorb: None,
                subtract: &[],
                subtract_codes: &[],
            },
        ),
        dest(5, "Atoll", Strategy::Point { lat: -9.2, lon: -171.8 }),
        dest(
            6,
            "Ghost Land",
            Strategy::Direct { code: None, merge: &[] },
        ),
    ];

    let (built, report) = build_features(&catalog, &layer_set, &splitter);

    assert_eq!(report.total, 6);
    assert_eq!(report.built, 5);
    assert_eq!(report.missing_indices(), vec![6]);

    use geo::Area;
    let east_end = built.get(&1).unwrap().area_geometry().unwrap();
    assert!((east_end.unsigned_area() - 50.0).abs() < 0.01);

    // Group remainder built in the second pass against the province
    let mainland = built.get(&2).unwrap().area_geometry().unwrap();
    assert!((mainland.unsigned_area() - 150.0).abs() < 0.01);

    // Boundary split at lon 5: 50 west, 150 east, nothing lost
    let west = built.get(&3).unwrap().area_geometry().unwrap();
    let east = built.get(&4).unwrap().area_geometry().unwrap();
    assert!((west.unsigned_area() - 50.0).abs() < 0.1);
    assert!((east.unsigned_area() - 150.0).abs() < 0.1);

    assert!(built.get(&5).unwrap().properties.is_point);

    // Round-trip through the writer
    let output = dir.join("output").join("merged.geojson");
    TccMap::write_geojson(&built, &output).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let features = written["features"].as_array().unwrap();
    assert_eq!(features.len(), 5);

    // Sorted by tcc_index, missing index skipped
    let indices: Vec<u64> = features
        .iter()
        .map(|f| f["properties"]["tcc_index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);

    let atoll = &features[4];
    assert_eq!(atoll["properties"]["is_point"], true);
    assert_eq!(atoll["geometry"]["type"], "Point");
}
