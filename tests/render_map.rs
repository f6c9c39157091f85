//! End-to-end: CSV on disk to HTML page on disk.

use std::fs;
use std::path::PathBuf;

use clubmap::config::PathsConfig;
use clubmap::{build_map, generate_map, load_clubs, Config, MapSettings};

const CLUBS_CSV: &str = "\
club_name,county,province,league,lat,lon,members,performance
Crossmaglen Rangers,Armagh,Ulster,Senior,54.0797,-6.6100,850,91.5
Slaughtneil,Derry,Ulster,Senior,54.8867,-6.7806,420,88
Kilcoo,Down,Ulster,Intermediate,54.2340,-5.9330,n/a,
Ballyhale Shamrocks,Kilkenny,Leinster,Senior,52.4667,-7.2000,600,95
Na Fianna,Dublin,Leinster,Senior,53.3700,-6.2600,2400,70
Lost Club,Nowhere,Leinster,Junior,,,,
Corofin,Galway, Connacht ,Senior,53.4333,-8.8667,500,85
Dr Crokes,Kerry,Munster,Senior,52.0599,-9.5044,700,not rated
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("clubmap_it_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

#[test]
fn loads_cleans_and_groups() {
    let dir = scratch_dir("load");
    let input = dir.join("gaa_clubs.csv");
    fs::write(&input, CLUBS_CSV).expect("write csv");

    let table = load_clubs(&input).expect("load");
    assert_eq!(table.len(), 7);
    assert_eq!(table.dropped(), 1);

    let kilcoo = &table.clubs()[2];
    assert_eq!(kilcoo.members, None);
    assert_eq!(kilcoo.performance, None);

    let crokes = &table.clubs()[6];
    assert_eq!(crokes.members, Some(700.0));
    assert_eq!(crokes.performance, None);

    let corofin = &table.clubs()[5];
    assert_eq!(corofin.province, "Connacht");

    let map = build_map(&table, &MapSettings::default()).expect("build");
    let names: Vec<&str> = map.layers.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Connacht  Senior",
            "Leinster  Senior",
            "Munster  Senior",
            "Ulster  Intermediate",
            "Ulster  Senior",
            "All clubs",
        ]
    );
    assert_eq!(map.legend.vmin, 70.0);
    assert_eq!(map.legend.vmax, 95.0);

    for layer in &map.layers {
        for marker in &layer.markers {
            assert!((5.0..=22.0).contains(&marker.radius));
        }
    }

    fs::remove_dir_all(dir).ok();
}

#[test]
fn writes_self_contained_page() {
    let dir = scratch_dir("page");
    let input = dir.join("gaa_clubs.csv");
    fs::write(&input, CLUBS_CSV).expect("write csv");

    let config = Config {
        paths: PathsConfig {
            input,
            output: dir.join("outputs").join("maps").join("gaa_clubs_map.html"),
        },
        ..Config::default()
    };

    let written = generate_map(&config).expect("generate");
    let html = fs::read_to_string(&written).expect("read page");

    assert!(html.contains("L.markerClusterGroup()"));
    assert!(html.contains("L.control.layers"));
    assert!(html.contains("\"name\":\"All clubs\",\"show\":true"));
    assert!(html.contains("\"name\":\"Ulster  Senior\",\"show\":false"));
    assert!(html.contains("Crossmaglen Rangers (Armagh)"));
    assert!(!html.contains("Lost Club"));

    fs::remove_dir_all(dir).ok();
}
