use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::path::Path;
use std::process;

use tccmap::TccMap;

fn main() {
    let matches = ClapCommand::new("tccmap")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Build TCC destination polygons from Natural Earth data")
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .help("Directory holding the source GeoJSON layers")
                .value_name("DIR")
                .default_value("data"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output GeoJSON file")
                .value_name("FILE")
                .default_value("output/merged.geojson"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(String::as_str)
        .unwrap_or("data");
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("output/merged.geojson");

    let map = match TccMap::load(Path::new(data_dir)) {
        Ok(map) => map,
        Err(e) => {
            error!("failed to load source data: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let (features, report) = map.build();

    println!(
        "Built {}/{} features ({} missing)",
        report.built,
        report.total,
        report.failures.len()
    );
    if !report.failures.is_empty() {
        println!("Missing destinations:");
        for failure in &report.failures {
            println!(
                "  [{}] {} (strategy={})",
                failure.tcc_index, failure.name, failure.strategy
            );
        }
    }

    if let Err(e) = TccMap::write_geojson(&features, Path::new(output)) {
        error!("failed to write output: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
