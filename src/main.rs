/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::info;

/* Custom libraries */
use lift_dispatch::config;
use lift_dispatch::replay::{load_script, spawn_feeder, Replay, ScriptedCar};
use lift_dispatch::unwrap_or_exit;
use lift_dispatch::Controller;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("lift_dispatch")
        .about("Replays a building event script through the elevator dispatch controller")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .short('s')
                .takes_value(true)
                .required(true)
                .help("JSON-lines event script to replay"),
        )
        .get_matches();

    // Load the configuration and the script
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));
    let script_path = matches.value_of("script").unwrap_or_default();
    let lines = unwrap_or_exit!(load_script(script_path));
    info!("Loaded {} script lines from {}", lines.len(), script_path);

    // Every car starts empty at the ground floor
    let cars = (0..config.building.n_cars)
        .map(|_| ScriptedCar::new(0, config.building.capacity))
        .collect();
    let controller = Controller::from_config(cars, &config);

    // Initialize channels
    let (line_rx, feeder) = unwrap_or_exit!(spawn_feeder(lines));
    let (_terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    let report = Replay::new(controller, line_rx, terminate_rx).run();
    if feeder.join().is_err() {
        log::error!("Script feeder thread panicked");
    }

    println!("{}", unwrap_or_exit!(report.to_json()));
}
