use std::error::Error;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{self as cbc, select, unbounded};
use log::{error, info};

use elevator_bank::debug::{self, ChannelIndicators};
use elevator_bank::inputs::{self, Input};
use elevator_bank::Simulation;
use shared_resources::config::SimulationConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // READ CONFIGURATION
    let config = SimulationConfig::get()?;
    info!("{:?}", config);

    // INITIALIZE CHANNELS
    let (indicator_tx, indicator_rx) = unbounded();

    // INITIALIZE THREAD FOR STATUS BOARD
    {
        let (num_floors, num_cars) = (config.num_floors, config.num_cars);
        thread::Builder::new()
            .name(String::from("debug"))
            .spawn(move || {
                if let Err(err) = debug::main(num_floors, num_cars, indicator_rx) {
                    error!("status board stopped: {}", err);
                }
            })?;
    }

    // INITIALIZE INPUTS MODULE
    let input_rx = inputs::init()?;
    let mut input_open = true;

    let mut simulation = Simulation::initialize(config, ChannelIndicators::new(indicator_tx))?;
    let start = Instant::now();

    loop {
        simulation.advance_to(start.elapsed());
        if !input_open && simulation.is_idle() {
            info!("input closed and every car is at rest");
            break;
        }

        let timer = match simulation.next_wake() {
            Some(at) => cbc::after(at.saturating_sub(start.elapsed())),
            None => cbc::never(),
        };
        let input = if input_open { input_rx.clone() } else { cbc::never() };

        select! {
            recv(input) -> msg => match msg {
                Ok(Input::Call(request)) => {
                    simulation.advance_to(start.elapsed());
                    simulation.request_call(request);
                }
                Ok(Input::Quit) => {
                    info!("STOPPING SIMULATION...");
                    break;
                }
                Err(_) => input_open = false,
            },
            recv(timer) -> _ => {},
        }
    }

    info!("final state:\n{}", serde_json::to_string_pretty(&simulation.snapshot())?);
    Ok(())
}
