/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use serde::Serialize;
use std::thread::{Builder, JoinHandle};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::{Controller, HostEvent};
use crate::elevator::CarState;
use crate::error::Result;
use crate::replay::{CarCommand, ScriptLine, ScriptedCar};
use crate::shared::Heading;

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Line(ScriptLine),
    Finished,
    Terminate,
    NoEvent,
}

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CarReport {
    pub car: usize,
    pub state: CarState,
    pub commands: Vec<CarCommand>,
}

/// Outcome of a replay: final state of every car and the calls still lit.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub processed: usize,
    pub cars: Vec<CarReport>,
    pub open_calls: Vec<(u8, Heading)>,
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/**
 * Feeds a scripted event stream into a controller.
 *
 * Script lines arrive over a channel and are applied strictly one at a time:
 * status lines update the host car, event lines go to the controller. The
 * loop ends when the feeding side hangs up or a terminate signal arrives.
 *
 * # Fields
 * - `controller`:      Dispatch core driving the scripted cars.
 * - `line_rx`:         Receives script lines in order.
 * - `terminate_rx`:    Stops the loop early.
 * - `processed`:       Number of lines applied so far.
 */
pub struct Replay {
    controller: Controller<ScriptedCar>,
    line_rx: cbc::Receiver<ScriptLine>,
    terminate_rx: cbc::Receiver<()>,
    processed: usize,
}

impl Replay {
    pub fn new(
        controller: Controller<ScriptedCar>,
        line_rx: cbc::Receiver<ScriptLine>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Replay {
        Replay {
            controller,
            line_rx,
            terminate_rx,
            processed: 0,
        }
    }

    pub fn run(mut self) -> Report {
        loop {
            match self.wait_for_event() {
                Event::Line(line) => self.handle_line(line),
                Event::Finished => {
                    info!("Script finished after {} lines", self.processed);
                    break;
                }
                Event::Terminate => {
                    info!("Replay terminated after {} lines", self.processed);
                    break;
                }
                Event::NoEvent => {}
            }
        }
        self.report()
    }

    pub fn report(&self) -> Report {
        let cars = self
            .controller
            .pool()
            .iter()
            .enumerate()
            .map(|(car, agent)| CarReport {
                car,
                state: agent.state().clone(),
                commands: agent.car().commands().to_vec(),
            })
            .collect();

        let floors = self.controller.floors();
        let mut open_calls = Vec::new();
        for floor in 0..floors.n_floors() {
            for heading in [Heading::Up, Heading::Down] {
                if floors.is_requested(floor, heading) {
                    open_calls.push((floor, heading));
                }
            }
        }

        Report {
            processed: self.processed,
            cars,
            open_calls,
        }
    }

    fn handle_line(&mut self, line: ScriptLine) {
        match line {
            ScriptLine::Status(status) => match self.controller.pool_mut().car_mut(status.car) {
                Some(agent) => agent.car_mut().set_status(status.floor, status.load),
                None => warn!("Ignoring status for unknown car {}", status.car),
            },
            ScriptLine::Event(event) => {
                if let HostEvent::StoppedAtFloor { car, floor } = event {
                    if let Some(agent) = self.controller.pool_mut().car_mut(car) {
                        agent.car_mut().arrive(floor);
                    }
                }
                self.controller.handle_event(event);
            }
        }
        self.processed += 1;
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.line_rx) -> line => {
                match line {
                    Ok(line) => Event::Line(line),
                    Err(_) => Event::Finished,
                }
            },

            recv(self.terminate_rx) -> signal => {
                match signal {
                    Ok(()) => Event::Terminate,
                    Err(_) => Event::NoEvent,
                }
            },

            default(Duration::from_millis(50)) => Event::NoEvent,
        }
    }
}

/// Sends `lines` over a channel from a separate thread, then hangs up.
pub fn spawn_feeder(lines: Vec<ScriptLine>) -> Result<(cbc::Receiver<ScriptLine>, JoinHandle<()>)> {
    let (line_tx, line_rx) = cbc::unbounded::<ScriptLine>();

    let feeder = Builder::new().name("script_feeder".into()).spawn(move || {
        for line in lines {
            if line_tx.send(line).is_err() {
                warn!("Replay stopped before the script was fully sent");
                return;
            }
        }
    })?;

    Ok((line_rx, feeder))
}
