/// ----- DEBUG MODULE -----
/// Terminal status board. The simulation publishes indicator events on a
/// channel, and this module keeps a picture of the bank and redraws it.

use std::io::{stdout, Write};

use crossbeam_channel::{select, Receiver, Sender};
use crossterm::{cursor, terminal, ExecutableCommand, Result};
use log::debug;

use shared_resources::call::Call;
use shared_resources::indicators::{IndicatorEvent, Indicators};

/// Forwards every event to the status board thread.
pub struct ChannelIndicators {
    indicator_tx: Sender<IndicatorEvent>,
}

impl ChannelIndicators {
    pub fn new(indicator_tx: Sender<IndicatorEvent>) -> Self {
        ChannelIndicators { indicator_tx }
    }
}

impl Indicators for ChannelIndicators {
    fn publish(&mut self, event: IndicatorEvent) {
        if let Err(err) = self.indicator_tx.send(event) {
            debug!("status board is gone, dropping {:?}", err.into_inner());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CarRow {
    floor: u8,
    status: String,
    door_open: bool,
}

#[derive(Debug, Clone)]
pub struct Board {
    hall_calls: Vec<[bool; 2]>,
    cars: Vec<CarRow>,
    height: u16,
}

impl Board {
    pub fn new(num_floors: u8, num_cars: u8) -> Self {
        Board {
            hall_calls: vec![[false; 2]; usize::from(num_floors)],
            cars: vec![CarRow::default(); usize::from(num_cars)],
            height: 0,
        }
    }

    pub fn apply(&mut self, event: &IndicatorEvent) {
        match event {
            IndicatorEvent::Position { car, floor, .. } => {
                if let Some(row) = self.cars.get_mut(car.index()) {
                    row.floor = *floor;
                }
            }
            IndicatorEvent::Status { car, text } => {
                if let Some(row) = self.cars.get_mut(car.index()) {
                    row.status = text.clone();
                }
            }
            IndicatorEvent::Door { car, open } => {
                if let Some(row) = self.cars.get_mut(car.index()) {
                    row.door_open = *open;
                }
            }
            IndicatorEvent::ButtonLight { request, on } => {
                if let Some(floor) = self.hall_calls.get_mut(usize::from(request.floor)) {
                    floor[request.call as usize] = *on;
                }
            }
        }
    }

    fn render(&self) -> Vec<String> {
        let mark = |lit: bool| if lit { "*" } else { "" };
        let mut lines = vec![
            String::from("+--------------------------------------+"),
            String::from("| HALL CALLS                           |"),
            String::from("+------------+------------+------------+"),
            format!("| {0:<10} | {1:<10} | {2:<10} |", "FLOOR", "HALL UP", "HALL DOWN"),
        ];
        for (floor, calls) in self.hall_calls.iter().enumerate().rev() {
            lines.push(String::from("+------------+------------+------------+"));
            lines.push(format!(
                "| {0:<10} | {1:<10} | {2:<10} |",
                floor,
                mark(calls[Call::HallUp as usize]),
                mark(calls[Call::HallDown as usize])
            ));
        }
        lines.push(String::from("+------------+------------+------------+"));
        lines.push(String::new());
        lines.push(String::from("+-----------------------------------------------------+"));
        lines.push(String::from("| CARS                                                |"));
        lines.push(String::from("+------------+------------+------------+------------+"));
        lines.push(format!("| {0:<10} | {1:<10} | {2:<10} | {3:<10} |", "CAR", "FLOOR", "HEADING", "DOOR"));
        lines.push(String::from("+------------+------------+------------+------------+"));
        for (id, row) in self.cars.iter().enumerate() {
            lines.push(format!(
                "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
                id,
                row.floor,
                row.status,
                if row.door_open { "open" } else { "closed" }
            ));
            lines.push(String::from("+------------+------------+------------+------------+"));
        }
        lines
    }

    pub fn printstatus<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.height > 0 {
            out.execute(cursor::MoveUp(self.height))?;
        }
        out.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        let lines = self.render();
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        self.height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        Ok(())
    }
}

pub fn main(num_floors: u8, num_cars: u8, indicator_rx: Receiver<IndicatorEvent>) -> Result<()> {
    let mut stdout = stdout();
    let mut board = Board::new(num_floors, num_cars);

    loop {
        select! {
            recv(indicator_rx) -> msg => match msg {
                Ok(event) => {
                    board.apply(&event);
                    board.printstatus(&mut stdout)?;
                }
                Err(_) => return Ok(()),
            },
        }
    }
}
