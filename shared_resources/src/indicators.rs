use std::time::Duration;

use crate::car_id::CarId;
use crate::request::Request;

/// Everything the core tells the outside world about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorEvent {
    Position { car: CarId, floor: u8, travel: Duration },
    Status { car: CarId, text: String },
    Door { car: CarId, open: bool },
    ButtonLight { request: Request, on: bool },
}

pub trait Indicators {
    fn publish(&mut self, event: IndicatorEvent);

    fn report_position(&mut self, car: CarId, floor: u8, travel: Duration) {
        self.publish(IndicatorEvent::Position { car, floor, travel });
    }

    fn report_status(&mut self, car: CarId, text: String) {
        self.publish(IndicatorEvent::Status { car, text });
    }

    fn report_door_state(&mut self, car: CarId, open: bool) {
        self.publish(IndicatorEvent::Door { car, open });
    }

    fn set_button_light(&mut self, request: Request, on: bool) {
        self.publish(IndicatorEvent::ButtonLight { request, on });
    }
}

/// Records every event, in order.
impl Indicators for Vec<IndicatorEvent> {
    fn publish(&mut self, event: IndicatorEvent) {
        self.push(event);
    }
}
