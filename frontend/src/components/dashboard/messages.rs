use common::model::booking::Booking;
use common::model::property::Property;

pub enum Msg {
    Loaded {
        properties: Vec<Property>,
        bookings: Vec<Booking>,
    },
    LoadFailed(String),
}
