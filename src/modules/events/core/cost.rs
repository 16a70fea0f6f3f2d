use crate::modules::events::core::event::Event;
use crate::modules::events::core::logistics::Logistics;

/// Sum of `unit_price * quantity` over the reserved items. Items that are not
/// reserved never count.
pub fn reserved_cost<'a>(logistics: impl IntoIterator<Item = &'a Logistics>) -> f64 {
    logistics
        .into_iter()
        .filter(|l| l.reserved)
        .map(Logistics::total_price)
        .sum()
}

pub fn event_cost(event: &Event) -> f64 {
    reserved_cost(event.logistics.iter().flatten())
}
