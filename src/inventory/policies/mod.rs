mod consumption_order;

pub use consumption_order::ConsumptionOrder;
