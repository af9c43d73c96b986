/// Inventory domain - pure business rules with no I/O
///
/// `domain` holds the value objects and the item state machine,
/// `policies` holds the rule that picks which item a consumption applies to.
pub mod domain;
pub mod policies;
