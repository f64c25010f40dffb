pub mod slots;
pub mod voice;

pub use slots::{ContentType, MissingSlots, Slots};
pub use voice::Voice;
