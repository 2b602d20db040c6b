/// Presentational views
///
/// These only read state and emit `Message`s; all state changes go
/// through `Dashboard::update`.

pub mod card;
pub mod header;
pub mod modal;
pub mod status;
