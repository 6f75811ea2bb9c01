pub mod create_event;
pub mod register_participant;
