pub mod go_offline;
pub mod go_online;
pub mod request_decision;
pub mod request_expiry;
pub mod request_offer;
pub mod ride_completed;
pub mod search_start;
