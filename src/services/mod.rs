pub mod homework;
pub mod poller;
pub mod telegram;
