mod log_capture;
mod scripted_client;

pub use log_capture::capture_logs;
pub use scripted_client::{
    FailurePoint, ScriptedClient, ScriptedError, ScriptedResponse, ScriptedValue,
};
