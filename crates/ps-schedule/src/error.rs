use ps_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("movement scheduled for {scheduled} but the clock is already at {now}")]
    OutOfOrderSchedule { scheduled: Tick, now: Tick },

    #[error("movement parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
