//! Phi-accrual failure detection.
//!
//! Instead of a binary up/down verdict, the detector turns heartbeat
//! interval statistics into a continuous suspicion score: the longer a
//! peer stays silent past its habitual cadence, the higher
//! [`phi`] climbs. Callers pick the threshold that trades detection
//! speed against false alarms.
//!
//! [`phi`]: PhiAccrualDetector::phi

mod detector;

pub use detector::PhiAccrualDetector;
