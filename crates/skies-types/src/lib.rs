#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod decode;
pub mod enums;
pub mod error;
pub mod layout;
pub mod record;
pub mod records;

pub use enums::{
  Category, DifficultyTestType, EventCategory, Frequency, Genre, KnownEnum, LoggedInVia, Nature,
  OpenEnum, PrivilegeLevel, PublishState, QualityAllowedOn, Urgency, UserStatus, ViaNetwork,
};
pub use error::DecodeError;
pub use layout::{FieldDescriptor, Operation, RecordSchema};
pub use record::{FieldValue, Record, RecordType};
pub use records::ALL_SCHEMAS;
pub use skies_wire::Timestamp;
