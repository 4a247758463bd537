//! Every record type in the data files, declared as ordered layouts.
//!
//! Field order inside each `record!` block is the wire order. Do not
//! reorder fields for readability.

mod area;
mod bargain;
mod event;
mod exchange;
mod persona;
mod prospect;
mod quality;
mod setting;
mod stub;
mod user;
mod world;

pub use area::Area;
pub use bargain::{Bargain, BargainQRequirement};
pub use event::{Branch, BranchQRequirement, Event, EventQEffect, EventQRequirement};
pub use exchange::{Availability, Exchange, Shop, ShopQRequirement};
pub use persona::{Persona, PersonaQEffect, PersonaQRequirement};
pub use prospect::{Completion, CompletionQEffect, CompletionQRequirement, Prospect, ProspectQEffect, ProspectQRequirement};
pub use quality::{AspectQPossession, QEnhancement, Quality};
pub use setting::{Deck, Domicile, Setting};
pub use stub::Stub;
pub use user::{User, UserQPossession, UserWorldPrivilege};
pub use world::World;

use crate::layout::RecordSchema;
use crate::record::RecordType;

/// Layout of every declared record type, alphabetical.
pub const ALL_SCHEMAS: &[&RecordSchema] = &[
    Area::SCHEMA,
    AspectQPossession::SCHEMA,
    Availability::SCHEMA,
    Bargain::SCHEMA,
    BargainQRequirement::SCHEMA,
    Branch::SCHEMA,
    BranchQRequirement::SCHEMA,
    Completion::SCHEMA,
    CompletionQEffect::SCHEMA,
    CompletionQRequirement::SCHEMA,
    Deck::SCHEMA,
    Domicile::SCHEMA,
    Event::SCHEMA,
    EventQEffect::SCHEMA,
    EventQRequirement::SCHEMA,
    Exchange::SCHEMA,
    Persona::SCHEMA,
    PersonaQEffect::SCHEMA,
    PersonaQRequirement::SCHEMA,
    Prospect::SCHEMA,
    ProspectQEffect::SCHEMA,
    ProspectQRequirement::SCHEMA,
    QEnhancement::SCHEMA,
    Quality::SCHEMA,
    Setting::SCHEMA,
    Shop::SCHEMA,
    ShopQRequirement::SCHEMA,
    Stub::SCHEMA,
    User::SCHEMA,
    UserQPossession::SCHEMA,
    UserWorldPrivilege::SCHEMA,
    World::SCHEMA,
];
