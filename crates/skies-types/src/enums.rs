use std::fmt;

/// A closed set of named values backing an open wire enumeration.
///
/// Implemented by every enum declared with `open_enum!`. The wire carries
/// an `i32`; [`OpenEnum`] pairs an implementor with a fallback for values
/// it does not name.
pub trait KnownEnum: Copy + fmt::Debug + PartialEq + 'static {
  /// Type name used in diagnostics and reflection.
  const NAME: &'static str;

  /// Map a raw wire value to a named variant.
  fn from_raw(raw: i32) -> Option<Self>;

  /// The raw wire value of this variant.
  fn to_raw(self) -> i32;

  /// The variant name.
  fn label(self) -> &'static str;
}

/// An `int32`-backed enumeration whose wire values may fall outside the
/// declared variants.
///
/// The source data contains values no variant names (for example `Nature`
/// value 3). Those decode to `Unrecognized` with the raw integer preserved
/// instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenEnum<E> {
  Known(E),
  Unrecognized(i32),
}

impl<E: KnownEnum> OpenEnum<E> {
  /// Classify a raw wire value. Never fails.
  #[must_use]
  pub fn from_raw(raw: i32) -> Self {
    E::from_raw(raw).map_or(Self::Unrecognized(raw), Self::Known)
  }

  /// The raw wire value, whether or not it is named.
  #[must_use]
  pub fn raw(self) -> i32 {
    match self {
      Self::Known(e) => e.to_raw(),
      Self::Unrecognized(raw) => raw,
    }
  }

  /// The named variant, if there is one.
  #[must_use]
  pub fn known(self) -> Option<E> {
    match self {
      Self::Known(e) => Some(e),
      Self::Unrecognized(_) => None,
    }
  }

  #[must_use]
  pub fn label(self) -> Option<&'static str> {
    self.known().map(KnownEnum::label)
  }
}

impl<E: KnownEnum> Default for OpenEnum<E> {
  /// The zero value: whatever raw `0` classifies as.
  fn default() -> Self {
    Self::from_raw(0)
  }
}

impl<E: KnownEnum> fmt::Display for OpenEnum<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.label() {
      Some(label) => write!(f, "{}.{label}", E::NAME),
      None => write!(f, "{}({})", E::NAME, self.raw()),
    }
  }
}

// ── Macro for open-enum boilerplate ───────────────────────────────────
//
// Every enum below is a list of named variants, each pinned to one raw
// int32. The macro writes the KnownEnum impl so each declaration only has
// to state its variants. Zero-variant enums are allowed: they name
// enumerations whose values were never catalogued, so every value lands
// in OpenEnum::Unrecognized.

macro_rules! open_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $raw:literal ),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum $name {
      $( $(#[$vmeta])* $variant ),*
    }

    impl KnownEnum for $name {
      const NAME: &'static str = stringify!($name);

      #[allow(clippy::match_single_binding)]
      fn from_raw(raw: i32) -> Option<Self> {
        match raw {
          $( $raw => Some(Self::$variant), )*
          _ => None,
        }
      }

      fn to_raw(self) -> i32 {
        match self {
          $( Self::$variant => $raw, )*
        }
      }

      fn label(self) -> &'static str {
        match self {
          $( Self::$variant => stringify!($variant), )*
        }
      }
    }
  };
}

// ── Category ──────────────────────────────────────────────────────────

open_enum! {
  /// Fine-grained categorisation of a `Quality`.
  ///
  /// Some values drive game behaviour (ship equipment slots are chosen by
  /// category), others only pick a UI tab, and several are leftovers from
  /// earlier games in the same engine.
  pub enum Category {
    Unspecified = 0,
    Currency = 1,
    Weapon = 101,
    Hat = 103,
    Gloves = 104,
    Boots = 105,
    Companion = 106,
    Clothing = 107,
    Curiosity = 150,
    Advantage = 160,
    Document = 170,
    Goods = 200,
    BasicAbility = 1000,
    SpecificAbility = 2000,
    Profession = 3000,
    Story = 5000,
    Intrigue = 5001,
    Dreams = 5002,
    Reputation = 5003,
    Quirk = 5004,
    Acquaintance = 5025,
    Accomplishment = 5050,
    Venture = 5100,
    Progress = 5200,
    Menace = 5500,
    Contacts = 6000,
    Hidden = 6661,
    Randomizer = 6662,
    Ambition = 7000,
    Route = 8000,
    Seasonal = 9000,
    Ship = 10000,
    ConstantCompanion = 11000,
    Club = 12000,
    Affiliation = 13000,
    Timer = 13999,
    Transportation = 14000,
    HomeComfort = 15000,
    Academic = 16000,
    Cartography = 17000,
    Contraband = 18000,
    Elder = 19000,
    Infernal = 20000,
    Influence = 21000,
    Literature = 22000,
    Lodgings = 22500,
    Luminosity = 23000,
    Mysteries = 24000,
    Nostalgia = 25000,
    RagTrade = 26000,
    Ratness = 27000,
    Rumour = 28000,
    Legal = 29000,
    WildWords = 30000,
    Wines = 31000,
    Rubbery = 32000,
    SidebarAbility = 33000,
    MajorLateral = 34000,
    Quest = 35000,
    MinorLateral = 36000,
    Circumstance = 37000,
    Avatar = 39000,
    Objective = 40000,
    Key = 45000,
    Knowledge = 50000,
    Destiny = 60000,
    Modifier = 70000,
    GreatGame = 70001,
    ZeeTreasures = 70002,
    Sustenance = 70003,
    Bridge = 70004,
    Plating = 70005,
    Auxiliary = 70006,
    SmallWeapon = 70007,
    LargeWeapon = 70008,
    Scout = 70009,
    Engine = 70010,
  }
}

// ── Small enumerations ────────────────────────────────────────────────

open_enum! {
  /// How a quality's difficulty tests are scaled.
  pub enum DifficultyTestType {
    Broad = 0,
    Narrow = 1,
  }
}

open_enum! {
  /// Category of an `Event`.
  pub enum EventCategory {
    Unspecialised = 0,
    QuesticleStart = 1,
    QuesticleStep = 2,
    QuesticleEnd = 3,
    Ambition = 4,
    Episodic = 5,
    Seasonal = 6,
    Travel = 7,
    Gold = 8,
    Sinister = 9,
    ItemUse = 10,
  }
}

open_enum! {
  /// Draw frequency of a `Deck`.
  pub enum Frequency {
    Sometimes = 0,
    Rarely = 1,
    Always = 10,
  }
}

open_enum! {
  /// Coarse split between possessions and statuses.
  ///
  /// Value 3 occurs in the data but is not named by the source; it
  /// decodes as `Unrecognized(3)`.
  pub enum Nature {
    Unspecified = 0,
    Status = 1,
    Thing = 2,
  }
}

open_enum! {
  /// Which entity kinds a quality may be attached to.
  pub enum QualityAllowedOn {
    Unspecified = 0,
    Character = 1,
    QualityAndCharacter = 2,
    Event = 3,
    Branch = 4,
    Persona = 5,
    User = 6,
  }
}

open_enum! {
  /// Priority hint on an `Event`.
  pub enum Urgency {
    Low = -1,
    Normal = 0,
    High = 3,
    Must = 10,
  }
}

// ── Uncatalogued enumerations ─────────────────────────────────────────

open_enum! {
  /// Account status on a `User`.
  pub enum UserStatus {}
}

open_enum! {
  /// Notification channel preference on a `User`.
  pub enum ViaNetwork {}
}

open_enum! {
  /// Privilege level on a `User` or `UserWorldPrivilege`.
  pub enum PrivilegeLevel {}
}

open_enum! {
  /// Login provider on a `User`.
  pub enum LoggedInVia {}
}

open_enum! {
  /// Publication state of a `World`.
  pub enum PublishState {}
}

open_enum! {
  /// Genre of a `World`.
  pub enum Genre {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_value_maps_to_variant() {
    assert_eq!(
      OpenEnum::<Category>::from_raw(70010),
      OpenEnum::Known(Category::Engine)
    );
    assert_eq!(OpenEnum::<Urgency>::from_raw(-1), OpenEnum::Known(Urgency::Low));
  }

  #[test]
  fn unknown_value_is_preserved() {
    let nature = OpenEnum::<Nature>::from_raw(3);
    assert_eq!(nature, OpenEnum::Unrecognized(3));
    assert_eq!(nature.raw(), 3);
    assert!(nature.known().is_none());
  }

  #[test]
  fn default_is_raw_zero() {
    assert_eq!(
      OpenEnum::<Frequency>::default(),
      OpenEnum::Known(Frequency::Sometimes)
    );
    assert_eq!(OpenEnum::<Genre>::default(), OpenEnum::Unrecognized(0));
    assert_eq!(OpenEnum::<Urgency>::default().raw(), 0);
  }

  #[test]
  fn raw_values_roundtrip_through_variants() {
    for raw in [0, 1, 101, 5025, 13999, 70000] {
      let value = OpenEnum::<Category>::from_raw(raw);
      assert_eq!(value.raw(), raw);
      assert!(value.known().is_some(), "{raw} should be named");
    }
  }

  #[test]
  fn uncatalogued_enum_never_matches() {
    for raw in [-1, 0, 1, i32::MAX] {
      assert_eq!(
        OpenEnum::<PrivilegeLevel>::from_raw(raw),
        OpenEnum::Unrecognized(raw)
      );
    }
  }

  #[test]
  fn display_uses_label_or_raw() {
    assert_eq!(
      OpenEnum::<EventCategory>::from_raw(7).to_string(),
      "EventCategory.Travel"
    );
    assert_eq!(OpenEnum::<Nature>::from_raw(3).to_string(), "Nature(3)");
  }
}
