use crate::enums::Frequency;
use crate::records::{Area, Exchange, Persona, World};

record! {
  /// A game setting: starting area, turn rules and the personae in play.
  pub struct Setting {
    world: optional_object(World),
    owner_name: string,
    personae: optional_array_of_optional_object(Persona),
    starting_area: optional_object(Area),
    starting_domicile: optional_object(Domicile),
    items_usable_here: bool,
    exchange: optional_object(Exchange),
    turn_length_seconds: int32,
    max_actions_allowed: int32,
    max_cards_allowed: int32,
    actions_in_period_before_exhaustion: int32,
    description: string,
    name: string,
    id: int32,
  }
}

record! {
  /// Lodging definition.
  pub struct Domicile {
    name: string,
    description: string,
    image_name: string,
    max_hand_size: int32,
    defence_bonus: int32,
    world: optional_object(World),
    id: int32,
  }
}

record! {
  /// Card deck.
  pub struct Deck {
    world: optional_object(World),
    name: string,
    image_name: string,
    ordering: int32,
    description: string,
    availability: enum(Frequency),
    draw_size: int32,
    max_cards: int32,
    id: int32,
  }
}
