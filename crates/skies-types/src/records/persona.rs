use crate::records::{Quality, Setting};

record! {
  /// Persona definition.
  pub struct Persona {
    qualities_affected: optional_array_of_optional_object(PersonaQEffect),
    qualities_required: optional_array_of_optional_object(PersonaQRequirement),
    description: string,
    owner_name: string,
    setting: optional_object(Setting),
    date_time_created: datetime,
    name: string,
    id: int32,
  }
}

record! {
  /// Quality change attached to a `Persona`.
  pub struct PersonaQEffect {
    force_equip: bool,
    only_if_no_more_than_advanced: string,
    only_if_at_least: optional_int32,
    only_if_no_more_than: optional_int32,
    set_to_exactly_advanced: string,
    change_by_advanced: string,
    only_if_at_least_advanced: string,
    set_to_exactly: optional_int32,
    target_quality: optional_object(Quality),
    target_level: optional_int32,
    completion_message: string,
    level: int32,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}

record! {
  /// Condition attached to a `Persona`.
  pub struct PersonaQRequirement {
    min_level: optional_int32,
    max_level: optional_int32,
    min_advanced: string,
    max_advanced: string,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}
