use crate::records::{Quality, Setting, World};

record! {
  /// A delivery contract: bring a quantity of goods somewhere for a fee.
  pub struct Prospect {
    world: optional_object(World),
    tags: string,
    description: string,
    setting: optional_object(Setting),
    request: optional_object(Quality),
    demand: int32,
    payment: string,
    qualities_affected: optional_array_of_optional_object(ProspectQEffect),
    qualities_required: optional_array_of_optional_object(ProspectQRequirement),
    completions: optional_array_of_optional_object(Completion),
    name: string,
    id: int32,
  }
}

record! {
  /// Quality change attached to a `Prospect`.
  pub struct ProspectQEffect {
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
  /// Condition for a `Prospect` to be offered.
  pub struct ProspectQRequirement {
    prospect: optional_object(Prospect),
    custom_locked_message: string,
    custom_unlocked_message: string,
    min_level: optional_int32,
    max_level: optional_int32,
    min_advanced: string,
    max_advanced: string,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}

record! {
  /// How a `Prospect` is fulfilled and what it pays out.
  pub struct Completion {
    prospect: optional_object(Prospect),
    description: string,
    satisfaction_message: string,
    qualities_affected: optional_array_of_optional_object(CompletionQEffect),
    qualities_required: optional_array_of_optional_object(CompletionQRequirement),
    id: int32,
  }
}

record! {
  /// Quality change applied when a `Completion` fires.
  pub struct CompletionQEffect {
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
  /// Condition for a `Completion`.
  pub struct CompletionQRequirement {
    min_level: optional_int32,
    max_level: optional_int32,
    min_advanced: string,
    max_advanced: string,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}
