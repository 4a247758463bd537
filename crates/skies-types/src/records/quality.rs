use crate::enums::{Category, DifficultyTestType, Nature, QualityAllowedOn};
use crate::records::{Area, Event, World};

record! {
  /// A quality: items, stats, story progress, ship equipment. Nearly
  /// everything a player can have a number of is a quality.
  pub struct Quality {
    qualities_possessed: optional_array_of_optional_object(AspectQPossession),
    relationship_capable: bool,
    plural_name: string,
    owner_name: string,
    description: string,
    image: string,
    notes: string,
    tag: string,
    cap: optional_int32,
    cap_advanced: string,
    himble_level: int32,
    use_pyramid_numbers: bool,
    pyramid_number_increase_limit: int32,
    available_at: string,
    prevent_naming: bool,
    css_classes: string,
    qeffect_priority: int32,
    qeffect_minimal_limit: optional_int32,
    world: optional_object(World),
    ordering: int32,
    is_slot: bool,
    limited_to_area: optional_object(Area),
    assign_to_slot: optional_object(Quality),
    parent_quality: optional_object(Quality),
    persistent: bool,
    visible: bool,
    enhancements: optional_array_of_optional_object(QEnhancement),
    enhancements_description: string,
    second_chance_quality: optional_object(Quality),
    use_event: optional_object(Event),
    difficulty_test_type: enum(DifficultyTestType),
    difficulty_scaler: int32,
    allowed_on: enum(QualityAllowedOn),
    /// Value 3 appears in the data without a name.
    nature: enum(Nature),
    category: enum(Category),
    level_description_text: string,
    change_description_text: string,
    descending_change_description_text: string,
    level_image_text: string,
    variable_description_text: string,
    name: string,
    id: int32,
  }
}

record! {
  /// A quality held by another quality (an aspect).
  pub struct AspectQPossession {
    quality: optional_object(Quality),
    xp: int32,
    effective_level_modifier: int32,
    target_quality: optional_object(Quality),
    target_level: optional_int32,
    completion_message: string,
    level: int32,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}

record! {
  /// Bonus a quality grants to another quality while held.
  pub struct QEnhancement {
    level: int32,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}
