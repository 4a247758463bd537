use crate::enums::{Category, EventCategory, Urgency};
use crate::records::{Area, Deck, Quality, Setting, Stub, User, World};

record! {
  /// A storylet: the unit of narrative content, with branches, quality
  /// requirements and effects.
  pub struct Event {
    child_branches: optional_array_of_optional_object(Branch),
    parent_branch: optional_object(Branch),
    qualities_affected: optional_array_of_optional_object(EventQEffect),
    qualities_required: optional_array_of_optional_object(EventQRequirement),
    image: string,
    second_image: string,
    description: string,
    tag: string,
    exotic_effects: string,
    note: string,
    challenge_level: int32,
    uncleared_edit_at: optional_datetime,
    last_edited_by: optional_object(User),
    /// Sort key; the only float in any layout.
    ordering: float32,
    show_as_message: bool,
    /// Always absent in the data.
    living_story: optional_object(Stub),
    link_to_event: optional_object(Event),
    deck: optional_object(Deck),
    category: enum(EventCategory),
    limited_to_area: optional_object(Area),
    world: optional_object(World),
    transient: bool,
    stickiness: int32,
    move_to_area_id: int32,
    move_to_area: optional_object(Area),
    /// Always absent in the data.
    move_to_domicile: optional_object(Stub),
    switch_to_setting: optional_object(Setting),
    fate_points_change: int32,
    booty_value: int32,
    log_in_journal_against_quality: optional_object(Quality),
    setting: optional_object(Setting),
    urgency: enum(Urgency),
    teaser: string,
    owner_name: string,
    date_time_created: datetime,
    distribution: int32,
    autofire: bool,
    can_go_back: bool,
    name: string,
    id: int32,
  }
}

record! {
  /// One choice inside an `Event`, with its success and failure outcomes.
  pub struct Branch {
    success_event: optional_object(Event),
    default_event: optional_object(Event),
    rare_default_event: optional_object(Event),
    rare_default_event_chance: int32,
    rare_success_event: optional_object(Event),
    rare_success_event_chance: int32,
    parent_event: optional_object(Event),
    qualities_required: optional_array_of_optional_object(BranchQRequirement),
    image: string,
    description: string,
    owner_name: string,
    date_time_created: datetime,
    currency_cost: int32,
    archived: bool,
    rename_quality_category: optional_enum(Category),
    button_text: string,
    ordering: int32,
    /// Always absent in the data.
    act: optional_object(Stub),
    action_cost: int32,
    name: string,
    id: int32,
  }
}

record! {
  /// Quality change applied when an `Event` resolves.
  pub struct EventQEffect {
    priority: optional_int32,
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
  /// Condition for an entire `Event` to be available.
  pub struct EventQRequirement {
    min_level: optional_int32,
    max_level: optional_int32,
    min_advanced: string,
    max_advanced: string,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}

record! {
  /// Condition gating a `Branch`, optionally as a skill test.
  pub struct BranchQRequirement {
    difficulty_level: optional_int32,
    difficulty_advanced: string,
    visible_when_requirement_failed: bool,
    custom_locked_message: string,
    custom_unlocked_message: string,
    is_cost_requirement: bool,
    min_level: optional_int32,
    max_level: optional_int32,
    min_advanced: string,
    max_advanced: string,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}
