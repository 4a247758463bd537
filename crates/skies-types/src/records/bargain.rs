use crate::records::{Quality, World};

record! {
  /// A time-limited trade offer at a port.
  pub struct Bargain {
    world: optional_object(World),
    tags: string,
    description: string,
    offer: optional_object(Quality),
    stock: int32,
    price: string,
    qualities_required: optional_array_of_optional_object(BargainQRequirement),
    teaser: string,
    name: string,
    id: int32,
  }
}

record! {
  /// Condition for a `Bargain` to be offered.
  pub struct BargainQRequirement {
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
