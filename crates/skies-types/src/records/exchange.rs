use crate::records::Quality;

record! {
  /// A port's collection of shops.
  pub struct Exchange {
    name: string,
    image: string,
    title: string,
    description: string,
    shops: optional_array_of_optional_object(Shop),
    /// Settings this exchange appears in, by id.
    setting_ids: array_of_int32,
    id: int32,
  }
}

record! {
  /// A single shop within an `Exchange`.
  pub struct Shop {
    name: string,
    image: string,
    description: string,
    ordering: int32,
    exchange: optional_object(Exchange),
    availabilities: optional_array_of_optional_object(Availability),
    qualities_required: optional_array_of_optional_object(ShopQRequirement),
    id: int32,
  }
}

record! {
  /// One line of a shop's stock: what it sells or buys and for how much.
  pub struct Availability {
    quality: optional_object(Quality),
    cost: int32,
    sell_price: int32,
    in_shop: optional_object(Shop),
    purchase_quality: optional_object(Quality),
    buy_message: string,
    sell_message: string,
    sale_description: string,
    id: int32,
  }
}

record! {
  /// Condition for a `Shop` to open.
  pub struct ShopQRequirement {
    min_level: optional_int32,
    max_level: optional_int32,
    min_advanced: string,
    max_advanced: string,
    associated_quality: optional_object(Quality),
    id: int32,
  }
}
