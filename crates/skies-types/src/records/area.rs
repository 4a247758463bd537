use crate::records::{Quality, World};

record! {
  /// A map region. Areas group the places an `Event` can be limited to
  /// and the coordinates they occupy on the chart.
  pub struct Area {
    description: string,
    image_name: string,
    world: optional_object(World),
    market_access_permitted: bool,
    move_message: string,
    hide_name: bool,
    random_postcard: bool,
    /// Chart coordinates, in map units.
    map_x: int32,
    map_y: int32,
    unlocks_with_quality: optional_object(Quality),
    show_ops: bool,
    premium_sub_required: bool,
    name: string,
    id: int32,
  }
}
