use crate::enums::{LoggedInVia, PrivilegeLevel, UserStatus, ViaNetwork};
use crate::records::{Quality, World};

record! {
  /// Account record carried over from the engine's web heritage. Mostly
  /// empty in the shipped data.
  pub struct User {
    qualities_possessed: optional_array_of_optional_object(UserQPossession),
    name: string,
    started_in_world: optional_object(World),
    email_address: string,
    facebook_email: string,
    password_hash: string,
    confirmation_code: string,
    /// The only `int64` fields in any layout.
    twitter_id: optional_int64,
    facebook_id: optional_int64,
    google_id: string,
    google_auth_token: string,
    google_auth_token_secret: string,
    google_email: string,
    twitter_auth_token: string,
    twitter_auth_token_secret: string,
    facebook_auth_token: string,
    facebook_auth_token_secret: string,
    source: string,
    entered_via_content_id: int32,
    entered_via_character_id: int32,
    status: enum(UserStatus),
    email_verified: bool,
    echo_via_network: enum(ViaNetwork),
    message_via_network: enum(ViaNetwork),
    message_about_nastiness: bool,
    message_about_niceness: bool,
    message_about_announcements: bool,
    story_event_message: bool,
    default_privilege_level: enum(PrivilegeLevel),
    logged_in_via: enum(LoggedInVia),
    is_broadcast_target: bool,
    mystery_prize_tracking: int32,
    recruited: int32,
    temp_id: string,
    created_at: datetime,
    last_logged_in_at: optional_datetime,
    last_active_at: optional_datetime,
    ip: string,
    last_access_code: string,
    world_privileges: optional_array_of_optional_object(UserWorldPrivilege),
    sr_purchased_nex_in_lifetime: int32,
    fate_points_gained_through_game_in_lifetime: int32,
    nex: int32,
    id: int32,
  }
}

record! {
  /// A quality held by a `User`.
  pub struct UserQPossession {
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
  /// Per-world privilege grant for a `User`.
  pub struct UserWorldPrivilege {
    world: optional_object(World),
    privilege_level: enum(PrivilegeLevel),
    user: optional_object(User),
    id: int32,
  }
}
