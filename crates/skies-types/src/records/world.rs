use crate::enums::{Genre, PublishState};
use crate::records::{Setting, User};

record! {
  /// Top-level world configuration.
  pub struct World {
    general_quality_catalogue: bool,
    show_card_titles: bool,
    character_creation_page_text: string,
    end_page_text: string,
    front_page_text: string,
    custom_css: string,
    credits: string,
    description: string,
    name: string,
    domain: string,
    promoted: int32,
    default_setting: optional_object(Setting),
    facebook_auth: bool,
    twitter_auth: bool,
    email_auth: bool,
    facebook_api_key: string,
    facebook_app_id: string,
    facebook_app_secret: string,
    game_user_twitter_auth_token: string,
    game_user_twitter_auth_token_secret: string,
    twitter_consumer_key: string,
    twitter_consumer_secret: string,
    twitter_callback_url: string,
    amazon_hosted_image_url: string,
    amazon_bucket_name: string,
    style_sheet: string,
    logo_image: string,
    default_starting_setting: optional_object(Setting),
    owner: optional_object(User),
    is_portal_world: bool,
    monetizes: bool,
    payment_email_address: string,
    support_email_address: string,
    system_from_email_address: string,
    last_updated: datetime,
    update_notes: string,
    publish_state: enum(PublishState),
    genre: enum(Genre),
    id: int32,
  }
}
