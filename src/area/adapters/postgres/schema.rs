//! Diesel schema for message area persistence.

diesel::table! {
    /// Stored messages, tagged with the area they were posted to.
    messages (message_id) {
        /// Storage-assigned ascending identifier.
        message_id -> BigInt,
        /// Globally unique identifier in hyphenated form.
        #[max_length = 36]
        message_uuid -> Varchar,
        /// Lowercased area name.
        #[max_length = 100]
        area_name -> Varchar,
        /// Message this one replies to.
        reply_to_message_id -> Nullable<BigInt>,
        /// Addressee display name.
        to_user_name -> Varchar,
        /// Author display name.
        from_user_name -> Varchar,
        /// Subject line.
        subject -> Varchar,
        /// Last modification timestamp.
        modified_timestamp -> Timestamptz,
        /// View counter.
        view_count -> Integer,
    }
}

diesel::table! {
    /// Typed key/value metadata attached to messages.
    message_meta (message_id, meta_category, meta_name) {
        /// Message the metadata belongs to.
        message_id -> BigInt,
        /// Metadata namespace.
        meta_category -> Integer,
        /// Metadata key.
        #[max_length = 100]
        meta_name -> Varchar,
        /// Metadata value.
        meta_value -> Text,
    }
}

diesel::table! {
    /// Highest message id each user has read in each area.
    user_message_area_last_read (user_id, area_name) {
        /// Reader.
        user_id -> BigInt,
        /// Lowercased area name.
        #[max_length = 100]
        area_name -> Varchar,
        /// Read watermark.
        message_id -> BigInt,
    }
}

diesel::table! {
    /// Per-user persisted properties.
    user_properties (user_id, prop_name) {
        /// Owning user.
        user_id -> BigInt,
        /// Property key.
        #[max_length = 100]
        prop_name -> Varchar,
        /// Property value.
        prop_value -> Text,
    }
}
