diesel::table! {
    national_parks (id) {
        id -> Integer,
        name -> Text,
        state -> Text,
        created -> Timestamp,
        established -> Timestamp,
        picture -> Nullable<Binary>,
    }
}

diesel::table! {
    trails (id) {
        id -> Integer,
        name -> Text,
        distance -> Double,
        elevation -> Double,
        difficulty -> Text,
        date_created -> Timestamp,
        national_park_id -> Integer,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password_hash -> Text,
        role -> Text,
    }
}

diesel::joinable!(trails -> national_parks (national_park_id));

diesel::allow_tables_to_appear_in_same_query!(national_parks, trails, users);
