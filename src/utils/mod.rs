mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, date_after_days, format_date, format_timestamp, now_utc, today,
};
