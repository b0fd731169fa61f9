mod notification_count;
mod upsert;
