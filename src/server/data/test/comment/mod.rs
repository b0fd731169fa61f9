mod create;
mod deactivate;
mod find_active_by_post;
