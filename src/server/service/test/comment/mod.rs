mod create;
mod deactivate;
mod thank;
