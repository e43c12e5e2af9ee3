mod blacklist;
mod candidate;
mod server_config;
mod thx_notification;
