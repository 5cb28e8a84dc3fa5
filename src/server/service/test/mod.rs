mod addon;
mod user;
